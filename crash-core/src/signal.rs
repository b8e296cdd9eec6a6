//! 信号种类与成因映射
//!
//! 把受监控的致命信号映射为符号名称和面向用户的成因文本

use std::fmt;

/// 受监控的致命信号种类
///
/// `Other` 保留未分类信号的原始编号，报告时按编号展示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// 段错误（非法内存访问）
    Segv,
    /// 总线错误（对齐错误或访问不存在的内存）
    Bus,
    /// 中止（abort 调用或断言失败）
    Abrt,
    /// 算术异常（除零等）
    Fpe,
    /// 其他未分类信号
    Other(i32),
}

impl SignalKind {
    /// 符号名称，如 "SIGSEGV"
    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Segv => "SIGSEGV",
            SignalKind::Bus => "SIGBUS",
            SignalKind::Abrt => "SIGABRT",
            SignalKind::Fpe => "SIGFPE",
            SignalKind::Other(_) => "UNKNOWN",
        }
    }

    /// 信号的简短说明，用于报告的 Signal 行
    pub fn description(&self) -> &'static str {
        match self {
            SignalKind::Segv => "segmentation fault",
            SignalKind::Bus => "bus error",
            SignalKind::Abrt => "abort",
            SignalKind::Fpe => "floating point exception",
            SignalKind::Other(_) => "unknown signal",
        }
    }

    /// 面向用户的成因文本，按信号种类确定性地给出
    pub fn cause(&self) -> &'static str {
        match self {
            SignalKind::Segv => {
                "memory access violation (invalid pointer, buffer overflow, etc.)"
            }
            SignalKind::Bus => "invalid memory alignment or access to non-existent memory",
            SignalKind::Abrt => "program aborted or assertion failed",
            SignalKind::Fpe => "division by zero or invalid floating-point operation",
            SignalKind::Other(_) => "unknown crash",
        }
    }

    /// 该信号种类是否携带故障地址
    ///
    /// 只有 SEGV/BUS/FPE 的 siginfo 中的地址字段有意义。
    pub fn carries_address(&self) -> bool {
        matches!(self, SignalKind::Segv | SignalKind::Bus | SignalKind::Fpe)
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Other(n) => write!(f, "signal {n}"),
            _ => write!(f, "{} ({})", self.name(), self.description()),
        }
    }
}
