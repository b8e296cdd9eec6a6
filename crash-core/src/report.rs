//! 崩溃诊断记录
//!
//! 每次信号投递恰好构造一份 [`CrashReport`]，构造后不再修改，
//! 输出完成即丢弃。可选字段缺失是合法状态，不是错误。

use std::path::PathBuf;

use crate::signal::SignalKind;

/// 单帧调用栈描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// 帧序号（0 起始）
    pub index: usize,
    /// 符号化文本；解析失败时为原始返回地址
    pub text: String,
}

/// 一次致命信号对应的不可变诊断记录
#[derive(Debug, Clone)]
pub struct CrashReport {
    /// 信号种类
    pub kind: SignalKind,
    /// 成因文本，由信号种类确定性导出
    pub cause: &'static str,
    /// 本地墙钟时间，秒级精度
    pub timestamp: String,
    /// 故障地址；仅地址相关信号且操作系统提供时存在
    pub fault_addr: Option<usize>,
    /// 调用栈；平台不支持回溯或回溯失败时为空
    pub frames: Vec<StackFrame>,
    /// 持久化日志路径；仅持久化通道成功打开时存在
    pub log_path: Option<PathBuf>,
}

impl CrashReport {
    /// 构造诊断记录
    ///
    /// 非地址相关信号的 `fault_addr` 会被丢弃，保证字段语义一致。
    pub fn new(
        kind: SignalKind,
        fault_addr: Option<usize>,
        frames: Vec<StackFrame>,
        log_path: Option<PathBuf>,
    ) -> Self {
        Self {
            kind,
            cause: kind.cause(),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            fault_addr: fault_addr.filter(|_| kind.carries_address()),
            frames,
            log_path,
        }
    }
}
