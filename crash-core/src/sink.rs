//! 报告输出通道
//!
//! 短暂通道（stderr）总是收到完整报告；持久化通道（追加模式日志文件）
//! 尽力而为，打开或写入失败只降级、不阻断短暂通道。两个不同信号种类
//! 在不同线程上并发追加同一日志文件时可能交错，依赖 O_APPEND 的
//! 原子追加语义，不引入额外锁：处理器上下文中加锁本身不安全。

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use crate::report::CrashReport;

/// 报告分隔横幅
const BANNER: &str = "========================================";

/// 持久化日志通道
///
/// 作用域式持有文件句柄，任何退出路径都在离开作用域时释放。
#[derive(Debug)]
pub struct DurableLog {
    file: File,
    path: PathBuf,
}

impl DurableLog {
    /// 以追加模式打开持久化日志
    ///
    /// 打开失败返回 None（降级），由调用方决定报告中是否带日志路径。
    pub fn open(path: &Path) -> Option<Self> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .ok()
            .map(|file| Self {
                file,
                path: path.to_path_buf(),
            })
    }

    /// 日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 单次输出的结果
#[derive(Debug, Clone, Copy)]
pub struct SinkOutcome {
    /// 持久化通道是否完整写入
    pub durable_ok: bool,
}

/// 把报告写入两个通道
///
/// stderr 无条件收到完整渲染；持久化日志仅在句柄存在时写入结构化
/// 字段（不含修复指引），失败静默降级。
pub fn emit(report: &CrashReport, durable: Option<DurableLog>) -> SinkOutcome {
    let text = render_ephemeral(report);
    let mut stderr = io::stderr();
    let _ = stderr.write_all(text.as_bytes());
    let _ = stderr.flush();

    let durable_ok = match durable {
        Some(mut log) => log.file.write_all(render_durable(report).as_bytes()).is_ok(),
        None => false,
    };
    SinkOutcome { durable_ok }
}

/// 渲染短暂通道的完整报告文本
pub fn render_ephemeral(report: &CrashReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "CRASH DETECTED");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Time: {}", report.timestamp);
    let _ = writeln!(out, "Signal: {}", report.kind);
    let _ = writeln!(out, "Cause: {}", report.cause);
    if let Some(addr) = report.fault_addr {
        let _ = writeln!(out, "Fault address: {addr:#x}");
    }
    render_stack(&mut out, report);
    let _ = writeln!(out);
    let _ = writeln!(out, "To help fix this issue, please:");
    let _ = writeln!(out, "1. Note what you were doing when the crash occurred");
    let _ = writeln!(out, "2. Check if you can reproduce the crash");
    let _ = writeln!(out, "3. Report the issue to the project maintainers");
    let _ = writeln!(
        out,
        "4. Include this crash information and the crash log file (if created)"
    );
    if let Some(path) = &report.log_path {
        let _ = writeln!(out);
        let _ = writeln!(out, "Crash log written to: {}", path.display());
    }
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    out
}

/// 渲染持久化日志文本：同样的结构化字段，不含修复指引，尾部带闭合横幅
pub fn render_durable(report: &CrashReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "CRASH LOG");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Time: {}", report.timestamp);
    let _ = writeln!(out, "Signal: {}", report.kind);
    if let Some(addr) = report.fault_addr {
        let _ = writeln!(out, "Fault address: {addr:#x}");
    }
    render_stack(&mut out, report);
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    out
}

fn render_stack(out: &mut String, report: &CrashReport) {
    if report.frames.is_empty() {
        // 平台不支持回溯或捕获失败：省略整个小节，不是错误
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Stack trace ({} frames):", report.frames.len());
    for frame in &report.frames {
        let _ = writeln!(out, "  [{:2}] {}", frame.index, frame.text);
    }
}
