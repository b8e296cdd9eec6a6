//! crash-core: 崩溃报告核心库
//!
//! 提供与操作系统无关的崩溃诊断数据模型、信号成因映射与双通道报告输出。
//! 信号注册、故障上下文捕获等平台相关逻辑见 crash-platform。

pub mod config;
pub mod error;
pub mod report;
pub mod signal;
pub mod sink;

// 重新导出主要类型
pub use config::{MAX_FRAMES, ReporterConfig};
pub use error::CrashError;
pub use report::{CrashReport, StackFrame};
pub use signal::SignalKind;
pub use sink::{DurableLog, SinkOutcome, emit};
