//! crash-platform: 操作系统信号层
//!
//! 提供致命信号的一次性（one-shot）注册、故障上下文捕获、调用栈回溯
//! 与原始信号重投递。Unix 平台提供完整实现，其他平台为能力缺失的
//! 兜底实现，安装时直接报不支持。
//!
//! 处理流程：操作系统投递受监控信号 → 处理器进入时处置已恢复默认 →
//! 无堆分配地记录原始故障上下文 → 符号化并构造诊断记录 → 双通道输出 →
//! 重投递原始信号，由操作系统执行标准致命动作。处理期间发生的第二次
//! 故障不再被拦截，进程立即按默认动作终止，这是设计行为。

pub mod capture;
pub mod phase;
pub mod registrar;
pub mod reraise;
pub mod stack;

pub use phase::HandlerPhase;
pub use registrar::install;
