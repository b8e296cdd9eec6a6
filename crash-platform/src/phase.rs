//! 处理流程状态机
//!
//! 状态集合 {Armed, Handling, Reraising, Terminated}，安装完成后为
//! Armed。Handling 之后没有回到 Armed 的路径，也没有重试：处置在
//! 处理器进入前已恢复默认，处理期间的故障不可再拦截。Terminated
//! 由操作系统的默认动作达成，进程内观察不到。

use std::sync::atomic::{AtomicU8, Ordering};

/// 处理流程阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HandlerPhase {
    /// 安装完成，等待故障
    Armed = 0,
    /// 正在故障线程上同步处理
    Handling = 1,
    /// 报告输出完毕，重投递中
    Reraising = 2,
    /// 操作系统已执行默认致命动作（进程内不可观察，仅为完整性保留）
    Terminated = 3,
}

static PHASE: AtomicU8 = AtomicU8::new(HandlerPhase::Armed as u8);

/// 当前阶段
pub fn current() -> HandlerPhase {
    match PHASE.load(Ordering::SeqCst) {
        1 => HandlerPhase::Handling,
        2 => HandlerPhase::Reraising,
        3 => HandlerPhase::Terminated,
        _ => HandlerPhase::Armed,
    }
}

/// 推进状态机（仅限本 crate 的安装与处理路径调用）
pub(crate) fn advance(next: HandlerPhase) {
    PHASE.store(next as u8, Ordering::SeqCst);
}
