//! 重投递原始信号
//!
//! 处置在处理器进入前已恢复默认，重投递后由操作系统执行标准致命
//! 动作（终止进程，视配置产生 core dump），与从未拦截过完全一致。
//! 这是终止性操作：此后本子系统不再有任何逻辑执行。

use crate::phase::{self, HandlerPhase};

/// 重投递原始信号，交还操作系统的默认致命动作
///
/// raise 之后信号处于 pending 状态，处理器返回时投递并按默认处置
/// 终止进程（Reraising → Terminated 由操作系统完成）。
#[cfg(unix)]
pub fn finish(signal: i32) {
    phase::advance(HandlerPhase::Reraising);
    unsafe {
        libc::raise(signal);
    }
}

/// 兜底实现：没有可重投递的信号机制
#[cfg(not(unix))]
pub fn finish(_signal: i32) {
    phase::advance(HandlerPhase::Reraising);
}
