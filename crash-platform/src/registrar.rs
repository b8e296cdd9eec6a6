//! 信号注册器
//!
//! 操作系统的全局信号处置表是不可避免的全局可变状态，全部安装调用
//! 收敛到这里，对外暴露幂等语义。参照 vm-platform 的做法直接使用
//! libc sigaction，one-shot 处置（SA_RESETHAND）保证处理器进入前
//! 处置已恢复默认，杜绝递归处理。

use std::sync::OnceLock;

use crash_core::{CrashError, ReporterConfig};

use crate::phase::{self, HandlerPhase};

/// 安装时固定的配置，处理器上下文中只读
static CONFIG: OnceLock<ReporterConfig> = OnceLock::new();

/// 已安装的配置（未安装时为 None）
pub(crate) fn config() -> Option<&'static ReporterConfig> {
    CONFIG.get()
}

/// 受监控信号的符号名称
#[cfg(unix)]
fn signal_name(signal: i32) -> &'static str {
    crate::capture::kind_from_raw(signal).name()
}

/// 为受监控的致命信号集合注册 one-shot 处理器
///
/// 幂等：重复调用只是重新注册（同一信号以最后一次为准），单次投递
/// 不会触发两次处理。注册被操作系统拒绝属于配置错误，返回给调用方。
/// 配置在首次安装时固定，后续调用不更换配置。
#[cfg(unix)]
pub fn install(config: ReporterConfig) -> Result<(), CrashError> {
    let _ = CONFIG.set(config);

    for signal in [libc::SIGSEGV, libc::SIGBUS, libc::SIGABRT, libc::SIGFPE] {
        // SA_SIGINFO 获取故障地址，SA_RESETHAND 进入处理器前恢复默认处置，
        // 阻塞掩码为空
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = crate::capture::fault_handler as usize;
            action.sa_flags = libc::SA_SIGINFO | libc::SA_RESETHAND;
            libc::sigemptyset(&mut action.sa_mask);

            if libc::sigaction(signal, &action, std::ptr::null_mut()) != 0 {
                let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
                return Err(CrashError::Registration {
                    signal: signal_name(signal),
                    errno,
                });
            }
        }
    }

    phase::advance(HandlerPhase::Armed);
    log::debug!("crash handlers installed for SIGSEGV/SIGBUS/SIGABRT/SIGFPE");
    Ok(())
}

/// 兜底实现：当前平台没有信号拦截能力
#[cfg(not(unix))]
pub fn install(config: ReporterConfig) -> Result<(), CrashError> {
    let _ = CONFIG.set(config);
    Err(CrashError::Unsupported)
}
