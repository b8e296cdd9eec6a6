//! 故障上下文捕获与处理器入口
//!
//! 捕获分两步：处理器先把信号编号、故障地址和原始返回地址写进
//! 定长的 [`RawCapture`]（无堆分配），再符号化并构造不可变的
//! [`CrashReport`]。符号化、格式化与文件写入沿用原始行为直接在
//! 处理器内完成，见 DESIGN.md 的取舍记录。

use crash_core::{CrashReport, MAX_FRAMES, SignalKind};

use crate::stack;

/// 处理器内填充的原始故障记录，定长、无堆分配
#[derive(Debug)]
pub struct RawCapture {
    /// 原始信号编号
    pub signal: i32,
    /// 故障地址（仅地址相关信号且 siginfo 存在时）
    pub fault_addr: Option<usize>,
    /// 原始返回地址缓冲区
    pub frames: [usize; MAX_FRAMES],
    /// 实际捕获深度
    pub depth: usize,
}

impl RawCapture {
    fn new(signal: i32) -> Self {
        Self {
            signal,
            fault_addr: None,
            frames: [0; MAX_FRAMES],
            depth: 0,
        }
    }
}

/// 原始信号编号到信号种类的映射
#[cfg(unix)]
pub fn kind_from_raw(signal: i32) -> SignalKind {
    match signal {
        libc::SIGSEGV => SignalKind::Segv,
        libc::SIGBUS => SignalKind::Bus,
        libc::SIGABRT => SignalKind::Abrt,
        libc::SIGFPE => SignalKind::Fpe,
        other => SignalKind::Other(other),
    }
}

/// 由原始捕获构造诊断记录
///
/// `log_path` 由调用方按持久化通道的打开结果给出。
pub fn build_report(raw: &RawCapture, log_path: Option<std::path::PathBuf>) -> CrashReport {
    #[cfg(unix)]
    let kind = kind_from_raw(raw.signal);
    #[cfg(not(unix))]
    let kind = SignalKind::Other(raw.signal);

    let frames = stack::symbolize(&raw.frames[..raw.depth]);
    CrashReport::new(kind, raw.fault_addr, frames, log_path)
}

/// 致命信号处理器
///
/// 进入时该信号的处置已被 SA_RESETHAND 恢复为默认：处理期间的第二次
/// 故障不再被拦截，进程立即终止，不产生第二份报告。必须容忍空的
/// siginfo。每次投递恰好产生一份报告。
#[cfg(unix)]
pub(crate) extern "C" fn fault_handler(
    signal: libc::c_int,
    info: *mut libc::siginfo_t,
    _context: *mut std::ffi::c_void,
) {
    use crate::phase::{self, HandlerPhase};

    phase::advance(HandlerPhase::Handling);

    // 未经 install 不可能走到这里；拿不到配置时直接交还默认动作
    let Some(config) = crate::registrar::config() else {
        crate::reraise::finish(signal);
        return;
    };

    let mut raw = RawCapture::new(signal);
    // si_code > 0 才是内核因硬件故障填充的 siginfo，此时 si_addr 有意义；
    // 用户态 raise/kill 投递的信号里该联合体存放的是 pid/uid
    if !info.is_null()
        && kind_from_raw(signal).carries_address()
        && unsafe { (*info).si_code } > 0
    {
        // siginfo 的地址字段在 Linux 上是方法，在其他 Unix 上是字段
        #[cfg(target_os = "linux")]
        {
            raw.fault_addr = Some(unsafe { (*info).si_addr() } as usize);
        }
        #[cfg(not(target_os = "linux"))]
        {
            raw.fault_addr = Some(unsafe { (*info).si_addr } as usize);
        }
    }
    let limit = config.frame_limit();
    raw.depth = stack::record_return_addresses(&mut raw.frames[..limit]);

    let durable = crash_core::DurableLog::open(&config.log_path);
    let report = build_report(&raw, durable.as_ref().map(|log| log.path().to_path_buf()));
    let _outcome = crash_core::emit(&report, durable);

    crate::reraise::finish(signal);
}
