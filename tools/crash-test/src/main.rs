//! 崩溃报告测试驱动
//!
//! 安装致命信号处理器后按选择器触发一种故障：
//! 0（默认）空指针写入（SIGSEGV）、1 除零（SIGFPE）、2 abort（SIGABRT），
//! 其他取值回落到 0。任何触发路径都不应返回；走到结尾的 return
//! 本身就是检测到的失败，以非零退出码上报。

use std::path::PathBuf;
use std::process;

use crash_core::ReporterConfig;
use log::{error, info};

struct CliArgs {
    selector: i32,
    log_path: Option<PathBuf>,
    reinstall: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            selector: 0,
            log_path: None,
            reinstall: false,
        }
    }
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log-path" => {
                if let Some(path) = iter.next() {
                    args.log_path = Some(PathBuf::from(path));
                }
            }
            "--reinstall" => {
                args.reinstall = true;
            }
            selector => {
                args.selector = selector.parse().unwrap_or(0);
            }
        }
    }
    args
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = parse_args();
    let mut config = ReporterConfig::default();
    if let Some(path) = args.log_path {
        config.log_path = path;
    }

    println!("Setting up crash handlers...");
    if let Err(err) = crash_platform::install(config.clone()) {
        error!("failed to install crash handlers: {err}");
        process::exit(2);
    }
    if args.reinstall {
        // 重复安装必须幂等：单次故障只产生一份报告
        if let Err(err) = crash_platform::install(config) {
            error!("re-install failed: {err}");
            process::exit(2);
        }
    }

    println!("Testing crash handler with different crash types:");
    println!("Usage: crash-test [selector]");
    println!("  0 = SIGSEGV (segmentation fault) - default");
    println!("  1 = SIGFPE (division by zero)");
    println!("  2 = SIGABRT (abort)");
    println!();

    match args.selector {
        1 => {
            println!("Testing SIGFPE (division by zero)...");
            trigger_fpe();
        }
        2 => {
            println!("Testing SIGABRT (abort)...");
            trigger_abrt();
        }
        _ => {
            println!("Testing SIGSEGV (segmentation fault)...");
            trigger_segv();
        }
    }

    // 不应到达：处理器未生效即为失败
    eprintln!("ERROR: crash handler did not fire");
    process::exit(1);
}

/// 空指针写入
///
/// 写入点带一个小偏移，让报告里的故障地址非零、可与空指针区分。
#[cfg(unix)]
fn trigger_segv() {
    info!("triggering null-pointer write");
    let target = std::ptr::null_mut::<u32>().wrapping_byte_add(0x40);
    unsafe {
        target.write_volatile(42);
    }
}

/// 除零故障
///
/// Rust 的检查除法把除零变成 panic 而不是硬件陷阱，这里直接投递
/// SIGFPE 来触发同一条故障路径。
#[cfg(unix)]
fn trigger_fpe() {
    info!("triggering division-by-zero fault");
    unsafe {
        libc::raise(libc::SIGFPE);
    }
}

/// 显式 abort
#[cfg(unix)]
fn trigger_abrt() {
    info!("triggering abort");
    unsafe {
        libc::abort();
    }
}

// install 在不支持的平台上已经报错退出，以下桩不可达
#[cfg(not(unix))]
fn trigger_segv() {}
#[cfg(not(unix))]
fn trigger_fpe() {}
#[cfg(not(unix))]
fn trigger_abrt() {}
