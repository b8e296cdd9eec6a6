//! 调用栈捕获策略
//!
//! 按平台能力选择实现：Unix 用 backtrace crate 做有界回溯，原始地址
//! 记录与符号解析分成两步；其他平台为空实现，返回空栈。捕获失败或
//! 栈为空不是错误，报告照常输出。

use crash_core::StackFrame;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        /// 把当前线程的返回地址写入定长缓冲区，返回实际深度
        ///
        /// 不做符号解析、不做堆分配，缓冲区长度即帧数上限，
        /// 保证在处理器上下文中有界完成。
        pub fn record_return_addresses(frames: &mut [usize]) -> usize {
            let mut depth = 0;
            backtrace::trace(|frame| {
                if depth >= frames.len() {
                    return false;
                }
                frames[depth] = frame.ip() as usize;
                depth += 1;
                true
            });
            depth
        }

        /// 尽力把返回地址解析为符号文本
        ///
        /// 解析不到符号的帧退化为十六进制原始地址。
        pub fn symbolize(addresses: &[usize]) -> Vec<StackFrame> {
            let mut frames = Vec::with_capacity(addresses.len());
            for (index, &address) in addresses.iter().enumerate() {
                let mut text = String::new();
                backtrace::resolve(address as *mut std::ffi::c_void, |symbol| {
                    if text.is_empty()
                        && let Some(name) = symbol.name()
                    {
                        text = format!("{name} ({address:#x})");
                    }
                });
                if text.is_empty() {
                    text = format!("{address:#x}");
                }
                frames.push(StackFrame { index, text });
            }
            frames
        }
    } else {
        /// 兜底实现：平台不支持回溯，栈为空
        pub fn record_return_addresses(_frames: &mut [usize]) -> usize {
            0
        }

        /// 兜底实现：没有可解析的地址
        pub fn symbolize(_addresses: &[usize]) -> Vec<StackFrame> {
            Vec::new()
        }
    }
}
