//! 崩溃报告器配置
//!
//! 持久化日志路径与调用栈深度上限。配置在安装时固定，
//! 处理器上下文中只读不写。

use std::path::PathBuf;

/// 调用栈捕获帧数上限
///
/// 处理器内的原始捕获缓冲区按此定长预留，保证捕获在有界时间内完成。
pub const MAX_FRAMES: usize = 50;

/// 崩溃报告器配置
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// 持久化崩溃日志路径（追加模式写入）
    pub log_path: PathBuf,
    /// 调用栈捕获帧数上限，不超过 [`MAX_FRAMES`]
    pub max_frames: usize,
}

impl ReporterConfig {
    /// 实际生效的帧数上限
    pub fn frame_limit(&self) -> usize {
        self.max_frames.min(MAX_FRAMES)
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            log_path: std::env::temp_dir().join("crash-report.log"),
            max_frames: MAX_FRAMES,
        }
    }
}
