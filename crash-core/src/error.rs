//! 崩溃报告子系统错误类型
//!
//! 只有信号注册阶段的失败会返回给调用方；故障处理开始之后
//! 不存在回到正常控制流的错误路径。捕获降级（空调用栈）和
//! 持久化日志写入失败都以数据形式表达，不算错误。

use thiserror::Error;

/// 崩溃报告子系统错误
#[derive(Debug, Error)]
pub enum CrashError {
    /// 信号注册被操作系统拒绝（配置错误，安装阶段上报）
    #[error("failed to register handler for {signal}: errno {errno}")]
    Registration {
        /// 信号符号名称
        signal: &'static str,
        /// 操作系统错误码
        errno: i32,
    },
    /// 当前平台不支持致命信号拦截
    #[error("fatal-signal interception is not supported on this platform")]
    Unsupported,
}
