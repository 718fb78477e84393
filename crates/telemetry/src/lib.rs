//! telemetry - 可观测性库
//!
//! 编辑器本身不安装 metrics exporter，只通过 `metrics` facade 记录计数

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人类可读（开发环境）
    Pretty,
    /// JSON（生产环境）
    Json,
}

impl LogFormat {
    /// 按运行环境选择格式
    pub fn for_env(is_production: bool) -> Self {
        if is_production { Self::Json } else { Self::Pretty }
    }
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// 尝试初始化 tracing，已存在全局 subscriber 时返回错误而不是 panic
pub fn try_init(format: LogFormat, log_level: &str) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(log_level));
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
}
