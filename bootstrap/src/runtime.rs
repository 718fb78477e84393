//! 运行时初始化

use config::AppConfig;
use errors::{AppError, AppResult};
use telemetry::{LogFormat, try_init};
use tracing::info;

/// 运行时配置
pub struct RuntimeConfig {
    pub config_dir: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            config_dir: "config".to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }
}

/// 初始化运行时
///
/// 生产环境输出 JSON 日志；重复初始化（例如测试中）只记录一次告警
pub fn init_runtime(config: &AppConfig) {
    let format = LogFormat::for_env(config.is_production());
    if let Err(e) = try_init(format, &config.telemetry.log_level) {
        tracing::warn!(error = %e, "Tracing subscriber already installed");
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}

/// 加载配置并初始化运行时
pub fn load_runtime(runtime: &RuntimeConfig) -> AppResult<AppConfig> {
    let config = AppConfig::load(&runtime.config_dir)
        .map_err(|e| AppError::internal(format!("config load failed: {e}")))?;
    init_runtime(&config);
    Ok(config)
}
