//! config - 配置加载库

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀，层级使用双下划线分隔（如 `FAMS_UPLOAD__MAX_PHOTO_BYTES`）
pub const ENV_PREFIX: &str = "FAMS_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// 上传配置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// 资产照片大小上限（字节）
    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: u64,
    /// 允许的照片 MIME 类型
    #[serde(default = "default_allowed_photo_types")]
    pub allowed_photo_types: Vec<String>,
}

fn default_max_photo_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_allowed_photo_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/jpg".to_string(),
        "image/png".to_string(),
    ]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_photo_bytes: default_max_photo_bytes(),
            allowed_photo_types: default_allowed_photo_types(),
        }
    }
}

/// 参考数据加载配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceDataConfig {
    /// 单次加载超时（秒）
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,
}

fn default_load_timeout_secs() -> u64 {
    30
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            load_timeout_secs: default_load_timeout_secs(),
        }
    }
}

/// 编辑器配置
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// 提示信息中日期的显示格式
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,
}

fn default_display_date_format() -> String {
    "%d-%m-%Y".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            display_date_format: default_display_date_format(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub reference_data: ReferenceDataConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// 从 TOML 字符串加载（不读取环境变量）
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(Figment::new().merge(Toml::string(toml)).extract()?)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
