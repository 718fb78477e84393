//! 资产照片值对象

use config::UploadConfig;
use errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// 上传约束错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Photo must not exceed {0}")]
    TooLarge(String),
    #[error("Photo type {0} is not allowed")]
    DisallowedType(String),
    #[error("Photo file name is empty")]
    EmptyName,
}

/// 上传策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    max_bytes: u64,
    allowed_types: Vec<String>,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64, allowed_types: Vec<String>) -> Self {
        Self {
            max_bytes,
            allowed_types: allowed_types
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn allows_type(&self, content_type: &str) -> bool {
        let content_type = content_type.trim().to_lowercase();
        self.allowed_types.iter().any(|t| *t == content_type)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        UploadPolicy::from(&UploadConfig::default())
    }
}

impl From<&UploadConfig> for UploadPolicy {
    fn from(config: &UploadConfig) -> Self {
        Self::new(config.max_photo_bytes, config.allowed_photo_types.clone())
    }
}

/// 已选择的照片（仅元数据，内容由上传通道处理）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl PhotoAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }

    /// 按上传策略检查
    pub fn check(&self, policy: &UploadPolicy) -> Result<(), AttachmentError> {
        if self.file_name.trim().is_empty() {
            return Err(AttachmentError::EmptyName);
        }
        if self.size_bytes > policy.max_bytes() {
            return Err(AttachmentError::TooLarge(format_size(policy.max_bytes())));
        }
        if !policy.allows_type(&self.content_type) {
            return Err(AttachmentError::DisallowedType(self.content_type.clone()));
        }
        Ok(())
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

impl From<AttachmentError> for AppError {
    fn from(err: AttachmentError) -> Self {
        AppError::validation(err.to_string())
    }
}
