//! 提交出口接口

use async_trait::async_trait;
use errors::AppResult;
use serde::{Deserialize, Serialize};

use crate::domain::draft::AssetDraft;
use crate::domain::quick_create::{CreatedReference, QuickCreateRecord};
use crate::domain::value_objects::AssetId;

/// 提交目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTarget {
    Create,
    Update(AssetId),
}

/// 提交回执
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub success: bool,
    pub message: String,
}

impl SubmissionAck {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// 资产提交出口
///
/// 传输失败返回 `AppError::ExternalService`；业务拒绝返回 `success == false` 的回执
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, target: SubmissionTarget, draft: &AssetDraft)
        -> AppResult<SubmissionAck>;
}

/// 快速新建出口（分类 / 位置 / 品牌 / 型号 / 供应商）
#[async_trait]
pub trait QuickCreateSink: Send + Sync {
    async fn create(&self, record: &QuickCreateRecord) -> AppResult<CreatedReference>;
}
