//! 参考数据提供方接口

use async_trait::async_trait;
use common::types::ReferenceOption;
use errors::AppResult;

use crate::domain::reference::{CodeMode, ModelOption, ReferenceKind};
use crate::domain::value_objects::RateTable;

/// 下拉选项提供方（编辑器打开时只读加载一次）
#[async_trait]
pub trait ReferenceDataProvider: Send + Sync {
    /// 加载某一类选项
    async fn list_options(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceOption>>;

    /// 加载全部型号（含所属品牌）
    async fn list_models(&self) -> AppResult<Vec<ModelOption>>;
}

/// 折旧率表提供方
#[async_trait]
pub trait RateTableProvider: Send + Sync {
    async fn rate_table(&self) -> AppResult<RateTable>;
}

/// 资产编码模式提供方
#[async_trait]
pub trait CodeModeProvider: Send + Sync {
    async fn code_mode(&self) -> AppResult<CodeMode>;
}
