//! 内存实现的外部协作方
//!
//! 用于集成测试和离线检查：参考数据直接从内存返回，可配置延迟或失败；
//! 提交出口记录收到的载荷。

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use common::types::{RefId, ReferenceOption};
use errors::{AppError, AppResult};
use tokio::sync::Mutex;

use crate::domain::draft::AssetDraft;
use crate::domain::ports::{
    CodeModeProvider, QuickCreateSink, RateTableProvider, ReferenceDataProvider, SubmissionAck,
    SubmissionSink, SubmissionTarget,
};
use crate::domain::quick_create::{CreatedReference, QuickCreateRecord};
use crate::domain::reference::{CodeMode, ModelOption, ReferenceKind};
use crate::domain::value_objects::RateTable;
use crate::infrastructure::wire::AssetPayload;

/// 下拉选项与型号
#[derive(Debug, Default)]
pub struct InMemoryReferenceData {
    options: HashMap<ReferenceKind, Vec<ReferenceOption>>,
    models: Vec<ModelOption>,
    failing: HashSet<ReferenceKind>,
    models_delay: Option<Duration>,
}

impl InMemoryReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, kind: ReferenceKind, options: Vec<ReferenceOption>) -> Self {
        self.options.insert(kind, options);
        self
    }

    pub fn with_models(mut self, models: Vec<ModelOption>) -> Self {
        self.models = models;
        self
    }

    /// 该类选项加载失败
    pub fn failing(mut self, kind: ReferenceKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// 型号列表延迟返回
    pub fn with_models_delay(mut self, delay: Duration) -> Self {
        self.models_delay = Some(delay);
        self
    }
}

#[async_trait]
impl ReferenceDataProvider for InMemoryReferenceData {
    async fn list_options(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceOption>> {
        if self.failing.contains(&kind) {
            return Err(AppError::external_service(format!(
                "{} list is unavailable",
                kind.as_str()
            )));
        }
        Ok(self.options.get(&kind).cloned().unwrap_or_default())
    }

    async fn list_models(&self) -> AppResult<Vec<ModelOption>> {
        if let Some(delay) = self.models_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.models.clone())
    }
}

/// 折旧率表
#[derive(Debug, Clone)]
pub struct InMemoryRateTable {
    table: Option<RateTable>,
    delay: Option<Duration>,
}

impl InMemoryRateTable {
    pub fn new(table: RateTable) -> Self {
        Self {
            table: Some(table),
            delay: None,
        }
    }

    /// 未配置折旧率表，加载失败
    pub fn unavailable() -> Self {
        Self {
            table: None,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl RateTableProvider for InMemoryRateTable {
    async fn rate_table(&self) -> AppResult<RateTable> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.table
            .clone()
            .ok_or_else(|| AppError::external_service("rate table is unavailable"))
    }
}

/// 固定的编码模式
#[derive(Debug, Clone)]
pub struct StaticCodeMode(pub CodeMode);

#[async_trait]
impl CodeModeProvider for StaticCodeMode {
    async fn code_mode(&self) -> AppResult<CodeMode> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone)]
enum SinkResponse {
    Accept,
    Reject(String),
    Fail(String),
}

/// 记录提交内容的出口
#[derive(Debug)]
pub struct RecordingSubmissionSink {
    response: SinkResponse,
    submissions: Mutex<Vec<(SubmissionTarget, AssetPayload)>>,
}

impl RecordingSubmissionSink {
    fn with_response(response: SinkResponse) -> Self {
        Self {
            response,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::with_response(SinkResponse::Accept)
    }

    /// 业务拒绝（回执 success == false）
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::with_response(SinkResponse::Reject(message.into()))
    }

    /// 传输失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_response(SinkResponse::Fail(message.into()))
    }

    /// 收到的全部提交（含失败的）
    pub async fn submissions(&self) -> Vec<(SubmissionTarget, AssetPayload)> {
        self.submissions.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSubmissionSink {
    async fn submit(
        &self,
        target: SubmissionTarget,
        draft: &AssetDraft,
    ) -> AppResult<SubmissionAck> {
        let payload = AssetPayload::from(draft);
        self.submissions.lock().await.push((target, payload));
        match &self.response {
            SinkResponse::Accept => Ok(SubmissionAck::accepted(match target {
                SubmissionTarget::Create => "Asset created successfully".to_string(),
                SubmissionTarget::Update(id) => format!("Asset {} updated successfully", id),
            })),
            SinkResponse::Reject(message) => Ok(SubmissionAck::rejected(message.clone())),
            SinkResponse::Fail(message) => Err(AppError::external_service(message.clone())),
        }
    }
}

/// 快速新建出口，按序分配 id
#[derive(Debug)]
pub struct InMemoryQuickCreateSink {
    next_id: AtomicI64,
    fail: bool,
}

impl InMemoryQuickCreateSink {
    pub fn new(first_id: i64) -> Self {
        Self {
            next_id: AtomicI64::new(first_id),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            next_id: AtomicI64::new(0),
            fail: true,
        }
    }
}

#[async_trait]
impl QuickCreateSink for InMemoryQuickCreateSink {
    async fn create(&self, record: &QuickCreateRecord) -> AppResult<CreatedReference> {
        if self.fail {
            return Err(AppError::external_service(format!(
                "could not save {}",
                record.label()
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedReference {
            id: RefId(id),
            display_name: record.name().trim().to_string(),
        })
    }
}
