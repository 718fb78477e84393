//! 资产编辑会话
//!
//! 把草稿存储、联动、校验、向导和参考数据串成一次完整的编辑流程。
//! 每个用户事件（编辑、下一步、提交）或每条迟到的参考数据都是一次完整的结算：
//! 修改 → 联动 → 对已触及的分区重新校验。

use std::collections::BTreeSet;
use std::time::Duration;

use common::utils::DEFAULT_DISPLAY_DATE_FORMAT;
use config::AppConfig;
use errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::application::draft_store::{DraftStore, Settled};
use crate::application::loader::{LoaderEvent, ReferenceLoader};
use crate::application::metrics;
use crate::application::navigator::{SUBMISSION_SECTIONS, SectionNavigator, Transition};
use crate::application::propagation::DependencyPropagator;
use crate::application::validation::{ValidationContext, ValidationEngine};
use crate::domain::draft::{AssetDraft, SectionData};
use crate::domain::enums::CodeType;
use crate::domain::error_map::ErrorMap;
use crate::domain::fields::{Field, FieldEdit, Section};
use crate::domain::ports::{QuickCreateSink, SubmissionSink, SubmissionTarget};
use crate::domain::quick_create::{CreatedReference, QuickCreateRecord};
use crate::domain::reference::{CodeMode, ModelOption, ReferenceCatalog, ReferenceLoad};
use crate::domain::value_objects::{AssetId, UploadPolicy};

/// 会话类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(AssetId),
}

impl EditorMode {
    pub fn is_create(&self) -> bool {
        matches!(self, EditorMode::Create)
    }

    pub fn target(&self) -> SubmissionTarget {
        match self {
            EditorMode::Create => SubmissionTarget::Create,
            EditorMode::Edit(id) => SubmissionTarget::Update(*id),
        }
    }
}

/// 编辑器设置（来自应用配置）
#[derive(Debug, Clone)]
pub struct EditorSettings {
    pub upload_policy: UploadPolicy,
    pub date_format: String,
    pub load_timeout: Duration,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            upload_policy: UploadPolicy::default(),
            date_format: DEFAULT_DISPLAY_DATE_FORMAT.to_string(),
            load_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&AppConfig> for EditorSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            upload_policy: UploadPolicy::from(&config.upload),
            date_format: config.editor.display_date_format.clone(),
            load_timeout: Duration::from_secs(config.reference_data.load_timeout_secs),
        }
    }
}

/// 非阻塞提示（外部协作方失败）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    /// 校验未通过，错误已写入对应分区
    Blocked(ErrorMap),
    /// 提交出口失败，草稿和当前步骤保持不变
    Failed(Notification),
}

pub struct EditorSession {
    mode: EditorMode,
    settings: EditorSettings,
    store: DraftStore,
    catalog: ReferenceCatalog,
    navigator: SectionNavigator,
    touched: BTreeSet<Section>,
    code_locked: bool,
    notifications: Vec<Notification>,
}

fn engine<'a>(catalog: &'a ReferenceCatalog, settings: &'a EditorSettings) -> ValidationEngine<'a> {
    ValidationEngine::new(ValidationContext {
        catalog,
        upload_policy: &settings.upload_policy,
        date_format: &settings.date_format,
    })
}

impl EditorSession {
    /// 新建资产
    pub fn create(settings: EditorSettings) -> Self {
        Self::open(EditorMode::Create, AssetDraft::default(), settings)
    }

    /// 编辑已有资产
    pub fn hydrate(id: AssetId, draft: AssetDraft, settings: EditorSettings) -> Self {
        info!(asset_id = %id, "Editing existing asset");
        Self::open(EditorMode::Edit(id), draft, settings)
    }

    /// 以给定草稿打开会话
    pub fn open(mode: EditorMode, draft: AssetDraft, settings: EditorSettings) -> Self {
        Self {
            mode,
            settings,
            store: DraftStore::hydrate(draft),
            catalog: ReferenceCatalog::new(),
            navigator: SectionNavigator::new(),
            touched: BTreeSet::new(),
            code_locked: false,
            notifications: Vec::new(),
        }
    }

    // ========== 查询 ==========

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn draft(&self) -> &AssetDraft {
        self.store.draft()
    }

    pub fn errors(&self) -> &ErrorMap {
        self.store.errors()
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn current_section(&self) -> Section {
        self.navigator.current()
    }

    pub fn is_code_locked(&self) -> bool {
        self.code_locked
    }

    pub fn is_touched(&self, section: Section) -> bool {
        self.touched.contains(&section)
    }

    /// 所选品牌下可选的型号；型号列表未加载时为 `None`
    pub fn filtered_models(&self) -> Option<Vec<&ModelOption>> {
        self.catalog
            .models_for_brand(self.store.draft().asset_details().brand)
    }

    // ========== 编辑 ==========

    /// 编辑单个字段；编码被锁定时忽略对编码的修改
    pub fn edit(&mut self, edit: FieldEdit) -> Option<Settled> {
        if self.code_locked && matches!(edit, FieldEdit::Code(_)) {
            debug!("Asset code is generated by the system, edit ignored");
            return None;
        }
        let propagator = DependencyPropagator::new(&self.catalog);
        let settled = self.store.set_field(edit, &propagator);
        self.touched.insert(settled.edited);
        self.revalidate(settled.affected_sections());
        Some(settled)
    }

    /// 整体替换一个分区；编码被锁定时保留当前编码
    pub fn replace_section(&mut self, mut data: SectionData) -> Settled {
        if let (true, SectionData::AssetDetails(details)) = (self.code_locked, &mut data) {
            details.code = self.store.draft().asset_details().code.clone();
        }
        let propagator = DependencyPropagator::new(&self.catalog);
        let settled = self.store.replace_section(data, &propagator);
        self.touched.insert(settled.edited);
        self.revalidate(settled.affected_sections());
        settled
    }

    /// 对整份草稿重算一次派生字段（打开已有记录或批量导入后调用）
    pub fn settle_all(&mut self) -> Vec<Field> {
        let propagator = DependencyPropagator::new(&self.catalog);
        let derived = self.store.settle_all(&propagator);
        if !derived.is_empty() {
            debug!(derived = ?derived, "Settled opened draft");
        }
        self.revalidate(Section::ALL);
        derived
    }

    /// 对已触及的分区重新校验
    fn revalidate(&mut self, sections: impl IntoIterator<Item = Section>) {
        let engine = engine(&self.catalog, &self.settings);
        for section in sections {
            if !self.touched.contains(&section) {
                continue;
            }
            let errors = engine.validate(section, self.store.draft());
            self.store.set_errors(section, errors);
        }
    }

    // ========== 参考数据 ==========

    /// 处理一条到达的参考数据
    pub fn apply_reference(&mut self, load: ReferenceLoad) {
        debug!(reference = load.label(), "Reference data arrived");
        self.catalog.store(load.clone());

        if let ReferenceLoad::CodeMode(mode) = &load {
            self.apply_code_mode(mode);
        }

        let propagator = DependencyPropagator::new(&self.catalog);
        let derived = self.store.apply_reference(&load, &propagator);
        if !derived.is_empty() {
            debug!(reference = load.label(), derived = ?derived, "Re-derived after late arrival");
        }
        self.revalidate(Section::ALL);
    }

    fn apply_code_mode(&mut self, mode: &CodeMode) {
        self.code_locked = !mode.code_type.requires_code();
        if !self.mode.is_create() {
            return;
        }
        let code = match mode.code_type {
            CodeType::Auto => mode.next_code.clone().unwrap_or_default(),
            CodeType::Manual => String::new(),
        };
        let propagator = DependencyPropagator::new(&self.catalog);
        self.store.set_field(FieldEdit::Code(code), &propagator);
    }

    /// 参考数据加载失败：只提示，不影响草稿
    pub fn reference_failed(&mut self, kind: &str, error: &AppError) {
        warn!(kind, error = %error, "Reference data load failed");
        metrics::record_reference_failure(kind);
        self.notifications.push(Notification::new(
            format!("Could not load {} list", kind),
            error.to_string(),
        ));
    }

    pub fn handle(&mut self, event: LoaderEvent) {
        match event {
            LoaderEvent::Loaded(load) => self.apply_reference(load),
            LoaderEvent::Failed { kind, error } => self.reference_failed(kind, &error),
        }
    }

    /// 处理所有已到达的消息，返回处理条数
    pub fn drain(&mut self, loader: &mut ReferenceLoader) -> usize {
        let mut handled = 0;
        while let Some(event) = loader.try_next() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// 等待全部加载结束
    pub async fn await_references(&mut self, loader: &mut ReferenceLoader) {
        while let Some(event) = loader.next().await {
            self.handle(event);
        }
    }

    // ========== 向导 ==========

    pub fn next(&mut self) -> Transition {
        self.touched.insert(self.navigator.current());

        let engine = engine(&self.catalog, &self.settings);
        let draft = self.store.draft();
        let transition = self
            .navigator
            .next(|section| engine.validate(section, draft));

        match &transition {
            Transition::Advanced { from, to } => {
                self.store.clear_errors(*from);
                debug!(from = %from, to = %to, "Advanced to next section");
            }
            Transition::Blocked { section, errors } => {
                warn!(section = %section, errors = errors.len(), "Next blocked by validation errors");
                metrics::record_blocked_next(*section, errors.len());
                self.store.set_errors(*section, errors.clone());
            }
            Transition::Retreated { .. } | Transition::AtBoundary(_) => {}
        }
        transition
    }

    pub fn prev(&mut self) -> Transition {
        self.navigator.prev()
    }

    /// 提交
    ///
    /// 只能在最后一步调用；校验资产信息、保修、保险三个分区后交给提交出口。
    /// 出口失败时草稿和当前步骤不变。
    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> AppResult<SubmitOutcome> {
        let engine = engine(&self.catalog, &self.settings);
        let draft = self.store.draft();
        let map = self
            .navigator
            .submission_check(|section| engine.validate(section, draft))?;

        for section in SUBMISSION_SECTIONS {
            self.touched.insert(section);
            self.store
                .set_errors(section, map.section(section).cloned().unwrap_or_default());
        }

        let is_update = !self.mode.is_create();
        if !map.is_valid() {
            let sections: Vec<Section> = map.invalid_sections().collect();
            warn!(sections = ?sections, "Submission blocked by validation errors");
            metrics::record_submission("blocked", is_update);
            return Ok(SubmitOutcome::Blocked(map));
        }

        info!(mode = ?self.mode, "Submitting asset");
        match sink.submit(self.mode.target(), self.store.draft()).await {
            Ok(ack) if ack.success => {
                info!(message = %ack.message, "Asset saved");
                metrics::record_submission("accepted", is_update);
                Ok(SubmitOutcome::Accepted {
                    message: ack.message,
                })
            }
            Ok(ack) => {
                warn!(message = %ack.message, "Asset submission rejected");
                metrics::record_submission("rejected", is_update);
                Ok(SubmitOutcome::Failed(self.notify("Asset was not saved", ack.message)))
            }
            Err(error) => {
                warn!(error = %error, "Asset submission failed");
                metrics::record_submission("failed", is_update);
                Ok(SubmitOutcome::Failed(
                    self.notify("Asset was not saved", error.to_string()),
                ))
            }
        }
    }

    /// 校验全部六个分区
    pub fn validate_all(&mut self) -> &ErrorMap {
        self.touched.extend(Section::ALL);
        self.revalidate(Section::ALL);
        self.store.errors()
    }

    // ========== 快速新建 ==========

    /// 快速新建参考数据，成功后立即出现在对应列表中
    pub async fn quick_create(
        &mut self,
        record: QuickCreateRecord,
        sink: &dyn QuickCreateSink,
    ) -> AppResult<CreatedReference> {
        record.validate()?;
        record.check_duplicate(&self.catalog)?;

        match sink.create(&record).await {
            Ok(created) => {
                info!(kind = record.label(), id = %created.id, "Reference entry created");
                metrics::record_quick_create(record.label(), true);
                record.append_to(&mut self.catalog, &created);
                Ok(created)
            }
            Err(error) => {
                warn!(kind = record.label(), error = %error, "Quick create failed");
                metrics::record_quick_create(record.label(), false);
                self.notify(format!("Could not create {}", record.label()), error.to_string());
                Err(error)
            }
        }
    }

    // ========== 提示 ==========

    fn notify(&mut self, title: impl Into<String>, detail: impl Into<String>) -> Notification {
        let notification = Notification::new(title, detail);
        self.notifications.push(notification.clone());
        notification
    }

    /// 取出并清空待显示的提示
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
