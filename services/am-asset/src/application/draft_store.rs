//! 草稿存储
//!
//! 持有唯一的资产草稿、各分区错误表和财务快照。
//! 每次修改都在副本上完成「写入 → 联动」，结果整体替换旧草稿，
//! 外部永远看不到中间状态；修改本身不做校验。

use std::collections::BTreeSet;

use tracing::debug;

use crate::application::propagation::DependencyPropagator;
use crate::application::requirement_policy::FinanceSnapshot;
use crate::domain::draft::{AssetDraft, SectionData};
use crate::domain::error_map::{ErrorMap, SectionErrors};
use crate::domain::fields::{Field, FieldEdit, Section};
use crate::domain::reference::ReferenceLoad;

/// 一次修改结算后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// 被直接修改的分区
    pub edited: Section,
    /// 联动改写的派生字段
    pub derived: Vec<Field>,
}

impl Settled {
    /// 本次修改涉及的全部分区
    pub fn affected_sections(&self) -> BTreeSet<Section> {
        std::iter::once(self.edited)
            .chain(self.derived.iter().map(Field::section))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: AssetDraft,
    errors: ErrorMap,
    snapshot: Option<FinanceSnapshot>,
}

impl DraftStore {
    /// 新建资产：空草稿
    pub fn new() -> Self {
        Self::default()
    }

    /// 编辑已有资产
    pub fn hydrate(draft: AssetDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn snapshot(&self) -> Option<&FinanceSnapshot> {
        self.snapshot.as_ref()
    }

    /// 写入单个字段并完成联动
    pub fn set_field(&mut self, edit: FieldEdit, propagator: &DependencyPropagator<'_>) -> Settled {
        let edited = edit.section();
        debug!(field = %edit.field(), "Setting field");
        self.commit(edited, propagator, |draft| draft.apply(edit))
    }

    /// 替换整个分区并完成联动
    pub fn replace_section(
        &mut self,
        data: SectionData,
        propagator: &DependencyPropagator<'_>,
    ) -> Settled {
        let edited = data.section();
        debug!(section = %edited, "Replacing section");
        self.commit(edited, propagator, |draft| draft.replace(data))
    }

    /// 参考数据到达后重新联动
    pub fn apply_reference(
        &mut self,
        load: &ReferenceLoad,
        propagator: &DependencyPropagator<'_>,
    ) -> Vec<Field> {
        let mut next = self.draft.clone();
        let derived = propagator.on_reference(load, &mut next);
        self.draft = next;
        derived
    }

    /// 对整份草稿重算一次全部派生字段
    pub fn settle_all(&mut self, propagator: &DependencyPropagator<'_>) -> Vec<Field> {
        let mut next = self.draft.clone();
        let derived = propagator.settle_all(&mut next);
        self.draft = next;
        derived
    }

    pub fn set_errors(&mut self, section: Section, errors: SectionErrors) {
        self.errors.set_section(section, errors);
    }

    pub fn clear_errors(&mut self, section: Section) {
        self.errors.clear_section(section);
    }

    fn commit(
        &mut self,
        edited: Section,
        propagator: &DependencyPropagator<'_>,
        mutate: impl FnOnce(&mut AssetDraft),
    ) -> Settled {
        let mut next = self.draft.clone();
        mutate(&mut next);

        let mut snapshot = self.snapshot.clone();
        let derived = propagator.settle(&self.draft, &mut next, &mut snapshot);

        // 关闭折旧时连同财务分区的错误一起清掉
        if self.draft.finance_info().is_depreciable() && !next.finance_info().is_depreciable() {
            self.errors.clear_section(Section::FinanceInfo);
        }

        self.draft = next;
        self.snapshot = snapshot;
        Settled { edited, derived }
    }
}
