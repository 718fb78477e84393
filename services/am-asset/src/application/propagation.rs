//! 派生字段联动
//!
//! 固定的「源字段 → 派生字段」规则表。每次编辑提交前，比较编辑前后的草稿，
//! 只有源字段发生变化的规则才会执行；开关规则产生的改动不再触发其他规则。

use tracing::debug;

use crate::application::depreciation::DepreciationResolver;
use crate::application::requirement_policy::{
    CLEARED_FINANCE_FIELDS, ConditionalRequirementPolicy, FinanceSnapshot,
};
use crate::domain::draft::AssetDraft;
use crate::domain::fields::Field;
use crate::domain::reference::{ReferenceCatalog, ReferenceLoad};

pub struct DependencyPropagator<'a> {
    catalog: &'a ReferenceCatalog,
}

impl<'a> DependencyPropagator<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// 对一次编辑做联动，返回被改写的派生字段
    ///
    /// `previous` 为编辑前的草稿，`draft` 为已写入编辑值的草稿
    pub fn settle(
        &self,
        previous: &AssetDraft,
        draft: &mut AssetDraft,
        snapshot: &mut Option<FinanceSnapshot>,
    ) -> Vec<Field> {
        let mut derived = Vec::new();

        let was_depreciable = previous.finance_info().is_depreciable();
        let is_depreciable = draft.finance_info().is_depreciable();
        if was_depreciable && !is_depreciable {
            *snapshot = Some(ConditionalRequirementPolicy::switch_off(
                draft.finance_info_mut(),
            ));
            derived.extend(CLEARED_FINANCE_FIELDS);
        } else if !was_depreciable && is_depreciable {
            ConditionalRequirementPolicy::switch_on(draft.finance_info_mut(), snapshot.take());
            derived.extend(CLEARED_FINANCE_FIELDS);
        }

        let before = previous.purchase_info();
        let after = draft.purchase_info().clone();
        if is_depreciable && before.invoice_date != after.invoice_date {
            draft.finance_info_mut().capitalization_date = after.invoice_date;
            derived.push(Field::CapitalizationDate);
        }
        if is_depreciable && before.purchase_price != after.purchase_price {
            draft.finance_info_mut().capitalization_price = after.purchase_price;
            derived.push(Field::CapitalizationPrice);
        }

        let before = previous.warranty_info();
        let after = draft.warranty_info();
        if before.warranty_start != after.warranty_start
            || before.warranty_period_months != after.warranty_period_months
        {
            if let Some(end) = after.derived_warranty_end() {
                draft.warranty_info_mut().warranty_end = Some(end);
                derived.push(Field::WarrantyEnd);
            }
        }

        let before = previous.insurance_info();
        let after = draft.insurance_info();
        if before.insurance_start != after.insurance_start
            || before.insurance_period_months != after.insurance_period_months
        {
            if let Some(end) = after.minimum_end() {
                draft.insurance_info_mut().insurance_end = Some(end);
                derived.push(Field::InsuranceEnd);
            }
        }

        if previous.asset_details().brand != draft.asset_details().brand
            && self.reconcile_model(draft)
        {
            derived.push(Field::Model);
        }

        if was_depreciable == is_depreciable
            && previous.finance_info().life_months != draft.finance_info().life_months
            && self.resolve_depreciation(draft)
        {
            derived.push(Field::DepreciationPct);
        }

        if !derived.is_empty() {
            debug!(derived = ?derived, "Derived fields recomputed");
        }
        derived
    }

    /// 对整份草稿执行一次全部规则（回填已有记录后使用）
    ///
    /// 资本化日期 / 金额只在为空时从发票补齐；保险结束日期只补齐或推后到最早允许日期
    pub fn settle_all(&self, draft: &mut AssetDraft) -> Vec<Field> {
        let mut derived = Vec::new();

        if draft.finance_info().is_depreciable() {
            let purchase = draft.purchase_info().clone();
            let finance = draft.finance_info_mut();
            if finance.capitalization_date.is_none() && purchase.invoice_date.is_some() {
                finance.capitalization_date = purchase.invoice_date;
                derived.push(Field::CapitalizationDate);
            }
            if finance.capitalization_price.is_none() && purchase.purchase_price.is_some() {
                finance.capitalization_price = purchase.purchase_price;
                derived.push(Field::CapitalizationPrice);
            }
        }

        if let Some(end) = draft.warranty_info().derived_warranty_end() {
            if draft.warranty_info().warranty_end != Some(end) {
                draft.warranty_info_mut().warranty_end = Some(end);
                derived.push(Field::WarrantyEnd);
            }
        }

        if let Some(end) = draft.insurance_info().minimum_end() {
            if draft.insurance_info().insurance_end.is_none_or(|current| current < end) {
                draft.insurance_info_mut().insurance_end = Some(end);
                derived.push(Field::InsuranceEnd);
            }
        }

        if self.reconcile_model(draft) {
            derived.push(Field::Model);
        }
        if self.resolve_depreciation(draft) {
            derived.push(Field::DepreciationPct);
        }

        if !derived.is_empty() {
            debug!(derived = ?derived, "Full settle recomputed derived fields");
        }
        derived
    }

    /// 参考数据迟到后重新执行依赖它的规则
    pub fn on_reference(&self, load: &ReferenceLoad, draft: &mut AssetDraft) -> Vec<Field> {
        let changed = match load {
            ReferenceLoad::Models(_) => self.reconcile_model(draft).then_some(Field::Model),
            ReferenceLoad::RateTable(_) => self
                .resolve_depreciation(draft)
                .then_some(Field::DepreciationPct),
            ReferenceLoad::Options { .. } | ReferenceLoad::CodeMode(_) => None,
        };
        if let Some(field) = changed {
            debug!(reference = load.label(), field = %field, "Late reference data re-derived field");
        }
        changed.into_iter().collect()
    }

    /// 当前型号不属于所选品牌时清空；型号列表未加载时不处理
    fn reconcile_model(&self, draft: &mut AssetDraft) -> bool {
        let details = draft.asset_details();
        let Some(model) = details.model else {
            return false;
        };
        let Some(candidates) = self.catalog.models_for_brand(details.brand) else {
            return false;
        };
        if candidates.iter().any(|m| m.id == model) {
            return false;
        }
        draft.asset_details_mut().model = None;
        true
    }

    /// 按当前寿命解析折旧率；未命中时保留原值
    fn resolve_depreciation(&self, draft: &mut AssetDraft) -> bool {
        let finance = draft.finance_info();
        if !finance.is_depreciable() {
            return false;
        }
        let current = finance.depreciation_pct;
        let (Some(life), Some(table)) = (finance.life_months, self.catalog.rate_table()) else {
            return false;
        };
        match DepreciationResolver::resolve(life, table.method(), table) {
            Ok(pct) if current != Some(pct) => {
                draft.finance_info_mut().depreciation_pct = Some(pct);
                true
            }
            Ok(_) => false,
            Err(unresolved) => {
                debug!(life_months = unresolved.life_months, "Depreciation rate unresolved");
                false
            }
        }
    }
}
