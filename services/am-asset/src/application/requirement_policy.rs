//! 条件必填策略
//!
//! 两个开关决定财务分区和保修分区的必填字段：
//! - `depreciable`：关闭时财务字段全部非必填，且先快照再清空；重新打开时从快照恢复
//! - `warrantyStatus`：`amc` 与 `under_warranty` 各自只校验本分支字段
//!
//! 保险分区全空时不校验，填了任意一项则四项全部必填

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::{Shift, WarrantyStatus};
use crate::domain::fields::Field;
use crate::domain::sections::{FinanceInfo, InsuranceInfo};

/// 关闭折旧时清空的财务字段
pub const CLEARED_FINANCE_FIELDS: [Field; 7] = [
    Field::CapitalizationPrice,
    Field::CapitalizationDate,
    Field::LifeMonths,
    Field::DepreciationPct,
    Field::IncomeTaxDepreciationPct,
    Field::Shift,
    Field::ScrapValue,
];

const REQUIRED_FINANCE_FIELDS: [Field; 6] = [
    Field::CapitalizationDate,
    Field::CapitalizationPrice,
    Field::LifeMonths,
    Field::DepreciationPct,
    Field::ScrapValue,
    Field::IncomeTaxDepreciationPct,
];

const UNDER_WARRANTY_FIELDS: [Field; 3] = [
    Field::WarrantyStart,
    Field::WarrantyPeriodMonths,
    Field::WarrantyEnd,
];

const AMC_FIELDS: [Field; 3] = [Field::AmcVendor, Field::AmcStart, Field::AmcEnd];

const INSURANCE_FIELDS: [Field; 4] = [
    Field::InsuranceStart,
    Field::InsuranceEnd,
    Field::InsurancePeriodMonths,
    Field::InsuranceCompanyName,
];

/// 关闭折旧前的财务字段快照
///
/// 包括空值，恢复时逐字段原样写回
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    capitalization_price: Option<Decimal>,
    capitalization_date: Option<NaiveDate>,
    life_months: Option<u32>,
    depreciation_pct: Option<Decimal>,
    income_tax_depreciation_pct: Option<Decimal>,
    shift: Option<Shift>,
    scrap_value: Option<Decimal>,
}

impl FinanceSnapshot {
    pub fn capture(finance: &FinanceInfo) -> Self {
        Self {
            capitalization_price: finance.capitalization_price,
            capitalization_date: finance.capitalization_date,
            life_months: finance.life_months,
            depreciation_pct: finance.depreciation_pct,
            income_tax_depreciation_pct: finance.income_tax_depreciation_pct,
            shift: finance.shift,
            scrap_value: finance.scrap_value,
        }
    }

    fn restore_into(self, finance: &mut FinanceInfo) {
        finance.capitalization_price = self.capitalization_price;
        finance.capitalization_date = self.capitalization_date;
        finance.life_months = self.life_months;
        finance.depreciation_pct = self.depreciation_pct;
        finance.income_tax_depreciation_pct = self.income_tax_depreciation_pct;
        finance.shift = self.shift;
        finance.scrap_value = self.scrap_value;
    }
}

pub struct ConditionalRequirementPolicy;

impl ConditionalRequirementPolicy {
    /// 财务分区当前必填字段
    pub fn finance_required(finance: &FinanceInfo) -> &'static [Field] {
        if finance.is_depreciable() {
            &REQUIRED_FINANCE_FIELDS
        } else {
            &[]
        }
    }

    /// 保修分区当前必填字段（另一分支不必填也不校验）
    pub fn warranty_required(status: WarrantyStatus) -> &'static [Field] {
        match status {
            WarrantyStatus::UnderWarranty => &UNDER_WARRANTY_FIELDS,
            WarrantyStatus::Amc => &AMC_FIELDS,
        }
    }

    /// 保险分区当前必填字段
    pub fn insurance_required(insurance: &InsuranceInfo) -> &'static [Field] {
        if insurance.is_blank() {
            &[]
        } else {
            &INSURANCE_FIELDS
        }
    }

    /// 关闭折旧：快照后清空
    pub fn switch_off(finance: &mut FinanceInfo) -> FinanceSnapshot {
        let snapshot = FinanceSnapshot::capture(finance);
        FinanceSnapshot::default().restore_into(finance);
        snapshot
    }

    /// 重新打开折旧：有快照则恢复
    pub fn switch_on(finance: &mut FinanceInfo, snapshot: Option<FinanceSnapshot>) {
        if let Some(snapshot) = snapshot {
            snapshot.restore_into(finance);
        }
    }
}
