//! 财务信息分区

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::{Depreciable, Shift};

/// 财务信息
///
/// `depreciable == No` 时其余字段全部清空，切回 `Yes` 时从快照恢复
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceInfo {
    pub depreciable: Depreciable,
    /// 资本化金额
    pub capitalization_price: Option<Decimal>,
    /// 资本化日期
    pub capitalization_date: Option<NaiveDate>,
    /// 使用寿命（月）
    pub life_months: Option<u32>,
    /// 折旧率（由折旧率表解析）
    pub depreciation_pct: Option<Decimal>,
    /// 所得税折旧率
    pub income_tax_depreciation_pct: Option<Decimal>,
    pub shift: Option<Shift>,
    /// 残值
    pub scrap_value: Option<Decimal>,
}

impl FinanceInfo {
    pub fn is_depreciable(&self) -> bool {
        self.depreciable.is_yes()
    }
}
