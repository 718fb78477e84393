//! 保修 / 维保信息分区

use chrono::NaiveDate;
use common::types::RefId;
use common::utils::add_months;
use serde::{Deserialize, Serialize};

use crate::domain::enums::WarrantyStatus;

/// 保修信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarrantyInfo {
    pub warranty_status: WarrantyStatus,
    /// 维保供应商
    pub amc_vendor: Option<RefId>,
    pub amc_start: Option<NaiveDate>,
    pub amc_end: Option<NaiveDate>,
    pub warranty_start: Option<NaiveDate>,
    /// 保修期（月）
    pub warranty_period_months: Option<u32>,
    pub warranty_end: Option<NaiveDate>,
}

impl WarrantyInfo {
    /// 由开始日期和保修期推算的结束日期，两者都有值时才存在
    pub fn derived_warranty_end(&self) -> Option<NaiveDate> {
        match (self.warranty_start, self.warranty_period_months) {
            (Some(start), Some(months)) => add_months(start, months),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_end_requires_both_inputs() {
        let mut info = WarrantyInfo {
            warranty_start: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..Default::default()
        };
        assert_eq!(info.derived_warranty_end(), None);

        info.warranty_period_months = Some(24);
        assert_eq!(info.derived_warranty_end(), NaiveDate::from_ymd_opt(2026, 1, 15));
    }
}
