//! 保修状态枚举

use serde::{Deserialize, Serialize};

/// 保修状态（原厂保修 / 年度维保合同）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WarrantyStatus {
    /// 年度维保合同 (AMC)
    #[serde(rename = "amc")]
    Amc,
    /// 原厂保修期内
    #[default]
    #[serde(rename = "under_warranty")]
    UnderWarranty,
}

impl WarrantyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyStatus::Amc => "amc",
            WarrantyStatus::UnderWarranty => "under_warranty",
        }
    }

    pub fn is_amc(&self) -> bool {
        matches!(self, WarrantyStatus::Amc)
    }
}
