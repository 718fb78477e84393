//! 折旧率表值对象

use rust_decimal::Decimal;
use errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::enums::DepreciationMethod;

/// 折旧率表错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateTableError {
    #[error("Duplicate rate entry for life {0} months")]
    DuplicateLife(u32),
}

/// 折旧率条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    /// 使用寿命（月）
    pub life: u32,
    /// 直线法折旧率
    pub slm_value: Decimal,
    /// 余额递减法折旧率
    pub wdv_value: Decimal,
}

impl RateEntry {
    pub fn new(life: u32, slm_value: Decimal, wdv_value: Decimal) -> Self {
        Self {
            life,
            slm_value,
            wdv_value,
        }
    }

    /// 按折旧方法取值
    pub fn value_for(&self, method: DepreciationMethod) -> Decimal {
        match method {
            DepreciationMethod::Slm => self.slm_value,
            DepreciationMethod::Wdv => self.wdv_value,
        }
    }
}

#[derive(Deserialize)]
struct RateTableWire {
    method: DepreciationMethod,
    rates: Vec<RateEntry>,
}

/// 折旧率表
///
/// 业务规则:
/// - 每个 life 唯一
/// - 条目按 life 升序保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateTableWire")]
pub struct RateTable {
    method: DepreciationMethod,
    #[serde(rename = "rates")]
    entries: Vec<RateEntry>,
}

impl RateTable {
    pub fn new(
        method: DepreciationMethod,
        mut entries: Vec<RateEntry>,
    ) -> Result<Self, RateTableError> {
        entries.sort_by_key(|e| e.life);
        if let Some(pair) = entries.windows(2).find(|w| w[0].life == w[1].life) {
            return Err(RateTableError::DuplicateLife(pair[0].life));
        }
        Ok(Self { method, entries })
    }

    pub fn method(&self) -> DepreciationMethod {
        self.method
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// 精确匹配 life
    pub fn find(&self, life: u32) -> Option<&RateEntry> {
        self.entries
            .binary_search_by_key(&life, |e| e.life)
            .ok()
            .map(|idx| &self.entries[idx])
    }
}

impl TryFrom<RateTableWire> for RateTable {
    type Error = RateTableError;

    fn try_from(wire: RateTableWire) -> Result<Self, Self::Error> {
        Self::new(wire.method, wire.rates)
    }
}

impl From<RateTableError> for AppError {
    fn from(err: RateTableError) -> Self {
        AppError::validation(err.to_string())
    }
}
