//! 折旧率解析
//!
//! 按使用寿命（月）在折旧率表中精确查找，不做插值也不取最近值

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::enums::DepreciationMethod;
use crate::domain::value_objects::RateTable;

/// 寿命未在折旧率表中登记时的提示
pub const UNRESOLVED_MESSAGE: &str = "not mapped, must be added first";

/// 折旧率表中没有该寿命的条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("life of {life_months} months is not mapped, must be added first")]
pub struct Unresolved {
    pub life_months: u32,
}

pub struct DepreciationResolver;

impl DepreciationResolver {
    /// 按寿命和折旧方法取折旧率
    pub fn resolve(
        life_months: u32,
        method: DepreciationMethod,
        table: &RateTable,
    ) -> Result<Decimal, Unresolved> {
        table
            .find(life_months)
            .map(|entry| entry.value_for(method))
            .ok_or(Unresolved { life_months })
    }

    /// 使用折旧率表自身声明的方法
    pub fn resolve_with_table_method(
        life_months: u32,
        table: &RateTable,
    ) -> Result<Decimal, Unresolved> {
        Self::resolve(life_months, table.method(), table)
    }
}
