//! 保险信息分区

use chrono::NaiveDate;
use common::utils::add_months;
use serde::{Deserialize, Serialize};

use super::is_blank;

/// 保险信息
///
/// 整个分区可选；只要填写了任意一个字段，四个字段全部必填
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceInfo {
    pub insurance_start: Option<NaiveDate>,
    pub insurance_end: Option<NaiveDate>,
    /// 保险期（月）
    pub insurance_period_months: Option<u32>,
    /// 保险公司名称
    pub insurance_company_name: String,
}

impl InsuranceInfo {
    /// 四个字段是否全部为空
    pub fn is_blank(&self) -> bool {
        self.insurance_start.is_none()
            && self.insurance_end.is_none()
            && self.insurance_period_months.is_none()
            && is_blank(&self.insurance_company_name)
    }

    /// 允许的最早结束日期（开始日期 + 保险期）
    pub fn minimum_end(&self) -> Option<NaiveDate> {
        match (self.insurance_start, self.insurance_period_months) {
            (Some(start), Some(months)) => add_months(start, months),
            _ => None,
        }
    }
}
