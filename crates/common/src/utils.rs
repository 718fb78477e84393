//! 通用工具函数

use chrono::{Months, NaiveDate};

/// 日期显示格式（用于提示信息）
pub const DEFAULT_DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// 线上传输日期格式
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 日期加 N 个月
///
/// 目标月份天数不足时取当月最后一天（1 月 31 日 + 1 个月 = 2 月末）
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// 按给定格式输出日期
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// 解析 `YYYY-MM-DD` 日期
pub fn parse_wire_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), WIRE_DATE_FORMAT)
}
