//! `YYYY-MM-DD` 日期（空串与 null 视为未填）

use chrono::NaiveDate;
use common::utils::{WIRE_DATE_FORMAT, parse_wire_date};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format(WIRE_DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_wire_date(value)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date {}: {}", value, e))),
    }
}
