//! 班次枚举

use serde::{Deserialize, Serialize};

/// 资产使用班次，影响折旧计提强度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// 单班
    #[serde(rename = "single")]
    Single,
    /// 1.5 班
    #[serde(rename = "150pct")]
    OneAndHalf,
    /// 双班
    #[serde(rename = "double")]
    Double,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Single => "single",
            Shift::OneAndHalf => "150pct",
            Shift::Double => "double",
        }
    }
}
