//! 折旧方法枚举

use serde::{Deserialize, Serialize};

/// 折旧方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepreciationMethod {
    /// 直线法 (Straight Line Method)
    #[serde(rename = "SLM")]
    Slm,
    /// 余额递减法 (Written Down Value)
    #[serde(rename = "WDV")]
    Wdv,
}

impl DepreciationMethod {
    pub fn code(&self) -> &'static str {
        match self {
            DepreciationMethod::Slm => "SLM",
            DepreciationMethod::Wdv => "WDV",
        }
    }

    /// 从代码创建，大小写不敏感
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "SLM" => Some(DepreciationMethod::Slm),
            "WDV" => Some(DepreciationMethod::Wdv),
            _ => None,
        }
    }
}
