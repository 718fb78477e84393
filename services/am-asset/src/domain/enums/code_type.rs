//! 资产编码模式

use serde::{Deserialize, Serialize};

/// 资产编码生成模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodeType {
    /// 系统生成，编码锁定
    Auto,
    /// 用户录入，编码必填
    Manual,
}

impl CodeType {
    pub fn requires_code(&self) -> bool {
        matches!(self, CodeType::Manual)
    }
}
