//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 参考数据 ID
///
/// 分类、位置、品牌、型号、供应商、部门、用户等主数据的外部标识
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct RefId(pub i64);

impl RefId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 下拉选项（id + 显示名称）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub id: RefId,
    pub display_name: String,
}

impl ReferenceOption {
    pub fn new(id: impl Into<RefId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
