//! 是否计提折旧

use serde::{Deserialize, Serialize};

/// 是否计提折旧开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Depreciable {
    #[default]
    Yes,
    No,
}

impl Depreciable {
    pub fn is_yes(&self) -> bool {
        matches!(self, Depreciable::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Depreciable::Yes => "yes",
            Depreciable::No => "no",
        }
    }
}

impl From<bool> for Depreciable {
    fn from(value: bool) -> Self {
        if value { Depreciable::Yes } else { Depreciable::No }
    }
}
