//! 分配信息分区

use chrono::NaiveDate;
use common::types::RefId;
use serde::{Deserialize, Serialize};

/// 分配信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllotedInfo {
    /// 使用部门
    pub department: Option<RefId>,
    /// 使用人
    pub alloted_to: Option<RefId>,
    /// 分配截止日期
    pub alloted_up_to: Option<NaiveDate>,
}
