//! am-asset - 资产登记编辑器核心
//!
//! 六个分区的资产草稿：字段联动、分区校验、折旧率解析、条件必填和分区向导

pub mod application;
pub mod domain;
pub mod infrastructure;
