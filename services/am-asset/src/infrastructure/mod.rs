//! 基础设施层
//!
//! 提交线格式映射，以及供测试和离线检查使用的内存协作方

pub mod memory;
pub mod wire;
