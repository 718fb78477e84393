//! 外部协作方接口
//!
//! 参考数据提供方、提交出口、快速新建出口，传输细节由基础设施层实现

mod reference_data;
mod submission;

pub use reference_data::*;
pub use submission::*;
