//! 领域层
//!
//! 资产草稿及其分区、字段词汇、错误表、参考数据、值对象和外部协作方接口

pub mod draft;
pub mod enums;
pub mod error_map;
pub mod fields;
pub mod ports;
pub mod quick_create;
pub mod reference;
pub mod sections;
pub mod value_objects;

pub use draft::*;
pub use enums::*;
pub use error_map::*;
pub use fields::*;
pub use ports::*;
pub use quick_create::*;
pub use reference::*;
pub use sections::*;
pub use value_objects::*;
