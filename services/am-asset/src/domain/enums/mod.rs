//! 枚举模块

mod code_type;
mod depreciable;
mod depreciation_method;
mod shift;
mod warranty_status;

pub use code_type::CodeType;
pub use depreciable::Depreciable;
pub use depreciation_method::DepreciationMethod;
pub use shift::Shift;
pub use warranty_status::WarrantyStatus;
