//! 值对象模块

mod ids;
mod photo;
mod rate_table;

pub use ids::AssetId;
pub use photo::{AttachmentError, PhotoAttachment, UploadPolicy};
pub use rate_table::{RateEntry, RateTable, RateTableError};
