//! 提交接口线格式

mod asset_payload;
mod dates;

pub use asset_payload::AssetPayload;
