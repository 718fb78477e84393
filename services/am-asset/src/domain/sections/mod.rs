//! 编辑器分区模块
//!
//! 资产草稿由六个分区组成，每个分区对应编辑向导中的一组字段

mod alloted_info;
mod asset_details;
mod finance_info;
mod insurance_info;
mod purchase_info;
mod warranty_info;

pub use alloted_info::AllotedInfo;
pub use asset_details::AssetDetails;
pub use finance_info::FinanceInfo;
pub use insurance_info::InsuranceInfo;
pub use purchase_info::PurchaseInfo;
pub use warranty_info::WarrantyInfo;

/// 文本字段是否为空（仅空白也视为空）
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
