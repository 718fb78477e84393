use crate::domain::draft::AssetDraft;
use crate::domain::error_map::SectionErrors;
use crate::domain::fields::Field;
use crate::domain::sections::is_blank;

use super::check_non_negative;

pub(super) fn validate(draft: &AssetDraft) -> SectionErrors {
    let info = draft.purchase_info();
    let mut errors = SectionErrors::new();
    errors.require(Field::Vendor, info.vendor.is_some());
    errors.require(Field::InvoiceNo, !is_blank(&info.invoice_no));
    errors.require(Field::InvoiceDate, info.invoice_date.is_some());
    errors.require(Field::PurchasePrice, info.purchase_price.is_some());
    check_non_negative(&mut errors, Field::PurchasePrice, info.purchase_price);
    errors
}
