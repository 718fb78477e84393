use common::utils::format_date;

use crate::application::requirement_policy::ConditionalRequirementPolicy;
use crate::domain::draft::AssetDraft;
use crate::domain::enums::WarrantyStatus;
use crate::domain::error_map::{FieldError, SectionErrors};
use crate::domain::fields::Field;

use super::{ValidationContext, check_positive_months};

pub(super) fn validate(draft: &AssetDraft, ctx: &ValidationContext<'_>) -> SectionErrors {
    let info = draft.warranty_info();
    let mut errors = SectionErrors::new();

    for &field in ConditionalRequirementPolicy::warranty_required(info.warranty_status) {
        let present = match field {
            Field::WarrantyStart => info.warranty_start.is_some(),
            Field::WarrantyPeriodMonths => info.warranty_period_months.is_some(),
            Field::WarrantyEnd => info.warranty_end.is_some(),
            Field::AmcVendor => info.amc_vendor.is_some(),
            Field::AmcStart => info.amc_start.is_some(),
            Field::AmcEnd => info.amc_end.is_some(),
            _ => true,
        };
        errors.require(field, present);
    }

    match info.warranty_status {
        WarrantyStatus::UnderWarranty => {
            check_positive_months(
                &mut errors,
                Field::WarrantyPeriodMonths,
                info.warranty_period_months,
            );
            if let (Some(expected), Some(end)) = (info.derived_warranty_end(), info.warranty_end) {
                if expected != end {
                    errors.insert(
                        Field::WarrantyEnd,
                        FieldError::cross_field(format!(
                            "Warranty end date must be {}",
                            format_date(expected, ctx.date_format)
                        )),
                    );
                }
            }
        }
        WarrantyStatus::Amc => {
            if let (Some(start), Some(end)) = (info.amc_start, info.amc_end) {
                if end < start {
                    errors.insert(
                        Field::AmcEnd,
                        FieldError::cross_field(format!(
                            "AMC end date must be on or after AMC start date {}",
                            format_date(start, ctx.date_format)
                        )),
                    );
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::test_support::context;
    use crate::domain::fields::FieldEdit;
    use crate::domain::reference::ReferenceCatalog;
    use chrono::NaiveDate;
    use common::types::RefId;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_under_warranty_branch_only() {
        let catalog = ReferenceCatalog::new();
        let errors = validate(&AssetDraft::default(), &context(&catalog));
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![Field::WarrantyStart, Field::WarrantyPeriodMonths, Field::WarrantyEnd]
        );
    }

    #[test]
    fn test_amc_branch_ignores_warranty_fields() {
        let catalog = ReferenceCatalog::new();
        let mut draft = AssetDraft::default();
        draft.apply(FieldEdit::WarrantyStatus(WarrantyStatus::Amc));
        draft.apply(FieldEdit::WarrantyPeriodMonths(Some(0)));
        draft.apply(FieldEdit::AmcVendor(Some(RefId(8))));
        draft.apply(FieldEdit::AmcStart(date(2024, 4, 1)));
        draft.apply(FieldEdit::AmcEnd(date(2025, 3, 31)));
        assert!(validate(&draft, &context(&catalog)).is_valid());
    }

    #[test]
    fn test_amc_end_before_start() {
        let catalog = ReferenceCatalog::new();
        let mut draft = AssetDraft::default();
        draft.apply(FieldEdit::WarrantyStatus(WarrantyStatus::Amc));
        draft.apply(FieldEdit::AmcVendor(Some(RefId(8))));
        draft.apply(FieldEdit::AmcStart(date(2024, 4, 1)));
        draft.apply(FieldEdit::AmcEnd(date(2024, 3, 31)));
        let errors = validate(&draft, &context(&catalog));
        assert_eq!(
            errors.message(Field::AmcEnd),
            Some("AMC end date must be on or after AMC start date 01-04-2024")
        );
    }

    #[test]
    fn test_hand_edited_warranty_end() {
        let catalog = ReferenceCatalog::new();
        let mut draft = AssetDraft::default();
        draft.apply(FieldEdit::WarrantyStart(date(2024, 1, 15)));
        draft.apply(FieldEdit::WarrantyPeriodMonths(Some(12)));
        draft.apply(FieldEdit::WarrantyEnd(date(2025, 2, 1)));
        let errors = validate(&draft, &context(&catalog));
        assert_eq!(
            errors.message(Field::WarrantyEnd),
            Some("Warranty end date must be 15-01-2025")
        );
    }
}
