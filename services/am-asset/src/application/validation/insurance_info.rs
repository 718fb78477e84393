use common::utils::format_date;

use crate::application::requirement_policy::ConditionalRequirementPolicy;
use crate::domain::draft::AssetDraft;
use crate::domain::error_map::{FieldError, SectionErrors};
use crate::domain::fields::Field;
use crate::domain::sections::is_blank;

use super::{ValidationContext, check_positive_months};

pub(super) fn validate(draft: &AssetDraft, ctx: &ValidationContext<'_>) -> SectionErrors {
    let info = draft.insurance_info();
    let mut errors = SectionErrors::new();

    // 全空即不投保
    if info.is_blank() {
        return errors;
    }

    for &field in ConditionalRequirementPolicy::insurance_required(info) {
        let present = match field {
            Field::InsuranceStart => info.insurance_start.is_some(),
            Field::InsuranceEnd => info.insurance_end.is_some(),
            Field::InsurancePeriodMonths => info.insurance_period_months.is_some(),
            Field::InsuranceCompanyName => !is_blank(&info.insurance_company_name),
            _ => true,
        };
        errors.require(field, present);
    }

    check_positive_months(
        &mut errors,
        Field::InsurancePeriodMonths,
        info.insurance_period_months,
    );

    if let (Some(minimum), Some(end)) = (info.minimum_end(), info.insurance_end) {
        if end < minimum {
            errors.insert(
                Field::InsuranceEnd,
                FieldError::cross_field(format!(
                    "Insurance end date must be on or after {}",
                    format_date(minimum, ctx.date_format)
                )),
            );
        }
    }

    if let (Some(start), Some(capitalized)) = (
        info.insurance_start,
        draft.finance_info().capitalization_date,
    ) {
        if start < capitalized {
            errors.insert(
                Field::InsuranceStart,
                FieldError::cross_field(format!(
                    "Insurance start date must be on or after capitalization date {}",
                    format_date(capitalized, ctx.date_format)
                )),
            );
        }
    }

    errors
}
