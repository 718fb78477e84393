use common::utils::format_date;

use crate::application::depreciation::{DepreciationResolver, UNRESOLVED_MESSAGE};
use crate::application::requirement_policy::ConditionalRequirementPolicy;
use crate::domain::draft::AssetDraft;
use crate::domain::error_map::{FieldError, SectionErrors};
use crate::domain::fields::Field;

use super::{ValidationContext, check_non_negative, check_percentage, check_positive_months};

pub(super) fn validate(draft: &AssetDraft, ctx: &ValidationContext<'_>) -> SectionErrors {
    let finance = draft.finance_info();
    let purchase = draft.purchase_info();
    let mut errors = SectionErrors::new();

    if !finance.is_depreciable() {
        return errors;
    }

    for &field in ConditionalRequirementPolicy::finance_required(finance) {
        let present = match field {
            Field::CapitalizationDate => finance.capitalization_date.is_some(),
            Field::CapitalizationPrice => finance.capitalization_price.is_some(),
            Field::LifeMonths => finance.life_months.is_some(),
            Field::DepreciationPct => finance.depreciation_pct.is_some(),
            Field::ScrapValue => finance.scrap_value.is_some(),
            Field::IncomeTaxDepreciationPct => finance.income_tax_depreciation_pct.is_some(),
            _ => true,
        };
        errors.require(field, present);
    }

    if let (Some(capitalized), Some(invoiced)) =
        (finance.capitalization_date, purchase.invoice_date)
    {
        if capitalized < invoiced {
            errors.insert(
                Field::CapitalizationDate,
                FieldError::cross_field(format!(
                    "Capitalization date must be on or after invoice date {}",
                    format_date(invoiced, ctx.date_format)
                )),
            );
        }
    }

    check_non_negative(&mut errors, Field::CapitalizationPrice, finance.capitalization_price);
    if let (Some(capitalized), Some(purchased)) =
        (finance.capitalization_price, purchase.purchase_price)
    {
        if capitalized < purchased {
            errors.insert(
                Field::CapitalizationPrice,
                FieldError::cross_field(format!(
                    "Capitalization price must be greater than or equal to purchase price {}",
                    purchased
                )),
            );
        }
    }

    check_positive_months(&mut errors, Field::LifeMonths, finance.life_months);
    if let (Some(life), Some(table)) = (finance.life_months, ctx.catalog.rate_table()) {
        if DepreciationResolver::resolve(life, table.method(), table).is_err() {
            errors.insert(
                Field::LifeMonths,
                FieldError::unresolved_lookup(UNRESOLVED_MESSAGE),
            );
        }
    }

    check_percentage(&mut errors, Field::DepreciationPct, finance.depreciation_pct);
    check_percentage(
        &mut errors,
        Field::IncomeTaxDepreciationPct,
        finance.income_tax_depreciation_pct,
    );
    check_non_negative(&mut errors, Field::ScrapValue, finance.scrap_value);

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::test_support::context;
    use crate::domain::enums::{Depreciable, DepreciationMethod};
    use crate::domain::error_map::FieldErrorKind;
    use crate::domain::fields::FieldEdit;
    use crate::domain::reference::{ReferenceCatalog, ReferenceLoad};
    use crate::domain::value_objects::{RateEntry, RateTable};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn filled_draft() -> AssetDraft {
        let mut draft = AssetDraft::default();
        draft.apply(FieldEdit::InvoiceDate(NaiveDate::from_ymd_opt(2024, 3, 10)));
        draft.apply(FieldEdit::PurchasePrice(Some(dec("85000"))));
        draft.apply(FieldEdit::CapitalizationDate(NaiveDate::from_ymd_opt(2024, 3, 10)));
        draft.apply(FieldEdit::CapitalizationPrice(Some(dec("85000"))));
        draft.apply(FieldEdit::LifeMonths(Some(36)));
        draft.apply(FieldEdit::DepreciationPct(Some(dec("10.5"))));
        draft.apply(FieldEdit::IncomeTaxDepreciationPct(Some(dec("40"))));
        draft.apply(FieldEdit::ScrapValue(Some(dec("500"))));
        draft
    }

    fn rate_catalog() -> ReferenceCatalog {
        let mut catalog = ReferenceCatalog::new();
        catalog.store(ReferenceLoad::RateTable(
            RateTable::new(
                DepreciationMethod::Slm,
                vec![RateEntry::new(36, dec("10.5"), dec("31.23"))],
            )
            .unwrap(),
        ));
        catalog
    }

    #[test]
    fn test_complete_section_is_valid() {
        let catalog = rate_catalog();
        assert!(validate(&filled_draft(), &context(&catalog)).is_valid());
    }

    #[test]
    fn test_not_depreciable_has_no_errors() {
        let catalog = ReferenceCatalog::new();
        let mut draft = AssetDraft::default();
        draft.apply(FieldEdit::Depreciable(Depreciable::No));
        draft.apply(FieldEdit::CapitalizationPrice(Some(dec("-1"))));
        assert!(validate(&draft, &context(&catalog)).is_valid());
    }

    #[test]
    fn test_capitalization_date_before_invoice() {
        let catalog = ReferenceCatalog::new();
        let mut draft = filled_draft();
        draft.apply(FieldEdit::CapitalizationDate(NaiveDate::from_ymd_opt(2024, 3, 9)));
        let errors = validate(&draft, &context(&catalog));
        assert_eq!(
            errors.message(Field::CapitalizationDate),
            Some("Capitalization date must be on or after invoice date 10-03-2024")
        );
    }

    #[test]
    fn test_capitalization_price_below_purchase() {
        let catalog = ReferenceCatalog::new();
        let mut draft = filled_draft();
        draft.apply(FieldEdit::CapitalizationPrice(Some(dec("84999.99"))));
        let errors = validate(&draft, &context(&catalog));
        assert_eq!(
            errors.message(Field::CapitalizationPrice),
            Some("Capitalization price must be greater than or equal to purchase price 85000")
        );
    }

    #[test]
    fn test_unmapped_life() {
        let catalog = rate_catalog();
        let mut draft = filled_draft();
        draft.apply(FieldEdit::LifeMonths(Some(37)));
        let errors = validate(&draft, &context(&catalog));
        assert_eq!(
            errors.message(Field::LifeMonths),
            Some("not mapped, must be added first")
        );
        assert_eq!(
            errors.get(Field::LifeMonths).map(|e| e.kind),
            Some(FieldErrorKind::UnresolvedLookup)
        );
    }

    #[test]
    fn test_life_not_checked_before_table_loads() {
        let catalog = ReferenceCatalog::new();
        let mut draft = filled_draft();
        draft.apply(FieldEdit::LifeMonths(Some(37)));
        assert!(validate(&draft, &context(&catalog)).is_valid());
    }

    #[test]
    fn test_required_when_depreciable() {
        let catalog = ReferenceCatalog::new();
        let errors = validate(&AssetDraft::default(), &context(&catalog));
        assert_eq!(errors.len(), 6);
        assert!(!errors.contains(Field::Shift));
        assert_eq!(errors.message(Field::LifeMonths), Some("Life (months) is required"));
    }

    #[test]
    fn test_percentage_out_of_range() {
        let catalog = ReferenceCatalog::new();
        let mut draft = filled_draft();
        draft.apply(FieldEdit::IncomeTaxDepreciationPct(Some(dec("100.5"))));
        let errors = validate(&draft, &context(&catalog));
        assert_eq!(
            errors.get(Field::IncomeTaxDepreciationPct).map(|e| e.kind),
            Some(FieldErrorKind::InvalidFormat)
        );
    }
}
