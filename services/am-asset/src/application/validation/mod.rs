//! 分区校验
//!
//! 每个分区一个纯函数：读取草稿和参考数据，产出该分区的字段错误表，从不修改草稿

mod alloted_info;
mod asset_details;
mod finance_info;
mod insurance_info;
mod purchase_info;
mod warranty_info;

use rust_decimal::Decimal;

use crate::domain::draft::AssetDraft;
use crate::domain::error_map::{ErrorMap, FieldError, SectionErrors};
use crate::domain::fields::{Field, Section};
use crate::domain::reference::ReferenceCatalog;
use crate::domain::value_objects::UploadPolicy;

/// 校验依赖的外部数据
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub catalog: &'a ReferenceCatalog,
    pub upload_policy: &'a UploadPolicy,
    /// 错误消息中日期的显示格式
    pub date_format: &'a str,
}

pub struct ValidationEngine<'a> {
    ctx: ValidationContext<'a>,
}

impl<'a> ValidationEngine<'a> {
    pub fn new(ctx: ValidationContext<'a>) -> Self {
        Self { ctx }
    }

    /// 校验单个分区
    pub fn validate(&self, section: Section, draft: &AssetDraft) -> SectionErrors {
        match section {
            Section::AssetDetails => asset_details::validate(draft, &self.ctx),
            Section::PurchaseInfo => purchase_info::validate(draft),
            Section::FinanceInfo => finance_info::validate(draft, &self.ctx),
            Section::AllotedInfo => alloted_info::validate(draft),
            Section::WarrantyInfo => warranty_info::validate(draft, &self.ctx),
            Section::InsuranceInfo => insurance_info::validate(draft, &self.ctx),
        }
    }

    /// 校验一组分区
    pub fn validate_sections(&self, sections: &[Section], draft: &AssetDraft) -> ErrorMap {
        let mut map = ErrorMap::new();
        for &section in sections {
            map.set_section(section, self.validate(section, draft));
        }
        map
    }

    pub fn validate_all(&self, draft: &AssetDraft) -> ErrorMap {
        self.validate_sections(&Section::ALL, draft)
    }
}

fn check_non_negative(errors: &mut SectionErrors, field: Field, value: Option<Decimal>) {
    if value.is_some_and(|v| v < Decimal::ZERO) {
        errors.insert(
            field,
            FieldError::invalid_format(format!("{} must not be negative", field.label())),
        );
    }
}

fn check_percentage(errors: &mut SectionErrors, field: Field, value: Option<Decimal>) {
    if value.is_some_and(|v| v < Decimal::ZERO || v > Decimal::ONE_HUNDRED) {
        errors.insert(
            field,
            FieldError::invalid_format(format!("{} must be between 0 and 100", field.label())),
        );
    }
}

fn check_positive_months(errors: &mut SectionErrors, field: Field, value: Option<u32>) {
    if value == Some(0) {
        errors.insert(
            field,
            FieldError::invalid_format(format!("{} must be greater than 0", field.label())),
        );
    }
}
