use crate::domain::draft::AssetDraft;
use crate::domain::error_map::{FieldError, SectionErrors};
use crate::domain::fields::Field;
use crate::domain::sections::is_blank;

use super::ValidationContext;

pub(super) fn validate(draft: &AssetDraft, ctx: &ValidationContext<'_>) -> SectionErrors {
    let details = draft.asset_details();
    let mut errors = SectionErrors::new();

    errors.require(Field::Name, !is_blank(&details.name));

    // 编码模式未知时按手工录入处理
    let code_required = ctx
        .catalog
        .code_mode()
        .is_none_or(|mode| mode.code_type.requires_code());
    if code_required {
        errors.require(Field::Code, !is_blank(&details.code));
    }

    errors.require(Field::Category, details.category.is_some());
    errors.require(Field::Location, details.location.is_some());
    errors.require(Field::Status, details.status.is_some());

    if let Some(model) = details.model.and_then(|id| ctx.catalog.find_model(id)) {
        if Some(model.brand) != details.brand {
            errors.insert(
                Field::Model,
                FieldError::cross_field(format!(
                    "Model {} does not belong to the selected brand",
                    model.display_name
                )),
            );
        }
    }

    if let Some(photo) = &details.photo {
        if let Err(e) = photo.check(ctx.upload_policy) {
            errors.insert(Field::Photo, FieldError::upload(e.to_string()));
        }
    }

    errors
}
