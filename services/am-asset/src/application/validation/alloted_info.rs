use crate::domain::draft::AssetDraft;
use crate::domain::error_map::SectionErrors;
use crate::domain::fields::Field;

pub(super) fn validate(draft: &AssetDraft) -> SectionErrors {
    let info = draft.alloted_info();
    let mut errors = SectionErrors::new();
    errors.require(Field::Department, info.department.is_some());
    errors.require(Field::AllotedTo, info.alloted_to.is_some());
    errors
}
