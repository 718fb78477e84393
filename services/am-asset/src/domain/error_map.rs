//! 分区错误表

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::fields::{Field, Section};

/// 字段错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldErrorKind {
    /// 必填字段为空
    Required,
    /// 格式或取值范围不合法
    InvalidFormat,
    /// 日期 / 金额先后关系不成立
    CrossFieldOrder,
    /// 使用寿命在折旧率表中没有对应条目
    UnresolvedLookup,
    /// 上传文件超限或类型不允许
    UploadConstraint,
}

/// 单个字段的错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// "{label} is required"
    pub fn required(field: Field) -> Self {
        Self::new(
            FieldErrorKind::Required,
            format!("{} is required", field.label()),
        )
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::InvalidFormat, message)
    }

    pub fn cross_field(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::CrossFieldOrder, message)
    }

    pub fn unresolved_lookup(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::UnresolvedLookup, message)
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::UploadConstraint, message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 单个分区的字段错误表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionErrors(BTreeMap<Field, FieldError>);

impl SectionErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一字段只保留第一条错误
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn require(&mut self, field: Field, present: bool) {
        if !present {
            self.insert(field, FieldError::required(field));
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }
}

/// 全部分区的错误表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap(BTreeMap<Section, SectionErrors>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换某个分区的错误（空表即清除）
    pub fn set_section(&mut self, section: Section, errors: SectionErrors) {
        if errors.is_empty() {
            self.0.remove(&section);
        } else {
            self.0.insert(section, errors);
        }
    }

    pub fn clear_section(&mut self, section: Section) {
        self.0.remove(&section);
    }

    pub fn section(&self, section: Section) -> Option<&SectionErrors> {
        self.0.get(&section)
    }

    pub fn message(&self, section: Section, field: Field) -> Option<&str> {
        self.section(section).and_then(|errors| errors.message(field))
    }

    pub fn is_section_valid(&self, section: Section) -> bool {
        self.section(section).is_none_or(SectionErrors::is_valid)
    }

    pub fn is_valid(&self) -> bool {
        self.0.values().all(SectionErrors::is_valid)
    }

    pub fn invalid_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.0
            .iter()
            .filter(|(_, errors)| !errors.is_valid())
            .map(|(section, _)| *section)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &SectionErrors)> {
        self.0.iter().map(|(s, e)| (*s, e))
    }
}
