//! 参考数据（下拉选项、型号、折旧率表、编码模式）

use common::types::{RefId, ReferenceOption};
use serde::{Deserialize, Serialize};

use crate::domain::enums::CodeType;
use crate::domain::value_objects::RateTable;

/// 参考数据种类（普通 id + 名称列表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Category,
    Location,
    Status,
    Brand,
    Condition,
    Vendor,
    Department,
    User,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 8] = [
        ReferenceKind::Category,
        ReferenceKind::Location,
        ReferenceKind::Status,
        ReferenceKind::Brand,
        ReferenceKind::Condition,
        ReferenceKind::Vendor,
        ReferenceKind::Department,
        ReferenceKind::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Category => "category",
            ReferenceKind::Location => "location",
            ReferenceKind::Status => "status",
            ReferenceKind::Brand => "brand",
            ReferenceKind::Condition => "condition",
            ReferenceKind::Vendor => "vendor",
            ReferenceKind::Department => "department",
            ReferenceKind::User => "user",
        }
    }
}

/// 型号选项（归属某个品牌）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub id: RefId,
    pub display_name: String,
    pub brand: RefId,
}

impl ModelOption {
    pub fn new(id: impl Into<RefId>, display_name: impl Into<String>, brand: impl Into<RefId>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            brand: brand.into(),
        }
    }
}

/// 编码模式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMode {
    pub code_type: CodeType,
    #[serde(default)]
    pub next_code: Option<String>,
}

impl CodeMode {
    pub fn auto(next_code: impl Into<String>) -> Self {
        Self {
            code_type: CodeType::Auto,
            next_code: Some(next_code.into()),
        }
    }

    pub fn manual() -> Self {
        Self {
            code_type: CodeType::Manual,
            next_code: None,
        }
    }
}

/// 一次参考数据加载的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceLoad {
    Options {
        kind: ReferenceKind,
        options: Vec<ReferenceOption>,
    },
    Models(Vec<ModelOption>),
    RateTable(RateTable),
    CodeMode(CodeMode),
}

impl ReferenceLoad {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceLoad::Options { kind, .. } => kind.as_str(),
            ReferenceLoad::Models(_) => "model",
            ReferenceLoad::RateTable(_) => "rate_table",
            ReferenceLoad::CodeMode(_) => "code_mode",
        }
    }
}

/// 编辑器内存中的参考数据
///
/// `None` 表示尚未加载完成；加载是异步的，可能晚于用户输入到达
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    categories: Option<Vec<ReferenceOption>>,
    locations: Option<Vec<ReferenceOption>>,
    statuses: Option<Vec<ReferenceOption>>,
    brands: Option<Vec<ReferenceOption>>,
    conditions: Option<Vec<ReferenceOption>>,
    vendors: Option<Vec<ReferenceOption>>,
    departments: Option<Vec<ReferenceOption>>,
    users: Option<Vec<ReferenceOption>>,
    models: Option<Vec<ModelOption>>,
    /// 型号列表加载前快速新建的型号
    pending_models: Vec<ModelOption>,
    rate_table: Option<RateTable>,
    code_mode: Option<CodeMode>,
}

impl ReferenceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: ReferenceKind) -> &Option<Vec<ReferenceOption>> {
        match kind {
            ReferenceKind::Category => &self.categories,
            ReferenceKind::Location => &self.locations,
            ReferenceKind::Status => &self.statuses,
            ReferenceKind::Brand => &self.brands,
            ReferenceKind::Condition => &self.conditions,
            ReferenceKind::Vendor => &self.vendors,
            ReferenceKind::Department => &self.departments,
            ReferenceKind::User => &self.users,
        }
    }

    fn slot_mut(&mut self, kind: ReferenceKind) -> &mut Option<Vec<ReferenceOption>> {
        match kind {
            ReferenceKind::Category => &mut self.categories,
            ReferenceKind::Location => &mut self.locations,
            ReferenceKind::Status => &mut self.statuses,
            ReferenceKind::Brand => &mut self.brands,
            ReferenceKind::Condition => &mut self.conditions,
            ReferenceKind::Vendor => &mut self.vendors,
            ReferenceKind::Department => &mut self.departments,
            ReferenceKind::User => &mut self.users,
        }
    }

    /// 写入一次加载结果
    ///
    /// 加载前已快速新建的条目若不在加载结果中则保留
    pub fn store(&mut self, load: ReferenceLoad) {
        match load {
            ReferenceLoad::Options { kind, mut options } => {
                let slot = self.slot_mut(kind);
                if let Some(existing) = slot.take() {
                    let extra: Vec<_> = existing
                        .into_iter()
                        .filter(|e| !options.iter().any(|o| o.id == e.id))
                        .collect();
                    options.extend(extra);
                }
                *slot = Some(options);
            }
            ReferenceLoad::Models(mut models) => {
                let existing = self.models.take().unwrap_or_default();
                let extra: Vec<_> = existing
                    .into_iter()
                    .chain(std::mem::take(&mut self.pending_models))
                    .filter(|e| !models.iter().any(|m| m.id == e.id))
                    .collect();
                models.extend(extra);
                self.models = Some(models);
            }
            ReferenceLoad::RateTable(table) => self.rate_table = Some(table),
            ReferenceLoad::CodeMode(mode) => self.code_mode = Some(mode),
        }
    }

    pub fn options(&self, kind: ReferenceKind) -> Option<&[ReferenceOption]> {
        self.slot(kind).as_deref()
    }

    pub fn models(&self) -> Option<&[ModelOption]> {
        self.models.as_deref()
    }

    pub fn rate_table(&self) -> Option<&RateTable> {
        self.rate_table.as_ref()
    }

    pub fn code_mode(&self) -> Option<&CodeMode> {
        self.code_mode.as_ref()
    }

    /// 按品牌过滤型号；型号列表尚未加载时返回 `None`
    pub fn models_for_brand(&self, brand: Option<RefId>) -> Option<Vec<&ModelOption>> {
        let models = self.models.as_ref()?;
        Some(match brand {
            Some(brand) => models.iter().filter(|m| m.brand == brand).collect(),
            None => Vec::new(),
        })
    }

    pub fn find_model(&self, id: RefId) -> Option<&ModelOption> {
        self.models.as_ref()?.iter().find(|m| m.id == id)
    }

    /// 列表中是否已有同名条目（忽略大小写）
    pub fn has_option_named(&self, kind: ReferenceKind, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.options(kind)
            .is_some_and(|options| options.iter().any(|o| o.display_name.to_lowercase() == name))
    }

    pub fn has_model_named(&self, brand: RefId, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.models
            .iter()
            .flatten()
            .chain(&self.pending_models)
            .any(|m| m.brand == brand && m.display_name.to_lowercase() == name)
    }

    /// 追加快速新建的条目；列表尚未加载时先建立列表
    pub fn append_option(&mut self, kind: ReferenceKind, option: ReferenceOption) {
        self.slot_mut(kind).get_or_insert_with(Vec::new).push(option);
    }

    /// 追加快速新建的型号；型号列表尚未加载时暂存，列表仍视为未加载
    pub fn append_model(&mut self, model: ModelOption) {
        match self.models.as_mut() {
            Some(models) => models.push(model),
            None => self.pending_models.push(model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_models() -> ReferenceCatalog {
        let mut catalog = ReferenceCatalog::new();
        catalog.store(ReferenceLoad::Models(vec![
            ModelOption::new(10, "Latitude 5440", 1),
            ModelOption::new(11, "XPS 13", 1),
            ModelOption::new(20, "ThinkPad T14", 2),
        ]));
        catalog
    }

    #[test]
    fn test_models_not_loaded() {
        let catalog = ReferenceCatalog::new();
        assert!(catalog.models_for_brand(Some(RefId(1))).is_none());
    }

    #[test]
    fn test_models_filtered_by_brand() {
        let catalog = catalog_with_models();
        let ids: Vec<i64> = catalog
            .models_for_brand(Some(RefId(1)))
            .unwrap()
            .iter()
            .map(|m| m.id.value())
            .collect();
        assert_eq!(ids, vec![10, 11]);
        assert!(catalog.models_for_brand(None).unwrap().is_empty());
    }

    #[test]
    fn test_append_before_load_creates_list() {
        let mut catalog = ReferenceCatalog::new();
        catalog.append_option(ReferenceKind::Vendor, ReferenceOption::new(5, "Acme Supplies"));
        assert!(catalog.has_option_named(ReferenceKind::Vendor, "acme supplies"));
        assert_eq!(catalog.options(ReferenceKind::Vendor).unwrap().len(), 1);
    }

    #[test]
    fn test_late_load_keeps_quick_created_entries() {
        let mut catalog = ReferenceCatalog::new();
        catalog.append_option(ReferenceKind::Brand, ReferenceOption::new(99, "Framework"));
        catalog.store(ReferenceLoad::Options {
            kind: ReferenceKind::Brand,
            options: vec![ReferenceOption::new(1, "Dell"), ReferenceOption::new(2, "Lenovo")],
        });
        let names: Vec<&str> = catalog
            .options(ReferenceKind::Brand)
            .unwrap()
            .iter()
            .map(|o| o.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Dell", "Lenovo", "Framework"]);
    }

    /// 加载前新建的型号不会让列表提前变为已加载
    #[test]
    fn test_model_created_before_load_waits_for_list() {
        let mut catalog = ReferenceCatalog::new();
        catalog.append_model(ModelOption::new(99, "EliteBook 840", 3));
        assert!(catalog.models().is_none());
        assert!(catalog.models_for_brand(Some(RefId(3))).is_none());
        assert!(catalog.has_model_named(RefId(3), "elitebook 840"));

        catalog.store(ReferenceLoad::Models(vec![
            ModelOption::new(10, "Latitude 5440", 1),
            ModelOption::new(99, "EliteBook 840", 3),
            ModelOption::new(20, "ThinkPad T14", 2),
        ]));
        assert_eq!(catalog.models().map(|m| m.len()), Some(3));

        catalog.append_model(ModelOption::new(100, "ProBook 450", 3));
        let ids: Vec<i64> = catalog
            .models_for_brand(Some(RefId(3)))
            .unwrap()
            .iter()
            .map(|m| m.id.value())
            .collect();
        assert_eq!(ids, vec![99, 100]);
    }

    /// 加载结果中没有的暂存型号追加在末尾
    #[test]
    fn test_pending_model_merged_into_late_list() {
        let mut catalog = ReferenceCatalog::new();
        catalog.append_model(ModelOption::new(99, "EliteBook 840", 3));
        catalog.store(ReferenceLoad::Models(vec![ModelOption::new(10, "Latitude 5440", 1)]));
        let ids: Vec<i64> = catalog.models().unwrap().iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![10, 99]);
    }

    #[test]
    fn test_model_name_scoped_to_brand() {
        let catalog = catalog_with_models();
        assert!(catalog.has_model_named(RefId(1), "xps 13"));
        assert!(!catalog.has_model_named(RefId(2), "xps 13"));
    }
}
