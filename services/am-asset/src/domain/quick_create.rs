//! 快速新建参考数据
//!
//! 在编辑器内直接新建分类、位置、品牌、型号、供应商，成功后立即可选

use common::types::{RefId, ReferenceOption};
use errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::domain::reference::{ModelOption, ReferenceCatalog, ReferenceKind};

const PINCODE_LENGTH: usize = 6;
const PHONE_LENGTH: usize = 10;
const MAX_NAME_LENGTH: usize = 100;

/// 快速新建记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuickCreateRecord {
    Category {
        name: String,
    },
    Location {
        name: String,
        #[serde(default)]
        pincode: Option<String>,
        #[serde(default)]
        latitude: Option<f64>,
        #[serde(default)]
        longitude: Option<f64>,
    },
    Brand {
        name: String,
    },
    Model {
        name: String,
        brand: Option<RefId>,
    },
    Vendor {
        name: String,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        phone: Option<String>,
    },
}

/// 新建成功后返回的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedReference {
    pub id: RefId,
    pub display_name: String,
}

impl QuickCreateRecord {
    pub fn name(&self) -> &str {
        match self {
            QuickCreateRecord::Category { name }
            | QuickCreateRecord::Location { name, .. }
            | QuickCreateRecord::Brand { name }
            | QuickCreateRecord::Model { name, .. }
            | QuickCreateRecord::Vendor { name, .. } => name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickCreateRecord::Category { .. } => "category",
            QuickCreateRecord::Location { .. } => "location",
            QuickCreateRecord::Brand { .. } => "brand",
            QuickCreateRecord::Model { .. } => "model",
            QuickCreateRecord::Vendor { .. } => "vendor",
        }
    }

    /// 对应的普通选项列表（型号单独存放）
    pub fn reference_kind(&self) -> Option<ReferenceKind> {
        match self {
            QuickCreateRecord::Category { .. } => Some(ReferenceKind::Category),
            QuickCreateRecord::Location { .. } => Some(ReferenceKind::Location),
            QuickCreateRecord::Brand { .. } => Some(ReferenceKind::Brand),
            QuickCreateRecord::Vendor { .. } => Some(ReferenceKind::Vendor),
            QuickCreateRecord::Model { .. } => None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let name = self.name().trim();
        if name.is_empty() {
            return Err(AppError::validation(format!("{} name is required", self.label())));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "{} name must not exceed {} characters",
                self.label(),
                MAX_NAME_LENGTH
            )));
        }

        match self {
            QuickCreateRecord::Location {
                pincode,
                latitude,
                longitude,
                ..
            } => {
                if let Some(pincode) = pincode.as_deref().map(str::trim) {
                    if pincode.len() != PINCODE_LENGTH
                        || !pincode.chars().all(|c| c.is_ascii_digit())
                    {
                        return Err(AppError::validation(format!(
                            "pincode must be {} digits",
                            PINCODE_LENGTH
                        )));
                    }
                }
                if let Some(lat) = latitude {
                    if !(-90.0..=90.0).contains(lat) {
                        return Err(AppError::validation(
                            "latitude must be between -90 and 90",
                        ));
                    }
                }
                if let Some(lng) = longitude {
                    if !(-180.0..=180.0).contains(lng) {
                        return Err(AppError::validation(
                            "longitude must be between -180 and 180",
                        ));
                    }
                }
            }
            QuickCreateRecord::Model { brand, .. } => {
                if brand.is_none() {
                    return Err(AppError::validation("model brand is required"));
                }
            }
            QuickCreateRecord::Vendor { email, phone, .. } => {
                if let Some(email) = email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
                    if !email_address::EmailAddress::is_valid(email) {
                        return Err(AppError::validation(format!(
                            "vendor email {} is invalid",
                            email
                        )));
                    }
                }
                if let Some(phone) = phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
                    if phone.len() != PHONE_LENGTH || !phone.chars().all(|c| c.is_ascii_digit()) {
                        return Err(AppError::validation(format!(
                            "vendor phone must be {} digits",
                            PHONE_LENGTH
                        )));
                    }
                }
            }
            QuickCreateRecord::Category { .. } | QuickCreateRecord::Brand { .. } => {}
        }

        Ok(())
    }

    /// 与已加载列表比对，同名即冲突
    pub fn check_duplicate(&self, catalog: &ReferenceCatalog) -> AppResult<()> {
        let duplicate = match (self, self.reference_kind()) {
            (QuickCreateRecord::Model { name, brand: Some(brand) }, _) => {
                catalog.has_model_named(*brand, name)
            }
            (_, Some(kind)) => catalog.has_option_named(kind, self.name()),
            _ => false,
        };
        if duplicate {
            return Err(AppError::conflict(format!(
                "{} {} already exists",
                self.label(),
                self.name().trim()
            )));
        }
        Ok(())
    }

    /// 把新建结果追加到内存列表
    pub fn append_to(&self, catalog: &mut ReferenceCatalog, created: &CreatedReference) {
        match (self, self.reference_kind()) {
            (QuickCreateRecord::Model { brand: Some(brand), .. }, _) => {
                catalog.append_model(ModelOption::new(
                    created.id,
                    created.display_name.clone(),
                    *brand,
                ));
            }
            (_, Some(kind)) => {
                catalog.append_option(
                    kind,
                    ReferenceOption::new(created.id, created.display_name.clone()),
                );
            }
            _ => {}
        }
    }
}
