//! 资产提交载荷
//!
//! 草稿逐字段映射到提交接口的固定字段名；日期为 `YYYY-MM-DD`。
//! 编辑已有资产时同一结构用于回填草稿。

use chrono::NaiveDate;
use common::types::RefId;
use errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::draft::AssetDraft;
use crate::domain::enums::{Depreciable, Shift, WarrantyStatus};
use crate::domain::sections::{
    AllotedInfo, AssetDetails, FinanceInfo, InsuranceInfo, PurchaseInfo, WarrantyInfo,
};
use crate::domain::value_objects::PhotoAttachment;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPayload {
    // 资产信息
    pub asset_name: String,
    pub asset_code: String,
    pub category: Option<RefId>,
    pub location: Option<RefId>,
    pub status: Option<RefId>,
    pub brand: Option<RefId>,
    pub model: Option<RefId>,
    pub serial_no: String,
    pub description: String,
    pub condition: Option<RefId>,
    pub file_attached: Option<PhotoAttachment>,

    // 采购信息
    pub vendor: Option<RefId>,
    pub invoice_no: String,
    #[serde(with = "super::dates")]
    pub invoice_date: Option<NaiveDate>,
    pub po_number: String,
    pub purchase_price: Option<Decimal>,

    // 财务信息
    #[serde(rename = "isDepreciation")]
    pub is_depreciation: Depreciable,
    pub capitalization_price: Option<Decimal>,
    #[serde(with = "super::dates")]
    pub capitalization_date: Option<NaiveDate>,
    pub lifetime_months: Option<u32>,
    pub depreciation_perc: Option<Decimal>,
    pub incometaxdepreciation_per: Option<Decimal>,
    pub shift: Option<Shift>,
    pub scrap_value: Option<Decimal>,

    // 分配信息
    pub dept: Option<RefId>,
    pub alloted_to: Option<RefId>,
    #[serde(with = "super::dates")]
    pub alloted_upto: Option<NaiveDate>,

    // 保修 / 维保
    pub warranty: WarrantyStatus,
    pub amc_vendor: Option<RefId>,
    #[serde(with = "super::dates")]
    pub amc_startdate: Option<NaiveDate>,
    #[serde(with = "super::dates")]
    pub amc_enddate: Option<NaiveDate>,
    #[serde(with = "super::dates")]
    pub warranty_startdate: Option<NaiveDate>,
    pub warranty_period: Option<u32>,
    #[serde(with = "super::dates")]
    pub warranty_enddate: Option<NaiveDate>,

    // 保险
    #[serde(with = "super::dates")]
    pub insurance_startdate: Option<NaiveDate>,
    #[serde(rename = "insurance_companyName")]
    pub insurance_company_name: String,
    pub insurance_period: Option<u32>,
    #[serde(with = "super::dates")]
    pub insurance_enddate: Option<NaiveDate>,
}

impl AssetPayload {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::validation(format!("Invalid asset record: {}", e)))
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::internal(e.to_string()))
    }
}

impl From<&AssetDraft> for AssetPayload {
    fn from(draft: &AssetDraft) -> Self {
        let details = draft.asset_details();
        let purchase = draft.purchase_info();
        let finance = draft.finance_info();
        let alloted = draft.alloted_info();
        let warranty = draft.warranty_info();
        let insurance = draft.insurance_info();

        Self {
            asset_name: details.name.trim().to_string(),
            asset_code: details.code.trim().to_string(),
            category: details.category,
            location: details.location,
            status: details.status,
            brand: details.brand,
            model: details.model,
            serial_no: details.serial_no.clone(),
            description: details.description.clone(),
            condition: details.condition,
            file_attached: details.photo.clone(),

            vendor: purchase.vendor,
            invoice_no: purchase.invoice_no.trim().to_string(),
            invoice_date: purchase.invoice_date,
            po_number: purchase.po_number.clone(),
            purchase_price: purchase.purchase_price,

            is_depreciation: finance.depreciable,
            capitalization_price: finance.capitalization_price,
            capitalization_date: finance.capitalization_date,
            lifetime_months: finance.life_months,
            depreciation_perc: finance.depreciation_pct,
            incometaxdepreciation_per: finance.income_tax_depreciation_pct,
            shift: finance.shift,
            scrap_value: finance.scrap_value,

            dept: alloted.department,
            alloted_to: alloted.alloted_to,
            alloted_upto: alloted.alloted_up_to,

            warranty: warranty.warranty_status,
            amc_vendor: warranty.amc_vendor,
            amc_startdate: warranty.amc_start,
            amc_enddate: warranty.amc_end,
            warranty_startdate: warranty.warranty_start,
            warranty_period: warranty.warranty_period_months,
            warranty_enddate: warranty.warranty_end,

            insurance_startdate: insurance.insurance_start,
            insurance_company_name: insurance.insurance_company_name.clone(),
            insurance_period: insurance.insurance_period_months,
            insurance_enddate: insurance.insurance_end,
        }
    }
}

impl From<AssetPayload> for AssetDraft {
    fn from(p: AssetPayload) -> Self {
        AssetDraft::from_sections(
            AssetDetails {
                name: p.asset_name,
                code: p.asset_code,
                category: p.category,
                location: p.location,
                status: p.status,
                brand: p.brand,
                model: p.model,
                serial_no: p.serial_no,
                description: p.description,
                condition: p.condition,
                photo: p.file_attached,
            },
            PurchaseInfo {
                vendor: p.vendor,
                invoice_no: p.invoice_no,
                invoice_date: p.invoice_date,
                po_number: p.po_number,
                purchase_price: p.purchase_price,
            },
            FinanceInfo {
                depreciable: p.is_depreciation,
                capitalization_price: p.capitalization_price,
                capitalization_date: p.capitalization_date,
                life_months: p.lifetime_months,
                depreciation_pct: p.depreciation_perc,
                income_tax_depreciation_pct: p.incometaxdepreciation_per,
                shift: p.shift,
                scrap_value: p.scrap_value,
            },
            AllotedInfo {
                department: p.dept,
                alloted_to: p.alloted_to,
                alloted_up_to: p.alloted_upto,
            },
            WarrantyInfo {
                warranty_status: p.warranty,
                amc_vendor: p.amc_vendor,
                amc_start: p.amc_startdate,
                amc_end: p.amc_enddate,
                warranty_start: p.warranty_startdate,
                warranty_period_months: p.warranty_period,
                warranty_end: p.warranty_enddate,
            },
            InsuranceInfo {
                insurance_start: p.insurance_startdate,
                insurance_end: p.insurance_enddate,
                insurance_period_months: p.insurance_period,
                insurance_company_name: p.insurance_company_name,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::FieldEdit;
    use serde_json::{Value, json};

    #[test]
    fn test_wire_names_and_date_format() {
        let mut draft = AssetDraft::default();
        draft.apply(FieldEdit::Name("  Epson Projector ".to_string()));
        draft.apply(FieldEdit::InvoiceDate(NaiveDate::from_ymd_opt(2024, 3, 9)));
        draft.apply(FieldEdit::InsuranceCompanyName("Acme Assurance".to_string()));
        draft.apply(FieldEdit::Shift(Some(Shift::OneAndHalf)));
        draft.apply(FieldEdit::WarrantyStatus(WarrantyStatus::Amc));

        let json = AssetPayload::from(&draft).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["asset_name"], json!("Epson Projector"));
        assert_eq!(value["invoice_date"], json!("2024-03-09"));
        assert_eq!(value["insurance_companyName"], json!("Acme Assurance"));
        assert_eq!(value["isDepreciation"], json!("yes"));
        assert_eq!(value["shift"], json!("150pct"));
        assert_eq!(value["warranty"], json!("amc"));
        assert_eq!(value["capitalization_date"], Value::Null);
    }

    #[test]
    fn test_hydrate_tolerates_blank_dates() {
        let payload = AssetPayload::from_json(
            r#"{
                "asset_name": "Dell Latitude",
                "category": 4,
                "invoice_date": "2024-01-31",
                "warranty_startdate": "",
                "lifetime_months": 36,
                "isDepreciation": "no"
            }"#,
        )
        .unwrap();
        let draft = AssetDraft::from(payload);
        assert_eq!(draft.asset_details().category, Some(RefId(4)));
        assert_eq!(
            draft.purchase_info().invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert_eq!(draft.warranty_info().warranty_start, None);
        assert!(!draft.finance_info().is_depreciable());
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = AssetPayload::from_json(r#"{"amc_enddate": "31/01/2024"}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
