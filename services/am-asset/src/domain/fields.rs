//! 分区与字段词汇表

use std::fmt;

use chrono::NaiveDate;
use common::types::RefId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::{Depreciable, Shift, WarrantyStatus};
use crate::domain::value_objects::PhotoAttachment;

/// 草稿分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    AssetDetails,
    PurchaseInfo,
    FinanceInfo,
    AllotedInfo,
    WarrantyInfo,
    InsuranceInfo,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::AssetDetails,
        Section::PurchaseInfo,
        Section::FinanceInfo,
        Section::AllotedInfo,
        Section::WarrantyInfo,
        Section::InsuranceInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::AssetDetails => "AssetDetails",
            Section::PurchaseInfo => "PurchaseInfo",
            Section::FinanceInfo => "FinanceInfo",
            Section::AllotedInfo => "AllotedInfo",
            Section::WarrantyInfo => "WarrantyInfo",
            Section::InsuranceInfo => "InsuranceInfo",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 草稿字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    // AssetDetails
    Name,
    Code,
    Category,
    Location,
    Status,
    Brand,
    Model,
    SerialNo,
    Description,
    Condition,
    Photo,
    // PurchaseInfo
    Vendor,
    InvoiceNo,
    InvoiceDate,
    PoNumber,
    PurchasePrice,
    // FinanceInfo
    Depreciable,
    CapitalizationPrice,
    CapitalizationDate,
    LifeMonths,
    DepreciationPct,
    IncomeTaxDepreciationPct,
    Shift,
    ScrapValue,
    // AllotedInfo
    Department,
    AllotedTo,
    AllotedUpTo,
    // WarrantyInfo
    WarrantyStatus,
    AmcVendor,
    AmcStart,
    AmcEnd,
    WarrantyStart,
    WarrantyPeriodMonths,
    WarrantyEnd,
    // InsuranceInfo
    InsuranceStart,
    InsuranceEnd,
    InsurancePeriodMonths,
    InsuranceCompanyName,
}

impl Field {
    /// 字段所属分区
    pub fn section(&self) -> Section {
        match self {
            Self::Name
            | Self::Code
            | Self::Category
            | Self::Location
            | Self::Status
            | Self::Brand
            | Self::Model
            | Self::SerialNo
            | Self::Description
            | Self::Condition
            | Self::Photo => Section::AssetDetails,
            Self::Vendor
            | Self::InvoiceNo
            | Self::InvoiceDate
            | Self::PoNumber
            | Self::PurchasePrice => Section::PurchaseInfo,
            Self::Depreciable
            | Self::CapitalizationPrice
            | Self::CapitalizationDate
            | Self::LifeMonths
            | Self::DepreciationPct
            | Self::IncomeTaxDepreciationPct
            | Self::Shift
            | Self::ScrapValue => Section::FinanceInfo,
            Self::Department | Self::AllotedTo | Self::AllotedUpTo => Section::AllotedInfo,
            Self::WarrantyStatus
            | Self::AmcVendor
            | Self::AmcStart
            | Self::AmcEnd
            | Self::WarrantyStart
            | Self::WarrantyPeriodMonths
            | Self::WarrantyEnd => Section::WarrantyInfo,
            Self::InsuranceStart
            | Self::InsuranceEnd
            | Self::InsurancePeriodMonths
            | Self::InsuranceCompanyName => Section::InsuranceInfo,
        }
    }

    /// camelCase 字段名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::Category => "category",
            Self::Location => "location",
            Self::Status => "status",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::SerialNo => "serialNo",
            Self::Description => "description",
            Self::Condition => "condition",
            Self::Photo => "photo",
            Self::Vendor => "vendor",
            Self::InvoiceNo => "invoiceNo",
            Self::InvoiceDate => "invoiceDate",
            Self::PoNumber => "poNumber",
            Self::PurchasePrice => "purchasePrice",
            Self::Depreciable => "depreciable",
            Self::CapitalizationPrice => "capitalizationPrice",
            Self::CapitalizationDate => "capitalizationDate",
            Self::LifeMonths => "lifeMonths",
            Self::DepreciationPct => "depreciationPct",
            Self::IncomeTaxDepreciationPct => "incomeTaxDepreciationPct",
            Self::Shift => "shift",
            Self::ScrapValue => "scrapValue",
            Self::Department => "department",
            Self::AllotedTo => "allotedTo",
            Self::AllotedUpTo => "allotedUpTo",
            Self::WarrantyStatus => "warrantyStatus",
            Self::AmcVendor => "amcVendor",
            Self::AmcStart => "amcStart",
            Self::AmcEnd => "amcEnd",
            Self::WarrantyStart => "warrantyStart",
            Self::WarrantyPeriodMonths => "warrantyPeriodMonths",
            Self::WarrantyEnd => "warrantyEnd",
            Self::InsuranceStart => "insuranceStart",
            Self::InsuranceEnd => "insuranceEnd",
            Self::InsurancePeriodMonths => "insurancePeriodMonths",
            Self::InsuranceCompanyName => "insuranceCompanyName",
        }
    }

    /// 提示信息中使用的显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Asset name",
            Self::Code => "Asset code",
            Self::Category => "Category",
            Self::Location => "Location",
            Self::Status => "Status",
            Self::Brand => "Brand",
            Self::Model => "Model",
            Self::SerialNo => "Serial number",
            Self::Description => "Description",
            Self::Condition => "Condition",
            Self::Photo => "Photo",
            Self::Vendor => "Vendor",
            Self::InvoiceNo => "Invoice number",
            Self::InvoiceDate => "Invoice date",
            Self::PoNumber => "PO number",
            Self::PurchasePrice => "Purchase price",
            Self::Depreciable => "Depreciable",
            Self::CapitalizationPrice => "Capitalization price",
            Self::CapitalizationDate => "Capitalization date",
            Self::LifeMonths => "Life (months)",
            Self::DepreciationPct => "Depreciation %",
            Self::IncomeTaxDepreciationPct => "Income tax depreciation %",
            Self::Shift => "Shift",
            Self::ScrapValue => "Scrap value",
            Self::Department => "Department",
            Self::AllotedTo => "Alloted to",
            Self::AllotedUpTo => "Alloted up to",
            Self::WarrantyStatus => "Warranty status",
            Self::AmcVendor => "AMC vendor",
            Self::AmcStart => "AMC start date",
            Self::AmcEnd => "AMC end date",
            Self::WarrantyStart => "Warranty start date",
            Self::WarrantyPeriodMonths => "Warranty period (months)",
            Self::WarrantyEnd => "Warranty end date",
            Self::InsuranceStart => "Insurance start date",
            Self::InsuranceEnd => "Insurance end date",
            Self::InsurancePeriodMonths => "Insurance period (months)",
            Self::InsuranceCompanyName => "Insurance company name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 单个字段的编辑（携带强类型值）
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Code(String),
    Category(Option<RefId>),
    Location(Option<RefId>),
    Status(Option<RefId>),
    Brand(Option<RefId>),
    Model(Option<RefId>),
    SerialNo(String),
    Description(String),
    Condition(Option<RefId>),
    Photo(Option<PhotoAttachment>),
    Vendor(Option<RefId>),
    InvoiceNo(String),
    InvoiceDate(Option<NaiveDate>),
    PoNumber(String),
    PurchasePrice(Option<Decimal>),
    Depreciable(Depreciable),
    CapitalizationPrice(Option<Decimal>),
    CapitalizationDate(Option<NaiveDate>),
    LifeMonths(Option<u32>),
    DepreciationPct(Option<Decimal>),
    IncomeTaxDepreciationPct(Option<Decimal>),
    Shift(Option<Shift>),
    ScrapValue(Option<Decimal>),
    Department(Option<RefId>),
    AllotedTo(Option<RefId>),
    AllotedUpTo(Option<NaiveDate>),
    WarrantyStatus(WarrantyStatus),
    AmcVendor(Option<RefId>),
    AmcStart(Option<NaiveDate>),
    AmcEnd(Option<NaiveDate>),
    WarrantyStart(Option<NaiveDate>),
    WarrantyPeriodMonths(Option<u32>),
    WarrantyEnd(Option<NaiveDate>),
    InsuranceStart(Option<NaiveDate>),
    InsuranceEnd(Option<NaiveDate>),
    InsurancePeriodMonths(Option<u32>),
    InsuranceCompanyName(String),
}

impl FieldEdit {
    /// 被编辑的字段
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Name(_) => Field::Name,
            FieldEdit::Code(_) => Field::Code,
            FieldEdit::Category(_) => Field::Category,
            FieldEdit::Location(_) => Field::Location,
            FieldEdit::Status(_) => Field::Status,
            FieldEdit::Brand(_) => Field::Brand,
            FieldEdit::Model(_) => Field::Model,
            FieldEdit::SerialNo(_) => Field::SerialNo,
            FieldEdit::Description(_) => Field::Description,
            FieldEdit::Condition(_) => Field::Condition,
            FieldEdit::Photo(_) => Field::Photo,
            FieldEdit::Vendor(_) => Field::Vendor,
            FieldEdit::InvoiceNo(_) => Field::InvoiceNo,
            FieldEdit::InvoiceDate(_) => Field::InvoiceDate,
            FieldEdit::PoNumber(_) => Field::PoNumber,
            FieldEdit::PurchasePrice(_) => Field::PurchasePrice,
            FieldEdit::Depreciable(_) => Field::Depreciable,
            FieldEdit::CapitalizationPrice(_) => Field::CapitalizationPrice,
            FieldEdit::CapitalizationDate(_) => Field::CapitalizationDate,
            FieldEdit::LifeMonths(_) => Field::LifeMonths,
            FieldEdit::DepreciationPct(_) => Field::DepreciationPct,
            FieldEdit::IncomeTaxDepreciationPct(_) => Field::IncomeTaxDepreciationPct,
            FieldEdit::Shift(_) => Field::Shift,
            FieldEdit::ScrapValue(_) => Field::ScrapValue,
            FieldEdit::Department(_) => Field::Department,
            FieldEdit::AllotedTo(_) => Field::AllotedTo,
            FieldEdit::AllotedUpTo(_) => Field::AllotedUpTo,
            FieldEdit::WarrantyStatus(_) => Field::WarrantyStatus,
            FieldEdit::AmcVendor(_) => Field::AmcVendor,
            FieldEdit::AmcStart(_) => Field::AmcStart,
            FieldEdit::AmcEnd(_) => Field::AmcEnd,
            FieldEdit::WarrantyStart(_) => Field::WarrantyStart,
            FieldEdit::WarrantyPeriodMonths(_) => Field::WarrantyPeriodMonths,
            FieldEdit::WarrantyEnd(_) => Field::WarrantyEnd,
            FieldEdit::InsuranceStart(_) => Field::InsuranceStart,
            FieldEdit::InsuranceEnd(_) => Field::InsuranceEnd,
            FieldEdit::InsurancePeriodMonths(_) => Field::InsurancePeriodMonths,
            FieldEdit::InsuranceCompanyName(_) => Field::InsuranceCompanyName,
        }
    }

    pub fn section(&self) -> Section {
        self.field().section()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_sections() {
        assert_eq!(Field::Model.section(), Section::AssetDetails);
        assert_eq!(Field::InvoiceDate.section(), Section::PurchaseInfo);
        assert_eq!(Field::ScrapValue.section(), Section::FinanceInfo);
        assert_eq!(Field::AllotedUpTo.section(), Section::AllotedInfo);
        assert_eq!(Field::AmcVendor.section(), Section::WarrantyInfo);
        assert_eq!(Field::InsuranceCompanyName.section(), Section::InsuranceInfo);
    }

    #[test]
    fn test_edit_targets_field() {
        assert_eq!(FieldEdit::LifeMonths(Some(36)).field(), Field::LifeMonths);
        assert_eq!(
            FieldEdit::Depreciable(Depreciable::No).section(),
            Section::FinanceInfo
        );
        assert_eq!(Field::IncomeTaxDepreciationPct.to_string(), "incomeTaxDepreciationPct");
    }
}
