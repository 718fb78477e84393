//! 资产草稿聚合

use serde::{Deserialize, Serialize};

use crate::domain::fields::{FieldEdit, Section};
use crate::domain::sections::{
    AllotedInfo, AssetDetails, FinanceInfo, InsuranceInfo, PurchaseInfo, WarrantyInfo,
};

/// 资产草稿
///
/// 正在新建或编辑的资产记录，由六个分区组成。
/// 只能通过 `DraftStore` 修改，校验是独立的显式步骤。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetDraft {
    asset_details: AssetDetails,
    purchase_info: PurchaseInfo,
    finance_info: FinanceInfo,
    alloted_info: AllotedInfo,
    warranty_info: WarrantyInfo,
    insurance_info: InsuranceInfo,
}

/// 整个分区的替换内容
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    AssetDetails(AssetDetails),
    PurchaseInfo(PurchaseInfo),
    FinanceInfo(FinanceInfo),
    AllotedInfo(AllotedInfo),
    WarrantyInfo(WarrantyInfo),
    InsuranceInfo(InsuranceInfo),
}

impl SectionData {
    pub fn section(&self) -> Section {
        match self {
            SectionData::AssetDetails(_) => Section::AssetDetails,
            SectionData::PurchaseInfo(_) => Section::PurchaseInfo,
            SectionData::FinanceInfo(_) => Section::FinanceInfo,
            SectionData::AllotedInfo(_) => Section::AllotedInfo,
            SectionData::WarrantyInfo(_) => Section::WarrantyInfo,
            SectionData::InsuranceInfo(_) => Section::InsuranceInfo,
        }
    }
}

impl AssetDraft {
    /// 从各分区构建草稿（用于从已有记录加载）
    pub fn from_sections(
        asset_details: AssetDetails,
        purchase_info: PurchaseInfo,
        finance_info: FinanceInfo,
        alloted_info: AllotedInfo,
        warranty_info: WarrantyInfo,
        insurance_info: InsuranceInfo,
    ) -> Self {
        Self {
            asset_details,
            purchase_info,
            finance_info,
            alloted_info,
            warranty_info,
            insurance_info,
        }
    }

    // ========== Getters ==========

    pub fn asset_details(&self) -> &AssetDetails {
        &self.asset_details
    }

    pub fn purchase_info(&self) -> &PurchaseInfo {
        &self.purchase_info
    }

    pub fn finance_info(&self) -> &FinanceInfo {
        &self.finance_info
    }

    pub fn alloted_info(&self) -> &AllotedInfo {
        &self.alloted_info
    }

    pub fn warranty_info(&self) -> &WarrantyInfo {
        &self.warranty_info
    }

    pub fn insurance_info(&self) -> &InsuranceInfo {
        &self.insurance_info
    }

    // ========== 修改（仅限 crate 内部） ==========

    pub(crate) fn asset_details_mut(&mut self) -> &mut AssetDetails {
        &mut self.asset_details
    }

    pub(crate) fn finance_info_mut(&mut self) -> &mut FinanceInfo {
        &mut self.finance_info
    }

    pub(crate) fn warranty_info_mut(&mut self) -> &mut WarrantyInfo {
        &mut self.warranty_info
    }

    pub(crate) fn insurance_info_mut(&mut self) -> &mut InsuranceInfo {
        &mut self.insurance_info
    }

    /// 替换整个分区
    pub(crate) fn replace(&mut self, data: SectionData) {
        match data {
            SectionData::AssetDetails(d) => self.asset_details = d,
            SectionData::PurchaseInfo(d) => self.purchase_info = d,
            SectionData::FinanceInfo(d) => self.finance_info = d,
            SectionData::AllotedInfo(d) => self.alloted_info = d,
            SectionData::WarrantyInfo(d) => self.warranty_info = d,
            SectionData::InsuranceInfo(d) => self.insurance_info = d,
        }
    }

    /// 写入单个字段，不触发联动也不校验
    pub(crate) fn apply(&mut self, edit: FieldEdit) {
        let details = &mut self.asset_details;
        let purchase = &mut self.purchase_info;
        let finance = &mut self.finance_info;
        let alloted = &mut self.alloted_info;
        let warranty = &mut self.warranty_info;
        let insurance = &mut self.insurance_info;

        match edit {
            FieldEdit::Name(v) => details.name = v,
            FieldEdit::Code(v) => details.code = v,
            FieldEdit::Category(v) => details.category = v,
            FieldEdit::Location(v) => details.location = v,
            FieldEdit::Status(v) => details.status = v,
            FieldEdit::Brand(v) => details.brand = v,
            FieldEdit::Model(v) => details.model = v,
            FieldEdit::SerialNo(v) => details.serial_no = v,
            FieldEdit::Description(v) => details.description = v,
            FieldEdit::Condition(v) => details.condition = v,
            FieldEdit::Photo(v) => details.photo = v,
            FieldEdit::Vendor(v) => purchase.vendor = v,
            FieldEdit::InvoiceNo(v) => purchase.invoice_no = v,
            FieldEdit::InvoiceDate(v) => purchase.invoice_date = v,
            FieldEdit::PoNumber(v) => purchase.po_number = v,
            FieldEdit::PurchasePrice(v) => purchase.purchase_price = v,
            FieldEdit::Depreciable(v) => finance.depreciable = v,
            FieldEdit::CapitalizationPrice(v) => finance.capitalization_price = v,
            FieldEdit::CapitalizationDate(v) => finance.capitalization_date = v,
            FieldEdit::LifeMonths(v) => finance.life_months = v,
            FieldEdit::DepreciationPct(v) => finance.depreciation_pct = v,
            FieldEdit::IncomeTaxDepreciationPct(v) => finance.income_tax_depreciation_pct = v,
            FieldEdit::Shift(v) => finance.shift = v,
            FieldEdit::ScrapValue(v) => finance.scrap_value = v,
            FieldEdit::Department(v) => alloted.department = v,
            FieldEdit::AllotedTo(v) => alloted.alloted_to = v,
            FieldEdit::AllotedUpTo(v) => alloted.alloted_up_to = v,
            FieldEdit::WarrantyStatus(v) => warranty.warranty_status = v,
            FieldEdit::AmcVendor(v) => warranty.amc_vendor = v,
            FieldEdit::AmcStart(v) => warranty.amc_start = v,
            FieldEdit::AmcEnd(v) => warranty.amc_end = v,
            FieldEdit::WarrantyStart(v) => warranty.warranty_start = v,
            FieldEdit::WarrantyPeriodMonths(v) => warranty.warranty_period_months = v,
            FieldEdit::WarrantyEnd(v) => warranty.warranty_end = v,
            FieldEdit::InsuranceStart(v) => insurance.insurance_start = v,
            FieldEdit::InsuranceEnd(v) => insurance.insurance_end = v,
            FieldEdit::InsurancePeriodMonths(v) => insurance.insurance_period_months = v,
            FieldEdit::InsuranceCompanyName(v) => insurance.insurance_company_name = v,
        }
    }
}
