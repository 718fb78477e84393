//! 采购信息分区

use chrono::NaiveDate;
use common::types::RefId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 采购信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInfo {
    /// 供应商
    pub vendor: Option<RefId>,
    /// 发票号
    pub invoice_no: String,
    /// 发票日期
    pub invoice_date: Option<NaiveDate>,
    /// 采购订单号
    pub po_number: String,
    /// 采购价格
    pub purchase_price: Option<Decimal>,
}
