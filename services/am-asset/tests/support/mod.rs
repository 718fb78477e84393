//! 集成测试共用的数据和步骤
#![allow(dead_code)]

use std::str::FromStr;

use am_asset::application::{EditorSession, EditorSettings, Transition};
use am_asset::domain::enums::{DepreciationMethod, Shift};
use am_asset::domain::fields::{FieldEdit, Section};
use am_asset::domain::reference::{CodeMode, ModelOption, ReferenceLoad};
use am_asset::domain::value_objects::{RateEntry, RateTable};
use chrono::NaiveDate;
use common::types::RefId;
use rust_decimal::Decimal;

pub const NEXT_CODE: &str = "AST-0100";

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn rate_table() -> RateTable {
    RateTable::new(
        DepreciationMethod::Slm,
        vec![
            RateEntry::new(36, dec("10.5"), dec("31.23")),
            RateEntry::new(60, dec("6.33"), dec("18.10")),
        ],
    )
    .unwrap()
}

pub fn models() -> Vec<ModelOption> {
    vec![
        ModelOption::new(10, "Latitude 5440", 1),
        ModelOption::new(11, "XPS 13", 1),
        ModelOption::new(20, "ThinkPad T14", 2),
    ]
}

/// 参考数据已全部就绪的新建会话
pub fn ready_session() -> EditorSession {
    let mut session = EditorSession::create(EditorSettings::default());
    session.apply_reference(ReferenceLoad::CodeMode(CodeMode::auto(NEXT_CODE)));
    session.apply_reference(ReferenceLoad::Models(models()));
    session.apply_reference(ReferenceLoad::RateTable(rate_table()));
    session
}

pub fn fill_asset_details(session: &mut EditorSession) {
    session.edit(FieldEdit::Name("Dell Latitude 5440".to_string()));
    session.edit(FieldEdit::Category(Some(RefId(1))));
    session.edit(FieldEdit::Location(Some(RefId(2))));
    session.edit(FieldEdit::Status(Some(RefId(3))));
    session.edit(FieldEdit::Brand(Some(RefId(1))));
    session.edit(FieldEdit::Model(Some(RefId(10))));
}

pub fn fill_purchase_info(session: &mut EditorSession) {
    session.edit(FieldEdit::Vendor(Some(RefId(5))));
    session.edit(FieldEdit::InvoiceNo("INV-2024-118".to_string()));
    session.edit(FieldEdit::InvoiceDate(date(2024, 3, 10)));
    session.edit(FieldEdit::PurchasePrice(Some(dec("85000"))));
}

pub fn fill_finance_info(session: &mut EditorSession) {
    session.edit(FieldEdit::LifeMonths(Some(36)));
    session.edit(FieldEdit::IncomeTaxDepreciationPct(Some(dec("40"))));
    session.edit(FieldEdit::ScrapValue(Some(dec("500"))));
    session.edit(FieldEdit::Shift(Some(Shift::Single)));
}

pub fn fill_alloted_info(session: &mut EditorSession) {
    session.edit(FieldEdit::Department(Some(RefId(3))));
    session.edit(FieldEdit::AllotedTo(Some(RefId(41))));
}

pub fn fill_warranty_info(session: &mut EditorSession) {
    session.edit(FieldEdit::WarrantyStart(date(2024, 3, 10)));
    session.edit(FieldEdit::WarrantyPeriodMonths(Some(24)));
}

/// 填写全部步骤并前进到保修信息
pub fn walk_to_warranty(session: &mut EditorSession) {
    fill_asset_details(session);
    assert_advanced(session.next());
    fill_purchase_info(session);
    assert_advanced(session.next());
    fill_finance_info(session);
    assert_advanced(session.next());
    fill_alloted_info(session);
    assert_advanced(session.next());
    fill_warranty_info(session);
    assert_eq!(session.current_section(), Section::WarrantyInfo);
}

pub fn assert_advanced(transition: Transition) {
    assert!(
        matches!(transition, Transition::Advanced { .. }),
        "expected to advance, got {:?}",
        transition
    );
}
