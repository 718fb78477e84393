//! 编辑流程测试
//!
//! 覆盖：
//! - 分区向导的前进 / 后退
//! - 派生字段联动（资本化日期、保修到期日、型号过滤、折旧率）
//! - 折旧开关的快照与恢复
//! - 保险分区的条件必填
//! - 编码模式

mod support;

use am_asset::application::{EditorSession, EditorSettings, Transition};
use am_asset::domain::enums::{CodeType, Depreciable};
use am_asset::domain::error_map::FieldErrorKind;
use am_asset::domain::fields::{Field, FieldEdit, Section};
use am_asset::domain::reference::{CodeMode, ReferenceLoad};
use chrono::Days;
use common::types::RefId;

use support::*;

// ============================================================================
// 向导
// ============================================================================

/// 各分区填写完整后依次前进到保修信息
#[test]
fn test_complete_draft_walks_to_warranty() {
    let mut session = ready_session();
    walk_to_warranty(&mut session);

    assert!(session.errors().is_valid());
    assert_eq!(session.next(), Transition::AtBoundary(Section::WarrantyInfo));
}

/// 后退不做校验
#[test]
fn test_prev_is_never_blocked() {
    let mut session = ready_session();
    fill_asset_details(&mut session);
    assert_advanced(session.next());

    assert_eq!(
        session.prev(),
        Transition::Retreated {
            from: Section::PurchaseInfo,
            to: Section::AssetDetails
        }
    );
    assert_eq!(session.current_section(), Section::AssetDetails);
}

/// 错误修正后即可前进
#[test]
fn test_blocked_next_recovers_after_correction() {
    let mut session = ready_session();
    fill_asset_details(&mut session);
    session.edit(FieldEdit::Status(None));

    let transition = session.next();
    assert!(transition.is_blocked());
    assert_eq!(
        session.errors().message(Section::AssetDetails, Field::Status),
        Some("Status is required")
    );

    session.edit(FieldEdit::Status(Some(RefId(3))));
    assert!(session.errors().is_section_valid(Section::AssetDetails));
    assert_advanced(session.next());
}

// ============================================================================
// 资本化日期
// ============================================================================

/// 资本化日期早于发票日期时才有错误
#[test]
fn test_capitalization_date_never_before_invoice_date() {
    let invoice = date(2024, 3, 10).unwrap();

    for offset in -3i64..=3 {
        let mut session = ready_session();
        fill_purchase_info(&mut session);

        let capitalized = if offset < 0 {
            invoice.checked_sub_days(Days::new(offset.unsigned_abs()))
        } else {
            invoice.checked_add_days(Days::new(offset as u64))
        };
        session.edit(FieldEdit::CapitalizationDate(capitalized));

        let has_error = session
            .errors()
            .section(Section::FinanceInfo)
            .is_some_and(|e| e.contains(Field::CapitalizationDate));
        assert_eq!(has_error, offset < 0, "offset {offset}");
    }
}

/// 发票日期变化时无条件覆盖资本化日期（包括手工改过的值）
#[test]
fn test_invoice_date_change_overwrites_manual_capitalization_date() {
    let mut session = ready_session();
    fill_purchase_info(&mut session);
    session.edit(FieldEdit::CapitalizationDate(date(2024, 4, 1)));

    session.edit(FieldEdit::InvoiceDate(date(2024, 3, 12)));
    assert_eq!(
        session.draft().finance_info().capitalization_date,
        date(2024, 3, 12)
    );
}

// ============================================================================
// 保修到期日
// ============================================================================

/// 保修到期日 = 开始日 + 月数，重复计算结果不变
#[test]
fn test_warranty_end_follows_start_and_period() {
    let mut session = ready_session();
    session.edit(FieldEdit::WarrantyStart(date(2024, 1, 31)));
    assert_eq!(session.draft().warranty_info().warranty_end, None);

    session.edit(FieldEdit::WarrantyPeriodMonths(Some(13)));
    assert_eq!(session.draft().warranty_info().warranty_end, date(2025, 2, 28));

    session.edit(FieldEdit::WarrantyPeriodMonths(Some(13)));
    session.edit(FieldEdit::WarrantyStart(date(2024, 1, 31)));
    assert_eq!(session.draft().warranty_info().warranty_end, date(2025, 2, 28));
    assert!(session.errors().is_section_valid(Section::WarrantyInfo));

    session.edit(FieldEdit::WarrantyStart(date(2024, 6, 1)));
    assert_eq!(session.draft().warranty_info().warranty_end, date(2025, 7, 1));
}

// ============================================================================
// 折旧开关
// ============================================================================

/// 是 → 否 → 是 恢复全部财务字段
#[test]
fn test_depreciable_round_trip_restores_finance_info() {
    let mut session = ready_session();
    fill_purchase_info(&mut session);
    fill_finance_info(&mut session);
    session.edit(FieldEdit::DepreciationPct(None));
    let before = session.draft().finance_info().clone();
    assert!(!session.errors().is_section_valid(Section::FinanceInfo));

    session.edit(FieldEdit::Depreciable(Depreciable::No));
    let off = session.draft().finance_info();
    assert_eq!(off.capitalization_date, None);
    assert_eq!(off.capitalization_price, None);
    assert_eq!(off.life_months, None);
    assert_eq!(off.scrap_value, None);
    assert!(session.errors().is_section_valid(Section::FinanceInfo));

    session.edit(FieldEdit::Depreciable(Depreciable::Yes));
    assert_eq!(session.draft().finance_info(), &before);
}

/// 关闭折旧后，采购金额变化不再写入资本化金额
#[test]
fn test_purchase_price_not_copied_while_not_depreciable() {
    let mut session = ready_session();
    session.edit(FieldEdit::Depreciable(Depreciable::No));
    session.edit(FieldEdit::PurchasePrice(Some(dec("1200"))));
    assert_eq!(session.draft().finance_info().capitalization_price, None);
}

// ============================================================================
// 品牌与型号
// ============================================================================

/// 选择品牌只保留该品牌的型号，原型号不属于新品牌时清空
#[test]
fn test_brand_filters_models() {
    let mut session = ready_session();
    session.edit(FieldEdit::Brand(Some(RefId(1))));
    let ids: Vec<RefId> = session
        .filtered_models()
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![RefId(10), RefId(11)]);

    session.edit(FieldEdit::Model(Some(RefId(11))));
    session.edit(FieldEdit::Brand(Some(RefId(2))));
    assert_eq!(session.draft().asset_details().model, None);

    let ids: Vec<RefId> = session
        .filtered_models()
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![RefId(20)]);
}

// ============================================================================
// 折旧率
// ============================================================================

/// 寿命 36 个月命中折旧率表
#[test]
fn test_life_36_resolves_rate() {
    let mut session = ready_session();
    session.edit(FieldEdit::LifeMonths(Some(36)));

    assert_eq!(session.draft().finance_info().depreciation_pct, Some(dec("10.5")));
    assert!(
        !session
            .errors()
            .section(Section::FinanceInfo)
            .is_some_and(|e| e.contains(Field::LifeMonths))
    );
}

/// 寿命 37 个月未登记：报错且保留原折旧率
#[test]
fn test_life_37_is_unmapped() {
    let mut session = ready_session();
    session.edit(FieldEdit::LifeMonths(Some(36)));
    session.edit(FieldEdit::LifeMonths(Some(37)));

    let errors = session.errors().section(Section::FinanceInfo).unwrap();
    assert_eq!(
        errors.message(Field::LifeMonths),
        Some("not mapped, must be added first")
    );
    assert_eq!(
        errors.get(Field::LifeMonths).map(|e| e.kind),
        Some(FieldErrorKind::UnresolvedLookup)
    );
    assert_eq!(session.draft().finance_info().depreciation_pct, Some(dec("10.5")));
}

// ============================================================================
// 保险
// ============================================================================

/// 保险全空无错误；只填开始日则其余三项必填
#[test]
fn test_insurance_is_optional_until_partially_filled() {
    let mut session = ready_session();
    session.edit(FieldEdit::InsuranceStart(date(2024, 6, 1)));

    let errors = session.errors().section(Section::InsuranceInfo).unwrap();
    let fields: Vec<Field> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            Field::InsuranceEnd,
            Field::InsurancePeriodMonths,
            Field::InsuranceCompanyName
        ]
    );

    session.edit(FieldEdit::InsuranceStart(None));
    assert!(session.errors().section(Section::InsuranceInfo).is_none());
}

/// 填写开始日和月数后到期日自动推算
#[test]
fn test_insurance_end_is_derived() {
    let mut session = ready_session();
    session.edit(FieldEdit::InsuranceStart(date(2024, 6, 1)));
    session.edit(FieldEdit::InsurancePeriodMonths(Some(12)));
    session.edit(FieldEdit::InsuranceCompanyName("Acme Assurance".to_string()));

    assert_eq!(session.draft().insurance_info().insurance_end, date(2025, 6, 1));
    assert!(session.errors().is_section_valid(Section::InsuranceInfo));
}

// ============================================================================
// 编码模式
// ============================================================================

/// 手工编码模式下编码为空时报错
#[test]
fn test_manual_code_mode_requires_code() {
    let mut session = EditorSession::create(EditorSettings::default());
    session.apply_reference(ReferenceLoad::CodeMode(CodeMode::manual()));
    fill_asset_details(&mut session);

    assert!(session.next().is_blocked());
    assert_eq!(
        session.errors().message(Section::AssetDetails, Field::Code),
        Some("Asset code is required")
    );

    session.edit(FieldEdit::Code("LAP-0001".to_string()));
    assert_advanced(session.next());
}

/// 自动编码模式下无论编码内容如何都不报错
#[test]
fn test_auto_code_mode_never_requires_code() {
    let mut session = EditorSession::create(EditorSettings::default());
    session.apply_reference(ReferenceLoad::CodeMode(CodeMode {
        code_type: CodeType::Auto,
        next_code: None,
    }));
    fill_asset_details(&mut session);

    assert_eq!(session.draft().asset_details().code, "");
    assert_advanced(session.next());
}
