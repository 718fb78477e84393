//! 提交流程测试
//!
//! 使用内存提交出口，覆盖成功、校验拦截、业务拒绝、传输失败和编辑已有资产

mod support;

use am_asset::application::{EditorSession, EditorSettings, Notification, SubmitOutcome};
use am_asset::domain::draft::AssetDraft;
use am_asset::domain::fields::{Field, FieldEdit, Section};
use am_asset::domain::ports::SubmissionTarget;
use am_asset::domain::reference::{CodeMode, ReferenceLoad};
use am_asset::domain::value_objects::AssetId;
use am_asset::infrastructure::memory::RecordingSubmissionSink;
use am_asset::infrastructure::wire::AssetPayload;
use errors::AppError;

use support::*;

const EXISTING_ASSET: &str = r#"{
    "asset_name": "Dell Latitude 5440",
    "asset_code": "LAP-0042",
    "category": 1,
    "location": 2,
    "status": 3,
    "brand": 1,
    "model": 10,
    "vendor": 5,
    "invoice_no": "INV-2023-771",
    "invoice_date": "2023-11-02",
    "purchase_price": "72000",
    "isDepreciation": "yes",
    "capitalization_price": "72000",
    "capitalization_date": "2023-11-02",
    "lifetime_months": 60,
    "depreciation_perc": "6.33",
    "incometaxdepreciation_per": "40",
    "scrap_value": "1000",
    "dept": 3,
    "alloted_to": 41,
    "warranty": "under_warranty",
    "warranty_startdate": "2023-11-02",
    "warranty_period": 36,
    "warranty_enddate": "2026-11-02",
    "insurance_startdate": "",
    "insurance_enddate": null
}"#;

/// 完整填写并提交新资产
#[tokio::test]
async fn test_create_submission_is_accepted() {
    let mut session = ready_session();
    walk_to_warranty(&mut session);
    let sink = RecordingSubmissionSink::accepting();

    let outcome = session.submit(&sink).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            message: "Asset created successfully".to_string()
        }
    );

    let submissions = sink.submissions().await;
    assert_eq!(submissions.len(), 1);
    let (target, payload) = &submissions[0];
    assert_eq!(*target, SubmissionTarget::Create);
    assert_eq!(payload.asset_code, NEXT_CODE);
    assert_eq!(payload.capitalization_date, date(2024, 3, 10));
    assert_eq!(payload.capitalization_price, Some(dec("85000")));
    assert_eq!(payload.depreciation_perc, Some(dec("10.5")));
    assert_eq!(payload.warranty_enddate, date(2026, 3, 10));
    assert!(session.take_notifications().is_empty());
}

/// 不在最后一步时不允许提交
#[tokio::test]
async fn test_submit_before_last_step_is_rejected() {
    let mut session = ready_session();
    fill_asset_details(&mut session);
    let sink = RecordingSubmissionSink::accepting();

    let err = session.submit(&sink).await.unwrap_err();
    assert!(matches!(err, AppError::FailedPrecondition(_)));
    assert!(sink.submissions().await.is_empty());
}

/// 保险只填一部分时拦截提交，不调用出口
#[tokio::test]
async fn test_partial_insurance_blocks_submission() {
    let mut session = ready_session();
    walk_to_warranty(&mut session);
    session.edit(FieldEdit::InsuranceStart(date(2024, 4, 1)));
    let sink = RecordingSubmissionSink::accepting();

    let outcome = session.submit(&sink).await.unwrap();
    let SubmitOutcome::Blocked(map) = outcome else {
        panic!("expected blocked submission, got {:?}", outcome);
    };
    assert_eq!(map.invalid_sections().collect::<Vec<_>>(), vec![Section::InsuranceInfo]);
    assert_eq!(
        session.errors().message(Section::InsuranceInfo, Field::InsuranceCompanyName),
        Some("Insurance company name is required")
    );
    assert!(sink.submissions().await.is_empty());
}

/// 传输失败：草稿和步骤不变，只弹出一条提示
#[tokio::test]
async fn test_sink_failure_keeps_draft() {
    let mut session = ready_session();
    walk_to_warranty(&mut session);
    let before: AssetDraft = session.draft().clone();
    let sink = RecordingSubmissionSink::failing("gateway timeout");

    let outcome = session.submit(&sink).await.unwrap();
    let SubmitOutcome::Failed(notification) = outcome else {
        panic!("expected failed submission, got {:?}", outcome);
    };
    assert_eq!(notification.title, "Asset was not saved");
    assert!(notification.detail.contains("gateway timeout"));

    assert_eq!(session.draft(), &before);
    assert_eq!(session.current_section(), Section::WarrantyInfo);
    assert!(session.errors().is_valid());
    assert_eq!(session.take_notifications(), vec![notification]);
    assert!(session.take_notifications().is_empty());
}

/// 业务拒绝的回执转为提示
#[tokio::test]
async fn test_rejected_ack_becomes_notification() {
    let mut session = ready_session();
    walk_to_warranty(&mut session);
    let sink = RecordingSubmissionSink::rejecting("Asset code already in use");

    let outcome = session.submit(&sink).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(Notification::new(
            "Asset was not saved",
            "Asset code already in use"
        ))
    );
    assert_eq!(sink.submissions().await.len(), 1);
}

/// 编辑已有资产：回填后直接前进到最后一步并提交更新
#[tokio::test]
async fn test_edit_session_submits_update() {
    let payload = AssetPayload::from_json(EXISTING_ASSET).unwrap();
    let mut session =
        EditorSession::hydrate(AssetId(42), AssetDraft::from(payload), EditorSettings::default());
    session.apply_reference(ReferenceLoad::CodeMode(CodeMode::auto(NEXT_CODE)));
    session.apply_reference(ReferenceLoad::Models(models()));
    session.apply_reference(ReferenceLoad::RateTable(rate_table()));

    // 编辑时不覆盖已有编码
    assert_eq!(session.draft().asset_details().code, "LAP-0042");
    assert_eq!(session.draft().finance_info().depreciation_pct, Some(dec("6.33")));

    for _ in 0..4 {
        assert_advanced(session.next());
    }
    let sink = RecordingSubmissionSink::accepting();
    let outcome = session.submit(&sink).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            message: "Asset 42 updated successfully".to_string()
        }
    );

    let submissions = sink.submissions().await;
    let (target, payload) = &submissions[0];
    assert_eq!(*target, SubmissionTarget::Update(AssetId(42)));
    assert_eq!(payload.asset_code, "LAP-0042");
    assert_eq!(payload.insurance_startdate, None);
}
