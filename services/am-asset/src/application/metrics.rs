//! 编辑器业务指标
//!
//! 只通过 `metrics` 门面记录，导出器由宿主进程安装

use metrics::counter;

use crate::domain::fields::Section;

/// 记录被校验拦截的「下一步」
pub fn record_blocked_next(section: Section, error_count: usize) {
    let labels = [("section", section.as_str().to_string())];
    counter!("am_asset_next_blocked_total", &labels).increment(1);
    counter!("am_asset_next_blocked_errors_total", &labels).increment(error_count as u64);
}

/// 记录提交尝试
///
/// outcome: accepted / blocked / rejected / failed
pub fn record_submission(outcome: &str, is_update: bool) {
    let labels = [
        ("outcome", outcome.to_string()),
        ("mode", if is_update { "update" } else { "create" }.to_string()),
    ];
    counter!("am_asset_submissions_total", &labels).increment(1);
}

/// 记录参考数据加载失败
pub fn record_reference_failure(kind: &str) {
    let labels = [("kind", kind.to_string())];
    counter!("am_asset_reference_load_failures_total", &labels).increment(1);
}

/// 记录快速新建
pub fn record_quick_create(kind: &str, success: bool) {
    let labels = [
        ("kind", kind.to_string()),
        ("success", success.to_string()),
    ];
    counter!("am_asset_quick_create_total", &labels).increment(1);
}
