//! am-asset 离线检查
//!
//! 用法：`am-asset <record.json> [rate_table.json]`
//!
//! 读取一条资产记录（提交接口线格式），对整份记录重算派生字段后校验全部分区并输出错误；
//! 存在错误时以非零状态退出。

use std::path::Path;
use std::process::ExitCode;

use am_asset::application::{EditorMode, EditorSession, EditorSettings};
use am_asset::domain::reference::ReferenceLoad;
use am_asset::domain::value_objects::RateTable;
use am_asset::infrastructure::wire::AssetPayload;
use bootstrap::{RuntimeConfig, load_runtime};
use errors::{AppError, AppResult};
use tracing::{debug, error, info, warn};

const USAGE: &str = "usage: am-asset <record.json> [rate_table.json]";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Asset check failed");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

async fn run() -> AppResult<bool> {
    let config = load_runtime(&RuntimeConfig::default())?;

    let mut args = std::env::args().skip(1);
    let record_path = args.next().ok_or_else(|| AppError::validation(USAGE))?;
    let rate_table_path = args.next();

    let payload = AssetPayload::from_json(&read(&record_path).await?)?;
    let mut session =
        EditorSession::open(EditorMode::Create, payload.into(), EditorSettings::from(&config));
    session.settle_all();

    if let Some(path) = rate_table_path {
        let table: RateTable = serde_json::from_str(&read(&path).await?)
            .map_err(|e| AppError::validation(format!("Invalid rate table {}: {}", path, e)))?;
        info!(entries = table.entries().len(), method = table.method().code(), "Rate table loaded");
        session.apply_reference(ReferenceLoad::RateTable(table));
        session.settle_all();
    }
    debug!(record = %AssetPayload::from(session.draft()).to_json()?, "Settled record");

    let errors = session.validate_all();
    for (section, section_errors) in errors.iter() {
        for (field, err) in section_errors.iter() {
            warn!(section = %section, field = %field, kind = ?err.kind, "{}", err.message);
        }
    }

    let valid = errors.is_valid();
    if valid {
        info!(record = %record_path, "Asset record is valid");
    } else {
        let sections: Vec<_> = errors.invalid_sections().collect();
        warn!(record = %record_path, sections = ?sections, "Asset record has errors");
    }
    Ok(valid)
}

async fn read(path: &str) -> AppResult<String> {
    tokio::fs::read_to_string(Path::new(path))
        .await
        .map_err(|e| AppError::validation(format!("Cannot read {}: {}", path, e)))
}
