//! 参考数据异步加载
//!
//! 编辑器打开时并发发起所有只读加载，每个加载有独立超时。
//! 结果通过通道送回，由会话在两次用户操作之间逐条处理。
//! 丢弃加载器即中止所有未完成的加载。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use errors::{AppError, AppResult};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::ports::{CodeModeProvider, RateTableProvider, ReferenceDataProvider};
use crate::domain::reference::{ReferenceKind, ReferenceLoad};

/// 加载器送回的消息
#[derive(Debug)]
pub enum LoaderEvent {
    Loaded(ReferenceLoad),
    Failed {
        kind: &'static str,
        error: AppError,
    },
}

/// 参考数据提供方集合
#[derive(Clone)]
pub struct ReferenceProviders {
    pub options: Arc<dyn ReferenceDataProvider>,
    pub rate_table: Arc<dyn RateTableProvider>,
    pub code_mode: Arc<dyn CodeModeProvider>,
}

pub struct ReferenceLoader {
    rx: mpsc::UnboundedReceiver<LoaderEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl ReferenceLoader {
    /// 发起全部加载
    pub fn spawn(providers: ReferenceProviders, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut tasks = Vec::new();

        for kind in ReferenceKind::ALL {
            let provider = providers.options.clone();
            spawn_load(&mut tasks, &tx, timeout, kind.as_str(), async move {
                provider
                    .list_options(kind)
                    .await
                    .map(|options| ReferenceLoad::Options { kind, options })
            });
        }

        let provider = providers.options.clone();
        spawn_load(&mut tasks, &tx, timeout, "model", async move {
            provider.list_models().await.map(ReferenceLoad::Models)
        });

        let provider = providers.rate_table.clone();
        spawn_load(&mut tasks, &tx, timeout, "rate_table", async move {
            provider.rate_table().await.map(ReferenceLoad::RateTable)
        });

        let provider = providers.code_mode.clone();
        spawn_load(&mut tasks, &tx, timeout, "code_mode", async move {
            provider.code_mode().await.map(ReferenceLoad::CodeMode)
        });

        debug!(loads = tasks.len(), "Reference data loads started");
        Self { rx, tasks }
    }

    /// 取一条已到达的消息，不等待
    pub fn try_next(&mut self) -> Option<LoaderEvent> {
        self.rx.try_recv().ok()
    }

    /// 等待下一条消息；全部加载结束后返回 `None`
    pub async fn next(&mut self) -> Option<LoaderEvent> {
        self.rx.recv().await
    }

    /// 中止所有未完成的加载
    pub fn abort(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

impl Drop for ReferenceLoader {
    fn drop(&mut self) {
        self.abort();
    }
}

fn spawn_load<F>(
    tasks: &mut Vec<JoinHandle<()>>,
    tx: &mpsc::UnboundedSender<LoaderEvent>,
    timeout: Duration,
    kind: &'static str,
    load: F,
) where
    F: Future<Output = AppResult<ReferenceLoad>> + Send + 'static,
{
    let tx = tx.clone();
    tasks.push(tokio::spawn(async move {
        let event = match tokio::time::timeout(timeout, load).await {
            Ok(Ok(loaded)) => LoaderEvent::Loaded(loaded),
            Ok(Err(error)) => LoaderEvent::Failed { kind, error },
            Err(_) => {
                warn!(kind, timeout_secs = timeout.as_secs(), "Reference data load timed out");
                LoaderEvent::Failed {
                    kind,
                    error: AppError::external_service(format!(
                        "Loading {} timed out after {}s",
                        kind,
                        timeout.as_secs()
                    )),
                }
            }
        };
        // 接收端已丢弃说明编辑器已关闭
        let _ = tx.send(event);
    }));
}
