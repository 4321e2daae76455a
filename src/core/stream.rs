use crate::domain::model::TickerSnapshot;
use crate::domain::ports::SnapshotSource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One delivery from a watch task.
#[derive(Debug, Clone, Serialize)]
pub struct StockUpdate {
    pub symbol: String,
    pub snapshot: TickerSnapshot,
    pub fetched_at: DateTime<Utc>,
}

pub type UpdateReceiver = mpsc::Receiver<StockUpdate>;

const UPDATE_CHANNEL_CAPACITY: usize = 64;

/// Poll the source on a fixed interval and deliver every snapshot as a
/// [`StockUpdate`] over the returned channel.
///
/// An empty symbol list watches every covered stock. A failed poll is
/// logged and the watcher keeps going; the task stops once the receiver
/// is dropped.
pub fn spawn_watch<S>(
    source: Arc<S>,
    symbols: Vec<String>,
    interval: Duration,
) -> (JoinHandle<()>, UpdateReceiver)
where
    S: SnapshotSource + 'static,
{
    let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        if symbols.is_empty() {
            tracing::info!("Watching all covered stocks");
        } else {
            tracing::info!("Watching {} stocks: {}", symbols.len(), symbols.join(", "));
        }

        loop {
            ticker.tick().await;

            match source.fetch_snapshots(&symbols, false).await {
                Ok(snapshots) => {
                    for snapshot in snapshots {
                        let update = StockUpdate {
                            symbol: snapshot.symbol.clone().unwrap_or_default(),
                            snapshot,
                            fetched_at: Utc::now(),
                        };
                        if tx.send(update).await.is_err() {
                            tracing::info!("Watch receiver dropped, stopping");
                            return;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Snapshot poll failed: {}", e);
                }
            }
        }
    });

    (handle, rx)
}
