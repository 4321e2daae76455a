use crate::domain::model::TickerSnapshot;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait CredentialsProvider: Send + Sync {
    fn token(&self) -> &str;
    fn key(&self) -> &str;
}

/// Source of realtime ticker snapshots. Implemented by the live client;
/// tests substitute scripted sources.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch snapshots for the given symbols. An empty symbol list means
    /// every covered stock.
    async fn fetch_snapshots(&self, symbols: &[String], enrich: bool)
        -> Result<Vec<TickerSnapshot>>;
}
