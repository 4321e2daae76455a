pub mod client;
pub mod stream;

pub use crate::domain::model::{CoreMetrics, PlatformMetrics, TickerSnapshot};
pub use crate::domain::ports::{CredentialsProvider, SnapshotSource};
pub use crate::utils::error::Result;
