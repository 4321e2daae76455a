pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::file::FileConfig;
pub use config::{resolve_credentials, Credentials, KEY_ENV_VAR, TOKEN_ENV_VAR};
pub use core::client::{SentimentClient, DEFAULT_BASE_URL};
pub use core::stream::{spawn_watch, StockUpdate, UpdateReceiver};
pub use domain::model::{
    AccountInfo, AccountTier, CoreMetrics, HistoricalPoint, PlatformMetrics, SubredditBreakdown,
    TickerSnapshot,
};
pub use domain::ports::{CredentialsProvider, SnapshotSource};
pub use utils::error::{Result, SentiError};
