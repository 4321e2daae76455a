use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sentirs")]
#[command(about = "Query stock sentiment data from the SentimentInvestor API")]
pub struct Cli {
    #[arg(long, global = true, help = "API token from the SentimentInvestor dashboard")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "API key from the SentimentInvestor dashboard")]
    pub key: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the API base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Core metrics (sentiment, AHI, RHI, SGP) for one ticker
    Parsed { symbol: String },

    /// Raw per-platform metrics for one ticker
    Raw { symbol: String },

    /// Full realtime snapshot of one ticker
    Quote {
        symbol: String,
        #[arg(long, help = "Request per-subreddit breakdowns")]
        enrich: bool,
    },

    /// Snapshots for several tickers in one request
    Bulk {
        #[arg(value_delimiter = ',')]
        symbols: Vec<String>,
        #[arg(long)]
        enrich: bool,
    },

    /// Snapshots for every covered stock (slow)
    All {
        #[arg(long)]
        enrich: bool,
    },

    /// Stocks ranked by a metric
    Sort {
        metric: String,
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Historical values of a metric between two Unix timestamps
    Historical {
        symbol: String,
        #[arg(long)]
        metric: String,
        #[arg(long)]
        start: i64,
        #[arg(long)]
        end: i64,
    },

    /// Whether the service tracks a ticker
    Supported { symbol: String },

    /// List every covered ticker symbol
    Stocks,

    /// Show account information
    Account,

    /// Poll for snapshot updates and print them as they arrive
    Watch {
        #[arg(value_delimiter = ',')]
        symbols: Vec<String>,
        #[arg(long, default_value = "60", help = "Seconds between polls")]
        interval: u64,
    },
}
