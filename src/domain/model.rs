use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four headline metrics served by the `parsed` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreMetrics {
    pub sentiment: Option<f64>,
    #[serde(rename = "AHI")]
    pub ahi: Option<f64>,
    #[serde(rename = "RHI")]
    pub rhi: Option<f64>,
    #[serde(rename = "SGP")]
    pub sgp: Option<f64>,
}

/// Raw per-platform activity counts and scores.
///
/// The API omits metrics it has no data for, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub reddit_comment_mentions: Option<f64>,
    pub reddit_comment_sentiment: Option<f64>,
    pub reddit_comment_relative_hype: Option<f64>,
    pub reddit_post_mentions: Option<f64>,
    pub reddit_post_sentiment: Option<f64>,
    pub reddit_post_relative_hype: Option<f64>,
    pub tweet_mentions: Option<f64>,
    pub tweet_sentiment: Option<f64>,
    pub tweet_relative_hype: Option<f64>,
    pub stocktwits_post_mentions: Option<f64>,
    pub stocktwits_post_sentiment: Option<f64>,
    pub stocktwits_post_relative_hype: Option<f64>,
    pub yahoo_finance_comment_mentions: Option<f64>,
    pub yahoo_finance_comment_sentiment: Option<f64>,
    pub yahoo_finance_comment_relative_hype: Option<f64>,
}

/// Per-subreddit mention and sentiment breakdown, only present on
/// enriched quotes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubredditBreakdown {
    pub reddit_subreddit_mentions: Option<HashMap<String, f64>>,
    pub reddit_subreddit_sentiment: Option<HashMap<String, f64>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A full realtime view of one ticker, as returned by `quote`, `bulk`,
/// `all` and `sort`.
///
/// Keys the server adds in the future land in `extra` instead of
/// breaking deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub symbol: Option<String>,
    pub success: Option<bool>,
    /// Position in the ordering, only set on `sort` results.
    pub rank: Option<u32>,
    pub sentiment: Option<f64>,
    #[serde(rename = "AHI")]
    pub ahi: Option<f64>,
    #[serde(rename = "RHI")]
    pub rhi: Option<f64>,
    #[serde(rename = "SGP")]
    pub sgp: Option<f64>,
    #[serde(flatten)]
    pub platforms: PlatformMetrics,
    pub subreddits: Option<SubredditBreakdown>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One sample from the `historical` endpoint. Timestamps are fractional
/// Unix seconds, exactly as the server reports them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub timestamp: f64,
    pub data: f64,
}

/// Which tier the account is on. The API encodes tiers as numeric
/// levels, with Premium sitting between Starter and Enterprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTier {
    Sandbox,
    Starter,
    Premium,
    Enterprise,
}

impl AccountTier {
    pub fn from_level(level: f64) -> Option<Self> {
        if level == 0.0 {
            Some(AccountTier::Sandbox)
        } else if level == 1.0 {
            Some(AccountTier::Starter)
        } else if level == 1.5 {
            Some(AccountTier::Premium)
        } else if level == 2.0 {
            Some(AccountTier::Enterprise)
        } else {
            None
        }
    }

    pub fn level(&self) -> f64 {
        match self {
            AccountTier::Sandbox => 0.0,
            AccountTier::Starter => 1.0,
            AccountTier::Premium => 1.5,
            AccountTier::Enterprise => 2.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccountTier::Sandbox => "sandbox",
            AccountTier::Starter => "starter",
            AccountTier::Premium => "premium",
            AccountTier::Enterprise => "enterprise",
        }
    }
}

impl std::fmt::Display for AccountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AccountTier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = f64::deserialize(deserializer)?;
        AccountTier::from_level(level)
            .ok_or_else(|| de::Error::custom(format!("unknown account tier level: {}", level)))
    }
}

impl Serialize for AccountTier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Account metadata from the `account` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub success: Option<bool>,
    pub tier: Option<AccountTier>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Wire envelope for single-ticker endpoints: metrics nested under
/// `results`, status fields at the top level.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope<T> {
    #[allow(dead_code)]
    pub success: Option<bool>,
    pub symbol: Option<String>,
    pub results: T,
}

/// Wire envelope for list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_unknown_keys() {
        let json = serde_json::json!({
            "symbol": "AAPL",
            "success": true,
            "sentiment": 0.75,
            "AHI": 0.84,
            "tweet_mentions": 20,
            "brand_new_metric": 42.0
        });

        let snapshot: TickerSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(snapshot.symbol.as_deref(), Some("AAPL"));
        assert_eq!(snapshot.sentiment, Some(0.75));
        assert_eq!(snapshot.ahi, Some(0.84));
        assert_eq!(snapshot.platforms.tweet_mentions, Some(20.0));
        assert_eq!(
            snapshot.extra.get("brand_new_metric").unwrap().as_f64(),
            Some(42.0)
        );
    }

    #[test]
    fn test_sort_entry_subreddits_with_odd_shape() {
        // The sort endpoint returns subreddits as {"symbol": "AMC"}
        // rather than the enriched breakdown.
        let json = serde_json::json!({
            "symbol": "AMC",
            "rank": 0,
            "AHI": 1.92,
            "subreddits": {"symbol": "AMC"}
        });

        let snapshot: TickerSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(snapshot.rank, Some(0));
        let subreddits = snapshot.subreddits.unwrap();
        assert!(subreddits.reddit_subreddit_mentions.is_none());
        assert_eq!(
            subreddits.extra.get("symbol").unwrap().as_str(),
            Some("AMC")
        );
    }

    #[test]
    fn test_account_tier_levels() {
        assert_eq!(AccountTier::from_level(0.0), Some(AccountTier::Sandbox));
        assert_eq!(AccountTier::from_level(1.0), Some(AccountTier::Starter));
        assert_eq!(AccountTier::from_level(1.5), Some(AccountTier::Premium));
        assert_eq!(AccountTier::from_level(2.0), Some(AccountTier::Enterprise));
        assert_eq!(AccountTier::from_level(3.0), None);
    }

    #[test]
    fn test_account_info_deserializes_tier_from_number() {
        let json = serde_json::json!({"success": true, "tier": 1.5, "plan": "premium"});
        let info: AccountInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.tier, Some(AccountTier::Premium));
        assert_eq!(info.extra.get("plan").unwrap().as_str(), Some("premium"));
    }

    #[test]
    fn test_enriched_breakdown() {
        let json = serde_json::json!({
            "reddit_subreddit_mentions": {"stocks": 10, "wallstreetbets": 7},
            "reddit_subreddit_sentiment": {"stocks": 0.8, "wallstreetbets": 0.5}
        });

        let breakdown: SubredditBreakdown = serde_json::from_value(json).unwrap();
        let mentions = breakdown.reddit_subreddit_mentions.unwrap();
        assert_eq!(mentions.get("stocks"), Some(&10.0));
        assert_eq!(mentions.get("wallstreetbets"), Some(&7.0));
    }
}
