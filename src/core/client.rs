use crate::domain::model::{
    AccountInfo, CoreMetrics, HistoricalPoint, ListEnvelope, PlatformMetrics, ResultEnvelope,
    TickerSnapshot,
};
use crate::domain::ports::{CredentialsProvider, SnapshotSource};
use crate::utils::error::{Result, SentiError};
use crate::utils::validation::validate_non_empty_string;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeSet;

/// Production endpoint of the SentimentInvestor REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.sentimentinvestor.com/v4/";

/// Authenticated client for the SentimentInvestor API.
///
/// Every request carries the developer token and key issued by the
/// SentimentInvestor dashboard as query parameters.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    http: Client,
    base_url: String,
    token: String,
    key: String,
}

impl SentimentClient {
    pub fn new(token: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            key: key.into(),
        }
    }

    pub fn from_provider(provider: &dyn CredentialsProvider) -> Self {
        Self::new(provider.token(), provider.key())
    }

    /// Point the client at a different API root, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.base_url = base;
        self
    }

    /// The configured token and key pair.
    pub fn credentials(&self) -> (&str, &str) {
        (&self.token, &self.key)
    }

    async fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("GET {} ({} parameters)", url, params.len());

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("token", self.token.as_str()), ("key", self.key.as_str())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;

        // Credential failures come back as bare sentinel strings, not JSON.
        if body == "invalid_parameter" || body == "incorrect_key" {
            return Err(SentiError::InvalidCredentials);
        }

        let data: serde_json::Value = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(_) => return Err(SentiError::UnexpectedResponse { body }),
        };

        if !status.is_success() {
            let message = data
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown API error")
                .to_string();
            return Err(SentiError::ApiFailure { message });
        }

        Ok(data)
    }

    /// Core metrics (sentiment, AHI, RHI, SGP) for one ticker.
    pub async fn parsed(&self, symbol: &str) -> Result<CoreMetrics> {
        validate_non_empty_string("symbol", symbol)?;
        let data = self
            .request("parsed", &[("symbol", symbol.to_string())])
            .await?;
        let envelope: ResultEnvelope<CoreMetrics> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// Raw per-platform metrics for one ticker.
    pub async fn raw(&self, symbol: &str) -> Result<PlatformMetrics> {
        validate_non_empty_string("symbol", symbol)?;
        let data = self.request("raw", &[("symbol", symbol.to_string())]).await?;
        let envelope: ResultEnvelope<PlatformMetrics> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// Full realtime snapshot of one ticker. With `enrich` the snapshot
    /// also carries per-subreddit breakdowns.
    pub async fn quote(&self, symbol: &str, enrich: bool) -> Result<TickerSnapshot> {
        validate_non_empty_string("symbol", symbol)?;
        let data = self
            .request(
                "quote",
                &[
                    ("symbol", symbol.to_string()),
                    ("enrich", enrich.to_string()),
                ],
            )
            .await?;
        let envelope: ResultEnvelope<TickerSnapshot> = serde_json::from_value(data)?;
        let mut snapshot = envelope.results;
        if snapshot.symbol.is_none() {
            snapshot.symbol = envelope.symbol;
        }
        Ok(snapshot)
    }

    /// Snapshots for several tickers in a single request.
    pub async fn bulk(&self, symbols: &[String], enrich: bool) -> Result<Vec<TickerSnapshot>> {
        let data = self
            .request(
                "bulk",
                &[
                    ("symbols", symbols.join(",")),
                    ("enrich", enrich.to_string()),
                ],
            )
            .await?;
        let envelope: ListEnvelope<TickerSnapshot> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// Snapshots for every stock the service covers. Slow on the server
    /// side; expect a long round trip.
    pub async fn all(&self, enrich: bool) -> Result<Vec<TickerSnapshot>> {
        let data = self
            .request("all", &[("enrich", enrich.to_string())])
            .await?;
        let envelope: ListEnvelope<TickerSnapshot> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// Stocks ranked by the given metric, best first, at most `limit`
    /// entries. Each snapshot carries its `rank`.
    pub async fn sort(&self, metric: &str, limit: usize) -> Result<Vec<TickerSnapshot>> {
        validate_non_empty_string("metric", metric)?;
        let data = self
            .request(
                "sort",
                &[("metric", metric.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        let envelope: ListEnvelope<TickerSnapshot> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// Historical values of one metric for one ticker between two Unix
    /// second timestamps, in server order.
    pub async fn historical(
        &self,
        symbol: &str,
        metric: &str,
        start: i64,
        end: i64,
    ) -> Result<Vec<HistoricalPoint>> {
        validate_non_empty_string("symbol", symbol)?;
        validate_non_empty_string("metric", metric)?;
        let data = self
            .request(
                "historical",
                &[
                    ("symbol", symbol.to_string()),
                    ("metric", metric.to_string()),
                    ("start", start.to_string()),
                    ("end", end.to_string()),
                ],
            )
            .await?;
        let envelope: ListEnvelope<HistoricalPoint> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// Whether the service tracks the given ticker at all.
    pub async fn supported(&self, symbol: &str) -> Result<bool> {
        validate_non_empty_string("symbol", symbol)?;
        let data = self
            .request("supported", &[("symbol", symbol.to_string())])
            .await?;
        let envelope: ResultEnvelope<bool> = serde_json::from_value(data)?;
        Ok(envelope.results)
    }

    /// The set of all ticker symbols the service covers.
    pub async fn all_stocks(&self) -> Result<BTreeSet<String>> {
        let data = self.request("all-stocks", &[]).await?;
        let envelope: ListEnvelope<String> = serde_json::from_value(data)?;
        Ok(envelope.results.into_iter().collect())
    }

    /// Metadata about the authenticated account.
    pub async fn account_info(&self) -> Result<AccountInfo> {
        let data = self.request("account", &[]).await?;
        let info: AccountInfo = serde_json::from_value(data)?;
        Ok(info)
    }
}

#[async_trait]
impl SnapshotSource for SentimentClient {
    async fn fetch_snapshots(
        &self,
        symbols: &[String],
        enrich: bool,
    ) -> Result<Vec<TickerSnapshot>> {
        if symbols.is_empty() {
            self.all(enrich).await
        } else {
            self.bulk(symbols, enrich).await
        }
    }
}
