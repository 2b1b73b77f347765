//! HTTP client for the Reg SHO daily dataset

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use tracing::{debug, info, warn};

use super::error::FinraError;
use super::messages::QueryRequest;
use crate::analysis::{build_ranking, build_symbol_series};
use crate::indicators::momentum::PvoParams;
use crate::metrics::Metrics;
use crate::models::{Ranking, Symbol, SymbolSeries, TradeRecord};
use crate::services::short_volume::ShortVolumeProvider;

pub const REG_SHO_DAILY_PATH: &str = "/data/group/OTCMarket/name/regShoDaily";

pub struct FinraClient {
    client: reqwest::Client,
    endpoint: String,
    metrics: Option<Arc<Metrics>>,
}

impl FinraClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), REG_SHO_DAILY_PATH),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// POST a filter to the dataset and return the raw response body
    pub async fn query(&self, request: &QueryRequest) -> Result<Vec<u8>, FinraError> {
        debug!(endpoint = %self.endpoint, filters = request.compare_filters.len(), "FINRA query");

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }

    pub async fn fetch_records(&self, request: &QueryRequest) -> Result<Vec<TradeRecord>, FinraError> {
        let body = self.query(request).await?;
        decode_records(&body)
    }

    fn record(&self, query: &str, success: bool) {
        if let Some(metrics) = &self.metrics {
            metrics.record_finra_request(query, success);
        }
    }
}

/// Decode a response body into trade records. The API answers "no match"
/// with an empty body, which yields no records.
pub fn decode_records(body: &[u8]) -> Result<Vec<TradeRecord>, FinraError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
impl ShortVolumeProvider for FinraClient {
    async fn fetch_symbol_series(&self, symbol: &Symbol) -> Result<SymbolSeries, FinraError> {
        let result = self
            .fetch_records(&QueryRequest::symbol(symbol))
            .await
            .and_then(|records| {
                build_symbol_series(symbol.as_str(), &records, PvoParams::default())
                    .ok_or_else(|| FinraError::NoData(symbol.to_string()))
            });
        self.record("symbol", result.is_ok());

        match &result {
            Ok(series) => info!(
                symbol = %symbol,
                days = series.points.len(),
                latest_day = %series.latest_day,
                "Fetched symbol series"
            ),
            Err(e) => warn!(symbol = %symbol, error = %e, "Failed to fetch symbol series"),
        }
        result
    }

    async fn fetch_most_shorted(&self, day: NaiveDate) -> Result<Ranking, FinraError> {
        let result = self
            .fetch_records(&QueryRequest::most_shorted(day))
            .await
            .and_then(|records| {
                let ranking = build_ranking(day, &records);
                if ranking.rows.is_empty() {
                    Err(FinraError::NoData(format!("ranking on {}", day)))
                } else {
                    Ok(ranking)
                }
            });
        self.record("ranking", result.is_ok());

        match &result {
            Ok(ranking) => info!(day = %day, rows = ranking.rows.len(), "Fetched most shorted ranking"),
            Err(e) => warn!(day = %day, error = %e, "Failed to fetch most shorted ranking"),
        }
        result
    }
}
