//! Runtime configuration and fixed analysis constants

use std::env;

use url::Url;

use crate::error::{DashboardError, Result};
use crate::models::Symbol;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_FINRA_API_URL: &str = "https://api.finra.org";
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Fast EMA span of the oscillator
pub const PVO_FAST_SPAN: usize = 12;
/// Slow EMA span of the oscillator
pub const PVO_SLOW_SPAN: usize = 26;
/// EMA span of the signal line
pub const PVO_SIGNAL_SPAN: usize = 9;

/// Rows at or below this total volume are left out of the daily ranking
pub const RANKING_MIN_VOLUME: f64 = 1_000_000.0;
pub const RANKING_LIMIT: u32 = 5000;
pub const RANKING_TOP_N: usize = 20;

/// Get the current environment name (`ENVIRONMENT`, defaults to "development")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Process-wide settings, built once at startup and handed to the client and
/// the UI layer.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Scheme and host of the FINRA API, without a trailing slash
    pub finra_base_url: String,
    pub default_symbol: Symbol,
    pub environment: String,
}

impl Config {
    /// Build configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| DashboardError::Config(format!("invalid PORT: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let base = env::var("FINRA_API_URL").unwrap_or_else(|_| DEFAULT_FINRA_API_URL.to_string());
        let finra_base_url = parse_base_url(&base)?;

        let symbol = env::var("DEFAULT_SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string());
        let default_symbol = Symbol::parse(&symbol)?;

        Ok(Self {
            host,
            port,
            finra_base_url,
            default_symbol,
            environment: get_environment(),
        })
    }

    pub fn with_finra_base_url(mut self, url: &str) -> Result<Self> {
        self.finra_base_url = parse_base_url(url)?;
        Ok(self)
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            finra_base_url: DEFAULT_FINRA_API_URL.to_string(),
            default_symbol: Symbol::default(),
            environment: "development".to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| DashboardError::Config(format!("invalid FINRA_API_URL {}: {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DashboardError::Config(format!(
            "FINRA_API_URL must be http(s), got {}",
            url.scheme()
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
