use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Symbol;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub date: NaiveDate,
    pub symbol: String,
    pub total_volume: f64,
    pub short_volume: f64,
    pub exempt_volume: f64,
    pub short_pct: f64,
}

/// Cross-sectional short percentage for one day, highest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub day: NaiveDate,
    pub rows: Vec<RankingRow>,
}

impl Ranking {
    /// Distinct symbols of the ranking in alphabetical order. Rows whose
    /// symbol is not a canonical `Symbol` are left out of the choice set.
    pub fn choices(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self
            .rows
            .iter()
            .filter_map(|row| match Symbol::parse_exact(&row.symbol) {
                Ok(symbol) => Some(symbol),
                Err(e) => {
                    warn!(symbol = %row.symbol, error = %e, "Dropping ranking symbol from choices");
                    None
                }
            })
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    pub fn top(&self, n: usize) -> &[RankingRow] {
        &self.rows[..self.rows.len().min(n)]
    }
}
