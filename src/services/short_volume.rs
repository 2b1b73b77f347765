//! Short volume data provider interface

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Ranking, Symbol, SymbolSeries};
use crate::services::finra::FinraError;

#[async_trait]
pub trait ShortVolumeProvider {
    /// Daily oscillator table for a symbol and the latest trade date seen
    async fn fetch_symbol_series(&self, symbol: &Symbol) -> Result<SymbolSeries, FinraError>;

    /// Short percentage ranking of every heavily traded symbol on `day`
    async fn fetch_most_shorted(&self, day: NaiveDate) -> Result<Ranking, FinraError>;
}
