//! Shared data models spanning the client, transform and chart layers.

pub mod ranking;
pub mod symbol;
pub mod trade;

pub use ranking::{Ranking, RankingRow};
pub use symbol::{Symbol, SymbolError};
pub use trade::{DailyVolume, PvoPoint, SymbolSeries, TradeRecord};
