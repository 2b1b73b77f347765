//! Per-symbol daily aggregation

use std::collections::BTreeMap;

use crate::indicators::momentum::{calculate_pvo, PvoParams};
use crate::models::{DailyVolume, SymbolSeries, TradeRecord};

/// Sum records by trade date, oldest date first
pub fn aggregate_by_date(records: &[TradeRecord]) -> Vec<DailyVolume> {
    let mut days: BTreeMap<_, DailyVolume> = BTreeMap::new();
    for record in records {
        days.entry(record.date)
            .or_insert_with(|| DailyVolume::new(record.date))
            .add(record);
    }
    days.into_values().collect()
}

/// Build the oscillator table for one symbol.
///
/// Returns `None` when there are no records.
pub fn build_symbol_series(
    symbol: &str,
    records: &[TradeRecord],
    params: PvoParams,
) -> Option<SymbolSeries> {
    let latest_day = records.iter().map(|r| r.date).max()?;
    let days = aggregate_by_date(records);

    Some(SymbolSeries {
        symbol: symbol.to_string(),
        points: calculate_pvo(&days, params),
        latest_day,
    })
}
