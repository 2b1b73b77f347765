//! Cross-sectional short percentage ranking

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::common::math;
use crate::config::RANKING_MIN_VOLUME;
use crate::models::{Ranking, RankingRow, TradeRecord};

/// Group records by (date, symbol), keep rows above the volume floor and
/// sort by short percentage, highest first.
///
/// The floor is applied to each record before grouping, the same way the
/// API filter applies it.
pub fn build_ranking(day: NaiveDate, records: &[TradeRecord]) -> Ranking {
    let mut groups: BTreeMap<(NaiveDate, &str), (f64, f64, f64)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.total_volume > RANKING_MIN_VOLUME) {
        let entry = groups
            .entry((record.date, record.symbol.as_str()))
            .or_insert((0.0, 0.0, 0.0));
        entry.0 += record.total_volume;
        entry.1 += record.short_volume;
        entry.2 += record.exempt_volume;
    }

    let mut rows: Vec<RankingRow> = groups
        .into_iter()
        .filter_map(|((date, symbol), (total, short, exempt))| {
            Some(RankingRow {
                date,
                symbol: symbol.to_string(),
                total_volume: total,
                short_volume: short,
                exempt_volume: exempt,
                short_pct: math::percentage(short, total)?,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.short_pct.total_cmp(&a.short_pct));

    Ranking { day, rows }
}
