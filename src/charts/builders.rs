//! Chart builders for the dashboard panels. Inputs are borrowed and never
//! modified.

use crate::charts::{BarMode, Chart, Orientation, Series};
use crate::models::{PvoPoint, Ranking};

pub const PVO_CHART_TITLE: &str = "Volume and PVO";
pub const LONG_SHORT_CHART_TITLE: &str = "Long / Short Volume";
pub const RANKING_CHART_TITLE: &str = "Most Shorted Stocks";

fn date_labels(points: &[PvoPoint]) -> Vec<String> {
    points
        .iter()
        .map(|p| p.volume.date.format("%Y-%m-%d").to_string())
        .collect()
}

/// PVO and signal line on the left axis, total volume bars on the right
pub fn pvo_chart(points: &[PvoPoint]) -> Chart {
    let dates = date_labels(points);

    Chart::new(PVO_CHART_TITLE)
        .with_series(Series::line(
            "PVO",
            dates.clone(),
            points.iter().map(|p| p.pvo).collect(),
        ))
        .with_series(Series::line(
            "signal line",
            dates.clone(),
            points.iter().map(|p| p.signal).collect(),
        ))
        .with_series(
            Series::bar(
                "total volume",
                dates,
                points.iter().map(|p| Some(p.volume.total_volume)).collect(),
            )
            .on_secondary_axis()
            .with_color("gray"),
        )
        .with_axis_titles("%", Some("volume"))
        .with_legend_title(" ")
}

/// Stacked long (total - short) and short volume per day
pub fn long_short_chart(points: &[PvoPoint]) -> Chart {
    let dates = date_labels(points);

    Chart::new(LONG_SHORT_CHART_TITLE)
        .with_series(Series::bar(
            "Long",
            dates.clone(),
            points.iter().map(|p| Some(p.volume.long_volume())).collect(),
        ))
        .with_series(Series::bar(
            "Short",
            dates,
            points.iter().map(|p| Some(p.volume.short_volume)).collect(),
        ))
        .with_bar_mode(BarMode::Stack)
}

/// Short percentage of the `top_n` most shorted symbols, in ranking order
pub fn ranking_chart(ranking: &Ranking, top_n: usize, orientation: Orientation) -> Chart {
    let top = ranking.top(top_n);

    Chart::new(RANKING_CHART_TITLE)
        .with_series(
            Series::bar(
                "Short %",
                top.iter().map(|r| r.symbol.clone()).collect(),
                top.iter().map(|r| Some(r.short_pct)).collect(),
            )
            .with_orientation(orientation),
        )
        .with_axis_titles("short %", None)
}
