//! Unit tests for the Plotly adapter

use shortvol::charts::plotly::to_figure;
use shortvol::charts::{BarMode, Chart, Orientation, Series};

fn labels() -> Vec<String> {
    vec!["2024-04-01".to_string(), "2024-04-02".to_string()]
}

#[test]
fn test_dual_axis_figure() {
    let chart = Chart::new("Volume and PVO")
        .with_series(Series::line("PVO", labels(), vec![None, Some(1.5)]))
        .with_series(Series::bar("total volume", labels(), vec![Some(1.0), Some(2.0)]).on_secondary_axis().with_color("gray"))
        .with_axis_titles("%", Some("volume"))
        .with_legend_title(" ");
    let figure = to_figure(&chart);

    let data = figure["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["type"], "scatter");
    assert_eq!(data[0]["mode"], "lines");
    assert!(data[0]["y"][0].is_null());
    assert_eq!(data[0]["y"][1], 1.5);
    assert!(data[0].get("yaxis").is_none());
    assert_eq!(data[1]["type"], "bar");
    assert_eq!(data[1]["yaxis"], "y2");
    assert_eq!(data[1]["marker"]["color"], "gray");

    let layout = &figure["layout"];
    assert_eq!(layout["title"]["text"], "Volume and PVO");
    assert_eq!(layout["yaxis"]["title"]["text"], "%");
    assert_eq!(layout["yaxis2"]["title"]["text"], "volume");
    assert_eq!(layout["yaxis2"]["overlaying"], "y");
    assert_eq!(layout["yaxis2"]["side"], "right");
    assert_eq!(layout["legend"]["title"]["text"], " ");
    assert_eq!(layout["paper_bgcolor"], "rgba(0,0,0,0)");
    assert_eq!(layout["plot_bgcolor"], "rgba(0,0,0,0)");
}

#[test]
fn test_stacked_bars() {
    let chart = Chart::new("Long / Short Volume")
        .with_series(Series::bar("Long", labels(), vec![Some(1.0), Some(2.0)]))
        .with_bar_mode(BarMode::Stack);
    let figure = to_figure(&chart);
    assert_eq!(figure["layout"]["barmode"], "stack");
    assert!(figure["layout"].get("yaxis2").is_none());
}

#[test]
fn test_horizontal_bars_swap_axes() {
    let chart = Chart::new("Most Shorted Stocks").with_series(
        Series::bar("Short %", vec!["A".into(), "B".into()], vec![Some(9.0), Some(8.0)])
            .with_orientation(Orientation::Horizontal),
    );
    let figure = to_figure(&chart);
    let trace = &figure["data"][0];
    assert_eq!(trace["orientation"], "h");
    assert_eq!(trace["y"][0], "A");
    assert_eq!(trace["x"][0], 9.0);
    assert_eq!(figure["layout"]["yaxis"]["autorange"], "reversed");
}
