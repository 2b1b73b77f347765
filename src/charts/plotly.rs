//! Plotly figure adapter
//!
//! Converts a [`Chart`] into the `{ "data": [...], "layout": {...} }` JSON
//! that `Plotly.react` accepts.

use serde_json::{json, Map, Value};

use crate::charts::{AxisSide, BarMode, Chart, Orientation, Series, SeriesKind};

const TRANSPARENT: &str = "rgba(0,0,0,0)";

pub fn to_figure(chart: &Chart) -> Value {
    json!({
        "data": chart.series.iter().map(trace).collect::<Vec<_>>(),
        "layout": layout(chart),
    })
}

fn trace(series: &Series) -> Value {
    let mut trace = Map::new();
    trace.insert("name".into(), json!(series.name));

    match series.kind {
        SeriesKind::Line => {
            trace.insert("type".into(), json!("scatter"));
            trace.insert("mode".into(), json!("lines"));
        }
        SeriesKind::Bar => {
            trace.insert("type".into(), json!("bar"));
        }
    }

    // Plotly serializes gaps as null, which serde_json does for `None`
    match series.orientation {
        Orientation::Vertical => {
            trace.insert("x".into(), json!(series.x));
            trace.insert("y".into(), json!(series.y));
        }
        Orientation::Horizontal => {
            trace.insert("x".into(), json!(series.y));
            trace.insert("y".into(), json!(series.x));
            trace.insert("orientation".into(), json!("h"));
        }
    }

    if series.axis == AxisSide::Secondary {
        trace.insert("yaxis".into(), json!("y2"));
    }

    if let Some(color) = &series.color {
        let key = match series.kind {
            SeriesKind::Line => "line",
            SeriesKind::Bar => "marker",
        };
        trace.insert(key.into(), json!({ "color": color }));
    }

    Value::Object(trace)
}

fn layout(chart: &Chart) -> Value {
    let mut layout = Map::new();
    layout.insert("title".into(), json!({ "text": chart.title }));

    let horizontal = !chart.series.is_empty()
        && chart
            .series
            .iter()
            .all(|s| s.orientation == Orientation::Horizontal);

    let mut value_axis = Map::new();
    if let Some(title) = &chart.primary_axis_title {
        value_axis.insert("title".into(), json!({ "text": title }));
    }
    if horizontal {
        layout.insert("xaxis".into(), Value::Object(value_axis));
        // highest ranked category on top
        layout.insert("yaxis".into(), json!({ "autorange": "reversed" }));
    } else {
        layout.insert("yaxis".into(), Value::Object(value_axis));
    }

    if chart.has_secondary_axis() {
        let mut secondary = Map::new();
        secondary.insert("overlaying".into(), json!("y"));
        secondary.insert("side".into(), json!("right"));
        if let Some(title) = &chart.secondary_axis_title {
            secondary.insert("title".into(), json!({ "text": title }));
        }
        layout.insert("yaxis2".into(), Value::Object(secondary));
    }

    if chart.bar_mode == BarMode::Stack {
        layout.insert("barmode".into(), json!("stack"));
    }

    if let Some(legend_title) = &chart.legend_title {
        layout.insert("legend".into(), json!({ "title": { "text": legend_title } }));
    }

    if chart.transparent_background {
        layout.insert("paper_bgcolor".into(), json!(TRANSPARENT));
        layout.insert("plot_bgcolor".into(), json!(TRANSPARENT));
    }

    Value::Object(layout)
}
