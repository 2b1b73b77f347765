//! Declarative chart descriptions
//!
//! Builders produce plain data; `plotly` is the only module that knows how a
//! particular front-end library wants it.

pub mod builders;
pub mod plotly;

pub use builders::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    #[default]
    Group,
    Stack,
}

/// One plotted series. `x` holds category labels (dates or symbols), `y`
/// the values; `None` is a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub axis: AxisSide,
    pub orientation: Orientation,
    pub color: Option<String>,
}

impl Series {
    pub fn line(name: &str, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self::new(name, SeriesKind::Line, x, y)
    }

    pub fn bar(name: &str, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self::new(name, SeriesKind::Bar, x, y)
    }

    fn new(name: &str, kind: SeriesKind, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            x,
            y,
            axis: AxisSide::Primary,
            orientation: Orientation::Vertical,
            color: None,
        }
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.axis = AxisSide::Secondary;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub primary_axis_title: Option<String>,
    /// Present only for dual-axis charts
    pub secondary_axis_title: Option<String>,
    pub bar_mode: BarMode,
    pub legend_title: Option<String>,
    pub transparent_background: bool,
}

impl Chart {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            series: Vec::new(),
            primary_axis_title: None,
            secondary_axis_title: None,
            bar_mode: BarMode::Group,
            legend_title: None,
            transparent_background: true,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_axis_titles(mut self, primary: &str, secondary: Option<&str>) -> Self {
        self.primary_axis_title = Some(primary.to_string());
        self.secondary_axis_title = secondary.map(str::to_string);
        self
    }

    pub fn with_bar_mode(mut self, bar_mode: BarMode) -> Self {
        self.bar_mode = bar_mode;
        self
    }

    pub fn with_legend_title(mut self, legend_title: &str) -> Self {
        self.legend_title = Some(legend_title.to_string());
        self
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn has_secondary_axis(&self) -> bool {
        self.series.iter().any(|s| s.axis == AxisSide::Secondary)
    }
}
