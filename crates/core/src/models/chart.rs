use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::theme::ChartTheme;

/// A single `{x, y}` point on a time-series dataset.
///
/// `x` is `None` when the record date would not parse; it serializes as
/// null and the charting library decides what a null timestamp renders
/// as. `y` is the transaction total, taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: Option<DateTime<Utc>>,
    pub y: f64,
}

/// One plotted line: label, points, and line styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<SeriesPoint>,
    pub border_color: String,
    pub tension: f64,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl AxisTitle {
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: text.into(),
        }
    }
}

/// Tick label formats per time unit. Only daily granularity is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormats {
    pub day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSettings {
    pub unit: String,
    pub display_formats: DisplayFormats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub scale_type: String,
    pub time: TimeSettings,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub title: AxisTitle,
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: TimeAxis,
    pub y: ValueAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

/// A complete line-chart configuration.
///
/// The core computes these; the host only hands them to the charting
/// library. Serializing one yields the library's JSON configuration
/// object verbatim, so a WASM shim can pass it straight through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl LineChart {
    /// Build the one chart shape the dashboard uses: a single non-filled
    /// line over a daily time axis, y starting at zero, legend on top.
    pub fn time_series(label: impl Into<String>, color: impl Into<String>, points: Vec<SeriesPoint>, theme: &ChartTheme) -> Self {
        Self {
            chart_type: "line".to_string(),
            data: ChartData {
                datasets: vec![Dataset {
                    label: label.into(),
                    data: points,
                    border_color: color.into(),
                    tension: theme.tension,
                    fill: false,
                }],
            },
            options: ChartOptions {
                responsive: true,
                scales: Scales {
                    x: TimeAxis {
                        scale_type: "time".to_string(),
                        time: TimeSettings {
                            unit: theme.time_unit.clone(),
                            display_formats: DisplayFormats {
                                day: theme.tick_format.clone(),
                            },
                        },
                        title: AxisTitle::shown(theme.x_title.clone()),
                    },
                    y: ValueAxis {
                        title: AxisTitle::shown(theme.y_title.clone()),
                        begin_at_zero: true,
                    },
                },
                plugins: Plugins {
                    legend: Legend {
                        position: theme.legend_position.clone(),
                    },
                },
            },
        }
    }
}
