use serde::{Deserialize, Serialize};

/// Presentation constants for the dashboard charts.
///
/// The defaults match the shipped stylesheet: Bootstrap blue for sales,
/// Bootstrap red for purchases, daily ticks labelled "MMM D".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    /// Line color of the sales chart.
    pub sales_color: String,

    /// Line color of the purchases chart.
    pub purchases_color: String,

    /// Bézier tension of both lines.
    pub tension: f64,

    /// Granularity of the time axis.
    pub time_unit: String,

    /// Tick label format for the daily unit.
    pub tick_format: String,

    /// Where the legend sits relative to the plot.
    pub legend_position: String,

    pub x_title: String,
    pub y_title: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            sales_color: "#0d6efd".to_string(),
            purchases_color: "#dc3545".to_string(),
            tension: 0.1,
            time_unit: "day".to_string(),
            tick_format: "MMM D".to_string(),
            legend_position: "top".to_string(),
            x_title: "Date".to_string(),
            y_title: "Amount ($)".to_string(),
        }
    }
}
