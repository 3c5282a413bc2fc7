use tracing::debug;

use crate::errors::UiError;
use crate::host::{ChartHost, IconSet};
use crate::models::chart::{LineChart, SeriesPoint};
use crate::models::stats::{DashboardStats, TransactionRecord};
use crate::models::theme::ChartTheme;

/// Canvas ids the dashboard template defines.
pub const SALES_CHART_ID: &str = "salesChart";
pub const PURCHASES_CHART_ID: &str = "purchasesChart";

/// Legend labels of the two datasets.
pub const SALES_LABEL: &str = "Recent Sales";
pub const PURCHASES_LABEL: &str = "Recent Purchases";

/// Builds the dashboard's chart configurations from the stats payload.
///
/// The core computes the configurations; the host only renders them.
/// Both charts share one shape (responsive line, daily time axis, y from
/// zero) and differ in accent color and label only.
pub struct ChartService {
    theme: ChartTheme,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            theme: ChartTheme::default(),
        }
    }

    pub fn with_theme(theme: ChartTheme) -> Self {
        Self { theme }
    }

    /// Map records to chart points 1:1, preserving array order. The
    /// server already sends the arrays in display order; re-sorting here
    /// would change what the user sees.
    #[must_use]
    pub fn build_series(records: &[TransactionRecord]) -> Vec<SeriesPoint> {
        records
            .iter()
            .map(|record| SeriesPoint {
                x: record.parsed_date(),
                y: record.total,
            })
            .collect()
    }

    #[must_use]
    pub fn sales_chart(&self, stats: &DashboardStats) -> LineChart {
        LineChart::time_series(
            SALES_LABEL,
            self.theme.sales_color.clone(),
            Self::build_series(&stats.recent_sales),
            &self.theme,
        )
    }

    #[must_use]
    pub fn purchases_chart(&self, stats: &DashboardStats) -> LineChart {
        LineChart::time_series(
            PURCHASES_LABEL,
            self.theme.purchases_color.clone(),
            Self::build_series(&stats.recent_purchases),
            &self.theme,
        )
    }

    /// Mount both charts on their canvases, then run the icon pass.
    ///
    /// A mount failure (typically a missing canvas) is the host's error
    /// and propagates unchanged; nothing mounted after the failure is
    /// attempted.
    pub fn render_dashboard(
        &self,
        stats: &DashboardStats,
        charts: &mut dyn ChartHost,
        icons: &mut dyn IconSet,
    ) -> Result<(), UiError> {
        charts.mount_line_chart(SALES_CHART_ID, &self.sales_chart(stats))?;
        charts.mount_line_chart(PURCHASES_CHART_ID, &self.purchases_chart(stats))?;
        icons.replace_all();
        debug!(
            sales_points = stats.recent_sales.len(),
            purchase_points = stats.recent_purchases.len(),
            "dashboard charts mounted"
        );
        Ok(())
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
