pub mod errors;
pub mod host;
pub mod models;
pub mod services;

use host::{ChartHost, FormDom, IconSet};
use models::stats::DashboardStats;
use services::chart_service::ChartService;
use services::form_service::TransactionFormAssistant;

pub use errors::UiError;

/// Render the dashboard from the stats payload the server embedded in
/// the page: build both line-chart configurations, mount them on their
/// canvases, and run the icon pass.
///
/// The two page components are independent; a page with only a dashboard
/// calls this, a page with only a transaction form calls
/// [`mount_transaction_form`], and nothing orders one before the other.
pub fn init_dashboard(
    stats_json: &str,
    charts: &mut dyn ChartHost,
    icons: &mut dyn IconSet,
) -> Result<(), UiError> {
    let stats = DashboardStats::from_json(stats_json)?;
    ChartService::new().render_dashboard(&stats, charts, icons)
}

/// Wire the transaction form helper against the current page and return
/// the mounted assistant. The host forwards form events to
/// [`TransactionFormAssistant::handle`].
#[must_use]
pub fn mount_transaction_form(dom: &dyn FormDom) -> TransactionFormAssistant {
    TransactionFormAssistant::mount(dom)
}
