use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single sale or purchase as supplied by the server.
///
/// The server sends more fields per record (product name, tax breakdown,
/// ...); the dashboard only plots date against total, so everything else
/// is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Date the transaction happened, as the server rendered it.
    /// Kept raw: parsing happens at chart-build time and an unparseable
    /// date must still produce a point (see [`TransactionRecord::parsed_date`]).
    pub date: String,

    /// Grand total of the transaction (subtotal plus taxes).
    pub total: f64,
}

impl TransactionRecord {
    pub fn new(date: impl Into<String>, total: f64) -> Self {
        Self {
            date: date.into(),
            total,
        }
    }

    /// Parse the record date, accepting the formats the server is known
    /// to emit: RFC 3339, ISO 8601 without an offset, the Python
    /// `str(datetime)` form, and a bare date.
    ///
    /// Returns `None` for anything else. The chart keeps the point and
    /// serializes its x as null; what a null timestamp renders as is the
    /// charting library's business, not ours.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Utc.from_utc_datetime(&dt));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }

        None
    }
}

/// The statistics object the server hands the dashboard page.
///
/// `recent_sales` / `recent_purchases` hold the last few transactions in
/// the order the server chose; that order is the chronological display
/// order and is never re-sorted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sales: f64,

    #[serde(default)]
    pub total_purchases: f64,

    /// Value of everything currently on the shelf (quantity × price).
    #[serde(default)]
    pub total_inventory: f64,

    /// `total_sales - total_purchases`, precomputed by the server.
    #[serde(default)]
    pub profit: f64,

    #[serde(default)]
    pub recent_sales: Vec<TransactionRecord>,

    #[serde(default)]
    pub recent_purchases: Vec<TransactionRecord>,
}

impl DashboardStats {
    /// Deserialize the stats payload the server embedded in the page.
    pub fn from_json(json: &str) -> Result<Self, crate::errors::UiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Derive the currency-formatted figures for the summary cards.
    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_sales: format_usd(self.total_sales),
            total_purchases: format_usd(self.total_purchases),
            total_inventory: format_usd(self.total_inventory),
            profit: format_usd(self.profit),
        }
    }
}

/// Display-ready summary card values, one string per card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_sales: String,
    pub total_purchases: String,
    pub total_inventory: String,
    pub profit: String,
}

/// Format an amount the way every money figure on the page is shown:
/// a `$` prefix and exactly two decimal places.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}
