// ═══════════════════════════════════════════════════════════════════
// Model Tests — DashboardStats, TransactionRecord, ProductStockIndex,
// ChartTheme, currency formatting
// ═══════════════════════════════════════════════════════════════════

use chrono::{Datelike, Timelike};
use saletrack_ui_core::models::product::{ProductStockIndex, SelectOption};
use saletrack_ui_core::models::stats::{format_usd, DashboardStats, TransactionRecord};
use saletrack_ui_core::models::theme::ChartTheme;

fn opt(value: &str, text: &str) -> SelectOption {
    SelectOption::new(value, text)
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionRecord
// ═══════════════════════════════════════════════════════════════════

mod record_dates {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let record = TransactionRecord::new("2025-06-01T09:30:00+00:00", 10.0);
        let parsed = record.parsed_date().expect("should parse");
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2025, 6, 1));
        assert_eq!(parsed.hour(), 9);
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let record = TransactionRecord::new("2025-06-01T12:00:00+02:00", 10.0);
        let parsed = record.parsed_date().expect("should parse");
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn parses_python_str_datetime() {
        let record = TransactionRecord::new("2025-06-01 09:30:00.123456", 10.0);
        let parsed = record.parsed_date().expect("should parse");
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2025, 6, 1));
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn parses_datetime_without_fraction() {
        let record = TransactionRecord::new("2025-06-01 09:30:00", 10.0);
        assert!(record.parsed_date().is_some());
    }

    #[test]
    fn parses_iso_without_offset() {
        let record = TransactionRecord::new("2025-06-01T09:30:00", 10.0);
        assert!(record.parsed_date().is_some());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let record = TransactionRecord::new("2025-06-01", 10.0);
        let parsed = record.parsed_date().expect("should parse");
        assert_eq!((parsed.hour(), parsed.minute()), (0, 0));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let record = TransactionRecord::new("  2025-06-01  ", 10.0);
        assert!(record.parsed_date().is_some());
    }

    #[test]
    fn garbage_is_none() {
        let record = TransactionRecord::new("not a date", 10.0);
        assert!(record.parsed_date().is_none());
    }

    #[test]
    fn empty_is_none() {
        let record = TransactionRecord::new("", 10.0);
        assert!(record.parsed_date().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DashboardStats
// ═══════════════════════════════════════════════════════════════════

mod stats_payload {
    use super::*;

    #[test]
    fn deserializes_full_payload() {
        let json = r#"{
            "total_sales": 118.0,
            "total_purchases": 59.0,
            "total_inventory": 500.0,
            "profit": 59.0,
            "recent_sales": [
                {"date": "2025-06-01 10:00:00", "total": 59.0, "product_name": "Blue Pen", "cgst": 4.5}
            ],
            "recent_purchases": [
                {"date": "2025-05-30 16:20:00", "total": 59.0}
            ]
        }"#;

        let stats = DashboardStats::from_json(json).expect("should deserialize");
        assert_eq!(stats.total_sales, 118.0);
        assert_eq!(stats.profit, 59.0);
        assert_eq!(stats.recent_sales.len(), 1);
        assert_eq!(stats.recent_sales[0].total, 59.0);
        assert_eq!(stats.recent_purchases[0].date, "2025-05-30 16:20:00");
    }

    #[test]
    fn extra_record_fields_are_ignored() {
        let json = r#"{"recent_sales": [{"date": "2025-06-01", "total": 5.0, "hsn_code": "9608", "quantity": 2}]}"#;
        let stats = DashboardStats::from_json(json).expect("should deserialize");
        assert_eq!(stats.recent_sales[0].total, 5.0);
    }

    #[test]
    fn missing_fields_default() {
        let stats = DashboardStats::from_json("{}").expect("should deserialize");
        assert_eq!(stats.total_sales, 0.0);
        assert_eq!(stats.profit, 0.0);
        assert!(stats.recent_sales.is_empty());
        assert!(stats.recent_purchases.is_empty());
    }

    #[test]
    fn summary_formats_every_figure() {
        let stats = DashboardStats {
            total_sales: 118.0,
            total_purchases: 59.5,
            total_inventory: 1234.567,
            profit: -3.0,
            ..DashboardStats::default()
        };

        let summary = stats.summary();
        assert_eq!(summary.total_sales, "$118.00");
        assert_eq!(summary.total_purchases, "$59.50");
        assert_eq!(summary.total_inventory, "$1234.57");
        assert_eq!(summary.profit, "$-3.00");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  format_usd
// ═══════════════════════════════════════════════════════════════════

mod currency {
    use super::*;

    #[test]
    fn two_decimals_always() {
        assert_eq!(format_usd(7.5), "$7.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(10.0), "$10.00");
    }

    #[test]
    fn rounds_beyond_two_decimals() {
        assert_eq!(format_usd(1.0 / 3.0), "$0.33");
        assert_eq!(format_usd(2.675), "$2.67");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_usd(-3.0), "$-3.00");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ProductStockIndex
// ═══════════════════════════════════════════════════════════════════

mod stock_index {
    use super::*;

    #[test]
    fn reads_stock_from_label() {
        let index = ProductStockIndex::from_options(&[opt("1", "Blue Pen (Stock: 42)")]);
        assert_eq!(index.get(1).map(|p| p.stock), Some(42));
    }

    #[test]
    fn label_without_pattern_defaults_to_zero() {
        let index = ProductStockIndex::from_options(&[opt("1", "Blue Pen")]);
        assert_eq!(index.get(1).map(|p| p.stock), Some(0));
    }

    #[test]
    fn pattern_must_match_exactly() {
        // Different spacing or casing is a different label, not stock data.
        let index = ProductStockIndex::from_options(&[
            opt("1", "Pen (stock: 9)"),
            opt("2", "Pen (Stock:9)"),
        ]);
        assert_eq!(index.get(1).map(|p| p.stock), Some(0));
        assert_eq!(index.get(2).map(|p| p.stock), Some(0));
    }

    #[test]
    fn pattern_is_found_mid_label() {
        let index =
            ProductStockIndex::from_options(&[opt("7", "Blue Pen - 1.50 (Stock: 13) [pcs]")]);
        assert_eq!(index.get(7).map(|p| p.stock), Some(13));
    }

    #[test]
    fn placeholder_option_is_skipped() {
        let index = ProductStockIndex::from_options(&[
            opt("", "Select a product"),
            opt("3", "Notebook (Stock: 5)"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(3).map(|p| p.stock), Some(5));
    }

    #[test]
    fn non_integer_value_is_skipped() {
        let index = ProductStockIndex::from_options(&[opt("abc", "Odd One (Stock: 5)")]);
        assert!(index.is_empty());
    }

    #[test]
    fn keys_are_exactly_the_remaining_option_values() {
        let index = ProductStockIndex::from_options(&[
            opt("", "Select a product"),
            opt("1", "Pen (Stock: 42)"),
            opt("2", "Notebook (Stock: 7)"),
            opt("9", "Stapler"),
        ]);
        assert_eq!(index.len(), 3);
        assert!(index.get(1).is_some());
        assert!(index.get(2).is_some());
        assert!(index.get(9).is_some());
        assert!(index.get(3).is_none());
    }

    #[test]
    fn stock_for_value_parses_raw_selector_values() {
        let index = ProductStockIndex::from_options(&[opt("2", "Notebook (Stock: 7)")]);
        assert_eq!(index.stock_for_value("2"), Some(7));
        assert_eq!(index.stock_for_value(" 2 "), Some(7));
        assert_eq!(index.stock_for_value(""), None);
        assert_eq!(index.stock_for_value("nope"), None);
        assert_eq!(index.stock_for_value("5"), None);
    }

    #[test]
    fn empty_options_build_an_empty_index() {
        let index = ProductStockIndex::from_options(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartTheme
// ═══════════════════════════════════════════════════════════════════

mod theme {
    use super::*;

    #[test]
    fn defaults_match_the_stylesheet() {
        let theme = ChartTheme::default();
        assert_eq!(theme.sales_color, "#0d6efd");
        assert_eq!(theme.purchases_color, "#dc3545");
        assert_eq!(theme.tension, 0.1);
        assert_eq!(theme.time_unit, "day");
        assert_eq!(theme.tick_format, "MMM D");
        assert_eq!(theme.legend_position, "top");
        assert_eq!(theme.x_title, "Date");
        assert_eq!(theme.y_title, "Amount ($)");
    }

    #[test]
    fn serde_roundtrip() {
        let theme = ChartTheme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: ChartTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, back);
    }
}
