use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Snapshot of one `<option>` in the product selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The option's value attribute: the product id, or empty for the
    /// "choose a product" placeholder.
    pub value: String,

    /// The option's display text, e.g. `"Blue Pen (Stock: 42)"`.
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Per-product data the form needs at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Units currently in stock.
    pub stock: u32,
}

/// Immutable product-id → stock mapping, built once from the selector's
/// option list when the form mounts.
///
/// Stock is taken from the fixed `"(Stock: N)"` substring of the option
/// label and defaults to 0 when the pattern is absent. Options with an
/// empty value (the placeholder) or a non-integer value are skipped.
/// Stock shown on the page can drift from the server between reloads;
/// this index deliberately never refreshes itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductStockIndex {
    products: HashMap<u32, ProductInfo>,
}

fn stock_label() -> &'static Regex {
    static STOCK_LABEL: OnceLock<Regex> = OnceLock::new();
    STOCK_LABEL.get_or_init(|| Regex::new(r"\(Stock: (\d+)\)").unwrap())
}

impl ProductStockIndex {
    /// Build the index from the selector's current options.
    #[must_use]
    pub fn from_options(options: &[SelectOption]) -> Self {
        let mut products = HashMap::new();
        for option in options {
            if option.value.is_empty() {
                continue;
            }
            let Ok(product_id) = option.value.trim().parse::<u32>() else {
                continue;
            };
            let stock = stock_label()
                .captures(&option.text)
                .and_then(|caps| caps[1].parse().ok())
                .unwrap_or(0);
            products.insert(product_id, ProductInfo { stock });
        }
        Self { products }
    }

    #[must_use]
    pub fn get(&self, product_id: u32) -> Option<&ProductInfo> {
        self.products.get(&product_id)
    }

    /// Look up stock by the selector's raw value, as the change handlers
    /// see it. `None` when the value is not an integer or the product is
    /// unknown.
    #[must_use]
    pub fn stock_for_value(&self, raw_value: &str) -> Option<u32> {
        let product_id = raw_value.trim().parse::<u32>().ok()?;
        self.get(product_id).map(|product| product.stock)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
