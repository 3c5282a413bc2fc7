use tracing::{debug, warn};

use crate::host::{FormDom, Notifier};
use crate::models::product::ProductStockIndex;
use crate::models::stats::format_usd;

/// Form control names and element ids the transaction templates define.
pub const PRODUCT_FIELD: &str = "product_id";
pub const PRICE_FIELD: &str = "price";
pub const QUANTITY_FIELD: &str = "quantity";
pub const TOTAL_ELEMENT_ID: &str = "total-amount";

/// Pages whose path contains this substring get the stock-cap behavior.
/// A substring convention, not a route match.
pub const SALES_PATH_MARKER: &str = "/sales";

/// Events the host forwards from the form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// `change` on the product selector.
    ProductChanged,
    /// `change` on the quantity input. Fires on commit/blur only, so a
    /// user can exceed stock mid-typing; the cap lands when they leave
    /// the field.
    QuantityCommitted,
    /// `input` on the quantity or price field, every keystroke.
    AmountEdited,
}

/// Keeps the transaction form self-consistent: caps quantity to the
/// selected product's stock on sales pages and maintains the running
/// total display.
///
/// Mounted once at page load. Every handler recomputes from the live
/// form values plus the stock index captured at mount; no other state
/// survives between events.
pub struct TransactionFormAssistant {
    /// `None` when the product selector or the price input was missing
    /// at mount, which disables all product-related behavior.
    products: Option<ProductStockIndex>,
    sales_page: bool,
    /// Quantity commit checks run only when the stock wiring is active,
    /// the page is a sales page, and a quantity input exists.
    guard_quantity: bool,
    /// Total recomputation runs only when both amount inputs exist.
    totals_wired: bool,
}

impl TransactionFormAssistant {
    /// Wire the assistant against the current page. Reads the option
    /// list once; stock changes on the server are invisible until the
    /// page reloads.
    #[must_use]
    pub fn mount(dom: &dyn FormDom) -> Self {
        let sales_page = dom.path().contains(SALES_PATH_MARKER);
        let price_present = dom.input_value(PRICE_FIELD).is_some();
        let quantity_present = dom.input_value(QUANTITY_FIELD).is_some();

        let products = match (dom.select_options(PRODUCT_FIELD), price_present) {
            (Some(options), true) => Some(ProductStockIndex::from_options(&options)),
            _ => {
                debug!("product selector or price input missing, skipping stock wiring");
                None
            }
        };

        let guard_quantity = products.is_some() && sales_page && quantity_present;

        Self {
            products,
            sales_page,
            guard_quantity,
            totals_wired: quantity_present && price_present,
        }
    }

    /// Dispatch one UI event. The host calls this from its listeners in
    /// whatever order the browser fires them; handlers are independent
    /// and each reads fresh form state.
    pub fn handle(&self, event: FormEvent, dom: &mut dyn FormDom, notifier: &dyn Notifier) {
        match event {
            FormEvent::ProductChanged => self.on_product_changed(dom),
            FormEvent::QuantityCommitted => self.on_quantity_committed(dom, notifier),
            FormEvent::AmountEdited => self.on_amount_edited(dom),
        }
    }

    /// The stock index captured at mount, if product wiring is active.
    #[must_use]
    pub fn stock_index(&self) -> Option<&ProductStockIndex> {
        self.products.as_ref()
    }

    #[must_use]
    pub fn is_sales_page(&self) -> bool {
        self.sales_page
    }

    /// Selecting a product advertises its stock ceiling on the quantity
    /// input (sales pages only). Off sales pages, or with no matching
    /// product, the selection changes nothing.
    fn on_product_changed(&self, dom: &mut dyn FormDom) {
        let Some(products) = &self.products else {
            return;
        };
        if !self.sales_page {
            return;
        }
        let Some(selected) = dom.select_value(PRODUCT_FIELD) else {
            return;
        };
        if let Some(stock) = products.stock_for_value(&selected) {
            dom.set_input_attr(QUANTITY_FIELD, "max", &stock.to_string());
            dom.set_input_attr(
                QUANTITY_FIELD,
                "title",
                &format!("Max available: {stock}"),
            );
        }
    }

    /// A committed quantity above the selected product's stock gets a
    /// blocking notification and is clamped down to the ceiling.
    fn on_quantity_committed(&self, dom: &mut dyn FormDom, notifier: &dyn Notifier) {
        if !self.guard_quantity {
            return;
        }
        let Some(products) = &self.products else {
            return;
        };
        let Some(stock) = dom
            .select_value(PRODUCT_FIELD)
            .and_then(|selected| products.stock_for_value(&selected))
        else {
            return;
        };
        let Some(quantity) = dom
            .input_value(QUANTITY_FIELD)
            .and_then(|value| value.trim().parse::<f64>().ok())
        else {
            return;
        };

        if quantity > f64::from(stock) {
            warn!(quantity, stock, "entered quantity exceeds stock, clamping");
            notifier.alert(&format!("Only {stock} units available in stock"));
            dom.set_input_value(QUANTITY_FIELD, &stock.to_string());
        }
    }

    /// Recompute `quantity × price` and show it in the total element.
    /// Empty or non-numeric operands count as zero; a page without the
    /// total element gets the computation and discards it.
    fn on_amount_edited(&self, dom: &mut dyn FormDom) {
        if !self.totals_wired {
            return;
        }
        let quantity = amount_or_zero(dom.input_value(QUANTITY_FIELD));
        let price = amount_or_zero(dom.input_value(PRICE_FIELD));
        dom.set_text(TOTAL_ELEMENT_ID, &format_usd(quantity * price));
    }
}

fn amount_or_zero(value: Option<String>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
