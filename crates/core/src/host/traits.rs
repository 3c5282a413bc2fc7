//! Trait abstractions for everything the core needs from the hosting
//! page. The browser shim (WASM, or whatever embeds this crate)
//! implements these; tests implement them with plain structs. The core
//! never touches a real document, so swapping the host touches nothing
//! else.

use crate::errors::UiError;
use crate::models::chart::LineChart;
use crate::models::product::SelectOption;

/// Read/write surface of the transaction form.
///
/// `None` from a read means the control does not exist on this page;
/// the caller skips that wiring rather than treating it as a failure.
/// Writes against absent elements are silent no-ops.
pub trait FormDom {
    /// Snapshot the options of the named `<select>`.
    fn select_options(&self, name: &str) -> Option<Vec<SelectOption>>;

    /// Current value of the named `<select>` (empty string when nothing
    /// is chosen).
    fn select_value(&self, name: &str) -> Option<String>;

    /// Current value of the named input.
    fn input_value(&self, name: &str) -> Option<String>;

    fn set_input_value(&mut self, name: &str, value: &str);

    /// Set an attribute (`max`, `title`, ...) on the named input.
    fn set_input_attr(&mut self, name: &str, attr: &str, value: &str);

    /// Replace the text content of the element with the given id.
    fn set_text(&mut self, element_id: &str, text: &str);

    /// Path portion of the page URL, e.g. `"/sales"`.
    fn path(&self) -> String;
}

/// Blocking user notification, `window.alert` in the browser.
/// Injected so the stock-cap path is testable without a real UI.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Binds a finished chart configuration to a canvas in the document.
pub trait ChartHost {
    /// Mount `chart` on the canvas with the given element id. What a
    /// missing canvas does is the host's call; this crate only
    /// propagates the error.
    fn mount_line_chart(&mut self, target_id: &str, chart: &LineChart) -> Result<(), UiError>;
}

/// The page-wide icon-glyph replacement pass (`feather.replace()` in the
/// shipped templates). Idempotent; the dashboard runs it once per load.
pub trait IconSet {
    fn replace_all(&mut self);
}
