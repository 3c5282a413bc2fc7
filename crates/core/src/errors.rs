use thiserror::Error;

/// Unified error type for the entire saletrack-ui-core library.
/// Fallible public functions return `Result<T, UiError>`.
///
/// Deliberately small: a missing form control is not an error (the page
/// simply skips that wiring), so only the chart boundary and the stats
/// payload can fail.
#[derive(Debug, Error)]
pub enum UiError {
    // ── Chart boundary ──────────────────────────────────────────────
    #[error("Chart target '{0}' not found in the document")]
    ChartTargetMissing(String),

    #[error("Chart mount failed on '{target}': {message}")]
    ChartMount {
        target: String,
        message: String,
    },

    // ── Stats payload ───────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        UiError::Deserialization(e.to_string())
    }
}
