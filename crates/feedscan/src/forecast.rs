//! Weather forecast extraction from RSS feed text

pub mod extract;
pub mod model;
pub mod parser;

pub use extract::{extract_field, leading_int, DEFAULT_STOPS};
pub use model::{FeedLayout, Forecast, ForecastDay, FORECAST_DAYS};

use tracing::warn;

use crate::document::Document;

/// Holder for the most recent successfully extracted forecast.
///
/// `update` replaces the stored forecast wholesale only after a complete,
/// successful parse; a failed parse leaves the previous forecast (if any)
/// untouched. Consumers check [`ForecastStore::is_valid`] before reading.
/// The store itself is not synchronized; callers wanting cross-thread
/// access wrap it in their own exclusion.
#[derive(Clone, Debug, Default)]
pub struct ForecastStore {
    layout: FeedLayout,
    current: Option<Forecast>,
}

impl ForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: FeedLayout) -> Self {
        Self {
            layout,
            current: None,
        }
    }

    /// Parse `feed` and replace the stored forecast on success.
    ///
    /// Returns whether the update took effect. On failure the previously
    /// stored forecast remains readable.
    pub fn update(&mut self, feed: &str) -> bool {
        let document = match Document::new(feed) {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, "forecast update failed, keeping previous data");
                return false;
            }
        };
        self.current = Some(Forecast::with_layout(&document, self.layout));
        true
    }

    /// Validity gate: true once an update has succeeded
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// The stored forecast, gated behind validity
    pub fn forecast(&self) -> Option<&Forecast> {
        self.current.as_ref()
    }
}
