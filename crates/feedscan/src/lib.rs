//! feedscan - tolerant RSS/XML tag scanning and weather forecast extraction
//!
//! A best-effort scraper tuned to flat RSS weather feeds. It locates
//! literal `<tag>` occurrences by ordinal, checks tag nesting with an
//! explicit stack, prints an indented tag hierarchy, and pulls a 3-day
//! structured forecast out of loosely-delimited free text. It is not a
//! general XML parser: no namespaces, no attribute-aware matching, no
//! CDATA, no entity decoding.
//!
//! # Quick Start
//!
//! ```
//! use feedscan::{Document, Forecast};
//! # fn main() -> Result<(), feedscan::Error> {
//! let doc = Document::new("<rss><title>hi</title></rss>")?;
//! doc.validate()?;
//! assert_eq!(doc.first_tag_value("title"), "hi");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod document;
pub use document::Document;

pub mod scan;
pub use scan::{Cursor, TagToken};

pub mod structure;
pub use structure::{outline, render_outline, validate, OutlineEntry};

pub mod forecast;
pub use forecast::{
    extract_field, leading_int, FeedLayout, Forecast, ForecastDay, ForecastStore, FORECAST_DAYS,
};
