//! Forecast extraction from a parsed feed document

use tracing::{debug, warn};

use crate::document::Document;
use crate::error::Result;
use crate::forecast::extract::{extract_field, leading_int};
use crate::forecast::model::{FeedLayout, Forecast, ForecastDay};

impl Forecast {
    /// Extract a forecast from raw feed text with the default layout.
    ///
    /// Fails with `EmptySource` when the feed text is empty; a feed of
    /// the wrong shape does not fail, it degrades to empty and default
    /// field values.
    pub fn from_feed(feed: &str) -> Result<Self> {
        let document = Document::new(feed)?;
        Ok(Self::from_document(&document))
    }

    /// Extract a forecast from an already-constructed document with the
    /// default layout
    pub fn from_document(document: &Document) -> Self {
        Self::with_layout(document, FeedLayout::default())
    }

    /// Extract a forecast using explicit occurrence offsets.
    ///
    /// Missing tags or fields leave the affected entry at its default;
    /// extraction never aborts partway through the table.
    pub fn with_layout(document: &Document, layout: FeedLayout) -> Self {
        let mut forecast = Self::default();
        for (index, entry) in forecast.days.iter_mut().enumerate() {
            let title = document.tag_value("title", layout.title_offset + index);
            let description = document.tag_value("description", layout.description_offset + index);
            debug!(index, title, "extracting forecast day");
            *entry = extract_day(title, description);
            if entry.day.is_empty() {
                warn!(index, "day title missing or unrecognized, leaving defaults");
            }
        }
        forecast
    }
}

fn extract_day(title: &str, description: &str) -> ForecastDay {
    let day = extract_field(title, "", &[':']).unwrap_or_default();
    let summary = extract_field(title, ": ", &[',']).unwrap_or_default();
    let min_temp_c = extract_field(description, "Minimum Temperature: ", &[])
        .and_then(leading_int)
        .unwrap_or_default();
    // The feed omits the maximum on some days; fall back to the minimum.
    let max_temp_c = extract_field(description, "Maximum Temperature: ", &[])
        .and_then(leading_int)
        .unwrap_or(min_temp_c);
    let wind_direction = extract_field(description, "Wind Direction: ", &[',']).unwrap_or_default();
    let wind_speed_mph = extract_field(description, "Wind Speed: ", &['m'])
        .and_then(leading_int)
        .unwrap_or_default();
    ForecastDay {
        day: day.to_string(),
        summary: summary.to_string(),
        min_temp_c,
        max_temp_c,
        wind_direction: wind_direction.to_string(),
        wind_speed_mph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_feed_fails() {
        let err = Forecast::from_feed("").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptySource);
    }

    #[test]
    fn test_extract_day_fields() {
        let title = "Saturday: Sunny Intervals, Max Temp: 12\u{b0}C, Min Temp: 4\u{b0}C";
        let description = "Maximum Temperature: 12\u{b0}C (54\u{b0}F), \
                           Minimum Temperature: 4\u{b0}C (39\u{b0}F), \
                           Wind Direction: North Westerly, Wind Speed: 10mph";
        let day = extract_day(title, description);
        assert_eq!(day.day, "Saturday");
        assert_eq!(day.summary, "Sunny Intervals");
        assert_eq!(day.min_temp_c, 4);
        assert_eq!(day.max_temp_c, 12);
        assert_eq!(day.wind_direction, "North Westerly");
        assert_eq!(day.wind_speed_mph, 10);
    }

    #[test]
    fn test_missing_maximum_falls_back_to_minimum() {
        let day = extract_day("Monday: Rain,", "Minimum Temperature: 5\u{b0}C (41\u{b0}F)");
        assert_eq!(day.min_temp_c, 5);
        assert_eq!(day.max_temp_c, 5);
    }

    #[test]
    fn test_negative_temperatures() {
        let day = extract_day(
            "Tuesday: Snow,",
            "Maximum Temperature: 1\u{b0}C (34\u{b0}F), Minimum Temperature: -4\u{b0}C (25\u{b0}F)",
        );
        assert_eq!(day.min_temp_c, -4);
        assert_eq!(day.max_temp_c, 1);
    }

    #[test]
    fn test_unrecognized_text_leaves_defaults() {
        let day = extract_day("no delimiters here", "no fields here");
        assert_eq!(day, ForecastDay::default());
    }
}
