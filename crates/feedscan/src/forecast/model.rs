//! Forecast data model

use std::fmt;

/// Number of forecast days the feed provides. The feed shape is fixed;
/// this is a named constant, not a tunable.
pub const FORECAST_DAYS: usize = 3;

/// Occurrence offsets of the per-day `title` and `description` tags
/// within the feed.
///
/// The feed places the channel title and the image title before the
/// per-day titles, so day 0 is the 3rd `title` occurrence. Only the
/// channel description precedes the per-day descriptions, so day 0 is
/// the 2nd `description` occurrence. The defaults encode that layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedLayout {
    pub title_offset: usize,
    pub description_offset: usize,
}

impl Default for FeedLayout {
    fn default() -> Self {
        Self {
            title_offset: 3,
            description_offset: 2,
        }
    }
}

/// One day's structured weather summary
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastDay {
    /// Day name, e.g. "Saturday"
    pub day: String,
    /// Short description, e.g. "Sunny Intervals"
    pub summary: String,
    /// Minimum temperature in Celsius
    pub min_temp_c: i32,
    /// Maximum temperature in Celsius; equals `min_temp_c` when the feed
    /// omits the maximum
    pub max_temp_c: i32,
    /// Wind direction, e.g. "North Westerly"
    pub wind_direction: String,
    /// Wind speed in mph
    pub wind_speed_mph: i32,
}

/// A complete 3-day forecast, produced wholesale by a successful parse
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forecast {
    pub days: [ForecastDay; FORECAST_DAYS],
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            writeln!(f, "{}", day.day)?;
            writeln!(f, "Overview: {}", day.summary)?;
            writeln!(f, "Max Temp: {} C", day.max_temp_c)?;
            writeln!(f, "Min Temp: {} C", day.min_temp_c)?;
            writeln!(f, "Wind Direction: {}", day.wind_direction)?;
            writeln!(f, "Wind Speed: {} mph", day.wind_speed_mph)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
