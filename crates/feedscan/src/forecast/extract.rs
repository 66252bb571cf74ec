//! Keyed field extraction from loosely-delimited free text

/// Stop characters used when an empty delimiter set is supplied.
///
/// Matches the feed's field terminators: degree sign, space, comma,
/// percent.
pub const DEFAULT_STOPS: [char; 4] = ['°', ' ', ',', '%'];

/// Extract the span between the end of `key` and the first character in
/// `stops`.
///
/// Returns `None` when `key` is absent from `text` or no stop character
/// follows it. An empty `stops` slice selects [`DEFAULT_STOPS`]; an empty
/// `key` matches at the start of `text`, turning this into a
/// prefix-up-to-delimiter extraction.
pub fn extract_field<'a>(text: &'a str, key: &str, stops: &[char]) -> Option<&'a str> {
    let stops = if stops.is_empty() {
        &DEFAULT_STOPS[..]
    } else {
        stops
    };
    let start = text.find(key)? + key.len();
    let rest = text.get(start..)?;
    let end = rest.find(stops)?;
    rest.get(..end)
}

/// Parse a leading integer: optional sign, then digits, ignoring any
/// trailing text. Returns `None` when no leading integer exists.
pub fn leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value: i32 = rest.get(..end)?.parse().ok()?;
    Some(if negative { -value } else { value })
}
