//! Numeric coercion for locale-formatted rate text
//!
//! Source tables present rates as text such as `12.3%`, `1,234` or `−5.0`
//! (U+2212 minus), sometimes with footnote markers attached. Anything that
//! yields no number becomes `None`, which the merge later treats as missing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").unwrap();
}

/// Extract the first number in `text`
///
/// Percent signs and thousands separators are removed and the Unicode minus
/// sign is read as `-` before matching. Only ASCII digits count, and a value
/// too large for `f64` is missing rather than infinite.
pub fn coerce_numeric(text: &str) -> Option<f64> {
    let cleaned = text.replace(['%', ','], "").replace('\u{2212}', "-");
    NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
