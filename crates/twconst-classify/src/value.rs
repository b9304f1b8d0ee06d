//! Trailing value extraction (`pl-4` → `4`, `p-0.5` → `0_5`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Named values recognised as a trailing `-value` segment.
pub const VALUE_KEYWORDS: &[&str] = &[
    "auto", "full", "screen", "px", "xs", "sm", "md", "lg", "xl", "xxl", "max", "min", "fit",
];

static TRAILING_VALUE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"-([0-9.]+|{})$", VALUE_KEYWORDS.join("|"));
    Regex::new(&pattern).expect("trailing value pattern is a valid regex")
});

/// Pulls the trailing value token out of a class name.
///
/// Matches a final `-` followed by digits and dots, or by one of
/// [`VALUE_KEYWORDS`]. Dots become `_` and the result is upper-cased.
/// Returns an empty string when nothing matches.
///
/// ```
/// use twconst_classify::extract_value;
///
/// assert_eq!(extract_value("pl-4"), "4");
/// assert_eq!(extract_value("p-0.5"), "0_5");
/// assert_eq!(extract_value("w-screen"), "SCREEN");
/// assert_eq!(extract_value("w-1/2"), "");
/// ```
pub fn extract_value(name: &str) -> String {
    TRAILING_VALUE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('.', "_").to_uppercase())
        .unwrap_or_default()
}
