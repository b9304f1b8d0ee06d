//! Canonical ordering of class names inside a category.
//!
//! Names compare by the numeric value of their first run of ASCII digits
//! (0 when there is none), then lexicographically. Digit runs are compared
//! as strings, so arbitrarily long values never overflow.

use std::cmp::Ordering;

/// Returns the first run of ASCII digits in `name` with leading zeros
/// removed. Empty means zero.
fn leading_number(name: &str) -> &str {
    let Some(start) = name.find(|c: char| c.is_ascii_digit()) else {
        return "";
    };
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].trim_start_matches('0')
}

fn compare_digit_strings(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Numeric-aware comparison of two class names.
///
/// ```
/// use std::cmp::Ordering;
/// use twconst_classify::compare_class_names;
///
/// assert_eq!(compare_class_names("w-8", "w-64"), Ordering::Less);
/// assert_eq!(compare_class_names("w-full", "w-8"), Ordering::Less);
/// assert_eq!(compare_class_names("p-0.5", "p-0"), Ordering::Greater);
/// ```
pub fn compare_class_names(a: &str, b: &str) -> Ordering {
    compare_digit_strings(leading_number(a), leading_number(b)).then_with(|| a.cmp(b))
}

/// Sorts class names in place with [`compare_class_names`].
pub fn sort_class_names<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| compare_class_names(a.as_ref(), b.as_ref()));
}
