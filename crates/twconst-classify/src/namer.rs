//! Per-category constant naming.
//!
//! [`Namer::name`] picks a decoding rule from the flat category and falls
//! back to [`TargetGrammar::sanitize`] when the category has no bespoke
//! rule or the rule does not apply to the given name. Every bespoke result
//! is passed through [`TargetGrammar::repair`], so the output always fits
//! the grammar.

use crate::category::Category;
use crate::grammar::{normalize, upper_snake, TargetGrammar};
use crate::value::extract_value;

/// Friendly names for the font-size scale.
pub const FONT_SIZE_NAMES: &[(&str, &str)] = &[
    ("text-xs", "XS"),
    ("text-sm", "SM"),
    ("text-base", "BASE"),
    ("text-lg", "LG"),
    ("text-xl", "XL"),
    ("text-2xl", "XXLARGE"),
    ("text-3xl", "XXXLARGE"),
    ("text-4xl", "XXXXLARGE"),
    ("text-5xl", "XXXXXLARGE"),
    ("text-6xl", "XXXXXXLARGE"),
    ("text-7xl", "XXXXXXXLARGE"),
    ("text-8xl", "XXXXXXXXLARGE"),
    ("text-9xl", "XXXXXXXXXLARGE"),
];

const PADDING_SIDES: &[(&str, &str)] = &[
    ("pl-", "LEFT_"),
    ("pr-", "RIGHT_"),
    ("pt-", "TOP_"),
    ("pb-", "BOTTOM_"),
    ("px-", "X_"),
    ("py-", "Y_"),
    ("p-", "P_"),
];

const MARGIN_SIDES: &[(&str, &str)] = &[
    ("ml-", "LEFT_"),
    ("mr-", "RIGHT_"),
    ("mt-", "TOP_"),
    ("mb-", "BOTTOM_"),
    ("mx-", "X_"),
    ("my-", "Y_"),
    ("m-", "M_"),
];

const GAP_AXES: &[(&str, &str)] = &[("gap-x-", "X_"), ("gap-y-", "Y_"), ("gap-", "GAP_")];

const SPACE_AXES: &[(&str, &str)] = &[("space-x-", "X_"), ("space-y-", "Y_")];

const SIZE_PREFIX: &[(&str, &str)] = &[("size-", "SIZE_")];

/// Dimension values that are emitted without the `W_`/`H_` marker.
const DIMENSION_KEYWORDS: &[&str] = &["full", "screen", "auto", "min", "max", "fit"];

/// Derives constant names from class names.
#[derive(Debug, Clone, Copy)]
pub struct Namer {
    grammar: TargetGrammar,
    font_sizes: &'static [(&'static str, &'static str)],
}

impl Default for Namer {
    fn default() -> Self {
        Namer::new(TargetGrammar::JAVA)
    }
}

impl Namer {
    /// Creates a namer for `grammar` with the built-in font-size table.
    pub fn new(grammar: TargetGrammar) -> Self {
        Namer {
            grammar,
            font_sizes: FONT_SIZE_NAMES,
        }
    }

    /// Replaces the font-size table.
    pub fn with_font_sizes(mut self, table: &'static [(&'static str, &'static str)]) -> Self {
        self.font_sizes = table;
        self
    }

    pub fn grammar(&self) -> &TargetGrammar {
        &self.grammar
    }

    /// Names `class_name` according to the rule of `category`.
    ///
    /// The result depends only on the two arguments.
    ///
    /// ```
    /// use twconst_classify::{Category, Namer};
    ///
    /// let namer = Namer::default();
    /// assert_eq!(namer.name("pl-4", Category::Padding), "LEFT_4");
    /// assert_eq!(namer.name("-mt-2", Category::Margin), "NEG_TOP_2");
    /// assert_eq!(namer.name("w-1/2", Category::Width), "W_1_2");
    /// assert_eq!(namer.name("text-2xl", Category::FontSize), "XXLARGE");
    /// assert_eq!(namer.name("shadow", Category::BoxShadow), "DEFAULT");
    /// ```
    pub fn name(&self, class_name: &str, category: Category) -> String {
        let name = normalize(class_name);
        match self.bespoke(&name, category) {
            Some(candidate) => self.grammar.repair(&candidate),
            None => self.grammar.sanitize(&name),
        }
    }

    fn bespoke(&self, name: &str, category: Category) -> Option<String> {
        use Category as C;

        match category {
            C::Padding => sided(name, PADDING_SIDES),
            C::Margin => self.margin(name),
            C::Gap => sided(name, GAP_AXES),
            C::SpaceBetween => sided(name, SPACE_AXES),
            C::Size => sided(name, SIZE_PREFIX),
            C::Width => dimension(name, "w-", "W_"),
            C::MinWidth => dimension(name, "min-w-", "W_"),
            C::MaxWidth => dimension(name, "max-w-", "W_"),
            C::Height => dimension(name, "h-", "H_"),
            C::MinHeight => dimension(name, "min-h-", "H_"),
            C::MaxHeight => dimension(name, "max-h-", "H_"),
            C::FontSize => self
                .font_sizes
                .iter()
                .find(|(class, _)| *class == name)
                .map(|(_, constant)| constant.to_string()),
            C::BackgroundColor => Some(strip_first(name, "bg-")),
            C::TextColor => Some(strip_first(name, "text-")),
            C::BorderColor | C::BorderStyle => Some(strip_first(name, "border-")),
            C::FontWeight | C::FontFamily => Some(strip_first(name, "font-")),
            C::TextAlign => Some(strip_first(name, "text-")),
            C::AlignItems => Some(strip_first(name, "items-")),
            C::JustifyContent => Some(strip_first(name, "justify-")),
            C::AlignContent => Some(strip_first(name, "content-")),
            C::AlignSelf => Some(strip_first(name, "self-")),
            C::FlexDirection | C::FlexWrap => Some(strip_first(name, "flex-")),
            C::BorderRadius | C::BorderWidth | C::Display | C::Opacity | C::Position => {
                Some(upper_snake(name))
            }
            C::ZIndex if name == "z-auto" => Some("AUTO".to_string()),
            C::ZIndex => Some(upper_snake(name)),
            C::BoxShadow if name == "shadow" => Some("DEFAULT".to_string()),
            C::BoxShadow => Some(strip_first(name, "shadow-")),
            c if c.is_grid() => Some(upper_snake(name.strip_prefix("grid-").unwrap_or(name))),
            _ => None,
        }
    }

    /// Margin names carry the side rule plus a `NEG_` wrap for negative
    /// utilities. Bodies no side matches are sanitized.
    fn margin(&self, name: &str) -> Option<String> {
        let (negative, body) = match name.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, name),
        };
        let inner = sided(body, MARGIN_SIDES).unwrap_or_else(|| self.grammar.sanitize(body));
        if negative {
            Some(format!("{}{}", self.grammar.negation_prefix, inner))
        } else {
            Some(inner)
        }
    }
}

/// Applies the first matching `(prefix, marker)` pair: `marker + value`.
///
/// `None` when no prefix matches or the trailing value is empty, which
/// sends the name to the sanitizer.
fn sided(name: &str, table: &[(&str, &str)]) -> Option<String> {
    let (_, marker) = table.iter().find(|(prefix, _)| name.starts_with(prefix))?;
    let value = extract_value(name);
    if value.is_empty() {
        return None;
    }
    Some(format!("{marker}{value}"))
}

/// `w-64` → `W_64`, `w-full` → `FULL`, `max-w-screen-lg` → `SCREEN_LG`.
fn dimension(name: &str, prefix: &str, marker: &str) -> Option<String> {
    let value = name.strip_prefix(prefix)?;
    if DIMENSION_KEYWORDS.contains(&value) || value.starts_with("screen-") {
        Some(upper_snake(value))
    } else {
        Some(format!("{marker}{}", upper_snake(value)))
    }
}

/// Removes the first occurrence of `token` and upper-snakes the rest.
fn strip_first(name: &str, token: &str) -> String {
    upper_snake(&name.replacen(token, "", 1))
}
