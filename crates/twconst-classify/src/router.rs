//! Flat category routing.
//!
//! [`RULES`] is an explicit, ordered list of `(matcher, category)` pairs.
//! [`categorize`] walks it top to bottom and the first matching rule wins,
//! so more specific prefixes (`justify-items-`) sit above broader ones
//! (`justify-`). A name no rule matches lands in [`Category::Other`].

use std::collections::{BTreeMap, BTreeSet};

use crate::category::Category;
use crate::grammar::normalize;
use crate::manifest::CategorizedUtilities;
use crate::ordering::sort_class_names;

use self::Matcher::{Exact, Predicate, Prefix, PrefixExcept};

/// How a rule decides whether it applies to a class name.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// The name equals one of the listed strings.
    Exact(&'static [&'static str]),
    /// The name starts with one of the listed prefixes.
    Prefix(&'static [&'static str]),
    /// The name starts with one of `prefixes` but none of `except`.
    PrefixExcept {
        prefixes: &'static [&'static str],
        except: &'static [&'static str],
    },
    /// Arbitrary predicate, for shapes prefixes cannot express.
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    /// Returns `true` if this matcher accepts `name`.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Exact(values) => values.contains(&name),
            Matcher::Prefix(prefixes) => starts_with_any(name, prefixes),
            Matcher::PrefixExcept { prefixes, except } => {
                starts_with_any(name, prefixes) && !starts_with_any(name, except)
            }
            Matcher::Predicate(pred) => pred(name),
        }
    }
}

fn starts_with_any(name: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| name.starts_with(p))
}

/// One routing rule: any of its matchers accepting a name sends it to
/// `category`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub matchers: &'static [Matcher],
    pub category: Category,
}

impl Rule {
    pub fn matches(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(name))
    }
}

const fn rule(matchers: &'static [Matcher], category: Category) -> Rule {
    Rule { matchers, category }
}

const FONT_SIZE_PREFIXES: &[&str] = &[
    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl", "text-4xl",
    "text-5xl", "text-6xl", "text-7xl", "text-8xl", "text-9xl",
];

const TEXT_ALIGN_PREFIXES: &[&str] = &[
    "text-left",
    "text-center",
    "text-right",
    "text-justify",
    "text-start",
    "text-end",
];

const DECORATION_STYLES: &[&str] = &[
    "decoration-solid",
    "decoration-double",
    "decoration-dotted",
    "decoration-dashed",
    "decoration-wavy",
];

const BORDER_STYLES: &[&str] = &[
    "border-solid",
    "border-dashed",
    "border-dotted",
    "border-double",
    "border-hidden",
    "border-none",
];

/// Tokens after `border-` that select a side or a width.
const BORDER_WIDTH_TOKENS: &[&str] = &["x-", "y-", "t-", "r-", "b-", "l-", "s-", "e-"];

/// Tokens after `border-` that mean something other than a color.
const BORDER_NON_COLOR_TOKENS: &[&str] = &[
    "x-", "y-", "t-", "r-", "b-", "l-", "s-", "e-", "solid", "dashed", "dotted", "double", "hidden",
    "none", "collapse", "separate", "spacing",
];

fn is_border_width(name: &str) -> bool {
    name.strip_prefix("border-").is_some_and(|rest| {
        rest.starts_with(|c: char| c.is_ascii_digit()) || starts_with_any(rest, BORDER_WIDTH_TOKENS)
    })
}

fn is_border_color(name: &str) -> bool {
    name.strip_prefix("border-").is_some_and(|rest| {
        !rest.starts_with(|c: char| c.is_ascii_digit())
            && !starts_with_any(rest, BORDER_NON_COLOR_TOKENS)
    })
}

/// The routing table, in priority order.
pub static RULES: &[Rule] = &[
    // Layout
    rule(
        &[Exact(&[
            "block",
            "inline",
            "inline-block",
            "flex",
            "inline-flex",
            "grid",
            "inline-grid",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "contents",
            "list-item",
            "hidden",
        ])],
        Category::Display,
    ),
    rule(
        &[
            Exact(&["static", "fixed", "absolute", "relative", "sticky"]),
            Prefix(&[
                "inset-", "top-", "right-", "bottom-", "left-", "start-", "end-",
            ]),
        ],
        Category::Position,
    ),
    rule(
        &[Exact(&["visible", "invisible", "collapse"])],
        Category::Visibility,
    ),
    rule(&[Prefix(&["z-"])], Category::ZIndex),
    // Flexbox
    rule(&[Prefix(&["flex-row", "flex-col"])], Category::FlexDirection),
    rule(&[Prefix(&["flex-wrap", "flex-nowrap"])], Category::FlexWrap),
    rule(
        &[
            Prefix(&["flex-grow", "flex-shrink"]),
            Exact(&["flex-1", "flex-auto", "flex-initial", "flex-none"]),
        ],
        Category::FlexGrowShrink,
    ),
    rule(&[Prefix(&["basis-"])], Category::FlexBasis),
    rule(&[Prefix(&["items-"])], Category::AlignItems),
    rule(&[Prefix(&["content-"])], Category::AlignContent),
    rule(&[Prefix(&["self-"])], Category::AlignSelf),
    rule(
        &[
            Prefix(&["justify-content-"]),
            PrefixExcept {
                prefixes: &["justify-"],
                except: &["justify-items-", "justify-self-"],
            },
        ],
        Category::JustifyContent,
    ),
    rule(&[Prefix(&["justify-items-"])], Category::JustifyItems),
    rule(&[Prefix(&["justify-self-"])], Category::JustifySelf),
    rule(&[Prefix(&["place-content-"])], Category::PlaceContent),
    rule(&[Prefix(&["place-items-"])], Category::PlaceItems),
    rule(&[Prefix(&["place-self-"])], Category::PlaceSelf),
    // Grid
    rule(&[Prefix(&["grid-cols-"])], Category::GridTemplateColumns),
    rule(&[Prefix(&["grid-rows-"])], Category::GridTemplateRows),
    rule(&[Prefix(&["col-"])], Category::GridColumn),
    rule(&[Prefix(&["row-"])], Category::GridRow),
    rule(&[Prefix(&["grid-flow-"])], Category::GridFlow),
    rule(&[Prefix(&["auto-cols-"])], Category::GridAutoColumns),
    rule(&[Prefix(&["auto-rows-"])], Category::GridAutoRows),
    rule(&[Prefix(&["gap-"])], Category::Gap),
    // Spacing
    rule(
        &[Prefix(&[
            "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "ps-", "pe-",
        ])],
        Category::Padding,
    ),
    rule(
        &[Prefix(&[
            "m-", "mx-", "my-", "mt-", "mr-", "mb-", "ml-", "ms-", "me-", "-m-", "-mx-", "-my-",
            "-mt-", "-mr-", "-mb-", "-ml-",
        ])],
        Category::Margin,
    ),
    rule(&[Prefix(&["space-x-", "space-y-"])], Category::SpaceBetween),
    // Sizing
    rule(&[Prefix(&["w-"])], Category::Width),
    rule(&[Prefix(&["min-w-"])], Category::MinWidth),
    rule(&[Prefix(&["max-w-"])], Category::MaxWidth),
    rule(&[Prefix(&["h-"])], Category::Height),
    rule(&[Prefix(&["min-h-"])], Category::MinHeight),
    rule(&[Prefix(&["max-h-"])], Category::MaxHeight),
    rule(&[Prefix(&["size-"])], Category::Size),
    // Typography
    rule(
        &[Prefix(&["font-sans", "font-serif", "font-mono"])],
        Category::FontFamily,
    ),
    rule(&[Prefix(FONT_SIZE_PREFIXES)], Category::FontSize),
    rule(
        &[Prefix(&[
            "font-thin",
            "font-extralight",
            "font-light",
            "font-normal",
            "font-medium",
            "font-semibold",
            "font-bold",
            "font-extrabold",
            "font-black",
        ])],
        Category::FontWeight,
    ),
    rule(&[Exact(&["italic", "not-italic"])], Category::FontStyle),
    rule(
        &[PrefixExcept {
            prefixes: &["text-"],
            except: &[
                "text-xs",
                "text-sm",
                "text-base",
                "text-lg",
                "text-xl",
                "text-left",
                "text-center",
                "text-right",
                "text-justify",
                "text-start",
                "text-end",
                "text-ellipsis",
                "text-clip",
                "text-wrap",
                "text-nowrap",
                "text-balance",
                "text-pretty",
            ],
        }],
        Category::TextColor,
    ),
    rule(&[Prefix(TEXT_ALIGN_PREFIXES)], Category::TextAlign),
    rule(
        &[Exact(&["underline", "overline", "line-through", "no-underline"])],
        Category::TextDecoration,
    ),
    rule(
        &[PrefixExcept {
            prefixes: &["decoration-"],
            except: DECORATION_STYLES,
        }],
        Category::TextDecorationColor,
    ),
    rule(&[Prefix(DECORATION_STYLES)], Category::TextDecorationStyle),
    rule(
        &[Exact(&["uppercase", "lowercase", "capitalize", "normal-case"])],
        Category::TextTransform,
    ),
    // Backgrounds
    rule(
        &[PrefixExcept {
            prefixes: &["bg-"],
            except: &[
                "bg-clip-",
                "bg-origin-",
                "bg-repeat",
                "bg-no-repeat",
                "bg-auto",
                "bg-cover",
                "bg-contain",
                "bg-fixed",
                "bg-local",
                "bg-scroll",
                "bg-bottom",
                "bg-center",
                "bg-left",
                "bg-right",
                "bg-top",
                "bg-blend-",
            ],
        }],
        Category::BackgroundColor,
    ),
    // Borders
    rule(
        &[Prefix(&["rounded-"]), Exact(&["rounded"])],
        Category::BorderRadius,
    ),
    rule(
        &[Predicate(is_border_width), Exact(&["border"])],
        Category::BorderWidth,
    ),
    rule(&[Predicate(is_border_color)], Category::BorderColor),
    rule(&[Prefix(BORDER_STYLES)], Category::BorderStyle),
    // Effects
    rule(&[Prefix(&["shadow-"]), Exact(&["shadow"])], Category::BoxShadow),
    rule(&[Prefix(&["opacity-"])], Category::Opacity),
    // Transitions & animation
    rule(
        &[Prefix(&["transition-"]), Exact(&["transition"])],
        Category::Transition,
    ),
    rule(&[Prefix(&["duration-"])], Category::Duration),
    rule(&[Prefix(&["ease-"])], Category::Ease),
    rule(&[Prefix(&["delay-"])], Category::Delay),
    rule(&[Prefix(&["animate-"])], Category::Animation),
    // Transforms
    rule(&[Prefix(&["scale-"])], Category::Scale),
    rule(&[Prefix(&["rotate-", "-rotate-"])], Category::Rotate),
    rule(&[Prefix(&["translate-", "-translate-"])], Category::Translate),
    rule(&[Prefix(&["skew-", "-skew-"])], Category::Skew),
    // Interactivity
    rule(&[Prefix(&["cursor-"])], Category::Cursor),
    rule(&[Prefix(&["overflow-"])], Category::Overflow),
];

/// Routes one class name to its flat category.
///
/// The name is normalized first, so escaped and unescaped spellings of the
/// same class land in the same place.
///
/// ```
/// use twconst_classify::{categorize, Category};
///
/// assert_eq!(categorize("pl-4"), Category::Padding);
/// assert_eq!(categorize("-mt-2"), Category::Margin);
/// assert_eq!(categorize("justify-items-center"), Category::JustifyItems);
/// assert_eq!(categorize("foo-bar-baz"), Category::Other);
/// ```
pub fn categorize(class_name: &str) -> Category {
    let name = normalize(class_name);
    RULES
        .iter()
        .find(|r| r.matches(&name))
        .map(|r| r.category)
        .unwrap_or(Category::Other)
}

/// Routes a whole set of class names.
///
/// Names are normalized and deduplicated. Empty categories are omitted and
/// names inside a category come out in the canonical numeric-aware order,
/// so the result does not depend on input order.
pub fn categorize_all<I, S>(class_names: I) -> CategorizedUtilities
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets: BTreeMap<Category, BTreeSet<String>> = BTreeMap::new();
    for raw in class_names {
        let name = normalize(raw.as_ref());
        let category = categorize(&name);
        buckets.entry(category).or_default().insert(name);
    }

    let mut out = CategorizedUtilities::default();
    for (category, names) in buckets {
        let mut names: Vec<String> = names.into_iter().collect();
        sort_class_names(&mut names);
        out.insert(category, names);
    }
    tracing::debug!(categories = out.len(), "categorized utilities");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str) -> Category {
        categorize(name)
    }

    #[test]
    fn display_and_position_keywords() {
        assert_eq!(cat("flex"), Category::Display);
        assert_eq!(cat("hidden"), Category::Display);
        assert_eq!(cat("table-row-group"), Category::Display);
        assert_eq!(cat("sticky"), Category::Position);
        assert_eq!(cat("inset-x-0"), Category::Position);
        assert_eq!(cat("start-4"), Category::Position);
        assert_eq!(cat("collapse"), Category::Visibility);
    }

    #[test]
    fn flex_family() {
        assert_eq!(cat("flex-row-reverse"), Category::FlexDirection);
        assert_eq!(cat("flex-col"), Category::FlexDirection);
        assert_eq!(cat("flex-wrap-reverse"), Category::FlexWrap);
        assert_eq!(cat("flex-1"), Category::FlexGrowShrink);
        assert_eq!(cat("flex-shrink-0"), Category::FlexGrowShrink);
        assert_eq!(cat("flex-2"), Category::Other);
        assert_eq!(cat("basis-1/2"), Category::FlexBasis);
    }

    #[test]
    fn justify_specific_before_general() {
        assert_eq!(cat("justify-between"), Category::JustifyContent);
        assert_eq!(cat("justify-content-center"), Category::JustifyContent);
        assert_eq!(cat("justify-items-center"), Category::JustifyItems);
        assert_eq!(cat("justify-self-end"), Category::JustifySelf);
        assert_eq!(cat("place-self-auto"), Category::PlaceSelf);
    }

    #[test]
    fn grid_family() {
        assert_eq!(cat("grid-cols-3"), Category::GridTemplateColumns);
        assert_eq!(cat("grid-rows-none"), Category::GridTemplateRows);
        assert_eq!(cat("col-span-2"), Category::GridColumn);
        assert_eq!(cat("row-start-1"), Category::GridRow);
        assert_eq!(cat("grid-flow-col"), Category::GridFlow);
        assert_eq!(cat("auto-cols-fr"), Category::GridAutoColumns);
        assert_eq!(cat("gap-x-2"), Category::Gap);
    }

    #[test]
    fn spacing_and_sizing() {
        assert_eq!(cat("pl-4"), Category::Padding);
        assert_eq!(cat("pe-2"), Category::Padding);
        assert_eq!(cat("-mt-2"), Category::Margin);
        assert_eq!(cat("ms-auto"), Category::Margin);
        assert_eq!(cat("space-y-4"), Category::SpaceBetween);
        assert_eq!(cat("w-1/2"), Category::Width);
        assert_eq!(cat("min-w-0"), Category::MinWidth);
        assert_eq!(cat("max-h-screen"), Category::MaxHeight);
        assert_eq!(cat("size-8"), Category::Size);
    }

    #[test]
    fn text_family() {
        assert_eq!(cat("text-2xl"), Category::FontSize);
        assert_eq!(cat("text-base"), Category::FontSize);
        assert_eq!(cat("text-blue-500"), Category::TextColor);
        assert_eq!(cat("text-white"), Category::TextColor);
        assert_eq!(cat("text-center"), Category::TextAlign);
        assert_eq!(cat("text-ellipsis"), Category::Other);
        assert_eq!(cat("font-bold"), Category::FontWeight);
        assert_eq!(cat("font-mono"), Category::FontFamily);
        assert_eq!(cat("not-italic"), Category::FontStyle);
        assert_eq!(cat("line-through"), Category::TextDecoration);
        assert_eq!(cat("decoration-sky-500"), Category::TextDecorationColor);
        assert_eq!(cat("decoration-wavy"), Category::TextDecorationStyle);
        assert_eq!(cat("normal-case"), Category::TextTransform);
    }

    #[test]
    fn background_excludes_non_colors() {
        assert_eq!(cat("bg-red-500"), Category::BackgroundColor);
        assert_eq!(cat("bg-transparent"), Category::BackgroundColor);
        assert_eq!(cat("bg-cover"), Category::Other);
        assert_eq!(cat("bg-blend-multiply"), Category::Other);
        assert_eq!(cat("bg-no-repeat"), Category::Other);
    }

    #[test]
    fn border_family() {
        assert_eq!(cat("rounded"), Category::BorderRadius);
        assert_eq!(cat("rounded-t-lg"), Category::BorderRadius);
        assert_eq!(cat("border"), Category::BorderWidth);
        assert_eq!(cat("border-2"), Category::BorderWidth);
        assert_eq!(cat("border-x-4"), Category::BorderWidth);
        assert_eq!(cat("border-gray-200"), Category::BorderColor);
        assert_eq!(cat("border-dashed"), Category::BorderStyle);
        assert_eq!(cat("border-collapse"), Category::Other);
        assert_eq!(cat("border-spacing-2"), Category::Other);
    }

    #[test]
    fn effects_and_motion() {
        assert_eq!(cat("shadow"), Category::BoxShadow);
        assert_eq!(cat("shadow-lg"), Category::BoxShadow);
        assert_eq!(cat("opacity-50"), Category::Opacity);
        assert_eq!(cat("transition"), Category::Transition);
        assert_eq!(cat("transition-colors"), Category::Transition);
        assert_eq!(cat("duration-300"), Category::Duration);
        assert_eq!(cat("ease-in-out"), Category::Ease);
        assert_eq!(cat("delay-75"), Category::Delay);
        assert_eq!(cat("animate-spin"), Category::Animation);
        assert_eq!(cat("scale-95"), Category::Scale);
        assert_eq!(cat("-rotate-45"), Category::Rotate);
        assert_eq!(cat("-translate-x-1/2"), Category::Translate);
        assert_eq!(cat("skew-y-3"), Category::Skew);
        assert_eq!(cat("cursor-pointer"), Category::Cursor);
        assert_eq!(cat("overflow-x-auto"), Category::Overflow);
    }

    #[test]
    fn unmatched_is_other() {
        assert_eq!(cat("foo-bar-baz"), Category::Other);
        assert_eq!(cat(""), Category::Other);
        assert_eq!(cat("sr-only"), Category::Other);
    }

    #[test]
    fn escaped_names_route_like_plain() {
        assert_eq!(cat(r"w-1\/2"), Category::Width);
        assert_eq!(cat(r"p-0\.5"), Category::Padding);
    }

    #[test]
    fn categorize_all_dedupes_and_orders() {
        let out = categorize_all(["w-64", "w-8", "w-full", r"w-1\/2", "w-8", "flex"]);
        assert_eq!(
            out.get(Category::Width).unwrap(),
            &["w-full", "w-1/2", "w-8", "w-64"]
        );
        assert_eq!(out.get(Category::Display).unwrap(), &["flex"]);
        assert!(out.get(Category::Padding).is_none());
    }
}
