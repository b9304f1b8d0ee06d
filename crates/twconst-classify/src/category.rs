//! The flat category set.
//!
//! Every class name lands in exactly one [`Category`]. The category drives
//! which naming rule applies; it is independent of the cosmetic grouping
//! hierarchy layered on top by [`GroupingConfig`](crate::GroupingConfig).
//!
//! Categories serialize as their kebab-case keys (`"padding"`, `"z-index"`,
//! `"grid-template-columns"`, ...). Declaration order is the canonical order
//! of the categorized output and is what `Ord` follows.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::UnknownCategory;

macro_rules! categories {
    ($($variant:ident => $key:literal,)+) => {
        /// A flat utility category.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Category {
            $($variant,)+
        }

        impl Category {
            /// Every category, in declaration order.
            pub const ALL: &'static [Category] = &[$(Category::$variant,)+];

            /// Returns the kebab-case key of this category.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Category::$variant => $key,)+
                }
            }
        }

        impl FromStr for Category {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Category::$variant),)+
                    other => Err(UnknownCategory(other.to_string())),
                }
            }
        }
    };
}

categories! {
    // Layout
    Display => "display",
    Position => "position",
    Visibility => "visibility",
    ZIndex => "z-index",
    Overflow => "overflow",
    Overscroll => "overscroll",

    // Flexbox
    FlexDirection => "flex-direction",
    FlexWrap => "flex-wrap",
    FlexGrowShrink => "flex-grow-shrink",
    FlexBasis => "flex-basis",
    AlignItems => "align-items",
    AlignContent => "align-content",
    AlignSelf => "align-self",
    JustifyContent => "justify-content",
    JustifyItems => "justify-items",
    JustifySelf => "justify-self",
    PlaceContent => "place-content",
    PlaceItems => "place-items",
    PlaceSelf => "place-self",

    // Grid
    GridTemplateColumns => "grid-template-columns",
    GridTemplateRows => "grid-template-rows",
    GridColumn => "grid-column",
    GridRow => "grid-row",
    GridFlow => "grid-flow",
    GridAutoColumns => "grid-auto-columns",
    GridAutoRows => "grid-auto-rows",
    Gap => "gap",

    // Spacing
    Padding => "padding",
    Margin => "margin",
    SpaceBetween => "space-between",

    // Sizing
    Width => "width",
    MinWidth => "min-width",
    MaxWidth => "max-width",
    Height => "height",
    MinHeight => "min-height",
    MaxHeight => "max-height",
    Size => "size",

    // Typography
    FontFamily => "font-family",
    FontSize => "font-size",
    FontWeight => "font-weight",
    FontStyle => "font-style",
    FontVariantNumeric => "font-variant-numeric",
    LineHeight => "line-height",
    LetterSpacing => "letter-spacing",
    TextAlign => "text-align",
    TextColor => "text-color",
    TextDecoration => "text-decoration",
    TextDecorationColor => "text-decoration-color",
    TextDecorationStyle => "text-decoration-style",
    TextDecorationThickness => "text-decoration-thickness",
    TextUnderlineOffset => "text-underline-offset",
    TextTransform => "text-transform",
    TextOverflow => "text-overflow",
    TextIndent => "text-indent",
    TextWrap => "text-wrap",
    VerticalAlign => "vertical-align",
    Whitespace => "whitespace",
    WordBreak => "word-break",
    Hyphens => "hyphens",
    Content => "content",

    // Backgrounds
    BackgroundColor => "background-color",
    BackgroundPosition => "background-position",
    BackgroundSize => "background-size",
    BackgroundRepeat => "background-repeat",
    BackgroundClip => "background-clip",
    BackgroundOrigin => "background-origin",
    BackgroundBlend => "background-blend",

    // Borders
    BorderRadius => "border-radius",
    BorderWidth => "border-width",
    BorderColor => "border-color",
    BorderStyle => "border-style",
    BorderSpacing => "border-spacing",
    Divide => "divide",
    Outline => "outline",
    Ring => "ring",

    // Effects
    BoxShadow => "box-shadow",
    BoxShadowColor => "box-shadow-color",
    Opacity => "opacity",
    MixBlend => "mix-blend",

    // Filters
    Blur => "blur",
    Brightness => "brightness",
    Contrast => "contrast",
    DropShadow => "drop-shadow",
    Grayscale => "grayscale",
    HueRotate => "hue-rotate",
    Invert => "invert",
    Saturate => "saturate",
    Sepia => "sepia",
    Backdrop => "backdrop",

    // Transitions & animation
    Transition => "transition",
    Duration => "duration",
    Ease => "ease",
    Delay => "delay",
    Animation => "animation",

    // Transforms
    Scale => "scale",
    Rotate => "rotate",
    Translate => "translate",
    Skew => "skew",
    TransformOrigin => "transform-origin",

    // Interactivity
    Accent => "accent",
    Appearance => "appearance",
    Cursor => "cursor",
    Caret => "caret",
    PointerEvents => "pointer-events",
    Resize => "resize",
    ScrollBehavior => "scroll-behavior",
    ScrollMargin => "scroll-margin",
    ScrollPadding => "scroll-padding",
    ScrollSnapAlign => "scroll-snap-align",
    ScrollSnapStop => "scroll-snap-stop",
    ScrollSnapType => "scroll-snap-type",
    TouchAction => "touch-action",
    UserSelect => "user-select",
    WillChange => "will-change",

    // SVG
    Fill => "fill",
    Stroke => "stroke",
    StrokeWidth => "stroke-width",

    // Tables
    BorderCollapse => "border-collapse",
    BorderSpacingTable => "border-spacing-table",
    TableLayout => "table-layout",
    CaptionSide => "caption-side",

    // Accessibility
    ScreenReaders => "screen-readers",
    ForcedColorAdjust => "forced-color-adjust",

    // Miscellaneous
    Float => "float",
    Clear => "clear",
    Isolation => "isolation",
    ObjectFit => "object-fit",
    ObjectPosition => "object-position",
    AspectRatio => "aspect-ratio",
    Columns => "columns",
    BreakAfter => "break-after",
    BreakBefore => "break-before",
    BreakInside => "break-inside",
    BoxDecorationBreak => "box-decoration-break",
    BoxSizing => "box-sizing",
    Order => "order",
    ListStyleType => "list-style-type",
    ListStylePosition => "list-style-position",

    // Catch-all
    Other => "other",
}

impl Category {
    /// Returns `true` for the catch-all category.
    pub fn is_other(self) -> bool {
        matches!(self, Category::Other)
    }

    /// Returns `true` for the grid family (`grid-*` keys), which share one
    /// naming rule.
    pub fn is_grid(self) -> bool {
        self.as_str().starts_with("grid-")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(de::Error::custom)
    }
}

/// Section order used when categories are emitted without grouping.
///
/// Categories missing from this list follow it, sorted by key.
pub const CATEGORY_ORDER: &[Category] = &[
    Category::Display,
    Category::Position,
    Category::Visibility,
    Category::ZIndex,
    Category::Overflow,
    Category::FlexDirection,
    Category::FlexWrap,
    Category::FlexGrowShrink,
    Category::FlexBasis,
    Category::AlignItems,
    Category::AlignContent,
    Category::AlignSelf,
    Category::JustifyContent,
    Category::JustifyItems,
    Category::JustifySelf,
    Category::PlaceContent,
    Category::PlaceItems,
    Category::PlaceSelf,
    Category::GridTemplateColumns,
    Category::GridTemplateRows,
    Category::GridColumn,
    Category::GridRow,
    Category::GridFlow,
    Category::GridAutoColumns,
    Category::GridAutoRows,
    Category::Gap,
    Category::Padding,
    Category::Margin,
    Category::SpaceBetween,
    Category::Width,
    Category::MinWidth,
    Category::MaxWidth,
    Category::Height,
    Category::MinHeight,
    Category::MaxHeight,
    Category::Size,
    Category::FontFamily,
    Category::FontSize,
    Category::FontWeight,
    Category::FontStyle,
    Category::LineHeight,
    Category::TextAlign,
    Category::TextColor,
    Category::TextDecoration,
    Category::TextDecorationColor,
    Category::TextDecorationStyle,
    Category::TextTransform,
    Category::BackgroundColor,
    Category::BorderRadius,
    Category::BorderWidth,
    Category::BorderColor,
    Category::BorderStyle,
    Category::BoxShadow,
    Category::Opacity,
    Category::Transition,
    Category::Duration,
    Category::Ease,
    Category::Delay,
    Category::Animation,
    Category::Scale,
    Category::Rotate,
    Category::Translate,
    Category::Skew,
    Category::Cursor,
];

/// Orders `categories` for ungrouped emission: [`CATEGORY_ORDER`] first, then
/// the rest alphabetically by key.
pub fn emission_order<I>(categories: I, order: &[Category]) -> Vec<Category>
where
    I: IntoIterator<Item = Category>,
{
    let present: Vec<Category> = categories.into_iter().collect();
    let mut ordered: Vec<Category> = order
        .iter()
        .copied()
        .filter(|c| present.contains(c))
        .collect();

    let mut rest: Vec<Category> = present
        .into_iter()
        .filter(|c| !order.contains(c))
        .collect();
    rest.sort_by_key(|c| c.as_str());
    rest.dedup();

    ordered.extend(rest);
    ordered
}
