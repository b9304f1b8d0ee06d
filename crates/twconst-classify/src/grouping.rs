//! The cosmetic grouping hierarchy.
//!
//! A [`GroupingConfig`] maps top-level group names (`Spacing`, `Sizing`, ...)
//! to the flat categories they collect and, optionally, the subcategory
//! names they nest. It only decides where a constant is emitted; naming is
//! driven by the flat [`Category`] alone.
//!
//! Groups keep their declaration order when read from JSON or YAML, and
//! that order is the emission order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::GroupingError;
use crate::ordered_map;

/// Name of the implicit group that collects unconfigured categories.
pub const OTHER_GROUP: &str = "Other";

/// One top-level group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    /// Subcategory names nested under this group. When absent, every
    /// constant of the group is emitted directly in the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<String>>,
    /// Category keys collected by this group.
    pub categories: Vec<String>,
}

impl GroupEntry {
    /// A group that emits its constants directly.
    pub fn flat(categories: &[Category]) -> Self {
        GroupEntry {
            subcategories: None,
            categories: categories.iter().map(|c| c.as_str().to_string()).collect(),
        }
    }

    /// A group that nests its constants under subcategories.
    pub fn nested(subcategories: &[&str], categories: &[Category]) -> Self {
        GroupEntry {
            subcategories: Some(subcategories.iter().map(|n| n.to_string()).collect()),
            ..GroupEntry::flat(categories)
        }
    }

    /// Returns `true` if this group lists `category`.
    pub fn contains(&self, category: Category) -> bool {
        self.categories.iter().any(|c| c == category.as_str())
    }
}

/// Where a classified constant is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub top_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
}

impl Placement {
    fn other() -> Self {
        Placement {
            top_level: OTHER_GROUP.to_string(),
            sub_category: None,
        }
    }
}

/// The top-level grouping configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingConfig {
    /// When `false`, output is flat: one section per category.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// Top-level groups in emission order.
    #[serde(with = "ordered_map")]
    pub structure: Vec<(String, GroupEntry)>,
}

fn enabled_default() -> bool {
    true
}

impl Default for GroupingConfig {
    fn default() -> Self {
        GroupingConfig::tailwind()
    }
}

/// Subcategory a category nests under, when its group declares
/// subcategories.
///
/// Several categories may share one subcategory (`text-decoration-*` all
/// map to `TextDecoration`).
pub fn subcategory_for(category: Category) -> Option<&'static str> {
    use Category as C;

    let name = match category {
        C::Padding => "Padding",
        C::Margin => "Margin",
        C::Gap => "Gap",
        C::SpaceBetween => "Space",

        C::Width => "Width",
        C::MinWidth => "MinWidth",
        C::MaxWidth => "MaxWidth",
        C::Height => "Height",
        C::MinHeight => "MinHeight",
        C::MaxHeight => "MaxHeight",
        C::Size => "Size",

        C::FontSize => "FontSize",
        C::FontWeight => "FontWeight",
        C::FontFamily => "FontFamily",
        C::FontStyle => "FontStyle",
        C::LineHeight => "LineHeight",
        C::TextAlign => "TextAlign",
        C::TextTransform => "TextTransform",
        C::TextDecoration | C::TextDecorationColor | C::TextDecorationStyle => "TextDecoration",

        C::AlignItems => "AlignItems",
        C::JustifyContent => "JustifyContent",
        C::AlignContent => "AlignContent",
        C::AlignSelf => "AlignSelf",

        C::BoxShadow => "Shadow",
        C::Opacity => "Opacity",

        _ => return None,
    };
    Some(name)
}

impl GroupingConfig {
    /// The built-in grouping for Tailwind utilities.
    pub fn tailwind() -> Self {
        use Category as C;

        let groups: Vec<(&str, GroupEntry)> = vec![
            (
                "Spacing",
                GroupEntry::nested(
                    &["Padding", "Margin", "Gap", "Space"],
                    &[C::Padding, C::Margin, C::Gap, C::SpaceBetween],
                ),
            ),
            ("Layout", GroupEntry::flat(&[C::Display])),
            (
                "Sizing",
                GroupEntry::nested(
                    &[
                        "Width",
                        "MinWidth",
                        "MaxWidth",
                        "Height",
                        "MinHeight",
                        "MaxHeight",
                        "Size",
                    ],
                    &[
                        C::Width,
                        C::MinWidth,
                        C::MaxWidth,
                        C::Height,
                        C::MinHeight,
                        C::MaxHeight,
                        C::Size,
                    ],
                ),
            ),
            ("Background", GroupEntry::flat(&[C::BackgroundColor])),
            ("Text", GroupEntry::flat(&[C::TextColor])),
            (
                "Border",
                GroupEntry::flat(
                    &[C::BorderRadius, C::BorderWidth, C::BorderColor, C::BorderStyle],
                ),
            ),
            (
                "Flex",
                GroupEntry::nested(
                    &["AlignItems", "JustifyContent", "AlignContent", "AlignSelf"],
                    &[
                        C::FlexDirection,
                        C::FlexWrap,
                        C::FlexGrowShrink,
                        C::FlexBasis,
                        C::AlignItems,
                        C::AlignContent,
                        C::AlignSelf,
                        C::JustifyContent,
                    ],
                ),
            ),
            (
                "Grid",
                GroupEntry::flat(
                    &[
                        C::GridTemplateColumns,
                        C::GridTemplateRows,
                        C::GridColumn,
                        C::GridRow,
                        C::GridFlow,
                        C::GridAutoColumns,
                        C::GridAutoRows,
                    ],
                ),
            ),
            (
                "Typography",
                GroupEntry::nested(
                    &[
                        "FontSize",
                        "FontWeight",
                        "FontFamily",
                        "FontStyle",
                        "LineHeight",
                        "TextAlign",
                        "TextTransform",
                        "TextDecoration",
                    ],
                    &[
                        C::FontFamily,
                        C::FontSize,
                        C::FontWeight,
                        C::FontStyle,
                        C::LineHeight,
                        C::TextAlign,
                        C::TextTransform,
                        C::TextDecoration,
                        C::TextDecorationColor,
                        C::TextDecorationStyle,
                    ],
                ),
            ),
            (
                "Effects",
                GroupEntry::nested(&["Shadow", "Opacity"], &[C::BoxShadow, C::Opacity]),
            ),
            ("Position", GroupEntry::flat(&[C::Position, C::ZIndex])),
            ("Overflow", GroupEntry::flat(&[C::Overflow])),
            (
                "Transitions",
                GroupEntry::flat(
                    &[C::Transition, C::Duration, C::Ease, C::Delay, C::Animation],
                ),
            ),
            (
                "Transforms",
                GroupEntry::flat(&[C::Scale, C::Rotate, C::Translate, C::Skew]),
            ),
        ];

        GroupingConfig {
            enabled: true,
            structure: groups
                .into_iter()
                .map(|(name, entry)| (name.to_string(), entry))
                .collect(),
        }
    }

    /// Looks up a top-level group by name.
    pub fn group(&self, name: &str) -> Option<&GroupEntry> {
        self.structure
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, entry)| entry)
    }

    /// Top-level group names in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.structure.iter().map(|(name, _)| name.as_str())
    }

    /// Decides where constants of `category` are emitted.
    ///
    /// The first group (in declaration order) listing the category wins.
    /// Unlisted categories go to [`OTHER_GROUP`] without a subcategory.
    ///
    /// ```
    /// use twconst_classify::{Category, GroupingConfig};
    ///
    /// let config = GroupingConfig::tailwind();
    /// let placement = config.route(Category::MinWidth);
    /// assert_eq!(placement.top_level, "Sizing");
    /// assert_eq!(placement.sub_category.as_deref(), Some("MinWidth"));
    ///
    /// assert_eq!(config.route(Category::Cursor).top_level, "Other");
    /// ```
    pub fn route(&self, category: Category) -> Placement {
        self.structure
            .iter()
            .find(|(_, entry)| entry.contains(category))
            .map(|(name, entry)| Placement {
                top_level: name.clone(),
                sub_category: entry
                    .subcategories
                    .as_ref()
                    .and_then(|_| subcategory_for(category))
                    .map(str::to_string),
            })
            .unwrap_or_else(Placement::other)
    }

    /// Checks the configuration against the fixed category set.
    ///
    /// # Errors
    ///
    /// Fails on a repeated group name, an unknown category key, or a
    /// category listed under two groups.
    pub fn validate(&self) -> Result<(), GroupingError> {
        let mut owners: HashMap<Category, &str> = HashMap::new();
        let mut seen_groups: Vec<&str> = Vec::with_capacity(self.structure.len());

        for (group, entry) in &self.structure {
            if seen_groups.contains(&group.as_str()) {
                return Err(GroupingError::DuplicateGroup(group.clone()));
            }
            seen_groups.push(group.as_str());

            for key in &entry.categories {
                let category: Category =
                    key.parse().map_err(|_| GroupingError::UnknownCategory {
                        group: group.clone(),
                        category: key.clone(),
                    })?;
                if let Some(first) = owners.insert(category, group.as_str()) {
                    if first != group.as_str() {
                        return Err(GroupingError::DuplicateCategory {
                            category: key.clone(),
                            first: first.to_string(),
                            second: group.clone(),
                        });
                    }
                }
            }
        }
        tracing::debug!(groups = self.structure.len(), "grouping config validated");
        Ok(())
    }
}
