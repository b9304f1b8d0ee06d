//! The categorized interchange document.
//!
//! Serialized as
//!
//! ```json
//! {
//!   "metadata": { "tailwindVersion": "4.1.18", "totalUtilities": 2 },
//!   "utilities": { "padding": ["p-4"], "width": ["w-1/2"] }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;
use crate::grammar::normalize;
use crate::ordering::sort_class_names;
use crate::router::categorize_all;

/// Class names per flat category.
///
/// Categories iterate in declaration order. Each list is escape-stripped,
/// free of duplicates and sorted by [`compare_class_names`], however the
/// value was built. Empty categories are never stored.
///
/// [`compare_class_names`]: crate::compare_class_names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorizedUtilities(BTreeMap<Category, Vec<String>>);

fn prepare(names: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().map(|n| normalize(&n)).collect();
    names.sort();
    names.dedup();
    sort_class_names(&mut names);
    names
}

impl<'de> Deserialize<'de> for CategorizedUtilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<Category, Vec<String>>::deserialize(deserializer)?;
        let mut out = CategorizedUtilities::default();
        for (category, names) in raw {
            out.insert(category, names);
        }
        Ok(out)
    }
}

impl CategorizedUtilities {
    /// Stores `names` under `category`, replacing any previous list. The
    /// names are normalized, deduplicated and sorted. An empty list removes
    /// the category.
    pub fn insert(&mut self, category: Category, names: Vec<String>) {
        let names = prepare(names);
        if names.is_empty() {
            self.0.remove(&category);
        } else {
            self.0.insert(category, names);
        }
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.0.get(&category).map(Vec::as_slice)
    }

    /// Number of non-empty categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of class names across all categories.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.0.iter().map(|(c, names)| (*c, names.as_slice()))
    }
}

impl<'a> IntoIterator for &'a CategorizedUtilities {
    type Item = (&'a Category, &'a Vec<String>);
    type IntoIter = std::collections::btree_map::Iter<'a, Category, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Provenance of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub tailwind_version: String,
    pub total_utilities: usize,
}

/// The full interchange document written by extraction and read by
/// generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityManifest {
    pub metadata: Metadata,
    pub utilities: CategorizedUtilities,
}

impl UtilityManifest {
    /// Categorizes `class_names` and records the number of distinct names.
    pub fn from_class_names<I, S>(tailwind_version: impl Into<String>, class_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let utilities = categorize_all(class_names);
        UtilityManifest {
            metadata: Metadata {
                tailwind_version: tailwind_version.into(),
                total_utilities: utilities.total(),
            },
            utilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_drops_empty_lists() {
        let mut utilities = CategorizedUtilities::default();
        utilities.insert(Category::Padding, vec!["p-4".into()]);
        utilities.insert(Category::Margin, vec![]);
        assert_eq!(utilities.len(), 1);

        utilities.insert(Category::Padding, vec![]);
        assert!(utilities.is_empty());
    }

    #[test]
    fn manifest_json_shape() {
        let manifest = UtilityManifest::from_class_names("4.1.18", ["w-1/2", "p-4", "p-4"]);
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "metadata": { "tailwindVersion": "4.1.18", "totalUtilities": 2 },
                "utilities": { "padding": ["p-4"], "width": ["w-1/2"] }
            })
        );
    }

    #[test]
    fn manifest_reads_back() {
        let text = r#"{
            "metadata": { "tailwindVersion": "4.0.0", "totalUtilities": 3 },
            "utilities": { "display": ["flex"], "other": ["sr-only", "truncate"] }
        }"#;
        let manifest: UtilityManifest = serde_json::from_str(text).unwrap();
        assert_eq!(manifest.metadata.total_utilities, 3);
        assert_eq!(
            manifest.utilities.get(Category::Other).unwrap(),
            ["sr-only", "truncate"]
        );
    }

    #[test]
    fn insert_sorts_and_strips_escapes() {
        let mut utilities = CategorizedUtilities::default();
        utilities.insert(
            Category::Width,
            vec!["w-64".into(), "w-1\\/2".into(), "w-8".into(), "w-1/2".into()],
        );
        assert_eq!(utilities.get(Category::Width).unwrap(), ["w-1/2", "w-8", "w-64"]);
    }

    #[test]
    fn hand_edited_utilities_are_normalized_on_read() {
        let text = r#"{
            "width": ["w-64", "w-8", "w-full", "w-1\\/2"],
            "padding": ["p-4", "p-4"],
            "margin": []
        }"#;
        let utilities: CategorizedUtilities = serde_json::from_str(text).unwrap();
        assert_eq!(
            utilities.get(Category::Width).unwrap(),
            ["w-full", "w-1/2", "w-8", "w-64"]
        );
        assert_eq!(utilities.get(Category::Padding).unwrap(), ["p-4"]);
        assert_eq!(utilities.get(Category::Margin), None);
        assert_eq!(utilities.total(), 5);
    }

    #[test]
    fn unknown_category_key_is_an_error() {
        let text = r#"{"metadata":{"tailwindVersion":"4","totalUtilities":0},"utilities":{"nope":[]}}"#;
        assert!(serde_json::from_str::<UtilityManifest>(text).is_err());
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let manifest = UtilityManifest::from_class_names("4", ["cursor-pointer", "flex", "p-1"]);
        let order: Vec<Category> = manifest.utilities.categories().collect();
        assert_eq!(
            order,
            [Category::Display, Category::Padding, Category::Cursor]
        );
    }
}
