//! Assembly of classified constants into the emitted hierarchy.
//!
//! [`Classifier`] combines a [`Namer`] with a [`GroupingConfig`]. It
//! classifies single class names ([`Classifier::classify`]) and whole
//! category maps ([`Classifier::assemble`]) into a [`GroupedUtilities`]
//! tree: top-level groups in configuration order, `Other` last, subgroups
//! sorted by name, constants in canonical class-name order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::grouping::{GroupingConfig, OTHER_GROUP};
use crate::manifest::CategorizedUtilities;
use crate::namer::Namer;
use crate::ordering::compare_class_names;

/// One class name with its placement and constant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedUtility {
    pub category: Category,
    pub top_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub constant_name: String,
    pub class_name: String,
}

/// A named constant ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constant {
    pub name: String,
    pub class_name: String,
    pub category: Category,
}

/// A subcategory scope inside a top-level group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubGroup {
    pub name: String,
    pub constants: Vec<Constant>,
}

/// A top-level group: its direct constants followed by its subgroups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopLevelGroup {
    pub name: String,
    pub constants: Vec<Constant>,
    pub subgroups: Vec<SubGroup>,
}

impl TopLevelGroup {
    /// Every emission scope of the group: the group itself (`None`) and one
    /// per subgroup.
    pub fn scopes(&self) -> impl Iterator<Item = (Option<&str>, &[Constant])> {
        std::iter::once((None, self.constants.as_slice())).chain(
            self.subgroups
                .iter()
                .map(|s| (Some(s.name.as_str()), s.constants.as_slice())),
        )
    }

    /// Number of constants in the group, subgroups included.
    pub fn len(&self) -> usize {
        self.constants.len() + self.subgroups.iter().map(|s| s.constants.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The assembled hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedUtilities {
    pub groups: Vec<TopLevelGroup>,
}

impl GroupedUtilities {
    pub fn group(&self, name: &str) -> Option<&TopLevelGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Total number of constants.
    pub fn total(&self) -> usize {
        self.groups.iter().map(TopLevelGroup::len).sum()
    }
}

/// Classification front end: naming plus placement.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    namer: Namer,
    config: &'a GroupingConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a GroupingConfig) -> Self {
        Classifier {
            namer: Namer::default(),
            config,
        }
    }

    pub fn with_namer(mut self, namer: Namer) -> Self {
        self.namer = namer;
        self
    }

    pub fn namer(&self) -> &Namer {
        &self.namer
    }

    /// Classifies one class name already routed to `category`.
    pub fn classify(&self, category: Category, class_name: &str) -> ClassifiedUtility {
        let class_name = crate::grammar::normalize(class_name);
        let placement = self.config.route(category);
        ClassifiedUtility {
            category,
            top_level: placement.top_level,
            sub_category: placement.sub_category,
            constant_name: self.namer.name(&class_name, category),
            class_name,
        }
    }

    /// Builds the grouped hierarchy for every class name in `utilities`.
    pub fn assemble(&self, utilities: &CategorizedUtilities) -> GroupedUtilities {
        let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();

        for (category, names) in utilities.iter() {
            for name in names {
                let utility = self.classify(category, name);
                let constant = Constant {
                    name: utility.constant_name,
                    class_name: utility.class_name,
                    category,
                };
                let bucket = buckets.entry(utility.top_level).or_default();
                match utility.sub_category {
                    Some(sub) => bucket.subgroups.entry(sub).or_default().push(constant),
                    None => bucket.constants.push(constant),
                }
            }
        }

        let mut order: Vec<&str> = self.config.group_names().collect();
        if !order.contains(&OTHER_GROUP) {
            order.push(OTHER_GROUP);
        }

        let mut groups = Vec::with_capacity(buckets.len());
        for name in order {
            let Some(bucket) = buckets.remove(name) else {
                continue;
            };
            let group = bucket.finish(name);
            if !group.is_empty() {
                groups.push(group);
            }
        }

        let assembled = GroupedUtilities { groups };
        tracing::debug!(
            groups = assembled.groups.len(),
            constants = assembled.total(),
            "assembled grouped utilities"
        );
        assembled
    }
}

#[derive(Default)]
struct Bucket {
    constants: Vec<Constant>,
    subgroups: BTreeMap<String, Vec<Constant>>,
}

impl Bucket {
    fn finish(self, name: &str) -> TopLevelGroup {
        TopLevelGroup {
            name: name.to_string(),
            constants: sorted(self.constants),
            subgroups: self
                .subgroups
                .into_iter()
                .map(|(name, constants)| SubGroup {
                    name,
                    constants: sorted(constants),
                })
                .filter(|s| !s.constants.is_empty())
                .collect(),
        }
    }
}

fn sorted(mut constants: Vec<Constant>) -> Vec<Constant> {
    constants.sort_by(|a, b| compare_class_names(&a.class_name, &b.class_name));
    constants
}

/// Classifies one class name with the default namer.
///
/// ```
/// use twconst_classify::{classify_utility, Category, GroupingConfig};
///
/// let config = GroupingConfig::tailwind();
/// let utility = classify_utility(Category::Padding, "pl-4", &config);
/// assert_eq!(utility.top_level, "Spacing");
/// assert_eq!(utility.sub_category.as_deref(), Some("Padding"));
/// assert_eq!(utility.constant_name, "LEFT_4");
/// ```
pub fn classify_utility(
    category: Category,
    class_name: &str,
    config: &GroupingConfig,
) -> ClassifiedUtility {
    Classifier::new(config).classify(category, class_name)
}

/// Assembles `utilities` with the default namer.
pub fn assemble(utilities: &CategorizedUtilities, config: &GroupingConfig) -> GroupedUtilities {
    Classifier::new(config).assemble(utilities)
}
