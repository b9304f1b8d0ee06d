//! Duplicate constant names within one emission scope.
//!
//! Naming is not injective: `w-1.5` and `w-1/5` both become `W_1_5`. The
//! generated source would not compile with both in one class, so callers
//! report what [`find_collisions`] returns. Nothing is renamed here.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::assemble::{Constant, GroupedUtilities};
use crate::category::{emission_order, Category, CATEGORY_ORDER};
use crate::grammar::TargetGrammar;
use crate::manifest::CategorizedUtilities;

/// Two or more class names that produce the same constant in one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collision {
    /// Scope path, e.g. `Sizing.Width` or `Layout`. Empty for the flat
    /// layout.
    pub scope: String,
    pub constant_name: String,
    /// The colliding class names, in emission order.
    pub class_names: Vec<String>,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scope.is_empty() {
            write!(f, "{}.", self.scope)?;
        }
        write!(
            f,
            "{} is produced by {}",
            self.constant_name,
            self.class_names.join(", ")
        )
    }
}

fn scan<'a, I>(scope: &str, constants: I, out: &mut Vec<Collision>)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, class_name) in constants {
        let classes = by_name.entry(name).or_default();
        if !classes.contains(&class_name) {
            classes.push(class_name);
        }
    }
    out.extend(
        by_name
            .into_iter()
            .filter(|(_, classes)| classes.len() > 1)
            .map(|(name, classes)| Collision {
                scope: scope.to_string(),
                constant_name: name.to_string(),
                class_names: classes.into_iter().map(str::to_string).collect(),
            }),
    );
}

fn pairs(constants: &[Constant]) -> impl Iterator<Item = (&str, &str)> {
    constants
        .iter()
        .map(|c| (c.name.as_str(), c.class_name.as_str()))
}

/// Finds constant-name collisions in the grouped hierarchy.
///
/// The scopes checked are each top-level group's direct constants and
/// each subgroup.
pub fn find_collisions(grouped: &GroupedUtilities) -> Vec<Collision> {
    let mut out = Vec::new();
    for group in &grouped.groups {
        for (sub, constants) in group.scopes() {
            let scope = match sub {
                Some(sub) => format!("{}.{}", group.name, sub),
                None => group.name.clone(),
            };
            scan(&scope, pairs(constants), &mut out);
        }
    }
    out
}

/// Finds collisions in the ungrouped layout, where every constant shares a
/// single scope and is named by the grammar's sanitizer.
pub fn find_flat_collisions(
    utilities: &CategorizedUtilities,
    grammar: &TargetGrammar,
) -> Vec<Collision> {
    let named: Vec<(String, &str)> = emission_order(utilities.categories(), CATEGORY_ORDER)
        .into_iter()
        .filter_map(|c: Category| utilities.get(c))
        .flatten()
        .map(|class| (grammar.sanitize(class), class.as_str()))
        .collect();

    let mut out = Vec::new();
    scan(
        "",
        named.iter().map(|(name, class)| (name.as_str(), *class)),
        &mut out,
    );
    out
}
