//! twconst-classify - Classification and naming engine for utility-class constants.
//!
//! Turns a flat set of utility class names (`pl-4`, `-mt-2`, `w-1/2`,
//! `bg-blue-500`) into named constants organised in a two-level hierarchy,
//! ready for a source-code renderer. The engine is pure: no I/O, no shared
//! state, and the output does not depend on input order.
//!
//! # Pipeline
//!
//! ```text
//! class names ──▶ categorize ──▶ Namer::name ──▶ GroupingConfig::route ──▶ assemble
//!                 (flat Category)  (identifier)    (group / subgroup)        (ordered tree)
//! ```
//!
//! Two classification layers are kept apart:
//!
//! - the flat [`Category`] picks the naming rule,
//! - the [`GroupingConfig`] only decides where the constant is emitted.
//!
//! # Quick Start
//!
//! ```rust
//! use twconst_classify::{assemble, categorize_all, GroupingConfig};
//!
//! let utilities = categorize_all(["pl-4", "-mt-2", "w-1/2", "text-2xl", "shadow"]);
//! let grouped = assemble(&utilities, &GroupingConfig::tailwind());
//!
//! let spacing = grouped.group("Spacing").unwrap();
//! let padding = &spacing.subgroups.iter().find(|s| s.name == "Padding").unwrap();
//! assert_eq!(padding.constants[0].name, "LEFT_4");
//!
//! let effects = grouped.group("Effects").unwrap();
//! assert_eq!(effects.subgroups[0].constants[0].name, "DEFAULT");
//! ```
//!
//! # Identifier Grammar
//!
//! Every constant matches `[A-Z][A-Z0-9_]*`. Names the generic sanitizer
//! produces never equal a reserved word; bespoke names such as `DEFAULT`
//! (for `shadow`) are kept as-is. See [`TargetGrammar`].

mod assemble;
mod category;
mod collision;
mod error;
mod grammar;
mod grouping;
mod manifest;
mod namer;
pub mod ordered_map;
mod ordering;
mod router;
mod value;

// Re-export public API
pub use assemble::{
    assemble, classify_utility, ClassifiedUtility, Classifier, Constant, GroupedUtilities,
    SubGroup, TopLevelGroup,
};
pub use category::{emission_order, Category, CATEGORY_ORDER};
pub use collision::{find_collisions, find_flat_collisions, Collision};
pub use error::{GroupingError, UnknownCategory};
pub use grammar::{normalize, sanitize, upper_snake, TargetGrammar, JAVA_RESERVED_WORDS};
pub use grouping::{subcategory_for, GroupEntry, GroupingConfig, Placement, OTHER_GROUP};
pub use manifest::{CategorizedUtilities, Metadata, UtilityManifest};
pub use namer::{Namer, FONT_SIZE_NAMES};
pub use ordering::{compare_class_names, sort_class_names};
pub use router::{categorize, categorize_all, Matcher, Rule, RULES};
pub use value::{extract_value, VALUE_KEYWORDS};
