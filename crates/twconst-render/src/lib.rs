//! # twconst-render - Java source for utility-class constants
//!
//! Renders the output of `twconst-classify` as a Java class through a
//! MiniJinja template.
//!
//! - [`JavaRenderer::render_grouped`]: nested classes per group and subgroup
//!   (`TW.Spacing.Padding.P_4`).
//! - [`JavaRenderer::render_flat`]: one section per category, all constants
//!   on the outer class (`TW.P_4`).
//!
//! ```rust
//! use twconst_classify::{assemble, GroupingConfig, UtilityManifest};
//! use twconst_render::{JavaOptions, JavaRenderer};
//!
//! let manifest = UtilityManifest::from_class_names("4.1.18", ["flex", "p-4"]);
//! let grouped = assemble(&manifest.utilities, &GroupingConfig::tailwind());
//!
//! let renderer = JavaRenderer::new().unwrap();
//! let java = renderer
//!     .render_grouped(&grouped, &JavaOptions::default(), &manifest.metadata)
//!     .unwrap();
//! assert!(java.contains(r#"public static final String P_4 = "p-4";"#));
//! ```
//!
//! The template can be replaced by pointing [`JavaRenderer::with_template_dir`]
//! at a directory holding a `class.java.j2`.

mod engine;
mod error;
mod java;

pub use engine::{java_string, javadoc, register_filters, MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use java::{breakpoint_method, default_breakpoints, JavaOptions, JavaRenderer, CLASS_TEMPLATE};
