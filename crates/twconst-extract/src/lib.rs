//! # twconst-extract - From Tailwind sources to utility class names
//!
//! This crate covers the two steps before classification:
//!
//! - [`TailwindBuild`] runs the Tailwind CLI (through `npx`) to compile a
//!   configuration into CSS, with an optional timeout.
//! - [`extract_class_names`] walks the compiled stylesheet and returns the
//!   distinct utility class names found in its selectors.
//!
//! [`CssSource`] ties the two together: CSS either comes from a build or
//! from a file already on disk.
//!
//! ```no_run
//! use twconst_extract::{load_css, extract_class_names, CssSource, TailwindBuild};
//!
//! let build = TailwindBuild::new("4.1.18", "src/input.css", "tailwind.config.js", "out.css");
//! let css = load_css(&CssSource::Build(build))?;
//! let extracted = extract_class_names(&css);
//! println!("{} utilities", extracted.len());
//! # Ok::<(), twconst_extract::ExtractError>(())
//! ```

mod build;
mod css;
mod error;
mod version;

use std::path::PathBuf;

pub use build::{run_shell, TailwindBuild};
pub use css::{extract_class_names, is_utility_class, ExtractedClasses};
pub use error::{BuildError, ExtractError};
pub use version::detect_tailwind_version;

/// Where the stylesheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssSource {
    /// Compile it with the Tailwind CLI.
    Build(TailwindBuild),
    /// Read pre-built CSS from disk.
    File(PathBuf),
}

/// Produces the CSS text for `source`.
pub fn load_css(source: &CssSource) -> Result<String, ExtractError> {
    match source {
        CssSource::Build(build) => Ok(build.run()?),
        CssSource::File(path) => {
            tracing::info!(path = %path.display(), "reading pre-built CSS");
            std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
                path: path.clone(),
                source,
            })
        }
    }
}
