use std::path::Path;

use serde_json::Value;

use crate::error::BuildError;

/// Packages whose declared version identifies the Tailwind release, in
/// lookup order.
const TAILWIND_PACKAGES: &[&str] = &["tailwindcss", "@tailwindcss/cli"];

/// Reads the Tailwind version declared in a `package.json`.
///
/// `dependencies` are consulted before `devDependencies`. A leading `^` or
/// `~` range marker is stripped.
pub fn detect_tailwind_version(package_json: &Path) -> Result<String, BuildError> {
    if !package_json.is_file() {
        return Err(BuildError::MissingPackageJson(package_json.to_path_buf()));
    }
    let text = std::fs::read_to_string(package_json)?;
    let manifest: Value = serde_json::from_str(&text)?;

    let version = TAILWIND_PACKAGES
        .iter()
        .find_map(|package| declared_version(&manifest, package))
        .ok_or_else(|| BuildError::VersionNotFound(package_json.to_path_buf()))?;

    tracing::debug!(version, path = %package_json.display(), "detected Tailwind version");
    Ok(version)
}

fn declared_version(manifest: &Value, package: &str) -> Option<String> {
    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|table| manifest.get(table)?.get(package)?.as_str())
        .map(|v| v.trim_start_matches(['^', '~']).to_string())
        .next()
}
