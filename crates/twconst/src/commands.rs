//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use twconst_classify::{
    assemble, categorize, find_collisions, find_flat_collisions, ClassifiedUtility, Classifier,
    Collision, GroupingConfig, TargetGrammar, UtilityManifest,
};
use twconst_extract::{extract_class_names, load_css, CssSource, TailwindBuild};
use twconst_render::JavaRenderer;

use crate::config::GeneratorConfig;

/// File the Tailwind build writes, next to the configuration.
const BUILD_OUTPUT: &str = "output.css";

/// Version recorded when it cannot be detected for pre-built CSS.
const UNKNOWN_VERSION: &str = "unknown";

/// Options for [`extract`].
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub css_file: Option<PathBuf>,
    pub manifest: PathBuf,
    pub timeout: Option<Duration>,
}

/// Builds (or reads) the CSS, categorizes its utility classes and writes
/// the manifest.
pub fn extract(config: &mut GeneratorConfig, options: &ExtractOptions) -> Result<UtilityManifest> {
    let css_file = options
        .css_file
        .clone()
        .or_else(|| config.tailwind.css_file.as_ref().map(|f| config.resolve(f)));

    let source = match css_file {
        Some(path) => {
            if let Err(err) = config.resolve_version() {
                tracing::warn!(error = %err, "recording Tailwind version as unknown");
                config.tailwind.version = UNKNOWN_VERSION.to_string();
            }
            CssSource::File(path)
        }
        None => {
            config
                .resolve_version()
                .context("the Tailwind build needs a version")?;
            let mut build = TailwindBuild::new(
                config.tailwind.version.clone(),
                config.resolve(&config.tailwind.input_css),
                config.resolve(&config.tailwind.config_file),
                config.resolve(BUILD_OUTPUT),
            );
            if let Some(timeout) = options.timeout {
                build = build.with_timeout(timeout);
            }
            tracing::info!(command = %build.command(), "running Tailwind CLI");
            CssSource::Build(build)
        }
    };

    let css = load_css(&source).context("failed to obtain CSS")?;
    tracing::info!(kilobytes = css.len() / 1024, "loaded CSS");

    let extracted = extract_class_names(&css);
    tracing::info!(classes = extracted.len(), "extracted utility classes");

    let manifest = UtilityManifest::from_class_names(&config.tailwind.version, &extracted.classes);
    log_statistics(&manifest);

    write_manifest(&options.manifest, &manifest)?;
    Ok(manifest)
}

/// Reads the manifest and writes the Java source file. Returns its path.
pub fn generate(
    config: &GeneratorConfig,
    manifest_path: &Path,
    template_dir: Option<&Path>,
) -> Result<PathBuf> {
    let manifest = read_manifest(manifest_path)?;
    let renderer = match template_dir {
        Some(dir) => JavaRenderer::with_template_dir(dir),
        None => JavaRenderer::new(),
    }
    .context("failed to set up the Java renderer")?;

    let options = config.java_options();
    let java = match config.effective_grouping() {
        Some(grouping) => {
            let grouped = assemble(&manifest.utilities, &grouping);
            warn_collisions(&find_collisions(&grouped));
            renderer.render_grouped(&grouped, &options, &manifest.metadata)?
        }
        None => {
            let collisions = find_flat_collisions(&manifest.utilities, &TargetGrammar::JAVA);
            warn_collisions(&collisions);
            renderer.render_flat(&manifest.utilities, &options, &manifest.metadata)?
        }
    };

    let path = config.java_output_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &java).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        kilobytes = java.len() / 1024,
        lines = java.lines().count(),
        "wrote Java class"
    );
    Ok(path)
}

/// Classifies `class_names` with the configured grouping.
pub fn classify(config: &GeneratorConfig, class_names: &[String]) -> Vec<ClassifiedUtility> {
    let grouping = config
        .effective_grouping()
        .unwrap_or_else(GroupingConfig::tailwind);
    let classifier = Classifier::new(&grouping);
    class_names
        .iter()
        .map(|name| classifier.classify(categorize(name), name))
        .collect()
}

fn warn_collisions(collisions: &[Collision]) {
    for collision in collisions {
        tracing::warn!(
            scope = %collision.scope,
            constant = %collision.constant_name,
            classes = ?collision.class_names,
            "identifier collision"
        );
    }
}

fn log_statistics(manifest: &UtilityManifest) {
    let utilities = &manifest.utilities;
    tracing::info!(
        version = %manifest.metadata.tailwind_version,
        total = utilities.total(),
        categories = utilities.len(),
        "categorized utilities"
    );

    let mut counts: Vec<_> = utilities.iter().map(|(c, names)| (c, names.len())).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (category, count) in counts {
        tracing::debug!(%category, count, "category size");
    }
}

fn write_manifest(path: &Path, manifest: &UtilityManifest) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote categorized utilities");
    Ok(())
}

fn read_manifest(path: &Path) -> Result<UtilityManifest> {
    let text = fs::read_to_string(path).with_context(|| {
        format!(
            "failed to read {} (run `twconst extract` first)",
            path.display()
        )
    })?;
    let manifest: UtilityManifest = serde_json::from_str(&text)
        .with_context(|| format!("invalid categorized utilities in {}", path.display()))?;
    tracing::info!(
        total = manifest.utilities.total(),
        categories = manifest.utilities.len(),
        "read categorized utilities"
    );
    Ok(manifest)
}

