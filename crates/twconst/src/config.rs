//! Generator configuration.
//!
//! Read from `generator.config.json` (or a `.yaml`/`.yml` file) with
//! camelCase keys. Every section is optional; missing keys take the
//! defaults below. Relative paths resolve against the directory holding
//! the configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use twconst_classify::{ordered_map, GroupingConfig, GroupingError};
use twconst_extract::{detect_tailwind_version, BuildError};
use twconst_render::{default_breakpoints, JavaOptions};

/// Version value that asks for detection from `package.json`.
pub const AUTO_VERSION: &str = "auto";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unsupported config format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("invalid grouping: {0}")]
    Grouping(#[from] GroupingError),
    #[error("cannot detect Tailwind version: {0}")]
    Version(#[from] BuildError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TailwindConfig {
    /// A release such as `4.1.18`, or `auto`.
    pub version: String,
    pub config_file: PathBuf,
    pub input_css: PathBuf,
    /// Pre-built CSS; when set, the Tailwind build is skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_file: Option<PathBuf>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            version: AUTO_VERSION.to_string(),
            config_file: PathBuf::from("tailwind.config.js"),
            input_css: PathBuf::from("input.css"),
            css_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaConfig {
    pub package: String,
    pub class_name: String,
    pub since_version: String,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            package: "com.vaadin.flow.component.tailwind".to_string(),
            class_name: "TW".to_string(),
            since_version: "25.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub create_package_structure: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            create_package_structure: true,
        }
    }
}

/// The full configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub tailwind: TailwindConfig,
    pub java: JavaConfig,
    pub output: OutputConfig,
    #[serde(with = "ordered_map")]
    pub breakpoints: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<GroupingConfig>,
    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tailwind: TailwindConfig::default(),
            java: JavaConfig::default(),
            output: OutputConfig::default(),
            breakpoints: default_breakpoints(),
            grouping: None,
            base_dir: PathBuf::from("."),
        }
    }
}

/// Values given on the command line, applied over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub package: Option<String>,
    pub tailwind_version: Option<String>,
    pub since: Option<String>,
    pub output: Option<PathBuf>,
    pub class_name: Option<String>,
}

impl GeneratorConfig {
    /// Loads `path`, or the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file found, using defaults");
            return Ok(Self {
                base_dir,
                ..Self::default()
            });
        }

        tracing::info!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(path, &text)?;
        config.base_dir = base_dir;
        config.validate()?;
        Ok(config)
    }

    /// Parses `text` in the format implied by `path`'s extension.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => serde_json::from_str(text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(grouping) = &self.grouping {
            grouping.validate()?;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(package) = &overrides.package {
            tracing::info!(%package, "overriding package");
            self.java.package = package.clone();
        }
        if let Some(version) = &overrides.tailwind_version {
            tracing::info!(%version, "overriding Tailwind version");
            self.tailwind.version = version.clone();
        }
        if let Some(since) = &overrides.since {
            tracing::info!(%since, "overriding since version");
            self.java.since_version = since.clone();
        }
        if let Some(output) = &overrides.output {
            tracing::info!(output = %output.display(), "overriding output directory");
            self.output.directory = output.clone();
        }
        if let Some(class_name) = &overrides.class_name {
            tracing::info!(%class_name, "overriding class name");
            self.java.class_name = class_name.clone();
        }
    }

    /// Replaces an `auto` version with the one declared in `package.json`
    /// next to the configuration.
    pub fn resolve_version(&mut self) -> Result<(), ConfigError> {
        if self.tailwind.version == AUTO_VERSION {
            let version = detect_tailwind_version(&self.resolve("package.json"))?;
            tracing::info!(%version, "auto-detected Tailwind version");
            self.tailwind.version = version;
        }
        Ok(())
    }

    /// `path` relative to [`base_dir`](Self::base_dir), unless absolute.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    /// The grouping in effect, `None` for the flat layout.
    ///
    /// An absent `grouping` section means the built-in grouping.
    pub fn effective_grouping(&self) -> Option<GroupingConfig> {
        match &self.grouping {
            Some(grouping) if !grouping.enabled => None,
            Some(grouping) => Some(grouping.clone()),
            None => Some(GroupingConfig::tailwind()),
        }
    }

    pub fn java_options(&self) -> JavaOptions {
        JavaOptions {
            package: self.java.package.clone(),
            class_name: self.java.class_name.clone(),
            since_version: Some(self.java.since_version.clone()).filter(|s| !s.is_empty()),
            breakpoints: self.breakpoints.clone(),
        }
    }

    /// Where the generated source file goes.
    pub fn java_output_path(&self) -> PathBuf {
        let relative = self
            .java_options()
            .relative_path(self.output.create_package_structure);
        self.resolve(&self.output.directory).join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.tailwind.version, "auto");
        assert_eq!(config.java.class_name, "TW");
        assert_eq!(config.breakpoints[4], ("2xl".to_string(), "1536px".to_string()));
        assert!(config.effective_grouping().is_some());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "java": { "package": "com.example" } }"#;
        let config = GeneratorConfig::parse(Path::new("c.json"), json).unwrap();
        assert_eq!(config.java.package, "com.example");
        assert_eq!(config.java.class_name, "TW");
        assert_eq!(config.tailwind.input_css, PathBuf::from("input.css"));
        assert_eq!(config.breakpoints.len(), 5);
    }

    #[test]
    fn camel_case_keys() {
        let json = r#"{
            "tailwind": { "version": "4.1.18", "configFile": "tw.js", "inputCss": "in.css", "cssFile": "built.css" },
            "java": { "className": "Tailwind", "sinceVersion": "" },
            "output": { "directory": "gen", "createPackageStructure": false },
            "breakpoints": { "tablet": "768px", "desktop": "1280px" }
        }"#;
        let config = GeneratorConfig::parse(Path::new("c.json"), json).unwrap();
        assert_eq!(config.tailwind.css_file, Some(PathBuf::from("built.css")));
        assert_eq!(config.java.class_name, "Tailwind");
        assert!(!config.output.create_package_structure);
        assert_eq!(
            config.breakpoints,
            vec![
                ("tablet".to_string(), "768px".to_string()),
                ("desktop".to_string(), "1280px".to_string())
            ]
        );
        assert_eq!(config.java_options().since_version, None);
    }

    #[test]
    fn yaml_config() {
        let yaml = "java:\n  className: Tw\ngrouping:\n  enabled: false\n  structure: {}\n";
        let config = GeneratorConfig::parse(Path::new("c.yml"), yaml).unwrap();
        assert_eq!(config.java.class_name, "Tw");
        assert!(config.effective_grouping().is_none());
    }

    #[test]
    fn unknown_extension() {
        assert!(matches!(
            GeneratorConfig::parse(Path::new("c.toml"), ""),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn invalid_grouping_is_rejected() {
        let json = r#"{ "grouping": { "structure": {
            "A": { "categories": ["padding"] },
            "B": { "categories": ["padding"] }
        } } }"#;
        let config = GeneratorConfig::parse(Path::new("c.json"), json).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Grouping(_))));
    }

    #[test]
    fn overrides_apply() {
        let mut config = GeneratorConfig::default();
        config.apply_overrides(&Overrides {
            package: Some("org.acme".into()),
            tailwind_version: Some("4.0.0".into()),
            since: Some("1.2".into()),
            output: Some(PathBuf::from("out")),
            class_name: Some("Css".into()),
        });
        assert_eq!(config.java.package, "org.acme");
        assert_eq!(config.tailwind.version, "4.0.0");
        assert_eq!(config.java.since_version, "1.2");
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.java.class_name, "Css");
    }

    #[test]
    fn explicit_version_is_not_detected() {
        let mut config = GeneratorConfig {
            base_dir: PathBuf::from("/nonexistent"),
            ..GeneratorConfig::default()
        };
        config.tailwind.version = "4.1.18".into();
        assert!(config.resolve_version().is_ok());
        assert_eq!(config.tailwind.version, "4.1.18");
    }

    #[test]
    fn output_path() {
        let config = GeneratorConfig {
            base_dir: PathBuf::from("proj"),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.java_output_path(),
            PathBuf::from("proj/output/com/vaadin/flow/component/tailwind/TW.java")
        );
    }
}
