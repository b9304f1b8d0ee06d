use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

/// Generate Java constants for Tailwind CSS utility classes.
#[derive(Debug, Parser)]
#[command(name = "twconst", version, about)]
pub struct Cli {
    /// Configuration file (.json, .yaml or .yml)
    #[arg(long, global = true, default_value = "generator.config.json")]
    pub config: PathBuf,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the CSS, extract and categorize its utility classes
    Extract(ExtractArgs),
    /// Generate the Java class from a categorized-utilities file
    Generate(GenerateArgs),
    /// Extract then generate
    Run(RunArgs),
    /// Print how class names are classified, as JSON
    Classify(ClassifyArgs),
}

#[derive(Debug, Clone, Args)]
pub struct OverrideArgs {
    /// Java package name
    #[arg(long, global = true)]
    pub package: Option<String>,

    /// Tailwind CSS version, or "auto"
    #[arg(long, global = true)]
    pub tailwind_version: Option<String>,

    /// Version for the @since tag
    #[arg(long, global = true)]
    pub since: Option<String>,

    /// Output directory
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Java class name
    #[arg(long, global = true)]
    pub class_name: Option<String>,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Overrides {
            package: args.package,
            tailwind_version: args.tailwind_version,
            since: args.since,
            output: args.output,
            class_name: args.class_name,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Read pre-built CSS instead of running the Tailwind build
    #[arg(long)]
    pub css_file: Option<PathBuf>,

    /// Where to write the categorized utilities
    #[arg(long, default_value = "categorized-utilities.json")]
    pub manifest: PathBuf,

    /// Kill the Tailwind build after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Categorized utilities to generate from
    #[arg(long, default_value = "categorized-utilities.json")]
    pub manifest: PathBuf,

    /// Directory holding a custom class.java.j2 template
    #[arg(long)]
    pub template_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Directory holding a custom class.java.j2 template
    #[arg(long)]
    pub template_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Class names to classify (put negative ones after `--`)
    #[arg(required = true)]
    pub class_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "twconst",
            "-vv",
            "run",
            "--css-file",
            "built.css",
            "--package",
            "org.acme",
            "--class-name",
            "Tw",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("generator.config.json"));
        assert_eq!(cli.overrides.package.as_deref(), Some("org.acme"));
        assert_eq!(cli.overrides.class_name.as_deref(), Some("Tw"));
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.extract.css_file, Some(PathBuf::from("built.css")));
                assert_eq!(
                    args.extract.manifest,
                    PathBuf::from("categorized-utilities.json")
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn classify_requires_names() {
        assert!(Cli::try_parse_from(["twconst", "classify"]).is_err());
        let cli = Cli::try_parse_from(["twconst", "classify", "--", "p-4", "-mt-2"]).unwrap();
        match cli.command {
            Command::Classify(args) => assert_eq!(args.class_names, ["p-4", "-mt-2"]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
