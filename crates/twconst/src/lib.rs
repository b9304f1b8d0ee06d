//! # twconst - Tailwind utility classes as Java constants
//!
//! The command-line front end over `twconst-extract`, `twconst-classify`
//! and `twconst-render`:
//!
//! ```text
//! twconst extract    # npx @tailwindcss/cli ... -> categorized-utilities.json
//! twconst generate   # categorized-utilities.json -> <output>/<package>/TW.java
//! twconst run        # both
//! twconst classify -- p-4 -mt-2 w-1/2
//! ```
//!
//! Settings come from `generator.config.json` (see [`GeneratorConfig`]),
//! with command-line overrides on top.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

use std::time::Duration;

use anyhow::{Context, Result};

pub use cli::{Cli, Command};
pub use commands::ExtractOptions;
pub use config::{ConfigError, GeneratorConfig, Overrides};

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = GeneratorConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    config.apply_overrides(&cli.overrides.into());

    match cli.command {
        Command::Extract(args) => {
            commands::extract(&mut config, &extract_options(&args))?;
        }
        Command::Generate(args) => {
            commands::generate(&config, &args.manifest, args.template_dir.as_deref())?;
        }
        Command::Run(args) => {
            let options = extract_options(&args.extract);
            commands::extract(&mut config, &options)?;
            commands::generate(&config, &options.manifest, args.template_dir.as_deref())?;
        }
        Command::Classify(args) => {
            let classified = commands::classify(&config, &args.class_names);
            println!("{}", serde_json::to_string_pretty(&classified)?);
        }
    }
    Ok(())
}

fn extract_options(args: &cli::ExtractArgs) -> ExtractOptions {
    ExtractOptions {
        css_file: args.css_file.clone(),
        manifest: args.manifest.clone(),
        timeout: args.timeout.map(Duration::from_secs),
    }
}
