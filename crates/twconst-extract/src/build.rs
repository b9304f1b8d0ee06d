//! Running the Tailwind CLI to produce compiled CSS.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::error::BuildError;

/// Execute a shell command and return its stdout.
///
/// The command runs through `sh -c` (or `cmd /C` on Windows) with stderr
/// inherited. When `timeout` is set and exceeded, the process is killed.
pub fn run_shell(command_str: &str, timeout: Option<Duration>) -> Result<String, BuildError> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_str);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    tracing::debug!(command = command_str, "spawning");
    let mut child = cmd.spawn()?;

    // Drain stdout concurrently so a chatty build cannot fill the pipe and stall.
    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        })
    });

    let status = match timeout {
        Some(duration) => match child.wait_timeout(duration)? {
            Some(status) => status,
            None => {
                child.kill()?;
                let _ = child.wait();
                return Err(BuildError::Timeout(command_str.to_string(), duration));
            }
        },
        None => child.wait()?,
    };

    if !status.success() {
        return Err(BuildError::CommandFailed(command_str.to_string(), status));
    }

    let bytes = match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| std::io::Error::other("stdout reader panicked"))??,
        None => Vec::new(),
    };

    Ok(String::from_utf8(bytes)?)
}

/// One invocation of the Tailwind CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindBuild {
    /// Tailwind version; only the major component selects the CLI package.
    pub version: String,
    pub input_css: PathBuf,
    pub config_file: PathBuf,
    pub output_css: PathBuf,
    pub timeout: Option<Duration>,
    /// Launcher for the CLI package.
    pub program: String,
}

impl TailwindBuild {
    pub fn new(
        version: impl Into<String>,
        input_css: impl Into<PathBuf>,
        config_file: impl Into<PathBuf>,
        output_css: impl Into<PathBuf>,
    ) -> Self {
        Self {
            version: version.into(),
            input_css: input_css.into(),
            config_file: config_file.into(),
            output_css: output_css.into(),
            timeout: None,
            program: "npx".to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// `"4.1.18"` gives `"4"`, `"latest"` stays `"latest"`.
    pub fn major_version(&self) -> &str {
        let version = self.version.trim_start_matches(['^', '~', 'v']);
        version.split('.').next().unwrap_or(version)
    }

    /// The shell command line this build runs.
    pub fn command(&self) -> String {
        format!(
            "{} @tailwindcss/cli@{} -i {} -o {} -c {} --minify",
            self.program,
            self.major_version(),
            quote(&self.input_css),
            quote(&self.output_css),
            quote(&self.config_file),
        )
    }

    /// Runs the CLI and returns the compiled CSS.
    pub fn run(&self) -> Result<String, BuildError> {
        let command = self.command();
        tracing::info!(version = %self.version, "building Tailwind CSS");
        run_shell(&command, self.timeout)?;

        if !self.output_css.exists() {
            return Err(BuildError::MissingOutput(self.output_css.clone()));
        }
        let css = std::fs::read_to_string(&self.output_css)?;
        tracing::debug!(
            path = %self.output_css.display(),
            bytes = css.len(),
            "read compiled CSS"
        );
        Ok(css)
    }
}

fn quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}
