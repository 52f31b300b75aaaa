//! Configuration management for the draft blanks tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Settings file discovery and loading
//! - Precedence: command line > settings file > defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::placeholder::DEFAULT_CONTEXT_RADIUS;
use crate::session::{AnswerPolicy, SessionOptions};

/// Settings file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".draft-ls.toml";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "draft-ls")]
#[command(about = "Find, review and fill blanks in legal drafts")]
#[command(version)]
pub struct Args {
    /// Settings file to use instead of the discovered one
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    /// Context kept around each blank
    #[arg(long, help = "Characters of context shown on each side of a blank")]
    pub context_radius: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the language server over stdio (default)
    Serve,
    /// List the blanks of a draft
    Scan {
        file: PathBuf,
        /// Print blanks as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Fill the blanks of a draft, one answer per stdin line
    Fill {
        file: PathBuf,
        /// Write the finished draft here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Lay out structured drafts before writing them
        #[arg(long)]
        render: bool,
    },
    /// Lay out a structured draft as display text
    Render { file: PathBuf },
}

/// Contents of a settings file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub context_radius: Option<usize>,
    pub reject_blank_answers: Option<bool>,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing settings file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub context_radius: usize,
    pub answer_policy: AnswerPolicy,
    pub log_level: String,
    /// Settings file that was loaded, if any
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let settings_path = match args.config {
            Some(path) => Some(path),
            None => discover_settings_file(Path::new(".")),
        };

        let settings = match &settings_path {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        Ok(Self::merge(
            args.command,
            args.log_level,
            args.context_radius,
            settings,
            settings_path,
        ))
    }

    fn merge(
        command: Option<Command>,
        log_level: Option<String>,
        context_radius: Option<usize>,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let answer_policy = match settings.reject_blank_answers {
            Some(false) => AnswerPolicy::AcceptAny,
            _ => AnswerPolicy::RejectBlank,
        };

        Config {
            command: command.unwrap_or(Command::Serve),
            context_radius: context_radius
                .or(settings.context_radius)
                .unwrap_or(DEFAULT_CONTEXT_RADIUS),
            answer_policy,
            log_level: log_level
                .or(settings.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            settings_path,
        }
    }

    /// True when a settings file contributed to this configuration
    pub fn has_settings_file(&self) -> bool {
        self.settings_path.is_some()
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            context_radius: self.context_radius,
            answer_policy: self.answer_policy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::merge(None, None, None, Settings::default(), None)
    }
}

/// Find a settings file: project file in `dir` first, then the user config
/// directory
pub fn discover_settings_file(dir: &Path) -> Option<PathBuf> {
    let project = dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("draft-ls").join("config.toml");
    user.is_file().then_some(user)
}
