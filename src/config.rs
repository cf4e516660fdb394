//! Runtime settings merged from the command line and the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::model::Revision;
use crate::repository::DEFAULT_LOG_LIMIT;
use crate::util::resolve_target;

pub const SVN_PROGRAM_VAR: &str = "SVN_TIMEMACHINE_SVN";
pub const LOG_FILTER_VAR: &str = "SVN_TIMEMACHINE_LOG";

/// What the process does once configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    PrintHtml,
    PrintRecent,
    PrintDetails(Revision),
}

impl RunMode {
    pub fn is_interactive(self) -> bool {
        self == RunMode::Interactive
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path or repository URL handed to svn
    pub target: String,
    pub start_revision: Option<Revision>,
    pub log_limit: usize,
    pub svn_program: String,
    /// tracing filter directive (trace, debug, info, warn, error)
    pub log_filter: String,
    /// Log file and HTML exports live here
    pub data_dir: PathBuf,
    pub mode: RunMode,
}

impl Config {
    /// Combine parsed arguments with environment lookups.
    ///
    /// `env` is `std::env::var(..).ok()` in production.
    pub fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let target = resolve_target(&cli.target)
            .with_context(|| format!("Could not resolve path: {}", cli.target))?;

        let svn_program = cli
            .svn
            .or_else(|| env(SVN_PROGRAM_VAR))
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "svn".to_string());

        let log_filter = env(LOG_FILTER_VAR).unwrap_or_else(|| "info".to_string());

        let data_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("svn-timemachine");

        let mode = if cli.html {
            RunMode::PrintHtml
        } else if cli.recent {
            RunMode::PrintRecent
        } else if let Some(revision) = cli.details {
            RunMode::PrintDetails(revision)
        } else {
            RunMode::Interactive
        };

        Ok(Self {
            target,
            start_revision: cli.revision,
            log_limit: cli.limit.unwrap_or(DEFAULT_LOG_LIMIT).max(1),
            svn_program,
            log_filter,
            data_dir,
            mode,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("svn-timemachine.log")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }
}
