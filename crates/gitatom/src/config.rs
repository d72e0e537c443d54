// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Configuration for the gitatom command line
//!
//! This module provides the argument parser and the checks run on its
//! result before any repository is opened.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapter::DEFAULT_MAX_COUNT;
use crate::hosted::GITHUB_HOST;

/// gitatom - Atom feed of the latest commits in a git repository
#[derive(Parser, Debug, Clone)]
#[command(name = "gitatom")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to printing the feed)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path inside the git repository
    ///
    /// The repository is discovered by walking up from this path.
    #[arg(short, long, env = "GITATOM_REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Maximum number of commits in the feed
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_COUNT)]
    pub max_count: usize,

    /// Branches, tags, or commits to start from (defaults to every local branch)
    pub heads: Vec<String>,

    /// Feed title (with --project, replaces "Latest commits for OWNER/REPOSITORY")
    #[arg(long)]
    pub title: Option<String>,

    /// Feed id (defaults to the feed link)
    #[arg(long)]
    pub id: Option<String>,

    /// Feed link, an absolute URL
    #[arg(long)]
    pub link: Option<String>,

    /// Hosted project as OWNER/REPOSITORY; adds project and commit links
    #[arg(long, value_name = "OWNER/REPOSITORY")]
    pub project: Option<String>,

    /// Host of the hosted project
    #[arg(long, default_value = GITHUB_HOST)]
    pub host: String,

    /// Explicit feed updated time (RFC 3339); allows building an empty feed
    #[arg(long)]
    pub updated: Option<String>,

    /// Write the feed to this file instead of stdout
    ///
    /// The feed is fully built before the file is written, so a failed
    /// build never leaves a partial file behind.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so that stdout carries only the feed.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the selected commits instead of printing a feed
    List {
        /// Print one JSON record per commit instead of bare ids
        #[arg(long)]
        json: bool,

        /// Branches, tags, or commits to start from
        heads: Vec<String>,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: None,
            repo: PathBuf::from("."),
            max_count: DEFAULT_MAX_COUNT,
            heads: Vec::new(),
            title: None,
            id: None,
            link: None,
            project: None,
            host: GITHUB_HOST.to_string(),
            updated: None,
            output: None,
            verbose: false,
            quiet: false,
        }
    }
}

/// A hosted project split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    /// Account or organization
    pub owner: String,
    /// Repository name
    pub repository: String,
}

impl Config {
    /// The hosted project, if one was given
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProject` unless the value is `owner/name`
    /// with both parts non-empty.
    pub fn project_path(&self) -> Result<Option<ProjectPath>, ConfigError> {
        let Some(project) = self.project.as_deref() else {
            return Ok(None);
        };
        match project.split_once('/') {
            Some((owner, repository))
                if !owner.is_empty() && !repository.is_empty() && !repository.contains('/') =>
            {
                Ok(Some(ProjectPath {
                    owner: owner.to_string(),
                    repository: repository.to_string(),
                }))
            }
            _ => Err(ConfigError::InvalidProject(project.to_string())),
        }
    }

    /// Heads named on the command line, before or after the subcommand
    #[must_use]
    pub fn start_heads(&self) -> Vec<String> {
        let mut heads = self.heads.clone();
        if let Some(Command::List { heads: more, .. }) = &self.command {
            heads.extend(more.iter().cloned());
        }
        heads
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path doesn't exist
    /// - The project is not of the form `owner/name`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.repo.exists() {
            return Err(ConfigError::RepoPathNotFound(self.repo.clone()));
        }
        self.project_path()?;
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoPathNotFound(PathBuf),

    /// Project is not `owner/name`
    #[error("Invalid project {0:?}: expected OWNER/REPOSITORY")]
    InvalidProject(String),
}
