// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Diff retrieval
//!
//! The feed embeds, for every commit, the same text `git show` prints: the
//! full message, a diffstat, and the patch. [`GitShow`] obtains it by running
//! the `git` executable; anything else implementing [`DiffSource`] can stand
//! in for it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::DiffError;

/// Produces the combined stat-and-patch text for one commit
pub trait DiffSource {
    /// Diff text for the commit `id`
    ///
    /// # Errors
    ///
    /// Returns `DiffError` if the diff cannot be produced.
    fn combined_stat_and_patch(&self, id: &str) -> Result<String, DiffError>;
}

impl<F> DiffSource for F
where
    F: Fn(&str) -> Result<String, DiffError>,
{
    fn combined_stat_and_patch(&self, id: &str) -> Result<String, DiffError> {
        self(id)
    }
}

/// Runs `git show --no-ext-diff --patch-with-stat` in a repository directory
#[derive(Debug, Clone)]
pub struct GitShow {
    repo_dir: PathBuf,
    git_binary: String,
}

impl GitShow {
    /// Run `git` from `PATH` inside `repo_dir`
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            git_binary: "git".to_string(),
        }
    }

    /// Use a specific git executable
    #[must_use]
    pub fn with_git_binary(mut self, git_binary: impl Into<String>) -> Self {
        self.git_binary = git_binary.into();
        self
    }

    /// Directory the command runs in
    #[must_use]
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    // `--` keeps a path named like the id from being read as a revision
    fn args(id: &str) -> [&str; 6] {
        ["show", "--no-color", "--no-ext-diff", "--patch-with-stat", id, "--"]
    }
}

impl DiffSource for GitShow {
    fn combined_stat_and_patch(&self, id: &str) -> Result<String, DiffError> {
        debug!(id = %id, dir = %self.repo_dir.display(), "Running git show");

        let output = Command::new(&self.git_binary)
            .args(Self::args(id))
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| DiffError::Spawn {
                program: self.git_binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DiffError::Exit {
                id: id.to_string(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| DiffError::Utf8 {
            id: id.to_string(),
            source,
        })
    }
}
