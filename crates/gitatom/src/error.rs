// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Errors raised while building a commit feed

use thiserror::Error;

/// Any failure of a commit feed build
#[derive(Debug, Error)]
pub enum AtomError {
    /// The feed engine rejected the configuration
    #[error("Feed error: {0}")]
    Feed(#[from] gitatom_feed::FeedError),

    /// Reading the commit graph failed
    #[error("Git error: {0}")]
    Git(#[from] gitatom_git::GitError),

    /// Retrieving a commit's diff failed
    #[error("Diff error: {0}")]
    Diff(#[from] gitatom_git::DiffError),
}

impl AtomError {
    /// Exit status of a failed diff process, if that is what went wrong
    #[must_use]
    pub fn diff_exit_status(&self) -> Option<i32> {
        match self {
            Self::Diff(gitatom_git::DiffError::Exit { status, .. }) => *status,
            _ => None,
        }
    }
}
