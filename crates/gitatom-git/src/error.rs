// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Error types for gitatom-git

use thiserror::Error;

/// Errors that can occur while reading the commit graph
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// A commit id that is not a well-formed object hash
    #[error("Invalid commit id: {id}")]
    InvalidCommitId {
        /// The offending id
        id: String,
    },

    /// A commit id (usually a parent pointer) that names no commit
    #[error("Commit not found: {id}")]
    CommitNotFound {
        /// The id that could not be resolved
        id: String,
    },
}

/// Errors produced while retrieving the diff text for a commit
#[derive(Debug, Error)]
pub enum DiffError {
    /// The diff process could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The diff process exited unsuccessfully
    #[error("Diff for {id} failed with {}: {stderr}", describe_status(.status))]
    Exit {
        /// Commit whose diff was requested
        id: String,
        /// Exit code, `None` when the process was killed by a signal
        status: Option<i32>,
        /// Captured standard error, verbatim
        stderr: String,
    },

    /// The diff output was not valid UTF-8
    #[error("Diff for {id} is not valid UTF-8: {source}")]
    Utf8 {
        /// Commit whose diff was requested
        id: String,
        /// Underlying decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "termination by signal".to_string(),
    }
}
