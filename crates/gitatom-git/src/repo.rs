// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Repository access
//!
//! The graph walker only needs two capabilities from a repository: the list
//! of branch heads and a way to resolve a commit id into a [`CommitRecord`].
//! [`RepositoryAccess`] captures exactly that; [`GitRepo`] implements it on
//! top of the `git2` crate.

use crate::commit::CommitRecord;
use crate::error::GitError;
use git2::{BranchType, ErrorCode, Oid, Repository};
use std::path::Path;
use tracing::debug;

/// Read-only access to the commits of a repository
pub trait RepositoryAccess {
    /// Ids of every local branch head, in a stable order
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the references cannot be listed.
    fn list_branch_heads(&self) -> Result<Vec<String>, GitError>;

    /// Resolve a commit id into its record
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitNotFound` if no commit has this id.
    fn resolve_commit(&self, id: &str) -> Result<CommitRecord, GitError>;
}

impl<T: RepositoryAccess + ?Sized> RepositoryAccess for &T {
    fn list_branch_heads(&self) -> Result<Vec<String>, GitError> {
        (**self).list_branch_heads()
    }

    fn resolve_commit(&self, id: &str) -> Result<CommitRecord, GitError> {
        (**self).resolve_commit(id)
    }
}

/// A git repository opened through libgit2
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the repository path (the `.git` directory)
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Directory in which git commands should run for this repository
    #[must_use]
    pub fn command_dir(&self) -> &Path {
        self.workdir().unwrap_or_else(|| self.path())
    }

    /// Resolve a branch name, tag, or abbreviated hash to a full commit id
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if the reference does not name a commit.
    pub fn resolve_ref(&self, reference: &str) -> Result<String, GitError> {
        let invalid = || GitError::InvalidReference {
            reference: reference.to_string(),
        };
        let commit = self
            .repo
            .revparse_single(reference)
            .map_err(|_| invalid())?
            .peel_to_commit()
            .map_err(|_| invalid())?;
        Ok(commit.id().to_string())
    }

    fn record_from_git2(git_commit: &git2::Commit<'_>) -> CommitRecord {
        let time = git_commit.time();
        let author = git_commit.author();
        let author_line = format!(
            "{} <{}>",
            String::from_utf8_lossy(author.name_bytes()),
            String::from_utf8_lossy(author.email_bytes())
        );

        CommitRecord {
            id: git_commit.id().to_string(),
            parent_ids: git_commit.parent_ids().map(|id| id.to_string()).collect(),
            timestamp: time.seconds(),
            timezone_offset_seconds: time.offset_minutes() * 60,
            author_line,
            message: String::from_utf8_lossy(git_commit.message_bytes()).into_owned(),
        }
    }
}

impl RepositoryAccess for GitRepo {
    fn list_branch_heads(&self) -> Result<Vec<String>, GitError> {
        let mut heads = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            let reference = branch.get();
            // Symbolic or unborn branches have no direct target
            let Some(target) = reference.target() else {
                continue;
            };
            heads.push((reference.name_bytes().to_vec(), target.to_string()));
        }
        heads.sort_by(|a, b| a.0.cmp(&b.0));

        debug!(count = heads.len(), "Listed local branch heads");
        Ok(heads.into_iter().map(|(_, id)| id).collect())
    }

    fn resolve_commit(&self, id: &str) -> Result<CommitRecord, GitError> {
        let oid = Oid::from_str(id).map_err(|_| GitError::InvalidCommitId { id: id.to_string() })?;
        let git_commit = self.repo.find_commit(oid).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::CommitNotFound { id: id.to_string() },
            _ => GitError::Git2(e),
        })?;
        Ok(Self::record_from_git2(&git_commit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_repository() {
        let result = GitRepo::open("/nonexistent/path");
        match result {
            Err(GitError::RepositoryNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            _ => panic!("Expected RepositoryNotFound error"),
        }
    }

    #[test]
    fn test_discover_nonexistent_repository() {
        let result = GitRepo::discover("/nonexistent/path/deeper");
        assert!(matches!(result, Err(GitError::RepositoryNotFound { .. })));
    }
}
