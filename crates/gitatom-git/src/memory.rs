//! In-memory repository
//!
//! Provides [`MemoryRepo`], a [`RepositoryAccess`] implementation backed by a
//! `HashMap<id, CommitRecord>`. Useful for tests and for feeding commits that
//! did not come from a git object database.

use std::collections::HashMap;

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::repo::RepositoryAccess;

/// Commits and branch heads held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRepo {
    commits: HashMap<String, CommitRecord>,
    branches: Vec<(String, String)>,
}

impl MemoryRepo {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit, replacing any commit with the same id
    #[must_use]
    pub fn with_commit(mut self, commit: CommitRecord) -> Self {
        self.insert_commit(commit);
        self
    }

    /// Point a branch at a commit id; branches keep insertion order
    #[must_use]
    pub fn with_branch(mut self, name: &str, head: &str) -> Self {
        self.set_branch(name, head);
        self
    }

    /// Add a commit in place
    pub fn insert_commit(&mut self, commit: CommitRecord) {
        self.commits.insert(commit.id.clone(), commit);
    }

    /// Point a branch at a commit id in place
    pub fn set_branch(&mut self, name: &str, head: &str) {
        match self.branches.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = head.to_string(),
            None => self.branches.push((name.to_string(), head.to_string())),
        }
    }

    /// Number of commits stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Whether no commits are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

impl RepositoryAccess for MemoryRepo {
    fn list_branch_heads(&self) -> Result<Vec<String>, GitError> {
        Ok(self.branches.iter().map(|(_, head)| head.clone()).collect())
    }

    fn resolve_commit(&self, id: &str) -> Result<CommitRecord, GitError> {
        self.commits
            .get(id)
            .cloned()
            .ok_or_else(|| GitError::CommitNotFound { id: id.to_string() })
    }
}
