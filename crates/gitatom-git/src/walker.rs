// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Bounded multi-head commit graph traversal
//!
//! Finding "the N most recent commits" exactly would require a global index
//! of commit times. Instead, every head is explored breadth-first down to a
//! depth of `max_count`, which collects a superset of what is needed; the
//! collected commits are then sorted by timestamp and truncated.
//!
//! This is an approximation: a branch with more than `max_count` commits
//! newer than everything on shallower branches can be cut short. It is exact
//! whenever commit times follow topological order on each branch.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info};

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::repo::RepositoryAccess;

/// Walks the commit graph of a repository from one or more heads
#[derive(Debug, Clone)]
pub struct CommitGraphWalker<R> {
    repo: R,
}

impl<R: RepositoryAccess> CommitGraphWalker<R> {
    /// Create a walker over the given repository
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Select the `max_count` most recent commits reachable from every local branch
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the branch heads cannot be listed or a commit
    /// cannot be resolved.
    pub fn select_from_branches(&self, max_count: usize) -> Result<Vec<CommitRecord>, GitError> {
        let heads = self.repo.list_branch_heads()?;
        self.select_recent_commits(&heads, max_count)
    }

    /// Select the `max_count` most recent commits reachable from `heads`
    ///
    /// The result holds each commit at most once, newest first. Commits with
    /// equal timestamps keep their discovery order.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitNotFound` if a head or parent pointer names a
    /// commit that does not exist.
    pub fn select_recent_commits<S: AsRef<str>>(
        &self,
        heads: &[S],
        max_count: usize,
    ) -> Result<Vec<CommitRecord>, GitError> {
        let mut frontier: VecDeque<(String, usize)> = heads
            .iter()
            .map(|head| (head.as_ref().to_string(), 0))
            .collect();
        let mut visited: HashSet<String> = HashSet::new();
        let mut commits = Vec::new();

        while let Some((id, depth)) = frontier.pop_front() {
            if visited.contains(&id) {
                continue;
            }
            let commit = self.repo.resolve_commit(&id)?;
            debug!(id = %id, depth, "Visited commit");

            if depth < max_count {
                frontier.extend(
                    commit
                        .parent_ids
                        .iter()
                        .map(|parent| (parent.clone(), depth + 1)),
                );
            }
            visited.insert(id);
            commits.push(commit);
        }

        let explored = commits.len();
        // Stable sort: equal timestamps keep discovery order
        commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        commits.truncate(max_count);

        info!(
            heads = heads.len(),
            explored,
            selected = commits.len(),
            "Selected recent commits"
        );
        Ok(commits)
    }
}
