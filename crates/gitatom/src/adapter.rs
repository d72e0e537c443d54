// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Commit feeds
//!
//! [`CommitFeed`] binds the feed engine's hooks to the commits selected by a
//! [`CommitGraphWalker`]: one entry per commit, titled by its summary line,
//! dated by its commit time, with the commit's diff as content.

use gitatom_feed::{FeedSource, FixedTimestamp};
use gitatom_git::{CommitGraphWalker, CommitRecord, DiffSource, GitError, RepositoryAccess};

use crate::error::AtomError;

/// Number of commits in a feed unless configured otherwise
pub const DEFAULT_MAX_COUNT: usize = 10;

/// Prefix of every entry id; the commit hash follows it
pub const ENTRY_ID_PREFIX: &str = "urn:x-git-commit:";

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Latest commits";

/// A feed of the most recent commits of a repository
pub struct CommitFeed<R, D> {
    walker: CommitGraphWalker<R>,
    diffs: D,
    title: Option<String>,
    heads: Option<Vec<String>>,
    max_count: usize,
    feed_id: Option<String>,
    link: Option<String>,
    updated: Option<FixedTimestamp>,
}

impl<R: RepositoryAccess, D: DiffSource> CommitFeed<R, D> {
    /// Feed the commits of `repo`, with diffs from `diffs`
    pub fn new(repo: R, diffs: D) -> Self {
        Self {
            walker: CommitGraphWalker::new(repo),
            diffs,
            title: None,
            heads: None,
            max_count: DEFAULT_MAX_COUNT,
            feed_id: None,
            link: None,
            updated: None,
        }
    }

    /// Set the feed title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Start from these commit ids instead of every local branch head
    #[must_use]
    pub fn with_heads(mut self, heads: Vec<String>) -> Self {
        self.heads = Some(heads);
        self
    }

    /// Limit the feed to `max_count` commits
    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Set an explicit feed id
    #[must_use]
    pub fn with_feed_id(mut self, feed_id: impl Into<String>) -> Self {
        self.feed_id = Some(feed_id.into());
        self
    }

    /// Set the feed link (also used as id when no id is set)
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the feed `updated` value instead of deriving it from the commits
    #[must_use]
    pub fn with_updated(mut self, updated: FixedTimestamp) -> Self {
        self.updated = Some(updated);
        self
    }

    /// Maximum number of commits in the feed
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// The explicitly configured title, if any
    #[must_use]
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The explicitly configured feed id, if any
    #[must_use]
    pub fn explicit_feed_id(&self) -> Option<&str> {
        self.feed_id.as_deref()
    }

    /// Select the commits that make up the feed, newest first
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the commit graph cannot be read.
    pub fn select_commits(&self) -> Result<Vec<CommitRecord>, GitError> {
        match &self.heads {
            Some(heads) => self.walker.select_recent_commits(heads, self.max_count),
            None => self.walker.select_from_branches(self.max_count),
        }
    }
}

impl<R: RepositoryAccess, D: DiffSource> FeedSource for CommitFeed<R, D> {
    type Entry = CommitRecord;
    type Error = AtomError;

    fn entries(&self) -> Result<Vec<CommitRecord>, AtomError> {
        Ok(self.select_commits()?)
    }

    fn feed_title(&self) -> String {
        self.explicit_title().unwrap_or(DEFAULT_TITLE).to_string()
    }

    fn entry_title(&self, entry: &CommitRecord) -> String {
        entry.summary().to_string()
    }

    fn entry_updated(&self, entry: &CommitRecord) -> FixedTimestamp {
        FixedTimestamp::new(entry.timestamp, entry.timezone_offset_seconds)
    }

    fn feed_id(&self) -> Option<String> {
        self.feed_id.clone().or_else(|| self.feed_link())
    }

    fn feed_link(&self) -> Option<String> {
        self.link.clone()
    }

    fn feed_updated(&self) -> Option<FixedTimestamp> {
        self.updated
    }

    fn entry_id(&self, entry: &CommitRecord) -> Option<String> {
        Some(format!("{ENTRY_ID_PREFIX}{}", entry.id))
    }

    fn entry_author(&self, entry: &CommitRecord) -> Option<String> {
        Some(entry.author_name())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    fn entry_text_content(&self, entry: &CommitRecord) -> Result<Option<String>, AtomError> {
        Ok(Some(self.diffs.combined_stat_and_patch(&entry.id)?))
    }
}
