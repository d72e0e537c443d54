// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Feeds for projects on a code hosting site
//!
//! Wraps a [`CommitFeed`] and adds links to the project page and to each
//! commit page, e.g. `https://github.com/owner/repo/commit/<hash>`.

use gitatom_feed::{FeedSource, FixedTimestamp};
use gitatom_git::{CommitRecord, DiffSource, RepositoryAccess};

use crate::adapter::CommitFeed;
use crate::error::AtomError;

/// Host used by [`HostedProjectFeed::github`]
pub const GITHUB_HOST: &str = "github.com";

/// A commit feed for `owner/repository` on `host`
pub struct HostedProjectFeed<R, D> {
    inner: CommitFeed<R, D>,
    host: String,
    owner: String,
    repository: String,
}

impl<R: RepositoryAccess, D: DiffSource> HostedProjectFeed<R, D> {
    /// Link the commits of `inner` to `https://{host}/{owner}/{repository}`
    pub fn new(
        inner: CommitFeed<R, D>,
        host: impl Into<String>,
        owner: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            host: host.into(),
            owner: owner.into(),
            repository: repository.into(),
        }
    }

    /// A project hosted on GitHub
    pub fn github(
        inner: CommitFeed<R, D>,
        owner: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self::new(inner, GITHUB_HOST, owner, repository)
    }

    /// The wrapped commit feed
    pub fn inner(&self) -> &CommitFeed<R, D> {
        &self.inner
    }

    /// URL of the project page
    #[must_use]
    pub fn project_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.repository)
    }

    /// URL of the page for commit `id`
    #[must_use]
    pub fn commit_url(&self, id: &str) -> String {
        format!("{}/commit/{id}", self.project_url())
    }
}

impl<R: RepositoryAccess, D: DiffSource> FeedSource for HostedProjectFeed<R, D> {
    type Entry = CommitRecord;
    type Error = AtomError;

    fn entries(&self) -> Result<Vec<CommitRecord>, AtomError> {
        self.inner.entries()
    }

    fn feed_title(&self) -> String {
        self.inner.explicit_title().map_or_else(
            || format!("Latest commits for {}/{}", self.owner, self.repository),
            str::to_string,
        )
    }

    fn entry_title(&self, entry: &CommitRecord) -> String {
        self.inner.entry_title(entry)
    }

    fn entry_updated(&self, entry: &CommitRecord) -> FixedTimestamp {
        self.inner.entry_updated(entry)
    }

    fn feed_id(&self) -> Option<String> {
        self.inner
            .explicit_feed_id()
            .map(str::to_string)
            .or_else(|| self.feed_link())
    }

    fn feed_link(&self) -> Option<String> {
        Some(self.project_url())
    }

    fn feed_updated(&self) -> Option<FixedTimestamp> {
        self.inner.feed_updated()
    }

    fn entry_id(&self, entry: &CommitRecord) -> Option<String> {
        self.inner.entry_id(entry)
    }

    fn entry_link(&self, entry: &CommitRecord) -> Option<String> {
        Some(self.commit_url(&entry.id))
    }

    fn entry_author(&self, entry: &CommitRecord) -> Option<String> {
        self.inner.entry_author(entry)
    }

    fn entry_text_content(&self, entry: &CommitRecord) -> Result<Option<String>, AtomError> {
        self.inner.entry_text_content(entry)
    }
}
