// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! The hook contract between a feed and its entries
//!
//! A [`FeedSource`] supplies the entries of a feed plus accessors for their
//! fields. Four accessors are required; the rest have defaults that either
//! fall back to another accessor or report the value as absent. The
//! [`FeedBuilder`](crate::FeedBuilder) turns absent required values into
//! [`FeedError`]s.

use crate::error::FeedError;
use crate::escape::preformatted_html;
use crate::timestamp::FixedTimestamp;

/// Supplies the entries and field values of one feed
pub trait FeedSource {
    /// One item of the feed
    type Entry;

    /// Error type of the fallible hooks; must absorb engine errors
    type Error: From<FeedError>;

    /// The entries, in the order they should appear
    ///
    /// # Errors
    ///
    /// Returns the source's error if the entries cannot be produced.
    fn entries(&self) -> Result<Vec<Self::Entry>, Self::Error>;

    /// Human-readable feed title
    fn feed_title(&self) -> String;

    /// Human-readable entry title
    fn entry_title(&self, entry: &Self::Entry) -> String;

    /// When the entry was last updated
    fn entry_updated(&self, entry: &Self::Entry) -> FixedTimestamp;

    /// Permanent feed identifier; defaults to [`feed_link`](Self::feed_link)
    fn feed_id(&self) -> Option<String> {
        self.feed_link()
    }

    /// Absolute URL of the page the feed describes
    fn feed_link(&self) -> Option<String> {
        None
    }

    /// Explicit feed `updated` value
    ///
    /// When `None`, the builder uses the latest entry `updated` value.
    fn feed_updated(&self) -> Option<FixedTimestamp> {
        None
    }

    /// Permanent entry identifier; defaults to [`entry_link`](Self::entry_link)
    fn entry_id(&self, entry: &Self::Entry) -> Option<String> {
        self.entry_link(entry)
    }

    /// Absolute URL of the entry
    fn entry_link(&self, _entry: &Self::Entry) -> Option<String> {
        None
    }

    /// Display name of the entry's author
    fn entry_author(&self, _entry: &Self::Entry) -> Option<String> {
        None
    }

    /// Plain-text body of the entry
    ///
    /// # Errors
    ///
    /// Returns the source's error if the content cannot be produced.
    fn entry_text_content(&self, _entry: &Self::Entry) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    /// HTML body of the entry, given its text content
    ///
    /// The builder fetches [`entry_text_content`](Self::entry_text_content)
    /// once and passes it here; the default wraps it in a `<pre>` block.
    /// Returning `None` while text is present emits the text as-is.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the content cannot be produced.
    fn entry_html_content(
        &self,
        _entry: &Self::Entry,
        text: Option<&str>,
    ) -> Result<Option<String>, Self::Error> {
        Ok(text.map(preformatted_html))
    }
}
