// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Streaming Atom serialization
//!
//! [`FeedBuilder`] walks a [`FeedSource`] in document order and produces the
//! Atom document as a sequence of text fragments. Each fragment pulls at most
//! one field from the source, so hooks run lazily and in the order their
//! values appear in the output. Nothing is cached between two passes: every
//! call to [`FeedBuilder::fragments`] asks the source afresh.

use std::io::Write;

use tracing::debug;

use crate::error::FeedError;
use crate::escape::{escape_attribute, escape_text};
use crate::source::FeedSource;
use crate::timestamp::FixedTimestamp;

/// Namespace of Atom 1.0 documents
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

const PREAMBLE: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
    "<feed xmlns=\"http://www.w3.org/2005/Atom\">\n"
);

/// Serializes a feed source into an Atom document
#[derive(Debug)]
pub struct FeedBuilder<'s, S: ?Sized> {
    source: &'s S,
}

impl<'s, S: FeedSource + ?Sized> FeedBuilder<'s, S> {
    /// Create a builder over `source`
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Lazily produce the document, one fragment at a time
    ///
    /// The iterator yields at most one error and then ends.
    pub fn fragments(&self) -> Fragments<'s, S> {
        Fragments {
            source: self.source,
            stage: Stage::Preamble,
            entries: None,
            index: 0,
        }
    }

    /// Produce the whole document as one string
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the source or the engine.
    pub fn build(&self) -> Result<String, S::Error> {
        self.fragments().collect()
    }

    /// Write the document fragment by fragment
    ///
    /// Fragments written before an error are not retracted; buffer the
    /// output (or use [`build`](Self::build)) when that matters.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the source, the engine, or `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), S::Error> {
        for fragment in self.fragments() {
            writer
                .write_all(fragment?.as_bytes())
                .map_err(FeedError::from)?;
        }
        writer.flush().map_err(FeedError::from)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Preamble,
    FeedId,
    FeedTitle,
    FeedUpdated,
    FeedLink,
    EntryStart,
    EntryId,
    EntryTitle,
    EntryUpdated,
    EntryLink,
    EntryAuthor,
    EntryContent,
    EntryEnd,
    Close,
    Done,
}

/// Iterator over the fragments of a document, see [`FeedBuilder::fragments`]
pub struct Fragments<'s, S: FeedSource + ?Sized> {
    source: &'s S,
    stage: Stage,
    entries: Option<Vec<S::Entry>>,
    index: usize,
}

impl<S: FeedSource + ?Sized> Fragments<'_, S> {
    fn load_entries(&mut self) -> Result<&[S::Entry], S::Error> {
        if self.entries.is_none() {
            let entries = self.source.entries()?;
            debug!(count = entries.len(), "Fetched feed entries");
            self.entries = Some(entries);
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    fn current_entry(&self) -> &S::Entry {
        // EntryStart only advances past an index that exists
        &self.entries.as_deref().unwrap_or_default()[self.index]
    }

    fn feed_updated(&mut self) -> Result<FixedTimestamp, S::Error> {
        if let Some(updated) = self.source.feed_updated() {
            return Ok(updated);
        }
        let source = self.source;
        let entries = self.load_entries()?;
        FixedTimestamp::latest(entries.iter().map(|entry| source.entry_updated(entry)))
            .ok_or_else(|| FeedError::MissingUpdated.into())
    }

    /// Emit the fragment for the current stage and advance.
    /// `Ok(None)` means the stage had nothing to emit.
    fn step(&mut self) -> Result<Option<String>, S::Error> {
        let source = self.source;
        let (fragment, next) = match self.stage {
            Stage::Preamble => (Some(PREAMBLE.to_string()), Stage::FeedId),
            Stage::FeedId => {
                let id = source.feed_id().ok_or(FeedError::MissingFeedId)?;
                (Some(element(1, "id", &id)), Stage::FeedTitle)
            }
            Stage::FeedTitle => (
                Some(element(1, "title", &source.feed_title())),
                Stage::FeedUpdated,
            ),
            Stage::FeedUpdated => {
                let updated = self.feed_updated()?.to_rfc3339()?;
                (Some(element(1, "updated", &updated)), Stage::FeedLink)
            }
            Stage::FeedLink => (
                source.feed_link().map(|link| link_element(1, &link)),
                Stage::EntryStart,
            ),
            Stage::EntryStart => {
                if self.index < self.load_entries()?.len() {
                    (Some("  <entry>\n".to_string()), Stage::EntryId)
                } else {
                    (None, Stage::Close)
                }
            }
            Stage::EntryId => {
                let id = source
                    .entry_id(self.current_entry())
                    .ok_or(FeedError::MissingEntryId { index: self.index })?;
                (Some(element(2, "id", &id)), Stage::EntryTitle)
            }
            Stage::EntryTitle => (
                Some(element(2, "title", &source.entry_title(self.current_entry()))),
                Stage::EntryUpdated,
            ),
            Stage::EntryUpdated => {
                let updated = source.entry_updated(self.current_entry()).to_rfc3339()?;
                (Some(element(2, "updated", &updated)), Stage::EntryLink)
            }
            Stage::EntryLink => (
                source
                    .entry_link(self.current_entry())
                    .map(|link| link_element(2, &link)),
                Stage::EntryAuthor,
            ),
            Stage::EntryAuthor => (
                source.entry_author(self.current_entry()).map(|name| {
                    format!("    <author><name>{}</name></author>\n", escape_text(&name))
                }),
                Stage::EntryContent,
            ),
            Stage::EntryContent => {
                let entry = self.current_entry();
                let text = source.entry_text_content(entry)?;
                let content = match source.entry_html_content(entry, text.as_deref())? {
                    Some(html) => Some(content_element("html", &html)),
                    None => text.map(|text| content_element("text", &text)),
                };
                (content, Stage::EntryEnd)
            }
            Stage::EntryEnd => {
                self.index += 1;
                (Some("  </entry>\n".to_string()), Stage::EntryStart)
            }
            Stage::Close => (Some("</feed>\n".to_string()), Stage::Done),
            Stage::Done => (None, Stage::Done),
        };
        self.stage = next;
        Ok(fragment)
    }
}

impl<S: FeedSource + ?Sized> Iterator for Fragments<'_, S> {
    type Item = Result<String, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.stage != Stage::Done {
            match self.step() {
                Ok(Some(fragment)) => return Some(Ok(fragment)),
                Ok(None) => {}
                Err(e) => {
                    self.stage = Stage::Done;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<S: FeedSource + ?Sized> std::iter::FusedIterator for Fragments<'_, S> {}

fn indent(level: usize) -> &'static str {
    &"    "[..level * 2]
}

fn element(level: usize, name: &str, text: &str) -> String {
    format!("{}<{name}>{}</{name}>\n", indent(level), escape_text(text))
}

fn link_element(level: usize, href: &str) -> String {
    format!("{}<link href=\"{}\"/>\n", indent(level), escape_attribute(href))
}

fn content_element(kind: &str, body: &str) -> String {
    format!(
        "    <content type=\"{kind}\">{}</content>\n",
        escape_text(body)
    )
}
