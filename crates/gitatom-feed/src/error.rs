// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Error types for gitatom-feed

use thiserror::Error;

/// Errors raised by the feed engine itself
///
/// Every variant except `Io` is a configuration error: the feed source did
/// not supply a value that the document requires.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Neither a feed id nor a feed link was supplied
    #[error("Feed has neither an id nor a link")]
    MissingFeedId,

    /// An entry has neither an id nor a link
    #[error("Entry {index} has neither an id nor a link")]
    MissingEntryId {
        /// Position of the entry in the feed
        index: usize,
    },

    /// The feed has no entries and no explicit `updated` value
    #[error("Cannot derive feed updated time: no entries and no explicit value")]
    MissingUpdated,

    /// A timestamp or offset that cannot be represented as a date-time
    #[error("Invalid timestamp: {seconds} with offset {offset_seconds}s")]
    InvalidTimestamp {
        /// POSIX seconds
        seconds: i64,
        /// Offset east of UTC, in seconds
        offset_seconds: i32,
    },

    /// A date-time string that is not valid RFC 3339
    #[error("Invalid RFC 3339 date-time {value:?}: {source}")]
    ParseTimestamp {
        /// The rejected input
        value: String,
        /// Underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Writing the document failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
