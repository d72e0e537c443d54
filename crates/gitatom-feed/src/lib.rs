// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! gitatom-feed: streaming Atom feed serialization
//!
//! This library crate renders any [`FeedSource`] as an Atom 1.0 document.
//! The source describes its entries through accessor hooks; the
//! [`FeedBuilder`] resolves fallbacks, escapes every value, and streams the
//! document as text fragments.
//!
//! # Example
//!
//! ```
//! use gitatom_feed::{FeedBuilder, FeedError, FeedSource, FixedTimestamp};
//!
//! struct Releases(Vec<(&'static str, i64)>);
//!
//! impl FeedSource for Releases {
//!     type Entry = (&'static str, i64);
//!     type Error = FeedError;
//!
//!     fn entries(&self) -> Result<Vec<Self::Entry>, FeedError> {
//!         Ok(self.0.clone())
//!     }
//!     fn feed_title(&self) -> String {
//!         "Releases".to_string()
//!     }
//!     fn feed_link(&self) -> Option<String> {
//!         Some("https://example.com/releases".to_string())
//!     }
//!     fn entry_title(&self, entry: &Self::Entry) -> String {
//!         entry.0.to_string()
//!     }
//!     fn entry_id(&self, entry: &Self::Entry) -> Option<String> {
//!         Some(format!("urn:release:{}", entry.0))
//!     }
//!     fn entry_updated(&self, entry: &Self::Entry) -> FixedTimestamp {
//!         FixedTimestamp::utc(entry.1)
//!     }
//! }
//!
//! let feed = Releases(vec![("v1.0", 1_330_000_000)]);
//! let document = FeedBuilder::new(&feed).build().unwrap();
//! assert!(document.contains("<title>v1.0</title>"));
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod escape;
pub mod source;
pub mod timestamp;

pub use builder::{ATOM_NAMESPACE, FeedBuilder, Fragments};
pub use error::FeedError;
pub use source::FeedSource;
pub use timestamp::FixedTimestamp;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::builder::FeedBuilder;
    pub use crate::error::FeedError;
    pub use crate::source::FeedSource;
    pub use crate::timestamp::FixedTimestamp;
}
