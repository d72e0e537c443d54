// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! gitatom library
//!
//! Builds Atom feeds from the most recent commits of a git repository. The
//! commit graph and diffs come from `gitatom-git`, the document itself from
//! `gitatom-feed`; this crate binds the two and provides the command line.

pub mod adapter;
pub mod config;
pub mod error;
pub mod hosted;
pub mod run;

pub use adapter::{CommitFeed, DEFAULT_MAX_COUNT, ENTRY_ID_PREFIX};
pub use config::{Command, Config, ConfigError};
pub use error::AtomError;
pub use hosted::HostedProjectFeed;
pub use run::run;
