// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! gitatom-git: commit selection for gitatom
//!
//! This library crate finds the most recently committed commits across the
//! branches of a repository and retrieves their diffs, for consumption by
//! the gitatom feed adapters.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gitatom_git::{CommitGraphWalker, GitRepo};
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! let walker = CommitGraphWalker::new(repo);
//!
//! for c in walker.select_from_branches(10).expect("walk commits") {
//!     println!("{} - {}", c.short_id(), c.summary());
//! }
//! ```

pub mod commit;
pub mod diff;
pub mod error;
pub mod memory;
pub mod repo;
pub mod walker;

pub use commit::CommitRecord;
pub use diff::{DiffSource, GitShow};
pub use error::{DiffError, GitError};
pub use memory::MemoryRepo;
pub use repo::{GitRepo, RepositoryAccess};
pub use walker::CommitGraphWalker;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::CommitRecord;
    pub use crate::diff::{DiffSource, GitShow};
    pub use crate::error::{DiffError, GitError};
    pub use crate::repo::{GitRepo, RepositoryAccess};
    pub use crate::walker::CommitGraphWalker;
}
