//! Commit records as read from the repository

use serde::{Deserialize, Serialize};

/// A commit as seen by the graph walker and the feed adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (hex)
    pub id: String,
    /// Parent commit hashes, in order
    pub parent_ids: Vec<String>,
    /// Commit time as POSIX seconds
    pub timestamp: i64,
    /// Offset of the commit time, in seconds east of UTC
    pub timezone_offset_seconds: i32,
    /// Author as `Name <email>`
    pub author_line: String,
    /// Full commit message
    pub message: String,
}

impl CommitRecord {
    /// Validate that an id is a full SHA-1 (40) or SHA-256 (64) hex string
    #[must_use]
    pub fn is_valid_id(id: &str) -> bool {
        (id.len() == 40 || id.len() == 64) && id.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short id (first 7 characters)
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }

    /// Check if this is a merge commit (has multiple parents)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }

    /// First line of the message, after trimming surrounding whitespace
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.trim().lines().next().unwrap_or("")
    }

    /// The display name part of `author_line`
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author_line
            .split('<')
            .next()
            .unwrap_or("")
            .trim()
    }
}
