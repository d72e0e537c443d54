// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Fixed-offset timestamps
//!
//! Feed dates are rendered in the offset they were recorded with, never
//! normalized to UTC, so a commit made at 09:00+02:00 shows as such.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};

use crate::error::FeedError;

/// A point in time paired with the UTC offset it was recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedTimestamp {
    /// POSIX seconds
    pub seconds: i64,
    /// Offset east of UTC, in seconds
    pub offset_seconds: i32,
}

impl FixedTimestamp {
    /// Pair POSIX seconds with an offset
    #[must_use]
    pub const fn new(seconds: i64, offset_seconds: i32) -> Self {
        Self {
            seconds,
            offset_seconds,
        }
    }

    /// A timestamp recorded in UTC
    #[must_use]
    pub const fn utc(seconds: i64) -> Self {
        Self::new(seconds, 0)
    }

    /// Capture the instant and offset of a chrono date-time
    #[must_use]
    pub fn from_datetime(datetime: &DateTime<FixedOffset>) -> Self {
        Self::new(datetime.timestamp(), datetime.offset().local_minus_utc())
    }

    /// Parse an RFC 3339 date-time, keeping its offset
    ///
    /// # Errors
    ///
    /// Returns `FeedError::ParseTimestamp` if `value` is not RFC 3339.
    pub fn parse_rfc3339(value: &str) -> Result<Self, FeedError> {
        DateTime::parse_from_rfc3339(value)
            .map(|datetime| Self::from_datetime(&datetime))
            .map_err(|source| FeedError::ParseTimestamp {
                value: value.to_string(),
                source,
            })
    }

    /// Convert to a chrono date-time in the recorded offset
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidTimestamp` if the offset is a day or more,
    /// or the instant is outside chrono's range.
    pub fn to_datetime(&self) -> Result<DateTime<FixedOffset>, FeedError> {
        let invalid = || FeedError::InvalidTimestamp {
            seconds: self.seconds,
            offset_seconds: self.offset_seconds,
        };
        let offset = FixedOffset::east_opt(self.offset_seconds).ok_or_else(invalid)?;
        offset
            .timestamp_opt(self.seconds, 0)
            .single()
            .ok_or_else(invalid)
    }

    /// ISO 8601 / RFC 3339 rendering with a numeric offset, e.g.
    /// `2012-03-04T10:20:30+05:30`
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidTimestamp` if the value cannot be represented.
    pub fn to_rfc3339(&self) -> Result<String, FeedError> {
        Ok(self
            .to_datetime()?
            .to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    /// The latest of `timestamps` by instant; ties keep the first one seen
    pub fn latest(timestamps: impl IntoIterator<Item = Self>) -> Option<Self> {
        timestamps.into_iter().fold(None, |best, candidate| match best {
            Some(best) if best.seconds >= candidate.seconds => Some(best),
            _ => Some(candidate),
        })
    }
}
