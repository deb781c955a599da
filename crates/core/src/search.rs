//! Query-composition helpers for the catalog lookups.
//!
//! Lives in `core` so the repository layer and its tests share one notion of
//! pagination bounds, LIKE patterns and year ranges.

use crate::error::CoreError;
use crate::types::Year;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for unfiltered listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum page size for unfiltered listings.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Default `min_count` threshold for the director/actor statistics.
pub const DEFAULT_STATS_MIN_COUNT: i64 = 10;

/// Clamp a user-provided limit to `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// LIKE patterns
// ---------------------------------------------------------------------------

/// Escape LIKE metacharacters so `text` matches literally.
///
/// PostgreSQL uses `\` as the default LIKE escape character.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Pattern matching `text` anywhere in the column.
pub fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

/// Pattern matching columns that end with `text`.
pub fn suffix_pattern(text: &str) -> String {
    format!("%{}", escape_like(text))
}

// ---------------------------------------------------------------------------
// Year ranges
// ---------------------------------------------------------------------------

/// A release-year filter with at least one bound.
///
/// Each variant carries its own sort direction: open-ended lower bounds and
/// closed ranges sort ascending, an upper bound alone sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRange {
    /// `year >= min`, ascending.
    From(Year),
    /// `year <= max`, descending.
    Until(Year),
    /// `min <= year <= max`, ascending.
    Between(Year, Year),
}

impl YearRange {
    /// Build a range from optional bounds.
    ///
    /// Returns [`CoreError::AmbiguousFilter`] when neither bound is given, so
    /// callers cannot confuse "no filter" with "no results".
    pub fn from_bounds(min: Option<Year>, max: Option<Year>) -> Result<Self, CoreError> {
        match (min, max) {
            (None, None) => Err(CoreError::AmbiguousFilter(
                "at least one of the year bounds must be given".into(),
            )),
            (Some(min), None) => Ok(YearRange::From(min)),
            (None, Some(max)) => Ok(YearRange::Until(max)),
            (Some(min), Some(max)) => Ok(YearRange::Between(min, max)),
        }
    }

    /// SQL sort direction for results of this range.
    pub fn sort_direction(&self) -> &'static str {
        match self {
            YearRange::Until(_) => "DESC",
            YearRange::From(_) | YearRange::Between(_, _) => "ASC",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
