//! Query-string parameter types for API handlers.

use cinema_core::types::Year;
use serde::Deserialize;

/// Pagination parameters (`?offset=&limit=`).
///
/// Values are clamped with `cinema_core::search::clamp_limit` /
/// `clamp_offset` before reaching the repositories.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// `?title=` substring filter.
#[derive(Debug, Deserialize)]
pub struct TitleParams {
    pub title: String,
}

/// `?name=` filter (exact for stars, substring for directors of movies).
#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: String,
}

/// `?suffix=` name-ending filter.
#[derive(Debug, Deserialize)]
pub struct SuffixParams {
    pub suffix: String,
}

/// `?min=&max=` release-year bounds. At least one is required.
#[derive(Debug, Deserialize)]
pub struct YearRangeParams {
    pub min: Option<Year>,
    pub max: Option<Year>,
}

/// `?min_count=` threshold for grouped statistics.
#[derive(Debug, Deserialize)]
pub struct MinCountParams {
    pub min_count: Option<i64>,
}
