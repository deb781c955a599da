//! Aggregated statistics rows.

use cinema_core::types::{Minutes, Year};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::star::Star;

/// Movie count and duration spread for one release year.
///
/// Duration aggregates ignore movies without a duration and are `None` when
/// no movie of the year has one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieYearStats {
    pub year: Year,
    pub movie_count: i64,
    pub min_duration: Option<Minutes>,
    pub max_duration: Option<Minutes>,
    pub avg_duration: Option<f64>,
}

/// Number of movies directed by one star.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DirectorStats {
    #[sqlx(flatten)]
    pub director: Star,
    pub movie_count: i64,
}

/// Filmography span of one actor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorStats {
    #[sqlx(flatten)]
    pub actor: Star,
    pub movie_count: i64,
    pub year_first_movie: Year,
    pub year_last_movie: Year,
}
