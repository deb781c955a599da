//! Movie entity model and DTOs.

use cinema_core::types::{DbId, Minutes, Year};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::star::Star;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: Year,
    pub duration: Option<Minutes>,
    pub director_id: Option<DbId>,
}

/// A movie enriched with its resolved director and cast.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub director: Option<Star>,
    pub actors: Vec<Star>,
}

/// DTO for creating a new movie. Director and cast start empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 250, message = "title must be 1 to 250 characters"))]
    pub title: String,
    pub year: Year,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: Option<Minutes>,
}

/// DTO for a full replace of a movie's scalar fields.
///
/// Omitting `duration` clears it. Director and cast are never touched.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 250, message = "title must be 1 to 250 characters"))]
    pub title: String,
    pub year: Year,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: Option<Minutes>,
}

/// Request body for assigning a director.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDirector {
    pub star_id: DbId,
}

/// Request body for appending one actor to a cast.
#[derive(Debug, Clone, Deserialize)]
pub struct AddActor {
    pub star_id: DbId,
}

/// Request body for replacing a whole cast. Unknown ids are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceActors {
    pub star_ids: Vec<DbId>,
}
