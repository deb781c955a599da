//! Star (actor / director) entity model and DTOs.

use chrono::NaiveDate;
use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `stars` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Star {
    pub id: DbId,
    pub name: String,
    pub birthdate: Option<NaiveDate>,
}

/// DTO for creating a new star.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStar {
    #[validate(length(min = 1, max = 150, message = "name must be 1 to 150 characters"))]
    pub name: String,
    pub birthdate: Option<NaiveDate>,
}

/// DTO for a full replace of a star. Omitting `birthdate` clears it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStar {
    #[validate(length(min = 1, max = 150, message = "name must be 1 to 150 characters"))]
    pub name: String,
    pub birthdate: Option<NaiveDate>,
}
