use crate::types::DbId;

/// Entity label used in not-found errors for movies.
pub const MOVIE: &str = "Movie";

/// Entity label used in not-found errors for stars.
pub const STAR: &str = "Star";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A filter query was issued without any of its bounds.
    #[error("Ambiguous filter: {0}")]
    AmbiguousFilter(String),

    /// The movie exists but no director is assigned to it.
    #[error("Movie with id {movie_id} has no director")]
    NoDirector { movie_id: DbId },
}

impl CoreError {
    pub fn movie_not_found(id: DbId) -> Self {
        CoreError::NotFound { entity: MOVIE, id }
    }

    pub fn star_not_found(id: DbId) -> Self {
        CoreError::NotFound { entity: STAR, id }
    }
}
