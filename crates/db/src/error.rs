use cinema_core::error::CoreError;

/// Failure of a repository operation that can end in a business result.
///
/// Lookups that only ever miss return `Result<Option<T>, sqlx::Error>`;
/// operations with several distinct not-found outcomes (or filter errors)
/// return this instead.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
