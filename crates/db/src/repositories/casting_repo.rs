//! Relationship operations between movies and stars.
//!
//! Covers the many-to-one director reference on `movies` and the
//! many-to-many cast stored in `play`. Every operation runs inside the
//! caller's session, so a failure part-way leaves nothing committed.

use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use sqlx::PgConnection;

use crate::error::RepoResult;
use crate::models::movie::{Movie, MovieDetail};
use crate::models::star::Star;
use crate::repositories::movie_repo::MOVIE_COLUMNS;
use crate::repositories::star_repo::STAR_COLUMNS;
use crate::repositories::{MovieRepo, StarRepo};

/// Provides director assignment and cast management.
pub struct CastingRepo;

impl CastingRepo {
    /// Make `star_id` the director of `movie_id`.
    ///
    /// The movie is checked first: when both are missing the error names
    /// the movie.
    pub async fn set_director(
        conn: &mut PgConnection,
        movie_id: DbId,
        star_id: DbId,
    ) -> RepoResult<Movie> {
        Self::require_pair(conn, movie_id, star_id).await?;

        let query = format!(
            "UPDATE movies m SET director_id = $2 WHERE m.id = $1 RETURNING {MOVIE_COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(movie_id)
            .bind(star_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(movie)
    }

    /// Add `star_id` to the cast of `movie_id`.
    ///
    /// Appending a star already in the cast leaves the cast unchanged.
    pub async fn append_actor(
        conn: &mut PgConnection,
        movie_id: DbId,
        star_id: DbId,
    ) -> RepoResult<Movie> {
        let movie = Self::require_pair(conn, movie_id, star_id).await?;

        let result = sqlx::query(
            "INSERT INTO play (movie_id, star_id) \
             VALUES ($1, $2) \
             ON CONFLICT (movie_id, star_id) DO NOTHING",
        )
        .bind(movie_id)
        .bind(star_id)
        .execute(&mut *conn)
        .await?;

        tracing::debug!(
            movie_id,
            star_id,
            inserted = result.rows_affected(),
            "Actor appended to cast"
        );
        Ok(movie)
    }

    /// Replace the whole cast of `movie_id` with the stars in `star_ids`.
    ///
    /// Ids that name no existing star are silently dropped. Applied as a
    /// set difference: pairings outside the new set are deleted, missing
    /// ones inserted, retained ones (and their roles) left alone.
    pub async fn replace_actors(
        conn: &mut PgConnection,
        movie_id: DbId,
        star_ids: &[DbId],
    ) -> RepoResult<Movie> {
        let movie = MovieRepo::find_by_id(conn, movie_id)
            .await?
            .ok_or(CoreError::movie_not_found(movie_id))?;

        let removed = sqlx::query(
            "DELETE FROM play \
             WHERE movie_id = $1 AND NOT (star_id = ANY($2))",
        )
        .bind(movie_id)
        .bind(star_ids)
        .execute(&mut *conn)
        .await?;

        let added = sqlx::query(
            "INSERT INTO play (movie_id, star_id) \
             SELECT $1, s.id FROM stars s WHERE s.id = ANY($2) \
             ON CONFLICT (movie_id, star_id) DO NOTHING",
        )
        .bind(movie_id)
        .bind(star_ids)
        .execute(&mut *conn)
        .await?;

        tracing::debug!(
            movie_id,
            requested = star_ids.len(),
            removed = removed.rows_affected(),
            added = added.rows_affected(),
            "Cast replaced"
        );
        Ok(movie)
    }

    /// The cast of a movie, sorted by name.
    pub async fn actors_of(conn: &mut PgConnection, movie_id: DbId) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!(
            "SELECT {STAR_COLUMNS} \
             FROM play p \
             JOIN stars s ON s.id = p.star_id \
             WHERE p.movie_id = $1 \
             ORDER BY s.name, s.id"
        );
        sqlx::query_as::<_, Star>(&query)
            .bind(movie_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Resolve the director and cast of an already loaded movie.
    pub async fn detail(conn: &mut PgConnection, movie: Movie) -> Result<MovieDetail, sqlx::Error> {
        let director = match movie.director_id {
            Some(director_id) => StarRepo::find_by_id(conn, director_id).await?,
            None => None,
        };
        let actors = Self::actors_of(conn, movie.id).await?;
        Ok(MovieDetail {
            movie,
            director,
            actors,
        })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Load the movie and check the star exists, failing with the
    /// not-found kind of whichever is missing (movie first).
    async fn require_pair(
        conn: &mut PgConnection,
        movie_id: DbId,
        star_id: DbId,
    ) -> RepoResult<Movie> {
        let movie = MovieRepo::find_by_id(conn, movie_id).await?;
        let star = StarRepo::find_by_id(conn, star_id).await?;

        match (movie, star) {
            (None, _) => Err(CoreError::movie_not_found(movie_id).into()),
            (Some(_), None) => Err(CoreError::star_not_found(star_id).into()),
            (Some(movie), Some(_)) => Ok(movie),
        }
    }
}
