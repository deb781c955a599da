//! Repository for the `movies` table.

use cinema_core::search::{contains_pattern, suffix_pattern, YearRange};
use cinema_core::types::{DbId, Year};
use sqlx::PgConnection;

use crate::error::RepoResult;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, year, duration, director_id";

/// Column list qualified with the `m` alias, for JOIN queries.
pub(crate) const MOVIE_COLUMNS: &str = "m.id, m.title, m.year, m.duration, m.director_id";

/// Provides CRUD and filtered lookups for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie with no director and an empty cast.
    pub async fn create(conn: &mut PgConnection, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, duration) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(input.duration)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(ref m) = movie {
            tracing::debug!(movie_id = m.id, title = %m.title, director_id = ?m.director_id, "Movie retrieved");
        }
        Ok(movie)
    }

    /// List one page of movies in storage order.
    pub async fn list(
        conn: &mut PgConnection,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
    }

    /// Movies whose title contains `text`, newest first.
    pub async fn find_by_title(conn: &mut PgConnection, text: &str) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE title LIKE $1 \
             ORDER BY year DESC, id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(contains_pattern(text))
            .fetch_all(&mut *conn)
            .await
    }

    /// Movies released within the given bounds (inclusive).
    ///
    /// Fails with `AmbiguousFilter` when both bounds are absent. A lower
    /// bound alone or a closed range sorts ascending by year; an upper bound
    /// alone sorts descending.
    pub async fn find_by_year_range(
        conn: &mut PgConnection,
        min: Option<Year>,
        max: Option<Year>,
    ) -> RepoResult<Vec<Movie>> {
        let range = YearRange::from_bounds(min, max)?;
        let direction = range.sort_direction();

        let movies = match range {
            YearRange::From(min) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies WHERE year >= $1 ORDER BY year {direction}, id"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(min)
                    .fetch_all(&mut *conn)
                    .await?
            }
            YearRange::Until(max) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies WHERE year <= $1 ORDER BY year {direction}, id"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(max)
                    .fetch_all(&mut *conn)
                    .await?
            }
            YearRange::Between(min, max) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies \
                     WHERE year >= $1 AND year <= $2 \
                     ORDER BY year {direction}, id"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(min)
                    .bind(max)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };
        Ok(movies)
    }

    /// Movies whose director's name contains `text`, oldest first.
    pub async fn find_by_director_name(
        conn: &mut PgConnection,
        text: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {MOVIE_COLUMNS} \
             FROM movies m \
             JOIN stars s ON s.id = m.director_id \
             WHERE s.name LIKE $1 \
             ORDER BY m.year, m.id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(contains_pattern(text))
            .fetch_all(&mut *conn)
            .await
    }

    /// Movies with at least one actor whose name ends with `text`, newest first.
    ///
    /// A movie is returned once even when several cast members match.
    pub async fn find_by_actor_name_suffix(
        conn: &mut PgConnection,
        text: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {MOVIE_COLUMNS} \
             FROM movies m \
             WHERE EXISTS ( \
                 SELECT 1 FROM play p \
                 JOIN stars s ON s.id = p.star_id \
                 WHERE p.movie_id = m.id AND s.name LIKE $1 \
             ) \
             ORDER BY m.year DESC, m.id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(suffix_pattern(text))
            .fetch_all(&mut *conn)
            .await
    }

    /// Replace title, year and duration. Director and cast are untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                title = $2, \
                year = $3, \
                duration = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.year)
            .bind(input.duration)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Permanently delete a movie, returning the row as it was.
    ///
    /// Cast rows in `play` go with it (`ON DELETE CASCADE`).
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("DELETE FROM movies WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
