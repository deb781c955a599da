//! Repository for the `stars` table.

use chrono::NaiveDate;
use cinema_core::error::CoreError;
use cinema_core::search::{contains_pattern, suffix_pattern};
use cinema_core::types::DbId;
use sqlx::PgConnection;

use crate::error::RepoResult;
use crate::models::star::{CreateStar, Star, UpdateStar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birthdate";

/// Column list qualified with the `s` alias, for JOIN queries.
pub(crate) const STAR_COLUMNS: &str = "s.id, s.name, s.birthdate";

/// Provides CRUD, filtered lookups and director resolution for stars.
pub struct StarRepo;

impl StarRepo {
    /// Insert a new star, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateStar) -> Result<Star, sqlx::Error> {
        let query = format!(
            "INSERT INTO stars (name, birthdate) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Star>(&query)
            .bind(&input.name)
            .bind(input.birthdate)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a star by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Star>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stars WHERE id = $1");
        sqlx::query_as::<_, Star>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List one page of stars in storage order.
    pub async fn list(
        conn: &mut PgConnection,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stars ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Star>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
    }

    /// Stars named exactly `name`, oldest first (unknown birthdates last).
    pub async fn find_by_name(conn: &mut PgConnection, name: &str) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stars WHERE name = $1 ORDER BY birthdate, id");
        sqlx::query_as::<_, Star>(&query)
            .bind(name)
            .fetch_all(&mut *conn)
            .await
    }

    /// Stars whose name ends with `text`, oldest first.
    pub async fn find_by_name_suffix(
        conn: &mut PgConnection,
        text: &str,
    ) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stars WHERE name LIKE $1 ORDER BY birthdate, id");
        sqlx::query_as::<_, Star>(&query)
            .bind(suffix_pattern(text))
            .fetch_all(&mut *conn)
            .await
    }

    /// Stars born in `year`, sorted by name.
    pub async fn find_by_birth_year(
        conn: &mut PgConnection,
        year: i32,
    ) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stars \
             WHERE EXTRACT(YEAR FROM birthdate)::INT = $1 \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Star>(&query)
            .bind(year)
            .fetch_all(&mut *conn)
            .await
    }

    /// Replace name and birthdate.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateStar,
    ) -> Result<Option<Star>, sqlx::Error> {
        let query = format!(
            "UPDATE stars SET name = $2, birthdate = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Star>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.birthdate)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Permanently delete a star, returning the row as it was.
    ///
    /// Cast rows are removed and movies directed by the star lose their
    /// director (`ON DELETE SET NULL`).
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<Option<Star>, sqlx::Error> {
        let query = format!("DELETE FROM stars WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Star>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Director lookups
    // -----------------------------------------------------------------------

    /// The director of a movie.
    ///
    /// Fails with `NotFound("Movie")` when the movie does not exist and with
    /// `NoDirector` when it exists without a director. One round trip: the
    /// movie row is always returned, the star columns are NULL when unset.
    pub async fn director_of(conn: &mut PgConnection, movie_id: DbId) -> RepoResult<Star> {
        let query = format!(
            "SELECT {STAR_COLUMNS} \
             FROM movies m \
             LEFT JOIN stars s ON s.id = m.director_id \
             WHERE m.id = $1"
        );
        let row = sqlx::query_as::<_, (Option<DbId>, Option<String>, Option<NaiveDate>)>(&query)
            .bind(movie_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(CoreError::movie_not_found(movie_id))?;

        match row {
            (Some(id), Some(name), birthdate) => Ok(Star {
                id,
                name,
                birthdate,
            }),
            _ => Err(CoreError::NoDirector { movie_id }.into()),
        }
    }

    /// Directors of the movies whose title contains `text`.
    ///
    /// One entry per matching movie: a director of several matching movies
    /// appears several times. Movies without a director are skipped.
    pub async fn directors_by_movie_title(
        conn: &mut PgConnection,
        text: &str,
    ) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!(
            "SELECT {STAR_COLUMNS} \
             FROM movies m \
             JOIN stars s ON s.id = m.director_id \
             WHERE m.title LIKE $1 \
             ORDER BY m.id"
        );
        sqlx::query_as::<_, Star>(&query)
            .bind(contains_pattern(text))
            .fetch_all(&mut *conn)
            .await
    }
}
