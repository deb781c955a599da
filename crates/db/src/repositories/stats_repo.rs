//! Grouped statistics over movies, directors and cast membership.

use sqlx::PgConnection;

use crate::models::stats::{ActorStats, DirectorStats, MovieYearStats};
use crate::repositories::star_repo::STAR_COLUMNS;

/// Provides the aggregation queries.
pub struct StatsRepo;

impl StatsRepo {
    /// Movie count and duration min/max/avg per release year, ascending.
    pub async fn count_by_year(conn: &mut PgConnection) -> Result<Vec<MovieYearStats>, sqlx::Error> {
        sqlx::query_as::<_, MovieYearStats>(
            "SELECT \
                year, \
                COUNT(*)::BIGINT AS movie_count, \
                MIN(duration) AS min_duration, \
                MAX(duration) AS max_duration, \
                AVG(duration)::FLOAT8 AS avg_duration \
             FROM movies \
             GROUP BY year \
             ORDER BY year",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Directors with at least `min_count` movies, most prolific first.
    pub async fn by_director(
        conn: &mut PgConnection,
        min_count: i64,
    ) -> Result<Vec<DirectorStats>, sqlx::Error> {
        let query = format!(
            "SELECT {STAR_COLUMNS}, COUNT(m.id)::BIGINT AS movie_count \
             FROM movies m \
             JOIN stars s ON s.id = m.director_id \
             GROUP BY s.id \
             HAVING COUNT(m.id) >= $1 \
             ORDER BY movie_count DESC, s.id"
        );
        sqlx::query_as::<_, DirectorStats>(&query)
            .bind(min_count)
            .fetch_all(&mut *conn)
            .await
    }

    /// Actors with at least `min_count` movies, most prolific first, with
    /// the years of their first and last movie.
    pub async fn by_actor(
        conn: &mut PgConnection,
        min_count: i64,
    ) -> Result<Vec<ActorStats>, sqlx::Error> {
        let query = format!(
            "SELECT {STAR_COLUMNS}, \
                COUNT(m.id)::BIGINT AS movie_count, \
                MIN(m.year) AS year_first_movie, \
                MAX(m.year) AS year_last_movie \
             FROM play p \
             JOIN stars s ON s.id = p.star_id \
             JOIN movies m ON m.id = p.movie_id \
             GROUP BY s.id \
             HAVING COUNT(m.id) >= $1 \
             ORDER BY movie_count DESC, s.id"
        );
        sqlx::query_as::<_, ActorStats>(&query)
            .bind(min_count)
            .fetch_all(&mut *conn)
            .await
    }
}
