//! Route definitions for stars and the director/actor statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::stars;
use crate::state::AppState;

/// Star routes mounted at `/stars`.
///
/// ```text
/// GET    /                            -> list_stars
/// POST   /                            -> create_star
/// GET    /by-name                     -> find_by_name
/// GET    /by-name-suffix              -> find_by_name_suffix
/// GET    /by-birth-year/{year}        -> find_by_birth_year
/// GET    /directors/by-movie-title    -> directors_by_movie_title
/// GET    /stats/directors             -> stats_by_director
/// GET    /stats/actors                -> stats_by_actor
/// GET    /{id}                        -> get_star
/// PUT    /{id}                        -> update_star
/// DELETE /{id}                        -> delete_star
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stars::list_stars).post(stars::create_star))
        .route("/by-name", get(stars::find_by_name))
        .route("/by-name-suffix", get(stars::find_by_name_suffix))
        .route("/by-birth-year/{year}", get(stars::find_by_birth_year))
        .route(
            "/directors/by-movie-title",
            get(stars::directors_by_movie_title),
        )
        .route("/stats/directors", get(stars::stats_by_director))
        .route("/stats/actors", get(stars::stats_by_actor))
        .route(
            "/{id}",
            get(stars::get_star)
                .put(stars::update_star)
                .delete(stars::delete_star),
        )
}
