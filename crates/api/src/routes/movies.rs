//! Route definitions for movies, their director and their cast.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /                  -> list_movies
/// POST   /                  -> create_movie
/// GET    /by-title          -> find_by_title
/// GET    /by-year           -> find_by_year_range
/// GET    /by-director       -> find_by_director_name
/// GET    /by-actor          -> find_by_actor_suffix
/// GET    /stats/by-year     -> count_by_year
/// GET    /{id}              -> get_movie
/// PUT    /{id}              -> update_movie
/// DELETE /{id}              -> delete_movie
/// GET    /{id}/director     -> get_director
/// PUT    /{id}/director     -> set_director
/// POST   /{id}/actors       -> append_actor
/// PUT    /{id}/actors       -> replace_actors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/by-title", get(movies::find_by_title))
        .route("/by-year", get(movies::find_by_year_range))
        .route("/by-director", get(movies::find_by_director_name))
        .route("/by-actor", get(movies::find_by_actor_suffix))
        .route("/stats/by-year", get(movies::count_by_year))
        .route(
            "/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/{id}/director",
            get(movies::get_director).put(movies::set_director),
        )
        .route(
            "/{id}/actors",
            axum::routing::post(movies::append_actor).put(movies::replace_actors),
        )
}
