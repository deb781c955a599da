pub mod health;
pub mod movies;
pub mod stars;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                   list, create
/// /movies/by-title?title=                   title substring, newest first
/// /movies/by-year?min=&max=                 release-year range
/// /movies/by-director?name=                 director name substring
/// /movies/by-actor?suffix=                  actor name ending
/// /movies/stats/by-year                     count + duration stats per year
/// /movies/{id}                              get (with cast), update, delete
/// /movies/{id}/director                     get, set (PUT)
/// /movies/{id}/actors                       append one (POST), replace all (PUT)
///
/// /stars                                    list, create
/// /stars/by-name?name=                      exact name
/// /stars/by-name-suffix?suffix=             name ending
/// /stars/by-birth-year/{year}               born in year
/// /stars/directors/by-movie-title?title=    directors of matching movies
/// /stars/stats/directors?min_count=         movies per director
/// /stars/stats/actors?min_count=            movies per actor + career span
/// /stars/{id}                               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/stars", stars::router())
}
