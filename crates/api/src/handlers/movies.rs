//! Handlers for movies, their director and their cast.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use cinema_core::types::DbId;
use cinema_db::models::movie::{AddActor, CreateMovie, ReplaceActors, SetDirector, UpdateMovie};
use cinema_db::repositories::{CastingRepo, MovieRepo, StarRepo, StatsRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::query::{NameParams, PaginationParams, SuffixParams, TitleParams, YearRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/movies
///
/// Create a movie without director or cast.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = MovieRepo::create(&mut session, &input).await?;
    session.commit().await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// GET /api/v1/movies?offset=&limit=
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movies = MovieRepo::list(&mut session, offset, limit).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
///
/// Returns the movie together with its director and cast.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = MovieRepo::find_by_id(&mut session, id)
        .await?
        .ok_or(CoreError::movie_not_found(id))?;
    let detail = CastingRepo::detail(&mut session, movie).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/movies/{id}
///
/// Replaces title, year and duration. Director and cast are kept.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = MovieRepo::update(&mut session, id, &input)
        .await?
        .ok_or(CoreError::movie_not_found(id))?;
    session.commit().await?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
///
/// Returns the deleted row. Cast entries go with it.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = MovieRepo::delete(&mut session, id)
        .await?
        .ok_or(CoreError::movie_not_found(id))?;
    session.commit().await?;

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(Json(DataResponse { data: movie }))
}

// ---------------------------------------------------------------------------
// Searches
// ---------------------------------------------------------------------------

/// GET /api/v1/movies/by-title?title=
pub async fn find_by_title(
    State(state): State<AppState>,
    Query(params): Query<TitleParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movies = MovieRepo::find_by_title(&mut session, &params.title).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/by-year?min=&max=
///
/// 400 `AMBIGUOUS_FILTER` when neither bound is given.
pub async fn find_by_year_range(
    State(state): State<AppState>,
    Query(params): Query<YearRangeParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movies = MovieRepo::find_by_year_range(&mut session, params.min, params.max).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/by-director?name=
pub async fn find_by_director_name(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movies = MovieRepo::find_by_director_name(&mut session, &params.name).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/by-actor?suffix=
pub async fn find_by_actor_suffix(
    State(state): State<AppState>,
    Query(params): Query<SuffixParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movies = MovieRepo::find_by_actor_name_suffix(&mut session, &params.suffix).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/stats/by-year
pub async fn count_by_year(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stats = StatsRepo::count_by_year(&mut session).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stats }))
}

// ---------------------------------------------------------------------------
// Director and cast
// ---------------------------------------------------------------------------

/// GET /api/v1/movies/{id}/director
///
/// 404 when the movie is missing, and a distinct 404 (`NO_DIRECTOR`) when
/// the movie exists without a director.
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let director = StarRepo::director_of(&mut session, id).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: director }))
}

/// PUT /api/v1/movies/{id}/director
pub async fn set_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetDirector>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = CastingRepo::set_director(&mut session, id, input.star_id).await?;
    let detail = CastingRepo::detail(&mut session, movie).await?;
    session.commit().await?;

    tracing::info!(movie_id = id, star_id = input.star_id, "Director set");

    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/movies/{id}/actors
///
/// Adding a star already in the cast is a no-op.
pub async fn append_actor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddActor>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = CastingRepo::append_actor(&mut session, id, input.star_id).await?;
    let detail = CastingRepo::detail(&mut session, movie).await?;
    session.commit().await?;

    tracing::info!(movie_id = id, star_id = input.star_id, "Actor added");

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/movies/{id}/actors
///
/// Ids naming no existing star are ignored.
pub async fn replace_actors(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceActors>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let movie = CastingRepo::replace_actors(&mut session, id, &input.star_ids).await?;
    let detail = CastingRepo::detail(&mut session, movie).await?;
    session.commit().await?;

    tracing::info!(
        movie_id = id,
        requested = input.star_ids.len(),
        cast_size = detail.actors.len(),
        "Cast replaced",
    );

    Ok(Json(DataResponse { data: detail }))
}
