//! Handlers for stars, director lookups and per-person statistics.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::search::{
    clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, DEFAULT_STATS_MIN_COUNT, MAX_LIST_LIMIT,
};
use cinema_core::types::DbId;
use cinema_db::models::star::{CreateStar, UpdateStar};
use cinema_db::repositories::{StarRepo, StatsRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::query::{MinCountParams, NameParams, PaginationParams, SuffixParams, TitleParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/stars
pub async fn create_star(
    State(state): State<AppState>,
    Json(input): Json<CreateStar>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let star = StarRepo::create(&mut session, &input).await?;
    session.commit().await?;

    tracing::info!(star_id = star.id, name = %star.name, "Star created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: star })))
}

/// GET /api/v1/stars?offset=&limit=
pub async fn list_stars(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stars = StarRepo::list(&mut session, offset, limit).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stars }))
}

/// GET /api/v1/stars/{id}
pub async fn get_star(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let star = StarRepo::find_by_id(&mut session, id)
        .await?
        .ok_or(CoreError::star_not_found(id))?;
    session.commit().await?;

    Ok(Json(DataResponse { data: star }))
}

/// PUT /api/v1/stars/{id}
pub async fn update_star(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStar>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let star = StarRepo::update(&mut session, id, &input)
        .await?
        .ok_or(CoreError::star_not_found(id))?;
    session.commit().await?;

    tracing::info!(star_id = id, "Star updated");

    Ok(Json(DataResponse { data: star }))
}

/// DELETE /api/v1/stars/{id}
///
/// Removes the star from every cast and clears it as director wherever it
/// directed.
pub async fn delete_star(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let star = StarRepo::delete(&mut session, id)
        .await?
        .ok_or(CoreError::star_not_found(id))?;
    session.commit().await?;

    tracing::info!(star_id = id, "Star deleted");

    Ok(Json(DataResponse { data: star }))
}

/// GET /api/v1/stars/by-name?name=
pub async fn find_by_name(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stars = StarRepo::find_by_name(&mut session, &params.name).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stars }))
}

/// GET /api/v1/stars/by-name-suffix?suffix=
pub async fn find_by_name_suffix(
    State(state): State<AppState>,
    Query(params): Query<SuffixParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stars = StarRepo::find_by_name_suffix(&mut session, &params.suffix).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stars }))
}

/// GET /api/v1/stars/by-birth-year/{year}
pub async fn find_by_birth_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stars = StarRepo::find_by_birth_year(&mut session, year).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stars }))
}

/// GET /api/v1/stars/directors/by-movie-title?title=
///
/// One entry per matching movie that has a director.
pub async fn directors_by_movie_title(
    State(state): State<AppState>,
    Query(params): Query<TitleParams>,
) -> AppResult<impl IntoResponse> {
    let mut session = cinema_db::begin_session(&state.pool).await?;
    let directors = StarRepo::directors_by_movie_title(&mut session, &params.title).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: directors }))
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/stars/stats/directors?min_count=
pub async fn stats_by_director(
    State(state): State<AppState>,
    Query(params): Query<MinCountParams>,
) -> AppResult<impl IntoResponse> {
    let min_count = params.min_count.unwrap_or(DEFAULT_STATS_MIN_COUNT);

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stats = StatsRepo::by_director(&mut session, min_count).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/stars/stats/actors?min_count=
pub async fn stats_by_actor(
    State(state): State<AppState>,
    Query(params): Query<MinCountParams>,
) -> AppResult<impl IntoResponse> {
    let min_count = params.min_count.unwrap_or(DEFAULT_STATS_MIN_COUNT);

    let mut session = cinema_db::begin_session(&state.pool).await?;
    let stats = StatsRepo::by_actor(&mut session, min_count).await?;
    session.commit().await?;

    Ok(Json(DataResponse { data: stats }))
}
