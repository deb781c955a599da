//! HTTP-level integration tests for the movie endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_movie, create_star, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Movie CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/movies",
        serde_json::json!({"title": "Alien", "year": 1979, "duration": 117}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Alien");
    assert_eq!(json["data"]["year"], 1979);
    assert_eq!(json["data"]["duration"], 117);
    assert!(json["data"]["director_id"].is_null());
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_with_empty_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/movies",
        serde_json::json!({"title": "", "year": 2000}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_movie_includes_director_and_cast(pool: PgPool) {
    let movie_id = create_movie(&pool, "Heat", 1995, Some(170)).await;
    let director = create_star(&pool, "Michael Mann", None).await;
    let actor = create_star(&pool, "Al Pacino", Some("1940-04-25")).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/director"),
        serde_json::json!({"star_id": director}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/movies/{movie_id}/actors"),
        serde_json::json!({"star_id": actor}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{movie_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Heat");
    assert_eq!(json["data"]["director_id"], director);
    assert_eq!(json["data"]["director"]["name"], "Michael Mann");
    assert_eq!(json["data"]["actors"][0]["name"], "Al Pacino");
    assert_eq!(json["data"]["actors"][0]["birthdate"], "1940-04-25");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_movie(pool: PgPool) {
    let id = create_movie(&pool, "Original", 2001, Some(90)).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/movies/{id}"),
        serde_json::json!({"title": "Renamed", "year": 2002}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Renamed");
    assert_eq!(json["data"]["year"], 2002);
    assert!(json["data"]["duration"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/movies/999999",
        serde_json::json!({"title": "Ghost", "year": 2000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_movie_returns_snapshot(pool: PgPool) {
    let id = create_movie(&pool, "Short Lived", 2010, None).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Short Lived");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_paginates(pool: PgPool) {
    for i in 0..5 {
        create_movie(&pool, &format!("Movie {i}"), 2000 + i, None).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies?offset=1&limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Movie 1", "Movie 2"]);
}

// ---------------------------------------------------------------------------
// Searches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_title_newest_first(pool: PgPool) {
    create_movie(&pool, "Star Wars", 1977, Some(121)).await;
    create_movie(&pool, "Star Trek", 2009, Some(127)).await;
    create_movie(&pool, "Alien", 1979, Some(117)).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/by-title?title=Star").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["title"], "Star Trek");
    assert_eq!(data[1]["title"], "Star Wars");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_year_range_directions(pool: PgPool) {
    create_movie(&pool, "A", 1990, None).await;
    create_movie(&pool, "B", 2000, None).await;
    create_movie(&pool, "C", 2010, None).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/movies/by-year?min=2000").await).await;
    let years: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, [2000, 2010]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/movies/by-year?max=2000").await).await;
    let years: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, [2000, 1990]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/movies/by-year?min=1995&max=2010").await).await;
    let years: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, [2000, 2010]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_year_range_without_bounds_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/by-year").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "AMBIGUOUS_FILTER");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_director_and_actor(pool: PgPool) {
    let movie_id = create_movie(&pool, "Gattaca", 1997, Some(106)).await;
    let director = create_star(&pool, "Andrew Niccol", None).await;
    let smith = create_star(&pool, "Will Smith", None).await;
    let smithson = create_star(&pool, "Ann Smithson", None).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/director"),
        serde_json::json!({"star_id": director}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/actors"),
        serde_json::json!({"star_ids": [smith, smithson]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/movies/by-director?name=Niccol").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Gattaca");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/movies/by-actor?suffix=Smith").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/movies/by-actor?suffix=Jones").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Director and cast
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_director_of_movie_without_director_returns_404(pool: PgPool) {
    let movie_id = create_movie(&pool, "Orphan", 2009, None).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/movies/{movie_id}/director")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_DIRECTOR");
    assert_eq!(json["error"], format!("Movie with id {movie_id} has no director"));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/999999/director").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_director_returns_assigned_star(pool: PgPool) {
    let movie_id = create_movie(&pool, "Blade Runner", 1982, Some(117)).await;
    let star_id = create_star(&pool, "Ridley Scott", Some("1937-11-30")).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/director"),
        serde_json::json!({"star_id": star_id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{movie_id}/director")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], star_id);
    assert_eq!(json["data"]["name"], "Ridley Scott");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_director_reports_which_entity_is_missing(pool: PgPool) {
    let movie_id = create_movie(&pool, "Memento", 2000, Some(113)).await;
    let star_id = create_star(&pool, "Christopher Nolan", None).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/director"),
        serde_json::json!({"star_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Star with id 999999 not found");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/movies/999999/director",
        serde_json::json!({"star_id": star_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Movie with id 999999 not found");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/director"),
        serde_json::json!({"star_id": star_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["director"]["id"], star_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_append_actor_twice_keeps_single_entry(pool: PgPool) {
    let movie_id = create_movie(&pool, "Se7en", 1995, Some(127)).await;
    let star_id = create_star(&pool, "Morgan Freeman", None).await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/movies/{movie_id}/actors"),
            serde_json::json!({"star_id": star_id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["actors"].as_array().unwrap().len(), 1);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_actors_ignores_unknown_ids(pool: PgPool) {
    let movie_id = create_movie(&pool, "Ocean's Eleven", 2001, Some(116)).await;
    let clooney = create_star(&pool, "George Clooney", None).await;
    let pitt = create_star(&pool, "Brad Pitt", None).await;
    let damon = create_star(&pool, "Matt Damon", None).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/actors"),
        serde_json::json!({"star_ids": [clooney, pitt]}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/movies/{movie_id}/actors"),
        serde_json::json!({"star_ids": [pitt, damon, 999999]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]["actors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Brad Pitt", "Matt Damon"]);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/movies/999999/actors",
        serde_json::json!({"star_ids": [pitt]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_by_year(pool: PgPool) {
    create_movie(&pool, "One", 2001, Some(100)).await;
    create_movie(&pool, "Two", 2001, Some(120)).await;
    create_movie(&pool, "Three", 2003, None).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/stats/by-year").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    assert_eq!(data[0]["year"], 2001);
    assert_eq!(data[0]["movie_count"], 2);
    assert_eq!(data[0]["min_duration"], 100);
    assert_eq!(data[0]["max_duration"], 120);
    assert_eq!(data[0]["avg_duration"], 110.0);

    assert_eq!(data[1]["year"], 2003);
    assert_eq!(data[1]["movie_count"], 1);
    assert!(data[1]["avg_duration"].is_null());
}
