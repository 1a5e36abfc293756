//! Movie CRUD integration tests.

mod common;

use common::{TestApp, TEST_USER_ID};
use serde_json::json;

#[tokio::test]
async fn create_movie_succeeds() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({
                "title": "The Conversation",
                "release_year": 1974,
                "synopsis": "A surveillance expert has a crisis of conscience."
            }),
        )
        .await;
    assert_eq!(response.status(), 201);

    let movie: serde_json::Value = response.json().await.unwrap();
    assert_eq!(movie["title"], "The Conversation");
    assert_eq!(movie["release_year"], 1974);
    assert!(movie["id"].as_str().is_some());
}

#[tokio::test]
async fn create_movie_rejects_invalid_payload() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "", "release_year": 1974}),
        )
        .await;
    assert_eq!(response.status(), 422);

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "Metropolis", "release_year": 1503}),
        )
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn get_movie_returns_created_movie() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "Stalker", "release_year": 1979}),
        )
        .await;
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/movies/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 200);
    let movie: serde_json::Value = response.json().await.unwrap();
    assert_eq!(movie["title"], "Stalker");
}

#[tokio::test]
async fn get_missing_movie_returns_404() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .get(
            "/movies/00000000-0000-0000-0000-000000000000",
            TEST_USER_ID,
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn update_movie_is_partial() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "Alien", "release_year": 1978}),
        )
        .await;
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app
        .put(
            &format!("/movies/{}", id),
            TEST_USER_ID,
            &json!({"release_year": 1979}),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["release_year"], 1979);
    assert_eq!(updated["title"], "Alien");
}

#[tokio::test]
async fn delete_movie_then_404() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "Ran", "release_year": 1985}),
        )
        .await;
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app.delete(&format!("/movies/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 204);

    let response = app.get(&format!("/movies/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 404);

    let response = app.delete(&format!("/movies/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn list_movies_paginates_newest_first() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    for (title, year) in [("A", 2000), ("B", 2001), ("C", 2002)] {
        let response = app
            .post(
                "/movies",
                TEST_USER_ID,
                &json!({"title": title, "release_year": year}),
            )
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = app
        .get("/movies?page=1&page_size=2", TEST_USER_ID)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 3);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["title"], "C");

    let response = app
        .get("/movies?page=2&page_size=2", TEST_USER_ID)
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["title"], "A");
}

#[tokio::test]
async fn movie_with_unknown_genre_is_rejected() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({
                "title": "Chinatown",
                "release_year": 1974,
                "genre_id": "11111111-1111-1111-1111-111111111111"
            }),
        )
        .await;
    assert_eq!(response.status(), 400);
}
