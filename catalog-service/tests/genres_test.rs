//! Genre CRUD integration tests.

mod common;

use common::{TestApp, TEST_USER_ID};
use serde_json::json;

#[tokio::test]
async fn genre_crud_roundtrip() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post("/genres", TEST_USER_ID, &json!({"name": "Thriller"}))
        .await;
    assert_eq!(response.status(), 201);
    let genre: serde_json::Value = response.json().await.unwrap();
    let id = genre["id"].as_str().unwrap().to_string();

    let response = app
        .put(
            &format!("/genres/{}", id),
            TEST_USER_ID,
            &json!({"name": "Psychological Thriller"}),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "Psychological Thriller");

    let response = app.delete(&format!("/genres/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn duplicate_genre_name_conflicts() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post("/genres", TEST_USER_ID, &json!({"name": "Horror"}))
        .await;
    assert_eq!(response.status(), 201);

    let response = app
        .post("/genres", TEST_USER_ID, &json!({"name": "Horror"}))
        .await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn deleting_genre_detaches_movies() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post("/genres", TEST_USER_ID, &json!({"name": "Sci-Fi"}))
        .await;
    let genre: serde_json::Value = response.json().await.unwrap();
    let genre_id = genre["id"].as_str().unwrap().to_string();

    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "Solaris", "release_year": 1972, "genre_id": genre_id}),
        )
        .await;
    assert_eq!(response.status(), 201);
    let movie: serde_json::Value = response.json().await.unwrap();
    let movie_id = movie["id"].as_str().unwrap().to_string();

    let response = app
        .delete(&format!("/genres/{}", genre_id), TEST_USER_ID)
        .await;
    assert_eq!(response.status(), 204);

    let response = app.get(&format!("/movies/{}", movie_id), TEST_USER_ID).await;
    assert_eq!(response.status(), 200);
    let movie: serde_json::Value = response.json().await.unwrap();
    assert!(movie["genre_id"].is_null());
}
