//! Review CRUD integration tests.

mod common;

use common::{TestApp, TEST_USER_ID};
use serde_json::json;

async fn create_movie(app: &TestApp) -> String {
    let response = app
        .post(
            "/movies",
            TEST_USER_ID,
            &json!({"title": "Seven Samurai", "release_year": 1954}),
        )
        .await;
    assert_eq!(response.status(), 201);
    let movie: serde_json::Value = response.json().await.unwrap();
    movie["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn review_author_comes_from_the_principal() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;
    let movie_id = create_movie(&app).await;

    let response = app
        .post(
            "/reviews",
            TEST_USER_ID,
            &json!({"movie_id": movie_id, "rating": 5, "comment": "A landmark."}),
        )
        .await;
    assert_eq!(response.status(), 201);
    let review: serde_json::Value = response.json().await.unwrap();
    assert_eq!(review["author"], TEST_USER_ID);
    assert_eq!(review["rating"], 5);
}

#[tokio::test]
async fn review_rating_is_bounded() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;
    let movie_id = create_movie(&app).await;

    for rating in [0, 6] {
        let response = app
            .post(
                "/reviews",
                TEST_USER_ID,
                &json!({"movie_id": movie_id, "rating": rating}),
            )
            .await;
        assert_eq!(response.status(), 422, "rating {} should be rejected", rating);
    }
}

#[tokio::test]
async fn review_of_unknown_movie_is_rejected() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/reviews",
            TEST_USER_ID,
            &json!({
                "movie_id": "22222222-2222-2222-2222-222222222222",
                "rating": 3
            }),
        )
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn review_update_and_delete() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;
    let movie_id = create_movie(&app).await;

    let response = app
        .post(
            "/reviews",
            TEST_USER_ID,
            &json!({"movie_id": movie_id, "rating": 3}),
        )
        .await;
    let review: serde_json::Value = response.json().await.unwrap();
    let id = review["id"].as_str().unwrap().to_string();

    let response = app
        .put(
            &format!("/reviews/{}", id),
            TEST_USER_ID,
            &json!({"rating": 4, "comment": "Better on rewatch."}),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["rating"], 4);

    let response = app.delete(&format!("/reviews/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 204);

    let response = app.get(&format!("/reviews/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 404);
}
