//! Actor CRUD integration tests.

mod common;

use common::{TestApp, TEST_USER_ID};
use serde_json::json;

#[tokio::test]
async fn actor_crud_roundtrip() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post(
            "/actors",
            TEST_USER_ID,
            &json!({
                "name": "Gene Hackman",
                "birth_date": "1930-01-30",
                "bio": "American actor."
            }),
        )
        .await;
    assert_eq!(response.status(), 201);
    let actor: serde_json::Value = response.json().await.unwrap();
    let id = actor["id"].as_str().unwrap().to_string();
    assert_eq!(actor["name"], "Gene Hackman");

    let response = app.get(&format!("/actors/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 200);

    let response = app
        .put(
            &format!("/actors/{}", id),
            TEST_USER_ID,
            &json!({"bio": "Two-time Academy Award winner."}),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["bio"], "Two-time Academy Award winner.");
    assert_eq!(updated["name"], "Gene Hackman");

    let response = app.delete(&format!("/actors/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 204);

    let response = app.get(&format!("/actors/{}", id), TEST_USER_ID).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn create_actor_requires_name() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app.post("/actors", TEST_USER_ID, &json!({"name": ""})).await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn list_actors_tolerates_huge_page_numbers() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    let response = app
        .post("/actors", TEST_USER_ID, &json!({"name": "Max von Sydow"}))
        .await;
    assert_eq!(response.status(), 201);

    let response = app
        .get("/actors?page=18446744073709551615&page_size=100", TEST_USER_ID)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_actors_reports_totals() {
    let app = TestApp::spawn().await;
    app.grant_all(TEST_USER_ID).await;

    for name in ["Toshiro Mifune", "Setsuko Hara"] {
        let response = app
            .post("/actors", TEST_USER_ID, &json!({"name": name}))
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = app.get("/actors", TEST_USER_ID).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 2);
    assert_eq!(body["page"], 1);
}
