#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use recipecrate::{
    AppState, app,
    database,
    import::{import_recipes, parse_recipes},
};
use sea_orm::{Database, DatabaseConnection, DbErr};
use serde_json::{Value, json};
use std::path::PathBuf;
use tower::ServiceExt;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    database::connect("sqlite::memory:").await
}

/// A connection with no schema, so every query fails.
pub async fn setup_broken_db() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}

pub fn setup_test_app(db: DatabaseConnection) -> Router {
    setup_test_app_with_source(db, "data/does-not-exist.json")
}

pub fn setup_test_app_with_source(db: DatabaseConnection, data_path: impl Into<PathBuf>) -> Router {
    app(AppState::new(db, data_path))
}

/// Six recipes. Sorted by rating (ties by insertion order, nulls last) the
/// ids are 1, 4, 2, 6, 3, 5.
pub fn recipe_fixture() -> Value {
    json!({
        "0": {
            "title": "Chocolate Cake Deluxe",
            "cuisine": "French",
            "rating": 4.8,
            "prep_time": 20,
            "cook_time": 40,
            "total_time": 60,
            "description": "Rich layered cake",
            "serves": "8 servings",
            "URL": "https://example.com/cake",
            "nutrients": { "calories": "389 kcal", "fatContent": "21 g" }
        },
        "1": {
            "title": "Quick Thai Curry",
            "cuisine": "Thai",
            "rating": 4.2,
            "total_time": 30,
            "nutrients": { "calories": "520 kcal" }
        },
        "2": {
            "title": "Carrot cake",
            "cuisine": "American",
            "rating": 3.9,
            "total_time": 90,
            "nutrients": { "calories": "unknown" }
        },
        "3": {
            "title": "Pad Thai",
            "cuisine": "Thai",
            "rating": 4.8,
            "total_time": 25,
            "nutrients": { "calories": "410 kcal" }
        },
        "4": {
            "title": "Plain Rice",
            "cuisine": "thai",
            "rating": "not-a-number",
            "total_time": 20,
            "nutrients": { "calories": "200 kcal" }
        },
        "5": {
            "title": "100% Rye_Bread",
            "cuisine": "German",
            "rating": 4,
            "total_time": 240,
            "nutrients": { "calories": "150 kcal" }
        }
    })
}

pub const SORTED_TITLES: [&str; 6] = [
    "Chocolate Cake Deluxe",
    "Pad Thai",
    "Quick Thai Curry",
    "100% Rye_Bread",
    "Carrot cake",
    "Plain Rice",
];

pub async fn seed(db: &DatabaseConnection, records: &Value) -> u64 {
    let recipes = parse_recipes(&records.to_string()).expect("fixture should parse");
    import_recipes(db, recipes).await.expect("fixture should insert")
}

pub async fn seeded_app() -> Router {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed(&db, &recipe_fixture()).await;
    setup_test_app(db)
}

/// Build a query string, percent-encoding every key and value.
pub fn query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                url_escape::encode_component(k),
                url_escape::encode_component(v)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri).await
}

pub fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("response should carry a data array")
        .iter()
        .map(|r| r["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
