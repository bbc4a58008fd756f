//! # recipecrate
//!
//! A recipe browsing API: a rating-sorted, paginated list, a filtered search
//! with comparison operators (`rating=>=4`, `calories=<=400`), a detail view
//! per recipe, and a bulk JSON import, on Axum and Sea-ORM.
//!
//! ```rust,ignore
//! let db = recipecrate::database::connect("sqlite::memory:").await?;
//! let app = recipecrate::app(AppState::new(db, "data/recipe.json"));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod database;
pub mod entity;
pub mod errors;
pub mod filtering;
pub mod import;
pub mod models;
pub mod pagination;
pub mod routes;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use errors::ApiError;
pub use routes::AppState;

/// The full application: routes, docs, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any)
        .max_age(Duration::from_secs(60 * 60));

    routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
