use axum::{
    Json, Router,
    extract::{Path, Query, State},
};
use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    core::{RecipeQuery, get_one},
    errors::ApiError,
    import::{ImportError, import_from_path},
    models::{ImportSummary, ListParams, RecipePage, RecipeView, SearchParams, SearchResults},
    pagination::Pagination,
};

/// Shared, read-only request state. The connection pool is owned by the
/// caller and injected here.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub data_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, data_path: impl Into<PathBuf>) -> Self {
        Self {
            db,
            data_path: Arc::new(data_path.into()),
        }
    }
}

#[derive(OpenApi)]
#[openapi(info(title = "Recipe API", description = "Browse, search and import recipes"))]
struct ApiDoc;

/// List recipes sorted by rating, highest first.
#[utoipa::path(
    get,
    path = "/recipes",
    params(ListParams),
    responses(
        (status = 200, description = "One page of recipes", body = RecipePage),
        (status = 500, description = "Storage failure")
    ),
    tag = "recipes"
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<RecipePage>, ApiError> {
    let pagination = Pagination::from_params(params.page.as_deref(), params.limit.as_deref());
    let (total, data) = RecipeQuery::list(pagination).execute(&state.db).await?;
    Ok(Json(RecipePage {
        page: pagination.page,
        limit: pagination.limit,
        total,
        data,
    }))
}

/// Search recipes. Malformed comparison values are ignored.
#[utoipa::path(
    get,
    path = "/recipes/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes and their total count", body = SearchResults),
        (status = 500, description = "Storage failure")
    ),
    tag = "recipes"
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let (total, data) = RecipeQuery::search(&params).execute(&state.db).await?;
    Ok(Json(SearchResults { data, total }))
}

/// Fetch one recipe.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = RecipeView),
        (status = 404, description = "No recipe with this id"),
        (status = 500, description = "Storage failure")
    ),
    tag = "recipes"
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RecipeView>, ApiError> {
    get_one(&state.db, id)
        .await
        .map(Json)
        .map_err(|err| match ApiError::from(err) {
            ApiError::NotFound { resource, .. } => ApiError::not_found(resource, Some(id.to_string())),
            other => other,
        })
}

/// Import every recipe from the configured JSON source.
#[utoipa::path(
    post,
    path = "/import",
    responses(
        (status = 200, description = "Records inserted", body = ImportSummary),
        (status = 400, description = "Import source missing, invalid, or empty"),
        (status = 500, description = "Insert failed")
    ),
    tag = "import"
)]
pub async fn import_handler(
    State(state): State<AppState>,
) -> Result<Json<ImportSummary>, ImportError> {
    let inserted_count = import_from_path(&state.db, &state.data_path).await?;
    Ok(Json(ImportSummary {
        success: true,
        inserted_count,
    }))
}

/// API routes plus OpenAPI docs served at `/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_recipes))
        .routes(routes!(search_recipes))
        .routes(routes!(get_recipe))
        .routes(routes!(import_handler))
        .with_state(state)
        .split_for_parts();

    router.merge(Scalar::with_url("/docs", api))
}
