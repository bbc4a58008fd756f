use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::Nutrients;

/// Query parameters for the unfiltered recipe list.
///
/// Values are kept as raw strings so malformed numbers fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number (1-based). Defaults to `1`.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Number of recipes per page. Defaults to `10`.
    #[param(example = "10")]
    pub limit: Option<String>,
}

/// Query parameters for recipe search.
///
/// Comparison filters take the form `<op><integer>` where `<op>` is one of
/// `<`, `<=`, `>`, `>=`, `=`:
/// - `rating=>=4` recipes rated 4 or higher
/// - `total_time=<60` recipes ready in under an hour
/// - `calories=<=400` recipes whose calorie text starts with 400 or less
///
/// A comparison value that does not match this shape is ignored.
#[derive(Debug, Deserialize, IntoParams, ToSchema, Default, Clone)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the title.
    #[param(example = "cake")]
    pub title: Option<String>,
    /// Exact cuisine name (case-sensitive).
    #[param(example = "Italian")]
    pub cuisine: Option<String>,
    /// Comparison on total time in minutes.
    #[param(example = "<=60")]
    pub total_time: Option<String>,
    /// Comparison on rating.
    #[param(example = ">=4")]
    pub rating: Option<String>,
    /// Comparison on the number leading the calories text.
    #[param(example = "<=400")]
    pub calories: Option<String>,
    /// Page number (1-based). Defaults to `1`.
    pub page: Option<String>,
    /// Number of recipes per page. Defaults to `10`.
    pub limit: Option<String>,
}

/// The projection of a recipe returned by every read endpoint.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct RecipeView {
    pub id: i32,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub nutrients: Option<Nutrients>,
    pub serves: Option<String>,
}

/// Response of `GET /recipes`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipePage {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub data: Vec<RecipeView>,
}

/// Response of `GET /recipes/search`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResults {
    pub data: Vec<RecipeView>,
    pub total: u64,
}

/// Response of a successful `POST /import`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub success: bool,
    pub inserted_count: u64,
}
