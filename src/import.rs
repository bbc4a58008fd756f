//! # Bulk Import
//!
//! Loads recipes from a JSON object whose values are the records:
//!
//! ```json
//! {
//!   "0": { "title": "Sweet Potato Pie", "rating": 4.8, "total_time": 115, ... },
//!   "1": { "title": "Chocolate Cake", "rating": "not-a-number", ... }
//! }
//! ```
//!
//! Numeric fields are coerced leniently: numbers and numeric strings are
//! kept, anything else is stored as null without failing the batch. There is
//! no deduplication key, so importing the same source twice inserts every
//! record twice.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::{fmt, path::Path};

use crate::entity::{ActiveModel, Entity, Nutrients};

/// Rows per INSERT statement; keeps bind parameters under `SQLite`'s limit.
const INSERT_CHUNK_SIZE: usize = 50;

/// A recipe ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub serves: Option<String>,
    pub nutrients: Option<Nutrients>,
    pub document: Value,
}

impl From<NewRecipe> for ActiveModel {
    fn from(recipe: NewRecipe) -> Self {
        Self {
            id: NotSet,
            title: Set(recipe.title),
            cuisine: Set(recipe.cuisine),
            rating: Set(recipe.rating),
            prep_time: Set(recipe.prep_time),
            cook_time: Set(recipe.cook_time),
            total_time: Set(recipe.total_time),
            description: Set(recipe.description),
            serves: Set(recipe.serves),
            nutrients: Set(recipe.nutrients),
            document: Set(Some(recipe.document)),
        }
    }
}

#[derive(Debug)]
pub enum ImportError {
    /// The source file is missing or unreadable.
    Source(std::io::Error),
    /// The source is not valid JSON or not a JSON object.
    InvalidJson(Option<serde_json::Error>),
    /// The source object has no records.
    Empty,
    /// The batch insert failed; nothing was committed.
    Database(DbErr),
}

impl ImportError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Source(_) | Self::InvalidJson(_) | Self::Empty => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Source(_) => "Import source could not be read",
            Self::InvalidJson(_) | Self::Empty => "Invalid or empty JSON data",
            Self::Database(_) => "Failed to import data",
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for ImportError {}

impl From<DbErr> for ImportError {
    fn from(err: DbErr) -> Self {
        Self::Database(err)
    }
}

#[derive(Serialize)]
struct ImportFailure {
    success: bool,
    message: &'static str,
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        match &self {
            Self::Source(err) => tracing::warn!(error = %err, "Import source unavailable"),
            Self::InvalidJson(Some(err)) => tracing::warn!(error = %err, "Import source is not valid JSON"),
            Self::InvalidJson(None) => tracing::warn!("Import source is not a JSON object"),
            Self::Empty => tracing::warn!("Import source has no records"),
            Self::Database(err) => tracing::error!(error = ?err, "Error inserting recipes"),
        }
        let body = ImportFailure {
            success: false,
            message: self.user_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// A number or numeric string, otherwise `None`.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Whole minutes, rounded; out-of-range values become `None`.
#[allow(clippy::cast_possible_truncation)]
fn coerce_minutes(value: Option<&Value>) -> Option<i32> {
    let minutes = coerce_number(value)?.round();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&minutes)
        .then_some(minutes as i32)
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn nutrients(value: Option<&Value>) -> Option<Nutrients> {
    let map = value?.as_object()?;
    Some(Nutrients {
        calories: text(map.get("calories")),
        carbohydrate_content: text(map.get("carbohydrateContent")),
        cholesterol_content: text(map.get("cholesterolContent")),
        fiber_content: text(map.get("fiberContent")),
        protein_content: text(map.get("proteinContent")),
        saturated_fat_content: text(map.get("saturatedFatContent")),
        sodium_content: text(map.get("sodiumContent")),
        sugar_content: text(map.get("sugarContent")),
        fat_content: text(map.get("fatContent")),
    })
}

fn recipe_from(record: &Map<String, Value>) -> NewRecipe {
    NewRecipe {
        title: text(record.get("title")),
        cuisine: text(record.get("cuisine")),
        rating: coerce_number(record.get("rating")),
        prep_time: coerce_minutes(record.get("prep_time")),
        cook_time: coerce_minutes(record.get("cook_time")),
        total_time: coerce_minutes(record.get("total_time")),
        description: text(record.get("description")),
        serves: text(record.get("serves")),
        nutrients: nutrients(record.get("nutrients")),
        document: Value::Object(record.clone()),
    }
}

/// Parse an import source into records, in document order.
///
/// # Errors
/// `InvalidJson` when the source is not a JSON object, `Empty` when it
/// holds no object records.
pub fn parse_recipes(source: &str) -> Result<Vec<NewRecipe>, ImportError> {
    let parsed: Value =
        serde_json::from_str(source).map_err(|e| ImportError::InvalidJson(Some(e)))?;
    let Value::Object(entries) = parsed else {
        return Err(ImportError::InvalidJson(None));
    };

    let recipes: Vec<NewRecipe> = entries
        .iter()
        .filter_map(|(key, value)| {
            let record = value.as_object();
            if record.is_none() {
                tracing::warn!(key = %key, "Skipping import entry that is not an object");
            }
            record.map(recipe_from)
        })
        .collect();

    if recipes.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(recipes)
}

/// Insert all records in one transaction.
///
/// # Errors
/// Returns `Empty` for an empty batch, or the storage error; on error no
/// record is committed.
pub async fn import_recipes(
    db: &DatabaseConnection,
    recipes: Vec<NewRecipe>,
) -> Result<u64, ImportError> {
    if recipes.is_empty() {
        return Err(ImportError::Empty);
    }
    let total = recipes.len() as u64;

    let txn = db.begin().await?;
    let mut models = recipes.into_iter().map(ActiveModel::from).peekable();
    while models.peek().is_some() {
        let chunk: Vec<ActiveModel> = models.by_ref().take(INSERT_CHUNK_SIZE).collect();
        Entity::insert_many(chunk).exec(&txn).await?;
    }
    txn.commit().await?;

    Ok(total)
}

/// Read, parse, and insert the import source at `path`.
///
/// # Errors
/// See [`ImportError`].
pub async fn import_from_path(db: &DatabaseConnection, path: &Path) -> Result<u64, ImportError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(ImportError::Source)?;
    let recipes = parse_recipes(&source)?;
    let inserted = import_recipes(db, recipes).await?;
    tracing::info!(inserted, path = %path.display(), "Imported recipes");
    Ok(inserted)
}
