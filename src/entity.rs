//! # Recipe entity
//!
//! Records are created in bulk by the importer and are read-only afterwards.
//! `nutrients` is a JSON object of free-text values (`"389 kcal"`), and
//! `document` keeps the raw imported record for internal use; it is never
//! part of an API response.

use sea_orm::{FromJsonQueryResult, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrient values as they appear in the source data, unit included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Nutrients {
    #[schema(example = "389 kcal")]
    pub calories: Option<String>,
    pub carbohydrate_content: Option<String>,
    pub cholesterol_content: Option<String>,
    pub fiber_content: Option<String>,
    pub protein_content: Option<String>,
    pub saturated_fat_content: Option<String>,
    pub sodium_content: Option<String>,
    pub sugar_content: Option<String>,
    pub fat_content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub serves: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub nutrients: Option<Nutrients>,
    #[sea_orm(column_type = "Json", nullable)]
    pub document: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns returned to callers, in response order.
pub const PROJECTION: [Column; 10] = [
    Column::Id,
    Column::Title,
    Column::Cuisine,
    Column::Rating,
    Column::PrepTime,
    Column::CookTime,
    Column::TotalTime,
    Column::Description,
    Column::Nutrients,
    Column::Serves,
];
