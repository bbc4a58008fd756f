use sea_orm::{
    Condition, DatabaseBackend,
    IdenStatic,
    sea_query::{Expr, SimpleExpr},
};

use super::{
    comparison::{FilterPredicate, parse_comparison},
    derived::DerivedField,
};
use crate::{entity::Column, models::SearchParams};

/// Numeric targets of a comparison filter.
///
/// Direct columns and derived values resolve through the same
/// [`NumericField::expr`] call, so a comparison never needs to know whether
/// its field is stored or computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Rating,
    TotalTime,
    Calories,
}

impl NumericField {
    #[must_use]
    pub fn expr(self, backend: DatabaseBackend) -> SimpleExpr {
        match self {
            Self::Rating => Expr::col(Column::Rating).into(),
            Self::TotalTime => Expr::col(Column::TotalTime).into(),
            Self::Calories => DerivedField::Calories.expr(backend),
        }
    }
}

/// One constraint contributed by a search parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFilter {
    /// Case-insensitive substring match on the title.
    TitleContains(String),
    /// Exact, case-sensitive cuisine match.
    CuisineEquals(String),
    Compare(NumericField, FilterPredicate),
}

/// LIKE escape character. Backslash would need quoting differently per backend.
const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so user text matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

impl RecipeFilter {
    #[must_use]
    pub fn to_expr(&self, backend: DatabaseBackend) -> SimpleExpr {
        match self {
            Self::TitleContains(title) => {
                // Both sides fold through the database's UPPER so stored and
                // requested text agree on every backend, ASCII-only or not.
                let pattern = format!("%{}%", escape_like(title));
                Expr::cust_with_values(
                    format!(
                        "UPPER({}) LIKE UPPER(?) ESCAPE '{LIKE_ESCAPE}'",
                        Column::Title.as_str()
                    ),
                    [pattern],
                )
            }
            Self::CuisineEquals(cuisine) => Expr::col(Column::Cuisine).eq(cuisine.as_str()),
            Self::Compare(field, predicate) => predicate.apply(field.expr(backend)),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn comparison(name: &str, value: Option<&str>) -> Option<FilterPredicate> {
    let raw = non_empty(value)?;
    let predicate = parse_comparison(raw);
    if predicate.is_none() {
        tracing::debug!(filter = name, value = raw, "Ignoring malformed comparison filter");
    }
    predicate
}

/// Translate search parameters into filters. Each parameter contributes at
/// most one filter; missing, blank, or malformed values contribute none.
#[must_use]
pub fn build_filters(params: &SearchParams) -> Vec<RecipeFilter> {
    let mut filters = Vec::new();

    if let Some(title) = non_empty(params.title.as_deref()) {
        filters.push(RecipeFilter::TitleContains(title.to_string()));
    }
    if let Some(cuisine) = non_empty(params.cuisine.as_deref()) {
        filters.push(RecipeFilter::CuisineEquals(cuisine.to_string()));
    }

    let comparisons = [
        ("total_time", NumericField::TotalTime, params.total_time.as_deref()),
        ("rating", NumericField::Rating, params.rating.as_deref()),
        ("calories", NumericField::Calories, params.calories.as_deref()),
    ];
    for (name, field, value) in comparisons {
        if let Some(predicate) = comparison(name, value) {
            filters.push(RecipeFilter::Compare(field, predicate));
        }
    }

    filters
}

/// Combine filters with AND. No filters means no constraint.
#[must_use]
pub fn build_condition(filters: &[RecipeFilter], backend: DatabaseBackend) -> Condition {
    filters
        .iter()
        .fold(Condition::all(), |condition, filter| {
            condition.add(filter.to_expr(backend))
        })
}
