use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, sea_query::NullOrdering,
};

use crate::{
    entity::{Column, Entity, PROJECTION},
    filtering::{RecipeFilter, build_condition, build_filters},
    models::{RecipeView, SearchParams},
    pagination::Pagination,
};

/// A read over the recipe collection.
///
/// Every read runs the same pipeline: derive computed fields, filter, sort by
/// rating descending (ties in insertion order), paginate, project. Counting
/// runs the first two stages only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub filters: Vec<RecipeFilter>,
    pub pagination: Pagination,
}

impl RecipeQuery {
    /// Unfiltered listing.
    #[must_use]
    pub const fn list(pagination: Pagination) -> Self {
        Self {
            filters: Vec::new(),
            pagination,
        }
    }

    /// Filtered search from raw request parameters.
    #[must_use]
    pub fn search(params: &SearchParams) -> Self {
        Self {
            filters: build_filters(params),
            pagination: Pagination::from_params(params.page.as_deref(), params.limit.as_deref()),
        }
    }

    fn filtered(&self, db: &DatabaseConnection) -> Select<Entity> {
        let condition = build_condition(&self.filters, db.get_database_backend());
        Entity::find().filter(condition)
    }

    /// Number of recipes matching the filters, ignoring pagination.
    ///
    /// # Errors
    /// Returns the storage error if the count query fails.
    pub async fn count(&self, db: &DatabaseConnection) -> Result<u64, DbErr> {
        self.filtered(db).count(db).await
    }

    /// One sorted, projected page of matching recipes.
    ///
    /// # Errors
    /// Returns the storage error if the select query fails.
    pub async fn fetch(&self, db: &DatabaseConnection) -> Result<Vec<RecipeView>, DbErr> {
        self.filtered(db)
            .select_only()
            .columns(PROJECTION)
            .order_by_with_nulls(Column::Rating, Order::Desc, NullOrdering::Last)
            .order_by_asc(Column::Id)
            .offset(self.pagination.offset())
            .limit(self.pagination.limit)
            .into_model::<RecipeView>()
            .all(db)
            .await
    }

    /// Count and page issued concurrently; the request fails as a whole if
    /// either query fails.
    ///
    /// # Errors
    /// Returns the first storage error from either query.
    pub async fn execute(&self, db: &DatabaseConnection) -> Result<(u64, Vec<RecipeView>), DbErr> {
        tracing::debug!(
            filters = ?self.filters,
            page = self.pagination.page,
            limit = self.pagination.limit,
            "Running recipe query"
        );
        tokio::try_join!(self.count(db), self.fetch(db))
    }
}

/// Fetch a single projected recipe by id.
///
/// # Errors
/// Returns `DbErr::RecordNotFound` when no recipe has this id.
pub async fn get_one(db: &DatabaseConnection, id: i32) -> Result<RecipeView, DbErr> {
    Entity::find_by_id(id)
        .select_only()
        .columns(PROJECTION)
        .into_model::<RecipeView>()
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Recipe {id} not found")))
}
