use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateRecipeTable)]
    }
}

pub struct CreateRecipeTable;

impl MigrationName for CreateRecipeTable {
    fn name(&self) -> &'static str {
        "m20250101_000001_create_recipe_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateRecipeTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipes::Title).string().null())
                    .col(ColumnDef::new(Recipes::Cuisine).string().null())
                    .col(ColumnDef::new(Recipes::Rating).double().null())
                    .col(ColumnDef::new(Recipes::PrepTime).integer().null())
                    .col(ColumnDef::new(Recipes::CookTime).integer().null())
                    .col(ColumnDef::new(Recipes::TotalTime).integer().null())
                    .col(ColumnDef::new(Recipes::Description).text().null())
                    .col(ColumnDef::new(Recipes::Serves).string().null())
                    .col(ColumnDef::new(Recipes::Nutrients).json().null())
                    .col(ColumnDef::new(Recipes::Document).json().null())
                    .to_owned(),
            )
            .await?;

        // Sort path for every listing, and the exact-match cuisine filter.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_recipes_rating")
                    .table(Recipes::Table)
                    .col(Recipes::Rating)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_recipes_cuisine")
                    .table(Recipes::Table)
                    .col(Recipes::Cuisine)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    Title,
    Cuisine,
    Rating,
    PrepTime,
    CookTime,
    TotalTime,
    Description,
    Serves,
    Nutrients,
    Document,
}
