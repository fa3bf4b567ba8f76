use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // FoodTable: index on user_id, backs ListByUser and the cascade lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_food_table_user_id")
                    .table(FoodTable::Table)
                    .col(FoodTable::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_food_table_user_id").table(FoodTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FoodTable { Table, UserId }
