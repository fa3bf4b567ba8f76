//! Create `food_table` with FK to `user_table.user_id`.
//!
//! Deleting or renaming a user cascades to its food rows. `food_id` is a label, not a key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodTable::Table)
                    .if_not_exists()
                    .col(pk_auto(FoodTable::Id))
                    .col(string_len(FoodTable::FoodId, 40).not_null())
                    .col(text(FoodTable::FoodName).not_null())
                    .col(date(FoodTable::Exp).not_null())
                    .col(string_len(FoodTable::UserId, 40).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_table_user_table")
                            .from(FoodTable::Table, FoodTable::UserId)
                            .to(UserTable::Table, UserTable::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FoodTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FoodTable { Table, Id, FoodId, FoodName, Exp, UserId }

#[derive(DeriveIden)]
enum UserTable { Table, UserId }
