//! Create `user_table`.
//!
//! `user_id` is the caller-chosen identifier and the target of the food foreign key,
//! so it carries the unique constraint. `password` holds an opaque credential.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserTable::Table)
                    .if_not_exists()
                    .col(pk_auto(UserTable::Id))
                    .col(string_len(UserTable::UserId, 40).unique_key().not_null())
                    .col(string_len(UserTable::UserName, 255).not_null())
                    .col(string_len(UserTable::Mail, 255).not_null())
                    .col(text(UserTable::Password).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserTable { Table, Id, UserId, UserName, Mail, Password }
