use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::setup_test_db;
use crate::{food, user};

fn exp() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

async fn foods_of(db: &sea_orm::DatabaseConnection, user_id: &str) -> Result<Vec<food::Model>> {
    Ok(food::Entity::find().filter(food::Column::UserId.eq(user_id)).all(db).await?)
}

/// Deleting a user removes exactly its food rows
#[tokio::test]
async fn test_delete_user_cascades_to_foods() -> Result<()> {
    let db = setup_test_db().await?;
    let alice = user::create(&db, "alice", "Alice", "a@x.com", "h").await?;
    user::create(&db, "bob", "Bob", "b@x.com", "h").await?;
    for i in 0..3 {
        food::create(&db, &format!("a{i}"), "Milk", exp(), "alice").await?;
    }
    let bobs = food::create(&db, "b0", "Bread", exp(), "bob").await?;

    let res = user::Entity::delete_by_id(alice.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);

    assert!(foods_of(&db, "alice").await?.is_empty());
    let remaining = food::Entity::find().all(&db).await?;
    assert_eq!(remaining, vec![bobs]);
    Ok(())
}

/// Renaming user_id propagates to the food rows
#[tokio::test]
async fn test_rename_user_cascades_to_foods() -> Result<()> {
    let db = setup_test_db().await?;
    let alice = user::create(&db, "alice", "Alice", "a@x.com", "h").await?;
    let f1 = food::create(&db, "f1", "Milk", exp(), "alice").await?;
    let f2 = food::create(&db, "f2", "Eggs", exp(), "alice").await?;

    let mut am: user::ActiveModel = alice.into();
    am.user_id = Set("alice2".into());
    am.update(&db).await?;

    assert!(foods_of(&db, "alice").await?.is_empty());
    let moved = foods_of(&db, "alice2").await?;
    let ids: Vec<i32> = moved.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![f1.id, f2.id]);
    Ok(())
}
