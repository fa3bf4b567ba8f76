use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryFilter, ColumnTrait, Set};

use super::setup_test_db;
use crate::{errors::ModelError, food, user};

fn exp(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Test user CRUD operations
#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = user::create(&db, "u1", "Alice", "a@x.com", "h1").await?;
    assert!(created.id > 0);
    assert_eq!(created.user_id, "u1");
    assert_eq!(created.password, "h1");

    let found = user::find_by_user_id(&db, "u1").await?.unwrap();
    assert_eq!(found, created);

    let mut am: user::ActiveModel = found.into();
    am.user_name = Set("Alice B".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.user_name, "Alice B");
    assert_eq!(updated.id, created.id);

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(user::find_by_user_id(&db, "u1").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_user_id_is_duplicate_key() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "dup", "First", "first@x.com", "h").await?;
    let err = user::create(&db, "dup", "Second", "second@x.com", "h").await.unwrap_err();
    assert!(matches!(err, ModelError::DuplicateKey(_)), "got {err:?}");
    Ok(())
}

/// Mail carries no unique constraint
#[tokio::test]
async fn test_shared_mail_is_allowed() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "a", "A", "same@x.com", "h").await?;
    user::create(&db, "b", "B", "same@x.com", "h").await?;
    assert_eq!(user::Entity::find().all(&db).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_surrogate_ids_are_not_reused() -> Result<()> {
    let db = setup_test_db().await?;
    let first = user::create(&db, "a", "A", "a@x.com", "h").await?;
    user::Entity::delete_by_id(first.id).exec(&db).await?;
    let second = user::create(&db, "a", "A", "a@x.com", "h").await?;
    assert!(second.id > first.id);
    Ok(())
}

#[tokio::test]
async fn test_user_validation() -> Result<()> {
    let db = setup_test_db().await?;
    let long_id = "x".repeat(41);
    let cases = [
        ("", "Name", "m@x.com", "h"),
        (long_id.as_str(), "Name", "m@x.com", "h"),
        ("ok", "  ", "m@x.com", "h"),
        ("ok", "Name", "not-a-mail", "h"),
        ("ok", "Name", "m@x.com", ""),
    ];
    for (user_id, name, mail, password) in cases {
        let err = user::create(&db, user_id, name, mail, password).await.unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)), "{user_id:?}/{name:?}/{mail:?}: {err:?}");
    }
    let long_name = "n".repeat(256);
    let long_mail = format!("{}@x.com", "m".repeat(250));
    assert_eq!(long_mail.chars().count(), 256);
    for (name, mail) in [(long_name.as_str(), "m@x.com"), ("Name", long_mail.as_str())] {
        let err = user::create(&db, "ok", name, mail, "h").await.unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)), "{}/{}: {err:?}", name.len(), mail.len());
    }

    // varchar(40) counts characters, not bytes
    user::create(&db, &"é".repeat(40), "Name", "m@x.com", "h").await?;
    // 255 characters is the inclusive upper bound for name and mail
    let max_mail = format!("{}@x.com", "m".repeat(249));
    let max = user::create(&db, "max", &"n".repeat(255), &max_mail, "h").await?;
    assert_eq!(max.user_name.chars().count(), 255);
    assert_eq!(max.mail.chars().count(), 255);
    assert_eq!(user::Entity::find().all(&db).await?.len(), 2);
    Ok(())
}

/// Test food CRUD operations
#[tokio::test]
async fn test_food_crud() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "owner", "Owner", "o@x.com", "h").await?;

    let created = food::create(&db, "f1", "Milk", exp(2024, 1, 1), "owner").await?;
    assert_eq!(created.food_id, "f1");
    assert_eq!(created.exp, exp(2024, 1, 1));

    let found = food::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found, created);

    let mut am: food::ActiveModel = found.into();
    am.exp = Set(exp(2024, 2, 1));
    let updated = am.update(&db).await?;
    assert_eq!(updated.exp, exp(2024, 2, 1));

    food::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(food::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_food_with_unknown_owner_is_referential_violation() -> Result<()> {
    let db = setup_test_db().await?;
    let err = food::create(&db, "f1", "Milk", exp(2024, 1, 1), "ghost").await.unwrap_err();
    assert!(matches!(err, ModelError::ReferentialViolation(_)), "got {err:?}");
    assert!(food::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_food_id_is_allowed() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "u1", "Alice", "a@x.com", "h1").await?;
    let a = food::create(&db, "f1", "Milk", exp(2024, 1, 1), "u1").await?;
    let b = food::create(&db, "f1", "More milk", exp(2024, 1, 2), "u1").await?;
    assert_ne!(a.id, b.id);
    let rows = food::Entity::find().filter(food::Column::FoodId.eq("f1")).all(&db).await?;
    assert_eq!(rows.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_find_related_foods() -> Result<()> {
    let db = setup_test_db().await?;
    let alice = user::create(&db, "alice", "Alice", "a@x.com", "h").await?;
    user::create(&db, "bob", "Bob", "b@x.com", "h").await?;
    food::create(&db, "f1", "Milk", exp(2024, 1, 1), "alice").await?;
    food::create(&db, "f2", "Eggs", exp(2024, 1, 5), "alice").await?;
    food::create(&db, "f3", "Bread", exp(2024, 1, 3), "bob").await?;

    let foods = alice.find_related(food::Entity).all(&db).await?;
    assert_eq!(foods.len(), 2);
    assert!(foods.iter().all(|f| f.user_id == "alice"));
    Ok(())
}

#[tokio::test]
async fn test_food_validation() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "u1", "Alice", "a@x.com", "h1").await?;
    let long_id = "f".repeat(41);
    for (food_id, name) in [("", "Milk"), (long_id.as_str(), "Milk"), ("f1", " ")] {
        let err = food::create(&db, food_id, name, exp(2024, 1, 1), "u1").await.unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)), "{food_id:?}/{name:?}: {err:?}");
    }
    Ok(())
}
