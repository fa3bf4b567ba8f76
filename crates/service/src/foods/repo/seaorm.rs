use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set, TransactionTrait};

use crate::errors::ServiceError;
use crate::foods::domain::{Food, FoodChanges, NewFood};
use crate::foods::repository::FoodRepository;
use models::{food, user};

pub struct SeaOrmFoodRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl FoodRepository for SeaOrmFoodRepository {
    async fn insert(&self, input: &NewFood) -> Result<Food, ServiceError> {
        let created = food::create(&self.db, &input.food_id, &input.food_name, input.exp, &input.user_id).await?;
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Food>, ServiceError> {
        let found = food::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Food::from))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Option<Vec<Food>>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(owner) = user::find_by_user_id(&txn, user_id).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        let rows = owner
            .find_related(food::Entity)
            .order_by_asc(food::Column::Id)
            .all(&txn)
            .await?;
        txn.commit().await?;
        Ok(Some(rows.into_iter().map(Food::from).collect()))
    }

    async fn update(&self, id: i32, changes: &FoodChanges) -> Result<Option<Food>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = food::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        if changes.is_empty() {
            txn.commit().await?;
            return Ok(Some(existing.into()));
        }

        let mut am: food::ActiveModel = existing.into();
        if let Some(v) = &changes.food_id { am.food_id = Set(v.clone()); }
        if let Some(v) = &changes.food_name { am.food_name = Set(v.clone()); }
        if let Some(v) = changes.exp { am.exp = Set(v); }
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = food::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
