use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait};

use crate::errors::ServiceError;
use crate::users::domain::{NewUser, User, UserChanges};
use crate::users::repository::UserRepository;
use models::user;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, input: &NewUser) -> Result<User, ServiceError> {
        let created = user::create(&self.db, &input.user_id, &input.user_name, &input.mail, &input.password).await?;
        Ok(created.into())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, ServiceError> {
        let found = user::find_by_user_id(&self.db, user_id).await?;
        Ok(found.map(User::from))
    }

    async fn update(&self, user_id: &str, changes: &UserChanges) -> Result<Option<User>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = user::find_by_user_id(&txn, user_id).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        if changes.is_empty() {
            txn.commit().await?;
            return Ok(Some(existing.into()));
        }

        let mut am: user::ActiveModel = existing.into();
        if let Some(v) = &changes.user_id { am.user_id = Set(v.clone()); }
        if let Some(v) = &changes.user_name { am.user_name = Set(v.clone()); }
        if let Some(v) = &changes.mail { am.mail = Set(v.clone()); }
        if let Some(v) = &changes.password { am.password = Set(v.clone()); }
        // a user_id change is carried to food_table by ON UPDATE CASCADE
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, user_id: &str) -> Result<bool, ServiceError> {
        let res = user::Entity::delete_many()
            .filter(user::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
