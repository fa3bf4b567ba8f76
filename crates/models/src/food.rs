use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::user;

pub const FOOD_ID_MAX_LEN: usize = 40;

/// One tracked item with its expiration date. `food_id` is a caller label and may repeat.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub food_id: String,
    #[sea_orm(column_type = "Text")]
    pub food_name: String,
    pub exp: Date,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::UserId)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_food_id(food_id: &str) -> Result<(), errors::ModelError> {
    if food_id.trim().is_empty() { return Err(errors::ModelError::Validation("food_id required".into())); }
    if food_id.chars().count() > FOOD_ID_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("food_id longer than {FOOD_ID_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_food_name(food_name: &str) -> Result<(), errors::ModelError> {
    if food_name.trim().is_empty() { return Err(errors::ModelError::Validation("food_name required".into())); }
    Ok(())
}

/// Insert a food row owned by `user_id`; the engine rejects unknown owners.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    food_id: &str,
    food_name: &str,
    exp: Date,
    user_id: &str,
) -> Result<Model, errors::ModelError> {
    validate_food_id(food_id)?;
    validate_food_name(food_name)?;
    user::validate_user_id(user_id)?;
    let am = ActiveModel {
        food_id: Set(food_id.to_string()),
        food_name: Set(food_name.to_string()),
        exp: Set(exp),
        user_id: Set(user_id.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
