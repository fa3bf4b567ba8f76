use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::food;

pub const USER_ID_MAX_LEN: usize = 40;
pub const USER_NAME_MAX_LEN: usize = 255;
pub const MAIL_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub user_name: String,
    pub mail: String,
    #[sea_orm(column_type = "Text")]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Food,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Food => Entity::has_many(food::Entity).into() }
    }
}

impl Related<food::Entity> for Entity {
    fn to() -> RelationDef { Relation::Food.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_user_id(user_id: &str) -> Result<(), errors::ModelError> {
    if user_id.trim().is_empty() { return Err(errors::ModelError::Validation("user_id required".into())); }
    if user_id.chars().count() > USER_ID_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("user_id longer than {USER_ID_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_user_name(user_name: &str) -> Result<(), errors::ModelError> {
    if user_name.trim().is_empty() { return Err(errors::ModelError::Validation("user_name required".into())); }
    if user_name.chars().count() > USER_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("user_name longer than {USER_NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_mail(mail: &str) -> Result<(), errors::ModelError> {
    if !mail.contains('@') { return Err(errors::ModelError::Validation("invalid mail".into())); }
    if mail.chars().count() > MAIL_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("mail longer than {MAIL_MAX_LEN} characters")));
    }
    Ok(())
}

/// Only presence is checked; the stored credential is opaque.
pub fn validate_password(password: &str) -> Result<(), errors::ModelError> {
    if password.is_empty() { return Err(errors::ModelError::Validation("password required".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    user_name: &str,
    mail: &str,
    password: &str,
) -> Result<Model, errors::ModelError> {
    validate_user_id(user_id)?;
    validate_user_name(user_name)?;
    validate_mail(mail)?;
    validate_password(password)?;
    let am = ActiveModel {
        user_id: Set(user_id.to_string()),
        user_name: Set(user_name.to_string()),
        mail: Set(mail.to_string()),
        password: Set(password.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_user_id<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::UserId.eq(user_id)).one(db).await?)
}
