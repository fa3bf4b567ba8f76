use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: i32,
    pub food_id: String,
    pub food_name: String,
    pub exp: NaiveDate,
    pub user_id: String,
}

impl From<models::food::Model> for Food {
    fn from(m: models::food::Model) -> Self {
        Self { id: m.id, food_id: m.food_id, food_name: m.food_name, exp: m.exp, user_id: m.user_id }
    }
}

/// Creation input; `user_id` names the owning user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFood {
    pub food_id: String,
    pub food_name: String,
    pub exp: NaiveDate,
    pub user_id: String,
}

/// Partial update. Ownership cannot change here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodChanges {
    pub food_id: Option<String>,
    pub food_name: Option<String>,
    pub exp: Option<NaiveDate>,
}

impl FoodChanges {
    pub fn is_empty(&self) -> bool {
        self.food_id.is_none() && self.food_name.is_none() && self.exp.is_none()
    }
}
