use serde::{Deserialize, Serialize};

/// Full user row as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub user_id: String,
    pub user_name: String,
    pub mail: String,
    pub password: String,
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self { id: m.id, user_id: m.user_id, user_name: m.user_name, mail: m.mail, password: m.password }
    }
}

/// Creation input; `password` is expected to be hashed already
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub user_id: String,
    pub user_name: String,
    pub mail: String,
    pub password: String,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserChanges {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.user_name.is_none() && self.mail.is_none() && self.password.is_none()
    }
}

/// Outward view of a user, without the credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub user_id: String,
    pub user_name: String,
    pub mail: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self { id: u.id, user_id: u.user_id, user_name: u.user_name, mail: u.mail }
    }
}
