//! Service layer providing the user and food stores on top of models.
//! - Separates store semantics from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Maps engine outcomes onto one typed error.

pub mod errors;
pub mod password;
pub mod runtime;
pub mod users;
pub mod foods;
#[cfg(test)]
pub mod test_support;

pub use foods::FoodStore;
pub use users::UserStore;
