//! Food store: items with an expiration date, each owned by one user.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::FoodStore;
