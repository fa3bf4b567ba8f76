pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use routes::ServerState;
pub use startup::{load_config, run};
