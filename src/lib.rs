//! Example service: single-resource CRUD REST backend over SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use model::Example;
pub use routes::{app, common_routes_with_ready, example_routes};
pub use service::ExampleService;
pub use state::AppState;
