// Library entry so integration tests and external surfaces can reference
// the same modules as the binary.
pub mod activity;
pub mod constants;
pub mod database;
pub mod error;
pub mod model;
pub mod progression;
pub mod services;

pub use error::ActivityError;
pub use model::AppState;
