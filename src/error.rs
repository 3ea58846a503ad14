mod app;
mod db;
mod startup;

pub use app::AppError;
pub use db::DatabaseError;
pub use startup::{ConfigError, StartupError};
