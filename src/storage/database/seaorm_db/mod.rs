// Module declarations
mod connection;
mod search;
mod token_ops;
mod types;
mod user_ops;
mod worker_ops;


// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
