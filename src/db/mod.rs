//! Database module for PostgreSQL connection and row types.

mod pool;
mod schema;

pub use pool::DatabasePool;
pub use schema::*;
