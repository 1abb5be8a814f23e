//! pos-adapter-postgres - PostgreSQL 适配器

mod config;
mod connection;
mod migration;
mod transaction;

pub use config::*;
pub use connection::*;
pub use migration::*;
pub use transaction::*;
