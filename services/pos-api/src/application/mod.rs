//! 应用层

pub mod commands;
pub mod handler;
pub mod queries;
pub mod results;

pub use commands::*;
pub use handler::{Repositories, ServiceHandler};
pub use queries::*;
pub use results::*;
