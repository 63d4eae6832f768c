pub mod error;
pub mod keyspaces;
pub mod records;
pub mod tables;

pub use error::AppError;
