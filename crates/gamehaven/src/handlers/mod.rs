pub mod error;
pub mod games;
pub mod health;

pub use error::AppError;
