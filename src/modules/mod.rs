pub mod health;
pub mod seed;

pub use self::seed::model::{SeedFailureResponse, SeedResponse};
