//! # Acme Config
//!
//! Configuration types for the Acme dashboard API, loaded from environment
//! variables:
//!
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: HTTP listener address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`seed`]: Seeding behavior (invoice id strategy, bcrypt cost)
//!
//! # Example
//!
//! ```ignore
//! use acme_config::{CorsConfig, DatabaseConfig, SeedConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env()?;
//! let server = ServerConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let seed = SeedConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod seed;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use seed::{InvoiceIds, SeedConfig};
pub use server::ServerConfig;
