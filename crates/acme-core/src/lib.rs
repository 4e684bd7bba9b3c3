//! # Acme Core
//!
//! Core types and utilities shared across the Acme dashboard API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use acme_core::errors::AppError;
//! use acme_core::password::{hash_password_with_cost, verify_password};
//!
//! let hash = hash_password_with_cost("123456", 10)?;
//! assert!(verify_password("123456", &hash)?);
//!
//! let error = AppError::internal(anyhow::anyhow!("database unreachable"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password_with_cost, verify_password};
