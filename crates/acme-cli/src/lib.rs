//! # Acme CLI
//!
//! Database seeding for the Acme dashboard.
//!
//! This library crate provides the seeding functionality used both by the
//! `acme-cli` binary and by the API's `GET /seed` endpoint.
//!
//! ## Usage
//!
//! ```ignore
//! use acme_cli::seeder::{SeedData, Seeder};
//! use acme_config::SeedConfig;
//!
//! let seeder = Seeder::new(pool, SeedConfig::default());
//! seeder.seed(&SeedData::placeholder()).await?;
//! ```

pub mod seeder;
