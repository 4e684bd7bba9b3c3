//! # Acme Models
//!
//! Row types for the four tables backing the Acme dashboard.
//!
//! - [`users`]: Dashboard login accounts (password stored as a bcrypt hash)
//! - [`customers`]: Customers that invoices are billed to
//! - [`invoices`]: Invoices and their status labels
//! - [`revenue`]: Monthly revenue totals
//!
//! None of the tables declare foreign keys; `invoices.customer_id` is a soft
//! reference to `customers.id`.

pub mod customers;
pub mod invoices;
pub mod revenue;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use customers::Customer;
pub use invoices::{Invoice, InvoiceStatus};
pub use revenue::Revenue;
pub use users::User;
