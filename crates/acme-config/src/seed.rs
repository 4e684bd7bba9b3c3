//! Seeding behavior.
//!
//! # Environment Variables
//!
//! - `SEED_INVOICE_IDS`: `generated` (default) or `deterministic`
//! - `SEED_BCRYPT_COST`: bcrypt work factor for fixture passwords (default: 10)

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// bcrypt work factor for fixture passwords.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// How invoice primary keys are assigned on insert.
///
/// Invoices in the fixture carry no id of their own. With `Generated` the
/// database default assigns a fresh UUID per insert, so every run appends
/// another copy of the invoices. With `Deterministic` each fixture row gets a
/// stable UUID and re-runs skip rows that already exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvoiceIds {
    #[default]
    Generated,
    Deterministic,
}

impl InvoiceIds {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceIds::Generated => "generated",
            InvoiceIds::Deterministic => "deterministic",
        }
    }
}

impl fmt::Display for InvoiceIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceIds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generated" | "append" => Ok(InvoiceIds::Generated),
            "deterministic" | "stable" => Ok(InvoiceIds::Deterministic),
            other => Err(format!(
                "unknown invoice id mode '{other}', expected 'generated' or 'deterministic'"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub invoice_ids: InvoiceIds,
    pub bcrypt_cost: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            invoice_ids: InvoiceIds::Generated,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl SeedConfig {
    /// Loads the config from the environment, falling back to defaults for
    /// missing or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let invoice_ids = lookup("SEED_INVOICE_IDS")
            .and_then(|v| match v.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    warn!("Ignoring SEED_INVOICE_IDS: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        // bcrypt accepts 4..=31
        let bcrypt_cost = lookup("SEED_BCRYPT_COST")
            .and_then(|v| v.parse().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self {
            invoice_ids,
            bcrypt_cost,
        }
    }

    pub fn with_invoice_ids(mut self, invoice_ids: InvoiceIds) -> Self {
        self.invoice_ids = invoice_ids;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}
