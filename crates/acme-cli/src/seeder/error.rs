use std::fmt;

use thiserror::Error;
use tokio::task::JoinError;

/// One of the four record groups, seeded in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedGroup {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl SeedGroup {
    pub const ALL: [SeedGroup; 4] = [
        SeedGroup::Users,
        SeedGroup::Customers,
        SeedGroup::Invoices,
        SeedGroup::Revenue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeedGroup::Users => "users",
            SeedGroup::Customers => "customers",
            SeedGroup::Invoices => "invoices",
            SeedGroup::Revenue => "revenue",
        }
    }
}

impl fmt::Display for SeedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault raised while seeding a single group.
#[derive(Debug, Error)]
pub enum GroupError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Password(String),
    #[error("insert task failed: {0}")]
    Task(#[from] JoinError),
}

/// A group fault tagged with the group it aborted.
///
/// Displays as the underlying message so callers can surface it verbatim.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct SeedError {
    pub group: SeedGroup,
    pub source: GroupError,
}

impl SeedError {
    pub fn new(group: SeedGroup, source: impl Into<GroupError>) -> Self {
        Self {
            group,
            source: source.into(),
        }
    }
}
