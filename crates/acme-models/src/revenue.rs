use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Longest label the `revenue.month` column accepts.
pub const MONTH_MAX_LEN: usize = 4;

/// A row of the `revenue` table; `month` is unique.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
