use acme_cli::seeder::SeedError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";
pub const SEED_FAILURE_MESSAGE: &str = "Failed to seed database";

/// Body returned when every group was seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = "Database seeded successfully")]
    pub message: String,
}

impl SeedResponse {
    pub fn success() -> Self {
        Self {
            message: SEED_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Body returned when any group failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedFailureResponse {
    #[schema(example = "Failed to seed database")]
    pub error: String,
    /// Message of the underlying fault.
    #[schema(example = "error returned from database: value too long for type character varying(4)")]
    pub details: String,
}

/// Handler error for `GET /seed`, always rendered as a 500.
#[derive(Debug)]
pub struct SeedFailure(pub SeedError);

impl From<SeedError> for SeedFailure {
    fn from(err: SeedError) -> Self {
        SeedFailure(err)
    }
}

impl IntoResponse for SeedFailure {
    fn into_response(self) -> Response {
        let body = Json(SeedFailureResponse {
            error: SEED_FAILURE_MESSAGE.to_string(),
            details: self.0.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
