use utoipa::OpenApi;

use crate::modules::health::controller::HealthResponse;
use crate::modules::seed::model::{SeedFailureResponse, SeedResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::seed::controller::seed_database,
        crate::modules::health::controller::health_check,
    ),
    components(schemas(SeedResponse, SeedFailureResponse, HealthResponse)),
    tags(
        (name = "Seed", description = "Create and populate the dashboard tables"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Acme Dashboard API",
        description = "Seeding endpoint for the Acme dashboard database"
    )
)]
pub struct ApiDoc;
