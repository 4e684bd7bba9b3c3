use acme_cli::seeder::Seeder;
use axum::{Json, extract::State};
use tracing::{error, instrument};

use crate::modules::seed::model::{SeedFailure, SeedFailureResponse, SeedResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/seed",
    responses(
        (status = 200, description = "All tables created and populated", body = SeedResponse),
        (status = 500, description = "A group failed; remaining groups were not seeded", body = SeedFailureResponse)
    ),
    tag = "Seed"
)]
#[instrument(skip(state))]
pub async fn seed_database(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, SeedFailure> {
    let seeder = Seeder::new(state.db.clone(), state.seed_config.clone());

    seeder.seed(&state.seed_data).await.map_err(|e| {
        error!(group = %e.group, error = %e, "Seeding error");
        SeedFailure::from(e)
    })?;

    Ok(Json(SeedResponse::success()))
}
