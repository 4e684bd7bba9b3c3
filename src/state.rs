use std::sync::Arc;

use acme_cli::seeder::SeedData;
use acme_config::{CorsConfig, DatabaseConfig, SeedConfig};
use acme_db::init_db_pool;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub seed_config: SeedConfig,
    pub cors_config: CorsConfig,
    /// Dataset inserted by `GET /seed`.
    pub seed_data: Arc<SeedData>,
}

impl AppState {
    /// State serving the placeholder dataset with default seeding behavior.
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            seed_config: SeedConfig::default(),
            cors_config: CorsConfig::default(),
            seed_data: Arc::new(SeedData::placeholder()),
        }
    }

    pub fn with_seed_config(mut self, seed_config: SeedConfig) -> Self {
        self.seed_config = seed_config;
        self
    }

    pub fn with_seed_data(mut self, seed_data: SeedData) -> Self {
        self.seed_data = Arc::new(seed_data);
        self
    }
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    let database = DatabaseConfig::from_env()?;

    Ok(AppState {
        db: init_db_pool(&database)?,
        seed_config: SeedConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        seed_data: Arc::new(SeedData::placeholder()),
    })
}
