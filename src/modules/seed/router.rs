use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::seed_database;

pub fn init_seed_router() -> Router<AppState> {
    Router::new().route("/", get(seed_database))
}
