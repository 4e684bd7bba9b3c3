use acme::logging::init_tracing;
use acme::router::init_router;
use acme::state::init_app_state;
use acme_config::ServerConfig;
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("⚠️  Failed to initialize file logging: {}. Logging to console only", e);
        tracing_subscriber::fmt().init();
    }

    if let Err(e) = run().await {
        error!("Server failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let state = init_app_state()?;
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.address()).await?;

    info!(address = %server.address(), "Server listening");
    println!("🚀 Server running on http://localhost:{}", server.port);
    println!("🌱 Seed the database with GET http://localhost:{}/seed", server.port);
    println!("📚 Swagger UI available at http://localhost:{}/swagger-ui", server.port);

    axum::serve(listener, app).await?;
    Ok(())
}
