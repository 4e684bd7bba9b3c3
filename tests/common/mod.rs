use acme::acme_cli::seeder::{CustomerSeed, InvoiceSeed, RevenueSeed, SeedData, UserSeed};
use acme::acme_config::SeedConfig;
use acme::acme_models::InvoiceStatus;
use acme::router::init_router;
use acme::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_USER_ID: Uuid = Uuid::from_u128(0x410544b2_4001_4271_9855_fec4b6a6442a);
pub const TEST_CUSTOMER_ID: Uuid = Uuid::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81aa);
pub const TEST_PASSWORD: &str = "123456";

/// Lowest bcrypt cost, to keep tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_seed_config() -> SeedConfig {
    SeedConfig::default().with_bcrypt_cost(TEST_BCRYPT_COST)
}

/// One user, one customer, one invoice billed to that customer and one
/// revenue row for "2024".
pub fn single_record_dataset() -> SeedData {
    SeedData::default()
        .with_users(vec![UserSeed {
            id: TEST_USER_ID,
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }])
        .with_customers(vec![CustomerSeed {
            id: TEST_CUSTOMER_ID,
            name: "Evil Rabbit".to_string(),
            email: "evil@rabbit.com".to_string(),
            image_url: "/customers/evil-rabbit.png".to_string(),
        }])
        .with_invoices(vec![InvoiceSeed {
            customer_id: TEST_CUSTOMER_ID,
            amount: 15795,
            status: InvoiceStatus::Pending,
            date: NaiveDate::from_ymd_opt(2022, 12, 6).unwrap(),
        }])
        .with_revenue(vec![RevenueSeed {
            month: "2024".to_string(),
            revenue: 2000,
        }])
}

#[allow(dead_code)]
pub fn setup_test_app(pool: PgPool, data: SeedData, config: SeedConfig) -> axum::Router {
    let state = AppState::new(pool)
        .with_seed_config(config)
        .with_seed_data(data);
    init_router(state)
}

#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

#[allow(dead_code)]
pub async fn table_exists(pool: &PgPool, table: &str) -> bool {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = 'public' AND table_name = $1)",
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .unwrap()
}
