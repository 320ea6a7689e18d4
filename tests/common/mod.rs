//! Common test utilities

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const SCHEMA_LOCK: i64 = 727274;

/// Connect to the test database and make sure both collections exist.
///
/// Schema creation is serialized through an advisory lock so concurrently
/// starting tests do not race on CREATE TABLE.
pub async fn setup_test_db() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(SCHEMA_LOCK)
        .execute(&mut *conn)
        .await
        .expect("Failed to take schema lock");

    let schema = clubhub::db::init_schema(&pool).await;

    sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(SCHEMA_LOCK)
        .execute(&mut *conn)
        .await
        .expect("Failed to release schema lock");
    drop(conn);

    schema.expect("Failed to initialize schema");

    pool
}
