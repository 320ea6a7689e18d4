//! Database module
//!
//! Schema bootstrap for the two collections.

use sqlx::PgPool;

/// Create the members and courses tables if they do not exist.
///
/// `seq` records insertion order; list results are returned in `seq` order
/// and the column never appears on the wire.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            seq BIGSERIAL,
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            surname TEXT NOT NULL,
            email TEXT NOT NULL,
            age BIGINT NOT NULL,
            membership_type TEXT NOT NULL,
            picture TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            seq BIGSERIAL,
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            instructor_name TEXT NOT NULL,
            instructor_surname TEXT NOT NULL,
            schedule TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
