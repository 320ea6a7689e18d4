//! Member repository
//!
//! Validated access to the members collection.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Member, MemberPatch, MemberSummary};
use crate::error::AppResult;

use super::search::contains_pattern;

type MemberRow = (String, String, String, String, i64, String, String);

fn member_from_row(
    (id, name, surname, email, age, membership_type, picture): MemberRow,
) -> Member {
    Member {
        id,
        name,
        surname,
        email,
        age,
        membership_type,
        picture,
    }
}

#[derive(Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List members projected to their display fields, in insertion order.
    ///
    /// A non-empty search term filters to members whose "name surname" or
    /// "surname name" concatenation contains the term, case-insensitively,
    /// so a term spanning the field boundary matches in either phrasing.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<MemberSummary>> {
        let rows: Vec<(String, String, String)> = match search.filter(|term| !term.is_empty()) {
            Some(term) => {
                sqlx::query_as(
                    r#"
                    SELECT id, name, surname
                    FROM members
                    WHERE (name || ' ' || surname) ILIKE $1 ESCAPE '\'
                       OR (surname || ' ' || name) ILIKE $1 ESCAPE '\'
                    ORDER BY seq
                    "#,
                )
                .bind(contains_pattern(term))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT id, name, surname FROM members ORDER BY seq")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(|(id, name, surname)| MemberSummary { id, name, surname })
            .collect())
    }

    /// Fetch the full record, `None` if the id is unknown.
    pub async fn get(&self, id: &str) -> AppResult<Option<Member>> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT id, name, surname, email, age, membership_type, picture
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(member_from_row))
    }

    /// Mint an id for the draft, persist it and return the stored record.
    pub async fn create(&self, draft: MemberPatch) -> AppResult<Member> {
        let member = Member::from_draft(Uuid::new_v4().to_string(), draft)?;

        sqlx::query(
            r#"
            INSERT INTO members (id, name, surname, email, age, membership_type, picture)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&member.id)
        .bind(&member.name)
        .bind(&member.surname)
        .bind(&member.email)
        .bind(member.age)
        .bind(&member.membership_type)
        .bind(&member.picture)
        .execute(&self.pool)
        .await?;

        Ok(member)
    }

    /// Merge the patch into the stored record and persist the result,
    /// returning `None` when the id is unknown. Concurrent updates to the
    /// same id are last-write-wins.
    pub async fn update(&self, id: &str, patch: MemberPatch) -> AppResult<Option<Member>> {
        let Some(mut member) = self.get(id).await? else {
            return Ok(None);
        };

        member.apply(patch);

        sqlx::query(
            r#"
            UPDATE members
            SET name = $2, surname = $3, email = $4, age = $5, membership_type = $6, picture = $7
            WHERE id = $1
            "#,
        )
        .bind(&member.id)
        .bind(&member.name)
        .bind(&member.surname)
        .bind(&member.email)
        .bind(member.age)
        .bind(&member.membership_type)
        .bind(&member.picture)
        .execute(&self.pool)
        .await?;

        Ok(Some(member))
    }

    /// Remove the record, returning it as it existed before removal, or
    /// `None` if the id is unknown.
    pub async fn delete(&self, id: &str) -> AppResult<Option<Member>> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            DELETE FROM members
            WHERE id = $1
            RETURNING id, name, surname, email, age, membership_type, picture
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(member_from_row))
    }
}
