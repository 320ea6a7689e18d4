//! Course repository
//!
//! Validated access to the courses collection.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Course, CoursePatch, CourseSummary};
use crate::error::AppResult;

use super::search::contains_pattern;

type CourseRow = (String, String, String, String, String, DateTime<Utc>);

fn course_from_row(
    (id, title, description, instructor_name, instructor_surname, schedule): CourseRow,
) -> Course {
    Course {
        id,
        title,
        description,
        instructor_name,
        instructor_surname,
        schedule,
    }
}

#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List courses projected to their display fields, in insertion order.
    ///
    /// A non-empty search term filters to courses whose concatenated title
    /// and instructor names contain the term, case-insensitively, with the
    /// title tried both before and after the instructor name.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<CourseSummary>> {
        let rows: Vec<(String, String, String, String)> =
            match search.filter(|term| !term.is_empty()) {
                Some(term) => {
                    sqlx::query_as(
                        r#"
                        SELECT id, title, instructor_name, instructor_surname
                        FROM courses
                        WHERE (title || ' ' || instructor_name || ' ' || instructor_surname)
                              ILIKE $1 ESCAPE '\'
                           OR (instructor_name || ' ' || instructor_surname || ' ' || title)
                              ILIKE $1 ESCAPE '\'
                        ORDER BY seq
                        "#,
                    )
                    .bind(contains_pattern(term))
                    .fetch_all(&self.pool)
                    .await?
                }
                None => {
                    sqlx::query_as(
                        "SELECT id, title, instructor_name, instructor_surname FROM courses ORDER BY seq",
                    )
                    .fetch_all(&self.pool)
                    .await?
                }
            };

        Ok(rows
            .into_iter()
            .map(|(id, title, instructor_name, instructor_surname)| CourseSummary {
                id,
                title,
                instructor_name,
                instructor_surname,
            })
            .collect())
    }

    /// Fetch the full record, `None` if the id is unknown.
    pub async fn get(&self, id: &str) -> AppResult<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, instructor_name, instructor_surname, schedule
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(course_from_row))
    }

    /// Mint an id for the draft, persist it and return the stored record.
    pub async fn create(&self, draft: CoursePatch) -> AppResult<Course> {
        let course = Course::from_draft(Uuid::new_v4().to_string(), draft)?;

        sqlx::query(
            r#"
            INSERT INTO courses (id, title, description, instructor_name, instructor_surname, schedule)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&course.id)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.instructor_name)
        .bind(&course.instructor_surname)
        .bind(course.schedule)
        .execute(&self.pool)
        .await?;

        Ok(course)
    }

    /// Merge the patch into the stored record and persist the result,
    /// returning `None` when the id is unknown. Concurrent updates to the
    /// same id are last-write-wins.
    pub async fn update(&self, id: &str, patch: CoursePatch) -> AppResult<Option<Course>> {
        let Some(mut course) = self.get(id).await? else {
            return Ok(None);
        };

        course.apply(patch);

        sqlx::query(
            r#"
            UPDATE courses
            SET title = $2, description = $3, instructor_name = $4,
                instructor_surname = $5, schedule = $6
            WHERE id = $1
            "#,
        )
        .bind(&course.id)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.instructor_name)
        .bind(&course.instructor_surname)
        .bind(course.schedule)
        .execute(&self.pool)
        .await?;

        Ok(Some(course))
    }

    /// Remove the record, returning it as it existed before removal, or
    /// `None` if the id is unknown.
    pub async fn delete(&self, id: &str) -> AppResult<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            DELETE FROM courses
            WHERE id = $1
            RETURNING id, title, description, instructor_name, instructor_surname, schedule
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(course_from_row))
    }
}
