//! API Routes
//!
//! HTTP endpoint definitions for the members and courses collections. One
//! repository call per request; results and errors are serialized to JSON by
//! the extractors and the [`AppError`] response conversion.

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::domain::{Course, CoursePatch, CourseSummary, Member, MemberPatch, MemberSummary};
use crate::error::AppError;
use crate::repository::{CourseRepository, MemberRepository};

/// Query string accepted by the list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// Create the API router
pub fn create_router() -> Router<PgPool> {
    Router::new()
        .route("/", get(index))
        // Member endpoints
        .route("/members", get(list_members).post(create_member))
        .route("/members/:id", get(get_member).delete(delete_member))
        .route("/members/:id/edit", put(update_member))
        // Course endpoints
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/:id", get(get_course).delete(delete_course))
        .route("/courses/:id/edit", put(update_course))
}

/// Liveness probe
async fn index() -> &'static str {
    "clubhub API is running"
}

// =========================================================================
// Member endpoints
// =========================================================================

/// List members, optionally filtered by a name search term
async fn list_members(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MemberSummary>>, AppError> {
    tracing::info!("Getting all the members");
    let members = MemberRepository::new(pool)
        .list(query.search.as_deref())
        .await?;
    Ok(Json(members))
}

/// Add a member
async fn create_member(
    State(pool): State<PgPool>,
    Json(body): Json<Value>,
) -> Result<Json<Member>, AppError> {
    tracing::info!("Adding a member");
    let draft = MemberPatch::from_value(&body)?;
    let member = MemberRepository::new(pool).create(draft).await?;
    Ok(Json(member))
}

/// Get a specific member
async fn get_member(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Member>, AppError> {
    tracing::info!("Getting member: {}", id);
    let member = MemberRepository::new(pool)
        .get(&id)
        .await?
        .ok_or(AppError::MemberNotFound(id))?;
    Ok(Json(member))
}

/// Edit a specific member
async fn update_member(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Member>, AppError> {
    tracing::info!("Editing member: {}", id);
    let patch = MemberPatch::from_value(&body)?;
    let member = MemberRepository::new(pool)
        .update(&id, patch)
        .await?
        .ok_or(AppError::MemberNotFound(id))?;
    Ok(Json(member))
}

/// Delete a specific member, returning the record as it existed
async fn delete_member(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Member>, AppError> {
    tracing::info!("Deleting member: {}", id);
    let member = MemberRepository::new(pool)
        .delete(&id)
        .await?
        .ok_or(AppError::MemberNotFound(id))?;
    Ok(Json(member))
}

// =========================================================================
// Course endpoints
// =========================================================================

/// List courses, optionally filtered by a title/instructor search term
async fn list_courses(
    State(pool): State<PgPool>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CourseSummary>>, AppError> {
    tracing::info!("Getting all the courses");
    let courses = CourseRepository::new(pool)
        .list(query.search.as_deref())
        .await?;
    Ok(Json(courses))
}

/// Add a course
async fn create_course(
    State(pool): State<PgPool>,
    Json(body): Json<Value>,
) -> Result<Json<Course>, AppError> {
    tracing::info!("Adding a course");
    let draft = CoursePatch::from_value(&body)?;
    let course = CourseRepository::new(pool).create(draft).await?;
    Ok(Json(course))
}

/// Get a specific course
async fn get_course(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    tracing::info!("Getting course: {}", id);
    let course = CourseRepository::new(pool)
        .get(&id)
        .await?
        .ok_or(AppError::CourseNotFound(id))?;
    Ok(Json(course))
}

/// Edit a specific course
async fn update_course(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Course>, AppError> {
    tracing::info!("Editing course: {}", id);
    let patch = CoursePatch::from_value(&body)?;
    let course = CourseRepository::new(pool)
        .update(&id, patch)
        .await?
        .ok_or(AppError::CourseNotFound(id))?;
    Ok(Json(course))
}

/// Delete a specific course, returning the record as it existed
async fn delete_course(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    tracing::info!("Deleting course: {}", id);
    let course = CourseRepository::new(pool)
        .delete(&id)
        .await?
        .ok_or(AppError::CourseNotFound(id))?;
    Ok(Json(course))
}
