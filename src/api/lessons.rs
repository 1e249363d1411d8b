//! Lesson and check-in endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    config::CheckinConfig,
    error::AppResult,
    geo::Coordinates,
    models::lesson::{CreateLesson, Lesson, LessonWithCourse},
};

use super::AuthenticatedUser;

/// Check-in request: the caller's current position
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckinRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be within [-180, 180]"))]
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckinResponse {
    pub message: String,
    /// Check-ins recorded on this lesson today, this one included
    pub new_occupancy: i32,
}

/// Current calendar day on campus
pub fn campus_today(config: &CheckinConfig) -> NaiveDate {
    campus_day(Utc::now(), config.timezone)
}

/// Calendar day of `now` in the campus zone, daylight saving included
pub fn campus_day(now: DateTime<Utc>, timezone: Tz) -> NaiveDate {
    now.with_timezone(&timezone).date_naive()
}

/// Check in to a lesson
#[utoipa::path(
    post,
    path = "/lessons/{id}/checkin",
    tag = "lessons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = CheckinRequest,
    responses(
        (status = 200, description = "Check-in recorded", body = CheckinResponse),
        (status = 400, description = "Course location not available, or too far from the classroom", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 404, description = "Lesson not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_in(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(lesson_id): Path<i32>,
    Json(request): Json<CheckinRequest>,
) -> AppResult<Json<CheckinResponse>> {
    request.validate()?;

    let today = campus_today(&state.config.checkin);
    let requester = Coordinates::new(request.latitude, request.longitude);

    match state
        .services
        .checkin
        .attempt_check_in(lesson_id, requester, today)
        .await
    {
        Ok(occupancy) => {
            tracing::info!(
                "Check-in by {} on lesson {} admitted, occupancy {}",
                identity.subject,
                lesson_id,
                occupancy
            );
            Ok(Json(CheckinResponse {
                message: "Check-in successful".to_string(),
                new_occupancy: occupancy,
            }))
        }
        Err(e) => {
            tracing::info!(
                "Check-in by {} on lesson {} rejected: {}",
                identity.subject,
                lesson_id,
                e
            );
            Err(e.into())
        }
    }
}

/// List the lessons of a course
#[utoipa::path(
    get,
    path = "/lessons/course/{course_id}",
    tag = "lessons",
    security(("bearer_auth" = [])),
    params(("course_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Lessons with their course", body = Vec<LessonWithCourse>),
        (status = 404, description = "Course not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_course_lessons(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
    Path(course_id): Path<i32>,
) -> AppResult<Json<Vec<LessonWithCourse>>> {
    let lessons = state.services.lessons.list_for_course(course_id).await?;
    Ok(Json(lessons))
}

/// Schedule a lesson
#[utoipa::path(
    post,
    path = "/lessons",
    tag = "lessons",
    security(("bearer_auth" = [])),
    request_body = CreateLesson,
    responses(
        (status = 201, description = "Lesson created", body = Lesson),
        (status = 400, description = "Invalid lesson", body = crate::error::ErrorResponse),
        (status = 404, description = "Course not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_lesson(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(data): Json<CreateLesson>,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    let lesson = state.services.lessons.create(&data).await?;
    tracing::debug!("Lesson {} created by {}", lesson.id, identity.subject);
    Ok((StatusCode::CREATED, Json(lesson)))
}
