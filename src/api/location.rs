//! Campus map and navigation endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    geo::Coordinates,
    models::{
        course::CourseMapEntry,
        faculty::{FacultyLocation, FacultyMapEntry},
        location::{
            CourseLocation, CourseMapQuery, NavigationInfo, NavigationQuery, NearbyCourses,
            NearbyQuery, UserPositionQuery,
        },
    },
    services::location::DEFAULT_NEARBY_RADIUS_METERS,
};

use super::AuthenticatedUser;

/// Faculties with a location, for the campus map
#[utoipa::path(
    get,
    path = "/location/faculties/map",
    tag = "location",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Located faculties", body = Vec<FacultyMapEntry>)
    )
)]
pub async fn faculties_map(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
) -> AppResult<Json<Vec<FacultyMapEntry>>> {
    Ok(Json(state.services.location.faculties_map().await?))
}

/// Location details of a faculty
#[utoipa::path(
    get,
    path = "/location/faculties/{id}/location",
    tag = "location",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Faculty location", body = FacultyLocation),
        (status = 404, description = "Faculty or its location not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn faculty_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<FacultyLocation>> {
    Ok(Json(state.services.location.faculty_location(id).await?))
}

/// Courses with a location, for the campus map
#[utoipa::path(
    get,
    path = "/location/courses/map",
    tag = "location",
    security(("bearer_auth" = [])),
    params(CourseMapQuery),
    responses(
        (status = 200, description = "Located courses", body = Vec<CourseMapEntry>)
    )
)]
pub async fn courses_map(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
    Query(query): Query<CourseMapQuery>,
) -> AppResult<Json<Vec<CourseMapEntry>>> {
    Ok(Json(state.services.location.courses_map(query.faculty_id).await?))
}

/// Location details of a course, with distance when the caller's position is given
#[utoipa::path(
    get,
    path = "/location/courses/{id}/location",
    tag = "location",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course ID"), UserPositionQuery),
    responses(
        (status = 200, description = "Course location", body = CourseLocation),
        (status = 404, description = "Course or its location not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn course_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
    Path(id): Path<i32>,
    Query(query): Query<UserPositionQuery>,
) -> AppResult<Json<CourseLocation>> {
    query.validate()?;
    let location = state
        .services
        .location
        .course_location(id, query.coordinates())
        .await?;
    Ok(Json(location))
}

/// Courses within a radius of the caller
#[utoipa::path(
    get,
    path = "/location/courses/nearby",
    tag = "location",
    security(("bearer_auth" = [])),
    params(NearbyQuery),
    responses(
        (status = 200, description = "Courses sorted by distance", body = NearbyCourses),
        (status = 400, description = "Invalid coordinates", body = crate::error::ErrorResponse)
    )
)]
pub async fn nearby_courses(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<NearbyCourses>> {
    query.validate()?;
    let nearby = state
        .services
        .location
        .nearby_courses(
            Coordinates::new(query.latitude, query.longitude),
            query.radius_meters.unwrap_or(DEFAULT_NEARBY_RADIUS_METERS),
            query.faculty_id,
        )
        .await?;
    Ok(Json(nearby))
}

/// Walking directions to a course
#[utoipa::path(
    get,
    path = "/location/navigate/{course_id}",
    tag = "location",
    security(("bearer_auth" = [])),
    params(("course_id" = i32, Path, description = "Course ID"), NavigationQuery),
    responses(
        (status = 200, description = "Navigation info", body = NavigationInfo),
        (status = 404, description = "Course or its location not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn navigate(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_identity): AuthenticatedUser,
    Path(course_id): Path<i32>,
    Query(query): Query<NavigationQuery>,
) -> AppResult<Json<NavigationInfo>> {
    query.validate()?;
    let info = state
        .services
        .location
        .navigation(course_id, Coordinates::new(query.user_latitude, query.user_longitude))
        .await?;
    Ok(Json(info))
}
