//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, lessons, location};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UniAdvisor API",
        version = "1.0.0",
        description = "Campus life REST API: lessons, lecture check-in and campus navigation",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Lessons
        lessons::check_in,
        lessons::list_course_lessons,
        lessons::create_lesson,
        // Location
        location::faculties_map,
        location::faculty_location,
        location::courses_map,
        location::course_location,
        location::nearby_courses,
        location::navigate,
    ),
    components(
        schemas(
            // Lessons
            lessons::CheckinRequest,
            lessons::CheckinResponse,
            crate::models::lesson::Lesson,
            crate::models::lesson::LessonWithCourse,
            crate::models::lesson::CreateLesson,
            crate::models::course::Course,
            // Location
            crate::geo::Coordinates,
            crate::geo::NavigationLinks,
            crate::models::course::CourseMapEntry,
            crate::models::faculty::FacultyMapEntry,
            crate::models::faculty::FacultyLocation,
            crate::models::location::CourseLocation,
            crate::models::location::NearbyCourse,
            crate::models::location::NearbyCourses,
            crate::models::location::Destination,
            crate::models::location::NavigationInfo,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "lessons", description = "Lessons and lecture check-in"),
        (name = "location", description = "Campus map and navigation")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
