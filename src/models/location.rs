//! Campus map and navigation payloads

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    geo::{Coordinates, NavigationLinks},
    models::course::CourseMapEntry,
};

/// Course location, with distance when the caller's position is known
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseLocation {
    pub id: i32,
    pub name: String,
    pub room_number: Option<String>,
    pub building_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub floor: Option<i32>,
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_time_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearbyCourse {
    #[serde(flatten)]
    pub course: CourseMapEntry,
    pub teacher_name: Option<String>,
    pub distance_meters: f64,
    pub walking_time_minutes: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearbyCourses {
    pub user_location: Coordinates,
    pub radius_meters: f64,
    pub total_courses_found: usize,
    pub courses: Vec<NearbyCourse>,
}

/// Classroom a navigation request points to
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Destination {
    pub room_number: Option<String>,
    pub building_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub floor: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationInfo {
    pub course_id: i32,
    pub course_name: String,
    pub destination: Destination,
    pub distance_meters: f64,
    pub walking_time_minutes: u32,
    #[serde(flatten)]
    pub links: NavigationLinks,
}

/// Query parameters for the course map
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CourseMapQuery {
    /// Filter by faculty ID
    pub faculty_id: Option<i32>,
}

/// Optional caller position
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct UserPositionQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub user_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub user_longitude: Option<f64>,
}

impl UserPositionQuery {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.user_latitude, self.user_longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// Required caller position
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct NavigationQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub user_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub user_longitude: f64,
}

/// Query parameters for the nearby-courses search
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct NearbyQuery {
    /// User's current latitude
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// User's current longitude
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Search radius in meters (default 1000)
    #[validate(range(min = 0.0))]
    pub radius_meters: Option<f64>,
    pub faculty_id: Option<i32>,
}
