//! Course model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::geo::Coordinates;

/// Course with its classroom location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub faculty_id: i32,
    pub teacher_id: Option<i32>,
    /// Joined from `teachers`
    pub teacher_name: Option<String>,
    /// Classroom number
    pub room_number: Option<String>,
    pub building_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub floor: Option<i32>,
}

impl Course {
    /// Fixed location of the classroom, if both coordinates are registered
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// Course entry for the campus map
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseMapEntry {
    pub id: i32,
    pub name: String,
    pub faculty_id: i32,
    pub room_number: Option<String>,
    pub building_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub floor: Option<i32>,
}

impl CourseMapEntry {
    /// Build a map entry, `None` when the course has no coordinates
    pub fn from_course(course: &Course) -> Option<Self> {
        let location = course.coordinates()?;
        Some(Self {
            id: course.id,
            name: course.name.clone(),
            faculty_id: course.faculty_id,
            room_number: course.room_number.clone(),
            building_name: course.building_name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            floor: course.floor,
        })
    }
}
