//! Faculty model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::geo::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Faculty {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// Faculty entry for the campus map
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacultyMapEntry {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub building_name: Option<String>,
}

/// Detailed faculty location
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacultyLocation {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub building_name: Option<String>,
}
