//! Proximity-based admission control

use crate::{
    checkin::CheckinError,
    geo::{distance_meters, Coordinates},
    models::course::Course,
};

/// Default admission radius around a classroom, in meters
pub const DEFAULT_ADMISSION_RADIUS_METERS: f64 = 150.0;

/// Successful admission decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Admission {
    pub distance_meters: f64,
}

/// Decides whether a requester stands close enough to a course's classroom
#[derive(Debug, Clone, Copy)]
pub struct AdmissionGate {
    radius_meters: f64,
}

impl AdmissionGate {
    pub fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Admit or deny `requester` for `course`
    pub fn check(&self, requester: Coordinates, course: &Course) -> Result<Admission, CheckinError> {
        let target = course.coordinates().ok_or(CheckinError::LocationUnavailable)?;
        self.evaluate(distance_meters(requester, target))
    }

    /// Apply the radius rule to an already computed distance.
    ///
    /// The boundary is inclusive. A non-finite distance cannot prove
    /// proximity and is reported as an unavailable location.
    pub fn evaluate(&self, distance_meters: f64) -> Result<Admission, CheckinError> {
        if !distance_meters.is_finite() {
            return Err(CheckinError::LocationUnavailable);
        }
        if distance_meters <= self.radius_meters {
            Ok(Admission { distance_meters })
        } else {
            Err(CheckinError::TooFar {
                distance_meters: distance_meters.trunc() as u64,
            })
        }
    }
}

impl Default for AdmissionGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMISSION_RADIUS_METERS)
    }
}
