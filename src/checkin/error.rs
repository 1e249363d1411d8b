//! Check-in failure taxonomy

use thiserror::Error;

use crate::error::AppError;

#[derive(Error, Debug)]
pub enum CheckinError {
    /// Lesson or its course does not exist
    #[error("{0}")]
    NotFound(String),

    /// Course has no registered coordinates, or proximity cannot be computed
    #[error("Course location not available")]
    LocationUnavailable,

    #[error("Too far ({distance_meters}m). Get closer!")]
    TooFar { distance_meters: u64 },

    #[error(transparent)]
    Storage(#[from] AppError),
}

impl From<CheckinError> for AppError {
    fn from(err: CheckinError) -> Self {
        match err {
            CheckinError::NotFound(msg) => AppError::NotFound(msg),
            e @ (CheckinError::LocationUnavailable | CheckinError::TooFar { .. }) => {
                AppError::BadRequest(e.to_string())
            }
            CheckinError::Storage(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_far_message() {
        let err = CheckinError::TooFar { distance_meters: 230 };
        assert_eq!(err.to_string(), "Too far (230m). Get closer!");
    }

    #[test]
    fn test_rejections_map_to_bad_request() {
        assert!(matches!(
            AppError::from(CheckinError::LocationUnavailable),
            AppError::BadRequest(msg) if msg == "Course location not available"
        ));
        assert!(matches!(
            AppError::from(CheckinError::TooFar { distance_meters: 1111 }),
            AppError::BadRequest(msg) if msg.contains("1111m")
        ));
        assert!(matches!(
            AppError::from(CheckinError::NotFound("Lesson not found".into())),
            AppError::NotFound(_)
        ));
    }
}
