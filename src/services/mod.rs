//! Business logic services

pub mod checkin;
pub mod lessons;
pub mod location;

use std::sync::Arc;

use crate::{
    config::CheckinConfig,
    repository::{CourseStore, LessonStore},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub checkin: checkin::CheckinService,
    pub lessons: lessons::LessonsService,
    pub location: location::LocationService,
    courses: Arc<dyn CourseStore>,
}

impl Services {
    /// Create all services over the given stores
    pub fn new(
        lessons: Arc<dyn LessonStore>,
        courses: Arc<dyn CourseStore>,
        checkin_config: &CheckinConfig,
    ) -> Self {
        Self {
            checkin: checkin::CheckinService::new(lessons.clone(), courses.clone(), checkin_config),
            lessons: lessons::LessonsService::new(lessons, courses.clone()),
            location: location::LocationService::new(courses.clone()),
            courses,
        }
    }

    /// Check that storage answers
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        self.courses.ping().await
    }
}
