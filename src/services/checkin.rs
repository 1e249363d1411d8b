//! Lecture check-in service
//!
//! Runs one check-in attempt end to end: load the lesson and its course,
//! apply the admission gate, then advance the daily counter in storage.
//!
//! The counter read, transition and write happen inside
//! [`LessonStore::advance_counter`] while the store holds the lesson
//! exclusively, so concurrent check-ins on one lesson are serialized rather
//! than racing and no increment is lost.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    checkin::{AdmissionGate, CheckinError},
    config::CheckinConfig,
    geo::Coordinates,
    models::lesson::Lesson,
    repository::{CourseStore, LessonStore},
};

#[derive(Clone)]
pub struct CheckinService {
    lessons: Arc<dyn LessonStore>,
    courses: Arc<dyn CourseStore>,
    gate: AdmissionGate,
}

impl CheckinService {
    pub fn new(
        lessons: Arc<dyn LessonStore>,
        courses: Arc<dyn CourseStore>,
        config: &CheckinConfig,
    ) -> Self {
        Self {
            lessons,
            courses,
            gate: AdmissionGate::new(config.admission_radius_meters),
        }
    }

    /// Record a check-in on `lesson_id` for a requester standing at
    /// `requester`, counting it against the calendar day `today`.
    ///
    /// Returns the lesson's occupancy after this check-in. Rejected attempts
    /// leave the lesson untouched.
    pub async fn attempt_check_in(
        &self,
        lesson_id: i32,
        requester: Coordinates,
        today: NaiveDate,
    ) -> Result<i32, CheckinError> {
        let lesson = self.load_lesson(lesson_id).await?;

        let course = self
            .courses
            .load_course(lesson.course_id)
            .await?
            .ok_or_else(|| {
                CheckinError::NotFound(format!("Course with id {} not found", lesson.course_id))
            })?;

        let admission = self.gate.check(requester, &course)?;
        tracing::debug!(
            "Lesson {} admitted at {:.1}m from course {}",
            lesson_id,
            admission.distance_meters,
            course.id
        );

        // The lesson may have been deleted since it was loaded
        let counter = self
            .lessons
            .advance_counter(lesson_id, today)
            .await?
            .ok_or_else(|| lesson_not_found(lesson_id))?;

        Ok(counter.count)
    }

    async fn load_lesson(&self, lesson_id: i32) -> Result<Lesson, CheckinError> {
        self.lessons
            .load_lesson(lesson_id)
            .await?
            .ok_or_else(|| lesson_not_found(lesson_id))
    }
}

fn lesson_not_found(lesson_id: i32) -> CheckinError {
    CheckinError::NotFound(format!("Lesson with id {} not found", lesson_id))
}
