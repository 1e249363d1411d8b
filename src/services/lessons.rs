//! Lesson scheduling service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::lesson::{CreateLesson, Lesson, LessonWithCourse},
    repository::{CourseStore, LessonStore},
};

#[derive(Clone)]
pub struct LessonsService {
    lessons: Arc<dyn LessonStore>,
    courses: Arc<dyn CourseStore>,
}

impl LessonsService {
    pub fn new(lessons: Arc<dyn LessonStore>, courses: Arc<dyn CourseStore>) -> Self {
        Self { lessons, courses }
    }

    /// List the lessons of a course, each with a snapshot of the course.
    ///
    /// Counters are returned as stored: a count from a previous day is not
    /// reset until the next check-in.
    pub async fn list_for_course(&self, course_id: i32) -> AppResult<Vec<LessonWithCourse>> {
        let course = self
            .courses
            .load_course(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id {} not found", course_id)))?;

        let lessons = self.lessons.list_lessons_for_course(course_id).await?;
        Ok(lessons
            .into_iter()
            .map(|lesson| LessonWithCourse {
                lesson,
                course: Some(course.clone()),
            })
            .collect())
    }

    /// Schedule a new lesson for an existing course
    pub async fn create(&self, data: &CreateLesson) -> AppResult<Lesson> {
        data.validate()?;
        if data.end_time <= data.start_time {
            return Err(AppError::Validation(
                "end_time must be after start_time".to_string(),
            ));
        }

        self.courses
            .load_course(data.course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id {} not found", data.course_id))
            })?;

        let lesson = self.lessons.create_lesson(data).await?;
        tracing::info!("Created lesson {} for course {}", lesson.id, lesson.course_id);
        Ok(lesson)
    }
}
