//! Repository layer for database operations
//!
//! Services depend on the [`LessonStore`] and [`CourseStore`] traits rather
//! than on PostgreSQL directly. [`Repository`] implements them over a sqlx
//! pool; [`memory::InMemoryStore`] implements them in process.

pub mod courses;
pub mod faculties;
pub mod lessons;
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    checkin::CounterState,
    error::AppResult,
    models::{
        course::Course,
        faculty::Faculty,
        lesson::{CreateLesson, Lesson},
    },
};

/// Lesson persistence, including the serialized counter update
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LessonStore: Send + Sync {
    async fn load_lesson(&self, id: i32) -> AppResult<Option<Lesson>>;

    async fn list_lessons_for_course(&self, course_id: i32) -> AppResult<Vec<Lesson>>;

    async fn create_lesson(&self, data: &CreateLesson) -> AppResult<Lesson>;

    /// Apply [`CounterState::advance`] to the stored counter of `lesson_id`
    /// while holding the lesson exclusively, and return the stored result.
    ///
    /// Concurrent calls on the same lesson queue behind each other, so none
    /// of them works from a stale read. `Ok(None)` when the lesson is gone.
    async fn advance_counter(
        &self,
        lesson_id: i32,
        today: NaiveDate,
    ) -> AppResult<Option<CounterState>>;
}

/// Read access to courses and faculties
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn load_course(&self, id: i32) -> AppResult<Option<Course>>;

    /// Courses with coordinates, optionally filtered by faculty
    async fn list_located_courses(&self, faculty_id: Option<i32>) -> AppResult<Vec<Course>>;

    async fn load_faculty(&self, id: i32) -> AppResult<Option<Faculty>>;

    async fn list_located_faculties(&self) -> AppResult<Vec<Faculty>>;

    /// Check the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub lessons: lessons::LessonsRepository,
    pub courses: courses::CoursesRepository,
    pub faculties: faculties::FacultiesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            lessons: lessons::LessonsRepository::new(pool.clone()),
            courses: courses::CoursesRepository::new(pool.clone()),
            faculties: faculties::FacultiesRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl LessonStore for Repository {
    async fn load_lesson(&self, id: i32) -> AppResult<Option<Lesson>> {
        self.lessons.get_by_id(id).await
    }

    async fn list_lessons_for_course(&self, course_id: i32) -> AppResult<Vec<Lesson>> {
        self.lessons.list_by_course(course_id).await
    }

    async fn create_lesson(&self, data: &CreateLesson) -> AppResult<Lesson> {
        self.lessons.create(data).await
    }

    async fn advance_counter(
        &self,
        lesson_id: i32,
        today: NaiveDate,
    ) -> AppResult<Option<CounterState>> {
        self.lessons.advance_counter(lesson_id, today).await
    }
}

#[async_trait]
impl CourseStore for Repository {
    async fn load_course(&self, id: i32) -> AppResult<Option<Course>> {
        self.courses.get_by_id(id).await
    }

    async fn list_located_courses(&self, faculty_id: Option<i32>) -> AppResult<Vec<Course>> {
        self.courses.list_located(faculty_id).await
    }

    async fn load_faculty(&self, id: i32) -> AppResult<Option<Faculty>> {
        self.faculties.get_by_id(id).await
    }

    async fn list_located_faculties(&self) -> AppResult<Vec<Faculty>> {
        self.faculties.list_located().await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
