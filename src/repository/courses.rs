//! Courses repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::course::Course};

const COURSE_COLUMNS: &str = "c.id, c.name, c.faculty_id, c.teacher_id, t.name AS teacher_name, \
     c.room_number, c.building_name, c.latitude, c.longitude, c.floor";

/// Courses with the name of their teacher, if any
const COURSE_SOURCE: &str = "courses c LEFT JOIN teachers t ON t.id = c.teacher_id";

#[derive(Clone)]
pub struct CoursesRepository {
    pool: Pool<Postgres>,
}

impl CoursesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get course by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {} FROM {} WHERE c.id = $1",
            COURSE_COLUMNS, COURSE_SOURCE
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    /// Courses with both coordinates set, optionally restricted to a faculty
    pub async fn list_located(&self, faculty_id: Option<i32>) -> AppResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(&format!(
            r#"
            SELECT {} FROM {}
            WHERE c.latitude IS NOT NULL
              AND c.longitude IS NOT NULL
              AND ($1::int IS NULL OR c.faculty_id = $1)
            ORDER BY c.id
            "#,
            COURSE_COLUMNS, COURSE_SOURCE
        ))
        .bind(faculty_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
