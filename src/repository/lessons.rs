//! Lessons repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    checkin::CounterState,
    error::AppResult,
    models::lesson::{CreateLesson, Lesson},
};

const LESSON_COLUMNS: &str =
    "id, day_of_week, start_time, end_time, course_id, checkins, last_checkin_date";

#[derive(Clone)]
pub struct LessonsRepository {
    pool: Pool<Postgres>,
}

impl LessonsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get lesson by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Lesson>> {
        let lesson = sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {} FROM lessons WHERE id = $1",
            LESSON_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(lesson)
    }

    /// List the lessons of a course
    pub async fn list_by_course(&self, course_id: i32) -> AppResult<Vec<Lesson>> {
        let rows = sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {} FROM lessons WHERE course_id = $1 ORDER BY id",
            LESSON_COLUMNS
        ))
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a new lesson with an empty counter
    pub async fn create(&self, data: &CreateLesson) -> AppResult<Lesson> {
        let row = sqlx::query_as::<_, Lesson>(&format!(
            r#"
            INSERT INTO lessons (day_of_week, start_time, end_time, course_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            LESSON_COLUMNS
        ))
        .bind(&data.day_of_week)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.course_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Advance the counter of a lesson under its row lock.
    ///
    /// The `SELECT ... FOR UPDATE` makes concurrent check-ins on the same
    /// lesson wait for each other until commit, so every one of them reads
    /// the counter the previous one wrote.
    pub async fn advance_counter(
        &self,
        lesson_id: i32,
        today: NaiveDate,
    ) -> AppResult<Option<CounterState>> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, (i32, Option<NaiveDate>)>(
            "SELECT checkins, last_checkin_date FROM lessons WHERE id = $1 FOR UPDATE",
        )
        .bind(lesson_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((count, date)) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        let next = CounterState::new(count, date).advance(today);
        sqlx::query("UPDATE lessons SET checkins = $1, last_checkin_date = $2 WHERE id = $3")
            .bind(next.count)
            .bind(next.date)
            .bind(lesson_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(next))
    }
}
