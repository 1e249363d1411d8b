//! In-memory store
//!
//! Implements the storage traits over process-local maps. The counter
//! update runs under the lessons write lock, so it gives the same guarantee
//! as the row lock taken by the PostgreSQL repository.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    checkin::CounterState,
    error::{AppError, AppResult},
    models::{
        course::Course,
        faculty::Faculty,
        lesson::{CreateLesson, Lesson},
    },
    repository::{CourseStore, LessonStore},
};

#[derive(Default)]
pub struct InMemoryStore {
    faculties: RwLock<BTreeMap<i32, Faculty>>,
    courses: RwLock<BTreeMap<i32, Course>>,
    lessons: RwLock<BTreeMap<i32, Lesson>>,
    /// Simulated round trip spent inside each counter update
    write_latency: Duration,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose counter updates hold the lesson lock for `latency`
    pub fn with_write_latency(latency: Duration) -> Self {
        Self {
            write_latency: latency,
            ..Self::default()
        }
    }

    pub async fn insert_faculty(&self, faculty: Faculty) {
        self.faculties.write().await.insert(faculty.id, faculty);
    }

    pub async fn insert_course(&self, course: Course) {
        self.courses.write().await.insert(course.id, course);
    }

    /// Insert or replace a lesson, counter included
    pub async fn insert_lesson(&self, lesson: Lesson) {
        self.lessons.write().await.insert(lesson.id, lesson);
    }

    pub async fn lesson(&self, id: i32) -> Option<Lesson> {
        self.lessons.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl LessonStore for InMemoryStore {
    async fn load_lesson(&self, id: i32) -> AppResult<Option<Lesson>> {
        Ok(self.lesson(id).await)
    }

    async fn list_lessons_for_course(&self, course_id: i32) -> AppResult<Vec<Lesson>> {
        Ok(self
            .lessons
            .read()
            .await
            .values()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn create_lesson(&self, data: &CreateLesson) -> AppResult<Lesson> {
        if !self.courses.read().await.contains_key(&data.course_id) {
            return Err(AppError::NotFound(format!(
                "Course with id {} not found",
                data.course_id
            )));
        }

        let mut lessons = self.lessons.write().await;
        let id = lessons.keys().next_back().map_or(1, |last| last + 1);
        let lesson = Lesson {
            id,
            day_of_week: data.day_of_week.clone(),
            start_time: data.start_time,
            end_time: data.end_time,
            course_id: data.course_id,
            checkins: 0,
            last_checkin_date: None,
        };
        lessons.insert(id, lesson.clone());
        Ok(lesson)
    }

    async fn advance_counter(
        &self,
        lesson_id: i32,
        today: NaiveDate,
    ) -> AppResult<Option<CounterState>> {
        let mut lessons = self.lessons.write().await;
        let Some(lesson) = lessons.get_mut(&lesson_id) else {
            return Ok(None);
        };

        let next = lesson.counter_state().advance(today);
        if !self.write_latency.is_zero() {
            tokio::time::sleep(self.write_latency).await;
        }
        lesson.checkins = next.count;
        lesson.last_checkin_date = next.date;
        Ok(Some(next))
    }
}

#[async_trait]
impl CourseStore for InMemoryStore {
    async fn load_course(&self, id: i32) -> AppResult<Option<Course>> {
        Ok(self.courses.read().await.get(&id).cloned())
    }

    async fn list_located_courses(&self, faculty_id: Option<i32>) -> AppResult<Vec<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .values()
            .filter(|c| c.coordinates().is_some())
            .filter(|c| faculty_id.map_or(true, |f| c.faculty_id == f))
            .cloned()
            .collect())
    }

    async fn load_faculty(&self, id: i32) -> AppResult<Option<Faculty>> {
        Ok(self.faculties.read().await.get(&id).cloned())
    }

    async fn list_located_faculties(&self) -> AppResult<Vec<Faculty>> {
        let mut faculties: Vec<Faculty> = self
            .faculties
            .read()
            .await
            .values()
            .filter(|f| f.coordinates().is_some())
            .cloned()
            .collect();
        faculties.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(faculties)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn lesson(id: i32) -> Lesson {
        Lesson {
            id,
            day_of_week: "Monday".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            course_id: 1,
            checkins: 2,
            last_checkin_date: NaiveDate::from_ymd_opt(2024, 3, 4),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_advance_counter_same_day_and_next_day() {
        let store = InMemoryStore::new();
        store.insert_lesson(lesson(1)).await;

        let same_day = store.advance_counter(1, day(4)).await.unwrap();
        assert_eq!(same_day, Some(CounterState::new(3, Some(day(4)))));

        let next_day = store.advance_counter(1, day(5)).await.unwrap();
        assert_eq!(next_day, Some(CounterState::new(1, Some(day(5)))));

        let stored = store.lesson(1).await.unwrap();
        assert_eq!((stored.checkins, stored.last_checkin_date), (1, Some(day(5))));
    }

    #[tokio::test]
    async fn test_advance_counter_on_missing_lesson() {
        let store = InMemoryStore::new();
        assert_eq!(store.advance_counter(42, day(4)).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_slow_updates_are_serialized() {
        let store = std::sync::Arc::new(InMemoryStore::with_write_latency(Duration::from_millis(1)));
        store.insert_lesson(lesson(1)).await;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.advance_counter(1, day(4)).await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_some());
        }

        assert_eq!(store.lesson(1).await.unwrap().checkins, 22);
    }
}
