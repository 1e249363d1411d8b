//! Lesson model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{checkin::CounterState, models::course::Course};

/// Scheduled lesson of a course, with its daily occupancy counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lesson {
    pub id: i32,
    /// Day label, e.g. "Monday"
    pub day_of_week: String,
    #[schema(value_type = String, example = "13:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "16:00:00")]
    pub end_time: NaiveTime,
    pub course_id: i32,
    /// Check-ins recorded on `last_checkin_date`
    pub checkins: i32,
    pub last_checkin_date: Option<NaiveDate>,
}

impl Lesson {
    /// Current occupancy counter, as stored
    pub fn counter_state(&self) -> CounterState {
        CounterState {
            count: self.checkins,
            date: self.last_checkin_date,
        }
    }
}

/// Lesson together with a snapshot of its course
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LessonWithCourse {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub course: Option<Course>,
}

/// Create lesson request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLesson {
    #[validate(length(min = 1, max = 16, message = "day_of_week must be between 1 and 16 characters"))]
    pub day_of_week: String,
    #[schema(value_type = String, example = "13:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "16:00:00")]
    pub end_time: NaiveTime,
    pub course_id: i32,
}
