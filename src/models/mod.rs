//! Data models for UniAdvisor

pub mod course;
pub mod faculty;
pub mod lesson;
pub mod location;

// Re-export commonly used types
pub use course::{Course, CourseMapEntry};
pub use faculty::{Faculty, FacultyLocation, FacultyMapEntry};
pub use lesson::{CreateLesson, Lesson, LessonWithCourse};
pub use location::{CourseLocation, NavigationInfo, NearbyCourses};
