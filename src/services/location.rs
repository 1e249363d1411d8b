//! Campus map, course location and navigation service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    geo::{self, Coordinates},
    models::{
        course::{Course, CourseMapEntry},
        faculty::{FacultyLocation, FacultyMapEntry},
        location::{CourseLocation, Destination, NavigationInfo, NearbyCourse, NearbyCourses},
    },
    repository::CourseStore,
};

/// Radius used by the nearby search when none is given
pub const DEFAULT_NEARBY_RADIUS_METERS: f64 = 1000.0;

#[derive(Clone)]
pub struct LocationService {
    courses: Arc<dyn CourseStore>,
}

impl LocationService {
    pub fn new(courses: Arc<dyn CourseStore>) -> Self {
        Self { courses }
    }

    /// Faculties that can be placed on the map
    pub async fn faculties_map(&self) -> AppResult<Vec<FacultyMapEntry>> {
        let faculties = self.courses.list_located_faculties().await?;
        Ok(faculties
            .into_iter()
            .filter_map(|f| {
                let location = f.coordinates()?;
                Some(FacultyMapEntry {
                    id: f.id,
                    name: f.name,
                    latitude: location.latitude,
                    longitude: location.longitude,
                    building_name: f.building_name,
                })
            })
            .collect())
    }

    pub async fn faculty_location(&self, faculty_id: i32) -> AppResult<FacultyLocation> {
        let faculty = self
            .courses
            .load_faculty(faculty_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Faculty not found".to_string()))?;
        let location = faculty
            .coordinates()
            .ok_or_else(|| AppError::NotFound("Faculty location not available".to_string()))?;

        Ok(FacultyLocation {
            id: faculty.id,
            name: faculty.name,
            latitude: location.latitude,
            longitude: location.longitude,
            address: faculty.address,
            building_name: faculty.building_name,
        })
    }

    /// Courses that can be placed on the map
    pub async fn courses_map(&self, faculty_id: Option<i32>) -> AppResult<Vec<CourseMapEntry>> {
        let courses = self.courses.list_located_courses(faculty_id).await?;
        Ok(courses.iter().filter_map(CourseMapEntry::from_course).collect())
    }

    /// Course location, plus distance and walking time from `user` if given
    pub async fn course_location(
        &self,
        course_id: i32,
        user: Option<Coordinates>,
    ) -> AppResult<CourseLocation> {
        let (course, location) = self.located_course(course_id).await?;

        let distance = match user {
            Some(user) => Some(checked_distance(user, location)?),
            None => None,
        };

        Ok(CourseLocation {
            id: course.id,
            name: course.name,
            room_number: course.room_number,
            building_name: course.building_name,
            latitude: location.latitude,
            longitude: location.longitude,
            floor: course.floor,
            teacher_name: course.teacher_name,
            distance_meters: distance.map(geo::round_distance),
            walking_time_minutes: distance.map(geo::walking_time_minutes),
        })
    }

    /// Courses within `radius_meters` of `origin`, closest first
    pub async fn nearby_courses(
        &self,
        origin: Coordinates,
        radius_meters: f64,
        faculty_id: Option<i32>,
    ) -> AppResult<NearbyCourses> {
        ensure_finite(origin)?;

        let mut courses: Vec<NearbyCourse> = self
            .courses
            .list_located_courses(faculty_id)
            .await?
            .iter()
            .filter_map(|course| {
                let entry = CourseMapEntry::from_course(course)?;
                let distance = origin.distance_to(&Coordinates::new(entry.latitude, entry.longitude));
                (distance <= radius_meters).then(|| NearbyCourse {
                    course: entry,
                    teacher_name: course.teacher_name.clone(),
                    distance_meters: geo::round_distance(distance),
                    walking_time_minutes: geo::walking_time_minutes(distance),
                })
            })
            .collect();

        courses.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

        Ok(NearbyCourses {
            user_location: origin,
            radius_meters,
            total_courses_found: courses.len(),
            courses,
        })
    }

    /// Walking directions from `origin` to a course's classroom
    pub async fn navigation(&self, course_id: i32, origin: Coordinates) -> AppResult<NavigationInfo> {
        let (course, location) = self.located_course(course_id).await?;
        let distance = checked_distance(origin, location)?;

        Ok(NavigationInfo {
            course_id: course.id,
            course_name: course.name,
            destination: Destination {
                room_number: course.room_number,
                building_name: course.building_name,
                latitude: location.latitude,
                longitude: location.longitude,
                floor: course.floor,
            },
            distance_meters: geo::round_distance(distance),
            walking_time_minutes: geo::walking_time_minutes(distance),
            links: geo::navigation_links(origin, location),
        })
    }

    async fn located_course(&self, course_id: i32) -> AppResult<(Course, Coordinates)> {
        let course = self
            .courses
            .load_course(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
        let location = course
            .coordinates()
            .ok_or_else(|| AppError::NotFound("Course location not available".to_string()))?;
        Ok((course, location))
    }
}

fn ensure_finite(point: Coordinates) -> AppResult<()> {
    if point.latitude.is_finite() && point.longitude.is_finite() {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid coordinates".to_string()))
    }
}

fn checked_distance(from: Coordinates, to: Coordinates) -> AppResult<f64> {
    ensure_finite(from)?;
    Ok(geo::distance_meters(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::faculty::Faculty;
    use crate::repository::memory::InMemoryStore;

    fn course(id: i32, faculty_id: i32, latitude: Option<f64>, longitude: Option<f64>) -> Course {
        Course {
            id,
            name: format!("Course {}", id),
            faculty_id,
            teacher_id: Some(11),
            teacher_name: Some("Prof. Bianchi".to_string()),
            room_number: Some(format!("R{}", id)),
            building_name: Some("Main".to_string()),
            latitude,
            longitude,
            floor: Some(2),
        }
    }

    async fn service() -> LocationService {
        let store = InMemoryStore::new();
        store
            .insert_faculty(Faculty {
                id: 1,
                name: "Ingegneria".to_string(),
                address: Some("Via Roma 1".to_string()),
                building_name: Some("B1".to_string()),
                latitude: Some(45.0),
                longitude: Some(9.0),
            })
            .await;
        store
            .insert_faculty(Faculty {
                id: 2,
                name: "Lettere".to_string(),
                address: None,
                building_name: None,
                latitude: None,
                longitude: None,
            })
            .await;
        store.insert_course(course(1, 1, Some(45.0), Some(9.0))).await;
        store.insert_course(course(2, 1, Some(45.005), Some(9.0))).await;
        store.insert_course(course(3, 2, Some(45.002), Some(9.0))).await;
        store.insert_course(course(4, 2, None, Some(9.0))).await;
        store.insert_course(course(5, 1, Some(46.0), Some(9.0))).await;
        LocationService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_maps_skip_unlocated_entries() {
        let service = service().await;
        let faculties = service.faculties_map().await.unwrap();
        assert_eq!(faculties.len(), 1);
        assert_eq!(faculties[0].name, "Ingegneria");

        let courses = service.courses_map(None).await.unwrap();
        assert_eq!(courses.len(), 4);
        let filtered = service.courses_map(Some(2)).await.unwrap();
        assert_eq!(filtered.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3]);
    }

    #[tokio::test]
    async fn test_location_not_available() {
        let service = service().await;
        assert!(matches!(
            service.faculty_location(2).await,
            Err(AppError::NotFound(msg)) if msg == "Faculty location not available"
        ));
        assert!(matches!(
            service.course_location(4, None).await,
            Err(AppError::NotFound(msg)) if msg == "Course location not available"
        ));
        assert!(matches!(
            service.course_location(40, None).await,
            Err(AppError::NotFound(msg)) if msg == "Course not found"
        ));
    }

    #[tokio::test]
    async fn test_course_location_with_distance() {
        let service = service().await;
        let plain = service.course_location(2, None).await.unwrap();
        assert!(plain.distance_meters.is_none());
        assert_eq!(plain.teacher_name.as_deref(), Some("Prof. Bianchi"));

        let located = service
            .course_location(2, Some(Coordinates::new(45.0, 9.0)))
            .await
            .unwrap();
        let distance = located.distance_meters.unwrap();
        assert!((distance - 556.0).abs() < 1.0, "got {}", distance);
        assert_eq!(located.walking_time_minutes, Some(7));
    }

    #[tokio::test]
    async fn test_nearby_sorted_by_distance() {
        let service = service().await;
        let nearby = service
            .nearby_courses(Coordinates::new(45.0, 9.0), DEFAULT_NEARBY_RADIUS_METERS, None)
            .await
            .unwrap();

        let ids: Vec<i32> = nearby.courses.iter().map(|c| c.course.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(nearby.total_courses_found, 3);
        assert!(nearby
            .courses
            .iter()
            .all(|c| c.teacher_name.as_deref() == Some("Prof. Bianchi")));
    }

    #[tokio::test]
    async fn test_nearby_rejects_nan_origin() {
        let service = service().await;
        let result = service
            .nearby_courses(Coordinates::new(f64::NAN, 9.0), 1000.0, None)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_navigation_links() {
        let service = service().await;
        let info = service
            .navigation(1, Coordinates::new(45.001, 9.0))
            .await
            .unwrap();
        assert_eq!(info.course_name, "Course 1");
        assert_eq!(info.links.waze_url, "https://waze.com/ul?ll=45,9&navigate=yes");
        assert!(info.links.google_maps_url.contains("origin=45.001,9"));
        assert_eq!(info.walking_time_minutes, 2);
    }
}
