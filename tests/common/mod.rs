//! Shared fixtures for router and check-in tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use jsonwebtoken::{encode, EncodingKey, Header};

use uniadvisor_server::{
    config::{AppConfig, AuthConfig, CheckinConfig},
    identity::{JwtIdentityVerifier, ProviderClaims},
    models::{course::Course, faculty::Faculty, lesson::Lesson},
    repository::memory::InMemoryStore,
    services::Services,
    AppState,
};

pub const SECRET: &str = "test-secret";

/// Course at (45.0, 9.0) with lessons 1 and 2; course 2 has no latitude
/// and owns lesson 3.
pub async fn seeded_store() -> Arc<InMemoryStore> {
    seed(InMemoryStore::new()).await
}

/// Same data as [`seeded_store`], with every counter update taking `latency`
pub async fn slow_seeded_store(latency: Duration) -> Arc<InMemoryStore> {
    seed(InMemoryStore::with_write_latency(latency)).await
}

async fn seed(store: InMemoryStore) -> Arc<InMemoryStore> {
    let store = Arc::new(store);
    store
        .insert_faculty(Faculty {
            id: 1,
            name: "Ingegneria".to_string(),
            address: Some("Piazza Leonardo da Vinci 32".to_string()),
            building_name: Some("Edificio 3".to_string()),
            latitude: Some(45.0),
            longitude: Some(9.0),
        })
        .await;
    store
        .insert_course(Course {
            id: 1,
            name: "Sistemi Operativi".to_string(),
            faculty_id: 1,
            teacher_id: Some(1),
            teacher_name: Some("Prof. Rossi".to_string()),
            room_number: Some("3.0.1".to_string()),
            building_name: Some("Edificio 3".to_string()),
            latitude: Some(45.0),
            longitude: Some(9.0),
            floor: Some(0),
        })
        .await;
    store
        .insert_course(Course {
            id: 2,
            name: "Reti Logiche".to_string(),
            faculty_id: 1,
            teacher_id: None,
            teacher_name: None,
            room_number: None,
            building_name: None,
            latitude: None,
            longitude: Some(9.0),
            floor: None,
        })
        .await;
    store.insert_lesson(lesson(1, 1, 0, None)).await;
    store.insert_lesson(lesson(2, 1, 0, None)).await;
    store.insert_lesson(lesson(3, 2, 0, None)).await;
    store
}

pub fn lesson(id: i32, course_id: i32, checkins: i32, last_checkin_date: Option<NaiveDate>) -> Lesson {
    Lesson {
        id,
        day_of_week: "Monday".to_string(),
        start_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        course_id,
        checkins,
        last_checkin_date,
    }
}

/// Services over `store` with the shipped check-in settings
pub fn services(store: Arc<InMemoryStore>) -> Services {
    Services::new(store.clone(), store, &CheckinConfig::default())
}

pub fn app_state(store: Arc<InMemoryStore>) -> AppState {
    let config = AppConfig {
        auth: AuthConfig {
            jwt_secret: SECRET.to_string(),
            issuer: None,
            audience: None,
        },
        ..AppConfig::default()
    };

    AppState {
        services: Arc::new(services(store)),
        identity: Arc::new(JwtIdentityVerifier::new(&config.auth)),
        config: Arc::new(config),
    }
}

pub fn token(subject: &str) -> String {
    encode(
        &Header::default(),
        &ProviderClaims {
            sub: subject.to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        },
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}
