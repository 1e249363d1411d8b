//! API integration tests against a running server
//!
//! Requires a server on localhost:8080 with a seeded database, and a provider
//! token in `UNIADVISOR_TEST_TOKEN`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn auth_token() -> String {
    std::env::var("UNIADVISOR_TEST_TOKEN").expect("UNIADVISOR_TEST_TOKEN not set")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_checkin() {
    let client = Client::new();

    let response = client
        .post(format!("{}/lessons/1/checkin", BASE_URL))
        .json(&json!({"latitude": 45.0, "longitude": 9.0}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_checkin_unknown_lesson() {
    let client = Client::new();

    let response = client
        .post(format!("{}/lessons/2147483647/checkin", BASE_URL))
        .bearer_auth(auth_token())
        .json(&json!({"latitude": 45.0, "longitude": 9.0}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_courses_map() {
    let client = Client::new();

    let response = client
        .get(format!("{}/location/courses/map", BASE_URL))
        .bearer_auth(auth_token())
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_checkin_far_away_is_rejected() {
    let client = Client::new();
    let token = auth_token();

    let courses: Value = client
        .get(format!("{}/location/courses/map", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let Some(course) = courses.as_array().and_then(|c| c.first()) else {
        return;
    };
    let course_id = course["id"].as_i64().expect("No course ID");

    let lessons: Value = client
        .get(format!("{}/lessons/course/{}", BASE_URL, course_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let Some(lesson) = lessons.as_array().and_then(|l| l.first()) else {
        return;
    };
    let lesson_id = lesson["id"].as_i64().expect("No lesson ID");
    let latitude = course["latitude"].as_f64().expect("No latitude");
    let longitude = course["longitude"].as_f64().expect("No longitude");

    let far_latitude = if latitude > 0.0 { latitude - 1.0 } else { latitude + 1.0 };
    let response = client
        .post(format!("{}/lessons/{}/checkin", BASE_URL, lesson_id))
        .bearer_auth(&token)
        .json(&json!({"latitude": far_latitude, "longitude": longitude}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap_or_default().starts_with("Too far"));
}
