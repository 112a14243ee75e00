use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;

use crate::routes::app;

async fn test_app() -> (Router, Database) {
    let db = Database::connect_in_memory().await.unwrap();
    (app(db.clone()), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_health_reports_status_and_timestamp() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_weight_created_record_matches_listed_record() {
    let (app, _db) = test_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-01-15", "weight": 82.3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_i64());
    assert_eq!(created["notes"], Value::Null);

    let (status, listed) = send(&app, Method::GET, "/api/weight", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_weight_zero_is_rejected() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-01-15", "weight": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Date and weight are required");

    let (_, listed) = send(&app, Method::GET, "/api/weight", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_weight_list_orders_by_date_descending() {
    let (app, _db) = test_app().await;

    for date in ["2024-01-01", "2024-03-01", "2024-02-01"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/weight",
            Some(json!({ "date": date, "weight": 80 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listed) = send(&app, Method::GET, "/api/weight", None).await;
    let dates: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["date"].as_str().unwrap())
        .collect();

    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[tokio::test]
async fn test_weight_update_unknown_id_is_not_found() {
    let (app, _db) = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-01-01", "weight": 80 })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/weight/123",
        Some(json!({ "date": "2024-01-02", "weight": 79 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Weight entry not found" }));

    let (_, listed) = send(&app, Method::GET, "/api/weight", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["weight"], 80.0);
}

#[tokio::test]
async fn test_weight_update_and_delete() {
    let (app, _db) = test_app().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-01-01", "weight": 80, "notes": "start" })),
    )
    .await;
    let uri = format!("/api/weight/{}", created["id"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "date": "2024-01-08", "weight": 79.2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["weight"], 79.2);
    assert_eq!(updated["notes"], Value::Null);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-01-01", "weight": "heavy" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unparseable_id_is_not_found() {
    let (app, _db) = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-01-01", "weight": 80 })),
    )
    .await;

    for uri in ["/api/weight/abc", "/api/weight/99999999999999999999"] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
        assert_eq!(body, json!({ "error": "Weight entry not found" }));

        let (status, body) = send(
            &app,
            Method::PUT,
            uri,
            Some(json!({ "date": "2024-01-02", "weight": 79 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
        assert_eq!(body, json!({ "error": "Weight entry not found" }));
    }

    let (status, body) = send(&app, Method::GET, "/api/workouts/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Workout not found");

    let (status, body) = send(&app, Method::DELETE, "/api/measurements/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Body measurement not found");

    let (_, listed) = send(&app, Method::GET, "/api/weight", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unpadded_date_is_rejected() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/weight",
        Some(json!({ "date": "2024-5-1", "weight": 80 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Date must be formatted as YYYY-MM-DD");
    let (_, listed) = send(&app, Method::GET, "/api/weight", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_measurements_require_every_field() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/measurements",
        Some(json!({ "date": "2024-02-01", "arms": 35, "legs": 58, "abdomen": 85 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Date and all measurements are required");

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/measurements",
        Some(json!({ "date": "2024-02-01", "arms": 35, "legs": 58, "abdomen": 85, "torso": 101 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["torso"], 101.0);
}

#[tokio::test]
async fn test_measurements_delete_unknown_id_keeps_collection() {
    let (app, _db) = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/measurements",
        Some(json!({ "date": "2024-02-01", "arms": 35, "legs": 58, "abdomen": 85, "torso": 101 })),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/api/measurements/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Body measurement not found");
    let (_, listed) = send(&app, Method::GET, "/api/measurements", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_workout_create_with_single_exercise() {
    let (app, _db) = test_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/workouts",
        Some(json!({
            "date": "2024-05-01",
            "duration": 45,
            "exercises": [{ "name": "Run", "type": "cardio", "distance": 5 }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_i64());
    assert_eq!(created["duration"], 45);
    assert_eq!(created["notes"], Value::Null);

    let exercises = created["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 1);
    let run = &exercises[0];
    assert_eq!(run["name"], "Run");
    assert_eq!(run["type"], "cardio");
    assert_eq!(run["distance"], 5.0);
    assert_eq!(run["workout_id"], created["id"]);
    for field in ["duration", "sets", "reps", "weight", "calories"] {
        assert_eq!(run[field], Value::Null, "{field} should be null");
    }

    let uri = format!("/api/workouts/{}", created["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_workout_requires_exercise_array() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/workouts",
        Some(json!({ "date": "2024-05-01", "duration": 45 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Date, duration and exercises are required");
}

#[tokio::test]
async fn test_workout_replace_with_empty_list_clears_exercises() {
    let (app, _db) = test_app().await;
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/workouts",
        Some(json!({
            "date": "2024-05-01",
            "duration": 45,
            "exercises": [
                { "name": "Run", "type": "cardio", "distance": 5 },
                { "name": "Squat", "type": "strength", "sets": 5, "reps": 5, "weight": 100 }
            ]
        })),
    )
    .await;
    let uri = format!("/api/workouts/{}", created["id"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "date": "2024-05-01", "duration": 50, "exercises": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["duration"], 50);
    assert_eq!(updated["exercises"], json!([]));

    let (_, listed) = send(&app, Method::GET, "/api/workouts", None).await;
    assert_eq!(listed[0]["exercises"], json!([]));
}

#[tokio::test]
async fn test_workout_update_and_delete_unknown_id() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/workouts/7",
        Some(json!({ "date": "2024-05-01", "duration": 30, "exercises": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Workout not found");

    let (status, _) = send(&app, Method::DELETE, "/api/workouts/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/workouts/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let (app, db) = test_app().await;
    db.close().await;

    let (status, body) = send(&app, Method::GET, "/api/weight", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An internal error occurred");
}
