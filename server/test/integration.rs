use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wow::{API_BANNER, Stores, build_app};

async fn send(
    app: &Router, method: Method, uri: &str, body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router, method: Method, uri: &str, body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_banner_and_health() {
    let app = build_app(&Stores::memory());

    for uri in ["/api", "/api/"] {
        let (status, body) = send_json(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": API_BANNER}));
    }

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().starts_with("OK"));
}

#[tokio::test]
async fn test_openapi_lists_every_route() {
    let app = build_app(&Stores::memory());

    let (status, doc) =
        send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/events",
        "/api/events/{id}",
        "/api/seed",
        "/api/events/{id}/save",
        "/api/events/{id}/attend",
        "/api/saved",
        "/api/saved/{id}",
        "/api/saved/check/{id}",
        "/api/attended",
        "/api/attended/{id}",
        "/api/attended/check/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn test_seed_then_browse_save_and_attend() {
    let app = build_app(&Stores::memory());

    let (status, body) = send_json(&app, Method::POST, "/api/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Seeded 10 events successfully");

    let (_, music) =
        send_json(&app, Method::GET, "/api/events?category=music", None).await;
    let music = music.as_array().unwrap();
    assert!(!music.is_empty());
    assert!(music.iter().all(|e| e["category"] == "music"));

    let id = music[0]["id"].as_str().unwrap().to_string();
    send_json(&app, Method::POST, &format!("/api/events/{id}/save"), None)
        .await;
    let (_, saved) = send_json(&app, Method::GET, "/api/saved", None).await;
    assert_eq!(saved[0]["event"]["id"], id);

    send_json(
        &app,
        Method::POST,
        &format!("/api/events/{id}/attend"),
        Some(json!({"emoji_rating": "🎉"})),
    )
    .await;
    let (_, saved) = send_json(&app, Method::GET, "/api/saved", None).await;
    assert!(saved.as_array().unwrap().is_empty());

    // Reseeding wipes relationships along with the catalog.
    send_json(&app, Method::POST, "/api/seed", None).await;
    let (_, attended) =
        send_json(&app, Method::GET, "/api/attended", None).await;
    assert!(attended.as_array().unwrap().is_empty());
    let (_, events) = send_json(&app, Method::GET, "/api/events", None).await;
    assert_eq!(events.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_cors_is_permissive() {
    let app = build_app(&Stores::memory());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/events")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
