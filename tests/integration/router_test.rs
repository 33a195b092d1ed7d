use crate::test_state;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use storyquiz::{error::NOT_FOUND_BODY, routes::create_router, ServiceKind};
use tower::util::ServiceExt; // for oneshot

#[tokio::test]
async fn test_every_path_is_not_found() {
    for kind in ServiceKind::ALL {
        for (method, path) in [
            (Method::GET, "/"),
            (Method::GET, "/health"),
            (Method::POST, "/api/v1/quiz"),
            (Method::DELETE, "/stories/42"),
            (Method::PUT, "/deeply/nested/path?query=1"),
        ] {
            let app = create_router(test_state(kind));
            let response = app
                .oneshot(
                    Request::builder()
                        .method(method.clone())
                        .uri(path)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::NOT_FOUND,
                "{} {} {}",
                kind,
                method,
                path
            );
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "text/plain; charset=utf-8"
            );

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
        }
    }
}

#[tokio::test]
async fn test_request_body_is_ignored() {
    let app = create_router(test_state(ServiceKind::GptClient));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/completions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"prompt":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_not_found_without_body_logging() {
    let mut state = test_state(ServiceKind::ShortStories);
    let mut config = (*state.config).clone();
    config.log.log_bodies = false;
    state.config = std::sync::Arc::new(config);

    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/stories")
                .body(Body::from("once upon a time"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_request_id_generated() {
    let app = create_router(test_state(ServiceKind::ApiGateway));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_request_id_propagated() {
    let app = create_router(test_state(ServiceKind::Quiz));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/quiz")
                .header("x-request-id", "client-supplied-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "client-supplied-id");
}

#[tokio::test]
async fn test_large_body_is_not_found() {
    let app = create_router(test_state(ServiceKind::ShortStories));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/upload")
                .body(Body::from(vec![b'a'; 2 * 1024 * 1024]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
}
