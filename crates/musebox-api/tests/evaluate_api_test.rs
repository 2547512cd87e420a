//! Integration tests for the evaluation endpoint.
//!
//! The router is exercised in-process via `tower::ServiceExt::oneshot` with
//! a mock record store injected through `AppState`, so no network access or
//! Notion credentials are required. The mock's call log backs the
//! "no external call occurred" assertions.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use musebox_api::{router, AppState};
use musebox_core::{RecordStatus, TITLE_ELLIPSIS, TITLE_MAX_CHARS};
use musebox_notion::{MockCall, MockRecordStore};

fn app(store: &MockRecordStore) -> axum::Router {
    router(AppState::new(Arc::new(store.clone())))
}

fn valid_body() -> Value {
    json!({
        "inspiration_content": "Build a faster cache",
        "priority_result": "high",
        "suggestion_detail": "Prototype an LRU layer"
    })
}

async fn send(app: axum::Router, method: Method, body: Option<&Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri("/");
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_non_post_methods_get_405_and_no_store_call() {
    let store = MockRecordStore::new();

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let (status, body) = send(app(&store), method.clone(), None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {}", method);
        assert_eq!(body, json!({ "message": "Method Not Allowed" }));
    }

    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_missing_field_is_400_and_echoes_body() {
    let store = MockRecordStore::new();

    for field in ["inspiration_content", "priority_result", "suggestion_detail"] {
        let mut payload = valid_body();
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = send(app(&store), Method::POST, Some(&payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {}", field);
        assert!(
            body["error"].as_str().unwrap().contains(field),
            "error names the field"
        );
        assert_eq!(body["received"], payload);
    }

    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_empty_field_is_rejected() {
    let store = MockRecordStore::new();

    let mut payload = valid_body();
    payload["suggestion_detail"] = json!("");

    let (status, body) = send(app(&store), Method::POST, Some(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["received"], payload);
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_success_response_shape() {
    let store = MockRecordStore::new().with_record_id("page-42");

    let (status, body) = send(app(&store), Method::POST, Some(&valid_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "message": "Notion page page-42 created and updated successfully.",
            "priority": "high"
        })
    );
}

#[tokio::test]
async fn test_two_phase_payloads() {
    let store = MockRecordStore::new().with_record_id("page-42");
    let long_content = "c".repeat(150);
    let payload = json!({
        "inspiration_content": long_content,
        "priority_result": "medium",
        "suggestion_detail": "Split into two sprints"
    });

    let (status, _) = send(app(&store), Method::POST, Some(&payload)).await;
    assert_eq!(status, StatusCode::OK);

    let calls = store.calls();
    assert_eq!(calls.len(), 2);

    match &calls[0] {
        MockCall::Create(record) => {
            let expected_title =
                format!("{}{}", "c".repeat(TITLE_MAX_CHARS), TITLE_ELLIPSIS);
            assert_eq!(record.title, expected_title);
            assert_eq!(record.body, long_content);
            assert_eq!(record.status, RecordStatus::Pending);
        }
        other => panic!("expected create first, got {:?}", other),
    }

    match &calls[1] {
        MockCall::Update(record_id, patch) => {
            assert_eq!(record_id, "page-42");
            assert_eq!(patch.priority, "medium");
            assert_eq!(patch.advice, "Split into two sprints");
            assert_eq!(patch.status, RecordStatus::Processed);
        }
        other => panic!("expected update second, got {:?}", other),
    }
}

#[tokio::test]
async fn test_short_content_title_is_unmodified() {
    let store = MockRecordStore::new();

    let (status, _) = send(app(&store), Method::POST, Some(&valid_body())).await;
    assert_eq!(status, StatusCode::OK);

    match &store.calls()[0] {
        MockCall::Create(record) => {
            assert_eq!(record.title, "Build a faster cache");
            assert!(!record.title.ends_with(TITLE_ELLIPSIS));
        }
        other => panic!("expected create first, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_failure_reports_orphan_id() {
    let store = MockRecordStore::new().with_record_id("page-9").fail_update();

    let (status, body) = send(app(&store), Method::POST, Some(&valid_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["notionItemId"], "page-9");
    assert!(body["details"].as_str().unwrap().contains("update failure"));
}

#[tokio::test]
async fn test_create_failure_reports_null_id() {
    let store = MockRecordStore::new().fail_create();

    let (status, body) = send(app(&store), Method::POST, Some(&valid_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["notionItemId"], Value::Null);
    assert!(body["details"].as_str().unwrap().contains("create failure"));

    // Only the create call was attempted
    assert_eq!(store.call_count(), 1);
}

#[tokio::test]
async fn test_unconfigured_service_fails_closed() {
    let app = router(AppState::unconfigured("NOTION_API_KEY is not set"));

    let (status, body) = send(app, Method::POST, Some(&valid_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "NOTION_API_KEY is not set" })
    );
}

#[tokio::test]
async fn test_resubmission_creates_a_second_record() {
    let store = MockRecordStore::new();

    for _ in 0..2 {
        let (status, _) = send(app(&store), Method::POST, Some(&valid_body())).await;
        assert_eq!(status, StatusCode::OK);
    }

    let creates = store
        .calls()
        .iter()
        .filter(|c| matches!(c, MockCall::Create(_)))
        .count();
    assert_eq!(creates, 2);
}
