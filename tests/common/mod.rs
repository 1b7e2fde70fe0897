#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use contacts_api::{app, AppState};

/// Router over fresh, empty in-memory collections
pub fn test_app() -> Router {
    app(AppState::in_memory())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Result<TestResponse> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    respond(app, method, uri, request).await
}

/// Send a body as-is, with an optional content type
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string()))?;
    respond(app, method, uri, request).await
}

async fn respond(app: &Router, method: &str, uri: &str, request: Request<Body>) -> Result<TestResponse> {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .context("router failed to respond")?;

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).with_context(|| format!("non-JSON body for {} {}", method, uri))?
    };

    Ok(TestResponse { status, body })
}

pub fn contact_payload(name: &str, mobile: &str) -> Value {
    json!({
        "name": name,
        "imageUrl": format!("https://images.example.com/{}.png", name),
        "mobile": mobile,
        "email": format!("{}@example.com", name),
        "company": "Acme",
        "title": "Engineer",
        "groupId": "friends"
    })
}

/// POST a contact and return its generated id
pub async fn create_contact(app: &Router, name: &str, mobile: &str) -> Result<String> {
    let res = send(app, "POST", "/contacts/", Some(contact_payload(name, mobile))).await?;
    anyhow::ensure!(res.status == StatusCode::OK, "create failed: {} {}", res.status, res.body);
    res.body["_id"]
        .as_str()
        .map(str::to_string)
        .context("created contact has no _id")
}

/// Asserts the uniform `{ msg, data: null, status: "FAILED" }` envelope
pub fn assert_failure(res: &TestResponse, status: StatusCode, msg: &str) {
    assert_eq!(res.status, status, "unexpected status, body: {}", res.body);
    assert_eq!(res.body["msg"], msg, "unexpected message: {}", res.body);
    assert_eq!(res.body["data"], Value::Null);
    assert_eq!(res.body["status"], "FAILED");
}
