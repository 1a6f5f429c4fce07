use std::sync::Arc;

use axum::http::{
    HeaderName, HeaderValue, StatusCode,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
};
use axum_test::TestServer;
use clap::Parser;
use dietplan_api::{
    application::http::{
        health::LIVENESS_MESSAGE,
        server::http_server::{router, state},
    },
    args::Args,
};
use dietplan_core::domain::diet::value_objects::{GENERATION_FAILURE_PREFIX, NOT_MEDICAL_REPLY};
use httpmock::prelude::*;
use serde_json::{Value, json};

const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn test_server(gemini: &MockServer, extra: &[&str]) -> TestServer {
    let base_url = gemini.base_url();
    let mut argv = vec![
        "dietplan-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-model",
        "gemini-2.0-flash",
        "--gemini-base-url",
        base_url.as_str(),
    ];
    argv.extend_from_slice(extra);

    let args = Arc::new(Args::parse_from(argv));
    let app_state = state(args).expect("state builds");
    TestServer::new(router(app_state).expect("router builds")).expect("test server starts")
}

fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_empty_symptoms_are_rejected() {
    let gemini = MockServer::start_async().await;
    let generate = gemini
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200).json_body(gemini_reply("unused"));
        })
        .await;
    let server = test_server(&gemini, &[]);

    let response = server
        .post("/diet")
        .json(&json!({ "symptoms": "" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "reply": "No symptoms provided." }));
    generate.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_missing_or_unreadable_symptoms_are_rejected() {
    let gemini = MockServer::start_async().await;
    let server = test_server(&gemini, &[]);

    for body in [json!({}), json!({ "symptoms": null }), json!({ "symptoms": 42 })] {
        let response = server.post("/diet").json(&body).expect_failure().await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "reply": "No symptoms provided." }));
    }

    let response = server
        .post("/diet")
        .text("fever")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_irrelevant_text_gets_guidance_without_generation() {
    let gemini = MockServer::start_async().await;
    let generate = gemini
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200).json_body(gemini_reply("unused"));
        })
        .await;
    let server = test_server(&gemini, &[]);

    let response = server
        .post("/diet")
        .json(&json!({ "symptoms": "I love pizza" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "reply": NOT_MEDICAL_REPLY }));
    generate.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_relevant_symptoms_return_generated_plan() {
    let gemini = MockServer::start_async().await;
    let generate = gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path(GEMINI_PATH)
                .query_param("key", "test-key")
                .body_contains("I have a fever and body ache");
            then.status(200).json_body(gemini_reply("  Plan: ...\n"));
        })
        .await;
    let server = test_server(&gemini, &[]);

    let response = server
        .post("/diet")
        .json(&json!({ "symptoms": "I have a fever and body ache" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "reply": "Plan: ..." }));
    generate.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_symptom_text_beyond_default_body_limit_is_accepted() {
    let gemini = MockServer::start_async().await;
    let generate = gemini
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200).json_body(gemini_reply("Plan: broth"));
        })
        .await;
    let server = test_server(&gemini, &[]);
    let symptoms = format!("fever {}", "a ".repeat(1_100_000));
    assert!(symptoms.len() > 2 * 1024 * 1024);

    let response = server
        .post("/diet")
        .json(&json!({ "symptoms": symptoms }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "reply": "Plan: broth" }));
    generate.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_generation_failure_is_reported_in_band() {
    let gemini = MockServer::start_async().await;
    gemini
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(500).body("backend exploded");
        })
        .await;
    let server = test_server(&gemini, &[]);

    let response = server
        .post("/diet")
        .json(&json!({ "symptoms": "migraine every morning" }))
        .await;

    response.assert_status_ok();
    let reply = response.json::<Value>()["reply"]
        .as_str()
        .expect("reply is a string")
        .to_string();
    assert!(reply.starts_with(GENERATION_FAILURE_PREFIX), "{reply}");
    assert!(reply.contains("backend exploded"), "{reply}");
}

#[tokio::test]
async fn test_liveness_returns_plain_text() {
    let gemini = MockServer::start_async().await;
    let server = test_server(&gemini, &[]);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text(LIVENESS_MESSAGE);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
}

#[tokio::test]
async fn test_any_origin_is_allowed() {
    let gemini = MockServer::start_async().await;
    let server = test_server(&gemini, &[]);

    let response = server
        .get("/")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://diet-bot.netlify.app"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_routes_honour_root_path() {
    let gemini = MockServer::start_async().await;
    gemini
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200).json_body(gemini_reply("Plan: soup"));
        })
        .await;
    let server = test_server(&gemini, &["--root-path", "/api"]);

    server.get("/api/").await.assert_text(LIVENESS_MESSAGE);
    server
        .post("/api/diet")
        .json(&json!({ "symptoms": "sore throat" }))
        .await
        .assert_json(&json!({ "reply": "Plan: soup" }));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let gemini = MockServer::start_async().await;
    let server = test_server(&gemini, &[]);

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<Value>();
    assert!(document["paths"]["/diet"]["post"].is_object());
    assert!(document["paths"]["/"]["get"].is_object());
}
