//! Integration tests for the Ladder HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::StatusCode;
use axum_test::TestServer;
use ladder::api::{
    AssessmentResponse, HealthResponse, IntakeResponse, NameJson, NameResponse, RolesResponse,
    ScoreResponse, StepResponse, SummaryResponse, create_router, AppState,
};
use ladder_core::{AssessmentSession, RoleCatalog};
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

/// Serializes tests that touch `LADDER_RATE_LIMIT`.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

/// Build a server with the given rate limit while holding the env lock.
fn server_with_rate_limit(rate_limit: &str) -> TestServer {
    let _guard = lock_env();
    // SAFETY: env access is serialized by ENV_MUTEX.
    unsafe { std::env::set_var("LADDER_RATE_LIMIT", rate_limit) };
    let session = AssessmentSession::new(RoleCatalog::builtin().unwrap());
    let router = create_router(AppState::new(session));
    // SAFETY: env access is serialized by ENV_MUTEX.
    unsafe { std::env::remove_var("LADDER_RATE_LIMIT") };
    TestServer::new(router).unwrap()
}

/// Create a test server with a fresh in-memory session and no rate limit.
fn create_test_server() -> TestServer {
    server_with_rate_limit("0")
}

// =============================================================================
// HEALTH & CATALOG
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_roles_lists_six_levels() {
    let server = create_test_server();

    let response = server.get("/roles").await;

    response.assert_status_ok();
    let roles: RolesResponse = response.json();
    assert_eq!(roles.roles.len(), 6);
    assert_eq!(roles.roles[0].level, "product-designer");
    assert_eq!(roles.roles[0].step, 2);
    assert_eq!(roles.roles[5].title, "Principal Product Designer II");
    assert_eq!(roles.scale.labels, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(roles.scale.step, 0.5);

    let counts: Vec<usize> = roles.roles[0]
        .sections
        .iter()
        .map(|s| s.criteria.len())
        .collect();
    assert_eq!(counts, vec![4, 2, 3, 3, 3]);
}

// =============================================================================
// STEP ENDPOINT
// =============================================================================

#[tokio::test]
async fn test_step_pages() {
    let server = create_test_server();

    let response = server.get("/steps/1").await;
    response.assert_status_ok();
    let step: StepResponse = response.json();
    let page = step.step.unwrap();
    assert_eq!(page.kind, "intake");
    assert_eq!(page.title, "Assessment Information");
    assert_eq!(page.previous, None);
    assert_eq!(page.next, Some(2));

    let page = server.get("/steps/3").await.json::<StepResponse>().step.unwrap();
    assert_eq!(page.kind, "role");
    assert_eq!(page.level.as_deref(), Some("product-designer-ii"));

    let page = server.get("/steps/8").await.json::<StepResponse>().step.unwrap();
    assert_eq!(page.kind, "review");
    assert_eq!(page.next, None);
    assert_eq!(page.progress_percent, 100);
}

#[tokio::test]
async fn test_invalid_step_is_not_found() {
    let server = create_test_server();

    for path in ["/steps/0", "/steps/9", "/steps/abc"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: StepResponse = response.json();
        assert!(!body.success);
        assert!(body.error.is_some());
    }
}

// =============================================================================
// ASSESSMENT ENDPOINTS
// =============================================================================

#[tokio::test]
async fn test_assessment_starts_at_zero() {
    let server = create_test_server();

    let response = server.get("/assessments/senior-product-designer").await;

    response.assert_status_ok();
    let body: AssessmentResponse = response.json();
    let assessment = body.assessment.unwrap();
    assert_eq!(assessment.title, "Senior Product Designer");
    assert_eq!(assessment.overall_display, "0.0");
    assert!(assessment.notes.is_empty());
}

#[tokio::test]
async fn test_unknown_level_is_not_found() {
    let server = create_test_server();

    let response = server.get("/assessments/staff-designer").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: AssessmentResponse = response.json();
    assert!(!body.success);
}

#[tokio::test]
async fn test_set_score_updates_averages() {
    let server = create_test_server();

    let response = server
        .post("/assessments/product-designer/scores")
        .json(&json!({"criterion_id": "design_system", "score": 4.5}))
        .await;

    response.assert_status_ok();
    let body: ScoreResponse = response.json();
    assert!(body.success);
    assert_eq!(body.previous, Some(0.0));
    let assessment = body.assessment.unwrap();
    let craft = &assessment.sections[1];
    assert_eq!(craft.title, "Craft & Quality");
    assert_eq!(craft.average_display, "2.3");
    assert_eq!(craft.criteria[0].score, 4.5);
}

#[tokio::test]
async fn test_section_average_scenario() {
    let server = create_test_server();

    for (id, score) in [
        ("problem_identification", 1),
        ("customer_understanding", 2),
        ("industry_trends", 3),
        ("competitor_awareness", 4),
    ] {
        server
            .post("/assessments/product-designer/scores")
            .json(&json!({"criterion_id": id, "score": score}))
            .await
            .assert_status_ok();
    }

    let body: AssessmentResponse = server.get("/assessments/product-designer").await.json();
    let assessment = body.assessment.unwrap();
    assert_eq!(assessment.sections[0].average, 2.5);
    assert_eq!(assessment.sections[0].average_display, "2.5");
}

#[tokio::test]
async fn test_bad_scores_are_rejected() {
    let server = create_test_server();

    for score in [5.5, -0.5, 2.25] {
        let response = server
            .post("/assessments/product-designer/scores")
            .json(&json!({"criterion_id": "hiring", "score": score}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ScoreResponse = response.json();
        assert!(!body.success);
    }

    // Nothing changed.
    let body: AssessmentResponse = server.get("/assessments/product-designer").await.json();
    assert_eq!(body.assessment.unwrap().overall, 0.0);
}

#[tokio::test]
async fn test_unknown_criterion_is_not_found() {
    let server = create_test_server();

    let response = server
        .post("/assessments/product-designer/scores")
        .json(&json!({"criterion_id": "mentorship", "score": 3}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notes_round_trip() {
    let server = create_test_server();

    let response = server
        .put("/assessments/principal-product-designer/notes")
        .json(&json!({"notes": "Drives the design vision"}))
        .await;
    response.assert_status_ok();

    let body: AssessmentResponse = server
        .get("/assessments/principal-product-designer")
        .await
        .json();
    assert_eq!(body.assessment.unwrap().notes, "Drives the design vision");
}

#[tokio::test]
async fn test_notes_too_long_rejected() {
    let server = create_test_server();

    let response = server
        .put("/assessments/product-designer/notes")
        .json(&json!({"notes": "x".repeat(16 * 1024 + 1)}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// =============================================================================
// SUMMARY ENDPOINT
// =============================================================================

#[tokio::test]
async fn test_summary_untouched_is_zero() {
    let server = create_test_server();

    for query in ["", "?final_score=literal", "?final_score=mean"] {
        let response = server.get(&format!("/summary{}", query)).await;
        response.assert_status_ok();
        let body: SummaryResponse = response.json();
        let summary = body.summary.unwrap();
        assert_eq!(summary.roles.len(), 6);
        assert_eq!(summary.final_score_display, "0.0");
    }
}

#[tokio::test]
async fn test_summary_policies() {
    let server = create_test_server();

    for id in ["system_thinking", "quality_standards", "innovation"] {
        server
            .post("/assessments/senior-product-designer-ii/scores")
            .json(&json!({"criterion_id": id, "score": 5}))
            .await
            .assert_status_ok();
    }

    let mean: SummaryResponse = server.get("/summary?final_score=mean").await.json();
    let mean = mean.summary.unwrap();
    assert_eq!(mean.policy, "mean");
    // Design Excellence = 5, other two sections 0: overall 5/3, final (5/3)/6.
    assert_eq!(mean.roles[3].overall_display, "1.7");
    assert_eq!(mean.final_score_display, "0.3");

    let literal: SummaryResponse = server.get("/summary?final_score=literal").await.json();
    let literal = literal.summary.unwrap();
    assert_eq!(literal.policy, "literal");
    assert_eq!(literal.final_score, 0.0);
}

#[tokio::test]
async fn test_summary_unknown_policy() {
    let server = create_test_server();

    let response = server.get("/summary?final_score=median").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// =============================================================================
// NAME & INTAKE ENDPOINTS
// =============================================================================

#[tokio::test]
async fn test_name_round_trip() {
    let server = create_test_server();

    let empty: NameJson = server.get("/name").await.json();
    assert_eq!(empty.name, "");

    let response = server.put("/name").json(&json!({"name": "Ada"})).await;
    response.assert_status_ok();
    let body: NameResponse = response.json();
    assert_eq!(body.name.as_deref(), Some("Ada"));

    let stored: NameJson = server.get("/name").await.json();
    assert_eq!(stored.name, "Ada");
}

#[tokio::test]
async fn test_intake_drops_manager_fields_for_manager_kind() {
    let server = create_test_server();

    let response = server
        .put("/intake")
        .json(&json!({
            "kind": "manager",
            "full_name": "Jordan",
            "email": "jordan@example.com",
            "manager_name": "Alex",
            "manager_email": "alex@example.com"
        }))
        .await;

    response.assert_status_ok();
    let body: IntakeResponse = response.json();
    let intake = body.intake.unwrap();
    assert_eq!(intake.manager_name, None);
    assert_eq!(intake.full_name, "Jordan");

    // The intake name is written through to the name cache.
    let stored: NameJson = server.get("/name").await.json();
    assert_eq!(stored.name, "Jordan");
}

// =============================================================================
// ERROR HANDLING & MIDDLEWARE
// =============================================================================

#[tokio::test]
async fn test_404_on_unknown_endpoint() {
    let server = create_test_server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = create_test_server();

    let response = server
        .post("/assessments/product-designer/scores")
        .text("not json")
        .content_type("application/json")
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_rate_limit_rejects_burst() {
    let server = server_with_rate_limit("1");

    server.get("/health").await.assert_status_ok();
    let response = server.get("/health").await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}
