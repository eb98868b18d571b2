//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use ladder::api::{
    AssessmentJson, HealthResponse, NameJson, RolesResponse, ScaleJson, ScoreRequest,
    ScoreResponse, StepJson, SummaryJson, SummaryQuery,
};
use ladder_core::{
    Aggregator, FinalScorePolicy, RoleCatalog, RoleLevel, Score, ScoreScale, Step, build_summary,
};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"ok","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// CATALOG TYPES
// =============================================================================

#[test]
fn test_scale_json_matches_slider() {
    let scale = ScaleJson::from(ScoreScale::default());

    let json = serde_json::to_value(&scale).unwrap();
    assert_eq!(json["min"], 0.0);
    assert_eq!(json["max"], 5.0);
    assert_eq!(json["step"], 0.5);
    assert_eq!(json["labels"], serde_json::json!([0, 1, 2, 3, 4, 5]));
}

#[test]
fn test_roles_response_from_builtin_catalog() {
    let catalog = RoleCatalog::builtin().unwrap();
    let roles = RolesResponse::from_catalog(&catalog);

    let steps: Vec<u8> = roles.roles.iter().map(|r| r.step).collect();
    assert_eq!(steps, vec![2, 3, 4, 5, 6, 7]);

    let senior_ii = &roles.roles[3];
    assert_eq!(senior_ii.level, "senior-product-designer-ii");
    assert_eq!(senior_ii.sections.len(), 3);
}

// =============================================================================
// STEP TYPES
// =============================================================================

#[test]
fn test_step_json_role_page() {
    let catalog = RoleCatalog::builtin().unwrap();
    let step = Step::for_role(RoleLevel::PrincipalProductDesigner);

    let page = StepJson::new(step, &catalog);

    assert_eq!(page.step, 6);
    assert_eq!(page.kind, "role");
    assert_eq!(page.level.as_deref(), Some("principal-product-designer"));
    assert_eq!(page.previous, Some(5));
    assert_eq!(page.next, Some(7));
}

#[test]
fn test_step_json_intake_has_no_level() {
    let catalog = RoleCatalog::builtin().unwrap();

    let json = serde_json::to_value(StepJson::new(Step::FIRST, &catalog)).unwrap();

    assert_eq!(json["kind"], "intake");
    assert!(json["level"].is_null());
    assert!(json["previous"].is_null());
}

// =============================================================================
// ASSESSMENT TYPES
// =============================================================================

#[test]
fn test_score_request_accepts_integers_and_halves() {
    let whole: ScoreRequest =
        serde_json::from_str(r#"{"criterion_id":"hiring","score":3}"#).unwrap();
    assert_eq!(whole.score, 3.0);

    let half: ScoreRequest =
        serde_json::from_str(r#"{"criterion_id":"hiring","score":3.5}"#).unwrap();
    assert_eq!(half.criterion_id, "hiring");
    assert_eq!(half.score, 3.5);
}

#[test]
fn test_score_request_missing_score_fails() {
    let result: Result<ScoreRequest, _> = serde_json::from_str(r#"{"criterion_id":"hiring"}"#);
    assert!(result.is_err());
}

#[test]
fn test_score_response_error_shape() {
    let response = ScoreResponse::error("bad score");

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "bad score");
    assert!(json["assessment"].is_null());
}

#[test]
fn test_assessment_json_display_rounding() {
    let catalog = RoleCatalog::builtin().unwrap();
    let mut aggregator = Aggregator::new(&catalog);
    let assessment = aggregator.get_mut(RoleLevel::ProductDesigner).unwrap();
    assessment
        .set_score("design_system", Score::from_half_points(9).unwrap())
        .unwrap();

    let json = AssessmentJson::try_from(&*assessment).unwrap();

    assert_eq!(json.level, "product-designer");
    assert_eq!(json.sections[1].average, 2.25);
    assert_eq!(json.sections[1].average_display, "2.3");
    assert_eq!(json.sections[1].criteria[0].score, 4.5);
}

// =============================================================================
// SUMMARY TYPES
// =============================================================================

#[test]
fn test_summary_query_optional_policy() {
    let empty: SummaryQuery = serde_json::from_str("{}").unwrap();
    assert!(empty.final_score.is_none());

    let literal: SummaryQuery = serde_json::from_str(r#"{"final_score":"literal"}"#).unwrap();
    assert_eq!(literal.final_score.as_deref(), Some("literal"));
}

#[test]
fn test_summary_json_from_untouched_summary() {
    let catalog = RoleCatalog::builtin().unwrap();
    let aggregator = Aggregator::new(&catalog);
    let summary = build_summary(aggregator.assessments(), FinalScorePolicy::Literal).unwrap();

    let json = SummaryJson::from(&summary);

    assert_eq!(json.roles.len(), 6);
    assert_eq!(json.policy, "literal");
    assert_eq!(json.final_score_display, "0.0");
    assert!(json.roles.iter().all(|r| r.overall == 0.0));
}

// =============================================================================
// NAME TYPES
// =============================================================================

#[test]
fn test_name_json_default_is_empty() {
    let name = NameJson::default();
    assert_eq!(serde_json::to_string(&name).unwrap(), r#"{"name":""}"#);
}
