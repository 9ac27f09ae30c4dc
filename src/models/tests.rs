//! Unit tests for models module.

use super::*;

fn acme() -> Share {
    Share::new(
        1,
        "ACME",
        100,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

// ============================================================================
// Share Tests
// ============================================================================

#[test]
fn test_share_serialization_uses_camel_case() {
    let json = serde_json::to_string(&acme()).unwrap();
    assert!(json.contains("\"shareId\":1"));
    assert!(json.contains("\"shareName\":\"ACME\""));
    assert!(json.contains("\"marketPrice\":100"));
    assert!(json.contains("\"issueDate\":\"2024-01-01\""));
}

#[test]
fn test_share_deserialization() {
    let json = r#"{"shareId":7,"shareName":"Globex","marketPrice":42,"issueDate":"2023-06-30"}"#;
    let share: Share = serde_json::from_str(json).unwrap();
    assert_eq!(share.share_id, 7);
    assert_eq!(share.share_name, "Globex");
    assert_eq!(share.market_price, 42);
    assert_eq!(
        share.issue_date,
        NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
    );
}

#[test]
fn test_share_missing_id_defaults_to_unassigned() {
    let json = r#"{"shareName":"Initech","marketPrice":5,"issueDate":"2020-02-29"}"#;
    let share: Share = serde_json::from_str(json).unwrap();
    assert_eq!(share.share_id, UNASSIGNED_SHARE_ID);
    assert!(share.has_unassigned_id());
}

#[test]
fn test_share_rejects_date_with_time() {
    let json = r#"{"shareId":1,"shareName":"ACME","marketPrice":1,"issueDate":"2024-01-01T10:00:00Z"}"#;
    assert!(serde_json::from_str::<Share>(json).is_err());
}

#[test]
fn test_share_rejects_fractional_price() {
    let json = r#"{"shareId":1,"shareName":"ACME","marketPrice":1.5,"issueDate":"2024-01-01"}"#;
    assert!(serde_json::from_str::<Share>(json).is_err());
}

#[test]
fn test_share_requires_name() {
    let json = r#"{"shareId":1,"marketPrice":1,"issueDate":"2024-01-01"}"#;
    assert!(serde_json::from_str::<Share>(json).is_err());
}

// ============================================================================
// UpdateMarketPriceRequest Tests
// ============================================================================

#[test]
fn test_update_market_price_request_deserialization() {
    let request: UpdateMarketPriceRequest =
        serde_json::from_str(r#"{"shareId":1,"marketPrice":150}"#).unwrap();
    assert_eq!(request.share_id, 1);
    assert_eq!(request.market_price, 150);
}

// ============================================================================
// DeleteShareResponse Tests
// ============================================================================

#[test]
fn test_delete_share_response_message() {
    let response = DeleteShareResponse::for_share(1);
    assert_eq!(response.message, "Share with 1 deleted successfully!");

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"message":"Share with 1 deleted successfully!"}"#);
}

// ============================================================================
// HealthResponse Tests
// ============================================================================

#[test]
fn test_health_response_serialization() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"status\":\"healthy\""));
    assert!(json.contains("\"version\":\"0.1.0\""));
}
