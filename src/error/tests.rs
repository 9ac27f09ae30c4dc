//! Unit tests for error module.

use super::*;

// ============================================================================
// ErrorResponse Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: "Something went wrong".to_string(),
        code: "INTERNAL_ERROR".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"error\":\"Something went wrong\""));
    assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_no_such_share_display() {
    let error = ApiError::NoSuchShare(1);
    assert_eq!(format!("{}", error), "No share exists with id 1");
}

#[test]
fn test_api_error_share_already_exists_display() {
    let error = ApiError::ShareAlreadyExists(1);
    assert_eq!(format!("{}", error), "Share with id 1 already exists");
}

#[test]
fn test_api_error_invalid_request_display() {
    let error = ApiError::InvalidRequest("Missing required field".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid request: Missing required field"
    );
}

#[test]
fn test_api_error_database_display() {
    let error = ApiError::Database("Connection timeout".to_string());
    assert_eq!(format!("{}", error), "Database error: Connection timeout");
}

// ============================================================================
// ApiError IntoResponse Tests
// ============================================================================

#[test]
fn test_api_error_no_such_share_into_response() {
    let response = ApiError::NoSuchShare(1).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_api_error_share_already_exists_into_response() {
    let response = ApiError::ShareAlreadyExists(1).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_api_error_invalid_request_into_response() {
    let response = ApiError::InvalidRequest("Bad input".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_api_error_internal_into_response() {
    let response = ApiError::Internal("Server error".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_api_error_database_into_response() {
    let response = ApiError::Database("DB error".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_share_error_conversion() {
    let not_found: ApiError = ShareError::NoSuchShare(4).into();
    assert!(matches!(not_found, ApiError::NoSuchShare(4)));

    let duplicate: ApiError = ShareError::ShareAlreadyExists(4).into();
    assert!(matches!(duplicate, ApiError::ShareAlreadyExists(4)));
}

#[test]
fn test_storage_error_conversion() {
    let db: ApiError = ShareError::Storage(StorageError::Database(sqlx::Error::RowNotFound)).into();
    assert_eq!(db.status_and_code(), (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"));

    let exhausted: ApiError = StorageError::IdExhausted.into();
    assert_eq!(exhausted.status_and_code().1, "INTERNAL_ERROR");
}

#[test]
fn test_api_error_debug() {
    let debug = format!("{:?}", ApiError::NoSuchShare(12));
    assert!(debug.contains("NoSuchShare"));
    assert!(debug.contains("12"));
}
