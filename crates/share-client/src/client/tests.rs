//! Unit tests for client module.

use super::*;

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_clone() {
    let config = ClientConfig {
        base_url: "http://test.com".to_string(),
        timeout: Duration::from_secs(10),
    };

    let cloned = config.clone();
    assert_eq!(cloned.base_url, config.base_url);
    assert_eq!(cloned.timeout, config.timeout);
}

// ============================================================================
// ShareClient Creation Tests
// ============================================================================

#[test]
fn test_share_client_new() {
    let client = ShareClient::new(ClientConfig::default());
    assert!(client.is_ok());
}

#[test]
fn test_share_client_with_base_url() {
    let client = ShareClient::with_base_url("http://localhost:3000");
    assert!(client.is_ok());
}

#[test]
fn test_share_client_rejects_invalid_url() {
    let client = ShareClient::with_base_url("not a url");
    assert!(matches!(client, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_share_client_base_url_trimmed() {
    let client = ShareClient::with_base_url("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

// ============================================================================
// URL Building Tests
// ============================================================================

#[test]
fn test_share_url_building() {
    let client = ShareClient::with_base_url("http://localhost:8080").unwrap();

    assert_eq!(
        client.share_url("getAllShares"),
        "http://localhost:8080/api/share/getAllShares"
    );
    assert_eq!(
        client.share_url("deleteShare/7"),
        "http://localhost:8080/api/share/deleteShare/7"
    );
}
