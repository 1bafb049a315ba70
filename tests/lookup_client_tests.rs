//! Lookup client tests against a mocked binlist API
//! Covers the HTTP status mapping without hitting the real service
use bin_lookup_bot::bin_client::{BinLookup, BinLookupClient, LookupOutcome};
use bin_lookup_bot::bin_validation::Bin;
use bin_lookup_bot::lookup_config::LookupConfig;
use bin_lookup_bot::lookup_errors::LookupFailure;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a client pointing at the mock server
fn create_test_client(base_url: String) -> BinLookupClient {
    let config = LookupConfig {
        base_url,
        ..Default::default()
    };
    BinLookupClient::new(&config).expect("client should build")
}

fn bin(value: &str) -> Bin {
    Bin::parse(value).unwrap()
}

#[tokio::test]
async fn test_lookup_found() {
    let mock_server = MockServer::start().await;

    let mock_response = serde_json::json!({
        "number": {"length": 16, "luhn": true},
        "scheme": "visa",
        "type": "debit",
        "brand": "Traditional",
        "prepaid": false,
        "country": {"name": "United States", "emoji": "🇺🇸", "currency": "USD"},
        "bank": {"name": "Sample Bank"}
    });

    Mock::given(method("GET"))
        .and(path("/464235"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("464235")).await;

    let record = match outcome {
        LookupOutcome::Found(record) => record,
        other => panic!("Expected Found, got {other:?}"),
    };
    assert_eq!(record.scheme.as_deref(), Some("visa"));
    assert_eq!(record.card_type.as_deref(), Some("debit"));
    assert_eq!(record.prepaid, Some(false));
    assert_eq!(
        record.bank.and_then(|b| b.name).as_deref(),
        Some("Sample Bank")
    );
}

#[tokio::test]
async fn test_lookup_sends_static_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/514945"))
        .and(header("Accept-Version", "3"))
        .and(header("User-Agent", "BinLookupBot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"scheme": "mastercard"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("514945")).await;

    assert!(matches!(outcome, LookupOutcome::Found(_)));
}

#[tokio::test]
async fn test_lookup_found_with_unexpected_extra_field_types() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/457173"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "number": {"length": "16"},
            "scheme": "visa",
            "type": "debit",
            "country": {"name": "Denmark", "numeric": 208, "latitude": "56"},
            "bank": {"name": "Jyske Bank", "city": 9800}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("457173")).await;

    match outcome {
        LookupOutcome::Found(record) => {
            assert_eq!(record.scheme.as_deref(), Some("visa"));
            assert_eq!(
                record.country.and_then(|c| c.name).as_deref(),
                Some("Denmark")
            );
        }
        other => panic!("Expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/000000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("000000")).await;

    assert_eq!(outcome, LookupOutcome::NotFound);
}

#[tokio::test]
async fn test_lookup_server_error_truncates_body() {
    let mock_server = MockServer::start().await;
    let long_body = "E".repeat(500);

    Mock::given(method("GET"))
        .and(path("/464235"))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("464235")).await;

    match outcome {
        LookupOutcome::Failed(LookupFailure::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body.chars().count(), 200);
        }
        other => panic!("Expected Failed(Status), got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("464235")).await;

    assert_eq!(
        outcome,
        LookupOutcome::Failed(LookupFailure::Status {
            status: 429,
            body: "Too Many Requests".to_string(),
        })
    );
}

#[tokio::test]
async fn test_lookup_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/464235"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(mock_server.uri());
    let outcome = client.lookup(&bin("464235")).await;

    assert!(matches!(
        outcome,
        LookupOutcome::Failed(LookupFailure::Decode(_))
    ));
}

#[tokio::test]
async fn test_lookup_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"scheme": "visa"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = LookupConfig {
        base_url: mock_server.uri(),
        timeout: Duration::from_millis(200),
        ..Default::default()
    };
    let client = BinLookupClient::new(&config).unwrap();
    let outcome = client.lookup(&bin("464235")).await;

    assert_eq!(outcome, LookupOutcome::Failed(LookupFailure::Timeout));
}

#[tokio::test]
async fn test_lookup_connection_refused() {
    // Nothing listens on port 1
    let client = create_test_client("http://127.0.0.1:1".to_string());
    let outcome = client.lookup(&bin("464235")).await;

    assert!(matches!(
        outcome,
        LookupOutcome::Failed(LookupFailure::Transport(_))
    ));
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/464235"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(format!("{}/", mock_server.uri()));
    let outcome = client.lookup(&bin("464235")).await;

    assert_eq!(outcome, LookupOutcome::NotFound);
}
