use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::fs;
use tower::ServiceExt;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use fxadvisor::core::config::{AppConfig, ProviderConfig};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_history_server(
        currency: &str,
        status: u16,
        mock_response: &str,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/history"))
            .and(query_param("symbols", currency))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn config_for(mock_server: &MockServer) -> AppConfig {
        AppConfig {
            provider: ProviderConfig {
                base_url: mock_server.uri(),
                retries: 0,
                retry_delay_ms: 0,
                ..ProviderConfig::default()
            },
            ..AppConfig::default()
        }
    }
}

async fn get(mock_server: &wiremock::MockServer, uri: &str) -> (StatusCode, Value) {
    let config = test_utils::config_for(mock_server);
    let state = fxadvisor::server::build_state(&config).expect("Failed to build state");
    let app = fxadvisor::server::app_router(state);

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    info!(%status, body = %String::from_utf8_lossy(&body), "Received response");
    (status, serde_json::from_slice(&body).unwrap())
}

#[test_log::test(tokio::test)]
async fn test_probe_reports_healthy() {
    let mock_server = wiremock::MockServer::start().await;

    let (status, body) = get(&mock_server, "/api/probe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Application healthy!"}));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_rate_recommends_buy() {
    let mock_response = r#"{
        "rates": {
            "2024-01-03": {"GBP": 0.87},
            "2024-01-01": {"GBP": 0.85},
            "2024-01-02": {"GBP": 0.86}
        },
        "start_at": "2023-12-27",
        "base": "EUR",
        "end_at": "2024-01-03"
    }"#;
    let mock_server = test_utils::create_history_server("GBP", 200, mock_response).await;

    let (status, body) = get(&mock_server, "/api/rate?currency=gbp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"date": "2024-01-03", "currency": "GBP", "value": 0.87, "buy": true})
    );
}

#[test_log::test(tokio::test)]
async fn test_rate_recommends_against_buying() {
    let mock_response = r#"{
        "rates": {
            "2024-01-01": {"USD": 1.5},
            "2024-01-02": {"USD": 1.4},
            "2024-01-03": {"USD": 1.2}
        }
    }"#;
    let mock_server = test_utils::create_history_server("USD", 200, mock_response).await;

    let (status, body) = get(&mock_server, "/api/rate?currency=USD").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-01-03");
    assert_eq!(body["buy"], false);
}

#[test_log::test(tokio::test)]
async fn test_rate_error_statuses() {
    let mock_server = wiremock::MockServer::start().await;
    let (status, body) = get(&mock_server, "/api/rate").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Invalid currency code: ''");

    let (status, body) = get(&mock_server, "/api/rate?currency=USD&currency=GBP").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Invalid query:"))
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());

    let mock_server = test_utils::create_history_server(
        "XYZ",
        400,
        r#"{"error": "Symbols 'XYZ' are invalid for date 2024-01-03."}"#,
    )
    .await;
    let (status, _) = get(&mock_server, "/api/rate?currency=XYZ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mock_server = test_utils::create_history_server("GBP", 200, r#"{"rates": {}}"#).await;
    let (status, body) = get(&mock_server, "/api/rate?currency=GBP").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "No observations available to evaluate");

    let mock_server = test_utils::create_history_server("GBP", 200, "not json").await;
    let (status, _) = get(&mock_server, "/api/rate?currency=GBP").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mock_server = test_utils::create_history_server("GBP", 503, "").await;
    let (status, body) = get(&mock_server, "/api/rate?currency=GBP").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 503);
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_response = r#"{
        "rates": {
            "2024-01-01": {"USD": 1.1},
            "2024-01-02": {"USD": 1.2}
        }
    }"#;
    let mock_server = test_utils::create_history_server("USD", 200, mock_response).await;

    // Setup config file
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        provider:
          base_url: {}
          retries: 0
        window_days: 7
    "#,
        mock_server.uri()
    );

    fs::write(config_path, &config_content).expect("Failed to write config file");

    let result = fxadvisor::run_command(
        fxadvisor::AppCommand::Recommend {
            currencies: vec!["USD".to_string()],
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Recommend command failed with: {:?}",
        result.err()
    );
}
