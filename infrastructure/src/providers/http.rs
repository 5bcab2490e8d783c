//! HTTP plumbing shared by the adapters: client setup and error mapping.

use mcq_application::ports::llm_gateway::GatewayError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) fn build_client(timeout_seconds: u64) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))
}

/// Join a base URL and an absolute path without doubling the slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

pub(crate) fn map_status(status: StatusCode, body: &str) -> GatewayError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        GatewayError::RateLimited(body.to_string())
    } else {
        GatewayError::RequestFailed(format!("{}: {}", status, body))
    }
}

/// Check the status, then decode the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response.text().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status(status, &body));
    }
    decode_body(&body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("Undecodable response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            endpoint("http://127.0.0.1:8080/", "/v1/completions"),
            "http://127.0.0.1:8080/v1/completions"
        );
        assert_eq!(
            endpoint("https://api.openai.com", "v1/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, "quota"),
            GatewayError::RateLimited(body) if body == "quota"
        ));
        match map_status(StatusCode::SERVICE_UNAVAILABLE, "loading") {
            GatewayError::RequestFailed(msg) => {
                assert_eq!(msg, "503 Service Unavailable: loading")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_decode_failure_is_invalid_response() {
        let result: Result<serde_json::Value, _> = decode_body("<html>");
        assert!(matches!(result, Err(GatewayError::InvalidResponse(_))));
    }
}
