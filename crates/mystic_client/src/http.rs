use std::time::Duration;

use serde_json::Value;

use crate::normalize::safe_field;
use crate::ClientError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Connection parameters shared by all remote clients.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

pub(crate) fn build_client(settings: &ClientSettings) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| ClientError::ConnectionFailed(err.to_string()))
}

pub(crate) fn parse_base_url(settings: &ClientSettings) -> Result<url::Url, ClientError> {
    url::Url::parse(&settings.base_url)
        .map_err(|err| ClientError::ConnectionFailed(format!("invalid base url: {err}")))
}

pub(crate) fn join_endpoint(base: &url::Url, path: &str) -> Result<url::Url, ClientError> {
    base.join(path)
        .map_err(|err| ClientError::ConnectionFailed(format!("invalid url: {err}")))
}

/// Sends the request and reads the whole body. Timeouts are treated
/// identically to transport failures.
pub(crate) async fn send_request(
    request: reqwest::RequestBuilder,
) -> Result<(reqwest::StatusCode, String), ClientError> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    let body = response.text().await.map_err(map_reqwest_error)?;
    Ok((status, body))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::ConnectionFailed(format!("timed out: {err}"));
    }
    ClientError::ConnectionFailed(err.to_string())
}

/// A body that is not JSON at all still yields a displayable message.
pub(crate) fn parse_body(body: &str) -> Result<Value, ClientError> {
    serde_json::from_str(body)
        .map_err(|err| ClientError::DomainError(format!("malformed response: {err}")))
}

/// The service can return HTTP 200 while signaling a semantic failure,
/// either as a `status: "error"` flag or as a bare `error` field. This must
/// be checked explicitly on the fetch paths, not just the status code.
pub(crate) fn error_flag(body: &Value) -> Option<String> {
    if body.get("status").and_then(Value::as_str) == Some("error") {
        return Some(safe_field(body, "message", "the service reported an error"));
    }
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    None
}
