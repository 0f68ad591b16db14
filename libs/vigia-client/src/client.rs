//! HTTP client for event submission

use reqwest::{Client, StatusCode};
use tracing::debug;
use vigia_events::{ApiErrorBody, EventOutcome, EventRecord};

use crate::error::ClientError;

/// Client for the event-ingestion API
pub struct EventClient {
    client: Client,
    base_url: String,
}

impl EventClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit one observation record for evaluation.
    ///
    /// Issues exactly one `POST /event` and awaits the single response; no
    /// retry is attempted. A failed submission requires a new call.
    pub async fn submit_event(&self, record: &EventRecord) -> Result<EventOutcome, ClientError> {
        debug!(
            "submitting event: camera={} type={} ts={}",
            record.camera_id, record.event_type, record.timestamp
        );

        let response = self
            .client
            .post(format!("{}/event", self.base_url))
            .json(record)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Decode a raw `(status, body)` pair into an outcome or an error.
///
/// Kept separate from the transport so the precedence rules are testable
/// without a socket.
fn decode_response(status: StatusCode, body: &[u8]) -> Result<EventOutcome, ClientError> {
    if status.is_success() {
        return serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()));
    }

    let detail = serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_string));

    match detail {
        Some(detail) => Err(ClientError::Rejected {
            status: status.as_u16(),
            detail,
        }),
        None => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::SERVICE_UNREACHABLE_MSG;

    #[test]
    fn success_body_decodes_to_outcome() {
        let body = br#"{"camera_id":"CAM-001","event_type":"queda","alert":true,"timestamp":7}"#;
        let outcome = decode_response(StatusCode::OK, body).unwrap();
        assert!(outcome.alert);
        assert_eq!(outcome.camera_id, "CAM-001");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_response(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(err.user_message(), SERVICE_UNREACHABLE_MSG);
    }

    #[test]
    fn validation_error_uses_first_message() {
        let body = br#"{"detail":[{"msg":"camera_id required","loc":["body"]}]}"#;
        let err = decode_response(StatusCode::UNPROCESSABLE_ENTITY, body).unwrap_err();
        assert_eq!(err.user_message(), "camera_id required");
    }

    #[test]
    fn string_detail_is_shown_verbatim() {
        let body = br#"{"detail":"Invalid timestamp"}"#;
        let err = decode_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.user_message(), "Invalid timestamp");
    }

    #[test]
    fn unparseable_error_body_falls_back() {
        let err = decode_response(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedStatus { status: 502 }));
        assert_eq!(err.user_message(), SERVICE_UNREACHABLE_MSG);
    }
}
