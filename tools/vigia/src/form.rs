//! Submission form controller
//!
//! Transient state of the event form plus the `state, event -> new state`
//! update loop. The form has exactly two logical states, Idle and
//! Submitting; a submission attempt moves Idle -> Submitting and the
//! response (success or failure) moves back.

use vigia_client::EventClient;
use vigia_events::{now_millis, EventOutcome, EventRecord, EventType};

/// Transient form state, owned by the view that created it
#[derive(Debug, Clone)]
pub struct FormState {
    pub camera_id: String,
    pub event_type: EventType,
    /// Raw timestamp input, pre-filled with the current time in ms
    pub timestamp_raw: String,
    pub is_submitting: bool,
    pub last_error: Option<String>,
    pub last_outcome: Option<EventOutcome>,
}

/// Everything that can mutate the form state
#[derive(Debug, Clone)]
pub enum FormEvent {
    CameraIdChanged(String),
    EventTypeChanged(EventType),
    TimestampChanged(String),
    SubmitStarted,
    SubmitSucceeded(EventOutcome),
    SubmitFailed(String),
}

impl FormState {
    pub fn new() -> Self {
        Self {
            camera_id: String::new(),
            event_type: EventType::default(),
            timestamp_raw: now_millis().to_string(),
            is_submitting: false,
            last_error: None,
            last_outcome: None,
        }
    }

    /// Apply one event to the state.
    ///
    /// `SubmitStarted` while a submission is already in flight is rejected
    /// outright; re-entrant submission is a hard guard here, not advisory
    /// debouncing.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::CameraIdChanged(value) => self.camera_id = value,
            FormEvent::EventTypeChanged(event_type) => self.event_type = event_type,
            FormEvent::TimestampChanged(value) => self.timestamp_raw = value,
            FormEvent::SubmitStarted => {
                if self.is_submitting {
                    return;
                }
                self.is_submitting = true;
                self.last_error = None;
                self.last_outcome = None;
            },
            FormEvent::SubmitSucceeded(outcome) => {
                self.is_submitting = false;
                self.last_outcome = Some(outcome);
                self.last_error = None;
            },
            FormEvent::SubmitFailed(message) => {
                self.is_submitting = false;
                self.last_error = Some(message);
                self.last_outcome = None;
            },
        }
    }

    /// Form-level validation only: non-empty camera id, numeric timestamp.
    /// No server-side schema is duplicated here.
    pub fn validate(&self) -> Result<EventRecord, String> {
        if self.camera_id.trim().is_empty() {
            return Err("Camera ID e obrigatorio".to_string());
        }

        let timestamp: i64 = self
            .timestamp_raw
            .trim()
            .parse()
            .map_err(|_| format!("Timestamp invalido: '{}'", self.timestamp_raw))?;

        Ok(EventRecord {
            camera_id: self.camera_id.trim().to_string(),
            event_type: self.event_type,
            timestamp,
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one submission cycle against the ingestion API.
///
/// Exactly one outbound call per invocation when the form validates; a
/// validation failure never reaches the network. Either way the state is
/// back in Idle with exactly one of outcome/error set.
pub async fn submit(state: &mut FormState, client: &EventClient) {
    if state.is_submitting {
        return;
    }

    state.apply(FormEvent::SubmitStarted);

    match state.validate() {
        Ok(record) => match client.submit_event(&record).await {
            Ok(outcome) => state.apply(FormEvent::SubmitSucceeded(outcome)),
            Err(err) => state.apply(FormEvent::SubmitFailed(err.user_message())),
        },
        Err(message) => state.apply(FormEvent::SubmitFailed(message)),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use vigia_client::SERVICE_UNREACHABLE_MSG;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn outcome(alert: bool) -> EventOutcome {
        EventOutcome {
            camera_id: "CAM-001".to_string(),
            event_type: "queda".to_string(),
            alert,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn fresh_form_defaults() {
        let state = FormState::new();
        assert!(state.camera_id.is_empty());
        assert_eq!(state.event_type, EventType::Movement);
        assert!(state.timestamp_raw.parse::<i64>().is_ok());
        assert!(!state.is_submitting);
        assert!(state.last_error.is_none());
        assert!(state.last_outcome.is_none());
    }

    #[test]
    fn submit_started_clears_previous_outcome_and_error() {
        let mut state = FormState::new();
        state.apply(FormEvent::SubmitFailed("boom".to_string()));
        assert!(state.last_error.is_some());

        state.apply(FormEvent::SubmitStarted);
        assert!(state.is_submitting);
        assert!(state.last_error.is_none());
        assert!(state.last_outcome.is_none());
    }

    #[test]
    fn reentrant_submit_is_rejected() {
        let mut state = FormState::new();
        state.apply(FormEvent::SubmitStarted);
        assert!(state.is_submitting);

        // A second start while in flight must not disturb the cycle
        state.apply(FormEvent::SubmitStarted);
        assert!(state.is_submitting);

        state.apply(FormEvent::SubmitSucceeded(outcome(false)));
        assert!(!state.is_submitting);
    }

    #[test]
    fn outcome_and_error_are_mutually_exclusive() {
        let mut state = FormState::new();

        state.apply(FormEvent::SubmitStarted);
        state.apply(FormEvent::SubmitSucceeded(outcome(true)));
        assert!(state.last_outcome.is_some());
        assert!(state.last_error.is_none());

        state.apply(FormEvent::SubmitStarted);
        state.apply(FormEvent::SubmitFailed("Invalid timestamp".to_string()));
        assert!(state.last_outcome.is_none());
        assert_eq!(state.last_error.as_deref(), Some("Invalid timestamp"));
    }

    #[test]
    fn validate_requires_camera_id() {
        let state = FormState::new();
        let err = state.validate().unwrap_err();
        assert!(err.contains("Camera ID"));
    }

    #[test]
    fn validate_requires_numeric_timestamp() {
        let mut state = FormState::new();
        state.apply(FormEvent::CameraIdChanged("CAM-001".to_string()));
        state.apply(FormEvent::TimestampChanged("ontem".to_string()));

        let err = state.validate().unwrap_err();
        assert!(err.contains("Timestamp"));
    }

    #[test]
    fn validate_builds_the_record() {
        let mut state = FormState::new();
        state.apply(FormEvent::CameraIdChanged("  CAM-001  ".to_string()));
        state.apply(FormEvent::EventTypeChanged(EventType::Fall));
        state.apply(FormEvent::TimestampChanged("1700000000000".to_string()));

        let record = state.validate().unwrap();
        assert_eq!(record.camera_id, "CAM-001");
        assert_eq!(record.event_type, EventType::Fall);
        assert_eq!(record.timestamp, 1_700_000_000_000);
    }

    #[tokio::test]
    async fn submit_success_stores_the_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/event"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "camera_id": "CAM-001",
                "event_type": "queda",
                "alert": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = EventClient::new(server.uri());
        let mut state = FormState::new();
        state.apply(FormEvent::CameraIdChanged("CAM-001".to_string()));
        state.apply(FormEvent::EventTypeChanged(EventType::Fall));

        submit(&mut state, &client).await;

        assert!(!state.is_submitting);
        assert!(state.last_error.is_none());
        let outcome = state.last_outcome.as_ref().unwrap();
        assert!(outcome.alert);
    }

    #[tokio::test]
    async fn submit_against_dead_endpoint_stores_fallback_error() {
        let client = EventClient::new("http://127.0.0.1:1");
        let mut state = FormState::new();
        state.apply(FormEvent::CameraIdChanged("CAM-001".to_string()));

        submit(&mut state, &client).await;

        assert!(!state.is_submitting);
        assert!(state.last_outcome.is_none());
        assert_eq!(state.last_error.as_deref(), Some(SERVICE_UNREACHABLE_MSG));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/event"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = EventClient::new(server.uri());
        let mut state = FormState::new();
        // camera_id left empty

        submit(&mut state, &client).await;

        assert!(state.last_error.is_some());
        assert!(state.last_outcome.is_none());
    }
}
