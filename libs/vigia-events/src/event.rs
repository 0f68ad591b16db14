//! Event record and outcome models
//!
//! Wire values follow the ingestion service contract, which uses the
//! original Portuguese identifiers (`movimento`, `queda`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Camera event classification
///
/// Closed set: the ingestion API accepts exactly these five values, so an
/// invalid event type is not representable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    #[serde(rename = "movimento")]
    Movement,
    #[serde(rename = "parado")]
    Stationary,
    #[serde(rename = "queda")]
    Fall,
    #[serde(rename = "inatividade_prolongada")]
    ProlongedInactivity,
    #[serde(rename = "invasao_perimetro")]
    PerimeterBreach,
}

impl EventType {
    /// All event types, in the order the original form lists them
    pub const ALL: [EventType; 5] = [
        EventType::Movement,
        EventType::Stationary,
        EventType::Fall,
        EventType::ProlongedInactivity,
        EventType::PerimeterBreach,
    ];

    /// Value sent on the wire in `event_type`
    pub fn wire_value(&self) -> &'static str {
        match self {
            EventType::Movement => "movimento",
            EventType::Stationary => "parado",
            EventType::Fall => "queda",
            EventType::ProlongedInactivity => "inatividade_prolongada",
            EventType::PerimeterBreach => "invasao_perimetro",
        }
    }

    /// Human-readable label for menus and cards
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Movement => "Movimento",
            EventType::Stationary => "Parado",
            EventType::Fall => "Queda",
            EventType::ProlongedInactivity => "Inatividade Prolongada",
            EventType::PerimeterBreach => "Invasao Perimetro",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .iter()
            .find(|t| t.wire_value() == s)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = EventType::ALL.iter().map(|t| t.wire_value()).collect();
                format!("unknown event type '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

/// A single observation record submitted for evaluation
///
/// Serializes to `{ "camera_id": ..., "event_type": ..., "timestamp": ... }`,
/// the only request body the ingestion API takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub camera_id: String,
    pub event_type: EventType,
    /// Wall-clock time of the observation, milliseconds since epoch
    pub timestamp: i64,
}

/// Evaluation result returned by the ingestion API
///
/// The shape is assumed, not enforced: anything beyond the three known
/// fields is kept as opaque pass-through in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOutcome {
    pub camera_id: String,
    pub event_type: String,
    /// True when the backend classified the event as critical
    pub alert: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Current wall-clock time in milliseconds, the default timestamp for a
/// fresh form
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
