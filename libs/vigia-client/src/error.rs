use thiserror::Error;

/// Fallback message shown when no server-provided detail is available
pub const SERVICE_UNREACHABLE_MSG: &str = "Falha ao enviar. A API esta rodando?";

/// Submission failure taxonomy
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request failed before any response was received
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response with a usable `detail` in the body. `detail` is
    /// already reduced per precedence: first validation message, else the
    /// plain detail string.
    #[error("server rejected event (HTTP {status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// Non-2xx response whose body carried no usable detail
    #[error("unexpected response (HTTP {status})")]
    UnexpectedStatus { status: u16 },

    /// 2xx response with a body that does not decode as an outcome
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Single displayable string for the UI: server-provided detail when
    /// there is one, otherwise the fixed unreachable-service fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { detail, .. } => detail.clone(),
            _ => SERVICE_UNREACHABLE_MSG.to_string(),
        }
    }
}
