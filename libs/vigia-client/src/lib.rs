//! HTTP client for the Vigia event-ingestion API
//!
//! Wraps the single `POST /event` contract: submit one observation record,
//! get back the alert decision. Failures are collapsed into a small error
//! taxonomy that the UI turns into a single displayable message.

pub mod client;
pub mod error;

pub use client::EventClient;
pub use error::{ClientError, SERVICE_UNREACHABLE_MSG};
