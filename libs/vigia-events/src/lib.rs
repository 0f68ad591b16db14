//! Shared wire types for the Vigia event-ingestion API
//!
//! This crate defines the request/response models exchanged with the
//! ingestion service so that the client and the CLI agree on a single
//! contract.

pub mod error_body;
pub mod event;

pub use error_body::{ApiErrorBody, ErrorDetail, ValidationItem};
pub use event::{now_millis, EventOutcome, EventRecord, EventType};
