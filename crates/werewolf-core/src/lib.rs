//! Shared domain types for the werewolf gateway
//!
//! Defines the domain error taxonomy, the uniform response envelope, and the
//! per-request trace context. Kept free of axum so feature crates and the
//! server layer agree on one wire contract without depending on the
//! transport.

mod error;
mod trace;

pub use error::{DomainError, INTERNAL_ERROR, VALIDATION_ERROR, ok_payload, success_payload, to_error_payload};
pub use trace::{REQUEST_ID_HEADER, TRACE_ID_LEN, TraceContext};
