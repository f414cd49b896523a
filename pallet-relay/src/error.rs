//! Error kinds for the relay, each mapped to its own HTTP status.
//!
//! Every failure is reported to the operator with full diagnostic
//! detail; nothing hides behind a generic internal error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::api_types::ChecklistPayload;

/// Everything that can stop a submission before or during the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The credential variable is unset; no upstream call is attempted.
    #[error("Missing EVOCON_AUTH variable. It must be Base64(username:password) without 'Basic '.")]
    MissingCredential,

    /// The submitted pallet number did not parse as an integer.
    #[error("Invalid pallet_no: {0}")]
    InvalidPalletNo(String),

    /// The upstream call could not be completed (DNS, connect, timeout).
    #[error("Request to Evocon failed: {details}")]
    UpstreamUnreachable {
        details: String,
        url: String,
        payload: ChecklistPayload,
    },
}

impl RelayError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::InvalidPalletNo(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamUnreachable { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            RelayError::UpstreamUnreachable {
                details,
                url,
                payload,
            } => json!({
                "error": "Request to Evocon failed",
                "details": details,
                "url": url,
                "payload_sent": payload,
            }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
