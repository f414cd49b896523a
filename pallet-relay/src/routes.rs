use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use tracing::{info, warn};

use crate::api_types::{ChecklistPayload, RelayReceipt, SubmissionForm};
use crate::error::RelayError;
use crate::templates::LABEL_HTML;
use crate::AppState;

/// `GET /`: printable pallet label with the submission form.
pub async fn label_page() -> Html<&'static str> {
    Html(LABEL_HTML)
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /submit`: relay one pallet number to Evocon.
///
/// The response status mirrors whatever Evocon answered. Local failures
/// use their own statuses: 500 missing credential, 400 bad pallet
/// number, 502 upstream unreachable.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> Result<Response, RelayError> {
    let auth = state.config.require_auth()?;
    let pallet_no = parse_pallet_no(&form.pallet_no)?;
    let payload = ChecklistPayload::assemble(&state.config, &form, pallet_no);

    let url = state.evocon.checklist_url().to_string();
    let reply = match state.evocon.submit(auth, &payload).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(pallet_no, error = %err, "submission failed to reach Evocon");
            return Err(RelayError::UpstreamUnreachable {
                details: err.to_string(),
                url,
                payload,
            });
        }
    };

    info!(pallet_no, status = reply.status, "relayed submission to Evocon");

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let receipt = RelayReceipt {
        posted_to: url,
        status_code: reply.status,
        payload_sent: payload,
        evocon_response_text: reply.body,
    };
    Ok((status, Json(receipt)).into_response())
}

/// Parse the raw form value as an integer pallet number.
///
/// Surrounding whitespace is tolerated; anything else echoes the
/// trimmed input back in the error.
fn parse_pallet_no(raw: &str) -> Result<i64, RelayError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| RelayError::InvalidPalletNo(trimmed.to_string()))
}
