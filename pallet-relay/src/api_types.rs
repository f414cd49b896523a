//! Form input and wire types for the label page and the Evocon
//! checklist API.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;

/// Form body posted from the label page.
///
/// `pallet_no` stays raw text so a failed parse can echo exactly what
/// the operator typed; a missing field behaves like an empty one.
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub pallet_no: String,
    /// Optional override of the configured station.
    pub station_id: Option<String>,
    /// Optional free text forwarded as the checklist description.
    pub description: Option<String>,
}

/// One checklist element value.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistElement {
    pub id: String,
    pub value: i64,
}

/// Exact JSON body the Evocon checklist endpoint expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistPayload {
    pub checklist_id: String,
    pub description: String,
    /// camelCase derivation would produce `eventTimeIso`, so the exact
    /// wire name is pinned here.
    #[serde(rename = "eventTimeISO")]
    pub event_time_iso: String,
    pub elements: Vec<ChecklistElement>,
    pub station_id: String,
    pub name: String,
}

impl ChecklistPayload {
    /// Assemble the payload for one submission, stamping the event time
    /// at call time (UTC, RFC 3339 with explicit offset).
    pub fn assemble(config: &RelayConfig, form: &SubmissionForm, pallet_no: i64) -> Self {
        Self {
            checklist_id: config.checklist_id.clone(),
            description: form.description.clone().unwrap_or_default(),
            event_time_iso: Utc::now().to_rfc3339(),
            elements: vec![ChecklistElement {
                id: config.pallet_element_id.clone(),
                value: pallet_no,
            }],
            station_id: form
                .station_id
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| config.station_id.clone()),
            name: config.checklist_name.clone(),
        }
    }
}

/// Debug envelope returned to the browser after a completed relay.
///
/// Deliberately verbose: if Evocon rejects the payload, the operator
/// sees exactly what was sent and what came back.
#[derive(Debug, Serialize)]
pub struct RelayReceipt {
    pub posted_to: String,
    pub status_code: u16,
    pub payload_sent: ChecklistPayload,
    pub evocon_response_text: String,
}
