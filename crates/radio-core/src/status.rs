//! Client-facing status record
//!
//! [`ClientStatus`] is the shape pushed to remote console clients by the
//! hosting server. This crate only builds the record; transmission is the
//! server's job.

use serde::{Deserialize, Serialize};

/// Snapshot of a radio's live status for a remote client
///
/// Built by [`Radio::encode_client_status`](crate::Radio::encode_client_status).
/// When the radio is in an error state, `state` holds the literal `"Error"`
/// and `error_text` carries the detailed description; otherwise `state`
/// holds the plain label and `error_text` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStatus {
    /// Radio name
    pub name: String,
    /// Current zone text
    pub zone: String,
    /// Current channel text
    pub chan: String,
    /// Last received caller ID
    pub lastid: String,
    /// Status label, or `"Error"` when in an error state
    pub state: String,
    /// Receive audio muted
    pub muted: bool,
    /// Radio is in an error state
    pub error: bool,
    /// Detailed error description, empty when not in error
    #[serde(rename = "errorText")]
    pub error_text: String,
    /// Scan active
    pub scanning: bool,
    /// Talkaround/direct mode active
    pub talkaround: bool,
    /// Monitor active
    pub monitor: bool,
    /// Low transmit power selected
    pub lowpower: bool,
}
