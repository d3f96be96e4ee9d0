//! Persisted radio configuration record
//!
//! [`RadioConfig`] is the interchange shape for the externally managed
//! config file. All eight keys must be present in a decoded mapping; the
//! optional ones may be null. Serde field renames pin the exact key
//! spelling so the key set is a compile-time contract.

use serde::{Deserialize, Deserializer, Serialize};

/// Static configuration for one radio, as persisted
///
/// Produced by [`Radio::encode_config`](crate::Radio::encode_config) and
/// consumed by [`Radio::decode_config`](crate::Radio::decode_config).
/// Runtime status never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioConfig {
    /// Radio name
    pub name: String,
    /// Free-form description
    #[serde(deserialize_with = "required_nullable")]
    pub desc: Option<String>,
    /// Control mode label, expected to be one of
    /// [`CONTROL_MODES`](crate::CONTROL_MODES) but not enforced
    #[serde(deserialize_with = "required_nullable")]
    pub ctrl_mode: Option<String>,
    /// Control device (serial port, USB path, address)
    #[serde(deserialize_with = "required_nullable")]
    pub ctrl_port: Option<String>,
    /// Transmit audio device
    #[serde(rename = "txDevice", deserialize_with = "required_nullable")]
    pub tx_device: Option<String>,
    /// Receive audio device
    #[serde(rename = "rxDevice", deserialize_with = "required_nullable")]
    pub rx_device: Option<String>,
    /// Signalling mode label, expected to be one of
    /// [`SIGNALLING_MODES`](crate::SIGNALLING_MODES) but not enforced
    #[serde(deserialize_with = "required_nullable")]
    pub sig_mode: Option<String>,
    /// Opaque signalling identifier, any serializable value
    #[serde(deserialize_with = "required_nullable")]
    pub sig_id: Option<serde_json::Value>,
}

/// Field that must be present in the mapping but may be null
///
/// Serde treats missing `Option` fields as `None`; routing through a
/// `deserialize_with` function opts back into the missing-field error.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}
