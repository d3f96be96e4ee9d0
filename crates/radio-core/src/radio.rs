//! Radio entity: static configuration plus live runtime status
//!
//! A [`Radio`] holds what the config file knows about a radio and the
//! status an external controller keeps current. All fields are public;
//! the controller drives state transitions by assigning `state` directly,
//! this type only classifies and reports whatever is currently held.

use serde_json::Value;
use tracing::warn;

use crate::config::RadioConfig;
use crate::error::ConfigError;
use crate::state::RadioState;
use crate::status::ClientStatus;

/// Recognized control mode labels
///
/// Reference data only; nothing in this crate enforces membership.
pub const CONTROL_MODES: &[&str] = &[
    "None",             // No PTT control
    "SB9600-XTL-O",     // XTL O-head
    "SB9600-XTL-W",     // XTL W-head
    "SB9600-SPECTRA",   // Astro Spectra W-head
    "SB9600-MCS",       // MCS2000
    "Soundcard-CM108",  // CM108 GPIO PTT
    "Soundcard-VOX",    // Radio-controlled VOX PTT
];

/// Recognized signalling mode labels
///
/// Reference data only; nothing in this crate enforces membership.
pub const SIGNALLING_MODES: &[&str] = &["None", "MDC", "ANI", "Singletone", "QCII"];

/// Check a label against [`CONTROL_MODES`], for callers that want validation
pub fn is_control_mode(label: &str) -> bool {
    CONTROL_MODES.contains(&label)
}

/// Check a label against [`SIGNALLING_MODES`], for callers that want validation
pub fn is_signalling_mode(label: &str) -> bool {
    SIGNALLING_MODES.contains(&label)
}

/// A single controllable radio
#[derive(Debug, Clone, PartialEq)]
pub struct Radio {
    /// Radio name
    pub name: String,
    /// Free-form description
    pub desc: Option<String>,
    /// Control mode label (see [`CONTROL_MODES`])
    pub ctrl_mode: Option<String>,
    /// Control device (serial port, USB path, address)
    pub ctrl_port: Option<String>,
    /// Transmit audio device
    pub tx_dev: Option<String>,
    /// Receive audio device
    pub rx_dev: Option<String>,
    /// Signalling mode label (see [`SIGNALLING_MODES`])
    pub sig_mode: Option<String>,
    /// Opaque signalling identifier
    pub sig_id: Option<Value>,

    /// Current zone text
    pub zone: String,
    /// Current channel text
    pub chan: String,
    /// Last received caller ID
    pub lastid: String,
    /// Receive audio muted
    pub muted: bool,
    /// Radio is in an error state, derived from `state` by [`get_state`](Radio::get_state)
    pub error: bool,
    /// Scan active
    pub scanning: bool,
    /// Talkaround/direct mode active
    pub talkaround: bool,
    /// Monitor active
    pub monitor: bool,
    /// Low transmit power selected
    pub lowpower: bool,
    /// Current connection state
    pub state: RadioState,
}

impl Radio {
    /// Create a new radio with no optional configuration
    ///
    /// Runtime status starts at defaults with `state = Disconnected`.
    /// Nothing is validated; set the remaining config fields directly or
    /// construct through [`Radio::from_config`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: None,
            ctrl_mode: None,
            ctrl_port: None,
            tx_dev: None,
            rx_dev: None,
            sig_mode: None,
            sig_id: None,
            zone: String::new(),
            chan: String::new(),
            lastid: String::new(),
            muted: false,
            error: false,
            scanning: false,
            talkaround: false,
            monitor: false,
            lowpower: false,
            state: RadioState::Disconnected,
        }
    }

    /// Build a radio from a decoded configuration record
    ///
    /// Config values are taken verbatim, including unrecognized mode
    /// labels; runtime status starts at defaults.
    pub fn from_config(config: RadioConfig) -> Self {
        if let Some(mode) = config.ctrl_mode.as_deref() {
            if !is_control_mode(mode) {
                warn!(radio = %config.name, mode, "unrecognized control mode label");
            }
        }
        if let Some(mode) = config.sig_mode.as_deref() {
            if !is_signalling_mode(mode) {
                warn!(radio = %config.name, mode, "unrecognized signalling mode label");
            }
        }

        let mut radio = Radio::new(config.name);
        radio.desc = config.desc;
        radio.ctrl_mode = config.ctrl_mode;
        radio.ctrl_port = config.ctrl_port;
        radio.tx_dev = config.tx_device;
        radio.rx_dev = config.rx_device;
        radio.sig_mode = config.sig_mode;
        radio.sig_id = config.sig_id;
        radio
    }

    /// Get the current state and its human-readable label
    ///
    /// Side effect: refreshes the `error` flag from the state's
    /// classification. This is the only place `error` is derived from
    /// `state`, and repeated calls with an unchanged `state` are stable.
    pub fn get_state(&mut self) -> (RadioState, &'static str) {
        self.error = self.state.is_error();
        (self.state, self.state.label())
    }

    /// Build the status record sent to remote clients
    ///
    /// Refreshes the `error` flag the same way [`get_state`](Radio::get_state)
    /// does. Error states collapse to the literal `"Error"` state text with
    /// the detailed label in `error_text`.
    pub fn encode_client_status(&mut self) -> ClientStatus {
        let (state, label) = self.get_state();

        let (state_text, error_text) = if state.is_error() {
            ("Error".to_string(), label.to_string())
        } else {
            (label.to_string(), String::new())
        };

        ClientStatus {
            name: self.name.clone(),
            zone: self.zone.clone(),
            chan: self.chan.clone(),
            lastid: self.lastid.clone(),
            state: state_text,
            muted: self.muted,
            error: self.error,
            error_text,
            scanning: self.scanning,
            talkaround: self.talkaround,
            monitor: self.monitor,
            lowpower: self.lowpower,
        }
    }

    /// Build the persisted configuration record
    ///
    /// Pure function of the config fields; runtime status never appears.
    pub fn encode_config(&self) -> RadioConfig {
        RadioConfig {
            name: self.name.clone(),
            desc: self.desc.clone(),
            ctrl_mode: self.ctrl_mode.clone(),
            ctrl_port: self.ctrl_port.clone(),
            tx_device: self.tx_dev.clone(),
            rx_device: self.rx_dev.clone(),
            sig_mode: self.sig_mode.clone(),
            sig_id: self.sig_id.clone(),
        }
    }

    /// Reconstruct a radio from a persisted config mapping
    ///
    /// All eight config keys must be present (values may be null); a
    /// missing key fails the decode. Runtime-status keys in the mapping
    /// are ignored, the new radio always starts at status defaults.
    pub fn decode_config(mapping: Value) -> Result<Radio, ConfigError> {
        let config: RadioConfig = serde_json::from_value(mapping)?;
        Ok(Radio::from_config(config))
    }
}
