//! Radio Console Data Model
//!
//! This crate provides the in-memory model for a single remotely
//! controlled radio: its static configuration (name, control and audio
//! devices, signalling mode) and its live runtime status (connection
//! state, zone/channel text, mute/scan/monitor flags).
//!
//! Two interchange shapes cross the crate boundary:
//!
//! - [`RadioConfig`]: the persisted configuration record, round-tripped
//!   through a JSON file managed by the hosting application
//! - [`ClientStatus`]: the live status record a console server pushes to
//!   remote clients
//!
//! Transport, PTT signalling, audio I/O, and persistence live in external
//! collaborators. An external controller drives state transitions by
//! assigning [`Radio::state`] directly; this crate classifies and reports
//! whatever is currently held and makes no thread-safety claim.
//!
//! # Example
//!
//! ```rust
//! use radio_core::{Radio, RadioState};
//!
//! let mut radio = Radio::new("West Tower");
//! radio.state = RadioState::Receiving;
//!
//! let status = radio.encode_client_status();
//! assert_eq!(status.state, "Receiving");
//! assert!(!status.error);
//!
//! radio.state = RadioState::ConnectError;
//! let status = radio.encode_client_status();
//! assert_eq!(status.state, "Error");
//! assert_eq!(status.error_text, "Connection Error");
//! ```

pub mod config;
pub mod error;
pub mod radio;
pub mod state;
pub mod status;

pub use config::RadioConfig;
pub use error::ConfigError;
pub use radio::{is_control_mode, is_signalling_mode, Radio, CONTROL_MODES, SIGNALLING_MODES};
pub use state::{RadioState, ERROR_THRESHOLD};
pub use status::ClientStatus;
