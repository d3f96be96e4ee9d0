//! Radio connection state and its error classification
//!
//! States carry a numeric value used only for classification: anything at
//! or above [`ERROR_THRESHOLD`] is an error state. Two distinct names
//! (`Disconnected` and `Idle`) share the value 0, so equality is always by
//! variant, never by value.

use serde::{Deserialize, Serialize};

/// Lowest numeric value considered an error state
pub const ERROR_THRESHOLD: u8 = 10;

/// Connection/activity state of a radio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RadioState {
    /// Not connected to the radio
    #[default]
    Disconnected,
    /// Connected and idle
    Idle,
    /// Receiving a signal
    Receiving,
    /// Transmitting
    Transmitting,
    /// Failed to connect to the radio
    ConnectError,
    /// Failure while keyed up
    TransmitError,
    /// Failure on the receive path
    ReceiveError,
    /// Unclassified failure
    UnknownError,
}

impl RadioState {
    /// Numeric classification value for this state
    ///
    /// `Disconnected` and `Idle` intentionally share the value 0; use
    /// variant equality to tell them apart.
    pub fn value(&self) -> u8 {
        match self {
            RadioState::Disconnected | RadioState::Idle => 0,
            RadioState::Receiving => 1,
            RadioState::Transmitting => 2,
            RadioState::ConnectError => 10,
            RadioState::TransmitError => 11,
            RadioState::ReceiveError => 12,
            RadioState::UnknownError => 20,
        }
    }

    /// Whether this state is in the error range
    pub fn is_error(&self) -> bool {
        self.value() >= ERROR_THRESHOLD
    }

    /// Variant name exactly as spelled
    pub fn name(&self) -> &'static str {
        match self {
            RadioState::Disconnected => "Disconnected",
            RadioState::Idle => "Idle",
            RadioState::Receiving => "Receiving",
            RadioState::Transmitting => "Transmitting",
            RadioState::ConnectError => "ConnectError",
            RadioState::TransmitError => "TransmitError",
            RadioState::ReceiveError => "ReceiveError",
            RadioState::UnknownError => "UnknownError",
        }
    }

    /// Human-readable status label
    ///
    /// Normal states report their variant name. Error states resolve to a
    /// fixed description, with anything unrecognized in the error range
    /// falling back to "Unknown Error" rather than failing.
    pub fn label(&self) -> &'static str {
        if !self.is_error() {
            return self.name();
        }
        match self {
            RadioState::ConnectError => "Connection Error",
            RadioState::TransmitError => "Transmit Error",
            RadioState::ReceiveError => "Receive Error",
            _ => "Unknown Error",
        }
    }
}
