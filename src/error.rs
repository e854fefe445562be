use thiserror::Error;
use wwan_proto::{DecodeError, Direction};

use crate::config::ConfigError;

/// A fatal error that aborts the decode run.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to get URB number from {line:?}")]
    MissingUrbNumber { line: String },

    #[error("Unhandled URB function {name:?}")]
    UnknownFunction { name: String },

    #[error("Invalid hex data in URB {urb}: {source}")]
    InvalidHex {
        urb: u64,
        #[source]
        source: hex::FromHexError,
    },

    #[error("URB {urb} ({direction}): {source}")]
    Decode {
        urb: u64,
        direction: Direction,
        #[source]
        source: DecodeError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TraceError {
    pub(crate) fn decode(urb: u64, direction: Direction) -> impl FnOnce(DecodeError) -> Self {
        move |source| Self::Decode {
            urb,
            direction,
            source,
        }
    }
}
