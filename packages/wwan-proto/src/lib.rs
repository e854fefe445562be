//! Decoders for the protocols a host driver speaks to a mobile-broadband modem over USB.
//!
//! Two protocols are covered:
//!
//! - [`qmi`]: the QMUX service-multiplexing transport and the TLV-based QMI
//!   messages it carries.
//! - [`wmc`]: a vendor binary control protocol with opcode-keyed, fixed-width
//!   records, framed HDLC-style (see [`hdlc`]).
//!
//! Like any wire codec, this crate is built around two traits: [`Decode`] and
//! [`Encode`]. Every header, TLV and record type implements [`Decode`], and the
//! framing types also implement [`Encode`] so that frames can be built for tests
//! and tooling.

#![no_std]

extern crate alloc;

pub mod hdlc;
pub mod qmi;
pub mod wmc;

mod crc;
mod decode;
mod encode;
mod string;

pub use crc::{HDLC_CRC16, hdlc_crc16};
pub use decode::{Decode, DecodeError, DecodeErrorKind};
pub use encode::Encode;
pub use string::PaddedString;

/// Direction of a USB transfer relative to the modem.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Host to modem (">>>" in capture logs).
    ToModem,
    /// Modem to host ("<<<" in capture logs).
    ToHost,
    /// The capture did not say.
    Unknown,
}

impl Direction {
    /// Single-character marker used when rendering traces.
    pub const fn marker(self) -> char {
        match self {
            Self::ToModem => '>',
            Self::ToHost => '<',
            Self::Unknown => '*',
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::ToModem => "to modem",
            Self::ToHost => "to host",
            Self::Unknown => "unknown direction",
        })
    }
}
