//! Dispatch from a packet to the protocol it carries.

use std::{fmt, str::FromStr};

use log::{debug, warn};
use thiserror::Error;
use wwan_proto::{
    Decode, DecodeError, Direction, Encode,
    qmi::{MIN_QMUX_LEN, QmuxHeader, QmuxMessage},
    wmc::{self, WmcFrame, WmcMessage, WmcRevision},
};

/// The protocol spoken over a class of transfers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ProtocolBinding {
    Qmux,
    Wmc,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown protocol {0:?}, expected qmux or wmc")]
pub struct ParseBindingError(String);

impl FromStr for ProtocolBinding {
    type Err = ParseBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qmux" | "qmi" => Ok(Self::Qmux),
            "wmc" => Ok(Self::Wmc),
            _ => Err(ParseBindingError(s.into())),
        }
    }
}

impl fmt::Display for ProtocolBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Qmux => "qmux",
            Self::Wmc => "wmc",
        })
    }
}

/// The result of dissecting one packet's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dissection {
    /// The payload is not something this protocol decodes.
    Nothing,
    Qmux(QmuxMessage),
    Wmc {
        frame: WmcFrame,
        message: Option<WmcMessage>,
    },
}

impl ProtocolBinding {
    /// Whether `data` holds a whole message, or more transfers must follow.
    ///
    /// QMUX messages never span transfers; WMC messages can.
    pub fn is_complete(self, data: &[u8], direction: Direction) -> Result<bool, DecodeError> {
        match self {
            Self::Qmux => Ok(true),
            Self::Wmc => wmc::is_complete(data, direction),
        }
    }

    /// Dissects a complete payload.
    ///
    /// Length fields that disagree with the payload and bad frame CRCs are
    /// logged and otherwise ignored. Every other inconsistency is an error.
    pub fn dissect(
        self,
        data: &[u8],
        direction: Direction,
        revision: WmcRevision,
    ) -> Result<Dissection, DecodeError> {
        match self {
            Self::Qmux => dissect_qmux(data),
            Self::Wmc => dissect_wmc(data, direction, revision),
        }
    }
}

fn dissect_qmux(data: &[u8]) -> Result<Dissection, DecodeError> {
    if data.len() < MIN_QMUX_LEN {
        debug!("Payload of {} bytes is too short for QMUX", data.len());
        return Ok(Dissection::Nothing);
    }

    let message = QmuxMessage::decode(&mut &data[..])?;

    let frame_len = data.len() - 1;
    if message.header.length as usize != frame_len {
        warn!(
            "QMUX length field is {} but the frame is {} bytes",
            message.header.length, frame_len
        );
    }

    let tlv_len = data.len() - QmuxHeader::SIZE - message.qmi.size();
    if message.qmi.size as usize != tlv_len {
        warn!(
            "QMI size field is {} but {} bytes of TLVs follow",
            message.qmi.size, tlv_len
        );
    }

    Ok(Dissection::Qmux(message))
}

fn dissect_wmc(
    data: &[u8],
    direction: Direction,
    revision: WmcRevision,
) -> Result<Dissection, DecodeError> {
    let frame = wmc::unframe(data, direction)?;
    if let Err(err) = frame.verify() {
        warn!("{err}");
    }

    let message = WmcMessage::dissect(&frame.payload, direction, revision)?;
    if let Some(message) = &message {
        if message.trailing > 0 {
            warn!(
                "{} trailing byte(s) after WMC {} record",
                message.trailing,
                message.name().unwrap_or("unknown")
            );
        }
    }

    Ok(Dissection::Wmc { frame, message })
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use wwan_proto::{
        Direction,
        wmc::{FrameCrc, WmcRecord, WmcRevision},
    };

    use super::{Dissection, ProtocolBinding};

    #[test]
    fn parse_and_display() {
        assert_eq!("QMUX".parse::<ProtocolBinding>(), Ok(ProtocolBinding::Qmux));
        assert_eq!("wmc".parse::<ProtocolBinding>(), Ok(ProtocolBinding::Wmc));
        assert!("none".parse::<ProtocolBinding>().is_err());
        assert_eq!(ProtocolBinding::Wmc.to_string(), "wmc");
    }

    #[test]
    fn short_qmux_payload_is_skipped() {
        let dissection = ProtocolBinding::Qmux
            .dissect(&hex!("01 02 03"), Direction::ToHost, WmcRevision::Extended)
            .unwrap();
        assert_eq!(dissection, Dissection::Nothing);
    }

    #[test]
    fn qmux_length_mismatch_still_decodes() {
        let dissection = ProtocolBinding::Qmux
            .dissect(
                &hex!("01 07 00 00 00 FF 00 00 01 00 02 00 02 02 00 00 00"),
                Direction::ToModem,
                WmcRevision::Extended,
            )
            .unwrap();

        let Dissection::Qmux(message) = dissection else {
            panic!("expected a QMUX message");
        };
        assert_eq!(message.qmi.command, 1);
    }

    #[test]
    fn wmc_placeholder_frame() {
        let dissection = ProtocolBinding::Wmc
            .dissect(
                &hex!("C8 03 01 02 03 04 30 30 7E"),
                Direction::ToHost,
                WmcRevision::Extended,
            )
            .unwrap();

        let Dissection::Wmc { frame, message } = dissection else {
            panic!("expected a WMC message");
        };
        assert_eq!(frame.crc, FrameCrc::Placeholder);
        assert!(matches!(
            message.and_then(|m| m.record),
            Some(WmcRecord::GlobalMode(mode)) if mode.mode == 0x02
        ));
    }

    #[test]
    fn wmc_completeness_is_delegated() {
        assert!(!ProtocolBinding::Wmc
            .is_complete(&hex!("C8 03"), Direction::ToHost)
            .unwrap());
        assert!(ProtocolBinding::Qmux
            .is_complete(&hex!("01"), Direction::Unknown)
            .unwrap());
    }
}
