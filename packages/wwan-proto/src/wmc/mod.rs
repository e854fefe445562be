//! The WMC vendor control protocol.
//!
//! A WMC message is `0xC8 | opcode | record`, where the record layout depends
//! on the opcode, the transfer direction and the firmware revision. On the wire
//! the message is framed one of two ways:
//!
//! - `AT*WMC=` followed by the escaped message, a two-byte CRC and `0x0D`
//!   (host to modem only).
//! - an HDLC frame: the escaped message, a two-byte CRC and `0x7E`. Some
//!   firmware sends the placeholder CRC `30 30` instead of a real one.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    Direction,
    crc::hdlc_crc16,
    decode::{Decode, DecodeError, DecodeErrorKind},
    hdlc::{self, CONTROL_CHAR},
};

mod records;

pub use records::{
    ConnectionAddresses, ConnectionInfo, ConnectionInfoExtended, DeviceIds, DeviceInfo,
    DeviceInfoExtended, GlobalMode, HomeNetwork, NetworkDetail, NetworkInfo, NetworkInfoExtended,
    PackedPlmn, SignalStrength, Timestamp, connection_state_name, mode_name, service_name,
};

/// First byte of every WMC message.
pub const WMC_SENTINEL: u8 = 0xC8;

/// Prefix of AT-encapsulated requests.
pub const AT_WMC_PREFIX: &[u8] = b"AT*WMC=";

/// Terminator of AT-encapsulated requests.
pub const AT_TERMINATOR: u8 = 0x0D;

/// Bytes some firmware sends in place of a real frame CRC.
pub const PLACEHOLDER_CRC: [u8; 2] = *b"00";

pub mod opcodes {
    pub const GET_GLOBAL_MODE: u8 = 0x03;
    pub const SET_GLOBAL_MODE: u8 = 0x04;
    pub const DEVICE_INFO: u8 = 0x06;
    pub const CONNECTION_INFO: u8 = 0x0A;
    pub const NETWORK_INFO: u8 = 0x0B;
    pub const INIT: u8 = 0x0D;
    pub const EPS_BEARER_INFO: u8 = 0x4D;
}

/// Record layout revision, chosen per capture.
///
/// Nothing in a message says which firmware produced it, so the revision
/// must be supplied by whoever runs the decode.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum WmcRevision {
    /// Older firmware (e.g. PC5740) with short records.
    Legacy,
    /// Newer firmware (e.g. UML290) that appends identity, address and radio blocks.
    #[default]
    Extended,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown WMC revision {0:?}, expected legacy or extended")]
pub struct ParseRevisionError(alloc::string::String);

impl FromStr for WmcRevision {
    type Err = ParseRevisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("legacy") => Ok(Self::Legacy),
            s if s.eq_ignore_ascii_case("extended") => Ok(Self::Extended),
            s => Err(ParseRevisionError(s.into())),
        }
    }
}

impl fmt::Display for WmcRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Legacy => "legacy",
            Self::Extended => "extended",
        })
    }
}

/// A known WMC command.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WmcCommand {
    GetGlobalMode,
    SetGlobalMode,
    DeviceInfo,
    ConnectionInfo,
    NetworkInfo,
    Init,
    EpsBearerInfo,
}

impl WmcCommand {
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        Some(match opcode {
            opcodes::GET_GLOBAL_MODE => Self::GetGlobalMode,
            opcodes::SET_GLOBAL_MODE => Self::SetGlobalMode,
            opcodes::DEVICE_INFO => Self::DeviceInfo,
            opcodes::CONNECTION_INFO => Self::ConnectionInfo,
            opcodes::NETWORK_INFO => Self::NetworkInfo,
            opcodes::INIT => Self::Init,
            opcodes::EPS_BEARER_INFO => Self::EpsBearerInfo,
            _ => return None,
        })
    }

    pub const fn opcode(self) -> u8 {
        match self {
            Self::GetGlobalMode => opcodes::GET_GLOBAL_MODE,
            Self::SetGlobalMode => opcodes::SET_GLOBAL_MODE,
            Self::DeviceInfo => opcodes::DEVICE_INFO,
            Self::ConnectionInfo => opcodes::CONNECTION_INFO,
            Self::NetworkInfo => opcodes::NETWORK_INFO,
            Self::Init => opcodes::INIT,
            Self::EpsBearerInfo => opcodes::EPS_BEARER_INFO,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GetGlobalMode => "GET_GLOBAL_MODE",
            Self::SetGlobalMode => "SET_GLOBAL_MODE",
            Self::DeviceInfo => "DEVICE_INFO",
            Self::ConnectionInfo => "CONNECTION_INFO",
            Self::NetworkInfo => "NETWORK_INFO",
            Self::Init => "INIT",
            Self::EpsBearerInfo => "EPS_BEARER_INFO",
        }
    }
}

/// A decoded record body. Legacy and Extended layouts are distinct variants.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum WmcRecord {
    GlobalMode(GlobalMode),
    DeviceInfo(DeviceInfo),
    DeviceInfoExtended(DeviceInfoExtended),
    ConnectionInfo(ConnectionInfo),
    ConnectionInfoExtended(ConnectionInfoExtended),
    NetworkInfo(NetworkInfo),
    NetworkInfoExtended(NetworkInfoExtended),
    InitTime(Timestamp),
    /// A body shown as bytes only.
    Raw(Vec<u8>),
}

impl WmcRecord {
    /// Decodes the record `command` carries in the given direction.
    ///
    /// Returns `Ok(None)` for combinations that carry no record worth decoding,
    /// such as a device info request.
    pub fn decode_for(
        command: WmcCommand,
        data: &mut &[u8],
        direction: Direction,
        revision: WmcRevision,
    ) -> Result<Option<Self>, DecodeError> {
        use self::{WmcCommand as C, WmcRevision as R};

        let to_host = direction == Direction::ToHost;
        let to_modem = direction == Direction::ToModem;

        Ok(Some(match (command, revision) {
            (C::GetGlobalMode, _) if to_host => Self::GlobalMode(GlobalMode::decode(data)?),
            (C::SetGlobalMode, _) if to_modem => Self::GlobalMode(GlobalMode::decode(data)?),
            (C::DeviceInfo, R::Legacy) if to_host => Self::DeviceInfo(DeviceInfo::decode(data)?),
            (C::DeviceInfo, R::Extended) if to_host => {
                Self::DeviceInfoExtended(DeviceInfoExtended::decode(data)?)
            }
            (C::ConnectionInfo, R::Legacy) if to_host => {
                Self::ConnectionInfo(ConnectionInfo::decode(data)?)
            }
            (C::ConnectionInfo, R::Extended) if to_host => {
                Self::ConnectionInfoExtended(ConnectionInfoExtended::decode(data)?)
            }
            (C::NetworkInfo, R::Legacy) if to_host => Self::NetworkInfo(NetworkInfo::decode(data)?),
            (C::NetworkInfo, R::Extended) if to_host => {
                Self::NetworkInfoExtended(NetworkInfoExtended::decode(data)?)
            }
            (C::Init, _) if data.is_empty() => return Ok(None),
            (C::Init, _) if to_host => {
                let raw = data.to_vec();
                *data = &[];
                Self::Raw(raw)
            }
            (C::Init, R::Extended) if to_modem => Self::InitTime(Timestamp::decode(data)?),
            _ => return Ok(None),
        }))
    }
}

/// One dissected WMC message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WmcMessage {
    pub opcode: u8,
    /// `None` for opcodes this decoder does not know.
    pub command: Option<WmcCommand>,
    pub record: Option<WmcRecord>,
    /// Bytes left over after the record layout.
    pub trailing: usize,
}

impl WmcMessage {
    /// Dissects an unframed message.
    ///
    /// Returns `Ok(None)` when `data` does not start with [`WMC_SENTINEL`] and
    /// an opcode. An unknown opcode is not an error: the message comes back
    /// with no command and no record.
    ///
    /// # Errors
    ///
    /// A record shorter than its layout is a [`DecodeErrorKind::RecordLength`] error.
    pub fn dissect(
        data: &[u8],
        direction: Direction,
        revision: WmcRevision,
    ) -> Result<Option<Self>, DecodeError> {
        let [WMC_SENTINEL, opcode, body @ ..] = data else {
            return Ok(None);
        };

        let Some(command) = WmcCommand::from_opcode(*opcode) else {
            return Ok(Some(Self {
                opcode: *opcode,
                command: None,
                record: None,
                trailing: 0,
            }));
        };

        let mut body = body;
        let record = WmcRecord::decode_for(command, &mut body, direction, revision)?;
        let trailing = if record.is_some() { body.len() } else { 0 };

        Ok(Some(Self {
            opcode: *opcode,
            command: Some(command),
            record,
            trailing,
        }))
    }

    pub fn name(&self) -> Option<&'static str> {
        self.command.map(WmcCommand::name)
    }
}

/// Whether `data` holds a complete framed message.
///
/// A WMC message may span several USB transfers, so the capture side keeps
/// accumulating until this holds.
///
/// # Errors
///
/// [`DecodeErrorKind::UnknownDirection`] if the direction is not known.
pub fn is_complete(data: &[u8], direction: Direction) -> Result<bool, DecodeError> {
    let last = data.last().copied();
    match direction {
        Direction::ToModem => Ok(matches!(last, Some(AT_TERMINATOR | CONTROL_CHAR))),
        Direction::ToHost => Ok(last == Some(CONTROL_CHAR)),
        Direction::Unknown => Err(DecodeError::new::<WmcFrame>(
            DecodeErrorKind::UnknownDirection,
        )),
    }
}

/// Outcome of checking a frame's CRC.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameCrc {
    Valid,
    Mismatch { found: u16, expected: u16 },
    /// The firmware sent [`PLACEHOLDER_CRC`].
    Placeholder,
    /// Not checked: AT framing uses a different seed, or there was no trailer.
    Unchecked,
}

/// A WMC message with its framing removed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WmcFrame {
    pub payload: Vec<u8>,
    pub crc: FrameCrc,
}

impl WmcFrame {
    /// Turns a CRC mismatch into a [`DecodeErrorKind::Checksum`] error.
    pub fn verify(&self) -> Result<(), DecodeError> {
        match self.crc {
            FrameCrc::Mismatch { found, expected } => Err(DecodeError::new::<Self>(
                DecodeErrorKind::Checksum {
                    value: found,
                    expected,
                },
            )),
            _ => Ok(()),
        }
    }
}

/// Removes the AT or HDLC framing from a complete message.
///
/// The body is unescaped before the CRC is split off, since the CRC bytes are
/// escaped along with the message.
pub fn unframe(data: &[u8], direction: Direction) -> Result<WmcFrame, DecodeError> {
    match direction {
        Direction::ToModem => {
            if let Some(rest) = data.strip_prefix(AT_WMC_PREFIX) {
                return match rest.strip_suffix(&[AT_TERMINATOR]) {
                    Some(body) => {
                        let (payload, _) = split_crc(hdlc::unescape(body)?)?;
                        Ok(WmcFrame {
                            payload,
                            crc: FrameCrc::Unchecked,
                        })
                    }
                    None => unchecked(rest),
                };
            }
            hdlc_frame(data)
        }
        Direction::ToHost => hdlc_frame(data),
        Direction::Unknown => Err(DecodeError::new::<WmcFrame>(
            DecodeErrorKind::UnknownDirection,
        )),
    }
}

fn hdlc_frame(data: &[u8]) -> Result<WmcFrame, DecodeError> {
    let Some(body) = data.strip_suffix(&[CONTROL_CHAR]) else {
        return unchecked(data);
    };

    let (payload, crc) = split_crc(hdlc::unescape(body)?)?;
    let crc = if crc == PLACEHOLDER_CRC {
        FrameCrc::Placeholder
    } else {
        let found = u16::from_le_bytes(crc);
        let expected = hdlc_crc16(&payload);
        if found == expected {
            FrameCrc::Valid
        } else {
            FrameCrc::Mismatch { found, expected }
        }
    };

    Ok(WmcFrame { payload, crc })
}

fn unchecked(data: &[u8]) -> Result<WmcFrame, DecodeError> {
    Ok(WmcFrame {
        payload: hdlc::unescape(data)?,
        crc: FrameCrc::Unchecked,
    })
}

fn split_crc(mut body: Vec<u8>) -> Result<(Vec<u8>, [u8; 2]), DecodeError> {
    let at = body
        .len()
        .checked_sub(2)
        .ok_or_else(|| DecodeError::new::<WmcFrame>(DecodeErrorKind::UnexpectedEnd))?;
    let tail = body.split_off(at);
    let mut crc = &tail[..];
    Ok((body, <[u8; 2]>::decode(&mut crc)?))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use hex_literal::hex;

    use super::{
        FrameCrc, WmcCommand, WmcMessage, WmcRecord, WmcRevision, is_complete, unframe,
    };
    use crate::{Direction, DecodeErrorKind, hdlc, hdlc_crc16};

    fn hdlc_encode(payload: &[u8]) -> Vec<u8> {
        let mut body = payload.to_vec();
        body.extend_from_slice(&hdlc_crc16(payload).to_le_bytes());
        let mut frame = hdlc::escape(&body);
        frame.push(0x7E);
        frame
    }

    #[test]
    fn get_global_mode_response() {
        let message = WmcMessage::dissect(
            &hex!("C8 03 01 02 03 04"),
            Direction::ToHost,
            WmcRevision::Extended,
        )
        .unwrap()
        .unwrap();

        assert_eq!(message.command, Some(WmcCommand::GetGlobalMode));
        assert_eq!(message.name(), Some("GET_GLOBAL_MODE"));
        let Some(WmcRecord::GlobalMode(mode)) = message.record else {
            panic!("expected a global mode record");
        };
        assert_eq!(mode.mode, 0x02);
        assert_eq!(mode.name(), "EVDO only");
    }

    #[test]
    fn request_direction_has_no_record() {
        let message =
            WmcMessage::dissect(&hex!("C8 06"), Direction::ToModem, WmcRevision::Legacy)
                .unwrap()
                .unwrap();

        assert_eq!(message.command, Some(WmcCommand::DeviceInfo));
        assert!(message.record.is_none());
    }

    #[test]
    fn unknown_opcode_is_not_an_error() {
        let message =
            WmcMessage::dissect(&hex!("C8 99 00 00"), Direction::ToHost, WmcRevision::Extended)
                .unwrap()
                .unwrap();

        assert_eq!(message.opcode, 0x99);
        assert!(message.command.is_none());
    }

    #[test]
    fn missing_sentinel_is_not_wmc() {
        let result =
            WmcMessage::dissect(&hex!("01 03 00"), Direction::ToHost, WmcRevision::Extended);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn short_record_is_fatal() {
        let err = WmcMessage::dissect(
            &hex!("C8 0A 00 00 00 00"),
            Direction::ToHost,
            WmcRevision::Legacy,
        )
        .unwrap_err();

        assert_eq!(
            err.kind(),
            DecodeErrorKind::RecordLength {
                expected: 20,
                found: 4,
            }
        );
    }

    #[test]
    fn init_depends_on_revision_and_direction() {
        let time = hex!("C8 0D db 07 03 00 0e 00 09 00 1a 00 35");

        let extended = WmcMessage::dissect(&time, Direction::ToModem, WmcRevision::Extended)
            .unwrap()
            .unwrap();
        assert!(matches!(extended.record, Some(WmcRecord::InitTime(t)) if t.year == 2011));

        let legacy = WmcMessage::dissect(&time, Direction::ToModem, WmcRevision::Legacy)
            .unwrap()
            .unwrap();
        assert!(legacy.record.is_none());

        let reply = WmcMessage::dissect(&hex!("C8 0D 01 02"), Direction::ToHost, WmcRevision::Legacy)
            .unwrap()
            .unwrap();
        assert_eq!(reply.record, Some(WmcRecord::Raw([0x01, 0x02].to_vec())));
    }

    #[test]
    fn extra_bytes_are_counted() {
        let mut data = hex!("C8 0A").to_vec();
        data.resize(2 + 20 + 3, 0);

        let message = WmcMessage::dissect(&data, Direction::ToHost, WmcRevision::Legacy)
            .unwrap()
            .unwrap();
        assert_eq!(message.trailing, 3);
    }

    #[test]
    fn completeness_by_direction() {
        assert!(is_complete(&hex!("41 54 0d"), Direction::ToModem).unwrap());
        assert!(is_complete(&hex!("c8 7e"), Direction::ToModem).unwrap());
        assert!(!is_complete(&hex!("c8 0d"), Direction::ToHost).unwrap());
        assert!(is_complete(&hex!("c8 30 30 7e"), Direction::ToHost).unwrap());
        assert!(!is_complete(&[], Direction::ToHost).unwrap());
        assert_eq!(
            is_complete(&hex!("7e"), Direction::Unknown).unwrap_err().kind(),
            DecodeErrorKind::UnknownDirection
        );
    }

    #[test]
    fn hdlc_frame_with_real_crc() {
        let payload = hex!("C8 06 7E 7D 00");
        let frame = unframe(&hdlc_encode(&payload), Direction::ToHost).unwrap();

        assert_eq!(frame.payload, payload);
        assert_eq!(frame.crc, FrameCrc::Valid);
        assert!(frame.verify().is_ok());
    }

    #[test]
    fn corrupted_crc_is_reported() {
        let mut framed = hdlc_encode(&hex!("C8 06"));
        framed[2] ^= 0xff;

        let frame = unframe(&framed, Direction::ToHost).unwrap();
        assert!(matches!(frame.crc, FrameCrc::Mismatch { .. }));
        assert!(matches!(
            frame.verify().unwrap_err().kind(),
            DecodeErrorKind::Checksum { .. }
        ));
    }

    #[test]
    fn placeholder_crc() {
        let frame = unframe(&hex!("C8 03 00 02 00 00 30 30 7E"), Direction::ToHost).unwrap();

        assert_eq!(frame.payload, hex!("C8 03 00 02 00 00"));
        assert_eq!(frame.crc, FrameCrc::Placeholder);
    }

    #[test]
    fn at_framed_request() {
        let mut data = b"AT*WMC=".to_vec();
        data.extend_from_slice(&hex!("C8 7D 5E 06 AB CD 0D"));

        let frame = unframe(&data, Direction::ToModem).unwrap();
        assert_eq!(frame.payload, hex!("C8 7E 06"));
        assert_eq!(frame.crc, FrameCrc::Unchecked);
    }

    #[test]
    fn truncated_escape_in_frame() {
        let err = unframe(&hex!("C8 03 7D 7E"), Direction::ToHost).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnterminatedEscape);
    }
}
