//! QMUX framing and QMI message headers.
//!
//! # Encoding
//!
//! | Field        | Size  | Description |
//! |--------------|-------|-------------|
//! | `iface`      | 1     | Must be [`QMUX_INTERFACE`]. |
//! | `length`     | 2     | Length of everything after `iface`. |
//! | `sender`     | 1     | `0x00` for a client, `0x80` for the service. |
//! | `service`    | 1     | QMI service id; [`CONTROL_SERVICE`] is special. |
//! | `client_id`  | 1     | [`BROADCAST_CLIENT`] addresses every client. |
//! | QMI header   | 6 / 7 | See [`QmiHeader`]. |
//! | TLVs         | n     | See [`Tlv`]. |

use alloc::vec::Vec;

use crate::{
    decode::{Decode, DecodeError, DecodeErrorKind},
    encode::Encode,
};

mod errors;
mod names;
mod tables;
mod tlv;

pub use errors::error_name;
pub use names::{CommandEntry, CommandTable, ServiceEntry};
pub use tlv::{RESULT_TLV, ResultCode, Tlv, decode_tlvs};

/// First byte of every QMUX frame.
pub const QMUX_INTERFACE: u8 = 0x01;

/// The control service, whose QMI header has a different layout.
pub const CONTROL_SERVICE: u8 = 0x00;

/// Client id addressing every client of a service.
pub const BROADCAST_CLIENT: u8 = 0xFF;

pub const SENDER_CLIENT: u8 = 0x00;
pub const SENDER_SERVICE: u8 = 0x80;

/// Payloads shorter than this are not treated as QMUX at all.
pub const MIN_QMUX_LEN: usize = 7;

/// The kind of a QMI message, decoded from the header flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MessageKind {
    Request,
    Response,
    Indication,
}

impl MessageKind {
    /// Maps a control-service flags byte (`0`, `1`, `2`).
    pub fn from_control_flags(flags: u8) -> Result<Self, DecodeError> {
        match flags {
            0x00 => Ok(Self::Request),
            0x01 => Ok(Self::Response),
            0x02 => Ok(Self::Indication),
            flags => Err(DecodeError::new::<QmiHeader>(
                DecodeErrorKind::UnknownMessageKind { flags },
            )),
        }
    }

    /// Maps a flags byte from any service other than control (`0x00`, `0x02`, `0x04`).
    pub fn from_service_flags(flags: u8) -> Result<Self, DecodeError> {
        match flags {
            0x00 => Ok(Self::Request),
            0x02 => Ok(Self::Response),
            0x04 => Ok(Self::Indication),
            flags => Err(DecodeError::new::<QmiHeader>(
                DecodeErrorKind::UnknownMessageKind { flags },
            )),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Indication => "indication",
        }
    }
}

/// The fixed QMUX header at the start of every frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct QmuxHeader {
    /// Declared length of the frame, not counting the interface byte.
    pub length: u16,
    pub sender: u8,
    pub service: u8,
    pub client_id: u8,
}

impl QmuxHeader {
    pub const SIZE: usize = 6;

    pub const fn sender_name(&self) -> Option<&'static str> {
        match self.sender {
            SENDER_CLIENT => Some("client"),
            SENDER_SERVICE => Some("service"),
            _ => None,
        }
    }

    pub const fn is_broadcast(&self) -> bool {
        self.client_id == BROADCAST_CLIENT
    }
}

impl Decode for QmuxHeader {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        let iface = u8::decode(data)?;
        if iface != QMUX_INTERFACE {
            return Err(DecodeError::new::<Self>(DecodeErrorKind::UnexpectedByte {
                name: "iface",
                value: iface,
                expected: &[QMUX_INTERFACE],
            }));
        }

        let length = u16::decode(data)?;
        let sender = u8::decode(data)?;
        let service = u8::decode(data)?;
        let client_id = u8::decode(data)?;

        Ok(Self {
            length,
            sender,
            service,
            client_id,
        })
    }
}

impl Encode for QmuxHeader {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = QMUX_INTERFACE;
        self.length.encode(&mut data[1..]);
        data[3] = self.sender;
        data[4] = self.service;
        data[5] = self.client_id;
    }
}

/// The QMI message header following the QMUX header.
///
/// The control service uses a one-byte transaction id and its own flag values;
/// every other service uses a two-byte transaction id:
///
/// | Field      | Control | Others | Description |
/// |------------|---------|--------|-------------|
/// | `flags`    | 1       | 1      | Message kind, see [`MessageKind`]. |
/// | `txn`      | 1       | 2      | Transaction id. |
/// | `command`  | 2       | 2      | Command (message) id. |
/// | `size`     | 2       | 2      | Length of the TLV stream. |
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct QmiHeader {
    /// Flags byte exactly as it appeared on the wire.
    pub flags: u8,
    pub kind: MessageKind,
    pub transaction_id: u16,
    pub command: u16,
    pub size: u16,
    control: bool,
}

impl QmiHeader {
    pub const CONTROL_SIZE: usize = 6;
    pub const SERVICE_SIZE: usize = 7;

    /// Decodes the header layout used by `service`.
    pub fn decode_for(service: u8, data: &mut &[u8]) -> Result<Self, DecodeError> {
        let control = service == CONTROL_SERVICE;
        let flags = u8::decode(data)?;
        let (kind, transaction_id) = if control {
            (MessageKind::from_control_flags(flags)?, u8::decode(data)? as u16)
        } else {
            (MessageKind::from_service_flags(flags)?, u16::decode(data)?)
        };
        let command = u16::decode(data)?;
        let size = u16::decode(data)?;

        Ok(Self {
            flags,
            kind,
            transaction_id,
            command,
            size,
            control,
        })
    }

    /// Builds a header for `service`, deriving the flags byte from `kind`.
    pub fn new(service: u8, kind: MessageKind, transaction_id: u16, command: u16, size: u16) -> Self {
        let control = service == CONTROL_SERVICE;
        let flags = match (control, kind) {
            (true, MessageKind::Request) => 0x00,
            (true, MessageKind::Response) => 0x01,
            (true, MessageKind::Indication) => 0x02,
            (false, MessageKind::Request) => 0x00,
            (false, MessageKind::Response) => 0x02,
            (false, MessageKind::Indication) => 0x04,
        };

        Self {
            flags,
            kind,
            transaction_id,
            command,
            size,
            control,
        }
    }
}

impl Encode for QmiHeader {
    fn size(&self) -> usize {
        if self.control {
            Self::CONTROL_SIZE
        } else {
            Self::SERVICE_SIZE
        }
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = self.flags;
        let rest = if self.control {
            data[1] = self.transaction_id as u8;
            &mut data[2..]
        } else {
            self.transaction_id.encode(&mut data[1..]);
            &mut data[3..]
        };
        self.command.encode(rest);
        self.size.encode(&mut rest[2..]);
    }
}

/// A complete QMUX frame carrying one QMI message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QmuxMessage {
    pub header: QmuxHeader,
    pub qmi: QmiHeader,
    pub tlvs: Vec<Tlv>,
}

impl QmuxMessage {
    /// Encoded length of the TLV stream.
    pub fn tlv_len(&self) -> usize {
        self.tlvs.iter().map(Encode::size).sum()
    }
}

impl Decode for QmuxMessage {
    /// Decodes a whole frame. The TLV stream runs to the end of `data`, which
    /// is left empty on success.
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        let header = QmuxHeader::decode(data)?;
        let qmi = QmiHeader::decode_for(header.service, data)?;
        let tlvs = decode_tlvs(data)?;

        Ok(Self { header, qmi, tlvs })
    }
}

impl Encode for QmuxMessage {
    fn size(&self) -> usize {
        self.header.size() + self.qmi.size() + self.tlv_len()
    }

    fn encode(&self, data: &mut [u8]) {
        self.header.encode(data);
        let mut offset = self.header.size();
        self.qmi.encode(&mut data[offset..]);
        offset += self.qmi.size();
        for tlv in &self.tlvs {
            tlv.encode(&mut data[offset..]);
            offset += tlv.size();
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use hex_literal::hex;

    use super::{MessageKind, QmiHeader, QmuxHeader, QmuxMessage, Tlv};
    use crate::{Decode, DecodeErrorKind, Encode};

    #[test]
    fn control_service_frame() {
        let frame = hex!("01 07 00 00 00 FF 00 00 01 00 02 00 02 02 00 00 00");
        let message = QmuxMessage::decode(&mut &frame[..]).unwrap();

        assert_eq!(message.header.service, 0);
        assert!(message.header.is_broadcast());
        assert_eq!(message.header.sender_name(), Some("client"));
        assert_eq!(message.qmi.kind, MessageKind::Request);
        assert_eq!(message.qmi.command, 1);
        assert_eq!(message.tlvs.len(), 1);

        let result = message.tlvs[0].result_code().unwrap().unwrap();
        assert_eq!(result.status, 0);
        assert_eq!(result.error, 0);
        assert!(result.is_success());
    }

    #[test]
    fn service_header_has_wide_transaction_id() {
        let frame = hex!("01 10 00 80 02 01 02 34 12 22 00 04 00 02 01 00 01");
        let mut data = &frame[..];
        let header = QmuxHeader::decode(&mut data).unwrap();
        let qmi = QmiHeader::decode_for(header.service, &mut data).unwrap();

        assert_eq!(header.sender_name(), Some("service"));
        assert_eq!(qmi.kind, MessageKind::Response);
        assert_eq!(qmi.transaction_id, 0x1234);
        assert_eq!(qmi.command, 0x22);
        assert_eq!(qmi.size, 4);
    }

    #[test]
    fn control_flags_differ_from_service_flags() {
        assert_eq!(MessageKind::from_control_flags(0x01).unwrap(), MessageKind::Response);
        assert_eq!(MessageKind::from_service_flags(0x02).unwrap(), MessageKind::Response);
        assert_eq!(MessageKind::from_control_flags(0x02).unwrap(), MessageKind::Indication);
        assert!(MessageKind::from_service_flags(0x01).is_err());
    }

    #[test]
    fn unknown_flags_are_fatal() {
        let frame = hex!("01 0c 00 00 02 01 06 01 00 22 00 00 00");
        let err = QmuxMessage::decode(&mut &frame[..]).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnknownMessageKind { flags: 0x06 });
    }

    #[test]
    fn wrong_interface_is_not_qmux() {
        let frame = hex!("02 07 00 00 00 FF 00 00 01 00 00 00");
        let err = QmuxMessage::decode(&mut &frame[..]).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::UnexpectedByte { name: "iface", value: 0x02, .. }
        ));
    }

    #[test]
    fn encode_matches_wire_layout() {
        let tlv = Tlv::new(0x01, vec![0x03]).unwrap();
        let message = QmuxMessage {
            header: QmuxHeader {
                length: 0x0b,
                sender: 0x00,
                service: 0x00,
                client_id: 0x00,
            },
            qmi: QmiHeader::new(0, MessageKind::Request, 0x05, 0x22, 4),
            tlvs: vec![tlv],
        };

        assert_eq!(
            message.to_vec(),
            hex!("01 0b 00 00 00 00 00 05 22 00 04 00 01 01 00 03")
        );
    }
}
