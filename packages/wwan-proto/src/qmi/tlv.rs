use alloc::vec::Vec;

use crate::{
    decode::{Decode, DecodeError, DecodeErrorKind, take},
    encode::Encode,
};

/// TLV id carrying the operation result in every response.
pub const RESULT_TLV: u8 = 0x02;

/// A single type-length-value element of a QMI message.
///
/// | Field    | Size     |
/// |----------|----------|
/// | `id`     | 1        |
/// | `length` | 2        |
/// | `value`  | `length` |
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tlv {
    id: u8,
    value: Vec<u8>,
}

impl Tlv {
    /// Returns `None` if `value` is too long for the 16-bit length field.
    pub fn new(id: u8, value: Vec<u8>) -> Option<Self> {
        u16::try_from(value.len()).ok()?;
        Some(Self { id, value })
    }

    pub const fn id(&self) -> u8 {
        self.id
    }

    pub fn length(&self) -> u16 {
        self.value.len() as u16
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Interprets this TLV as the standard result TLV.
    ///
    /// Returns `None` if the id is not [`RESULT_TLV`].
    pub fn result_code(&self) -> Option<Result<ResultCode, DecodeError>> {
        (self.id == RESULT_TLV).then(|| ResultCode::from_value(&self.value))
    }
}

impl Decode for Tlv {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        let id = u8::decode(data)?;
        let declared = u16::decode(data)?;

        if data.len() < declared as usize {
            return Err(DecodeError::new::<Self>(DecodeErrorKind::MalformedTlv {
                id,
                declared,
                remaining: data.len(),
            }));
        }

        let value = take::<Self>(data, declared as usize)?.to_vec();
        Ok(Self { id, value })
    }
}

impl Encode for Tlv {
    fn size(&self) -> usize {
        3 + self.value.len()
    }

    fn encode(&self, data: &mut [u8]) {
        data[0] = self.id;
        self.length().encode(&mut data[1..]);
        self.value.encode(&mut data[3..]);
    }
}

/// Decodes TLVs until `data` is exhausted.
///
/// # Errors
///
/// - [`DecodeErrorKind::MalformedTlv`] if a declared length overruns the input.
/// - [`DecodeErrorKind::TrailingBytes`] if one or two bytes are left over,
///   too few to hold another TLV header.
pub fn decode_tlvs(data: &mut &[u8]) -> Result<Vec<Tlv>, DecodeError> {
    let mut tlvs = Vec::new();

    while data.len() >= 3 {
        tlvs.push(Tlv::decode(data)?);
    }

    if !data.is_empty() {
        return Err(DecodeError::new::<Tlv>(DecodeErrorKind::TrailingBytes {
            count: data.len(),
        }));
    }

    Ok(tlvs)
}

/// Contents of the result TLV.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ResultCode {
    /// `0` on success.
    pub status: u16,
    /// QMI error code; see [`error_name`](super::error_name).
    pub error: u16,
}

impl ResultCode {
    /// Parses a result TLV value.
    ///
    /// Some firmware sends only the status word; a missing error word reads as `0`.
    pub fn from_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut data = value;
        let status = u16::decode(&mut data)?;
        let error = if data.len() >= 2 {
            u16::decode(&mut data)?
        } else {
            0
        };

        Ok(Self { status, error })
    }

    pub const fn is_success(&self) -> bool {
        self.status == 0
    }

    pub const fn status_name(&self) -> &'static str {
        if self.is_success() { "SUCCESS" } else { "ERROR" }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use hex_literal::hex;

    use super::{ResultCode, Tlv, decode_tlvs};
    use crate::{Decode, DecodeErrorKind, Encode};

    #[test]
    fn decodes_consecutive_tlvs() {
        let mut data = &hex!("01 01 00 03 10 02 00 aa bb")[..];
        let tlvs = decode_tlvs(&mut data).unwrap();

        assert_eq!(tlvs.len(), 2);
        assert_eq!(tlvs[0].id(), 0x01);
        assert_eq!(tlvs[0].value(), [0x03]);
        assert_eq!(tlvs[1].id(), 0x10);
        assert_eq!(tlvs[1].length(), 2);
        assert!(data.is_empty());
    }

    #[test]
    fn empty_stream_has_no_tlvs() {
        let mut data: &[u8] = &[];
        assert!(decode_tlvs(&mut data).unwrap().is_empty());
    }

    #[test]
    fn overrunning_length_is_malformed() {
        let err = decode_tlvs(&mut &hex!("01 05 00 aa bb")[..]).unwrap_err();
        assert_eq!(
            err.kind(),
            DecodeErrorKind::MalformedTlv {
                id: 0x01,
                declared: 5,
                remaining: 2,
            }
        );
    }

    #[test]
    fn leftover_bytes_are_reported() {
        let err = decode_tlvs(&mut &hex!("01 01 00 03 7f 00")[..]).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TrailingBytes { count: 2 });
    }

    #[test]
    fn result_with_error_code() {
        let tlv = Tlv::decode(&mut &hex!("02 04 00 01 00 1a 00")[..]).unwrap();
        let result = tlv.result_code().unwrap().unwrap();

        assert_eq!(result, ResultCode { status: 1, error: 0x1a });
        assert_eq!(result.status_name(), "ERROR");
    }

    #[test]
    fn other_ids_are_not_results() {
        let tlv = Tlv::new(0x01, vec![0, 0, 0, 0]).unwrap();
        assert!(tlv.result_code().is_none());
    }

    #[test]
    fn encode_writes_length_prefix() {
        let tlv = Tlv::new(0x11, vec![0xde, 0xad]).unwrap();
        assert_eq!(tlv.to_vec(), hex!("11 02 00 de ad"));
    }
}
