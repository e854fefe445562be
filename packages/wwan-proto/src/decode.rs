use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    type_name: &'static str,
}

impl DecodeError {
    pub fn new<T>(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            type_name: core::any::type_name::<T>(),
        }
    }

    pub const fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Failed to decode {}: {}", self.type_name, self.kind)
    }
}

/// Everything that can go wrong while decoding a frame.
///
/// All of these are format errors: once one is hit, nothing after it in the
/// same frame can be trusted.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    #[error("Ran out of bytes.")]
    UnexpectedEnd,

    #[error("Unexpected {name} byte 0x{value:02x}, expected one of {expected:02x?}.")]
    UnexpectedByte {
        name: &'static str,
        value: u8,
        expected: &'static [u8],
    },

    #[error("CRC16 checksum mismatch. Found {value:x}, expected {expected:x}.")]
    Checksum { value: u16, expected: u16 },

    #[error("Malformed TLV 0x{id:02x}: declared {declared} bytes but only {remaining} remain.")]
    MalformedTlv {
        id: u8,
        declared: u16,
        remaining: usize,
    },

    #[error("{count} byte(s) left over after the last TLV.")]
    TrailingBytes { count: usize },

    #[error("Frame ended in the middle of an escape sequence.")]
    UnterminatedEscape,

    #[error("Record is {found} bytes long, expected at least {expected}.")]
    RecordLength { expected: usize, found: usize },

    #[error("Unknown QMI message flags 0x{flags:02x}.")]
    UnknownMessageKind { flags: u8 },

    #[error("Transfer direction is unknown.")]
    UnknownDirection,
}

/// A wire type read from the front of a byte slice.
///
/// `decode` advances `data` past the bytes it consumed. Fixed-width reads
/// leave `data` untouched when there are not enough bytes for them.
pub trait Decode {
    /// # Errors
    ///
    /// Fails when `data` is too short or holds a value this type cannot represent.
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

macro_rules! impl_decode_for_primitive {
    ($($t:ty),*) => {
        $(
            impl Decode for $t {
                fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
                    let (bytes, rest) = data
                        .split_first_chunk::<{ core::mem::size_of::<$t>() }>()
                        .ok_or_else(|| DecodeError::new::<Self>(DecodeErrorKind::UnexpectedEnd))?;
                    *data = rest;
                    Ok(Self::from_le_bytes(*bytes))
                }
            }
        )*
    };
}

impl_decode_for_primitive!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<const N: usize> Decode for [u8; N] {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        let (bytes, rest) = data
            .split_first_chunk::<N>()
            .ok_or_else(|| DecodeError::new::<Self>(DecodeErrorKind::UnexpectedEnd))?;
        *data = rest;
        Ok(*bytes)
    }
}

/// Splits `len` raw bytes off the front of `data`.
pub(crate) fn take<'a, T>(data: &mut &'a [u8], len: usize) -> Result<&'a [u8], DecodeError> {
    if data.len() < len {
        return Err(DecodeError::new::<T>(DecodeErrorKind::UnexpectedEnd));
    }
    let (head, rest) = data.split_at(len);
    *data = rest;
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::{Decode, DecodeErrorKind};

    #[test]
    fn primitives_are_little_endian() {
        let mut data: &[u8] = &[0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xff];

        assert_eq!(u16::decode(&mut data).unwrap(), 0x1234);
        assert_eq!(u32::decode(&mut data).unwrap(), 0x1234_5678);
        assert_eq!(data, &[0xff]);
    }

    #[test]
    fn short_input_does_not_advance() {
        let mut data: &[u8] = &[0x01];

        let err = u16::decode(&mut data).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnexpectedEnd);
        assert_eq!(data, &[0x01]);
    }
}
