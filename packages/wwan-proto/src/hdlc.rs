//! HDLC-style byte stuffing, as borrowed from PPP framing.
//!
//! A frame is terminated by [`CONTROL_CHAR`]. Inside the frame, both the
//! control character and [`ESCAPE_CHAR`] are replaced by `ESCAPE_CHAR`
//! followed by the original byte XORed with [`ESCAPE_MASK`].

use alloc::vec::Vec;

use crate::decode::{DecodeError, DecodeErrorKind};

/// Frame terminator.
pub const CONTROL_CHAR: u8 = 0x7E;

/// Marks the next byte as escaped.
pub const ESCAPE_CHAR: u8 = 0x7D;

/// Applied to an escaped byte with XOR.
pub const ESCAPE_MASK: u8 = 0x20;

/// Reverses HDLC byte stuffing in a single pass.
///
/// # Errors
///
/// A trailing [`ESCAPE_CHAR`] with nothing after it is reported as
/// [`DecodeErrorKind::UnterminatedEscape`]; the byte it was meant to escape
/// is gone, so the frame is truncated.
pub fn unescape(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(data.len());
    let mut escaping = false;

    for &byte in data {
        if escaping {
            out.push(byte ^ ESCAPE_MASK);
            escaping = false;
        } else if byte == ESCAPE_CHAR {
            escaping = true;
        } else {
            out.push(byte);
        }
    }

    if escaping {
        return Err(DecodeError::new::<Unescaped>(
            DecodeErrorKind::UnterminatedEscape,
        ));
    }

    Ok(out)
}

/// Applies HDLC byte stuffing to `data`. No terminator is appended.
pub fn escape(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + data.len() / 8);

    for &byte in data {
        if byte == CONTROL_CHAR || byte == ESCAPE_CHAR {
            out.push(ESCAPE_CHAR);
            out.push(byte ^ ESCAPE_MASK);
        } else {
            out.push(byte);
        }
    }

    out
}

/// Names the unescaped frame body in decode errors.
struct Unescaped;

#[cfg(test)]
mod tests {
    use super::{escape, unescape};
    use crate::DecodeErrorKind;

    #[test]
    fn escaped_bytes_are_restored() {
        let data = unescape(&[0xC8, 0x7D, 0x5E, 0x01, 0x7D, 0x5D, 0x02]).unwrap();
        assert_eq!(data, [0xC8, 0x7E, 0x01, 0x7D, 0x02]);
    }

    #[test]
    fn escape_mask_applies_to_any_byte() {
        assert_eq!(unescape(&[0x7D, 0x21]).unwrap(), [0x01]);
    }

    #[test]
    fn trailing_escape_is_an_error() {
        let err = unescape(&[0x01, 0x7D]).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnterminatedEscape);
    }

    #[test]
    fn escape_only_touches_special_bytes() {
        assert_eq!(escape(&[0x7E, 0x00, 0x7D]), [0x7D, 0x5E, 0x00, 0x7D, 0x5D]);
    }
}
