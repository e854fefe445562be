use core::fmt;

use alloc::string::String;

use crate::{
    decode::{Decode, DecodeError},
    encode::Encode,
};

/// A fixed-width text field of exactly `N` bytes on the wire.
///
/// Modem firmware pads these fields with NUL bytes, spaces, or both. The raw
/// bytes are kept as-is; [`PaddedString::text`] gives the readable part.
///
/// # Invariants
///
/// - Always occupies exactly `N` bytes when decoded or encoded.
/// - Contents are not guaranteed to be valid UTF-8.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct PaddedString<const N: usize>([u8; N]);

impl<const N: usize> PaddedString<N> {
    /// Creates a field from a string, NUL-padding it to `N` bytes.
    ///
    /// Returns `None` if the string does not fit.
    pub fn new(s: impl AsRef<str>) -> Option<Self> {
        let bytes = s.as_ref().as_bytes();
        if bytes.len() > N {
            return None;
        }

        let mut buf = [0; N];
        buf[..bytes.len()].copy_from_slice(bytes);
        Some(Self(buf))
    }

    /// The raw bytes of the field, padding included.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// The bytes up to the first NUL with trailing spaces removed.
    pub fn trimmed(&self) -> &[u8] {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        self.0[..len].trim_ascii_end()
    }

    /// Readable contents of the field. Invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.trimmed()).into_owned()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl<const N: usize> Default for PaddedString<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Display for PaddedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<const N: usize> Decode for PaddedString<N> {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(Self(<[u8; N]>::decode(data)?))
    }
}

impl<const N: usize> Encode for PaddedString<N> {
    fn size(&self) -> usize {
        N
    }

    fn encode(&self, data: &mut [u8]) {
        self.0.encode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::PaddedString;
    use crate::Decode;

    #[test]
    fn nul_and_space_padding_is_trimmed() {
        let mut data: &[u8] = b"Franklin  \0\0\0\0rest";
        let field = PaddedString::<14>::decode(&mut data).unwrap();

        assert_eq!(field.text(), "Franklin");
        assert_eq!(data, b"rest");
    }

    #[test]
    fn text_stops_at_first_nul() {
        let field = PaddedString::<8>::decode(&mut &b"ab\0cd\0\0\0"[..]).unwrap();
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn blank_fields() {
        assert!(PaddedString::<4>::default().is_blank());
        assert!(PaddedString::<4>::new("  ").unwrap().is_blank());
        assert!(PaddedString::<2>::new("abc").is_none());
    }
}
