use std::ops::Range;

use bytes::BytesMut;

/// Raw payload bytes of one reassembled transfer.
///
/// Bytes are only ever appended while the transfer is being assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: BytesMut,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Bounds-checked slicing. Returns `None` if `range` is out of bounds.
    pub fn get(&self, range: Range<usize>) -> Option<&[u8]> {
        self.bytes.get(range)
    }
}

#[cfg(test)]
mod tests {
    use super::FrameBuffer;

    #[test]
    fn accumulates_and_slices() {
        let mut buffer = FrameBuffer::new();
        assert!(buffer.is_empty());

        buffer.extend(&[0x01, 0x02]);
        buffer.extend(&[0x03]);

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice(), [0x01, 0x02, 0x03]);
        assert_eq!(buffer.get(1..3), Some(&[0x02, 0x03][..]));
        assert_eq!(buffer.get(2..5), None);
    }
}
