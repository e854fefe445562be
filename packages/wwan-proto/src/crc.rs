use crc::Crc;

/// [CRC16 error-detecting algorithm](https://en.wikipedia.org/wiki/Cyclic_redundancy_check)
/// trailing HDLC-framed WMC messages.
///
/// This is the X.25 flavour: reflected 0x1021 polynomial, 0xFFFF seed, and a
/// complemented result. It is sent little-endian, ahead of the 0x7E terminator.
pub const HDLC_CRC16: Crc<u16> = Crc::<u16>::new(&crc::CRC_16_IBM_SDLC);

/// Computes the HDLC frame check sequence over `data`.
#[inline]
pub fn hdlc_crc16(data: &[u8]) -> u16 {
    HDLC_CRC16.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::hdlc_crc16;

    #[test]
    fn check_value() {
        assert_eq!(hdlc_crc16(b"123456789"), 0x906E);
    }
}
