//! Fixed-width WMC record layouts.
//!
//! Every record is little-endian and packed. Fields the firmware fills but
//! whose meaning is unknown are skipped. The Legacy and Extended revisions are
//! separate types: an Extended record embeds the Legacy one and adds the blocks
//! newer firmware appends.

use core::{fmt, net::Ipv4Addr, net::Ipv6Addr};

use crate::{
    decode::{Decode, DecodeError, DecodeErrorKind, take},
    string::PaddedString,
};

/// Fails with [`DecodeErrorKind::RecordLength`] unless `data` holds at least `size` bytes.
fn require<T>(data: &[u8], size: usize) -> Result<(), DecodeError> {
    if data.len() < size {
        return Err(DecodeError::new::<T>(DecodeErrorKind::RecordLength {
            expected: size,
            found: data.len(),
        }));
    }
    Ok(())
}

fn skip<T>(data: &mut &[u8], len: usize) -> Result<(), DecodeError> {
    take::<T>(data, len).map(|_| ())
}

/// Name of a global network mode.
pub fn mode_name(mode: u8) -> &'static str {
    match mode {
        0x00 => "CDMA/EVDO",
        0x01 => "CDMA only",
        0x02 => "EVDO only",
        0x0A => "GSM/UMTS",
        0x0B => "GSM/GPRS/EDGE only",
        0x0C => "UMTS/HSPA only",
        0x14 => "Auto",
        _ => "unknown",
    }
}

/// Name of a connection state.
pub fn connection_state_name(state: u8) -> &'static str {
    match state {
        1 => "idle",
        2 => "connecting",
        3 => "authenticating",
        4 => "connected",
        5 => "dormant",
        6 => "updating NAM",
        7 => "updating PRL",
        8 => "disconnecting",
        9 => "error",
        10 => "updating UICC",
        11 => "updating PLMN",
        _ => "unknown",
    }
}

/// Name of a radio service type.
pub fn service_name(service: u8) -> &'static str {
    match service {
        0 => "none",
        1 => "AMPS",
        2 => "IS95-A",
        3 => "IS95-B",
        4 => "GSM",
        5 => "GPRS",
        6 => "1xRTT",
        7 => "EVDO r0",
        8 => "UMTS",
        9 => "EVDO rA",
        10 => "EDGE",
        11 => "HSDPA",
        12 => "HSUPA",
        13 => "HSPA",
        14 => "LTE",
        15 => "EVDO rA eHRPD",
        _ => "unknown",
    }
}

/// A signal strength byte, sent as the magnitude of a negative dBm value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SignalStrength(pub u8);

impl SignalStrength {
    /// Reserved magnitude meaning there is no signal at all.
    pub const NO_SIGNAL: u8 = 0x7D;

    pub const fn dbm(self) -> i16 {
        -(self.0 as i16)
    }

    pub const fn is_no_signal(self) -> bool {
        self.0 == Self::NO_SIGNAL
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dBm", self.dbm())?;
        if self.is_no_signal() {
            f.write_str(" (NO SIGNAL)")?;
        }
        Ok(())
    }
}

impl Decode for SignalStrength {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(Self(u8::decode(data)?))
    }
}

/// A date and time whose single-byte fields are each followed by a zero pad byte.
///
/// | Field    | Size |
/// |----------|------|
/// | `year`   | 2    |
/// | `month`  | 1+1  |
/// | `day`    | 1+1  |
/// | `hour`   | 1+1  |
/// | `minute` | 1+1  |
/// | `second` | 1    |
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    pub const SIZE: usize = 11;
}

impl Decode for Timestamp {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        let year = u16::decode(data)?;
        let [month, _, day, _, hour, _, minute, _, second] = <[u8; 9]>::decode(data)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// The four-byte body of a global mode get response or set request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GlobalMode {
    pub mode: u8,
}

impl GlobalMode {
    pub const SIZE: usize = 4;

    pub fn name(&self) -> &'static str {
        mode_name(self.mode)
    }
}

impl Decode for GlobalMode {
    /// Unlike other records, the body must be exactly [`GlobalMode::SIZE`] bytes.
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        if data.len() != Self::SIZE {
            return Err(DecodeError::new::<Self>(DecodeErrorKind::RecordLength {
                expected: Self::SIZE,
                found: data.len(),
            }));
        }

        let [_, mode, _, _] = <[u8; 4]>::decode(data)?;
        Ok(Self { mode })
    }
}

/// Identity block of a DEVICE_INFO response.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeviceInfo {
    pub manufacturer: PaddedString<64>,
    pub model: PaddedString<64>,
    pub firmware_revision: PaddedString<64>,
    pub hardware_revision: PaddedString<64>,
    pub min: PaddedString<10>,
    pub home_sid: u16,
    pub prl_version: u16,
    pub eri_version: u16,
}

impl DeviceInfo {
    pub const SIZE: usize = 447;
}

impl Decode for DeviceInfo {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        skip::<Self>(data, 27)?;
        let manufacturer = PaddedString::decode(data)?;
        let model = PaddedString::decode(data)?;
        let firmware_revision = PaddedString::decode(data)?;
        let hardware_revision = PaddedString::decode(data)?;
        skip::<Self>(data, 128)?;
        let min = PaddedString::decode(data)?;
        skip::<Self>(data, 12)?;
        let home_sid = u16::decode(data)?;
        skip::<Self>(data, 2)?;
        let prl_version = u16::decode(data)?;
        skip::<Self>(data, 2)?;
        let eri_version = u16::decode(data)?;
        skip::<Self>(data, 4)?;

        Ok(Self {
            manufacturer,
            model,
            firmware_revision,
            hardware_revision,
            min,
            home_sid,
            prl_version,
            eri_version,
        })
    }
}

/// Hardware and SIM identifiers appended by newer firmware.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeviceIds {
    pub meid: PaddedString<14>,
    pub imei: PaddedString<16>,
    /// Filled by the firmware with a value of unknown meaning.
    pub unknown: PaddedString<16>,
    pub iccid: PaddedString<20>,
}

impl DeviceIds {
    pub const SIZE: usize = 148;
}

impl Decode for DeviceIds {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        skip::<Self>(data, 64)?;
        let meid = PaddedString::decode(data)?;
        skip::<Self>(data, 6)?;
        let imei = PaddedString::decode(data)?;
        skip::<Self>(data, 6)?;
        let unknown = PaddedString::decode(data)?;
        let iccid = PaddedString::decode(data)?;
        skip::<Self>(data, 6)?;

        Ok(Self {
            meid,
            imei,
            unknown,
            iccid,
        })
    }
}

/// Home network codes, present only on some Extended firmware.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HomeNetwork {
    pub mcc: PaddedString<16>,
    pub mnc: PaddedString<16>,
}

impl HomeNetwork {
    pub const SIZE: usize = 44;
}

impl Decode for HomeNetwork {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        let mcc = PaddedString::decode(data)?;
        let mnc = PaddedString::decode(data)?;
        skip::<Self>(data, 12)?;

        Ok(Self { mcc, mnc })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeviceInfoExtended {
    pub base: DeviceInfo,
    pub ids: DeviceIds,
    pub home_network: Option<HomeNetwork>,
}

impl DeviceInfoExtended {
    pub const SIZE: usize = DeviceInfo::SIZE + DeviceIds::SIZE;
}

impl Decode for DeviceInfoExtended {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        let base = DeviceInfo::decode(data)?;
        let ids = DeviceIds::decode(data)?;
        let home_network = optional(data, HomeNetwork::SIZE)?;

        Ok(Self {
            base,
            ids,
            home_network,
        })
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ConnectionInfo {
    pub rx_bytes: u32,
    pub tx_bytes: u32,
    pub state: u8,
}

impl ConnectionInfo {
    pub const SIZE: usize = 20;

    pub fn state_name(&self) -> &'static str {
        connection_state_name(self.state)
    }
}

impl Decode for ConnectionInfo {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        let rx_bytes = u32::decode(data)?;
        let tx_bytes = u32::decode(data)?;
        skip::<Self>(data, 8)?;
        let state = u8::decode(data)?;
        skip::<Self>(data, 3)?;

        Ok(Self {
            rx_bytes,
            tx_bytes,
            state,
        })
    }
}

/// Interface addresses, sent as text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConnectionAddresses {
    pub ipv4: PaddedString<16>,
    pub ipv6: PaddedString<40>,
}

impl ConnectionAddresses {
    pub const SIZE: usize = 68;

    /// The IPv4 address, if the text parses as one.
    pub fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        self.ipv4.text().parse().ok()
    }

    pub fn ipv6_addr(&self) -> Option<Ipv6Addr> {
        self.ipv6.text().parse().ok()
    }
}

impl Decode for ConnectionAddresses {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        skip::<Self>(data, 4)?;
        let ipv4 = PaddedString::decode(data)?;
        skip::<Self>(data, 8)?;
        let ipv6 = PaddedString::decode(data)?;

        Ok(Self { ipv4, ipv6 })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConnectionInfoExtended {
    pub base: ConnectionInfo,
    pub addresses: ConnectionAddresses,
}

impl ConnectionInfoExtended {
    pub const SIZE: usize = ConnectionInfo::SIZE + ConnectionAddresses::SIZE;
}

impl Decode for ConnectionInfoExtended {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        Ok(Self {
            base: ConnectionInfo::decode(data)?,
            addresses: ConnectionAddresses::decode(data)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NetworkInfo {
    pub service: u8,
    pub time: Timestamp,
    pub signal_2g: SignalStrength,
}

impl NetworkInfo {
    pub const SIZE: usize = 25;

    pub fn service_name(&self) -> &'static str {
        service_name(self.service)
    }
}

impl Decode for NetworkInfo {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        skip::<Self>(data, 4)?;
        let service = u8::decode(data)?;
        skip::<Self>(data, 1)?;
        let time = Timestamp::decode(data)?;
        skip::<Self>(data, 7)?;
        let signal_2g = SignalStrength::decode(data)?;

        Ok(Self {
            service,
            time,
            signal_2g,
        })
    }
}

/// A packed MCC/MNC pair, e.g. `310260` or `31026` for a two-digit MNC.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PackedPlmn(pub u32);

impl PackedPlmn {
    /// Splits the value into `(mcc, mnc)`. Returns `None` when the MCC is not plausible.
    pub const fn split(self) -> Option<(u32, u32)> {
        let value = if self.0 < 100_000 {
            self.0.saturating_mul(10)
        } else {
            self.0
        };

        let mcc = value / 1000;
        if mcc > 100 {
            Some((mcc, value % 1000))
        } else {
            None
        }
    }
}

/// Radio details appended by newer firmware.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NetworkDetail {
    pub cdma_operator: PaddedString<16>,
    pub signal_3g: SignalStrength,
    pub operator_3gpp: PaddedString<8>,
    pub plmn: PackedPlmn,
}

impl NetworkDetail {
    pub const SIZE: usize = 114;
}

impl Decode for NetworkDetail {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        skip::<Self>(data, 3)?;
        let cdma_operator = PaddedString::decode(data)?;
        skip::<Self>(data, 18)?;
        let signal_3g = SignalStrength::decode(data)?;
        skip::<Self>(data, 8)?;
        let operator_3gpp = PaddedString::decode(data)?;
        skip::<Self>(data, 56)?;
        let plmn = PackedPlmn(u32::decode(data)?);

        Ok(Self {
            cdma_operator,
            signal_3g,
            operator_3gpp,
            plmn,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NetworkInfoExtended {
    pub base: NetworkInfo,
    pub detail: NetworkDetail,
    /// Present only when the firmware appends the LTE block.
    pub signal_lte: Option<SignalStrength>,
}

impl NetworkInfoExtended {
    pub const SIZE: usize = NetworkInfo::SIZE + NetworkDetail::SIZE;
    pub const LTE_SIZE: usize = 8;
}

impl Decode for NetworkInfoExtended {
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
        require::<Self>(data, Self::SIZE)?;

        let base = NetworkInfo::decode(data)?;
        let detail = NetworkDetail::decode(data)?;
        let signal_lte = if data.len() >= Self::LTE_SIZE {
            let signal = SignalStrength::decode(data)?;
            skip::<Self>(data, Self::LTE_SIZE - 1)?;
            Some(signal)
        } else {
            None
        };

        Ok(Self {
            base,
            detail,
            signal_lte,
        })
    }
}

/// Decodes a trailing block only if enough bytes remain for all of it.
fn optional<T: Decode>(data: &mut &[u8], size: usize) -> Result<Option<T>, DecodeError> {
    if data.len() < size {
        return Ok(None);
    }
    T::decode(data).map(Some)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{
        ConnectionInfoExtended, DeviceInfo, DeviceInfoExtended, GlobalMode, NetworkInfo,
        NetworkInfoExtended, PackedPlmn, SignalStrength, Timestamp,
    };
    use crate::{Decode, DecodeErrorKind};

    fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
        buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    fn device_info() -> Vec<u8> {
        let mut buf = vec![0; DeviceInfo::SIZE];
        put(&mut buf, 27, b"Franklin Wireless");
        put(&mut buf, 91, b"U600");
        put(&mut buf, 155, b"P1.0.4");
        put(&mut buf, 219, b"Rev 1");
        put(&mut buf, 411, b"1234567890");
        put(&mut buf, 433, &4145u16.to_le_bytes());
        put(&mut buf, 437, &60018u16.to_le_bytes());
        put(&mut buf, 441, &3u16.to_le_bytes());
        buf
    }

    #[test]
    fn legacy_device_info() {
        let buf = device_info();
        let mut data = &buf[..];
        let info = DeviceInfo::decode(&mut data).unwrap();

        assert_eq!(info.manufacturer.text(), "Franklin Wireless");
        assert_eq!(info.model.text(), "U600");
        assert_eq!(info.firmware_revision.text(), "P1.0.4");
        assert_eq!(info.hardware_revision.text(), "Rev 1");
        assert_eq!(info.min.text(), "1234567890");
        assert_eq!(info.home_sid, 4145);
        assert_eq!(info.prl_version, 60018);
        assert_eq!(info.eri_version, 3);
        assert!(data.is_empty());
    }

    #[test]
    fn extended_device_info_requires_id_block() {
        let buf = device_info();
        let err = DeviceInfoExtended::decode(&mut &buf[..]).unwrap_err();
        assert_eq!(
            err.kind(),
            DecodeErrorKind::RecordLength {
                expected: 595,
                found: 447,
            }
        );

        let mut buf = buf;
        buf.resize(DeviceInfoExtended::SIZE, 0);
        put(&mut buf, 447 + 64, b"A1000012345678");
        put(&mut buf, 447 + 84, b"990000862471854");
        put(&mut buf, 447 + 106, b"0123");
        put(&mut buf, 447 + 122, b"89148000000123456789");

        let info = DeviceInfoExtended::decode(&mut &buf[..]).unwrap();
        assert_eq!(info.ids.meid.text(), "A1000012345678");
        assert_eq!(info.ids.imei.text(), "990000862471854");
        assert_eq!(info.ids.unknown.text(), "0123");
        assert_eq!(info.ids.iccid.text(), "89148000000123456789");
        assert!(info.home_network.is_none());
    }

    #[test]
    fn short_record_is_fatal() {
        let err = DeviceInfo::decode(&mut &[0u8; 100][..]).unwrap_err();
        assert_eq!(
            err.kind(),
            DecodeErrorKind::RecordLength {
                expected: 447,
                found: 100,
            }
        );
    }

    #[test]
    fn global_mode_must_be_exact() {
        let mode = GlobalMode::decode(&mut &[0x01, 0x02, 0x03, 0x04][..]).unwrap();
        assert_eq!(mode.mode, 0x02);
        assert_eq!(mode.name(), "EVDO only");

        assert!(GlobalMode::decode(&mut &[0x01, 0x02, 0x03, 0x04, 0x05][..]).is_err());
    }

    #[test]
    fn timestamp_skips_pad_bytes() {
        let bytes = [0xdb, 0x07, 3, 0, 14, 0, 9, 0, 26, 0, 53];
        let time = Timestamp::decode(&mut &bytes[..]).unwrap();

        assert_eq!(time.year, 2011);
        assert_eq!(alloc::format!("{time}"), "2011/03/14 09:26:53");
    }

    #[test]
    fn network_info_with_lte_block() {
        let mut buf = vec![0u8; NetworkInfoExtended::SIZE + NetworkInfoExtended::LTE_SIZE];
        buf[4] = 14;
        put(&mut buf, 6, &[0xdb, 0x07, 3, 0, 14, 0, 9, 0, 26, 0, 53]);
        buf[24] = 0x7D;
        put(&mut buf, 25 + 3, b"Verizon");
        buf[25 + 37] = 87;
        put(&mut buf, 25 + 46, b"VZW");
        put(&mut buf, 25 + 110, &311480u32.to_le_bytes());
        buf[139] = 95;

        let info = NetworkInfoExtended::decode(&mut &buf[..]).unwrap();
        assert_eq!(info.base.service_name(), "LTE");
        assert!(info.base.signal_2g.is_no_signal());
        assert_eq!(info.detail.cdma_operator.text(), "Verizon");
        assert_eq!(info.detail.operator_3gpp.text(), "VZW");
        assert_eq!(info.detail.signal_3g.dbm(), -87);
        assert_eq!(info.detail.plmn.split(), Some((311, 480)));
        assert_eq!(info.signal_lte, Some(SignalStrength(95)));

        let legacy = NetworkInfo::decode(&mut &buf[..NetworkInfo::SIZE]).unwrap();
        assert_eq!(legacy.time.day, 14);
    }

    #[test]
    fn connection_addresses_parse() {
        let mut buf = vec![0u8; ConnectionInfoExtended::SIZE];
        put(&mut buf, 0, &1000u32.to_le_bytes());
        put(&mut buf, 4, &250u32.to_le_bytes());
        buf[16] = 4;
        put(&mut buf, 24, b"10.0.0.1");
        put(&mut buf, 48, b"fe80::1");

        let info = ConnectionInfoExtended::decode(&mut &buf[..]).unwrap();
        assert_eq!(info.base.rx_bytes, 1000);
        assert_eq!(info.base.state_name(), "connected");
        assert_eq!(
            info.addresses.ipv4_addr(),
            Some(core::net::Ipv4Addr::new(10, 0, 0, 1))
        );
        assert!(info.addresses.ipv6_addr().is_some());
    }

    #[test]
    fn signal_display() {
        assert_eq!(alloc::format!("{}", SignalStrength(0x7D)), "-125 dBm (NO SIGNAL)");
        assert_eq!(alloc::format!("{}", SignalStrength(70)), "-70 dBm");
    }

    #[test]
    fn plmn_with_two_digit_mnc() {
        assert_eq!(PackedPlmn(31026).split(), Some((310, 260)));
        assert_eq!(PackedPlmn(0).split(), None);
    }
}
