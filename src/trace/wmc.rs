use wwan_proto::wmc::{
    ConnectionAddresses, ConnectionInfo, DeviceIds, DeviceInfo, FrameCrc, NetworkDetail,
    NetworkInfo, WmcFrame, WmcMessage, WmcRecord,
};

use super::{Section, hex_bytes, named};

pub fn describe_wmc(frame: &WmcFrame, message: Option<&WmcMessage>) -> Vec<Section> {
    let Some(message) = message else {
        return Vec::new();
    };

    let mut section = Section::new("WMC Packet");
    section.field("Cmd", named(format_args!("0x{:02x}", message.opcode), message.name()));

    match frame.crc {
        FrameCrc::Valid | FrameCrc::Unchecked => {}
        FrameCrc::Placeholder => {
            section.field("CRC", "placeholder");
        }
        FrameCrc::Mismatch { found, expected } => {
            section.field("CRC", format!("0x{found:04x} (expected 0x{expected:04x})"));
        }
    }

    if let Some(record) = &message.record {
        describe_record(&mut section, record);
    }

    vec![section]
}

fn describe_record(section: &mut Section, record: &WmcRecord) {
    match record {
        WmcRecord::GlobalMode(mode) => {
            section.field("Mode", format!("0x{:X} ({})", mode.mode, mode.name()));
        }
        WmcRecord::DeviceInfo(info) => device_info(section, info),
        WmcRecord::DeviceInfoExtended(info) => {
            device_info(section, &info.base);
            device_ids(section, &info.ids);
            if let Some(home) = &info.home_network {
                section.field("MCC", &home.mcc).field("MNC", &home.mnc);
            }
        }
        WmcRecord::ConnectionInfo(info) => connection_info(section, info),
        WmcRecord::ConnectionInfoExtended(info) => {
            connection_info(section, &info.base);
            addresses(section, &info.addresses);
        }
        WmcRecord::NetworkInfo(info) => network_info(section, info),
        WmcRecord::NetworkInfoExtended(info) => {
            network_info(section, &info.base);
            network_detail(section, &info.detail);
            section.field_opt("LTE dBm", info.signal_lte);
        }
        WmcRecord::InitTime(time) => {
            section.field("Time", time);
        }
        WmcRecord::Raw(data) => {
            section.field("Data", hex_bytes(data));
        }
    }
}

fn device_info(section: &mut Section, info: &DeviceInfo) {
    section
        .field("Manf", &info.manufacturer)
        .field("Model", &info.model)
        .field("FW Rev", &info.firmware_revision)
        .field("HW Rev", &info.hardware_revision)
        .field("MIN", &info.min)
        .field("Home SID", info.home_sid)
        .field("PRL Ver", info.prl_version)
        .field("ERI Ver", info.eri_version);
}

fn device_ids(section: &mut Section, ids: &DeviceIds) {
    section
        .field("MEID", &ids.meid)
        .field("IMEI", &ids.imei)
        .field("Unknown", &ids.unknown)
        .field("ICCID", &ids.iccid);
}

fn connection_info(section: &mut Section, info: &ConnectionInfo) {
    section
        .field("RX Bytes", info.rx_bytes)
        .field("TX Bytes", info.tx_bytes)
        .field("State", format!("{} ({})", info.state, info.state_name()));
}

fn addresses(section: &mut Section, addresses: &ConnectionAddresses) {
    match addresses.ipv4_addr() {
        Some(addr) => section.field("IP4 Addr", addr),
        None => section.field("IP4 Addr", &addresses.ipv4),
    };
    match addresses.ipv6_addr() {
        Some(addr) => section.field("IP6 Addr", addr),
        None => section.field("IP6 Addr", &addresses.ipv6),
    };
}

fn network_info(section: &mut Section, info: &NetworkInfo) {
    section
        .field("Time", info.time)
        .field("Service", format!("{} ({})", info.service, info.service_name()))
        .field("2G dBm", info.signal_2g);
}

fn network_detail(section: &mut Section, detail: &NetworkDetail) {
    section
        .field("3G dBm", detail.signal_3g)
        .field("CDMA Op", &detail.cdma_operator)
        .field("3GPP Op", &detail.operator_3gpp)
        .field_opt(
            "MCC/MNC",
            detail.plmn.split().map(|(mcc, mnc)| format!("{mcc}-{mnc}")),
        );
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use wwan_proto::{
        Direction,
        wmc::{FrameCrc, WmcFrame, WmcMessage, WmcRevision},
    };

    use super::describe_wmc;

    fn frame(payload: &[u8], crc: FrameCrc) -> WmcFrame {
        WmcFrame {
            payload: payload.to_vec(),
            crc,
        }
    }

    #[test]
    fn global_mode() {
        let frame = frame(&hex!("C8 03 01 02 03 04"), FrameCrc::Placeholder);
        let message = WmcMessage::dissect(&frame.payload, Direction::ToHost, WmcRevision::Legacy)
            .unwrap();

        let sections = describe_wmc(&frame, message.as_ref());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].get("Cmd"), Some("0x03 (GET_GLOBAL_MODE)"));
        assert_eq!(sections[0].get("Mode"), Some("0x2 (EVDO only)"));
        assert_eq!(sections[0].get("CRC"), Some("placeholder"));
    }

    #[test]
    fn unknown_opcode_placeholder() {
        let frame = frame(&hex!("C8 99"), FrameCrc::Valid);
        let message = WmcMessage::dissect(&frame.payload, Direction::ToHost, WmcRevision::Legacy)
            .unwrap();

        let sections = describe_wmc(&frame, message.as_ref());
        assert_eq!(sections[0].get("Cmd"), Some("0x99 (unknown)"));
        assert_eq!(sections[0].fields.len(), 1);
    }

    #[test]
    fn not_wmc() {
        let frame = frame(&hex!("01 02"), FrameCrc::Unchecked);
        assert!(describe_wmc(&frame, None).is_empty());
    }

    #[test]
    fn init_time() {
        let frame = frame(
            &hex!("C8 0D db 07 03 00 0e 00 09 00 1a 00 35"),
            FrameCrc::Unchecked,
        );
        let message =
            WmcMessage::dissect(&frame.payload, Direction::ToModem, WmcRevision::Extended)
                .unwrap();

        let sections = describe_wmc(&frame, message.as_ref());
        assert_eq!(sections[0].get("Time"), Some("2011/03/14 09:26:53"));
    }
}
