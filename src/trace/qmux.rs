use wwan_proto::qmi::{CommandTable, QmuxMessage, Tlv, error_name};

use super::{Section, UNKNOWN, hex_bytes, named};

pub fn describe_qmux(message: &QmuxMessage, names: &CommandTable) -> Vec<Section> {
    let header = &message.header;
    let qmi = &message.qmi;

    let service_name = names.service_name(header.service);
    let command_name = names.command_name(header.service, qmi.command);

    let mut qmux = Section::new("QMUX Header");
    qmux.field("len", format!("0x{:04x}", header.length))
        .field("sender", named(format_args!("0x{:02x}", header.sender), header.sender_name()))
        .field("svc", named(format_args!("0x{:02x}", header.service), service_name))
        .field(
            "cid",
            if header.is_broadcast() {
                format!("0x{:02x} (broadcast)", header.client_id)
            } else {
                format!("0x{:02x}", header.client_id)
            },
        );

    let mut qmi_section = Section::new("QMI Header");
    qmi_section
        .field("Flags", format!("0x{:02x} ({})", qmi.flags, qmi.kind.name()))
        .field("TXN", format!("0x{:04x}", qmi.transaction_id))
        .field("Cmd", named(format_args!("0x{:04x}", qmi.command), command_name))
        .field("Size", format!("0x{:04x}", qmi.size));

    let mut sections = vec![qmux, qmi_section];
    sections.extend(message.tlvs.iter().map(|tlv| {
        let name = names.tlv_name(header.service, qmi.command, qmi.kind, tlv.id());
        describe_tlv(tlv, name)
    }));
    sections
}

fn describe_tlv(tlv: &Tlv, name: Option<&str>) -> Section {
    let mut section = Section::new(format!("TLV 0x{:02x} ({})", tlv.id(), name.unwrap_or(UNKNOWN)));
    section.field("Size", format!("0x{:04x}", tlv.length()));

    match tlv.result_code() {
        Some(Ok(result)) => {
            section
                .field("Status", format!("{} ({})", result.status_name(), result.status))
                .field("Error", named(result.error, error_name(result.error)));
        }
        Some(Err(_)) | None => {
            section.field("Data", hex_bytes(tlv.value()));
        }
    }

    section
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use wwan_proto::{Decode, qmi::{CommandTable, QmuxMessage}};

    use super::describe_qmux;

    #[test]
    fn control_request_with_result() {
        let message = QmuxMessage::decode(
            &mut &hex!("01 07 00 00 00 FF 00 00 01 00 02 00 02 02 00 00 00")[..],
        )
        .unwrap();
        let sections = describe_qmux(&message, &CommandTable::builtin());

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].get("svc"), Some("0x00 (ctl)"));
        assert_eq!(sections[0].get("sender"), Some("0x00 (client)"));
        assert_eq!(sections[0].get("cid"), Some("0xff (broadcast)"));
        assert_eq!(sections[1].get("Flags"), Some("0x00 (request)"));
        assert_eq!(sections[2].title, "TLV 0x02 (unknown)");
        assert_eq!(sections[2].get("Status"), Some("SUCCESS (0)"));
        assert_eq!(sections[2].get("Error"), Some("0 (NONE)"));
    }

    #[test]
    fn named_tlvs() {
        let message = QmuxMessage::decode(
            &mut &hex!("01 0f 00 00 00 00 00 05 22 00 04 00 01 01 00 03")[..],
        )
        .unwrap();
        let sections = describe_qmux(&message, &CommandTable::builtin());

        assert_eq!(sections[1].get("Cmd"), Some("0x0022 (GET_CLIENT_ID)"));
        assert_eq!(sections[2].title, "TLV 0x01 (CTL/Get Client ID Request/Type)");
        assert_eq!(sections[2].get("Data"), Some("03"));
    }

    #[test]
    fn unknown_service_is_a_placeholder() {
        let message = QmuxMessage::decode(
            &mut &hex!("01 0c 00 80 7f 01 04 01 00 99 00 00 00")[..],
        )
        .unwrap();
        let sections = describe_qmux(&message, &CommandTable::default());

        assert_eq!(sections[0].get("svc"), Some("0x7f (unknown)"));
        assert_eq!(sections[1].get("Cmd"), Some("0x0099 (unknown)"));
        assert_eq!(sections[1].get("Flags"), Some("0x04 (indication)"));
    }
}
