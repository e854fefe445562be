use alloc::collections::BTreeMap;

use super::{MessageKind, tables::SERVICES};

/// One command of a service in a static name table.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub id: u16,
    pub name: &'static str,
    pub request: &'static [(u8, &'static str)],
    pub response: &'static [(u8, &'static str)],
    pub indication: &'static [(u8, &'static str)],
}

/// One QMI service in a static name table.
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry {
    pub id: u8,
    pub name: &'static str,
    pub commands: &'static [CommandEntry],
}

const WDS_SERVICE: u8 = 0x01;
const WDS_SET_IP_FAMILY: u16 = 77;
const WDS_SET_IP_FAMILY_TLV: &str = "WDS/Set IP Family/IP Family (not defined)";

#[derive(Debug, Default)]
struct Command {
    name: &'static str,
    request: BTreeMap<u8, &'static str>,
    response: BTreeMap<u8, &'static str>,
    indication: BTreeMap<u8, &'static str>,
}

impl Command {
    fn tlvs(&self, kind: MessageKind) -> &BTreeMap<u8, &'static str> {
        match kind {
            MessageKind::Request => &self.request,
            MessageKind::Response => &self.response,
            MessageKind::Indication => &self.indication,
        }
    }
}

#[derive(Debug, Default)]
struct Service {
    name: &'static str,
    commands: BTreeMap<u16, Command>,
}

/// Immutable registry of QMI service, command and TLV names.
///
/// Built once from static entries and shared by reference with every
/// dissector for the rest of the run. Lookups that miss return `None`; callers
/// render their own placeholder.
#[derive(Debug, Default)]
pub struct CommandTable {
    services: BTreeMap<u8, Service>,
}

impl CommandTable {
    /// The registry covering every service in the bundled entity database.
    pub fn builtin() -> Self {
        Self::from_entries(SERVICES)
    }

    pub fn from_entries(entries: &[ServiceEntry]) -> Self {
        let services = entries
            .iter()
            .map(|service| {
                let commands = service
                    .commands
                    .iter()
                    .map(|command| {
                        (
                            command.id,
                            Command {
                                name: command.name,
                                request: command.request.iter().copied().collect(),
                                response: command.response.iter().copied().collect(),
                                indication: command.indication.iter().copied().collect(),
                            },
                        )
                    })
                    .collect();

                (
                    service.id,
                    Service {
                        name: service.name,
                        commands,
                    },
                )
            })
            .collect();

        Self { services }
    }

    pub fn service_name(&self, service: u8) -> Option<&'static str> {
        self.services.get(&service).map(|s| s.name)
    }

    pub fn command_name(&self, service: u8, command: u16) -> Option<&'static str> {
        self.command(service, command).map(|c| c.name)
    }

    /// Label of TLV `id` in a message of the given kind.
    pub fn tlv_name(
        &self,
        service: u8,
        command: u16,
        kind: MessageKind,
        id: u8,
    ) -> Option<&'static str> {
        let found = self
            .command(service, command)
            .and_then(|c| c.tlvs(kind).get(&id).copied());

        match found {
            None if service == WDS_SERVICE && command == WDS_SET_IP_FAMILY => {
                Some(WDS_SET_IP_FAMILY_TLV)
            }
            found => found,
        }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    fn command(&self, service: u8, command: u16) -> Option<&Command> {
        self.services.get(&service)?.commands.get(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandEntry, CommandTable, ServiceEntry};
    use crate::qmi::MessageKind;

    #[test]
    fn builtin_covers_control_service() {
        let table = CommandTable::builtin();

        assert_eq!(table.len(), 12);
        assert_eq!(table.service_name(0), Some("ctl"));
        assert_eq!(table.command_name(0, 34), Some("GET_CLIENT_ID"));
        assert_eq!(
            table.tlv_name(0, 34, MessageKind::Response, 2),
            Some("CTL/Get Client ID Response/Result Code")
        );
    }

    #[test]
    fn tlv_names_depend_on_message_kind() {
        let table = CommandTable::builtin();

        assert_eq!(
            table.tlv_name(0, 34, MessageKind::Request, 1),
            Some("CTL/Get Client ID Request/Type")
        );
        assert_eq!(table.tlv_name(0, 34, MessageKind::Indication, 1), None);
    }

    #[test]
    fn set_ip_family_has_fallback_label() {
        let table = CommandTable::builtin();

        assert_eq!(table.command_name(1, 77), Some("SET_IP_FAMILY"));
        assert_eq!(
            table.tlv_name(1, 77, MessageKind::Request, 0x10),
            Some("WDS/Set IP Family/IP Family (not defined)")
        );
    }

    #[test]
    fn misses_are_none() {
        let table = CommandTable::builtin();

        assert_eq!(table.service_name(0x7f), None);
        assert_eq!(table.command_name(0, 0xfff), None);
        assert_eq!(table.tlv_name(0, 34, MessageKind::Response, 0xee), None);
    }

    #[test]
    fn custom_entries() {
        static ENTRIES: &[ServiceEntry] = &[ServiceEntry {
            id: 9,
            name: "test",
            commands: &[CommandEntry {
                id: 1,
                name: "PING",
                request: &[(1, "Test/Ping Request/Payload")],
                response: &[],
                indication: &[],
            }],
        }];

        let table = CommandTable::from_entries(ENTRIES);
        assert_eq!(table.command_name(9, 1), Some("PING"));
        assert!(CommandTable::default().is_empty());
    }
}
