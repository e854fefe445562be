//! Reassembly of transfer payloads from a line-oriented USB capture log.
//!
//! A capture looks like this:
//!
//! ```text
//! [197 ms]  >>>  URB 1 going down  >>>
//! -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:
//!   PipeHandle           = 8638a6b4 [endpoint 0x00000002]
//!   TransferBufferMDL    = 86344d70
//!     00000000: 01 0f 00 00 00 00 00 01 22 00 04 00 01 01 00 03
//!   UrbLink              = 00000000
//! ```

use log::{debug, trace, warn};
use wwan_proto::Direction;

use crate::{ProtocolBinding, TraceError};

mod frame;
pub mod urb;

pub use frame::FrameBuffer;
pub use urb::{TransferKind, UrbFunction, UrbMarker};

/// One logical transfer, possibly spanning several URBs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub direction: Direction,
    /// Number of the URB that opened this packet.
    pub urb: u64,
    pub timestamp_ms: Option<u64>,
    pub function: Option<UrbFunction>,
    pub binding: Option<ProtocolBinding>,
    data: FrameBuffer,
    /// Set once the payload will not change any more.
    pub data_complete: bool,
}

impl Packet {
    fn open(marker: UrbMarker) -> Self {
        Self {
            direction: marker.direction,
            urb: marker.urb,
            timestamp_ms: marker.timestamp_ms,
            function: None,
            binding: None,
            data: FrameBuffer::new(),
            data_complete: false,
        }
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn kind(&self) -> Option<TransferKind> {
        self.function.and_then(UrbFunction::kind)
    }

    fn carries_data(&self) -> bool {
        self.kind().is_some()
    }

    fn is_payload_complete(&self) -> Result<bool, TraceError> {
        match self.binding {
            Some(binding) if !self.data.is_empty() => binding
                .is_complete(self.data.as_slice(), self.direction)
                .map_err(TraceError::decode(self.urb, self.direction)),
            _ => Ok(true),
        }
    }
}

/// Which protocol each kind of transfer carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub transfer: Option<ProtocolBinding>,
    pub control: Option<ProtocolBinding>,
}

impl Bindings {
    pub const fn get(&self, kind: TransferKind) -> Option<ProtocolBinding> {
        match kind {
            TransferKind::Transfer => self.transfer,
            TransferKind::Control => self.control,
        }
    }
}

/// A transfer read while an earlier packet is still waiting for the rest of
/// its payload.
#[derive(Debug)]
struct Transfer {
    urb: u64,
    function: Option<UrbFunction>,
    in_data: bool,
}

#[derive(Debug)]
enum State {
    /// No transfer seen yet, or the last packet was handed out.
    Idle,
    /// Collecting the lines of a transfer.
    Open { packet: Packet, in_data: bool },
    /// The payload so far is incomplete. Data from the transfers that follow,
    /// whatever their direction, is appended until the protocol reports the
    /// payload complete. `transfer` is `None` between transfers.
    Continuing {
        packet: Packet,
        transfer: Option<Transfer>,
    },
}

/// Line-at-a-time state machine that turns capture lines into [`Packet`]s.
///
/// A packet with a payload is returned at the line closing its data region,
/// unless its protocol says more is to come, in which case the payload keeps
/// growing across following transfers. A packet without a payload is returned
/// when the next transfer starts, or by [`PacketAssembler::finish`].
#[derive(Debug)]
pub struct PacketAssembler {
    bindings: Bindings,
    state: State,
}

impl PacketAssembler {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            state: State::Idle,
        }
    }

    /// Feeds one capture line. Returns a packet when one is finished.
    pub fn feed(&mut self, line: &str) -> Result<Option<Packet>, TraceError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if let Some(marker) = urb::parse_marker(line)? {
            trace!("URB {} marker ({})", marker.urb, marker.direction);
            return self.start_transfer(marker);
        }

        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {
                trace!("Skipping line outside of a transfer: {line}");
                Ok(None)
            }
            State::Open { packet, in_data } => self.open_line(line, packet, in_data),
            State::Continuing { packet, transfer } => self.continuing_line(line, packet, transfer),
        }
    }

    /// Ends the input, returning the last packet if it is finished.
    pub fn finish(&mut self) -> Result<Option<Packet>, TraceError> {
        let packet = match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => return Ok(None),
            State::Open { packet, .. } | State::Continuing { packet, .. } => packet,
        };

        if !packet.is_payload_complete()? {
            warn!(
                "Capture ended before the packet from URB {} was complete; dropping {} bytes",
                packet.urb,
                packet.data.len()
            );
            return Ok(None);
        }
        Ok(Some(complete(packet)))
    }

    /// Handles a transfer marker. The packet being assembled is handed out
    /// only if its payload is complete; otherwise it absorbs the new transfer.
    fn start_transfer(&mut self, marker: UrbMarker) -> Result<Option<Packet>, TraceError> {
        let packet = match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {
                self.state = open(marker);
                return Ok(None);
            }
            State::Open { packet, .. } | State::Continuing { packet, .. } => packet,
        };

        if packet.is_payload_complete()? {
            self.state = open(marker);
            return Ok(Some(complete(packet)));
        }

        debug!(
            "Packet from URB {} ({}) continues across URB {} ({})",
            packet.urb, packet.direction, marker.urb, marker.direction
        );
        self.state = State::Continuing {
            packet,
            transfer: Some(Transfer {
                urb: marker.urb,
                function: None,
                in_data: false,
            }),
        };
        Ok(None)
    }

    fn open_line(
        &mut self,
        line: &str,
        mut packet: Packet,
        mut in_data: bool,
    ) -> Result<Option<Packet>, TraceError> {
        if let Some(function) = urb::parse_function(line)? {
            trace!("URB {} is {}", packet.urb, function.name());
            packet.function = Some(function);
            packet.binding = function.kind().and_then(|kind| self.bindings.get(kind));
            self.state = State::Open { packet, in_data };
            return Ok(None);
        }

        if !packet.carries_data() {
            trace!("URB {}: {line}", packet.urb);
            self.state = State::Open { packet, in_data };
            return Ok(None);
        }

        if urb::is_data_close(line) {
            if packet.is_payload_complete()? {
                return Ok(Some(complete(packet)));
            }

            debug!(
                "Payload of URB {} is incomplete after {} bytes; waiting for more",
                packet.urb,
                packet.data.len()
            );
            self.state = State::Continuing {
                packet,
                transfer: None,
            };
            return Ok(None);
        }

        in_data = accept_data(line, &mut packet, in_data)?;
        self.state = State::Open { packet, in_data };
        Ok(None)
    }

    fn continuing_line(
        &mut self,
        line: &str,
        mut packet: Packet,
        transfer: Option<Transfer>,
    ) -> Result<Option<Packet>, TraceError> {
        let Some(mut transfer) = transfer else {
            trace!("Skipping line between transfers: {line}");
            self.state = State::Continuing {
                packet,
                transfer: None,
            };
            return Ok(None);
        };

        if let Some(function) = urb::parse_function(line)? {
            trace!("URB {} is {}", transfer.urb, function.name());
            transfer.function = Some(function);
        } else if !transfer.function.is_some_and(|f| f.kind().is_some()) {
            trace!("URB {}: {line}", transfer.urb);
        } else if urb::is_data_close(line) {
            if packet.is_payload_complete()? {
                debug!(
                    "Packet from URB {} completed by URB {}",
                    packet.urb, transfer.urb
                );
                return Ok(Some(complete(packet)));
            }

            self.state = State::Continuing {
                packet,
                transfer: None,
            };
            return Ok(None);
        } else {
            transfer.in_data = accept_data(line, &mut packet, transfer.in_data)?;
        }

        self.state = State::Continuing {
            packet,
            transfer: Some(transfer),
        };
        Ok(None)
    }
}

fn open(marker: UrbMarker) -> State {
    debug!("Opened packet for URB {} ({})", marker.urb, marker.direction);
    State::Open {
        packet: Packet::open(marker),
        in_data: false,
    }
}

fn complete(mut packet: Packet) -> Packet {
    packet.data_complete = true;
    debug!(
        "Completed packet for URB {} with {} bytes",
        packet.urb,
        packet.data.len()
    );
    packet
}

/// Handles a line inside a data-carrying transfer. Returns the new `in_data` state.
fn accept_data(line: &str, packet: &mut Packet, in_data: bool) -> Result<bool, TraceError> {
    if urb::is_data_open(line) {
        return Ok(true);
    }

    if !in_data {
        trace!("URB {}: {line}", packet.urb);
        return Ok(false);
    }

    let Some(text) = urb::data_hex(line) else {
        trace!("URB {}: skipping non-data line {line}", packet.urb);
        return Ok(true);
    };

    let bytes = hex::decode(&text).map_err(|source| TraceError::InvalidHex {
        urb: packet.urb,
        source,
    })?;
    trace!("URB {} += {}", packet.urb, text);
    packet.data.extend(&bytes);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use wwan_proto::Direction;

    use super::{Bindings, PacketAssembler, Packet, UrbFunction};
    use crate::{ProtocolBinding, TraceError};

    fn feed_all(assembler: &mut PacketAssembler, lines: &str) -> Vec<Packet> {
        let mut packets = Vec::new();
        for line in lines.lines() {
            packets.extend(assembler.feed(line).unwrap());
        }
        packets.extend(assembler.finish().unwrap());
        packets
    }

    fn qmux() -> Bindings {
        Bindings {
            transfer: Some(ProtocolBinding::Qmux),
            control: None,
        }
    }

    fn wmc() -> Bindings {
        Bindings {
            transfer: Some(ProtocolBinding::Wmc),
            control: None,
        }
    }

    #[test]
    fn single_transfer() {
        let mut assembler = PacketAssembler::new(qmux());
        let lines = [
            "[12 ms]  >>>  URB 7 going down  >>>",
            "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
            "  TransferBufferMDL    = 86344d70",
            "    00000000: 01 0f 00 00 00 00 00 01 22 00 04 00 01 01 00 03",
            "    00000010: 00",
        ];
        for line in lines {
            assert!(assembler.feed(line).unwrap().is_none());
        }

        let packet = assembler
            .feed("  UrbLink              = 00000000")
            .unwrap()
            .unwrap();

        assert_eq!(packet.urb, 7);
        assert_eq!(packet.timestamp_ms, Some(12));
        assert_eq!(packet.direction, Direction::ToModem);
        assert_eq!(packet.function, Some(UrbFunction::BulkOrInterruptTransfer));
        assert_eq!(packet.binding, Some(ProtocolBinding::Qmux));
        assert!(packet.data_complete);
        assert_eq!(
            packet.data(),
            [
                0x01, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x22, 0x00, 0x04, 0x00, 0x01, 0x01,
                0x00, 0x03, 0x00
            ]
        );
        assert!(assembler.finish().unwrap().is_none());
    }

    #[test]
    fn packet_without_payload_ends_at_next_marker() {
        let mut assembler = PacketAssembler::new(qmux());

        assembler.feed(">>>  URB 1 going down  >>>").unwrap();
        assembler.feed("-- URB_FUNCTION_SELECT_CONFIGURATION:").unwrap();
        let first = assembler
            .feed("<<<  URB 1 coming back  <<<")
            .unwrap()
            .unwrap();

        assert_eq!(first.function, Some(UrbFunction::SelectConfiguration));
        assert!(first.data().is_empty());

        let second = assembler.finish().unwrap().unwrap();
        assert_eq!(second.direction, Direction::ToHost);
        assert_eq!(second.urb, 1);
    }

    #[test]
    fn empty_data_region_is_complete() {
        let mut assembler = PacketAssembler::new(wmc());
        let packets = feed_all(
            &mut assembler,
            "<<<  URB 4 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 00000000\n\
             UrbLink = 00000000\n",
        );

        assert_eq!(packets.len(), 1);
        assert!(packets[0].data().is_empty());
    }

    #[test]
    fn wmc_payload_continues_across_transfers() {
        let mut assembler = PacketAssembler::new(wmc());
        let packets = feed_all(
            &mut assembler,
            "<<<  URB 20 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: c8 03 01 02\n\
             UrbLink = 0\n\
             <<<  URB 21 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: 03 04 30 30 7e\n\
             UrbLink = 0\n",
        );

        assert_eq!(packets.len(), 1);
        assert_eq!(packets[0].urb, 20);
        assert_eq!(
            packets[0].data(),
            [0xc8, 0x03, 0x01, 0x02, 0x03, 0x04, 0x30, 0x30, 0x7e]
        );
    }

    #[test]
    fn incomplete_payload_at_end_is_dropped() {
        let mut assembler = PacketAssembler::new(wmc());
        let packets = feed_all(
            &mut assembler,
            "<<<  URB 20 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: c8 03 01 02\n\
             UrbLink = 0\n",
        );

        assert!(packets.is_empty());
    }

    #[test]
    fn continuation_survives_interleaved_opposite_transfer() {
        let mut assembler = PacketAssembler::new(wmc());
        let packets = feed_all(
            &mut assembler,
            "<<<  URB 20 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: c8 03 01 02\n\
             UrbLink = 0\n\
             >>>  URB 21 going down  >>>\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             UrbLink = 0\n\
             <<<  URB 21 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: 03 04 30 30 7e\n\
             UrbLink = 0\n",
        );

        assert_eq!(packets.len(), 1);
        assert_eq!(packets[0].urb, 20);
        assert_eq!(packets[0].direction, Direction::ToHost);
        assert_eq!(
            packets[0].data(),
            [0xc8, 0x03, 0x01, 0x02, 0x03, 0x04, 0x30, 0x30, 0x7e]
        );
    }

    #[test]
    fn marker_inside_incomplete_data_region_continues() {
        let mut assembler = PacketAssembler::new(wmc());
        let packets = feed_all(
            &mut assembler,
            "<<<  URB 30 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: c8 03 01 02\n\
             <<<  URB 31 coming back  <<<\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: 03 04 30 30 7e\n\
             UrbLink = 0\n\
             >>>  URB 32 going down  >>>\n\
             -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
             TransferBufferMDL = 1\n\
             00000000: c8 06 30 30 7e\n\
             UrbLink = 0\n",
        );

        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].urb, 30);
        assert_eq!(
            packets[0].data(),
            [0xc8, 0x03, 0x01, 0x02, 0x03, 0x04, 0x30, 0x30, 0x7e]
        );
        assert_eq!(packets[1].urb, 32);
        assert_eq!(packets[1].direction, Direction::ToModem);
    }

    #[test]
    fn complete_payload_closes_at_next_marker() {
        let mut assembler = PacketAssembler::new(wmc());
        assembler.feed("<<<  URB 5 coming back  <<<").unwrap();
        assembler
            .feed("-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:")
            .unwrap();
        assembler.feed("TransferBufferMDL = 1").unwrap();
        assembler.feed("00000000: c8 06 30 30 7e").unwrap();

        let packet = assembler
            .feed(">>>  URB 6 going down  >>>")
            .unwrap()
            .unwrap();
        assert_eq!(packet.urb, 5);
        assert!(packet.data_complete);
    }

    #[test]
    fn unknown_function_is_fatal() {
        let mut assembler = PacketAssembler::new(qmux());
        assembler.feed(">>>  URB 1 going down  >>>").unwrap();

        let err = assembler
            .feed("-- URB_FUNCTION_ISOCH_TRANSFER:")
            .unwrap_err();
        assert!(matches!(err, TraceError::UnknownFunction { .. }));
    }

    #[test]
    fn bad_hex_is_fatal() {
        let mut assembler = PacketAssembler::new(qmux());
        assembler.feed(">>>  URB 9 going down  >>>").unwrap();
        assembler
            .feed("-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:")
            .unwrap();
        assembler.feed("TransferBufferMDL = 1").unwrap();

        let err = assembler.feed("00000000: 0g").unwrap_err();
        assert!(matches!(err, TraceError::InvalidHex { urb: 9, .. }));
    }
}
