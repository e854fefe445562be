use std::io::{BufRead, Write};

use log::{debug, info};
use wwan_proto::qmi::CommandTable;

use crate::{
    DecoderConfig, TraceError,
    capture::{Packet, PacketAssembler},
    render::Renderer,
    trace::{self, Section},
};

/// Counts from one decode run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Packets the assembler produced.
    pub packets: usize,
    /// Packets written to the output.
    pub rendered: usize,
}

/// Decodes a whole capture, one line at a time, into a text trace.
///
/// The first fatal error stops the run.
pub struct TraceDecoder {
    config: DecoderConfig,
    names: CommandTable,
    renderer: Renderer,
}

impl TraceDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_names(config, CommandTable::builtin())
    }

    pub fn with_names(config: DecoderConfig, names: CommandTable) -> Self {
        Self {
            renderer: Renderer::new(config.show_raw),
            config,
            names,
        }
    }

    /// Dissects and describes a finished packet. Returns `None` if the packet
    /// has no protocol binding or no payload.
    pub fn decode_packet(&self, packet: &Packet) -> Result<Option<Vec<Section>>, TraceError> {
        let Some(binding) = packet.binding else {
            return Ok(None);
        };
        if packet.data().is_empty() {
            return Ok(None);
        }

        let dissection = binding
            .dissect(packet.data(), packet.direction, self.config.wmc_revision)
            .map_err(TraceError::decode(packet.urb, packet.direction))?;

        Ok(Some(trace::describe(&dissection, &self.names)))
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut W,
    ) -> Result<RunSummary, TraceError> {
        let mut assembler = PacketAssembler::new(self.config.bindings());
        let mut summary = RunSummary::default();

        for line in input.lines() {
            if let Some(packet) = assembler.feed(&line?)? {
                self.emit(&packet, out, &mut summary)?;
            }
        }
        if let Some(packet) = assembler.finish()? {
            self.emit(&packet, out, &mut summary)?;
        }

        info!(
            "Decoded {} packets, rendered {}",
            summary.packets, summary.rendered
        );
        Ok(summary)
    }

    fn emit<W: Write>(
        &self,
        packet: &Packet,
        out: &mut W,
        summary: &mut RunSummary,
    ) -> Result<(), TraceError> {
        summary.packets += 1;

        match self.decode_packet(packet)? {
            Some(sections) => {
                self.renderer.render(out, packet, &sections)?;
                summary.rendered += 1;
            }
            None => debug!("Nothing to show for URB {}", packet.urb),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{RunSummary, TraceDecoder};
    use crate::{DecoderConfig, TraceError};

    #[test]
    fn skips_unbound_packets() {
        let decoder = TraceDecoder::new(DecoderConfig::default());
        let capture = ">>>  URB 1 going down  >>>\n\
                       -- URB_FUNCTION_CONTROL_TRANSFER:\n\
                       TransferBufferMDL = 1\n\
                       00000000: 01 02 03\n\
                       UrbLink = 0\n";

        let mut out = Vec::new();
        let summary = decoder.run(capture.as_bytes(), &mut out).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                packets: 1,
                rendered: 0,
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn decode_errors_name_the_urb() {
        let decoder = TraceDecoder::new(DecoderConfig::default());
        let capture = "<<<  URB 42 coming back  <<<\n\
                       -- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:\n\
                       TransferBufferMDL = 1\n\
                       00000000: 02 07 00 00 00 ff 00 00 01 00 00 00\n\
                       UrbLink = 0\n";

        let err = decoder.run(capture.as_bytes(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, TraceError::Decode { urb: 42, .. }));
    }
}
