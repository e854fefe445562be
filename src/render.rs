//! Text output of packets and their decoded sections.

use std::io::{self, Write};

use crate::{capture::Packet, trace::Section};

/// Bytes per hex dump row.
pub const ROW_LEN: usize = 16;

/// Indentation of decoded sections.
const SECTION_INDENT: &str = "        ";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    show_raw: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { show_raw: true }
    }
}

impl Renderer {
    pub fn new(show_raw: bool) -> Self {
        Self { show_raw }
    }

    /// Writes one packet: its hex dump, its sections and a separating blank line.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        packet: &Packet,
        sections: &[Section],
    ) -> io::Result<()> {
        if self.show_raw {
            let type_code = packet.kind().map_or(' ', |kind| kind.type_code());
            let prefix = format!("{type_code}{}", packet.direction.marker());
            for row in hex_rows(&prefix, packet.data()) {
                writeln!(out, "{row}")?;
            }
            if !sections.is_empty() {
                writeln!(out)?;
            }
        }

        for section in sections {
            write_section(out, section)?;
        }

        writeln!(out)
    }
}

fn write_section<W: Write>(out: &mut W, section: &Section) -> io::Result<()> {
    writeln!(out, "{SECTION_INDENT}{}:", section.title)?;
    for field in &section.fields {
        writeln!(out, "{SECTION_INDENT}  {}: {}", field.label, field.value)?;
    }
    Ok(())
}

/// Formats `data` as rows of hex with a printable-ASCII gutter.
///
/// The first row starts with `prefix`; later rows are indented to match.
pub fn hex_rows(prefix: &str, data: &[u8]) -> Vec<String> {
    let indent = " ".repeat(prefix.chars().count());

    data.chunks(ROW_LEN)
        .enumerate()
        .map(|(i, chunk)| {
            let lead = if i == 0 { prefix } else { indent.as_str() };
            let hex = chunk
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<Vec<_>>()
                .join(" ");
            let ascii: String = chunk
                .iter()
                .map(|&byte| {
                    if byte.is_ascii_graphic() || byte == b' ' {
                        byte as char
                    } else {
                        '.'
                    }
                })
                .collect();

            format!("{lead} {hex:<width$}   {ascii}", width = ROW_LEN * 3 - 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::hex_rows;

    #[test]
    fn rows_wrap_at_sixteen_bytes() {
        let data: Vec<u8> = (0x41..0x41 + 18).collect();
        let rows = hex_rows("T>", &data);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            "T> 41 42 43 44 45 46 47 48 49 4a 4b 4c 4d 4e 4f 50   ABCDEFGHIJKLMNOP"
        );
        assert_eq!(
            rows[1],
            format!("   51 52{}   QR", " ".repeat(42))
        );
    }

    #[test]
    fn unprintable_bytes_are_dots() {
        let rows = hex_rows("C<", &[0x00, 0x7e, 0x41, 0xff]);
        assert_eq!(rows[0], format!("C< 00 7e 41 ff{}   .~A.", " ".repeat(36)));
    }

    #[test]
    fn empty_data_has_no_rows() {
        assert!(hex_rows("T>", &[]).is_empty());
    }
}
