//! Structured, render-ready descriptions of dissected packets.
//!
//! Nothing here writes output: [`describe`] maps a [`Dissection`] to plain
//! [`Section`]s, which [`Renderer`](crate::render::Renderer) turns into text.

use std::fmt;

use wwan_proto::qmi::CommandTable;

use crate::binding::Dissection;

mod qmux;
mod wmc;

pub use qmux::describe_qmux;
pub use wmc::describe_wmc;

/// Placeholder shown for anything the name tables do not know.
pub const UNKNOWN: &str = "unknown";

/// A `label: value` line within a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// A titled group of fields, e.g. one header or one TLV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn field(&mut self, label: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.fields.push(Field {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }

    /// Appends a field only if `value` is present.
    pub fn field_opt<T: fmt::Display>(
        &mut self,
        label: impl Into<String>,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.field(label, value);
        }
        self
    }

    /// Looks up a field's value by label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// Describes a dissection as sections, resolving names through `names`.
pub fn describe(dissection: &Dissection, names: &CommandTable) -> Vec<Section> {
    match dissection {
        Dissection::Nothing => Vec::new(),
        Dissection::Qmux(message) => describe_qmux(message, names),
        Dissection::Wmc { frame, message } => describe_wmc(frame, message.as_ref()),
    }
}

/// Space-separated lowercase hex.
pub(crate) fn hex_bytes(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `value (name)`, with [`UNKNOWN`] standing in for a missing name.
pub(crate) fn named(value: impl fmt::Display, name: Option<&str>) -> String {
    format!("{value} ({})", name.unwrap_or(UNKNOWN))
}

#[cfg(test)]
mod tests {
    use super::{Section, hex_bytes, named};

    #[test]
    fn section_builder() {
        let mut section = Section::new("Header");
        section
            .field("Len", 7)
            .field_opt("Missing", None::<u8>)
            .field_opt("Present", Some("yes"));

        assert_eq!(section.fields.len(), 2);
        assert_eq!(section.get("Len"), Some("7"));
        assert_eq!(section.get("Present"), Some("yes"));
        assert_eq!(section.get("Missing"), None);
    }

    #[test]
    fn helpers() {
        assert_eq!(hex_bytes(&[0x00, 0xab, 0x7e]), "00 ab 7e");
        assert_eq!(named("0x01", Some("wds")), "0x01 (wds)");
        assert_eq!(named("0x7f", None), "0x7f (unknown)");
    }
}
