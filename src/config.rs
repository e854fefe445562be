//! Run configuration, optionally loaded from an INI file:
//!
//! ```ini
//! [decode]
//! transfer=wmc
//! control=none
//! wmc_revision=legacy
//! log_level=debug
//! show_raw=false
//! ```

use std::{fs, path::Path, str::FromStr};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use wwan_proto::wmc::WmcRevision;

use crate::{ProtocolBinding, TraceError, capture::Bindings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed INI: {0}")]
    Parse(#[from] serde_ini::de::Error),

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DecodeSection {
    transfer: String,
    control: String,
    wmc_revision: String,
    log_level: String,
    show_raw: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IniConfig {
    decode: DecodeSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Protocol on bulk and interrupt pipes.
    pub transfer: Option<ProtocolBinding>,
    /// Protocol on the control pipe.
    pub control: Option<ProtocolBinding>,
    pub wmc_revision: WmcRevision,
    pub log_level: LevelFilter,
    /// Whether to print the hex dump before the decoded sections.
    pub show_raw: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            transfer: Some(ProtocolBinding::Qmux),
            control: None,
            wmc_revision: WmcRevision::Extended,
            log_level: LevelFilter::Warn,
            show_raw: true,
        }
    }
}

impl DecoderConfig {
    /// Reads the configuration from an INI file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_ini_str(&text)?)
    }

    /// Parses INI text. Missing keys keep their defaults.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        let ini: IniConfig = serde_ini::from_str(text)?;
        let section = ini.decode;
        let mut config = Self::default();

        if let Some(value) = set(&section.transfer) {
            config.transfer = parse_binding("transfer", value)?;
        }
        if let Some(value) = set(&section.control) {
            config.control = parse_binding("control", value)?;
        }
        if let Some(value) = set(&section.wmc_revision) {
            config.wmc_revision = parse_value("wmc_revision", value)?;
        }
        if let Some(value) = set(&section.log_level) {
            config.log_level = parse_value("log_level", value)?;
        }
        if let Some(value) = set(&section.show_raw) {
            config.show_raw = parse_value("show_raw", value)?;
        }

        Ok(config)
    }

    pub fn bindings(&self) -> Bindings {
        Bindings {
            transfer: self.transfer,
            control: self.control,
        }
    }
}

/// A key counts as set when its value is not blank.
fn set(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.into(),
        })
}

fn parse_binding(key: &'static str, value: &str) -> Result<Option<ProtocolBinding>, ConfigError> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse_value(key, value).map(Some)
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use wwan_proto::wmc::WmcRevision;

    use super::{ConfigError, DecoderConfig};
    use crate::ProtocolBinding;

    #[test]
    fn full_section() {
        let config = DecoderConfig::from_ini_str(
            "[decode]\r\n\
             transfer=wmc\r\n\
             control=qmux\r\n\
             wmc_revision=legacy\r\n\
             log_level=debug\r\n\
             show_raw=false\r\n",
        )
        .unwrap();

        assert_eq!(
            config,
            DecoderConfig {
                transfer: Some(ProtocolBinding::Wmc),
                control: Some(ProtocolBinding::Qmux),
                wmc_revision: WmcRevision::Legacy,
                log_level: LevelFilter::Debug,
                show_raw: false,
            }
        );
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config = DecoderConfig::from_ini_str("[decode]\r\ntransfer=none\r\n").unwrap();

        assert_eq!(config.transfer, None);
        assert_eq!(config.control, None);
        assert_eq!(config.wmc_revision, WmcRevision::Extended);
        assert!(config.show_raw);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(DecoderConfig::from_ini_str("").unwrap(), DecoderConfig::default());
    }

    #[test]
    fn bad_value_names_the_key() {
        let err = DecoderConfig::from_ini_str("[decode]\r\nwmc_revision=newest\r\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "wmc_revision", .. }
        ));
    }
}
