//! Classification of individual capture lines.

use wwan_proto::Direction;

use crate::TraceError;

const TO_MODEM_MARKER: &str = ">>>";
const TO_HOST_MARKER: &str = "<<<";
const FUNCTION_PREFIX: &str = "-- URB_FUNCTION_";
const DATA_OPEN: &str = "TransferBufferMDL";
const DATA_CLOSE: &str = "UrbLink";

/// Which configured protocol a data-carrying function is bound to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransferKind {
    /// Bulk or interrupt pipe traffic.
    Transfer,
    /// Control pipe traffic, including class requests.
    Control,
}

impl TransferKind {
    /// Single-letter code shown in front of the direction marker.
    pub const fn type_code(self) -> char {
        match self {
            Self::Transfer => 'T',
            Self::Control => 'C',
        }
    }
}

/// Every URB function the capture tool is known to log.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum UrbFunction {
    GetDescriptorFromDevice,
    SelectConfiguration,
    ResetPipe,
    BulkOrInterruptTransfer,
    GetStatusFromDevice,
    ControlTransfer,
    SetFeatureToDevice,
    AbortPipe,
    ClassInterface,
    ClearFeatureToDevice,
    VendorDevice,
}

impl UrbFunction {
    const ALL: [Self; 11] = [
        Self::GetDescriptorFromDevice,
        Self::SelectConfiguration,
        Self::ResetPipe,
        Self::BulkOrInterruptTransfer,
        Self::GetStatusFromDevice,
        Self::ControlTransfer,
        Self::SetFeatureToDevice,
        Self::AbortPipe,
        Self::ClassInterface,
        Self::ClearFeatureToDevice,
        Self::VendorDevice,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::GetDescriptorFromDevice => "GET_DESCRIPTOR_FROM_DEVICE",
            Self::SelectConfiguration => "SELECT_CONFIGURATION",
            Self::ResetPipe => "RESET_PIPE",
            Self::BulkOrInterruptTransfer => "BULK_OR_INTERRUPT_TRANSFER",
            Self::GetStatusFromDevice => "GET_STATUS_FROM_DEVICE",
            Self::ControlTransfer => "CONTROL_TRANSFER",
            Self::SetFeatureToDevice => "SET_FEATURE_TO_DEVICE",
            Self::AbortPipe => "ABORT_PIPE",
            Self::ClassInterface => "CLASS_INTERFACE",
            Self::ClearFeatureToDevice => "CLEAR_FEATURE_TO_DEVICE",
            Self::VendorDevice => "VENDOR_DEVICE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// The kind of payload this function carries, or `None` if it carries none.
    pub const fn kind(self) -> Option<TransferKind> {
        match self {
            Self::BulkOrInterruptTransfer => Some(TransferKind::Transfer),
            Self::ControlTransfer | Self::ClassInterface => Some(TransferKind::Control),
            _ => None,
        }
    }
}

/// A line that opens a new transfer, e.g. `[197 ms]  >>>  URB 1 going down  >>>`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct UrbMarker {
    pub direction: Direction,
    pub urb: u64,
    pub timestamp_ms: Option<u64>,
}

/// Parses a transfer marker.
///
/// Returns `Ok(None)` for any line that is not a marker.
///
/// # Errors
///
/// A marker with no URB number after it is [`TraceError::MissingUrbNumber`].
pub fn parse_marker(line: &str) -> Result<Option<UrbMarker>, TraceError> {
    let mut rest = line.trim_start();
    let mut timestamp_ms = None;

    if let Some(stamped) = rest.strip_prefix('[') {
        let Some((stamp, after)) = stamped.split_once(" ms]") else {
            return Ok(None);
        };
        timestamp_ms = stamp.trim().parse().ok();
        rest = after.trim_start();
    }

    let direction = if let Some(after) = rest.strip_prefix(TO_MODEM_MARKER) {
        rest = after;
        Direction::ToModem
    } else if let Some(after) = rest.strip_prefix(TO_HOST_MARKER) {
        rest = after;
        Direction::ToHost
    } else {
        return Ok(None);
    };

    let Some(after) = rest.trim_start().strip_prefix("URB") else {
        return Ok(None);
    };

    let digits: String = after
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    let urb = digits
        .parse()
        .map_err(|_| TraceError::MissingUrbNumber { line: line.into() })?;

    Ok(Some(UrbMarker {
        direction,
        urb,
        timestamp_ms,
    }))
}

/// Parses a `-- URB_FUNCTION_<NAME>:` line.
///
/// Returns `Ok(None)` for any other line.
///
/// # Errors
///
/// A function name not in [`UrbFunction`] is [`TraceError::UnknownFunction`].
pub fn parse_function(line: &str) -> Result<Option<UrbFunction>, TraceError> {
    let Some(rest) = line.trim_start().strip_prefix(FUNCTION_PREFIX) else {
        return Ok(None);
    };

    let name = rest.trim_end().trim_end_matches(':');
    UrbFunction::from_name(name)
        .map(Some)
        .ok_or_else(|| TraceError::UnknownFunction { name: name.into() })
}

pub fn is_data_open(line: &str) -> bool {
    line.trim_start().starts_with(DATA_OPEN)
}

pub fn is_data_close(line: &str) -> bool {
    line.trim_start().starts_with(DATA_CLOSE)
}

/// Returns the hex text of a `<offset>: xx xx ...` data line with spaces removed.
pub fn data_hex(line: &str) -> Option<String> {
    let (_, bytes) = line.split_once(": ")?;
    Some(bytes.split_whitespace().collect())
}

#[cfg(test)]
mod tests {
    use wwan_proto::Direction;

    use super::{UrbFunction, UrbMarker, data_hex, parse_function, parse_marker};
    use crate::TraceError;

    #[test]
    fn marker_with_timestamp() {
        let marker = parse_marker("[197 ms]  >>>  URB 12 going down  >>> ")
            .unwrap()
            .unwrap();

        assert_eq!(
            marker,
            UrbMarker {
                direction: Direction::ToModem,
                urb: 12,
                timestamp_ms: Some(197),
            }
        );
    }

    #[test]
    fn marker_without_timestamp() {
        let marker = parse_marker("<<<  URB 3 coming back  <<<").unwrap().unwrap();
        assert_eq!(marker.direction, Direction::ToHost);
        assert_eq!(marker.urb, 3);
        assert_eq!(marker.timestamp_ms, None);
    }

    #[test]
    fn unterminated_timestamp_is_not_a_marker() {
        assert!(parse_marker("[197 >>>  URB 1").unwrap().is_none());
        assert!(parse_marker("  PipeHandle = 8638a6b4").unwrap().is_none());
    }

    #[test]
    fn marker_without_number_is_fatal() {
        let err = parse_marker("[5 ms]  >>>  URB going down").unwrap_err();
        assert!(matches!(err, TraceError::MissingUrbNumber { .. }));
    }

    #[test]
    fn functions() {
        assert_eq!(
            parse_function("-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:").unwrap(),
            Some(UrbFunction::BulkOrInterruptTransfer)
        );
        assert_eq!(
            parse_function("-- URB_FUNCTION_CLASS_INTERFACE:")
                .unwrap()
                .and_then(UrbFunction::kind)
                .map(|kind| kind.type_code()),
            Some('C')
        );
        assert!(parse_function("TransferFlags = 00000003").unwrap().is_none());
        assert!(matches!(
            parse_function("-- URB_FUNCTION_ISOCH_TRANSFER:"),
            Err(TraceError::UnknownFunction { name }) if name == "ISOCH_TRANSFER"
        ));
    }

    #[test]
    fn data_lines() {
        assert_eq!(
            data_hex("    00000000: 01 10 00 80").as_deref(),
            Some("01100080")
        );
        assert_eq!(data_hex("  UrbLink = 00000000"), None);
    }
}
