/// Name of a QMI protocol error code, as carried in the result TLV.
pub fn error_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0 => "NONE",
        1 => "MALFORMED_MESSAGE",
        2 => "NO_MEMORY",
        3 => "INTERNAL",
        4 => "ABORTED",
        5 => "CLIENT_IDS_EXHAUSTED",
        6 => "UNABORTABLE_TRANSACTION",
        7 => "INVALID_CLIENT_ID",
        8 => "NO_THRESHOLDS_PROVIDED",
        9 => "INVALID_HANDLE",
        10 => "INVALID_PROFILE",
        11 => "INVALID_PIN_ID",
        12 => "INCORRECT_PIN",
        13 => "NO_NETWORK_FOUND",
        14 => "CALL_FAILED",
        15 => "OUT_OF_CALL",
        16 => "NOT_PROVISIONED",
        17 => "MISSING_ARGUMENT",
        19 => "ARGUMENT_TOO_LONG",
        22 => "INVALID_TRANSACTION_ID",
        23 => "DEVICE_IN_USE",
        24 => "NETWORK_UNSUPPORTED",
        25 => "DEVICE_UNSUPPORTED",
        26 => "NO_EFFECT",
        27 => "NO_FREE_PROFILE",
        28 => "INVALID_PDP_TYPE",
        29 => "INVALID_TECHNOLOGY_PREFERENCE",
        30 => "INVALID_PROFILE_TYPE",
        31 => "INVALID_SERVICE_TYPE",
        32 => "INVALID_REGISTER_ACTION",
        33 => "INVALID_PS_ATTACH_ACTION",
        34 => "AUTHENTICATION_FAILED",
        35 => "PIN_BLOCKED",
        36 => "PIN_ALWAYS_BLOCKED",
        37 => "UIM_UNINITIALIZED",
        38 => "MAXIMUM_QOS_REQUESTS_IN_USE",
        39 => "INCORRECT_FLOW_FILTER",
        40 => "NETWORK_QOS_UNAWARE",
        41 => "INVALID_QOS_ID",
        42 => "REQUESTED_NUMBER_UNSUPPORTED",
        43 => "INTERFACE_NOT_FOUND",
        44 => "FLOW_SUSPENDED",
        45 => "INVALID_DATA_FORMAT",
        46 => "GENERAL_ERROR",
        47 => "UNKNOWN_ERROR",
        48 => "INVALID_ARGUMENT",
        49 => "INVALID_INDEX",
        50 => "NO_ENTRY",
        51 => "DEVICE_STORAGE_FULL",
        52 => "DEVICE_NOT_READY",
        53 => "NETWORK_NOT_READY",
        54 => "WMS_CAUSE_CODE",
        55 => "WMS_MESSAGE_NOT_SENT",
        56 => "WMS_MESSAGE_DELIVERY_FAILURE",
        57 => "WMS_INVALID_MESSAGE_ID",
        58 => "WMS_ENCODING",
        59 => "AUTHENTICATION_LOCK",
        60 => "INVALID_TRANSITION",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::error_name;

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(error_name(0), Some("NONE"));
        assert_eq!(error_name(17), Some("MISSING_ARGUMENT"));
        assert_eq!(error_name(18), None);
        assert_eq!(error_name(0xffff), None);
    }
}
