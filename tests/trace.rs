use log::LevelFilter;
use simplelog::{Config, TestLogger};
use wwan_trace::{DecoderConfig, TraceDecoder, TraceError, decoder::RunSummary, render::hex_rows};

const QMUX_CAPTURE: &[&str] = &[
    "[0 ms]  >>>  URB 1 going down  >>>",
    "-- URB_FUNCTION_SELECT_CONFIGURATION:",
    "  ConfigurationDescriptor = 0x8637ab50 (configure)",
    "[197 ms]  >>>  URB 2 going down  >>>",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  PipeHandle           = 8638a6b4 [endpoint 0x00000002]",
    "  TransferFlags        = 00000002 (TRANSFER_DIRECTION_OUT, SHORT_TRANSFER_OK)",
    "  TransferBufferLength = 00000010",
    "  TransferBufferMDL    = 86344d70",
    "    00000000: 01 0f 00 00 00 00 00 05 22 00 04 00 01 01 00 03",
    "  UrbLink              = 00000000",
    "",
    "[201 ms]  <<<  URB 3 coming back  <<<",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  PipeHandle           = 8638a694 [endpoint 0x00000081]",
    "  TransferBufferMDL    = 86344d70",
    "    00000000: 01 17 00 80 00 00 01 05 22 00 0c 00 02 04 00 00",
    "    00000010: 00 00 00 01 02 00 01 07",
    "  UrbLink              = 00000000",
];

const WMC_CAPTURE: &[&str] = &[
    "[10 ms]  <<<  URB 40 coming back  <<<",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  TransferBufferMDL    = 86344d70",
    "    00000000: c8 03 01 02",
    "  UrbLink              = 00000000",
    "[11 ms]  <<<  URB 41 coming back  <<<",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  TransferBufferMDL    = 86344d70",
    "    00000000: 03 04 30 30 7e",
    "  UrbLink              = 00000000",
];

/// A WMC response whose second half arrives after an unrelated host-to-modem URB.
const WMC_INTERLEAVED_CAPTURE: &[&str] = &[
    "[10 ms]  <<<  URB 20 coming back  <<<",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  TransferBufferMDL    = 86344d70",
    "    00000000: c8 03 01 02",
    "  UrbLink              = 00000000",
    "[11 ms]  >>>  URB 21 going down  >>>",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  PipeHandle           = 8638a694 [endpoint 0x00000081]",
    "  TransferBufferMDL    = 00000000",
    "  UrbLink              = 00000000",
    "[12 ms]  <<<  URB 21 coming back  <<<",
    "-- URB_FUNCTION_BULK_OR_INTERRUPT_TRANSFER:",
    "  TransferBufferMDL    = 86344d70",
    "    00000000: 03 04 30 30 7e",
    "  UrbLink              = 00000000",
];

fn run(config: DecoderConfig, lines: &[&str]) -> Result<(RunSummary, String), TraceError> {
    // Only the first call installs the logger; later ones are no-ops.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());

    let capture = lines.join("\n");
    let mut out = Vec::new();
    let summary = TraceDecoder::new(config).run(capture.as_bytes(), &mut out)?;
    Ok((summary, String::from_utf8(out).unwrap()))
}

#[test]
fn qmux_request_and_response() {
    let config = DecoderConfig {
        show_raw: false,
        ..DecoderConfig::default()
    };
    let (summary, text) = run(config, QMUX_CAPTURE).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            packets: 3,
            rendered: 2,
        }
    );

    let expected = "        QMUX Header:
          len: 0x000f
          sender: 0x00 (client)
          svc: 0x00 (ctl)
          cid: 0x00
        QMI Header:
          Flags: 0x00 (request)
          TXN: 0x0005
          Cmd: 0x0022 (GET_CLIENT_ID)
          Size: 0x0004
        TLV 0x01 (CTL/Get Client ID Request/Type):
          Size: 0x0001
          Data: 03

        QMUX Header:
          len: 0x0017
          sender: 0x80 (service)
          svc: 0x00 (ctl)
          cid: 0x00
        QMI Header:
          Flags: 0x01 (response)
          TXN: 0x0005
          Cmd: 0x0022 (GET_CLIENT_ID)
          Size: 0x000c
        TLV 0x02 (CTL/Get Client ID Response/Result Code):
          Size: 0x0004
          Status: SUCCESS (0)
          Error: 0 (NONE)
        TLV 0x01 (CTL/Get Client ID Response/ID):
          Size: 0x0002
          Data: 01 07

";
    assert_eq!(text, expected);
}

#[test]
fn raw_rows_precede_sections() {
    let (_, text) = run(DecoderConfig::default(), QMUX_CAPTURE).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    let request = [
        0x01, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05, 0x22, 0x00, 0x04, 0x00, 0x01, 0x01, 0x00,
        0x03,
    ];
    assert_eq!(lines[0], hex_rows("T>", &request)[0]);
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "        QMUX Header:");

    let response_start = lines
        .iter()
        .position(|line| line.starts_with("T<"))
        .unwrap();
    assert!(lines[response_start].starts_with("T< 01 17 00 80 00 00 01 05"));
    assert!(lines[response_start + 1].starts_with("   00 00 00 01 02 00 01 07"));
    assert_eq!(lines[response_start + 2], "");
}

#[test]
fn wmc_frame_split_across_transfers() {
    let config = DecoderConfig::from_ini_str("[decode]\r\ntransfer=wmc\r\n").unwrap();
    let (summary, text) = run(config, WMC_CAPTURE).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            packets: 1,
            rendered: 1,
        }
    );

    let frame = [0xc8, 0x03, 0x01, 0x02, 0x03, 0x04, 0x30, 0x30, 0x7e];
    let expected = format!(
        "{}

        WMC Packet:
          Cmd: 0x03 (GET_GLOBAL_MODE)
          CRC: placeholder
          Mode: 0x2 (EVDO only)

",
        hex_rows("T<", &frame)[0]
    );
    assert_eq!(text, expected);
}

#[test]
fn wmc_frame_survives_interleaved_urb() {
    let config = DecoderConfig::from_ini_str("[decode]\r\ntransfer=wmc\r\n").unwrap();
    let (summary, text) = run(config, WMC_INTERLEAVED_CAPTURE).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            packets: 1,
            rendered: 1,
        }
    );

    let frame = [0xc8, 0x03, 0x01, 0x02, 0x03, 0x04, 0x30, 0x30, 0x7e];
    assert!(text.starts_with(&hex_rows("T<", &frame)[0]));
    assert!(text.contains("          Mode: 0x2 (EVDO only)\n"));
}

#[test]
fn unbound_transfers_are_silent() {
    let config = DecoderConfig {
        transfer: None,
        ..DecoderConfig::default()
    };
    let (summary, text) = run(config, QMUX_CAPTURE).unwrap();

    assert_eq!(summary.packets, 3);
    assert_eq!(summary.rendered, 0);
    assert!(text.is_empty());
}

#[test]
fn unknown_function_aborts_the_run() {
    let capture = [
        ">>>  URB 1 going down  >>>",
        "-- URB_FUNCTION_ISOCH_TRANSFER:",
    ];
    let err = run(DecoderConfig::default(), &capture).unwrap_err();

    assert!(matches!(err, TraceError::UnknownFunction { name } if name == "ISOCH_TRANSFER"));
}
