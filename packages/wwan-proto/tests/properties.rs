use proptest::prelude::*;
use wwan_proto::{
    DecodeErrorKind, Encode,
    hdlc::{escape, unescape},
    qmi::{Tlv, decode_tlvs},
};

fn tlv() -> impl Strategy<Value = Tlv> {
    (any::<u8>(), proptest::collection::vec(any::<u8>(), 0..64))
        .prop_map(|(id, value)| Tlv::new(id, value).unwrap())
}

proptest! {
    #[test]
    fn tlv_stream_round_trips(tlvs in proptest::collection::vec(tlv(), 0..8)) {
        let mut wire = Vec::new();
        for tlv in &tlvs {
            wire.extend(tlv.to_vec());
        }

        let mut data = &wire[..];
        let decoded = decode_tlvs(&mut data).unwrap();
        prop_assert_eq!(decoded, tlvs);
        prop_assert!(data.is_empty());
    }

    #[test]
    fn unescape_is_identity_without_escape_byte(
        data in proptest::collection::vec(any::<u8>().prop_filter("no escape", |b| *b != 0x7D), 0..128)
    ) {
        let once = unescape(&data).unwrap();
        prop_assert_eq!(&once, &data);
        prop_assert_eq!(unescape(&once).unwrap(), once);
    }

    #[test]
    fn escape_then_unescape_restores(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(unescape(&escape(&data)).unwrap(), data);
    }

    #[test]
    fn overlong_tlv_is_rejected(id in any::<u8>(), extra in 1u16..16, value in proptest::collection::vec(any::<u8>(), 0..16)) {
        let declared = value.len() as u16 + extra;
        let mut wire = vec![id];
        wire.extend(declared.to_le_bytes());
        wire.extend(&value);

        let err = decode_tlvs(&mut &wire[..]).unwrap_err();
        prop_assert_eq!(
            err.kind(),
            DecodeErrorKind::MalformedTlv { id, declared, remaining: value.len() }
        );
    }
}

#[test]
fn five_byte_value_with_three_remaining() {
    let err = decode_tlvs(&mut &[0x01, 0x05, 0x00, 0xaa, 0xbb, 0xcc][..]).unwrap_err();
    assert_eq!(
        err.kind(),
        DecodeErrorKind::MalformedTlv {
            id: 0x01,
            declared: 5,
            remaining: 3,
        }
    );
}
