/// Property-based tests for the OSC packet codec

use proptest::prelude::*;

use tuio_shared::{OscBundle, OscMessage, OscPacket, OscTime, OscType};

fn address() -> impl Strategy<Value = String> {
    "/[a-z]{1,8}(/[a-z0-9]{1,8}){0,3}"
}

fn argument() -> impl Strategy<Value = OscType> {
    prop_oneof![
        any::<i32>().prop_map(OscType::Int),
        (-1.0e6f32..1.0e6).prop_map(OscType::Float),
        (-1.0e12f64..1.0e12).prop_map(OscType::Double),
        any::<i64>().prop_map(OscType::Long),
        "[a-zA-Z0-9 @./]{0,24}".prop_map(OscType::String),
        any::<bool>().prop_map(OscType::from),
    ]
}

fn message() -> impl Strategy<Value = OscMessage> {
    (address(), prop::collection::vec(argument(), 0..12))
        .prop_map(|(address, args)| OscMessage::new(address, args))
}

/// Nests `messages` `depth` bundles deep
fn nest(messages: Vec<OscMessage>, depth: usize) -> OscBundle {
    let mut bundle = OscBundle::new(
        OscTime::new(3_900_000_000, 7),
        messages.into_iter().map(OscPacket::from).collect(),
    );
    for _ in 1..depth {
        bundle = OscBundle::new(OscTime::IMMEDIATELY, vec![OscPacket::Bundle(bundle)]);
    }
    bundle
}

proptest! {
    #[test]
    fn prop_message_round_trip(message in message()) {
        let bytes = message.pack();
        prop_assert_eq!(bytes.len() % 4, 0);
        let decoded = OscPacket::try_unpack(&bytes).unwrap();
        prop_assert_eq!(decoded, OscPacket::Message(message));
    }

    /// Messages inside nested bundles come back flattened in wire order
    #[test]
    fn prop_nested_bundle_flattens(
        messages in prop::collection::vec(message(), 1..6),
        depth in 2usize..6,
    ) {
        let bytes = nest(messages.clone(), depth).pack();
        prop_assert_eq!(bytes.len() % 4, 0);
        let decoded = OscPacket::try_unpack(&bytes).unwrap();
        prop_assert_eq!(decoded.into_messages(), messages);
    }

    /// A bundle cut anywhere past its header is rejected rather than misread
    #[test]
    fn prop_truncated_packet_is_rejected(message in message(), cut in 1usize..64) {
        let bytes = nest(vec![message], 2).pack();
        // 16 bytes alone are a valid empty bundle
        let keep = bytes.len().saturating_sub(cut).max(17);
        prop_assert!(OscPacket::try_unpack(&bytes[..keep]).is_err());
    }
}
