/// Buffer intake for both clients: auto-process versus manual draining,
/// nested bundles, and undecodable input

use tuio_client::{ClientConfig, TuioClientError};
use tuio_server::{ServerConfig, Tuio11Server, Tuio20Server};
use tuio_shared::{
    CursorSet, MessageQueueError, OscBundle, OscPacket, OscTime, Tuio11Command,
    TokenRecord, TuioRecord, TUIO11_CURSOR_ADDRESS,
};
use tuio_test::{start_time, tuio11_client, tuio20_client};

fn manual() -> ClientConfig {
    ClientConfig {
        auto_process: false,
        ..ClientConfig::default()
    }
}

#[test]
fn manual_mode_waits_for_process_messages() {
    let (client, _clock, log) = tuio11_client(manual());
    let mut server = Tuio11Server::new(ServerConfig::default());

    server.add_cursor(0.5, 0.5);
    let frame = server.commit_frame();

    assert_eq!(client.try_on_buffer(&frame).unwrap(), 3);
    assert!(client.get_tuio_cursors().is_empty());
    assert!(log.is_empty());

    assert_eq!(client.process_messages(), 3);
    assert_eq!(client.get_tuio_cursors().len(), 1);
    assert!(!log.is_empty());
    assert_eq!(client.process_messages(), 0);
}

#[test]
fn manual_mode_applies_queued_frames_in_order() {
    let (client, _clock, _log) = tuio20_client(manual());
    let mut server = Tuio20Server::new(ServerConfig::default());

    let first = server.add_object();
    server.set_token(first, TokenRecord::default()).unwrap();
    client.on_buffer(&server.commit_frame(start_time()));
    server.remove_object(first).unwrap();
    let second = server.add_object();
    client.on_buffer(&server.commit_frame(start_time().add_millis(10)));

    client.process_messages();

    assert!(client.get_tuio_object(first).is_none());
    assert!(client.get_tuio_object(second).is_some());
    assert_eq!(client.frame().0, 2);
}

#[test]
fn nested_bundles_are_flattened() {
    let (client, _clock, _log) = tuio11_client(ClientConfig::default());

    let cursor = CursorSet {
        session_id: 4,
        x: 0.5,
        y: 0.5,
        ..CursorSet::default()
    };
    let inner = OscBundle::new(
        OscTime::IMMEDIATELY,
        vec![
            cursor.to_message().into(),
            Tuio11Command::Alive(vec![4])
                .to_message(TUIO11_CURSOR_ADDRESS)
                .into(),
        ],
    );
    let middle = OscBundle::new(OscTime::IMMEDIATELY, vec![OscPacket::Bundle(inner)]);
    let outer = OscBundle::new(
        OscTime::IMMEDIATELY,
        vec![
            OscPacket::Bundle(middle),
            Tuio11Command::Fseq(1)
                .to_message(TUIO11_CURSOR_ADDRESS)
                .into(),
        ],
    );

    assert_eq!(client.try_on_buffer(&outer.pack()).unwrap(), 3);
    assert!(client.get_cursor(4).is_some());
}

#[test]
fn undecodable_buffer_is_reported_and_dropped() {
    let (client, _clock, log) = tuio11_client(manual());

    let result = client.try_on_buffer(&[0x2f, 0x74, 0x75]);

    assert!(matches!(
        result,
        Err(TuioClientError::MessageQueue(
            MessageQueueError::UndecodableBuffer { len: 3, .. }
        ))
    ));
    assert_eq!(client.process_messages(), 0);
    assert!(log.is_empty());
}

#[test]
fn truncated_bundle_is_dropped_whole() {
    let (client, _clock, _log) = tuio20_client(ClientConfig::default());
    let mut server = Tuio20Server::new(ServerConfig::default());

    server.add_object();
    let frame = server.commit_frame(start_time());
    client.on_buffer(&frame[..frame.len() - 4]);

    assert!(client.get_tuio_objects().is_empty());
    assert_eq!(client.frame().0, 0);
}
