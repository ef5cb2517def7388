/// Frame acceptance and diffing for hand-built TUIO 1.1 bundles

use tuio_client::{ClientConfig, TuioClientError};
use tuio_shared::{
    CursorSet, OscMessage, ProtocolViolation, SessionId, TUIO11_CURSOR_ADDRESS,
};
use tuio_test::{assert_alive, tuio11_client, Tuio11Event, Tuio11FrameBuilder};

fn cursor(session_id: SessionId, x: f32, y: f32) -> CursorSet {
    CursorSet {
        session_id,
        x,
        y,
        ..CursorSet::default()
    }
}

fn cursors(alive: &[SessionId], frame_id: u32) -> Vec<u8> {
    alive
        .iter()
        .fold(Tuio11FrameBuilder::new(TUIO11_CURSOR_ADDRESS), |frame, id| {
            frame.set(cursor(*id, 0.5, 0.5))
        })
        .alive(alive)
        .fseq(frame_id)
}

#[test]
fn older_frame_within_gap_is_dropped() {
    let (client, _clock, log) = tuio11_client(ClientConfig::default());

    client.on_buffer(&cursors(&[1], 10));
    log.take();

    client.on_buffer(&cursors(&[1, 2], 5));

    assert!(log.is_empty());
    assert_alive!(client.get_tuio_cursors(), [1]);
    assert_eq!(client.cursor_frame().0, 10);
}

#[test]
fn frame_far_behind_is_taken_as_restart() {
    let (client, _clock, _log) = tuio11_client(ClientConfig::default());

    client.on_buffer(&cursors(&[1], 200));
    client.on_buffer(&cursors(&[7], 50));

    assert_alive!(client.get_tuio_cursors(), [7]);
    assert_eq!(client.cursor_frame().0, 50);
}

#[test]
fn alive_diff_removes_then_adds() {
    let (client, _clock, log) = tuio11_client(ClientConfig::default());

    client.on_buffer(&cursors(&[1, 2], 1));
    log.take();

    let frame = Tuio11FrameBuilder::new(TUIO11_CURSOR_ADDRESS)
        .set(cursor(3, 0.1, 0.1))
        .alive(&[2, 3])
        .fseq(2);
    client.on_buffer(&frame);

    let events = log.take();
    assert_eq!(
        events[0],
        Tuio11Event::RemoveCursor {
            session_id: 1,
            cursor_id: 0
        }
    );
    assert_eq!(
        events[1],
        Tuio11Event::AddCursor {
            session_id: 3,
            cursor_id: 0
        }
    );
    assert!(matches!(events[2], Tuio11Event::Refresh(_)));
    assert_eq!(events.len(), 3);
    assert_alive!(client.get_tuio_cursors(), [2, 3]);
}

#[test]
fn cursor_ids_fill_the_lowest_gap() {
    let (client, _clock, log) = tuio11_client(ClientConfig::default());

    client.on_buffer(&cursors(&[10, 11, 12, 13], 1));
    client.on_buffer(&cursors(&[10, 11, 13], 2));
    log.take();

    client.on_buffer(&cursors(&[10, 11, 13, 14], 3));

    assert_eq!(client.get_cursor(14).unwrap().cursor_id(), 2);
    assert_eq!(
        log.take()[0],
        Tuio11Event::AddCursor {
            session_id: 14,
            cursor_id: 2
        }
    );
}

#[test]
fn redundant_frame_waits_for_timeout() {
    let (client, clock, log) = tuio11_client(ClientConfig::default());

    client.on_buffer(&cursors(&[1], 5));
    log.take();

    clock.advance_millis(50);
    client.on_buffer(&cursors(&[1, 2], 0));
    assert!(log.is_empty());

    clock.advance_millis(100);
    client.on_buffer(&cursors(&[1, 2], 0));
    assert_alive!(client.get_tuio_cursors(), [1, 2]);
    assert_eq!(client.cursor_frame().0, 5);
}

#[test]
fn malformed_record_is_dropped_from_its_frame() {
    let (client, _clock, _log) = tuio11_client(ClientConfig::default());

    let truncated = OscMessage::new(
        TUIO11_CURSOR_ADDRESS,
        vec!["set".into(), 2i32.into(), 0.5f32.into()],
    );
    let frame = Tuio11FrameBuilder::new(TUIO11_CURSOR_ADDRESS)
        .set(cursor(1, 0.5, 0.5))
        .message(truncated)
        .alive(&[1, 2])
        .fseq(1);
    client.on_buffer(&frame);

    assert_alive!(client.get_tuio_cursors(), [1]);
}

#[test]
fn try_apply_reports_protocol_violation() {
    let (client, _clock, _log) = tuio11_client(ClientConfig::default());

    let wrong_type = OscMessage::new(
        TUIO11_CURSOR_ADDRESS,
        vec!["set".into(), 2i32.into(), "x".into(), 0.5f32.into()],
    );
    let result = client.try_apply(&wrong_type);

    assert!(matches!(
        result,
        Err(TuioClientError::Protocol(
            ProtocolViolation::WrongArgumentType { index: 2, .. }
        ))
    ));
}

#[test]
fn unknown_command_is_ignored() {
    let (client, _clock, _log) = tuio11_client(ClientConfig::default());

    let message = OscMessage::new(TUIO11_CURSOR_ADDRESS, vec!["calibrate".into()]);

    assert!(client.try_apply(&message).is_ok());
}
