/// Frame acceptance, component diffing and listener delivery for
/// hand-built TUIO 2.0 bundles

use std::sync::{Arc, Mutex};

use tuio_client::{ClientConfig, Tuio20Listener, TuioObject};
use tuio_shared::{PointerRecord, SessionId, TimeValue, TokenRecord};
use tuio_test::{start_time, tuio20_client, Tuio20Event, Tuio20FrameBuilder};

fn token(session_id: SessionId, x: f32) -> TokenRecord {
    TokenRecord {
        session_id,
        x,
        y: 0.5,
        ..TokenRecord::default()
    }
}

fn tokens(frame_id: u32, time: TimeValue, alive: &[SessionId]) -> Vec<u8> {
    alive
        .iter()
        .fold(Tuio20FrameBuilder::new(frame_id, time), |frame, id| {
            frame.component(token(*id, 0.5))
        })
        .alive(alive)
}

#[test]
fn older_frame_is_ignored() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());

    client.on_buffer(&tokens(10, start_time(), &[1]));
    log.take();

    client.on_buffer(&tokens(5, start_time().add_millis(10), &[1, 2]));

    assert!(log.is_empty());
    assert_eq!(client.get_tuio_objects().len(), 1);
    assert_eq!(client.frame().0, 10);
}

#[test]
fn restarted_source_is_accepted_after_timeout() {
    let (client, _clock, _log) = tuio20_client(ClientConfig::default());

    client.on_buffer(&tokens(10, start_time(), &[1]));
    client.on_buffer(&tokens(5, start_time().add_millis(10), &[2]));
    client.on_buffer(&tokens(6, start_time().add_millis(20), &[2]));
    assert!(client.get_tuio_object(2).is_none());

    client.on_buffer(&tokens(7, start_time().add_millis(1500), &[2]));
    assert!(client.get_tuio_object(1).is_none());
    assert!(client.get_tuio_object(2).is_some());
    assert_eq!(client.frame().0, 7);
}

#[test]
fn new_component_counts_as_add() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());

    client.on_buffer(&tokens(1, start_time(), &[1]));
    log.take();

    let frame = Tuio20FrameBuilder::new(2, start_time().add_millis(50))
        .component(token(1, 0.5))
        .component(PointerRecord {
            session_id: 1,
            x: 0.5,
            y: 0.5,
            ..PointerRecord::default()
        })
        .alive(&[1]);
    client.on_buffer(&frame);

    let events = log.take();
    assert_eq!(events[0], Tuio20Event::Add(1));
    assert_eq!(events.len(), 2);
    assert!(client.get_tuio_object(1).unwrap().has_pointer());
}

#[test]
fn unchanged_frame_only_refreshes() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());

    client.on_buffer(&tokens(1, start_time(), &[1, 2]));
    log.take();
    client.on_buffer(&tokens(2, start_time().add_millis(20), &[1, 2]));

    let events = log.take();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Tuio20Event::Refresh(_)));
}

#[test]
fn records_outside_alive_are_discarded() {
    let (client, _clock, _log) = tuio20_client(ClientConfig::default());

    let frame = Tuio20FrameBuilder::new(1, start_time())
        .component(token(1, 0.5))
        .component(token(9, 0.5))
        .alive(&[1]);
    client.on_buffer(&frame);

    assert!(client.get_tuio_object(9).is_none());
    assert_eq!(client.get_tuio_tokens().len(), 1);
}

struct Tagged {
    tag: &'static str,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl Tuio20Listener for Tagged {
    fn tuio_add(&mut self, _object: &TuioObject) {
        self.calls.lock().unwrap().push(self.tag);
    }
}

#[test]
fn listeners_run_in_registration_order() {
    let (client, _clock, _log) = tuio20_client(ClientConfig::default());
    let calls = Arc::new(Mutex::new(Vec::new()));
    client.add_listener(Tagged {
        tag: "first",
        calls: calls.clone(),
    });
    client.add_listener(Tagged {
        tag: "second",
        calls: calls.clone(),
    });

    client.on_buffer(&tokens(1, start_time(), &[1, 2]));

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["first", "second", "first", "second"]
    );
}

#[test]
fn removed_listeners_hear_nothing() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());
    client.remove_all_listeners();

    client.on_buffer(&tokens(1, start_time(), &[1]));

    assert!(log.is_empty());
    assert_eq!(client.get_tuio_objects().len(), 1);
}
