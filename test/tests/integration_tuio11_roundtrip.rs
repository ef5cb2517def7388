/// End-to-end tests: frames packed by a TUIO 1.1 server, fed to a TUIO 1.1
/// client, must reproduce the server's entity set

use tuio_client::ClientConfig;
use tuio_server::{ServerConfig, Tuio11Server};
use tuio_shared::TuioState;
use tuio_test::{assert_alive, tuio11_client, Tuio11Event};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn client_mirrors_server_entities() {
    let (client, clock, log) = tuio11_client(ClientConfig::default());
    let mut server = Tuio11Server::new(ServerConfig::default());

    let cursor = server.add_cursor(0.25, 0.75);
    let object = server.add_object(42, 0.5, 0.5, 1.0);
    let blob = server.add_blob(0.1, 0.2, 0.3, 0.4, 0.5, 0.2);
    client.on_buffer(&server.commit_frame());

    assert_alive!(client.get_tuio_cursors(), [cursor]);
    assert_alive!(client.get_tuio_objects(), [object]);
    assert_alive!(client.get_tuio_blobs(), [blob]);

    let received = client.get_object(object).unwrap();
    assert_eq!(received.symbol_id(), 42);
    assert!(close(received.x(), 0.5));
    assert!(close(received.angle(), 1.0));

    let received = client.get_blob(blob).unwrap();
    assert!(close(received.width(), 0.4));
    assert!(close(received.height(), 0.5));
    assert!(close(received.area(), 0.2));

    let events = log.take();
    assert!(events.contains(&Tuio11Event::AddCursor {
        session_id: cursor,
        cursor_id: 0
    }));
    assert!(events.contains(&Tuio11Event::AddObject {
        session_id: object,
        symbol_id: 42
    }));
    assert!(events.contains(&Tuio11Event::AddBlob {
        session_id: blob,
        blob_id: 0
    }));

    clock.advance_millis(50);
    server.remove_object(object).unwrap();
    server.update_cursor(cursor, 0.3, 0.75).unwrap();
    client.on_buffer(&server.commit_frame());

    assert!(client.get_tuio_objects().is_empty());
    assert!(close(client.get_cursor(cursor).unwrap().x(), 0.3));
    assert_alive!(client.get_tuio_blobs(), [blob]);
    assert_eq!(client.cursor_frame().0, server.frame_id());
}

#[test]
fn frames_arrive_in_profile_order_with_refresh_per_profile() {
    let (client, _clock, log) = tuio11_client(ClientConfig::default());
    let mut server = Tuio11Server::new(ServerConfig::default());

    let cursor = server.add_cursor(0.5, 0.5);
    client.on_buffer(&server.commit_frame());

    let events = log.take();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        Tuio11Event::AddCursor {
            session_id: cursor,
            cursor_id: 0
        }
    );
    assert!(matches!(events[1], Tuio11Event::Refresh(_)));
}

#[test]
fn unchanged_entities_produce_no_update_events() {
    let (client, clock, log) = tuio11_client(ClientConfig::default());
    let mut server = Tuio11Server::new(ServerConfig {
        full_update: true,
        ..ServerConfig::default()
    });

    server.add_cursor(0.5, 0.5);
    client.on_buffer(&server.commit_frame());
    log.take();

    clock.advance_millis(20);
    client.on_buffer(&server.commit_frame());

    let events = log.take();
    assert!(events
        .iter()
        .all(|event| matches!(event, Tuio11Event::Refresh(_))));
}

#[test]
fn derived_velocity_from_moving_cursor() {
    let (client, clock, _log) = tuio11_client(ClientConfig::default());
    let mut server = Tuio11Server::new(ServerConfig::default());

    let cursor = server.add_cursor(0.5, 0.5);
    client.on_buffer(&server.commit_frame());

    clock.advance_millis(100);
    server.update_cursor(cursor, 0.6, 0.5).unwrap();
    client.on_buffer(&server.commit_frame());

    let received = client.get_cursor(cursor).unwrap();
    assert!(close(received.x_speed(), 1.0));
    assert!(close(received.y_speed(), 0.0));
    assert_eq!(received.state(), TuioState::Accelerating);
    assert_eq!(received.path().len(), 2);
}

#[test]
fn source_is_forwarded() {
    let (client, _clock, _log) = tuio11_client(ClientConfig::default());
    let mut server = Tuio11Server::new(ServerConfig {
        source_name: Some("table@10.0.0.2".to_owned()),
        ..ServerConfig::default()
    });

    server.add_cursor(0.5, 0.5);
    client.on_buffer(&server.commit_frame());

    assert_eq!(client.source().as_deref(), Some("table@10.0.0.2"));
}
