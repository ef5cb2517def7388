/// End-to-end tests: frames packed by a TUIO 2.0 server, fed to a TUIO 2.0
/// client, must reproduce the server's objects and their components

use tuio_client::ClientConfig;
use tuio_server::{ServerConfig, Tuio20Server};
use tuio_shared::{BoundsRecord, ObjectState, PointerRecord, SymbolRecord, TokenRecord};
use tuio_test::{assert_added_tuio20, start_time, tuio20_client, Tuio20Event};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn server() -> Tuio20Server {
    Tuio20Server::new(ServerConfig {
        source_name: Some("tracker".to_owned()),
        dimension: (1920, 1080),
        ..ServerConfig::default()
    })
}

#[test]
fn client_mirrors_server_objects() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());
    let mut server = server();

    let token = server.add_object();
    server
        .set_token(
            token,
            TokenRecord {
                type_user_id: 0x0003_0001,
                component_id: 5,
                x: 0.2,
                y: 0.3,
                angle: 0.5,
                ..TokenRecord::default()
            },
        )
        .unwrap();
    let finger = server.add_object();
    server
        .set_pointer(
            finger,
            PointerRecord {
                x: 0.6,
                y: 0.4,
                radius: 0.01,
                pressure: 0.8,
                ..PointerRecord::default()
            },
        )
        .unwrap();
    let marker = server.add_object();
    server
        .set_bounds(
            marker,
            BoundsRecord {
                x: 0.5,
                y: 0.5,
                width: 0.1,
                height: 0.2,
                area: 0.02,
                ..BoundsRecord::default()
            },
        )
        .unwrap();
    server
        .set_symbol(
            marker,
            SymbolRecord {
                group: "qr".to_owned(),
                data: "https://example.org".to_owned(),
                ..SymbolRecord::default()
            },
        )
        .unwrap();

    client.on_buffer(&server.commit_frame(start_time()));

    let objects = client.get_tuio_objects();
    assert_eq!(objects.len(), 3);
    assert!(objects
        .iter()
        .all(|object| object.state() == ObjectState::Added));

    let received = client.get_tuio_object(token).unwrap();
    let received_token = received.token().unwrap();
    assert_eq!(received_token.type_user_id(), 0x0003_0001);
    assert_eq!(received_token.component_id(), 5);
    assert!(close(received_token.x(), 0.2));
    assert!(close(received_token.angle(), 0.5));
    assert!(!received.has_pointer());

    let received = client.get_tuio_object(finger).unwrap();
    let pointer = received.pointer().unwrap();
    assert!(close(pointer.radius(), 0.01));
    assert!(close(pointer.pressure(), 0.8));

    let received = client.get_tuio_object(marker).unwrap();
    assert!(close(received.bounds().unwrap().height(), 0.2));
    assert_eq!(received.symbol().unwrap().group(), "qr");
    assert_eq!(received.symbol().unwrap().data(), "https://example.org");

    assert_eq!(client.get_tuio_tokens().len(), 1);
    assert_eq!(client.get_tuio_pointers().len(), 1);
    assert_eq!(client.get_tuio_bounds().len(), 1);
    assert_eq!(client.get_tuio_symbols().len(), 1);
    assert_eq!(client.source().as_deref(), Some("tracker"));
    assert_eq!(client.dimension(), (1920, 1080));
    assert_eq!(client.frame().0, 1);

    let events = log.take();
    assert_added_tuio20!(events, [token, finger, marker]);
    assert!(matches!(events.last(), Some(Tuio20Event::Refresh(_))));
}

#[test]
fn update_and_remove_follow_add() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());
    let mut server = server();

    let moving = server.add_object();
    server
        .set_token(moving, TokenRecord { x: 0.1, ..TokenRecord::default() })
        .unwrap();
    let leaving = server.add_object();
    server
        .set_token(leaving, TokenRecord::default())
        .unwrap();
    client.on_buffer(&server.commit_frame(start_time()));
    log.take();

    server
        .set_token(moving, TokenRecord { x: 0.2, ..TokenRecord::default() })
        .unwrap();
    server.remove_object(leaving).unwrap();
    let arriving = server.add_object();
    server
        .set_pointer(arriving, PointerRecord::default())
        .unwrap();
    let time = start_time().add_millis(100);
    client.on_buffer(&server.commit_frame(time));

    let events = log.take();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], Tuio20Event::Add(arriving));
    assert_eq!(events[1], Tuio20Event::Update(moving));
    assert_eq!(events[2], Tuio20Event::Remove(leaving));
    assert!(matches!(events[3], Tuio20Event::Refresh(_)));

    let token = client.get_tuio_object(moving).unwrap();
    assert_eq!(token.state(), ObjectState::Idle);
    assert!(close(token.token().unwrap().x_velocity(), 1.0));
    assert!(client.get_tuio_object(leaving).is_none());
}

#[test]
fn object_without_components_is_still_tracked() {
    let (client, _clock, log) = tuio20_client(ClientConfig::default());
    let mut server = server();

    let bare = server.add_object();
    client.on_buffer(&server.commit_frame(start_time()));

    let object = client.get_tuio_object(bare).unwrap();
    assert!(!object.has_token());
    assert!(!object.has_pointer());
    assert_added_tuio20!(log.take(), [bare]);
}
