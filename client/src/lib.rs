//! # Tuio Client
//! Receives TUIO 1.1 and TUIO 2.0 frames as raw OSC buffers and keeps an
//! event-driven model of the tracked entities: cursors, objects and blobs
//! for TUIO 1.1; composite objects with token, pointer, bounds and symbol
//! components for TUIO 2.0.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use tuio_shared::{
        Clock, ManualClock, OscBundle, OscMessage, OscPacket, OscTime, OscType, Path, Point,
        SessionId, SystemClock, TimeValue, TuioState, ObjectState,
    };
}

mod client_config;
mod error;
mod sync;
mod tuio11;
mod tuio20;

pub use client_config::{ClientConfig, Tuio11Config, Tuio20Config};
pub use error::TuioClientError;
pub use tuio11::{
    blob::Tuio11Blob, client::Tuio11Client, container::Container, cursor::Tuio11Cursor,
    listener::Tuio11Listener, object::Tuio11Object,
};
pub use tuio20::{
    bounds::TuioBounds, client::Tuio20Client, component::Component, listener::Tuio20Listener,
    pointer::TuioPointer, symbol::TuioSymbol, token::TuioToken, tuio_object::TuioObject,
};
