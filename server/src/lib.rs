//! # Tuio Server
//! The sending side of TUIO: the application adds, moves and removes
//! entities, and every `commit_frame` returns one packed OSC bundle ready
//! to hand to whatever transport carries it.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use tuio_shared::{
        BlobSet, BoundsRecord, CursorSet, ObjectSet, OscPacket, PointerRecord, SessionId,
        SymbolRecord, TimeValue, TokenRecord,
    };
}

mod error;
mod server_config;
mod tuio11_server;
mod tuio20_server;

pub use error::TuioServerError;
pub use server_config::ServerConfig;
pub use tuio11_server::Tuio11Server;
pub use tuio20_server::Tuio20Server;
