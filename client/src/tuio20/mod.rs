pub mod bounds;
pub mod client;
pub mod component;
pub mod listener;
pub mod pointer;
pub mod symbol;
pub mod token;
pub mod tuio_object;

mod engine;
mod tuio_component;
