pub mod blob;
pub mod client;
pub mod container;
pub mod cursor;
pub mod listener;
pub mod object;

mod entity;
mod profile;
