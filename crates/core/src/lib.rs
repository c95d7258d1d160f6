#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod editor;
pub mod preview;
pub mod snippets;
pub mod strip;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
