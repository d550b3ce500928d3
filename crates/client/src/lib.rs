//! Reference text front end for the dungeon crawler.
//!
//! The binary reads commands from standard input, feeds them to a
//! [`runtime::Session`] and prints the resulting events. Parsing and
//! formatting live in this library so they can be tested without a terminal.
pub mod config;
pub mod input;
pub mod view;

pub use config::ClientConfig;
pub use input::{Input, parse_input};
