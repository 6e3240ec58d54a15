//! `stockroom-cli` — interactive console front end for the inventory store.
//!
//! The binary wires configuration and logging; everything that talks to the
//! operator lives in [`session`], generic over its input and output so it can be
//! driven from scripted input.

pub mod config;
pub mod console;
pub mod session;

pub use config::CliConfig;
pub use console::Console;
pub use session::Session;
