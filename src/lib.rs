//! fsuipc-cmd: interactive command-line client for FSUIPC.
//!
//! This crate wraps a prebuilt native FSUIPC client library in a small
//! read-dispatch-print loop: connect, disconnect, status and version queries,
//! a frequency readout, and COM1/COM2 frequency setters. The native library
//! owns all protocol work; this crate owns locating and loading it, the
//! foreign-function call surface, and the operator-facing command loop.
//!
//! # Quick start
//!
//! ```no_run
//! use fsuipc_cmd::client::NativeClient;
//! use fsuipc_cmd::render::Renderer;
//! use fsuipc_cmd::repl::Session;
//!
//! # async fn example() -> std::io::Result<()> {
//! let path = fsuipc_cmd::library::locate().unwrap();
//! let client = NativeClient::load(&path).unwrap();
//! let mut session = Session::new(client, Renderer::new(true));
//! session.run().await
//! # }
//! ```

pub mod build_info;
pub mod client;
pub mod commands;
pub mod error;
pub mod library;
pub mod render;
pub mod repl;
#[cfg(test)]
pub mod testsupport;
pub mod types;
