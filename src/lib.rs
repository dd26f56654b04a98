//! Core library for the `subcast` overlay.
//!
//! Subtitle fragments arrive as UDP datagrams, are de-duplicated by id in a
//! bounded buffer, merged into a line-limited display window, and handed to a
//! [`surface::DisplaySurface`] together with the spans that changed since the
//! previous window. The `subcast` binary wires these pieces to a terminal
//! overlay; library APIs may evolve as the binary grows.
pub mod args;
pub mod buffer;
pub mod config;
pub mod error;
pub mod fade;
pub mod fragment;
pub mod ingest;
pub mod layout;
pub mod merge;
pub mod sender;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod surface;
pub mod ui;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
