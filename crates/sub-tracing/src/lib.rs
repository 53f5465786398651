// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Installs the process wide `tracing` subscriber.
//!
//! Call [`TracingBuilder::init`] once at process start. Events are written
//! synchronously, there is nothing to flush on shutdown.

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{ConsoleFormat, TracingBuilder};
pub use config::TracingConfig;
pub use error::TracingError;
