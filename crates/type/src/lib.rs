// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod connector;
pub mod doris;
pub mod error;
mod mapping;
pub mod resolver;

pub use connector::SourceConnector;
pub use error::TypeError;
pub use resolver::{DorisTypeResolver, TypeResolver};
