// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracingError {
	#[error("invalid filter directives '{directives}': {message}")]
	InvalidFilter {
		directives: String,
		message: String,
	},

	#[error("failed to install tracing subscriber: {0}")]
	Install(String),
}
