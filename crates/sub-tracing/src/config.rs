// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::builder::{ConsoleFormat, TracingBuilder};

/// File based tracing settings, converted into a [`TracingBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
	pub filter: String,
	pub format: ConsoleFormat,
	pub ansi: bool,
	pub target: bool,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
			format: ConsoleFormat::default(),
			ansi: true,
			target: true,
		}
	}
}

impl From<TracingConfig> for TracingBuilder {
	fn from(config: TracingConfig) -> Self {
		TracingBuilder::new()
			.with_filter(config.filter)
			.with_format(config.format)
			.with_ansi(config.ansi)
			.with_target(config.target)
	}
}
