// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the tracing subscriber

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{
	EnvFilter,
	fmt::{TestWriter, writer::BoxMakeWriter},
};

use crate::error::TracingError;

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

/// Builder for configuring the tracing subscriber
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: String,
	format: ConsoleFormat,
	ansi: bool,
	target: bool,
	test_writer: bool,
}

impl TracingBuilder {
	/// Create a new tracing builder with default settings
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			format: ConsoleFormat::default(),
			ansi: true,
			target: true,
			test_writer: false,
		}
	}

	/// Set the filter directives, e.g. `info,schemaflow_ddl=debug`
	pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
		self.filter = directives.into();
		self
	}

	/// Set a single maximum level for every target
	pub fn with_level(self, level: Level) -> Self {
		self.with_filter(level.as_str().to_ascii_lowercase())
	}

	pub fn with_format(mut self, format: ConsoleFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	/// Write through the libtest capture instead of stderr
	pub fn with_test_writer(mut self) -> Self {
		self.test_writer = true;
		self
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn format(&self) -> ConsoleFormat {
		self.format
	}

	/// The configured filter. `RUST_LOG` takes precedence when it is set and valid.
	pub fn env_filter(&self) -> Result<EnvFilter, TracingError> {
		let configured = EnvFilter::try_new(&self.filter).map_err(|err| TracingError::InvalidFilter {
			directives: self.filter.clone(),
			message: err.to_string(),
		})?;
		Ok(EnvFilter::try_from_default_env().unwrap_or(configured))
	}

	/// Install the subscriber as the global default
	pub fn try_init(self) -> Result<(), TracingError> {
		let filter = self.env_filter()?;
		let writer = if self.test_writer {
			BoxMakeWriter::new(TestWriter::new())
		} else {
			BoxMakeWriter::new(std::io::stderr)
		};

		let builder = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_ansi(self.ansi)
			.with_target(self.target)
			.with_writer(writer);

		let result = match self.format {
			ConsoleFormat::Pretty => builder.pretty().try_init(),
			ConsoleFormat::Compact => builder.compact().try_init(),
			ConsoleFormat::Json => builder.json().try_init(),
		};
		result.map_err(|err| TracingError::Install(err.to_string()))
	}

	/// Install the subscriber, reporting a failure on stderr
	pub fn init(self) {
		if let Err(err) = self.try_init() {
			eprintln!("{err}");
		}
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
