// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The upstream system a change event was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceConnector {
	Mysql,
	Oracle,
	Postgres,
	SqlServer,
	MongoDb,
	Db2,
}

impl SourceConnector {
	pub fn name(&self) -> &'static str {
		match self {
			SourceConnector::Mysql => "mysql",
			SourceConnector::Oracle => "oracle",
			SourceConnector::Postgres => "postgres",
			SourceConnector::SqlServer => "sqlserver",
			SourceConnector::MongoDb => "mongodb",
			SourceConnector::Db2 => "db2",
		}
	}
}

impl fmt::Display for SourceConnector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for SourceConnector {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"mysql" => Ok(SourceConnector::Mysql),
			"oracle" => Ok(SourceConnector::Oracle),
			"postgres" | "postgresql" => Ok(SourceConnector::Postgres),
			"sqlserver" => Ok(SourceConnector::SqlServer),
			"mongodb" => Ok(SourceConnector::MongoDb),
			"db2" => Ok(SourceConnector::Db2),
			_ => Err(TypeError::UnknownConnector(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_str_is_case_insensitive() {
		assert_eq!("MySQL".parse::<SourceConnector>().unwrap(), SourceConnector::Mysql);
		assert_eq!("postgresql".parse::<SourceConnector>().unwrap(), SourceConnector::Postgres);
		assert_eq!(" sqlserver ".parse::<SourceConnector>().unwrap(), SourceConnector::SqlServer);
	}

	#[test]
	fn test_from_str_unknown() {
		assert_eq!("sybase".parse::<SourceConnector>(), Err(TypeError::UnknownConnector("sybase".into())));
	}

	#[test]
	fn test_display_round_trips_through_from_str() {
		for connector in [
			SourceConnector::Mysql,
			SourceConnector::Oracle,
			SourceConnector::Postgres,
			SourceConnector::SqlServer,
			SourceConnector::MongoDb,
			SourceConnector::Db2,
		] {
			assert_eq!(connector.to_string().parse::<SourceConnector>().unwrap(), connector);
		}
	}

	#[test]
	fn test_serde_lowercase() {
		assert_eq!(serde_json::to_string(&SourceConnector::SqlServer).unwrap(), "\"sqlserver\"");
		let connector: SourceConnector = serde_json::from_str("\"oracle\"").unwrap();
		assert_eq!(connector, SourceConnector::Oracle);
	}
}
