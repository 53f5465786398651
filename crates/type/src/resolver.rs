// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	SourceConnector, TypeError,
	mapping::{SourceType, mysql, oracle, postgres, sqlserver},
};

/// Maps a declared source column type to a destination type name.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait TypeResolver: Send + Sync {
	fn resolve(
		&self,
		connector: SourceConnector,
		type_name: &str,
		length: Option<u32>,
		scale: Option<u32>,
	) -> Result<String, TypeError>;
}

impl<F> TypeResolver for F
where
	F: Fn(SourceConnector, &str, Option<u32>, Option<u32>) -> Result<String, TypeError> + Send + Sync,
{
	fn resolve(
		&self,
		connector: SourceConnector,
		type_name: &str,
		length: Option<u32>,
		scale: Option<u32>,
	) -> Result<String, TypeError> {
		self(connector, type_name, length, scale)
	}
}

/// The Doris type mapping policy for every relational source connector.
#[derive(Debug, Default, Clone, Copy)]
pub struct DorisTypeResolver;

impl TypeResolver for DorisTypeResolver {
	fn resolve(
		&self,
		connector: SourceConnector,
		type_name: &str,
		length: Option<u32>,
		scale: Option<u32>,
	) -> Result<String, TypeError> {
		let ty = SourceType::new(type_name, length, scale);
		match connector {
			SourceConnector::Mysql => mysql::to_doris(&ty),
			SourceConnector::Oracle => oracle::to_doris(&ty),
			SourceConnector::Postgres => postgres::to_doris(&ty),
			SourceConnector::SqlServer => sqlserver::to_doris(&ty),
			SourceConnector::MongoDb | SourceConnector::Db2 => Err(TypeError::UnsupportedConnector(connector)),
		}
	}
}
