// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use schemaflow_sql::{AlterExpression, ColumnDefinition, SqlParser, Statement, StatementParser};
use schemaflow_type::{DorisTypeResolver, SourceConnector, TypeResolver};
use tracing::{debug, info, instrument, warn};

use crate::{
	Notice, Result,
	builder::{DdlBuilder, FieldSchema},
	classify::{ColumnAlteration, classify},
	config::TranslatorConfig,
	resolve::resolve_target_type,
	spec::{self, SpecValue},
};

/// The outcome of translating one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
	/// Doris DDL in source order.
	pub statements: Vec<String>,
	/// Skipped or degraded parts of the statement.
	pub notices: Vec<Notice>,
}

impl Translation {
	fn with_notice(notice: Notice) -> Self {
		Self {
			statements: Vec::new(),
			notices: vec![notice],
		}
	}
}

/// Translates source `ALTER TABLE` statements into Doris schema change DDL.
///
/// Doris only supports adding, dropping and renaming columns. `CHANGE` is
/// applied as a rename and everything else is skipped with a [`Notice`].
pub struct AlterTranslator {
	parser: Arc<dyn StatementParser>,
	resolver: Arc<dyn TypeResolver>,
	config: TranslatorConfig,
	ddl: DdlBuilder,
}

impl Default for AlterTranslator {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl AlterTranslator {
	pub fn new(
		parser: Arc<dyn StatementParser>,
		resolver: Arc<dyn TypeResolver>,
		config: TranslatorConfig,
	) -> Self {
		let ddl = DdlBuilder::new(config.quote_identifiers);
		Self {
			parser,
			resolver,
			config,
			ddl,
		}
	}

	pub fn builder() -> AlterTranslatorBuilder {
		AlterTranslatorBuilder::new()
	}

	pub fn config(&self) -> &TranslatorConfig {
		&self.config
	}

	/// Translate `ddl` into Doris statements against `target_table`.
	///
	/// Unparsable and non-ALTER statements yield an empty list.
	pub fn translate_alter(
		&self,
		connector: SourceConnector,
		ddl: &str,
		target_table: &str,
	) -> Result<Vec<String>> {
		self.translate(connector, ddl, target_table).map(|translation| translation.statements)
	}

	#[instrument(name = "ddl::translate", level = "trace", skip(self, ddl))]
	pub fn translate(&self, connector: SourceConnector, ddl: &str, target_table: &str) -> Result<Translation> {
		let statement = match self.parser.parse(ddl) {
			Ok(statement) => statement,
			Err(err) => {
				warn!(error = %err, ddl, "failed to parse DDL");
				return Ok(Translation::with_notice(Notice::SyntaxError {
					message: err.to_string(),
				}));
			}
		};

		let alter = match &statement {
			Statement::Alter(alter) => alter,
			Statement::Other {
				keyword,
			} => {
				warn!(ddl, "unsupported DDL statement");
				return Ok(Translation::with_notice(Notice::UnsupportedStatement {
					keyword: keyword.clone(),
				}));
			}
		};

		debug!(source_table = %alter.table, expressions = alter.expressions.len(), "translating ALTER TABLE");

		alter.expressions
			.iter()
			.try_fold(Translation::default(), |translation, expression| {
				self.translate_expression(connector, ddl, target_table, expression, translation)
			})
			.inspect_err(|err| warn!(error = %err, ddl, "failed to translate DDL"))
	}

	fn translate_expression(
		&self,
		connector: SourceConnector,
		ddl: &str,
		table: &str,
		expression: &AlterExpression,
		mut translation: Translation,
	) -> Result<Translation> {
		match classify(expression)? {
			ColumnAlteration::Add {
				definition,
				declarations,
			} => {
				if declarations != 1 {
					warn!(column = %definition.name, declarations, ddl, "ADD declares several columns, only the first is translated");
					translation.notices.push(Notice::AmbiguousTypeDeclaration {
						column: definition.name.clone(),
						declarations,
					});
				}
				let field = self.field_schema(connector, definition, &mut translation)?;
				let statement = self.ddl.add_column(table, &field);
				info!(%statement, "parsed add column DDL");
				translation.statements.push(statement);
			}

			ColumnAlteration::Drop {
				column,
			} => {
				let statement = self.ddl.drop_column(table, column);
				info!(%statement, "parsed drop column DDL");
				translation.statements.push(statement);
			}

			ColumnAlteration::Change {
				old_name,
				new_name,
				definition,
			} => {
				if !self.config.translate_change_as_rename {
					warn!(operation = %expression.operation, ddl, "unsupported alter operation");
					translation.notices.push(Notice::UnsupportedOperation {
						operation: expression.operation.to_string(),
					});
					return Ok(translation);
				}
				let statement = self.ddl.rename_column(table, old_name, new_name);
				warn!(%statement, "Doris only supports renaming columns, CHANGE is applied as a rename");
				translation.notices.push(Notice::TypeChangeIgnored {
					old_name: old_name.to_string(),
					new_name: new_name.to_string(),
					data_type: definition.data_type.to_string(),
				});
				translation.statements.push(statement);
			}

			ColumnAlteration::Rename {
				old_name,
				new_name,
			} => {
				let statement = self.ddl.rename_column(table, old_name, new_name);
				info!(%statement, "parsed rename column DDL");
				translation.statements.push(statement);
			}

			ColumnAlteration::Unsupported {
				operation,
			} => {
				warn!(%operation, ddl, "unsupported alter operation");
				translation.notices.push(Notice::UnsupportedOperation {
					operation: operation.to_string(),
				});
			}
		}
		Ok(translation)
	}

	fn field_schema(
		&self,
		connector: SourceConnector,
		definition: &ColumnDefinition,
		translation: &mut Translation,
	) -> Result<FieldSchema> {
		let target_type = resolve_target_type(self.resolver.as_ref(), connector, definition)?;
		Ok(FieldSchema {
			name: definition.name.clone(),
			target_type,
			default_value: spec_value(
				definition,
				spec::DEFAULT,
				spec::extract_default_value(&definition.specs),
				translation,
			),
			comment: spec_value(definition, spec::COMMENT, spec::extract_comment(&definition.specs), translation),
		})
	}
}

fn spec_value(
	definition: &ColumnDefinition,
	keyword: &'static str,
	value: SpecValue<'_>,
	translation: &mut Translation,
) -> Option<String> {
	if value == SpecValue::Dangling {
		warn!(column = %definition.name, keyword, "column spec keyword has no value");
		translation.notices.push(Notice::MissingSpecValue {
			column: definition.name.clone(),
			keyword,
		});
	}
	value.value()
}

pub struct AlterTranslatorBuilder {
	parser: Arc<dyn StatementParser>,
	resolver: Arc<dyn TypeResolver>,
	config: TranslatorConfig,
}

impl Default for AlterTranslatorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AlterTranslatorBuilder {
	pub fn new() -> Self {
		Self {
			parser: Arc::new(SqlParser),
			resolver: Arc::new(DorisTypeResolver),
			config: TranslatorConfig::default(),
		}
	}

	pub fn with_parser(mut self, parser: impl StatementParser + 'static) -> Self {
		self.parser = Arc::new(parser);
		self
	}

	pub fn with_resolver(mut self, resolver: impl TypeResolver + 'static) -> Self {
		self.resolver = Arc::new(resolver);
		self
	}

	pub fn with_config(mut self, config: TranslatorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn build(self) -> AlterTranslator {
		AlterTranslator::new(self.parser, self.resolver, self.config)
	}
}
