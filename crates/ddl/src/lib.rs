// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Translation of change data capture `ALTER TABLE` events into Doris schema changes.
//!
//! ```
//! use schemaflow_ddl::AlterTranslator;
//! use schemaflow_type::SourceConnector;
//!
//! let translator = AlterTranslator::default();
//! let statements = translator
//! 	.translate_alter(SourceConnector::Mysql, "ALTER TABLE t DROP COLUMN legacy_flag", "users")
//! 	.unwrap();
//! assert_eq!(statements, vec!["ALTER TABLE `users` DROP COLUMN `legacy_flag`"]);
//! ```

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod notice;
pub mod resolve;
pub mod spec;
pub mod translate;

pub use builder::{DdlBuilder, FieldSchema, build_add_column_ddl, build_drop_column_ddl, build_rename_column_ddl};
pub use classify::{ColumnAlteration, classify};
pub use config::TranslatorConfig;
pub use error::{Error, Result};
pub use notice::Notice;
pub use translate::{AlterTranslator, AlterTranslatorBuilder, Translation};
