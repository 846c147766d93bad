//! The migration pipeline.
//!
//! Read the target, locate the exported array literal, normalize and decode
//! it, append follow-up sessions, encode and restore the dialect, splice the
//! result back and write the file. Every failure happens before the write.

mod backfill;

pub use backfill::*;

use std::ops::Range;

use crate::config::MigrationConfig;
use crate::error::MigrateError;
use crate::icons::IconTable;
use crate::literal::{decode_topics, encode_topics, DialectNormalizer, ExportPattern, Restorer};
use crate::writer;

/// Printed once the target file has been written.
pub const SUCCESS_MESSAGE: &str =
    "Successfully added second session to all topics and updated estimated times.";

/// Result of migrating one source text.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Full new file contents.
    pub content: String,
    /// Span of the array literal in the original text.
    pub span: Range<usize>,
    pub report: MigrationReport,
}

pub struct Migrator {
    config: MigrationConfig,
    icons: IconTable,
    pattern: ExportPattern,
}

impl Migrator {
    pub fn new(config: MigrationConfig) -> Result<Self, MigrateError> {
        let icons = IconTable::new(config.icons.iter().cloned())?;
        let pattern = ExportPattern::new(&config.export_name, &config.type_name)?;
        Ok(Self {
            config,
            icons,
            pattern,
        })
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Migrate file contents held in memory.
    pub fn migrate_source(&self, source: &str) -> Result<Migration, MigrateError> {
        let span = self.pattern.locate(source)?;
        tracing::debug!(start = span.start, end = span.end, "located array literal");

        let normalized = DialectNormalizer::new(&self.icons)
            .normalize(&source[span.clone()])
            .map_err(|e| e.shifted(span.start))?;
        let mut topics = decode_topics(&normalized)?;
        tracing::info!(topics = topics.len(), "decoded learning topics");

        let report = extend_topics(&mut topics, &self.config.session);
        tracing::info!(
            extended = report.extended,
            untouched = report.untouched,
            "appended follow-up sessions"
        );

        let encoded = encode_topics(&topics)?;
        let restored = Restorer::new(
            &self.icons,
            &self.config.session.placeholder_content,
            self.config.restore_templates,
        )
        .restore(&encoded);

        Ok(Migration {
            content: writer::splice(source, span.clone(), &restored),
            span,
            report,
        })
    }

    /// Migrate the configured target without writing it.
    pub fn preview(&self) -> Result<Migration, MigrateError> {
        let source = writer::read_file(&self.config.target)?;
        self.migrate_source(&source)
    }

    /// Migrate the configured target and write the result over it.
    ///
    /// The write is skipped when the file would not change.
    pub fn run(&self) -> Result<MigrationReport, MigrateError> {
        let path = &self.config.target;
        tracing::info!(path = %path.display(), "migrating learning content");

        let source = writer::read_file(path)?;
        let migration = self.migrate_source(&source)?;

        if migration.content == source {
            tracing::info!("file already up to date");
        } else {
            writer::write_file(path, &migration.content, self.config.atomic_write)?;
            tracing::info!(bytes = migration.content.len(), "wrote migrated file");
        }

        Ok(migration.report)
    }
}
