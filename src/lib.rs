//! Backfills a second session into single-session learning topics.
//!
//! The content lives in a TypeScript file as
//! `export const learningContent: LearningTopic[] = [ ... ];`. The
//! [`Migrator`] lifts that literal into typed [`models`], appends a follow-up
//! session where a topic has exactly one, and writes the literal back in the
//! same dialect, leaving the rest of the file byte for byte as it was.

pub mod config;
pub mod error;
pub mod icons;
pub mod literal;
pub mod migrate;
pub mod models;
pub mod writer;

pub use config::{MigrationConfig, SessionTemplate, TemplateRestore};
pub use error::MigrateError;
pub use icons::IconTable;
pub use migrate::{Migration, MigrationReport, Migrator, SUCCESS_MESSAGE};
