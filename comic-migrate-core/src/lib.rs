//! Catalog patch engine for the comics service's `comics.json`.
//!
//! This crate holds the rule tables, the name normalizers, and the engine
//! that applies a migration to a parsed catalog, plus the file primitives
//! the CLI uses around it. It does no console output of its own.

pub mod document;
pub mod engine;
pub mod error;
pub mod files;
pub mod normalize;
pub mod report;
pub mod rules;

pub use document::ComicRecord;
pub use engine::{Patched, apply};
pub use error::MigrateError;
pub use files::{backup_path, create_backup, load_catalog, render_catalog, write_catalog};
pub use normalize::NameNormalizer;
pub use report::{ChangeTracker, FieldChange, PatchReport, RecordOutcome, RecordReport, RuleCounts};
pub use rules::{
    BackfillRules, Migration, MigrationRules, PlatformComic, PlatformMove, PlatformTable,
    Schedule, SlugFix, SlugRules, Weekday,
};
