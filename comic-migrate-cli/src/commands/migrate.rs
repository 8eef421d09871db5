use comic_migrate_core::{
    Migration, MigrateError, MigrationRules, PatchReport, RecordOutcome, apply, backup_path,
    create_backup, load_catalog, write_catalog,
};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::MigrateArgs;

/// Run a migration over one catalog file.
///
/// Every rule runs against the in-memory document before anything is written,
/// so a failure leaves the input untouched.
pub(crate) fn run_migration(migration: Migration, args: MigrateArgs) -> Result<(), CliError> {
    let rules = MigrationRules::resolve(migration, args.rules.as_deref())?;
    if let Some(path) = &args.rules {
        log::info!(
            "{}",
            format!("Using rules from {}", path.display()).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let input = &args.input_file;
    if !input.exists() {
        return Err(MigrateError::InputNotFound(input.display().to_string()).into());
    }

    log::info!(
        "Reading comics from: {}",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let document = load_catalog(input)?;
    let patched = apply(document, &rules)?;

    print_records(&patched.report);
    print_summary(&patched.report);

    if args.dry_run {
        crate::log_blank();
        log::info!(
            "{}",
            "DRY RUN - No files were modified".if_supports_color(Stdout, |t| t.yellow()),
        );
        log::info!("Run without --dry-run to apply changes");
        return Ok(());
    }

    let output = args.output.as_deref().unwrap_or(input);

    crate::log_blank();
    if input.exists() {
        log::info!("Creating backup: {}", backup_path(input).display());
        create_backup(input)?;
    }

    log::info!("Writing migrated comics to: {}", output.display());
    write_catalog(output, &patched.document)?;

    log::info!(
        "{}",
        success_message(migration).if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

/// Closing line of a successful run.
pub(crate) fn success_message(migration: Migration) -> &'static str {
    match migration {
        Migration::FixSlugs => "[SUCCESS] Migration completed successfully!",
        Migration::BackfillSources => "\u{2713} Migration completed successfully!",
    }
}

/// Per-category counts shown in the summary block, in display order.
pub(crate) fn count_lines(report: &PatchReport) -> Vec<String> {
    let counts = &report.counts;
    match report.migration {
        Migration::FixSlugs => vec![
            format!("Slug fixes applied: {}", counts.slug_fixed),
            format!("Moved to GoComics: {}", counts.moved_platform),
            format!("Marked inactive: {}", counts.marked_inactive),
            format!("Publication schedules added: {}", counts.schedule_added),
            format!("No changes needed: {}", report.unchanged),
        ],
        Migration::BackfillSources => vec![
            format!("Updated: {}", counts.backfilled),
            format!("Already had source: {}", counts.already_sourced),
            format!("Not found: {}", counts.unmapped),
        ],
    }
}

/// One line per record that a rule touched (or, for backfill, every record).
pub(crate) fn print_records(report: &PatchReport) {
    for record in &report.records {
        match (&record.outcome, report.migration) {
            (RecordOutcome::Changed(changes), Migration::FixSlugs) => {
                let changes: Vec<String> = changes.iter().map(ToString::to_string).collect();
                log::info!(
                    "{} {}: {}",
                    "[OK]".if_supports_color(Stdout, |t| t.green()),
                    record.name.if_supports_color(Stdout, |t| t.bold()),
                    changes.join(", "),
                );
            }
            (RecordOutcome::Changed(changes), Migration::BackfillSources) => {
                for change in changes {
                    log::info!(
                        "{} {}: {}",
                        "+".if_supports_color(Stdout, |t| t.green()),
                        record.name,
                        change,
                    );
                }
            }
            (RecordOutcome::AlreadySourced, _) => {
                log::info!(
                    "{} {}: Already has source info",
                    "\u{2713}".if_supports_color(Stdout, |t| t.green()),
                    record.name.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            (RecordOutcome::Unmapped, _) => {
                log::warn!(
                    "{} {}: No source mapping found",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    record.name,
                );
            }
            (RecordOutcome::Unchanged, _) => {
                log::debug!("{}: no changes", record.name);
            }
        }
    }
}

pub(crate) fn print_summary(report: &PatchReport) {
    let rule = "=".repeat(match report.migration {
        Migration::FixSlugs => 70,
        Migration::BackfillSources => 60,
    });

    crate::log_blank();
    log::info!("{rule}");
    log::info!(
        "{}",
        "MIGRATION SUMMARY".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("{rule}");
    log::info!("Total comics: {}", report.total);
    for line in count_lines(report) {
        log::info!("{line}");
    }

    match report.migration {
        Migration::FixSlugs => {
            let modified = report.modified();
            if modified > 0 {
                crate::log_blank();
                log::info!("Total comics modified: {modified}");
            }
        }
        Migration::BackfillSources => {
            let unmapped = report.unmapped();
            if !unmapped.is_empty() {
                crate::log_blank();
                log::warn!("Comics without mapping:");
                for name in unmapped {
                    log::warn!("  - {name}");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/migrate_tests.rs"]
mod tests;
