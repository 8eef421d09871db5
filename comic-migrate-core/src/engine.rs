//! Catalog patch engine.
//!
//! [`apply`] takes ownership of a parsed catalog, walks `items` in document
//! order, runs the migration's rules against every record, and hands back the
//! patched document with a [`PatchReport`]. No I/O happens here.
//!
//! `fix-slugs` applies its rules in a fixed order per record:
//!
//! 1. slug correction (keyed by the current `sourceIdentifier`)
//! 2. platform move (keyed by the lowercased display name)
//! 3. inactivation (strict-normalized name)
//! 4. schedule (strict-normalized name)
//!
//! Every rule compares before writing, so a second run over its own output
//! records no changes.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::document::{ComicRecord, catalog_items_mut};
use crate::error::MigrateError;
use crate::normalize::NameNormalizer;
use crate::report::{ChangeTracker, FieldChange, PatchReport};
use crate::rules::{BackfillRules, Migration, MigrationRules, PlatformMove, SlugRules, Weekday};

/// A patched catalog and what was done to it.
#[derive(Debug)]
pub struct Patched {
    pub document: Value,
    pub report: PatchReport,
}

/// Apply `rules` to every comic in `document`.
///
/// Fails with [`MigrateError::MissingItems`] when the document has no
/// `items` key, before any record is touched.
pub fn apply(mut document: Value, rules: &MigrationRules) -> Result<Patched, MigrateError> {
    let items = catalog_items_mut(&mut document)?;
    log::debug!(
        "Applying {} to {} comics",
        rules.migration(),
        items.len()
    );
    let report = match rules {
        MigrationRules::FixSlugs(r) => fix_slugs(items, r)?,
        MigrationRules::BackfillSources(r) => backfill_sources(items, r)?,
    };
    Ok(Patched { document, report })
}

/// Lookup indexes compiled from a [`SlugRules`] table.
struct SlugIndex<'r> {
    slug_fixes: HashMap<&'r str, &'r str>,
    moves: HashMap<String, &'r PlatformMove>,
    inactive: HashSet<String>,
    schedules: HashMap<String, &'r [Weekday]>,
}

impl<'r> SlugIndex<'r> {
    fn new(rules: &'r SlugRules) -> Self {
        let normalize = |name: &str| NameNormalizer::Strict.normalize(name);

        let mut slug_fixes = HashMap::new();
        for fix in &rules.slug_fixes {
            slug_fixes
                .entry(fix.from.as_str())
                .or_insert(fix.to.as_str());
        }
        let mut moves = HashMap::new();
        for mv in &rules.platform_moves {
            moves.entry(mv.name.to_lowercase()).or_insert(mv);
        }
        let mut schedules = HashMap::new();
        for schedule in &rules.schedules {
            schedules
                .entry(normalize(&schedule.name))
                .or_insert(schedule.days.as_slice());
        }

        Self {
            slug_fixes,
            moves,
            inactive: rules.inactive.iter().map(|n| normalize(n)).collect(),
            schedules,
        }
    }
}

fn fix_slugs(
    items: &mut Map<String, Value>,
    rules: &SlugRules,
) -> Result<PatchReport, MigrateError> {
    let index = SlugIndex::new(rules);
    let mut tracker = ChangeTracker::new(Migration::FixSlugs);

    for (id, value) in items.iter_mut() {
        let mut record = ComicRecord::new(id, value)?;
        let name = record.name().to_string();
        let key = NameNormalizer::Strict.normalize(&name);
        let mut changes = Vec::new();

        // Slug correction
        let current = record.source_identifier().to_string();
        if let Some(&target) = index.slug_fixes.get(current.as_str()) {
            if target != current {
                record.set_source_identifier(target);
                changes.push(FieldChange::SourceIdentifier {
                    old: current,
                    new: target.to_string(),
                });
                tracker.counts.slug_fixed += 1;
            }
        }

        // Platform move
        if let Some(mv) = index.moves.get(&name.to_lowercase()) {
            let old_source = record.source().to_string();
            if old_source != mv.source {
                record.set_source(&mv.source);
                changes.push(FieldChange::Source {
                    old: old_source,
                    new: mv.source.clone(),
                });
                tracker.counts.moved_platform += 1;
            }

            let current = record.source_identifier().to_string();
            if current != mv.identifier {
                // Only counted as a slug fix when nothing else changed yet.
                if changes.is_empty() {
                    tracker.counts.slug_fixed += 1;
                }
                record.set_source_identifier(&mv.identifier);
                changes.push(FieldChange::SourceIdentifier {
                    old: current,
                    new: mv.identifier.clone(),
                });
            }
        }

        // Inactivation
        if index.inactive.contains(&key) && !record.is_inactive() {
            record.deactivate();
            changes.push(FieldChange::Deactivated);
            tracker.counts.marked_inactive += 1;
        }

        // Schedule
        if let Some(&days) = index.schedules.get(&key) {
            if !record.has_publication_days(days) {
                record.set_publication_days(days);
                changes.push(FieldChange::Schedule(days.to_vec()));
                tracker.counts.schedule_added += 1;
            }
        }

        tracker.record(id, &name, changes);
    }

    Ok(tracker.finish())
}

/// Normalized name to `(source, identifier)`, first table wins.
fn platform_index(rules: &BackfillRules) -> HashMap<String, (&str, &str)> {
    let mut index = HashMap::new();
    for table in &rules.platforms {
        for comic in &table.comics {
            index
                .entry(NameNormalizer::Loose.normalize(&comic.name))
                .or_insert((table.source.as_str(), comic.identifier.as_str()));
        }
    }
    index
}

fn backfill_sources(
    items: &mut Map<String, Value>,
    rules: &BackfillRules,
) -> Result<PatchReport, MigrateError> {
    let index = platform_index(rules);
    let mut tracker = ChangeTracker::new(Migration::BackfillSources);

    for (id, value) in items.iter_mut() {
        let mut record = ComicRecord::new(id, value)?;
        let name = record.name().to_string();

        if record.has_source_info() {
            tracker.already_sourced(id, &name);
            continue;
        }

        match index.get(&NameNormalizer::Loose.normalize(&name)) {
            Some(&(source, identifier)) => {
                record.set_source(source);
                record.set_source_identifier(identifier);
                tracker.counts.backfilled += 1;
                tracker.record(
                    id,
                    &name,
                    vec![FieldChange::Backfilled {
                        source: source.to_string(),
                        identifier: identifier.to_string(),
                    }],
                );
            }
            None => {
                log::debug!("No platform entry for {name:?}");
                tracker.unmapped(id, &name);
            }
        }
    }

    Ok(tracker.finish())
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
