//! Per-record change log and run statistics.

use std::fmt;

use crate::rules::{Migration, Weekday};

/// A single field transition applied to a comic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    SourceIdentifier { old: String, new: String },
    Source { old: String, new: String },
    /// `active` set to `false`.
    Deactivated,
    /// `publicationDays` replaced with a fixed schedule.
    Schedule(Vec<Weekday>),
    /// Both source fields filled in from a platform table.
    Backfilled { source: String, identifier: String },
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldChange::SourceIdentifier { old, new } => {
                write!(f, "sourceIdentifier: {old} -> {new}")
            }
            FieldChange::Source { old, new } => write!(f, "source: {old} -> {new}"),
            FieldChange::Deactivated => f.write_str("active: true -> false (discontinued)"),
            FieldChange::Schedule(days) => {
                let days: Vec<&str> = days.iter().map(|d| d.as_str()).collect();
                write!(f, "publicationDays: added [{}]", days.join(", "))
            }
            FieldChange::Backfilled { source, identifier } => {
                write!(f, "Added source={source}, sourceIdentifier={identifier}")
            }
        }
    }
}

/// What a run did to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// At least one rule fired.
    Changed(Vec<FieldChange>),
    /// No rule matched or every matching rule was already satisfied.
    Unchanged,
    /// Backfill skipped the record because both source fields are set.
    AlreadySourced,
    /// Backfill found no platform table entry for the name.
    Unmapped,
}

/// Outcome for a single comic, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub id: String,
    pub name: String,
    pub outcome: RecordOutcome,
}

impl RecordReport {
    pub fn changes(&self) -> &[FieldChange] {
        match &self.outcome {
            RecordOutcome::Changed(changes) => changes,
            _ => &[],
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self.outcome, RecordOutcome::Changed(_))
    }
}

/// Running counts per rule category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleCounts {
    pub slug_fixed: usize,
    pub moved_platform: usize,
    pub marked_inactive: usize,
    pub schedule_added: usize,
    pub backfilled: usize,
    pub already_sourced: usize,
    pub unmapped: usize,
}

/// Summary of a patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub migration: Migration,
    pub total: usize,
    pub unchanged: usize,
    pub counts: RuleCounts,
    pub records: Vec<RecordReport>,
}

impl PatchReport {
    /// Number of records that were modified.
    pub fn modified(&self) -> usize {
        self.records.iter().filter(|r| r.is_changed()).count()
    }

    /// Names of records the backfill could not map, in document order.
    pub fn unmapped(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.outcome == RecordOutcome::Unmapped)
            .map(|r| r.name.as_str())
            .collect()
    }
}

/// Accumulates record outcomes and counts while the engine walks the catalog.
#[derive(Debug)]
pub struct ChangeTracker {
    migration: Migration,
    pub counts: RuleCounts,
    records: Vec<RecordReport>,
    unchanged: usize,
}

impl ChangeTracker {
    pub fn new(migration: Migration) -> Self {
        Self {
            migration,
            counts: RuleCounts::default(),
            records: Vec::new(),
            unchanged: 0,
        }
    }

    /// Record the changes made to one comic. An empty list counts as unchanged.
    pub fn record(&mut self, id: &str, name: &str, changes: Vec<FieldChange>) {
        let outcome = if changes.is_empty() {
            RecordOutcome::Unchanged
        } else {
            RecordOutcome::Changed(changes)
        };
        self.push(id, name, outcome);
    }

    pub fn already_sourced(&mut self, id: &str, name: &str) {
        self.counts.already_sourced += 1;
        self.push(id, name, RecordOutcome::AlreadySourced);
    }

    pub fn unmapped(&mut self, id: &str, name: &str) {
        self.counts.unmapped += 1;
        self.push(id, name, RecordOutcome::Unmapped);
    }

    fn push(&mut self, id: &str, name: &str, outcome: RecordOutcome) {
        if !matches!(outcome, RecordOutcome::Changed(_)) {
            self.unchanged += 1;
        }
        self.records.push(RecordReport {
            id: id.to_string(),
            name: name.to_string(),
            outcome,
        });
    }

    pub fn finish(self) -> PatchReport {
        PatchReport {
            migration: self.migration,
            total: self.records.len(),
            unchanged: self.unchanged,
            counts: self.counts,
            records: self.records,
        }
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
