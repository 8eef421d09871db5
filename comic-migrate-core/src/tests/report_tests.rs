use super::*;

#[test]
fn test_field_change_lines() {
    let c = FieldChange::SourceIdentifier {
        old: "theduplex".into(),
        new: "duplex".into(),
    };
    assert_eq!(c.to_string(), "sourceIdentifier: theduplex -> duplex");

    let c = FieldChange::Source {
        old: String::new(),
        new: "gocomics".into(),
    };
    assert_eq!(c.to_string(), "source:  -> gocomics");

    assert_eq!(
        FieldChange::Deactivated.to_string(),
        "active: true -> false (discontinued)"
    );
    assert_eq!(
        FieldChange::Schedule(vec![Weekday::Saturday, Weekday::Sunday]).to_string(),
        "publicationDays: added [SATURDAY, SUNDAY]"
    );
    assert_eq!(
        FieldChange::Backfilled {
            source: "gocomics".into(),
            identifier: "agnes".into(),
        }
        .to_string(),
        "Added source=gocomics, sourceIdentifier=agnes"
    );
}

#[test]
fn test_tracker_counts_unchanged() {
    let mut tracker = ChangeTracker::new(Migration::BackfillSources);
    tracker.record(
        "a",
        "Agnes",
        vec![FieldChange::Backfilled {
            source: "gocomics".into(),
            identifier: "agnes".into(),
        }],
    );
    tracker.counts.backfilled += 1;
    tracker.already_sourced("b", "Garfield");
    tracker.unmapped("c", "Mystery Strip");
    tracker.record("d", "Ziggy", Vec::new());

    let report = tracker.finish();
    assert_eq!(report.total, 4);
    assert_eq!(report.unchanged, 3);
    assert_eq!(report.modified(), 1);
    assert_eq!(report.counts.already_sourced, 1);
    assert_eq!(report.counts.unmapped, 1);
    assert_eq!(report.unmapped(), vec!["Mystery Strip"]);
    assert!(report.records[0].is_changed());
    assert!(!report.records[3].is_changed());
}

#[test]
fn test_record_report_changes() {
    let report = RecordReport {
        id: "x".into(),
        name: "X".into(),
        outcome: RecordOutcome::Unmapped,
    };
    assert!(report.changes().is_empty());
    assert!(!report.is_changed());
}
