use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use super::*;

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn args(input: PathBuf) -> MigrateArgs {
    MigrateArgs {
        input_file: input,
        output: None,
        dry_run: false,
        rules: None,
    }
}

#[test]
fn test_overwrites_input_and_writes_backup() {
    let tmp = TempDir::new().unwrap();
    let original = json!({ "items": { "c1": { "name": "Committed", "active": true } } });
    let input = write_json(tmp.path(), "comics.json", &original);
    let before = fs::read(&input).unwrap();

    run_migration(Migration::FixSlugs, args(input.clone())).unwrap();

    assert_eq!(read_json(&input)["items"]["c1"]["active"], false);
    let backup = tmp.path().join("comics.json.backup");
    assert_eq!(fs::read(backup).unwrap(), before);
}

#[test]
fn test_separate_output_leaves_input() {
    let tmp = TempDir::new().unwrap();
    let original = json!({ "items": { "c1": { "name": "Agnes" } } });
    let input = write_json(tmp.path(), "comics.json", &original);
    let output = tmp.path().join("migrated.json");

    let mut a = args(input.clone());
    a.output = Some(output.clone());
    run_migration(Migration::BackfillSources, a).unwrap();

    assert_eq!(read_json(&input), original);
    assert_eq!(read_json(&output)["items"]["c1"]["source"], "gocomics");
    assert!(tmp.path().join("comics.json.backup").exists());
}

#[test]
fn test_dry_run_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let original = json!({ "items": { "c1": { "name": "FoxTrot" } } });
    let input = write_json(tmp.path(), "comics.json", &original);
    let before = fs::read(&input).unwrap();

    let mut a = args(input.clone());
    a.dry_run = true;
    run_migration(Migration::FixSlugs, a).unwrap();

    assert_eq!(fs::read(&input).unwrap(), before);
    assert!(!tmp.path().join("comics.json.backup").exists());
}

#[test]
fn test_missing_items_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let input = write_json(tmp.path(), "comics.json", &json!({}));
    let output = tmp.path().join("out.json");

    let mut a = args(input.clone());
    a.output = Some(output.clone());
    let err = run_migration(Migration::FixSlugs, a).unwrap_err();

    assert!(matches!(err, CliError::Migrate(MigrateError::MissingItems)));
    assert!(!output.exists());
    assert!(!tmp.path().join("comics.json.backup").exists());
    assert_eq!(read_json(&input), json!({}));
}

#[test]
fn test_missing_input_fails() {
    let tmp = TempDir::new().unwrap();
    let err = run_migration(Migration::FixSlugs, args(tmp.path().join("nope.json"))).unwrap_err();
    assert!(matches!(
        err,
        CliError::Migrate(MigrateError::InputNotFound(_))
    ));
}

#[test]
fn test_unmapped_comics_still_succeed() {
    let tmp = TempDir::new().unwrap();
    let original = json!({ "items": { "c1": { "name": "Unknown Strip XYZ" } } });
    let input = write_json(tmp.path(), "comics.json", &original);

    run_migration(Migration::BackfillSources, args(input.clone())).unwrap();
    assert_eq!(read_json(&input), original);
}

#[test]
fn test_custom_rules_file() {
    let tmp = TempDir::new().unwrap();
    let rules = tmp.path().join("rules.toml");
    fs::write(&rules, "inactive = [\"garfield\"]\n").unwrap();
    let input = write_json(
        tmp.path(),
        "comics.json",
        &json!({ "items": { "c1": { "name": "Garfield" }, "c2": { "name": "Committed" } } }),
    );

    let mut a = args(input.clone());
    a.rules = Some(rules);
    run_migration(Migration::FixSlugs, a).unwrap();

    let doc = read_json(&input);
    assert_eq!(doc["items"]["c1"]["active"], false);
    assert!(doc["items"]["c2"].get("active").is_none());
}

#[test]
fn test_bad_rules_file_fails_before_reading() {
    let tmp = TempDir::new().unwrap();
    let rules = tmp.path().join("rules.toml");
    fs::write(&rules, "inactive = 3\n").unwrap();
    let input = write_json(tmp.path(), "comics.json", &json!({ "items": {} }));

    let mut a = args(input);
    a.rules = Some(rules);
    let err = run_migration(Migration::FixSlugs, a).unwrap_err();
    assert!(matches!(err, CliError::Migrate(MigrateError::Rules { .. })));
}

#[test]
fn test_success_message_per_migration() {
    assert_eq!(
        success_message(Migration::FixSlugs),
        "[SUCCESS] Migration completed successfully!"
    );
    assert_eq!(
        success_message(Migration::BackfillSources),
        "\u{2713} Migration completed successfully!"
    );
}

#[test]
fn test_fix_slugs_count_lines() {
    let doc = json!({
        "items": {
            "c1": { "name": "Baby Blues", "source": "comicskingdom", "sourceIdentifier": "baby-blues" },
            "c2": { "name": "Ziggy" }
        }
    });
    let patched = apply(doc, &MigrationRules::builtin(Migration::FixSlugs)).unwrap();
    assert_eq!(
        count_lines(&patched.report),
        vec![
            "Slug fixes applied: 0",
            "Moved to GoComics: 1",
            "Marked inactive: 0",
            "Publication schedules added: 0",
            "No changes needed: 1",
        ]
    );
}

#[test]
fn test_backfill_count_lines() {
    let doc = json!({
        "items": {
            "c1": { "name": "Agnes" },
            "c2": { "name": "Zits", "source": "comicskingdom", "sourceIdentifier": "zits" },
            "c3": { "name": "Mystery Strip" }
        }
    });
    let patched = apply(doc, &MigrationRules::builtin(Migration::BackfillSources)).unwrap();
    assert_eq!(
        count_lines(&patched.report),
        vec!["Updated: 1", "Already had source: 1", "Not found: 1"]
    );
}
