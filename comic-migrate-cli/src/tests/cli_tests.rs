use std::path::PathBuf;

use super::*;

#[test]
fn test_parse_fix_slugs() {
    let cli = Cli::try_parse_from([
        "comic-migrate",
        "fix-slugs",
        "comics.json",
        "-o",
        "out.json",
        "--dry-run",
    ])
    .unwrap();
    let Commands::FixSlugs { args } = cli.command else {
        panic!("expected fix-slugs");
    };
    assert_eq!(args.input_file, PathBuf::from("comics.json"));
    assert_eq!(args.output, Some(PathBuf::from("out.json")));
    assert!(args.dry_run);
    assert!(args.rules.is_none());
}

#[test]
fn test_parse_backfill_with_rules() {
    let cli = Cli::try_parse_from([
        "comic-migrate",
        "--verbose",
        "backfill-sources",
        "comics.json",
        "--rules",
        "platforms.toml",
    ])
    .unwrap();
    assert!(cli.verbose);
    let Commands::BackfillSources { args } = cli.command else {
        panic!("expected backfill-sources");
    };
    assert!(!args.dry_run);
    assert_eq!(args.rules, Some(PathBuf::from("platforms.toml")));
}

#[test]
fn test_input_file_required() {
    assert!(Cli::try_parse_from(["comic-migrate", "fix-slugs"]).is_err());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(
        Cli::try_parse_from(["comic-migrate", "-v", "--quiet", "fix-slugs", "comics.json"])
            .is_err()
    );
}

#[test]
fn test_parse_rules_command() {
    let cli = Cli::try_parse_from(["comic-migrate", "rules", "backfill-sources"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Rules {
            migration: Migration::BackfillSources
        }
    ));
    assert!(Cli::try_parse_from(["comic-migrate", "rules", "upgrade"]).is_err());
}
