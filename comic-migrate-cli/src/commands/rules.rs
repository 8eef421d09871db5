use comic_migrate_core::{Migration, MigrationRules};

use crate::CliError;

/// Print the built-in rule table for `migration` as TOML.
///
/// The output is accepted by `--rules`, so it doubles as a template.
pub(crate) fn run_rules(migration: Migration) -> Result<(), CliError> {
    let rendered = MigrationRules::builtin(migration).to_toml_string()?;
    print!("{rendered}");
    Ok(())
}
