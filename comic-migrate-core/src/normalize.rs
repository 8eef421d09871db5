//! Display-name canonicalization for rule matching.
//!
//! Two strategies exist and each rule table is tied to one of them. They are
//! deliberately kept apart: the slug-fix tables were written against the
//! strict form, the platform lookup tables against the loose form, and
//! swapping them changes which comics match which rules.

/// A name canonicalization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameNormalizer {
    /// Strip spaces, `&`, apostrophes, and hyphens, then lowercase.
    ///
    /// Used by the inactivation and schedule rules of `fix-slugs`.
    Strict,
    /// Strip spaces and `&`, then lowercase. Hyphens and apostrophes survive.
    ///
    /// Used by the platform tables of `backfill-sources`.
    Loose,
}

impl NameNormalizer {
    /// Characters removed from the name before lowercasing.
    fn stripped(self) -> &'static [char] {
        match self {
            NameNormalizer::Strict => &[' ', '&', '\'', '-'],
            NameNormalizer::Loose => &[' ', '&'],
        }
    }

    /// Produce the matching key for a display name.
    ///
    /// ```
    /// use comic_migrate_core::NameNormalizer;
    ///
    /// assert_eq!(NameNormalizer::Strict.normalize("Sherman's Lagoon"), "shermanslagoon");
    /// assert_eq!(NameNormalizer::Loose.normalize("Sherman's Lagoon"), "sherman'slagoon");
    /// assert_eq!(NameNormalizer::Loose.normalize("Mother Goose & Grimm"), "mothergoosegrimm");
    /// ```
    pub fn normalize(self, name: &str) -> String {
        let stripped = self.stripped();
        name.chars()
            .filter(|c| !stripped.contains(c))
            .collect::<String>()
            .to_lowercase()
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
