use super::*;

#[test]
fn test_strict_strips_punctuation() {
    let n = NameNormalizer::Strict;
    assert_eq!(n.normalize("TheDuplex"), "theduplex");
    assert_eq!(n.normalize("PC and Pixel"), "pcandpixel");
    assert_eq!(n.normalize("Frank-And-Ernest"), "frankandernest");
    assert_eq!(n.normalize("Mother Goose & Grimm"), "mothergoosegrimm");
    assert_eq!(n.normalize("Sherman's Lagoon"), "shermanslagoon");
}

#[test]
fn test_loose_keeps_hyphens_and_apostrophes() {
    let n = NameNormalizer::Loose;
    assert_eq!(n.normalize("Frank-And-Ernest"), "frank-and-ernest");
    assert_eq!(n.normalize("Sherman's Lagoon"), "sherman'slagoon");
    assert_eq!(n.normalize("Adam At Home"), "adamathome");
}

#[test]
fn test_strategies_diverge() {
    // Same display name, different keys: the two tables must not cross-match.
    let name = "Frank-And-Ernest";
    assert_ne!(
        NameNormalizer::Strict.normalize(name),
        NameNormalizer::Loose.normalize(name)
    );
}

#[test]
fn test_only_ascii_space_is_stripped() {
    assert_eq!(NameNormalizer::Strict.normalize("Foo\tBar"), "foo\tbar");
}

#[test]
fn test_non_ascii_lowercased() {
    assert_eq!(NameNormalizer::Loose.normalize("Ça Ira"), "çaira");
}

#[test]
fn test_empty_name() {
    assert_eq!(NameNormalizer::Strict.normalize(""), "");
    assert_eq!(NameNormalizer::Strict.normalize(" & "), "");
}
