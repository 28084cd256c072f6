// ==============================================================================
// Length-indexed literal set
// ==============================================================================
//
// Shared by `scanner` (separator lookup) and `prefix_consumer` (prefix
// lookup): both want a literal set bucketed by byte length and walked
// longest-first, so that pattern lives here once.

use std::collections::BTreeMap;

/// A literal set indexed by byte length, descending, for
/// longest-candidate-first scanning.
///
/// Neither the separator scanner nor the prefix consumer know the
/// longest length of their configured literals up front without a scan
/// of their own, so both pay for this index once at construction time
/// rather than recomputing candidate lengths on every call.
#[derive(Debug, Clone)]
pub(crate) struct LengthIndexedSet {
    /// Lengths in descending order; `by_length[len]` holds every literal
    /// of exactly that byte length.
    lengths: Vec<usize>,
    by_length: BTreeMap<usize, Vec<Box<str>>>,
    case_insensitive: bool,
}

impl LengthIndexedSet {
    pub(crate) fn build<I, S>(literals: I, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let mut by_length: BTreeMap<usize, Vec<Box<str>>> = BTreeMap::new();
        for literal in literals {
            let literal = literal.into();
            by_length.entry(literal.len()).or_default().push(literal);
        }

        let mut lengths: Vec<usize> = by_length.keys().copied().collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            lengths,
            by_length,
            case_insensitive,
        }
    }

    /// Configured lengths, longest first.
    pub(crate) fn lengths_descending(&self) -> &[usize] {
        &self.lengths
    }

    /// `true` if any literal of exactly `len` bytes equals `candidate`
    /// under this set's case sensitivity.
    pub(crate) fn contains(&self, len: usize, candidate: &str) -> bool {
        let Some(bucket) = self.by_length.get(&len) else {
            return false;
        };
        bucket.iter().any(|literal| {
            if self.case_insensitive {
                eq_ignore_case(literal, candidate)
            } else {
                literal.as_ref() == candidate
            }
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Simple Unicode case folding, not locale-sensitive.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_lengths() {
        let set = LengthIndexedSet::build(Vec::<&str>::new(), false);
        assert!(set.is_empty());
        assert!(set.lengths_descending().is_empty());
    }

    #[test]
    fn lengths_are_descending_and_deduplicated() {
        let set = LengthIndexedSet::build([";", "::", "->", ";"], false);
        assert_eq!(set.lengths_descending(), &[2, 1]);
    }

    #[test]
    fn contains_is_case_sensitive_by_default() {
        let set = LengthIndexedSet::build(["AND"], false);
        assert!(set.contains(3, "AND"));
        assert!(!set.contains(3, "and"));
    }

    #[test]
    fn contains_ignores_case_when_configured() {
        let set = LengthIndexedSet::build(["AND"], true);
        assert!(set.contains(3, "and"));
        assert!(set.contains(3, "AnD"));
    }

    #[test]
    fn contains_checks_the_exact_length_bucket_only() {
        let set = LengthIndexedSet::build(["ab", "abc"], false);
        assert!(!set.contains(2, "abc"));
        assert!(set.contains(3, "abc"));
    }

    #[test]
    fn eq_ignore_case_is_not_locale_sensitive() {
        assert!(eq_ignore_case("STRASSE", "strasse"));
        assert!(!eq_ignore_case("i", "İ"));
    }
}
