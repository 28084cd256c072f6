// ==============================================================================
// Prefix Consumer
// ==============================================================================
//
// The non-trie sibling of the Longest-Prefix Matcher: a length-indexed
// literal set walked longest-candidate-first.

use crate::length_index::LengthIndexedSet;

/// Configuration for a [`PrefixConsumer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixConsumeOptions {
    /// Fold ASCII/Unicode case when comparing candidates.
    pub case_insensitive: bool,
    /// Reject a match unless the candidate prefix is the *entire* input,
    /// rather than accepting the longest true prefix.
    pub must_match_whole_string: bool,
}

/// Longest-candidate-first prefix matcher over a length-indexed literal
/// set.
#[derive(Debug, Clone)]
pub struct PrefixConsumer {
    set: LengthIndexedSet,
    options: PrefixConsumeOptions,
}

impl PrefixConsumer {
    #[must_use]
    pub fn build<I, S>(literals: I, options: PrefixConsumeOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        Self {
            set: LengthIndexedSet::build(literals, options.case_insensitive),
            options,
        }
    }

    /// Consumes the longest configured literal that prefixes `text`.
    ///
    /// Returns `(matched, rest, found)`: `matched` and `rest` always sum
    /// back to `text`. When [`PrefixConsumeOptions::must_match_whole_string`]
    /// is set, only a candidate whose length equals `text.len()` is ever
    /// considered — there is no fallback to a shorter true prefix.
    #[must_use]
    pub fn consume<'t>(&self, text: &'t str) -> (&'t str, &'t str, bool) {
        if self.options.must_match_whole_string {
            let len = text.len();
            if self.set.contains(len, text) {
                return (text, "", true);
            }
            return ("", text, false);
        }

        for &len in self.set.lengths_descending() {
            if len > text.len() {
                continue;
            }
            // Candidate boundary must land on a UTF-8 char boundary, or
            // slicing `text` would panic; a length from the literal set
            // that doesn't can never equal the slice anyway, so skip it.
            if !text.is_char_boundary(len) {
                continue;
            }
            let candidate = &text[..len];
            if self.set.contains(len, candidate) {
                return (candidate, &text[len..], true);
            }
        }

        ("", text, false)
    }

    /// Iterates `consume` over successive remainders of `text`. See
    /// [`crate::iter::PrefixConsumeIter`].
    #[must_use]
    pub fn iter<'s, 't>(&'s self, text: &'t str) -> crate::iter::PrefixConsumeIter<'s, 't> {
        crate::iter::PrefixConsumeIter::new(self, text)
    }
}
