// ==============================================================================
// LPM-backed Separator Scanner
// ==============================================================================
//
// Same output shape as `SeparatorScanner`, but separator lookup goes
// through a trie-backed `PrefixIndex` instead of a length-indexed map,
// and the scan itself is a plain positional walk: no escape sequences,
// no encasings. Those stay SS's exclusive domain — a separator set
// large enough to want trie lookup is, per its own rationale, a flat
// set of literal delimiters, not a quoting/escaping grammar, so this
// variant never carries that machinery. `build` panics if an escape or
// any encasing is configured, the same way it already panics on
// `case_insensitive`.

use crate::options::{MustBeFollowedBy, ScanOptions};
use crate::prefix_index::PrefixIndex;
use crate::scanner::{char_len_at, not_found, produce, ScanOutcome};

/// A [`crate::scanner::SeparatorScanner`] variant backed by a
/// [`PrefixIndex`] rather than a length-indexed set.
///
/// Useful when the separator set is large and shares long common
/// prefixes — the same case the trie already optimizes
/// for in `PrefixIndex` and `split_common_prefix`. Case-insensitive
/// matching, escapes, and encasings are not supported in this variant;
/// `build` panics if any of
/// [`ScanOptions::case_insensitive`](crate::options::ScanOptions),
/// `escape`, or `encasings` is configured.
#[derive(Debug, Clone)]
pub struct LpmSeparatorScanner {
    separators: PrefixIndex,
    options: ScanOptions,
}

impl LpmSeparatorScanner {
    #[must_use]
    pub fn build<I, S>(separators: I, options: ScanOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        assert!(
            !options.case_insensitive,
            "LpmSeparatorScanner does not support case-insensitive matching"
        );
        assert!(
            options.escape.is_none(),
            "LpmSeparatorScanner does not support escape sequences; use SeparatorScanner"
        );
        assert!(
            options.encasings.is_empty(),
            "LpmSeparatorScanner does not support encasings; use SeparatorScanner"
        );
        Self {
            separators: PrefixIndex::build(separators),
            options,
        }
    }

    #[must_use]
    pub fn scan<'t>(&self, text: &'t str) -> ScanOutcome<'t> {
        let mut i = self.options.start_offset;

        while i < text.len() {
            if let Some(len) = self.accepted_separator_at(text, i) {
                #[cfg(feature = "trace")]
                tracing::trace!(position = i, len, "separator accepted (lpm)");
                return produce(text, i, len, self.options.inclusive);
            }

            i += char_len_at(text, i);
        }

        not_found(text, self.options.consume_remaining_if_not_found)
    }

    fn accepted_separator_at(&self, text: &str, i: usize) -> Option<usize> {
        self.separators
            .prefix_lengths(&text[i..])
            .into_iter()
            .find(|&len| self.accept(text, i, len))
    }

    fn accept(&self, text: &str, i: usize, len: usize) -> bool {
        if self.options.ignore_zero_position_match && i == 0 {
            return false;
        }
        let end = i + len;
        if self.options.must_be_at_end && end != text.len() {
            return false;
        }
        if end != text.len() {
            if let MustBeFollowedBy::Predicate(predicate) = &self.options.must_be_followed_by {
                let Some(next) = text[end..].chars().next() else {
                    return false;
                };
                if !predicate(next) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Encasing;

    fn scanner(separators: &[&str], options: ScanOptions) -> LpmSeparatorScanner {
        LpmSeparatorScanner::build(separators.iter().map(|s| (*s).to_owned()), options)
    }

    #[test]
    fn finds_first_separator() {
        let s = scanner(&[";"], ScanOptions::default());
        let out = s.scan("foo;bar");
        assert_eq!(out.matched, "foo");
        assert_eq!(out.separator, ";");
        assert_eq!(out.remaining, ";bar");
    }

    #[test]
    fn longest_shared_prefix_separator_wins() {
        let s = scanner(&["=", "=="], ScanOptions::default());
        let out = s.scan("a==b");
        assert_eq!(out.separator, "==");
        assert_eq!(out.matched, "a");
    }

    #[test]
    fn must_be_at_end_retries_shorter_candidate_from_the_trie_path() {
        let opts = ScanOptions::builder().must_be_at_end(true).build();
        let s = scanner(&["==", "="], opts);
        let out = s.scan("a==b=");
        assert_eq!(out.separator, "=");
        assert_eq!(out.matched, "a==b");
        assert_eq!(out.remaining, "=");
    }

    #[test]
    fn not_found_without_consume_leaves_text_untouched() {
        let s = scanner(&[";"], ScanOptions::default());
        let out = s.scan("foobar");
        assert!(!out.found);
        assert_eq!(out.remaining, "foobar");
    }

    #[test]
    #[should_panic(expected = "case-insensitive")]
    fn case_insensitive_is_rejected_at_build_time() {
        let opts = ScanOptions::builder().case_insensitive(true).build();
        let _ = scanner(&["AND"], opts);
    }

    #[test]
    #[should_panic(expected = "escape sequences")]
    fn escape_is_rejected_at_build_time() {
        let opts = ScanOptions::builder().escape("\\").build();
        let _ = scanner(&[";"], opts);
    }

    #[test]
    #[should_panic(expected = "encasings")]
    fn encasing_is_rejected_at_build_time() {
        let opts = ScanOptions::builder().encasing(Encasing::new("\"", "\"")).build();
        let _ = scanner(&[";"], opts);
    }
}
