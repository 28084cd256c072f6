// ==============================================================================
// Separator Scanner (SS)
// ==============================================================================
//
// The byte-stream adapter at the bottom follows a bufio.SplitFunc-style
// contract: it is a pure decision function, not an owned reader loop —
// a host's own buffered reader drives it.

use crate::length_index::LengthIndexedSet;
use crate::options::{MustBeFollowedBy, ScanOptions};

/// The result of one [`SeparatorScanner::scan`] call.
///
/// Every field borrows directly from the `text` passed to `scan`; no
/// field is ever an owned allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome<'t> {
    /// The text before the separator — includes the separator too when
    /// [`ScanOptions`] was built with `inclusive(true)`.
    pub matched: &'t str,
    /// The separator literal as it actually appeared in `text` (same
    /// casing as the input, even under `case_insensitive`).
    pub separator: &'t str,
    /// Starts immediately after the separator when `inclusive`; starts
    /// *at* the separator (so it begins with `separator`) otherwise.
    /// `matched + remaining == text` under `inclusive`; under
    /// non-inclusive, `matched + separator + remaining[separator.len()..] == text`.
    pub remaining: &'t str,
    /// Whether a separator was found at all.
    pub found: bool,
}

/// Scans text for the first accepted occurrence of any literal in a
/// configured separator set, honoring escapes, encasings, and the
/// acceptance filters in [`ScanOptions`].
#[derive(Debug, Clone)]
pub struct SeparatorScanner {
    pub(crate) separators: LengthIndexedSet,
    pub(crate) options: ScanOptions,
}

impl SeparatorScanner {
    #[must_use]
    pub fn build<I, S>(separators: I, options: ScanOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        Self {
            separators: LengthIndexedSet::build(separators, options.case_insensitive),
            options,
        }
    }

    /// Scans `text` once, starting at `ScanOptions::start_offset`, for
    /// the first accepted separator.
    #[must_use]
    pub fn scan<'t>(&self, text: &'t str) -> ScanOutcome<'t> {
        let mut stack: Vec<usize> = Vec::new();
        let mut i = self.options.start_offset;

        while i < text.len() {
            if let Some(&top) = stack.last() {
                i = self.step_inside_encasing(text, i, top, &mut stack);
                continue;
            }

            if let Some(escape) = &self.options.escape {
                if text[i..].starts_with(escape.as_str()) {
                    #[cfg(feature = "trace")]
                    tracing::trace!(position = i, "escape consumed");
                    i = skip_escape(text, i, escape.len());
                    continue;
                }
            }

            if let Some(opened) = self.opening_encasing_at(text, i) {
                let open_len = self.options.encasings[opened].open.len();
                #[cfg(feature = "trace")]
                tracing::trace!(position = i, encasing = opened, "encasing opened");
                stack.push(opened);
                i += open_len;
                continue;
            }

            if let Some(len) = self.accepted_separator_at(text, i) {
                #[cfg(feature = "trace")]
                tracing::trace!(position = i, len, "separator accepted");
                return produce(text, i, len, self.options.inclusive);
            }

            i += char_len_at(text, i);
        }

        not_found(text, self.options.consume_remaining_if_not_found)
    }

    /// Advances the cursor by one step while `stack`'s top frame is
    /// open: escape (only when `escape_breaks_encasing`), then close,
    /// then a nested open (only for a non-self-closing delimiter), then
    /// a bare code point.
    fn step_inside_encasing(&self, text: &str, i: usize, top: usize, stack: &mut Vec<usize>) -> usize {
        if self.options.escape_breaks_encasing {
            if let Some(escape) = &self.options.escape {
                if text[i..].starts_with(escape.as_str()) {
                    return skip_escape(text, i, escape.len());
                }
            }
        }

        let cur = &self.options.encasings[top];
        if text[i..].starts_with(cur.close.as_str()) {
            stack.pop();
            #[cfg(feature = "trace")]
            tracing::trace!(position = i, encasing = top, "encasing closed");
            return i + cur.close.len();
        }

        if cur.nests() {
            if let Some(opened) = self.opening_encasing_at(text, i) {
                stack.push(opened);
                return i + self.options.encasings[opened].open.len();
            }
        }

        i + char_len_at(text, i)
    }

    fn opening_encasing_at(&self, text: &str, i: usize) -> Option<usize> {
        self.options
            .encasings
            .iter()
            .position(|e| text[i..].starts_with(e.open.as_str()))
    }

    /// Tries each configured separator length at `i`, longest first,
    /// retrying the next shorter length at the same position when a
    /// candidate fails an acceptance filter.
    fn accepted_separator_at(&self, text: &str, i: usize) -> Option<usize> {
        let budget = text.len() - i;
        for &len in self.separators.lengths_descending() {
            if len > budget || !text.is_char_boundary(i + len) {
                continue;
            }
            let candidate = &text[i..i + len];
            if !self.separators.contains(len, candidate) {
                continue;
            }
            if self.accept(text, i, len) {
                return Some(len);
            }
        }
        None
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

    /// Iterates `scan` over successive remainders of `text`. See
    /// [`crate::iter::ScanIter`].
    #[must_use]
    pub fn iter<'s, 't>(&'s self, text: &'t str) -> crate::iter::ScanIter<'s, 't> {
        crate::iter::ScanIter::new(self, text)
    }

    /// A pure decision function over a byte buffer, shaped like Go's
    /// `bufio.SplitFunc`: given the bytes read so far and whether this
    /// is the final read, it reports how many bytes to advance the
    /// buffer by and the next token, or `(0, None)` to request more
    /// input. A host's own byte-stream reader drives this loop; this
    /// crate does not own one.
    #[must_use]
    pub fn byte_split<'t>(&self, data: &'t [u8], at_eof: bool) -> (usize, Option<&'t str>) {
        let valid = match std::str::from_utf8(data) {
            Ok(s) => s,
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                if valid_up_to == 0 && !at_eof {
                    return (0, None);
                }
                match std::str::from_utf8(&data[..valid_up_to]) {
                    Ok(s) => s,
                    Err(_) => return (0, None),
                }
            }
        };

        let outcome = self.scan(valid);
        if outcome.found {
            let separator_start = outcome.matched.len() - outcome.separator.len();
            let i = if self.options.inclusive {
                separator_start
            } else {
                outcome.matched.len()
            };
            let advance = i + outcome.separator.len();
            let token_end = if self.options.inclusive { advance } else { i };
            return (advance, Some(&valid[..token_end]));
        }

        if at_eof {
            if valid.is_empty() {
                return (0, None);
            }
            return (valid.len(), Some(valid));
        }

        (0, None)
    }
}

fn skip_escape(text: &str, i: usize, escape_len: usize) -> usize {
    let after = i + escape_len;
    if after >= text.len() {
        return after;
    }
    after + char_len_at(text, after)
}

/// Byte length of the UTF-8 scalar value starting at `i`.
///
/// Every unmatched-position advance goes through this rather than a raw
/// `+= 1`, so the cursor never lands mid-codepoint on multibyte text.
pub(crate) fn char_len_at(text: &str, i: usize) -> usize {
    text[i..].chars().next().map_or(1, char::len_utf8)
}

pub(crate) fn produce<'t>(text: &'t str, i: usize, len: usize, inclusive: bool) -> ScanOutcome<'t> {
    let end = i + len;
    let separator = &text[i..end];
    let (matched, remaining) = if inclusive {
        (&text[..end], &text[end..])
    } else {
        (&text[..i], &text[i..])
    };
    ScanOutcome {
        matched,
        separator,
        remaining,
        found: true,
    }
}

pub(crate) fn not_found(text: &str, consume_remaining: bool) -> ScanOutcome<'_> {
    if consume_remaining {
        ScanOutcome {
            matched: text,
            separator: "",
            remaining: "",
            found: false,
        }
    } else {
        ScanOutcome {
            matched: "",
            separator: "",
            remaining: text,
            found: false,
        }
    }
}
