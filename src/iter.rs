// ==============================================================================
// Iterator adapters
// ==============================================================================
//
// Lazy, restartable iterators over repeated `scan`/`consume` calls.
//
// Two termination edge cases matter here: a not-found call always
// yields its leftover text once more before stopping, and a degenerate
// zero-width match (an empty separator literal) needs special handling
// so it doesn't loop forever. The two iterators resolve that second
// case differently: `ScanIter` still has a separator to report, so it
// drops one code point and keeps going; `PrefixConsumeIter` has nothing
// left to advance past, so it yields the empty match once and stops.

use crate::prefix_consumer::PrefixConsumer;
use crate::scanner::SeparatorScanner;

/// Iterates [`SeparatorScanner::scan`] over successive remainders of
/// `text`, yielding `(matched, separator)` pairs.
///
/// Restartable: cloning mid-iteration and continuing both copies
/// independently works, since all state is a borrowed `&str` slice.
#[derive(Debug, Clone)]
pub struct ScanIter<'s, 't> {
    scanner: &'s SeparatorScanner,
    remaining: Option<&'t str>,
}

impl<'s, 't> ScanIter<'s, 't> {
    pub(crate) fn new(scanner: &'s SeparatorScanner, text: &'t str) -> Self {
        Self {
            scanner,
            remaining: Some(text),
        }
    }
}

impl<'t> Iterator for ScanIter<'_, 't> {
    type Item = (&'t str, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.remaining.take()?;
        let outcome = self.scanner.scan(text);

        if !outcome.found {
            // The leftover is surfaced as-is, even when the scanner's
            // own `consume_remaining_if_not_found` is off and
            // `outcome.matched` is therefore empty. One more call is
            // then needed on an empty remainder before the iteration
            // actually stops, so a single trailing separator always
            // ends in a terminating `("", "")` pair, matching a run
            // that found no separator at all from the start.
            self.remaining = if text.is_empty() { None } else { Some("") };
            return Some((text, ""));
        }

        if outcome.matched.is_empty() && outcome.separator.is_empty() {
            self.remaining = if text.is_empty() {
                None
            } else {
                Some(drop_one_char(text))
            };
            return Some((outcome.matched, outcome.separator));
        }

        // Under inclusive, `remaining` already starts past the separator;
        // otherwise it starts at the separator itself, so drop it before
        // the next call or the same hit would be found again at offset 0.
        self.remaining = Some(if self.scanner.options.inclusive {
            outcome.remaining
        } else {
            &outcome.remaining[outcome.separator.len()..]
        });
        Some((outcome.matched, outcome.separator))
    }
}

/// Iterates [`PrefixConsumer::consume`] over successive remainders of
/// `text`, yielding the matched prefix on each step.
///
/// Unlike [`ScanIter`], a not-found call stops the iteration without
/// yielding — there is no separator to fall back on, so nothing is
/// left to surface. An empty-string literal in the consumer's set
/// produces a zero-width match on every remainder; rather than loop
/// forever, this yields that match once and stops.
#[derive(Debug, Clone)]
pub struct PrefixConsumeIter<'s, 't> {
    consumer: &'s PrefixConsumer,
    remaining: Option<&'t str>,
}

impl<'s, 't> PrefixConsumeIter<'s, 't> {
    pub(crate) fn new(consumer: &'s PrefixConsumer, text: &'t str) -> Self {
        Self {
            consumer,
            remaining: Some(text),
        }
    }
}

impl<'t> Iterator for PrefixConsumeIter<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.remaining.take()?;
        let (matched, rest, found) = self.consumer.consume(text);

        if !found {
            return None;
        }

        if matched.is_empty() {
            // A zero-width match (an empty-string literal) would match
            // again at the same position forever; stop after surfacing
            // it once, matching the Go original's "Empty prefix" case.
            self.remaining = None;
        } else {
            self.remaining = Some(rest);
        }
        Some(matched)
    }
}

fn drop_one_char(text: &str) -> &str {
    let len = text.chars().next().map_or(1, char::len_utf8);
    &text[len..]
}
