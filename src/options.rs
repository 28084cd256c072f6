// ==============================================================================
// Scanner configuration
// ==============================================================================
//
// A closed, all-fields-defaulted option record plus a fluent builder,
// in the style of `serde`-derived config structs elsewhere in the
// corpus, replacing a scattered functional-options style with a single
// struct callers build once and pass by value.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One side of a paired bracket-like construct — e.g. `("(", ")")` or `("\"", "\"")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encasing {
    pub open: String,
    pub close: String,
}

impl Encasing {
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Whether this encasing nests — a same-delimiter pair like a quote
    /// (`open == close`) never does: the first occurrence of the
    /// delimiter while already inside one always closes it rather than
    /// opening a further nested frame of the same kind.
    pub(crate) fn nests(&self) -> bool {
        self.open != self.close
    }
}

/// What a matched separator must be immediately followed by to be
/// accepted.
///
/// A separator found at the very end of the input (nothing follows it)
/// is always accepted, regardless of this setting.
#[derive(Clone)]
pub enum MustBeFollowedBy {
    /// No constraint on what follows.
    Anything,
    /// The rune immediately after the separator must satisfy this
    /// predicate.
    Predicate(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl MustBeFollowedBy {
    /// Builds a predicate variant from any `Fn(char) -> bool`.
    #[must_use]
    pub fn predicate(f: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }
}

impl fmt::Debug for MustBeFollowedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anything => f.write_str("MustBeFollowedBy::Anything"),
            Self::Predicate(_) => f.write_str("MustBeFollowedBy::Predicate(..)"),
        }
    }
}

impl PartialEq for MustBeFollowedBy {
    /// Two predicates are never considered equal, even the same closure
    /// installed twice; only the no-constraint variant compares equal to
    /// itself. Good enough for tests asserting a builder left this at
    /// its default.
    fn eq(&self, other: &Self) -> bool {
        matches!((self, other), (Self::Anything, Self::Anything))
    }
}

impl Default for MustBeFollowedBy {
    fn default() -> Self {
        Self::Anything
    }
}

/// Configuration for a [`crate::scanner::SeparatorScanner`] or
/// [`crate::lpm_scanner::LpmSeparatorScanner`].
///
/// Construct via [`ScanOptionsBuilder`] rather than literal struct
/// initialization; fields are intentionally `pub(crate)` so the builder
/// is the only entry point and every option's default stays obvious at
/// the call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub(crate) case_insensitive: bool,
    pub(crate) inclusive: bool,
    pub(crate) start_offset: usize,
    pub(crate) ignore_zero_position_match: bool,
    pub(crate) must_be_at_end: bool,
    #[serde(skip, default)]
    pub(crate) must_be_followed_by: MustBeFollowedBy,
    pub(crate) consume_remaining_if_not_found: bool,
    pub(crate) encasings: Vec<Encasing>,
    pub(crate) escape: Option<String>,
    pub(crate) escape_breaks_encasing: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            inclusive: false,
            start_offset: 0,
            ignore_zero_position_match: false,
            must_be_at_end: false,
            must_be_followed_by: MustBeFollowedBy::Anything,
            consume_remaining_if_not_found: false,
            encasings: Vec::new(),
            escape: None,
            escape_breaks_encasing: false,
        }
    }
}

impl ScanOptions {
    #[must_use]
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }
}

/// Fluent builder for [`ScanOptions`].
#[derive(Debug, Clone, Default)]
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}

impl ScanOptionsBuilder {
    #[must_use]
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.options.case_insensitive = yes;
        self
    }

    #[must_use]
    pub fn inclusive(mut self, yes: bool) -> Self {
        self.options.inclusive = yes;
        self
    }

    /// Byte offset the cursor begins at. Must land on a UTF-8 char
    /// boundary of the text passed to `scan`, or the call panics the
    /// same way an out-of-boundary string slice would.
    #[must_use]
    pub fn start_offset(mut self, offset: usize) -> Self {
        self.options.start_offset = offset;
        self
    }

    #[must_use]
    pub fn ignore_zero_position_match(mut self, yes: bool) -> Self {
        self.options.ignore_zero_position_match = yes;
        self
    }

    #[must_use]
    pub fn must_be_at_end(mut self, yes: bool) -> Self {
        self.options.must_be_at_end = yes;
        self
    }

    #[must_use]
    pub fn must_be_followed_by(mut self, constraint: MustBeFollowedBy) -> Self {
        self.options.must_be_followed_by = constraint;
        self
    }

    #[must_use]
    pub fn consume_remaining_if_not_found(mut self, yes: bool) -> Self {
        self.options.consume_remaining_if_not_found = yes;
        self
    }

    #[must_use]
    pub fn encasing(mut self, encasing: Encasing) -> Self {
        self.options.encasings.push(encasing);
        self
    }

    #[must_use]
    pub fn escape(mut self, escape: impl Into<String>) -> Self {
        self.options.escape = Some(escape.into());
        self
    }

    /// Honor `escape` even while inside an open encasing. Off by
    /// default, matching the separator-scanner reading of an escape as
    /// an ordinary-text concern rather than one that pierces an already
    /// open quote or bracket.
    #[must_use]
    pub fn escape_breaks_encasing(mut self, yes: bool) -> Self {
        self.options.escape_breaks_encasing = yes;
        self
    }

    #[must_use]
    #[allow(clippy::panic)] // Intentional: an empty escape/encasing side is a programming error.
    pub fn build(self) -> ScanOptions {
        let options = self.options;
        assert!(
            options.escape.as_deref().is_none_or(|e| !e.is_empty()),
            "escape literal must not be empty"
        );
        assert!(
            options.encasings.iter().all(|e| !e.open.is_empty() && !e.close.is_empty()),
            "encasing start/end must not be empty"
        );
        options
    }
}
