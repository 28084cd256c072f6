//! Common-prefix splitting, longest-prefix matching, and separator
//! scanning over string sets.
//!
//! This crate is a toolkit of small, independent string-scanning
//! primitives rather than a single API:
//!
//! - [`split_common_prefix`] decomposes a literal set into the shared
//!   path segments of its compressed prefix trie (Common-Prefix
//!   Split).
//! - [`PrefixIndex`] answers "which configured literal is the longest
//!   prefix of this text?" (Longest-Prefix Matcher).
//! - [`PrefixConsumer`] answers the same question without building a
//!   trie, for literal sets that don't share enough structure to be
//!   worth compressing.
//! - [`SeparatorScanner`] repeatedly splits text on a configured
//!   separator set, with escape sequences, encasings, and a handful of
//!   acceptance filters. [`LpmSeparatorScanner`] is the same scanner
//!   backed by a trie lookup instead, for large separator sets that
//!   share long prefixes; it carries the acceptance filters but not the
//!   escape/encasing machinery, which stays `SeparatorScanner`'s alone.
//!
//! None of these own a byte-stream reader: [`SeparatorScanner::byte_split`]
//! exposes the decision function a host's own reader loop can drive,
//! in the shape of Go's `bufio.SplitFunc`, but this crate never reads
//! from an I/O source itself. Likewise, none of these build an HTTP
//! router; they are the string-matching primitives a router would be
//! built on top of, not the router itself.

mod iter;
mod length_index;
mod lpm_scanner;
mod options;
mod prefix_consumer;
mod prefix_index;
mod scanner;
mod segment;
mod split;
mod trie;

pub use iter::{PrefixConsumeIter, ScanIter};
pub use lpm_scanner::LpmSeparatorScanner;
pub use options::{Encasing, MustBeFollowedBy, ScanOptions, ScanOptionsBuilder};
pub use prefix_consumer::{PrefixConsumeOptions, PrefixConsumer};
pub use prefix_index::PrefixIndex;
pub use scanner::{ScanOutcome, SeparatorScanner};
pub use split::{split_common_prefix, MatchPair};
