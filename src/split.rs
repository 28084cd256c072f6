// ==============================================================================
// Common-Prefix Split (CPS)
// ==============================================================================

use std::collections::HashMap;

use crate::segment::push_segment;
use crate::trie::{PrefixTrie, TrieNode};

/// One input string decomposed into the segment path its trie endpoint
/// recorded.
///
/// **Invariant**: `path.concat() == matched`, byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    pub matched: String,
    pub path: Vec<Box<str>>,
}

/// Splits every string in `literals` into its shared-prefix-tree segment
/// path.
///
/// Output order is unspecified — callers comparing results should sort
/// first. Duplicates in the input produce duplicate output pairs sharing
/// the same `path`.
#[must_use]
pub fn split_common_prefix<S: AsRef<str>>(literals: &[S]) -> Vec<MatchPair> {
    if literals.is_empty() {
        return Vec::new();
    }

    let trie = PrefixTrie::build(literals.iter().map(|s| s.as_ref().to_owned()));

    // The trie node dedups duplicate literals down to one `full`; CPS
    // output must not, so tally how many times each literal occurs in
    // the *original* list and emit that many `MatchPair`s per endpoint.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for literal in literals {
        *counts.entry(literal.as_ref()).or_insert(0) += 1;
    }

    let mut result = Vec::with_capacity(literals.len());
    let mut path = Vec::new();
    collect(trie.root(), &mut path, &counts, &mut result);
    result
}

fn collect(
    node: &TrieNode,
    path: &mut Vec<Box<str>>,
    counts: &HashMap<&str, usize>,
    result: &mut Vec<MatchPair>,
) {
    if !node.segment.is_empty() {
        push_segment(path, &node.segment);
    }

    if let Some(full) = &node.full {
        let occurrences = counts.get(full.as_ref()).copied().unwrap_or(1);
        for _ in 0..occurrences {
            result.push(MatchPair {
                matched: full.to_string(),
                path: path.clone(),
            });
        }
    }

    for child in &node.children {
        collect(child, path, counts, result);
    }

    if !node.segment.is_empty() {
        path.pop();
    }
}
