// ==============================================================================
// Compressed prefix trie
// ==============================================================================
//
// Shared by `split` (CPS) and `prefix_index` (LPM) so the insertion and
// longest-common-prefix grouping logic exists exactly once.

use std::sync::Arc;

/// One node of a [`PrefixTrie`].
///
/// **Invariant**: no node other than the root has an empty `segment`; no
/// node has two children whose segments start with the same byte; a
/// node with exactly one child and no `full` never exists (segments are
/// always maximal).
#[derive(Debug)]
pub(crate) struct TrieNode {
    pub(crate) segment: Box<str>,
    pub(crate) children: Vec<TrieNode>,
    /// Set when a literal in the built set ends exactly at this node.
    pub(crate) full: Option<Box<str>>,
}

impl TrieNode {
    pub(crate) fn is_end(&self) -> bool {
        self.full.is_some()
    }
}

/// An immutable, compressed (Patricia) prefix trie built once from a
/// fixed literal set.
///
/// Read-only after construction, so it is cheap to share across
/// concurrent readers: clone a [`PrefixTrie`] and every
/// clone points at the same [`Arc`]-owned tree.
#[derive(Debug, Clone)]
pub(crate) struct PrefixTrie {
    root: Arc<TrieNode>,
}

impl PrefixTrie {
    /// Builds a trie from `literals`.
    ///
    /// Linear in the total byte length of `literals` (sorting the copy
    /// dominates).
    pub(crate) fn build<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let mut sorted: Vec<Box<str>> = literals.into_iter().map(Into::into).collect();
        sorted.sort_unstable();

        #[cfg(feature = "trace")]
        tracing::trace!(literal_count = sorted.len(), "building prefix trie");

        let root = build_node(Box::from(""), &sorted, 0, sorted.len(), 0);
        Self {
            root: Arc::new(root),
        }
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}

/// Builds one node covering `sorted[start..end]`, a range whose members
/// all share the byte prefix already consumed up to `depth`. `segment`
/// is this node's own edge label (empty for the root).
fn build_node(segment: Box<str>, sorted: &[Box<str>], start: usize, end: usize, depth: usize) -> TrieNode {
    let mut idx = start;

    // Step 1: absorb literals ending exactly at `depth`.
    let mut full = None;
    while idx < end && sorted[idx].len() == depth {
        full = Some(sorted[idx].clone());
        idx += 1;
    }

    // Steps 2-4: partition the remainder into maximal same-next-byte
    // groups, compute each group's LCP extension from its sorted extremes,
    // and recurse.
    let mut children = Vec::new();
    while idx < end {
        let group_start = idx;
        let first_byte = sorted[idx].as_bytes()[depth];
        idx += 1;
        while idx < end && sorted[idx].len() > depth && sorted[idx].as_bytes()[depth] == first_byte {
            idx += 1;
        }
        let group_end = idx;

        let lcp = common_prefix_len(&sorted[group_start], &sorted[group_end - 1], depth);
        let child_segment = Box::from(&sorted[group_start][depth..depth + lcp]);

        #[cfg(feature = "trace")]
        tracing::trace!(segment = %child_segment, depth, "trie node");

        children.push(build_node(child_segment, sorted, group_start, group_end, depth + lcp));
    }

    TrieNode {
        segment,
        children,
        full,
    }
}

/// Length of the shared byte prefix of `a` and `b`, measured from `from`.
///
/// Correct as the whole group's LCP because `a`/`b` are the first/last
/// elements of a sorted range that all share the prefix up to `from`.
fn common_prefix_len(a: &str, b: &str, from: usize) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let max = a.len().min(b.len());
    let mut k = from;
    while k < max && a[k] == b[k] {
        k += 1;
    }
    k - from
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_segments(trie: &PrefixTrie) -> Vec<&str> {
        let mut segs: Vec<&str> = trie.root().children.iter().map(|c| &*c.segment).collect();
        segs.sort_unstable();
        segs
    }

    #[test]
    fn empty_set_has_bare_root() {
        let trie = PrefixTrie::build(Vec::<&str>::new());
        assert!(!trie.root().is_end());
        assert!(trie.root().children.is_empty());
    }

    #[test]
    fn single_literal_is_one_child() {
        let trie = PrefixTrie::build(["hello"]);
        assert_eq!(trie.root().children.len(), 1);
        assert_eq!(&*trie.root().children[0].segment, "hello");
        assert!(trie.root().children[0].is_end());
    }

    #[test]
    fn no_degree_one_nonterminal_chains() {
        // "AA" is a proper prefix of "AAAA"; the compressed trie must not
        // splinter that into single-byte steps.
        let trie = PrefixTrie::build(["AA", "AAAA"]);
        assert_eq!(trie.root().children.len(), 1);
        let aa = &trie.root().children[0];
        assert_eq!(&*aa.segment, "AA");
        assert!(aa.is_end());
        assert_eq!(aa.children.len(), 1);
        assert_eq!(&*aa.children[0].segment, "AA");
        assert!(aa.children[0].is_end());
    }

    #[test]
    fn branches_on_diverging_suffix() {
        let trie = PrefixTrie::build(["AAB", "ABB"]);
        assert_eq!(child_segments(&trie), vec!["A"]);
        let a = &trie.root().children[0];
        let mut leaf_segs: Vec<&str> = a.children.iter().map(|c| &*c.segment).collect();
        leaf_segs.sort_unstable();
        assert_eq!(leaf_segs, vec!["AB", "BB"]);
    }

    #[test]
    fn duplicates_collapse_to_one_endpoint() {
        let trie = PrefixTrie::build(["AAA", "AAA"]);
        assert_eq!(trie.root().children.len(), 1);
        assert!(trie.root().children[0].is_end());
        assert_eq!(trie.root().children[0].full.as_deref(), Some("AAA"));
    }

    #[test]
    fn empty_literal_marks_root_as_end() {
        let trie = PrefixTrie::build([""]);
        assert!(trie.root().is_end());
        assert!(trie.root().children.is_empty());
    }
}
