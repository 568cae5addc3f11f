// SPDX-License-Identifier: MIT

//! The candidate-narrowing trie.
//!
//! Two of these back every index: a prefix trie consuming fragments and
//! needles left-to-right, and a suffix trie consuming them right-to-left
//! from the last byte. A root-to-node path spells, byte for byte, the
//! literal fragment of every entry stored at that node, so entries are
//! only ever tested against needles that share that affix. The trie
//! enforces this structurally; nothing is re-checked at match time.

use std::collections::BTreeMap;

use regex::Regex;

use crate::glob::Side;

/// One registered pattern: original text, compiled matcher, caller value.
///
/// Immutable once filed; dropped with the node that owns it.
pub(crate) struct Entry<V> {
    pub pattern: String,
    pub matcher: Regex,
    pub value: V,
}

/// Children are keyed by byte value, so duplicate-key siblings cannot
/// exist. The root carries no key of its own.
struct Node<V> {
    entries: Vec<Entry<V>>,
    children: BTreeMap<u8, Node<V>>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Node {
            entries: Vec::new(),
            children: BTreeMap::new(),
        }
    }
}

/// Per-trie shape accounting, exposed through
/// [`IndexStats`](crate::IndexStats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Entries filed in this trie.
    pub patterns: u64,
    /// Node count, root included.
    pub nodes: u64,
    /// Longest root-to-node path.
    pub max_depth: u64,
}

pub(crate) struct Trie<V> {
    side: Side,
    root: Node<V>,
}

impl<V> Trie<V> {
    pub(crate) fn new(side: Side) -> Self {
        Trie {
            side,
            root: Node::new(),
        }
    }

    /// File `entry` at the node spelled by `fragment`, creating nodes as
    /// needed. An empty fragment files the entry at the root.
    pub(crate) fn insert(&mut self, fragment: &str, entry: Entry<V>) {
        let bytes = fragment.as_bytes();
        let side = self.side;
        let mut node = &mut self.root;
        for depth in 0..bytes.len() {
            let key = key_at(side, bytes, depth);
            node = node.children.entry(key).or_insert_with(Node::new);
        }
        node.entries.push(entry);
    }

    /// Walk `needle` through the trie, running every entry met along the
    /// path against the whole needle. Returns the hit count; `on_match`
    /// fires once per hit.
    ///
    /// A missing child ends the walk: no longer fragment can share the
    /// needle's affix once a byte mismatches. Entries at the root are
    /// never tested; the walk only examines nodes it has descended into.
    pub(crate) fn walk<F>(&self, needle: &str, mut on_match: F) -> u64
    where
        F: FnMut(&Entry<V>),
    {
        let bytes = needle.as_bytes();
        let mut node = &self.root;
        let mut hits = 0u64;
        for depth in 0..bytes.len() {
            let key = key_at(self.side, bytes, depth);
            node = match node.children.get(&key) {
                Some(child) => child,
                None => break,
            };
            for entry in &node.entries {
                // Unanchored search over the full needle, not just the
                // consumed affix.
                if entry.matcher.is_match(needle) {
                    hits += 1;
                    on_match(entry);
                }
            }
        }
        hits
    }

    pub(crate) fn measure(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        measure_node(&self.root, 0, &mut stats);
        stats
    }
}

/// Byte consumed at `depth`: left-to-right for the prefix trie,
/// right-to-left from the end for the suffix trie.
fn key_at(side: Side, bytes: &[u8], depth: usize) -> u8 {
    match side {
        Side::Prefix => bytes[depth],
        Side::Suffix => bytes[bytes.len() - 1 - depth],
    }
}

fn measure_node<V>(node: &Node<V>, depth: u64, stats: &mut TrieStats) {
    stats.nodes += 1;
    stats.patterns += node.entries.len() as u64;
    stats.max_depth = stats.max_depth.max(depth);
    for child in node.children.values() {
        measure_node(child, depth + 1, stats);
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
