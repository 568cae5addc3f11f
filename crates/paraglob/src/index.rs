// SPDX-License-Identifier: MIT

//! The paraglob index: pattern registration and matching.

use regex::Regex;

use crate::error::{Error, Result};
use crate::glob::{self, Side};
use crate::trie::{Entry, Trie, TrieStats};

/// Byte interpretation mode for patterns and needles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Plain byte/ASCII interpretation.
    #[default]
    Ascii,
}

/// Called once per matching entry with the original pattern text and a
/// reference to the value it was registered with.
pub type MatchCallback<V> = Box<dyn Fn(&str, &V) + Send + Sync>;

/// A multi-pattern glob index.
///
/// Patterns are registered with [`insert`](Paraglob::insert) and probed
/// with [`matches`](Paraglob::matches). `V` is an opaque per-pattern
/// value handed back through the match callback; the index only ever
/// drops the `V` it was given, so callers that keep ownership elsewhere
/// register an `Arc`, a `&'static` reference, or an id.
///
/// `matches` takes `&self` and `insert` takes `&mut self`: concurrent
/// read-only matching across threads is safe, insertion excludes all
/// other access. Dropping the index releases every trie node, entry,
/// compiled regex, and pattern string.
pub struct Paraglob<V = ()> {
    prefix: Trie<V>,
    suffix: Trie<V>,
    callback: Option<MatchCallback<V>>,
    encoding: Encoding,
}

/// Shape snapshot of both tries, from [`Paraglob::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub prefix: TrieStats,
    pub suffix: TrieStats,
}

impl IndexStats {
    /// Total registered patterns across both tries.
    pub fn patterns(&self) -> u64 {
        self.prefix.patterns + self.suffix.patterns
    }
}

impl<V> Paraglob<V> {
    /// Create an empty index with no match callback.
    pub fn new(encoding: Encoding) -> Self {
        Self::build(encoding, None)
    }

    /// Create an empty index that fires `callback` once per match.
    pub fn with_callback(encoding: Encoding, callback: MatchCallback<V>) -> Self {
        Self::build(encoding, Some(callback))
    }

    fn build(encoding: Encoding, callback: Option<MatchCallback<V>>) -> Self {
        Paraglob {
            prefix: Trie::new(Side::Prefix),
            suffix: Trie::new(Side::Suffix),
            callback,
            encoding,
        }
    }

    /// Register a glob pattern with an associated value.
    ///
    /// The pattern is translated to a regex and compiled before either
    /// trie is touched, so a failed insert leaves no partial state.
    /// Inserting the same pattern twice files two independent entries;
    /// both count on a match.
    pub fn insert(&mut self, pattern: &str, value: V) -> Result<()> {
        let translated = glob::translate(pattern);
        let matcher = Regex::new(&translated).map_err(|source| Error::Compile {
            pattern: pattern.to_string(),
            source,
        })?;
        let (fragment, side) = glob::affixes(pattern).fragment();
        tracing::debug!(pattern, fragment, ?side, "registering pattern");
        let entry = Entry {
            pattern: pattern.to_string(),
            matcher,
            value,
        };
        match side {
            Side::Prefix => self.prefix.insert(fragment, entry),
            Side::Suffix => self.suffix.insert(fragment, entry),
        }
        Ok(())
    }

    /// Count the registered patterns matching `needle`, firing the
    /// callback once per matching entry.
    ///
    /// Both tries are walked against the needle (prefix trie from its
    /// first byte, suffix trie from its last) and every entry met along
    /// a walked path is verified with an unanchored regex search over
    /// the entire needle. A pattern therefore counts when its expansion
    /// occurs anywhere in the needle, provided the needle also carries
    /// the pattern's literal affix at the matching end. Never fails; a
    /// needle nothing was registered for yields 0.
    pub fn matches(&self, needle: &str) -> u64 {
        let callback = self.callback.as_deref();
        let on_match = |entry: &Entry<V>| {
            if let Some(cb) = callback {
                cb(&entry.pattern, &entry.value);
            }
        };
        let hits = self.prefix.walk(needle, on_match) + self.suffix.walk(needle, on_match);
        tracing::trace!(needle, hits, "match complete");
        hits
    }

    /// Shape accounting over both tries.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            prefix: self.prefix.measure(),
            suffix: self.suffix.measure(),
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl<V> Default for Paraglob<V> {
    fn default() -> Self {
        Self::new(Encoding::Ascii)
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
