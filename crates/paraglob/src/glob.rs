// SPDX-License-Identifier: MIT

//! Glob pattern decomposition.
//!
//! Splits a glob into its literal affixes (the wildcard-free prefix and
//! suffix) and translates the whole pattern into regex source. Both
//! operate on the pattern text exactly as given.

use memchr::{memchr, memrchr};

const WILDCARD: u8 = b'*';

/// The literal (wildcard-free) prefix and suffix of a glob pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Affixes<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Which trie a fragment is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Prefix,
    Suffix,
}

/// Extract the literal affixes of `pattern`.
///
/// The prefix is everything before the first `*`, the suffix everything
/// after the last `*`. A pattern with no wildcard is its own prefix and
/// suffix in full.
pub(crate) fn affixes(pattern: &str) -> Affixes<'_> {
    let bytes = pattern.as_bytes();
    let prefix = match memchr(WILDCARD, bytes) {
        Some(first) => &pattern[..first],
        None => pattern,
    };
    let suffix = match memrchr(WILDCARD, bytes) {
        Some(last) => &pattern[last + 1..],
        None => pattern,
    };
    Affixes { prefix, suffix }
}

impl<'a> Affixes<'a> {
    /// The fragment to index the pattern by, and the trie it belongs in.
    ///
    /// The longer affix wins; ties (including wildcard-free patterns,
    /// where both affixes are the whole pattern) go to the suffix trie.
    /// This choice decides which trie the pattern is discoverable from,
    /// so it must not drift.
    pub(crate) fn fragment(&self) -> (&'a str, Side) {
        if self.prefix.len() > self.suffix.len() {
            (self.prefix, Side::Prefix)
        } else {
            (self.suffix, Side::Suffix)
        }
    }
}

/// Translate a glob into regex source.
///
/// Each `*` becomes `.*` (any sequence, including empty, not crossing
/// newlines); every other character is copied verbatim. Metacharacters
/// are deliberately NOT escaped: a pattern containing `.`, `[` or `(`
/// has those interpreted by the regex engine. Callers relying on
/// literal-only patterns are unaffected; callers passing metacharacters
/// get regex semantics for them.
pub(crate) fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        if ch == '*' {
            out.push_str(".*");
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
