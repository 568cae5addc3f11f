//! Multi-pattern glob matching backed by dual prefix/suffix tries.
//!
//! Registers glob patterns (literal text plus `*` wildcards) and answers,
//! for an arbitrary needle, how many registered patterns match it. Each
//! pattern is filed into a trie by its longest literal affix, so a match
//! query only runs the regexes of patterns that share a literal prefix or
//! suffix with the needle instead of every registered pattern. Built for
//! workloads that probe one string against thousands of signatures.
//!
//! ```
//! use paraglob::{Encoding, Paraglob};
//!
//! let mut pg: Paraglob = Paraglob::new(Encoding::Ascii);
//! pg.insert("he*", ())?;
//! pg.insert("*book", ())?;
//! assert_eq!(pg.matches("hello"), 1);
//! assert_eq!(pg.matches("facebook"), 1);
//! assert_eq!(pg.matches("ww"), 0);
//! # Ok::<(), paraglob::Error>(())
//! ```
//!
//! Matching is unanchored: a pattern's translated regex counts as a hit
//! when it is found anywhere in the needle, subject to the trie's literal
//! affix constraint. See [`Paraglob::matches`] for the details.

pub mod error;
mod glob;
mod index;
mod trie;

pub use error::{Error, Result};
pub use index::{Encoding, IndexStats, MatchCallback, Paraglob};
pub use trie::TrieStats;
