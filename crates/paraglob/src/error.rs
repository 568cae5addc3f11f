/// Paraglob error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The translated glob could not be compiled into a regex matcher.
    ///
    /// Wildcards always translate cleanly; this arises when the pattern
    /// itself carries regex metacharacters that form invalid syntax
    /// (e.g. an unbalanced `[`). The pattern is not registered.
    #[error("pattern {pattern:?} does not compile: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type using paraglob Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
