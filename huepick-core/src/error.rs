/// Configuration errors surfaced at session construction.
///
/// This is the engine's only fallible surface. Malformed input after
/// construction (decisions against a missing batch, snapshot ids that match
/// nothing) degrades to a no-op rather than an error.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither an explicit item list nor `generate_items` was supplied.
    #[error("session config needs explicit items or generate_items = true")]
    MissingItemSource,

    /// `batch_size` must be at least 1.
    #[error("batch_size must be greater than zero")]
    ZeroBatchSize,

    /// `max_rounds` must be at least 1.
    #[error("max_rounds must be greater than zero")]
    ZeroMaxRounds,
}
