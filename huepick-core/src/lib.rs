/// huepick-core: Pure-computation color preference engine.
///
/// Batched comparisons → adaptive Elo ratings → a ranked palette, favorites
/// and eliminations included. No IO, no HTTP, no filesystem — just math.
/// Bring your own chooser.
///
/// Items are identified by caller-provided `i64` IDs. The crate handles the
/// internal mapping to efficient array indices — callers never think about
/// indices.
///
/// # Quick start
///
/// ```rust
/// use huepick_core::{PickSession, SessionConfig};
///
/// let config = SessionConfig {
///     generate_items: true,
///     item_count: 24,
///     max_rounds: 20,
///     ..SessionConfig::default()
/// };
///
/// let mut session = PickSession::with_seed(config, 7).expect("valid config");
///
/// while !session.is_complete() {
///     // Whatever the chooser likes this round; here, the first swatch.
///     let choice = session.evaluating()[0];
///     session.pick(&[choice]);
/// }
///
/// for color in session.top_colors(5) {
///     println!(
///         "hsl({:.0}, {:.0}%, {:.0}%) rating {:.0}",
///         color.hue, color.saturation, color.lightness, color.rating
///     );
/// }
/// ```

pub mod analytics;
pub mod constants;
pub mod error;
pub mod generator;
pub mod rating;
pub mod selector;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use analytics::SessionAnalytics;
pub use error::ConfigError;
pub use generator::generate_colors;
pub use rating::{expected_score, k_factor, pair_deltas, update};
pub use selector::{hue_bucket, select_batch};
pub use session::PickSession;
pub use types::{
    ColorId, ColorItem, ColorStatus, ItemSnapshot, SessionConfig, SessionSettings,
    SessionSnapshot,
};
