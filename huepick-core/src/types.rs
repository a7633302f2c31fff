/// Core data model: colors, their ranking statistics, session configuration,
/// and the snapshot format exchanged with external persistence.
///
/// Colors are identified by `i64` IDs that stay stable across snapshots.
use crate::constants::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_ROUNDS, INITIAL_RATING};
use crate::error::ConfigError;

/// Stable identity of a color within a session.
pub type ColorId = i64;

/// Membership of a color in the session's disjoint pools.
///
/// Every color is in exactly one status at any time. `Eliminated` and
/// `Favorite` are one-way: a color never returns to `Active` within a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorStatus {
    /// Still competing: eligible for batches, elimination, and promotion.
    Active,
    /// Dropped for sustained low relative rating.
    Eliminated,
    /// Confirmed top preference, removed from further competition.
    Favorite,
}

/// One candidate color: immutable display attributes plus mutable ranking
/// statistics.
///
/// `comparisons` counts the rounds this color participated in. `wins` and
/// `losses` record rounds where it was on the picked or unpicked side of a
/// decided round; draw rounds advance `comparisons` alone, so
/// `wins + losses <= comparisons` always holds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColorItem {
    pub id: ColorId,
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent.
    pub saturation: f64,
    /// Lightness in percent.
    pub lightness: f64,
    pub rating: f64,
    pub comparisons: usize,
    pub wins: usize,
    pub losses: usize,
    pub status: ColorStatus,
}

impl ColorItem {
    /// A fresh color with initial statistics.
    pub fn new(id: ColorId, hue: f64, saturation: f64, lightness: f64) -> Self {
        ColorItem {
            id,
            hue,
            saturation,
            lightness,
            rating: INITIAL_RATING,
            comparisons: 0,
            wins: 0,
            losses: 0,
            status: ColorStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ColorStatus::Active
    }
}

/// Per-session presentation settings. Typed and defaulted — no ad-hoc
/// settings bags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SessionSettings {
    /// Colors presented per round.
    pub batch_size: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Session construction options.
///
/// The pool comes from exactly one of two sources: an explicit item list, or
/// the generator (`generate_items` with `item_count`). Explicit items win
/// when both are supplied. Supplying neither is a configuration error.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Externally supplied pool. Takes precedence over generation.
    pub items: Option<Vec<ColorItem>>,
    /// Generate the pool with the golden-ratio hue walk.
    pub generate_items: bool,
    /// Pool size when generating. Zero yields an immediately complete session.
    pub item_count: usize,
    /// Round cap; the session terminates once this many decisions land.
    pub max_rounds: usize,
    pub settings: SessionSettings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            items: None,
            generate_items: false,
            item_count: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            settings: SessionSettings::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_none() && !self.generate_items {
            return Err(ConfigError::MissingItemSource);
        }
        if self.settings.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        Ok(())
    }
}

/// Per-item ranking statistics as serialized into a snapshot.
///
/// Display attributes are deliberately absent: the engine overlays these
/// statistics onto whatever pool the consumer rebuilds, matching by id.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemSnapshot {
    pub id: ColorId,
    pub rating: f64,
    pub comparisons: usize,
    pub wins: usize,
    pub losses: usize,
}

impl From<&ColorItem> for ItemSnapshot {
    fn from(item: &ColorItem) -> Self {
        ItemSnapshot {
            id: item.id,
            rating: item.rating,
            comparisons: item.comparisons,
            wins: item.wins,
            losses: item.losses,
        }
    }
}

/// Serializable projection of session state — the sole contract with any
/// persistence layer. The engine produces snapshots on demand and consumes
/// them in `restore`; it never touches storage itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SessionSnapshot {
    pub items: Vec<ItemSnapshot>,
    /// Ids of the batch under evaluation, empty when none or complete.
    pub evaluating: Vec<ColorId>,
    pub favorites: Vec<ColorId>,
    pub eliminated: Vec<ColorId>,
    pub settings: SessionSettings,
    pub analytics: crate::analytics::SessionAnalytics,
    pub session_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_has_initial_stats() {
        let item = ColorItem::new(7, 120.0, 80.0, 50.0);
        assert_eq!(item.id, 7);
        assert_eq!(item.rating, INITIAL_RATING);
        assert_eq!(item.comparisons, 0);
        assert_eq!(item.wins, 0);
        assert_eq!(item.losses, 0);
        assert!(item.is_active());
    }

    #[test]
    fn test_config_requires_an_item_source() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Err(ConfigError::MissingItemSource));

        let generated = SessionConfig {
            generate_items: true,
            item_count: 10,
            ..SessionConfig::default()
        };
        assert!(generated.validate().is_ok());

        let explicit = SessionConfig {
            items: Some(vec![ColorItem::new(0, 0.0, 80.0, 50.0)]),
            ..SessionConfig::default()
        };
        assert!(explicit.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_batch_size_and_rounds() {
        let config = SessionConfig {
            generate_items: true,
            item_count: 4,
            settings: SessionSettings { batch_size: 0 },
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBatchSize));

        let config = SessionConfig {
            generate_items: true,
            item_count: 4,
            max_rounds: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxRounds));
    }
}
