/// Initial Elo rating assigned to every color at generation time.
/// 1500 is the conventional Elo baseline; deltas of 32-64 per round give
/// a meaningful spread well within 20 rounds.
pub const INITIAL_RATING: f64 = 1500.0;

/// Smallest per-round rating step. K never shrinks below this, so a color
/// with a long history can still move when the user's taste shifts.
pub const K_FLOOR: f64 = 32.0;

/// Starting per-round rating step for a color with no history.
pub const K_BASE: f64 = 64.0;

/// How much K shrinks per recorded comparison round.
/// K reaches the floor after (K_BASE - K_FLOOR) / K_DECAY = 16 rounds.
pub const K_DECAY_PER_COMPARISON: f64 = 2.0;

/// Number of hue buckets the batch selector partitions the wheel into.
pub const HUE_BUCKET_COUNT: usize = 12;

/// Width of one hue bucket in degrees (360 / HUE_BUCKET_COUNT).
pub const HUE_BUCKET_WIDTH_DEGREES: f64 = 30.0;

/// Fraction of the golden ratio used to advance the hue between generated
/// colors. Irrational stepping never revisits a hue and spreads any prefix
/// of the sequence evenly around the wheel, unlike fixed-degree increments
/// which cluster after one lap.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// Saturation levels the generator cycles through, in percent.
pub const SATURATION_LEVELS: [f64; 3] = [65.0, 80.0, 95.0];

/// Lightness levels the generator cycles through, in percent.
/// Length 4 is coprime with the saturation cycle, so the combined
/// (saturation, lightness) pattern only repeats every 12 colors.
pub const LIGHTNESS_LEVELS: [f64; 4] = [40.0, 50.0, 60.0, 70.0];

/// Rounds that must elapse in a session before any elimination pass runs.
pub const ELIMINATION_MIN_ROUNDS: usize = 10;

/// Comparisons a color must have accumulated before it can be eliminated.
/// Protects colors the selector has simply not shown often enough to judge.
pub const ELIMINATION_MIN_COMPARISONS: usize = 8;

/// How far below the active set's 75th-percentile rating a color must fall
/// to be eliminated. 200 points is several losing rounds of headroom even
/// at the K floor.
pub const ELIMINATION_RATING_MARGIN: f64 = 200.0;

/// Rounds that must elapse before favorite promotion is considered.
pub const FAVORITE_MIN_ROUNDS: usize = 20;

/// Comparisons a color needs before it is eligible for favorite promotion.
pub const FAVORITE_MIN_COMPARISONS: usize = 10;

/// Rating lead over the runner-up required for favorite promotion.
pub const FAVORITE_RATING_GAP: f64 = 100.0;

/// Round count at which the current leader is promoted regardless of gap.
pub const FAVORITE_FORCE_ROUND: usize = 25;

/// Default round cap for a session.
pub const DEFAULT_MAX_ROUNDS: usize = 20;

/// Default number of colors presented per round.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Most recent decision latencies retained by session analytics.
pub const LATENCY_LOG_CAP: usize = 50;
