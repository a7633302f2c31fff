/// The session state machine. A `PickSession` owns the candidate pool, runs
/// comparison rounds against batches chosen by the selector, applies the
/// rating rule, and decides elimination, favorite promotion and termination.
///
/// Two states: Active (a batch is live in `evaluating`) and Complete
/// (terminal, empty batch). Configuration problems surface at construction;
/// after that every operation absorbs invalid input as a no-op, including
/// snapshot mismatches, which degrade silently.
///
/// Single-threaded by design. One instance per session; the caller
/// serializes calls.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::analytics::SessionAnalytics;
use crate::constants::{
    ELIMINATION_MIN_COMPARISONS, ELIMINATION_MIN_ROUNDS, ELIMINATION_RATING_MARGIN,
    FAVORITE_FORCE_ROUND, FAVORITE_MIN_COMPARISONS, FAVORITE_MIN_ROUNDS, FAVORITE_RATING_GAP,
    INITIAL_RATING,
};
use crate::error::ConfigError;
use crate::generator::generate_colors;
use crate::rating::pair_deltas;
use crate::selector::select_batch;
use crate::types::{
    ColorId, ColorItem, ColorStatus, ItemSnapshot, SessionConfig, SessionSettings,
    SessionSnapshot,
};

#[derive(Debug)]
pub struct PickSession {
    pool: Vec<ColorItem>,
    /// id -> pool position, so membership checks never scan.
    index: HashMap<ColorId, usize>,
    /// The live batch, in presentation order. Empty exactly when complete.
    evaluating: Vec<ColorId>,
    analytics: SessionAnalytics,
    config: SessionConfig,
    complete: bool,
    /// When the current batch went up, for decision latency.
    last_action: Instant,
    rng: SmallRng,
}

impl PickSession {
    /// Validate the config and start a session with entropy-seeded batches.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::build(config, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Same as [`new`](Self::new) but fully reproducible: a fixed seed
    /// replays the same generated pool and the same batch sequence.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::build(config, SmallRng::seed_from_u64(seed))
    }

    fn build(config: SessionConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = PickSession {
            pool: Vec::new(),
            index: HashMap::new(),
            evaluating: Vec::new(),
            analytics: SessionAnalytics::default(),
            config,
            complete: false,
            last_action: Instant::now(),
            rng,
        };
        session.initialize();
        Ok(session)
    }

    /// Rebuild the pool and start over. Session counters reset; lifetime
    /// totals in the analytics survive.
    pub fn reset(&mut self) {
        self.initialize();
    }

    fn initialize(&mut self) {
        let items = match &self.config.items {
            Some(list) => list.clone(),
            None => generate_colors(self.config.item_count, &mut self.rng),
        };
        self.pool = items;
        self.index = self
            .pool
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id, position))
            .collect();
        self.evaluating.clear();
        self.complete = false;
        self.analytics.reset_session();
        self.last_action = Instant::now();
        self.next_batch();
    }

    /// Advance to the next round: stop at the round cap, run an elimination
    /// pass once enough rounds have accumulated, then select a fresh batch.
    /// An exhausted active set completes the session.
    pub fn next_batch(&mut self) {
        if self.complete {
            return;
        }
        if self.analytics.session_comparisons >= self.config.max_rounds {
            self.finish();
            return;
        }
        if self.analytics.session_comparisons >= ELIMINATION_MIN_ROUNDS {
            self.run_elimination();
        }
        let active: Vec<&ColorItem> = self.pool.iter().filter(|item| item.is_active()).collect();
        if active.is_empty() {
            self.finish();
            return;
        }
        self.evaluating = select_batch(&active, self.config.settings.batch_size, &mut self.rng);
        self.last_action = Instant::now();
    }

    /// Accept a decision: the listed batch members won the round, everyone
    /// else in the batch lost. Ids outside the live batch are ignored; a
    /// list that names no batch member is a no-op. Picking every member
    /// makes the round a pure draw.
    pub fn pick(&mut self, picked: &[ColorId]) {
        if self.complete || self.evaluating.is_empty() {
            return;
        }
        if self.analytics.session_comparisons >= self.config.max_rounds {
            self.finish();
            return;
        }
        let winners: Vec<ColorId> = self
            .evaluating
            .iter()
            .copied()
            .filter(|id| picked.contains(id))
            .collect();
        if winners.is_empty() {
            return;
        }
        let latency = self.take_latency();
        self.apply_round(&winners);
        self.analytics.record_pick(latency);
        self.check_favorite();
        self.next_batch();
    }

    /// Decline the whole batch: every pair in it draws, pulling ratings
    /// together without crowning anyone. Consumes a round like a pick.
    pub fn pass(&mut self) {
        if self.complete || self.evaluating.is_empty() {
            return;
        }
        if self.analytics.session_comparisons >= self.config.max_rounds {
            self.finish();
            return;
        }
        let latency = self.take_latency();
        self.apply_round(&[]);
        self.analytics.record_pass(latency);
        self.next_batch();
    }

    /// Decompose the round into pairs and settle it in one step.
    ///
    /// Deltas are computed against frozen pre-round copies of the batch and
    /// applied together, so pair order inside the round cannot skew anyone's
    /// outcome and co-losers of the same round give up equal amounts.
    /// Counters move once per round: `comparisons` for every member,
    /// `wins`/`losses` only when the round had both sides.
    fn apply_round(&mut self, winners: &[ColorId]) {
        let frozen: Vec<ColorItem> = self
            .evaluating
            .iter()
            .filter_map(|id| self.item(*id).cloned())
            .collect();
        if frozen.is_empty() {
            return;
        }
        let is_winner: Vec<bool> = frozen
            .iter()
            .map(|item| winners.contains(&item.id))
            .collect();
        let decided = !winners.is_empty() && winners.len() < frozen.len();
        let everyone_draws = winners.is_empty() || winners.len() == frozen.len();

        let mut deltas = vec![0.0; frozen.len()];
        for i in 0..frozen.len() {
            for j in (i + 1)..frozen.len() {
                if is_winner[i] == is_winner[j] {
                    // Same side. Co-winners draw; on a pass or an all-picked
                    // batch every pair draws; co-losers otherwise only lose
                    // to the winners.
                    if is_winner[i] || everyone_draws {
                        let (first, second) = pair_deltas(&frozen[i], &frozen[j], true);
                        deltas[i] += first;
                        deltas[j] += second;
                    }
                } else {
                    let (w, l) = if is_winner[i] { (i, j) } else { (j, i) };
                    let (gain, loss) = pair_deltas(&frozen[w], &frozen[l], false);
                    deltas[w] += gain;
                    deltas[l] += loss;
                }
            }
        }

        for (member, delta) in frozen.iter().zip(deltas.iter()) {
            if let Some(position) = self.index.get(&member.id).copied() {
                let item = &mut self.pool[position];
                item.rating += delta;
                item.comparisons += 1;
                if decided {
                    if winners.contains(&item.id) {
                        item.wins += 1;
                    } else {
                        item.losses += 1;
                    }
                }
            }
        }
    }

    /// Retire active colors that have had a fair hearing and still trail the
    /// field badly. The threshold is fixed before any of this round's
    /// eliminations apply.
    fn run_elimination(&mut self) {
        let mut ratings: Vec<f64> = self
            .pool
            .iter()
            .filter(|item| item.is_active())
            .map(|item| item.rating)
            .collect();
        ratings.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        let percentile = if ratings.is_empty() {
            INITIAL_RATING
        } else {
            ratings[ratings.len() / 4]
        };
        let threshold = percentile - ELIMINATION_RATING_MARGIN;

        for item in self.pool.iter_mut().filter(|item| item.is_active()) {
            if item.comparisons >= ELIMINATION_MIN_COMPARISONS && item.rating < threshold {
                item.status = ColorStatus::Eliminated;
            }
        }
    }

    /// Promote the standout leader to favorite, at most one per pick: a
    /// seasoned active color with a clear rating lead over the runner-up,
    /// or whoever tops the seasoned field once the session has dragged on.
    fn check_favorite(&mut self) {
        if self.analytics.session_comparisons < FAVORITE_MIN_ROUNDS {
            return;
        }
        let mut seasoned: Vec<&ColorItem> = self
            .pool
            .iter()
            .filter(|item| item.is_active() && item.comparisons >= FAVORITE_MIN_COMPARISONS)
            .collect();
        if seasoned.is_empty() {
            return;
        }
        seasoned.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

        let leader = seasoned[0];
        let runner_up = seasoned
            .get(1)
            .map(|item| item.rating)
            .unwrap_or(INITIAL_RATING);
        let clear_lead = leader.rating - runner_up > FAVORITE_RATING_GAP;
        let overdue = self.analytics.session_comparisons >= FAVORITE_FORCE_ROUND;

        if clear_lead || overdue {
            let id = leader.id;
            if let Some(position) = self.index.get(&id).copied() {
                self.pool[position].status = ColorStatus::Favorite;
            }
        }
    }

    fn finish(&mut self) {
        self.complete = true;
        self.evaluating.clear();
    }

    fn take_latency(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_action).as_secs_f64();
        self.last_action = now;
        elapsed
    }

    /// The pool ranked by descending rating, truncated to `count`. Includes
    /// every status; read-only and stable, so repeat calls agree.
    pub fn top_colors(&self, count: usize) -> Vec<&ColorItem> {
        let mut ranked: Vec<&ColorItem> = self.pool.iter().collect();
        ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        ranked.truncate(count);
        ranked
    }

    /// Serialize the ranking state. Display attributes stay out: the
    /// snapshot is a ranking record, and whoever persists it already knows
    /// how the pool was built.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            items: self.pool.iter().map(ItemSnapshot::from).collect(),
            evaluating: self.evaluating.clone(),
            favorites: self.ids_with_status(ColorStatus::Favorite),
            eliminated: self.ids_with_status(ColorStatus::Eliminated),
            settings: self.config.settings.clone(),
            analytics: self.analytics.clone(),
            session_complete: self.complete,
        }
    }

    /// Adopt a serialized state: rebuild the pool from the session's own
    /// config, overlay statistics by id, re-tag membership, then re-evaluate
    /// completion. Snapshot ids the pool does not know are dropped, broken
    /// ratings fall back to the initial value, and a round count at or past
    /// the cap outranks the stored completion flag.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) {
        let items = match &self.config.items {
            Some(list) => list.clone(),
            None => generate_colors(self.config.item_count, &mut self.rng),
        };
        self.pool = items;
        self.index = self
            .pool
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id, position))
            .collect();

        for saved in &snapshot.items {
            if let Some(position) = self.index.get(&saved.id).copied() {
                let item = &mut self.pool[position];
                item.rating = if saved.rating.is_finite() {
                    saved.rating
                } else {
                    INITIAL_RATING
                };
                item.wins = saved.wins;
                item.losses = saved.losses;
                item.comparisons = saved.comparisons.max(saved.wins + saved.losses);
            }
        }

        for item in self.pool.iter_mut() {
            item.status = ColorStatus::Active;
        }
        for id in &snapshot.eliminated {
            if let Some(position) = self.index.get(id).copied() {
                self.pool[position].status = ColorStatus::Eliminated;
            }
        }
        for id in &snapshot.favorites {
            if let Some(position) = self.index.get(id).copied() {
                self.pool[position].status = ColorStatus::Favorite;
            }
        }

        if snapshot.settings.batch_size > 0 {
            self.config.settings = snapshot.settings.clone();
        }
        self.analytics = snapshot.analytics.clone();
        self.complete = snapshot.session_complete;
        let evaluating: Vec<ColorId> = snapshot
            .evaluating
            .iter()
            .copied()
            .filter(|id| self.item(*id).map(ColorItem::is_active).unwrap_or(false))
            .collect();
        self.evaluating = evaluating;
        self.last_action = Instant::now();

        if self.analytics.session_comparisons >= self.config.max_rounds {
            self.finish();
        } else if self.complete {
            self.evaluating.clear();
        } else if self.evaluating.is_empty() {
            self.next_batch();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Ids of the live batch, in presentation order.
    pub fn evaluating(&self) -> &[ColorId] {
        &self.evaluating
    }

    /// The live batch as items, in presentation order.
    pub fn current_batch(&self) -> Vec<&ColorItem> {
        self.evaluating
            .iter()
            .filter_map(|id| self.item(*id))
            .collect()
    }

    pub fn item(&self, id: ColorId) -> Option<&ColorItem> {
        self.index.get(&id).map(|&position| &self.pool[position])
    }

    /// Every pool member, in construction order.
    pub fn items(&self) -> &[ColorItem] {
        &self.pool
    }

    pub fn active_count(&self) -> usize {
        self.pool.iter().filter(|item| item.is_active()).count()
    }

    pub fn favorites(&self) -> Vec<&ColorItem> {
        self.with_status(ColorStatus::Favorite)
    }

    pub fn eliminated(&self) -> Vec<&ColorItem> {
        self.with_status(ColorStatus::Eliminated)
    }

    pub fn analytics(&self) -> &SessionAnalytics {
        &self.analytics
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.config.settings
    }

    pub fn max_rounds(&self) -> usize {
        self.config.max_rounds
    }

    fn with_status(&self, status: ColorStatus) -> Vec<&ColorItem> {
        self.pool
            .iter()
            .filter(|item| item.status == status)
            .collect()
    }

    fn ids_with_status(&self, status: ColorStatus) -> Vec<ColorId> {
        self.pool
            .iter()
            .filter(|item| item.status == status)
            .map(|item| item.id)
            .collect()
    }
}
