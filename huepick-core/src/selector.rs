/// Diverse-batch selection: pick which colors face each other next.
///
/// The batch has to balance four pulls, in this priority order: fill the
/// requested size, favor well-rated colors without becoming deterministic,
/// spread across the hue wheel, and stay hard to predict round over round.
/// All randomness comes from the caller's generator, so a fixed seed replays
/// the same batches.
use std::cmp::Ordering;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{HUE_BUCKET_COUNT, HUE_BUCKET_WIDTH_DEGREES};
use crate::types::{ColorId, ColorItem};

/// Chance that the very top of the rating order sits a round out.
const TOP_SKIP_PROBABILITY: f64 = 0.6;
/// Largest number of leaders set aside when the skip fires.
const TOP_SKIP_MAX: usize = 3;
/// How many front-runners are offered a seat each round.
const HIGH_RATED_MIN: usize = 2;
const HIGH_RATED_MAX: usize = 3;
/// Chance each offered front-runner actually takes the seat.
const HIGH_RATED_INCLUDE_PROBABILITY: f64 = 0.7;
/// Bucket representatives come from this many of the bucket's best.
const BUCKET_CANDIDATE_DEPTH: usize = 3;

/// Map a hue in degrees onto one of the 12 fixed 30-degree wheel buckets.
pub fn hue_bucket(hue: f64) -> usize {
    ((hue / HUE_BUCKET_WIDTH_DEGREES).floor() as usize) % HUE_BUCKET_COUNT
}

fn sort_by_hue(batch: &mut [&ColorItem]) {
    batch.sort_by(|a, b| a.hue.partial_cmp(&b.hue).unwrap_or(Ordering::Equal));
}

/// Assemble the next batch of `min(size, active.len())` distinct ids from
/// `active`, returned in ascending hue order.
pub fn select_batch(active: &[&ColorItem], size: usize, rng: &mut impl Rng) -> Vec<ColorId> {
    if size == 0 || active.is_empty() {
        return Vec::new();
    }

    // Everything fits: no selection pressure, only presentation order.
    if active.len() <= size {
        let mut batch: Vec<&ColorItem> = active.to_vec();
        sort_by_hue(&mut batch);
        return batch.iter().map(|item| item.id).collect();
    }

    let target = size;

    let mut by_rating: Vec<&ColorItem> = active.to_vec();
    by_rating.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

    // Bucket the wheel; members inherit the descending rating order.
    let mut buckets: Vec<Vec<&ColorItem>> = vec![Vec::new(); HUE_BUCKET_COUNT];
    for &item in &by_rating {
        buckets[hue_bucket(item.hue)].push(item);
    }

    let mut selected: Vec<&ColorItem> = Vec::with_capacity(target);
    let mut taken: HashSet<ColorId> = HashSet::with_capacity(target);
    let mut represented = [false; HUE_BUCKET_COUNT];

    // Usually start a few places down the order so the current leader is not
    // a fixture of every round.
    let skip = if rng.random::<f64>() < TOP_SKIP_PROBABILITY {
        rng.random_range(1..=TOP_SKIP_MAX)
    } else {
        0
    };

    // Seat a couple of front-runners, each on a coin flip.
    let head_count = rng.random_range(HIGH_RATED_MIN..=HIGH_RATED_MAX);
    for &item in by_rating.iter().skip(skip).take(head_count) {
        if selected.len() >= target {
            break;
        }
        if rng.random::<f64>() < HIGH_RATED_INCLUDE_PROBABILITY && taken.insert(item.id) {
            represented[hue_bucket(item.hue)] = true;
            selected.push(item);
        }
    }

    // One representative from each wheel region not already covered, visiting
    // regions in random order so the same hues do not anchor the batch.
    let mut bucket_order: Vec<usize> = (0..HUE_BUCKET_COUNT).collect();
    bucket_order.shuffle(rng);
    for bucket_index in bucket_order {
        if selected.len() >= target {
            break;
        }
        if represented[bucket_index] {
            continue;
        }
        let candidates: Vec<&&ColorItem> = buckets[bucket_index]
            .iter()
            .filter(|item| !taken.contains(&item.id))
            .take(BUCKET_CANDIDATE_DEPTH)
            .collect();
        if candidates.is_empty() {
            continue;
        }
        let choice = *candidates[rng.random_range(0..candidates.len())];
        if taken.insert(choice.id) {
            represented[bucket_index] = true;
            selected.push(choice);
        }
    }

    // Top up from whatever is left, order blind.
    if selected.len() < target {
        let mut rest: Vec<&ColorItem> = active
            .iter()
            .copied()
            .filter(|item| !taken.contains(&item.id))
            .collect();
        rest.shuffle(rng);
        for item in rest {
            if selected.len() >= target {
                break;
            }
            taken.insert(item.id);
            selected.push(item);
        }
    }

    sort_by_hue(&mut selected);
    selected.iter().map(|item| item.id).collect()
}
