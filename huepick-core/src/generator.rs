/// Candidate pool generation.
///
/// Pure function of the supplied RNG — the engine passes its own; tests pass
/// a seeded one. The RNG is consumed once, for the starting hue, so the exact
/// palette differs between sessions while the distribution shape never does.
use rand::Rng;

use crate::constants::{GOLDEN_RATIO_CONJUGATE, LIGHTNESS_LEVELS, SATURATION_LEVELS};
use crate::types::{ColorId, ColorItem};

/// Generate `count` colors with maximally separated hues and identical
/// initial statistics.
///
/// The hue advances by the golden-ratio conjugate per color, so any prefix of
/// the sequence is spread evenly around the wheel and no two colors ever
/// share a hue. Saturation and lightness cycle level tables of coprime
/// lengths, so consecutive colors differ in all three dimensions. Ids are
/// sequential from zero. `count = 0` yields an empty pool.
pub fn generate_colors(count: usize, rng: &mut impl Rng) -> Vec<ColorItem> {
    let mut items = Vec::with_capacity(count);
    let mut hue_fraction: f64 = rng.random();

    for i in 0..count {
        let hue = hue_fraction * 360.0;
        let saturation = SATURATION_LEVELS[i % SATURATION_LEVELS.len()];
        let lightness = LIGHTNESS_LEVELS[i % LIGHTNESS_LEVELS.len()];
        items.push(ColorItem::new(i as ColorId, hue, saturation, lightness));
        hue_fraction = (hue_fraction + GOLDEN_RATIO_CONJUGATE) % 1.0;
    }

    items
}
