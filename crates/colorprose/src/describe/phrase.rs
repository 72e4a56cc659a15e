//! The phrase table.
//!
//! The table maps every combination of saturation and lightness tiers to the
//! adjectives producing that adjustment. Each axis has nine tiers, with tier 4
//! neutral and tiers below and above decreasing and increasing the quantity,
//! respectively. The lightness delta grows linearly with distance from the
//! neutral tier, whereas the saturation delta grows quadratically.

use std::sync::OnceLock;

use super::lexicon::{Adjective, Family};
use crate::Float;

/// The number of tiers per axis.
pub const TIERS: usize = 9;

/// The neutral tier.
pub const NEUTRAL_TIER: usize = 4;

/// The lightness delta per tier.
const LIGHTNESS_STEP: Float = 0.15;

/// Get the lightness delta for the tier `0..9`.
pub fn lightness_delta(tier: usize) -> Float {
    (tier.min(TIERS - 1) as Float - NEUTRAL_TIER as Float) * LIGHTNESS_STEP
}

/// Get the saturation delta for the tier `0..9`.
pub fn saturation_delta(tier: usize) -> Float {
    let tier = tier.min(TIERS - 1);
    let magnitude = tier.abs_diff(NEUTRAL_TIER) as Float;
    let delta = magnitude * (magnitude + 3.0) * 0.025;
    if tier < NEUTRAL_TIER {
        -delta
    } else {
        delta
    }
}

/// Get the words for one axis, from most decreasing to most increasing.
fn axis_words(up: Family, down: Family) -> [&'static str; TIERS] {
    let mut words = [""; TIERS];
    for tier in 1..=4_u8 {
        let offset = tier as usize;
        words[NEUTRAL_TIER - offset] = down.word(tier);
        words[NEUTRAL_TIER + offset] = up.word(tier);
    }
    words
}

/// Find the tier whose delta comes closest to the given delta.
fn nearest_tier(delta: Float, tier_delta: fn(usize) -> Float) -> usize {
    (0..TIERS)
        .min_by(|t1, t2| {
            (tier_delta(*t1) - delta)
                .abs()
                .total_cmp(&(tier_delta(*t2) - delta).abs())
        })
        .unwrap_or(NEUTRAL_TIER)
}

/// Determine the saturation and lightness tiers for a correlated adjective.
fn placement(adjective: &Adjective) -> (usize, usize) {
    (
        nearest_tier(adjective.saturation_delta(), saturation_delta),
        nearest_tier(adjective.lightness_delta(), lightness_delta),
    )
}

fn build() -> Vec<String> {
    let lightness = axis_words(Family::Light, Family::Dark);
    let saturation = axis_words(Family::Rich, Family::Dull);

    let mut table = Vec::with_capacity(TIERS * TIERS);
    for saturation_word in saturation {
        for lightness_word in lightness {
            let mut phrase = String::new();
            for word in [lightness_word, saturation_word] {
                if !word.is_empty() {
                    phrase.push_str(word);
                    phrase.push(' ');
                }
            }
            table.push(phrase);
        }
    }

    for family in [Family::Bright, Family::Pale, Family::Deep, Family::Weak] {
        for tier in 1..=4 {
            let adjective = Adjective::new(family, tier);
            let (saturation, lightness) = placement(&adjective);
            if let Some(phrase) = table.get_mut(saturation * TIERS + lightness) {
                *phrase = format!("{} ", adjective.word());
            }
        }
    }

    log::debug!("built phrase table with {} entries", table.len());
    table
}

/// Look up the phrase for the saturation and lightness tiers.
///
/// Non-empty phrases end with a space, so that they can be prepended to color
/// names as is. Tiers outside `0..9` have the empty phrase.
///
/// # Examples
///
/// ```
/// # use colorprose::describe::phrase;
/// assert_eq!(phrase(4, 4), "");
/// assert_eq!(phrase(4, 6), "lighter ");
/// assert_eq!(phrase(1, 6), "lighter dullest ");
/// assert_eq!(phrase(2, 6), "paler ");
/// ```
pub fn phrase(saturation_tier: usize, lightness_tier: usize) -> &'static str {
    static TABLE: OnceLock<Vec<String>> = OnceLock::new();

    if TIERS <= saturation_tier || TIERS <= lightness_tier {
        return "";
    }

    TABLE
        .get_or_init(build)
        .get(saturation_tier * TIERS + lightness_tier)
        .map(String::as_str)
        .unwrap_or("")
}

// ====================================================================================================================
