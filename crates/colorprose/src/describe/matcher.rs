//! Describing colors in words.
//!
//! The reverse matcher performs an exhaustive search. It considers every
//! [`Intensity`] combined with every ordered tuple of palette colors, mixes and
//! adjusts the colors, and keeps the combination closest to the target.

use super::phrase::{lightness_delta, phrase, saturation_delta, NEUTRAL_TIER, TIERS};
use crate::{Color, Float, Palette};

/// A combination of saturation and lightness tiers.
///
/// Intensities are numbered `0..81` by `saturation_tier * 9 +
/// lightness_tier`. The reverse matcher enumerates them in that order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    /// The number of intensities.
    pub const COUNT: usize = TIERS * TIERS;

    /// The intensity that leaves colors unchanged.
    pub const NEUTRAL: Intensity = Intensity((NEUTRAL_TIER * TIERS + NEUTRAL_TIER) as u8);

    /// Create a new intensity from its code `0..81`.
    pub fn new(code: usize) -> Option<Self> {
        if code < Self::COUNT {
            Some(Self(code as u8))
        } else {
            None
        }
    }

    /// Create a new intensity from its saturation and lightness tiers `0..9`.
    pub fn from_tiers(saturation: usize, lightness: usize) -> Option<Self> {
        if saturation < TIERS && lightness < TIERS {
            Self::new(saturation * TIERS + lightness)
        } else {
            None
        }
    }

    /// Iterate over all intensities in order.
    pub fn all() -> impl Iterator<Item = Intensity> {
        (0..Self::COUNT as u8).map(Intensity)
    }

    /// Get the code.
    #[inline]
    pub fn code(&self) -> usize {
        self.0 as usize
    }

    /// Get the saturation tier.
    #[inline]
    pub fn saturation_tier(&self) -> usize {
        self.code() / TIERS
    }

    /// Get the lightness tier.
    #[inline]
    pub fn lightness_tier(&self) -> usize {
        self.code() % TIERS
    }

    /// Get the lightness delta.
    #[inline]
    pub fn lightness_delta(&self) -> Float {
        lightness_delta(self.lightness_tier())
    }

    /// Get the saturation delta.
    #[inline]
    pub fn saturation_delta(&self) -> Float {
        saturation_delta(self.saturation_tier())
    }

    /// Get the phrase describing this intensity.
    #[inline]
    pub fn phrase(&self) -> &'static str {
        phrase(self.saturation_tier(), self.lightness_tier())
    }

    /// Apply this intensity to the color.
    ///
    /// This method first lightens or darkens the color and then enriches or
    /// dullens it. Enriched colors are mapped into gamut, dullened ones are
    /// not. That is the opposite of how [`parse_description`](super::parse_description)
    /// treats them.
    ///
    /// ```
    /// # use colorprose::{Color, describe::Intensity};
    /// let loud = Color::oklab(0.7, 0.3, 0.15);
    /// let richer = Intensity::from_tiers(6, 4).unwrap();
    /// assert!(richer.apply(&loud).in_gamut());
    /// let duller = Intensity::from_tiers(2, 4).unwrap();
    /// assert!(!duller.apply(&loud).in_gamut());
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn apply(&self, color: &Color) -> Color {
        let lightness = self.lightness_delta();
        let color = if 0.0 < lightness {
            color.lighten(lightness)
        } else if lightness < 0.0 {
            color.darken(-lightness)
        } else {
            *color
        };

        let saturation = self.saturation_delta();
        if 0.0 < saturation {
            color.enrich(saturation).to_gamut()
        } else if saturation < 0.0 {
            color.dullen(-saturation)
        } else {
            color
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The winning combination of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    intensity: Intensity,
    indices: Vec<usize>,
    distance: Float,
}

impl Match {
    /// Get the intensity.
    #[inline]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Get the indices into the palette's names by hue, least significant
    /// first.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Get the squared distance to the target.
    #[inline]
    pub fn distance(&self) -> Float {
        self.distance
    }

    /// Format the description with the given names.
    ///
    /// The description is the intensity's phrase followed by the selected
    /// names, least significant first.
    pub fn describe(&self, names: &[String]) -> String {
        let mut description = self.intensity.phrase().to_string();
        for (position, index) in self.indices.iter().enumerate() {
            if 0 < position {
                description.push(' ');
            }
            if let Some(name) = names.get(*index) {
                description.push_str(name);
            }
        }
        description
    }
}

/// Fill the selection with the colors for the tuple.
fn select(candidates: &[Color], tuple: usize, mix_count: usize, selection: &mut Vec<Color>) {
    selection.clear();
    let mut rest = tuple;
    for _ in 0..mix_count {
        selection.push(candidates[rest % candidates.len()]);
        rest /= candidates.len();
    }
}

fn decode(tuple: usize, count: usize, mix_count: usize) -> Vec<usize> {
    let mut rest = tuple;
    (0..mix_count)
        .map(|_| {
            let index = rest % count;
            rest /= count;
            index
        })
        .collect()
}

/// Search for the combination of colors and intensity closest to the target.
///
/// The candidates are the palette's [names by hue](Palette::names_by_hue).
/// The search enumerates intensities in the outer loop and tuples of
/// `mix_count` candidates in the inner loop, with the first tuple element
/// varying fastest. It compares squared distance and keeps the first of
/// several equally close combinations. A `mix_count` of zero is treated as
/// one. The search takes time proportional to `81 * N^mix_count` for `N`
/// candidates.
///
/// This function returns `None` if the palette has no candidates.
pub fn search(palette: &Palette, target: &Color, mix_count: usize) -> Option<Match> {
    let candidates: Vec<Color> = palette
        .names_by_hue()
        .iter()
        .map(|name| palette.lookup(name))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let mix_count = mix_count.max(1);
    let tuples = candidates
        .len()
        .saturating_pow(u32::try_from(mix_count).unwrap_or(u32::MAX));

    let mut selection = Vec::with_capacity(mix_count);
    let mut min_distance = Float::INFINITY;
    let mut winner = None;

    for intensity in Intensity::all() {
        for tuple in 0..tuples {
            select(&candidates, tuple, mix_count, &mut selection);
            let distance = intensity
                .apply(&Color::mix(&selection))
                .distance_squared(target);
            if distance < min_distance {
                min_distance = distance;
                winner = Some((intensity, tuple));
            }
        }
    }

    winner.map(|(intensity, tuple)| Match {
        intensity,
        indices: decode(tuple, candidates.len(), mix_count),
        distance: min_distance,
    })
}

/// Describe the color with the palette's names.
///
/// See [`search`] for the algorithm. The result is a valid description for
/// [`parse_description`](super::parse_description). It is empty if the
/// palette has no candidates.
pub fn best_match(palette: &Palette, target: &Color, mix_count: usize) -> String {
    match search(palette, target, mix_count) {
        Some(winner) => {
            let description = winner.describe(palette.names_by_hue());
            log::debug!(
                "described {} as {:?} at squared distance {}",
                target,
                description,
                winner.distance()
            );
            description
        }
        None => {
            log::warn!("palette has no colors to describe {} with", target);
            String::new()
        }
    }
}

// ====================================================================================================================
