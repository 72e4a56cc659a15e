//! The adjective lexicon.
//!
//! Recognizing adjectives is a table lookup. Each family of adjectives has a
//! rule with a lead letter, a probe letter at a fixed offset within the first
//! four letters, and the four lengths of its base word and `-er`, `-est`, and
//! `-most` forms. A token matching lead, probe, and one of the lengths is that
//! family's adjective at the corresponding tier. Letters match ignoring ASCII
//! case.
//!
//! Since the check does not look at all letters, other words with the same
//! shape also count as adjectives. For example, `dirt` reads as `dark`.

use crate::Float;

/// A family of adjectives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Light,
    Dark,
    Rich,
    Dull,
    Bright,
    Pale,
    Deep,
    Weak,
}

impl Family {
    /// All adjective families.
    pub const ALL: [Family; 8] = [
        Family::Light,
        Family::Dark,
        Family::Rich,
        Family::Dull,
        Family::Bright,
        Family::Pale,
        Family::Deep,
        Family::Weak,
    ];

    fn rule(&self) -> &'static Rule {
        &RULES[*self as usize]
    }

    /// Get the word for the given tier `1..=4`.
    ///
    /// Out-of-range tiers are clamped.
    ///
    /// ```
    /// # use colorprose::describe::Family;
    /// assert_eq!(Family::Pale.word(1), "pale");
    /// assert_eq!(Family::Pale.word(3), "palest");
    /// assert_eq!(Family::Bright.word(4), "brightmost");
    /// ```
    pub fn word(&self, tier: u8) -> &'static str {
        self.rule().words[tier_index(tier)]
    }

    /// Determine whether the family changes lightness.
    pub fn changes_lightness(&self) -> bool {
        self.rule().deltas[0].0 != 0.0
    }

    /// Determine whether the family changes saturation.
    pub fn changes_saturation(&self) -> bool {
        self.rule().deltas[0].1 != 0.0
    }
}

#[inline]
fn tier_index(tier: u8) -> usize {
    tier.clamp(1, 4) as usize - 1
}

// --------------------------------------------------------------------------------------------------------------------

/// A recognition rule for one family.
struct Rule {
    family: Family,
    lead: u8,
    probe: (usize, u8),
    lengths: [usize; 4],
    words: [&'static str; 4],
    deltas: [(Float, Float); 4],
}

/// The rules, in the same order as [`Family::ALL`].
const RULES: [Rule; 8] = [
    Rule {
        family: Family::Light,
        lead: b'l',
        probe: (2, b'g'),
        lengths: [5, 7, 8, 9],
        words: ["light", "lighter", "lightest", "lightmost"],
        deltas: [(0.15, 0.0), (0.30, 0.0), (0.45, 0.0), (0.60, 0.0)],
    },
    Rule {
        family: Family::Dark,
        lead: b'd',
        probe: (2, b'r'),
        lengths: [4, 6, 7, 8],
        words: ["dark", "darker", "darkest", "darkmost"],
        deltas: [(-0.15, 0.0), (-0.30, 0.0), (-0.45, 0.0), (-0.60, 0.0)],
    },
    Rule {
        family: Family::Rich,
        lead: b'r',
        probe: (2, b'c'),
        lengths: [4, 6, 7, 8],
        words: ["rich", "richer", "richest", "richmost"],
        deltas: [(0.0, 0.10), (0.0, 0.25), (0.0, 0.45), (0.0, 0.70)],
    },
    Rule {
        family: Family::Dull,
        lead: b'd',
        probe: (2, b'l'),
        lengths: [4, 6, 7, 8],
        words: ["dull", "duller", "dullest", "dullmost"],
        deltas: [(0.0, -0.10), (0.0, -0.25), (0.0, -0.45), (0.0, -0.70)],
    },
    Rule {
        family: Family::Bright,
        lead: b'b',
        probe: (3, b'g'),
        lengths: [6, 8, 9, 10],
        words: ["bright", "brighter", "brightest", "brightmost"],
        deltas: [(0.15, 0.10), (0.30, 0.20), (0.45, 0.40), (0.60, 0.65)],
    },
    Rule {
        family: Family::Pale,
        lead: b'p',
        probe: (2, b'l'),
        lengths: [4, 5, 6, 8],
        words: ["pale", "paler", "palest", "palemost"],
        deltas: [(0.15, -0.10), (0.30, -0.25), (0.45, -0.45), (0.60, -0.70)],
    },
    Rule {
        family: Family::Deep,
        lead: b'd',
        probe: (2, b'e'),
        lengths: [4, 6, 7, 8],
        words: ["deep", "deeper", "deepest", "deepmost"],
        deltas: [(-0.15, 0.10), (-0.30, 0.25), (-0.45, 0.45), (-0.60, 0.70)],
    },
    Rule {
        family: Family::Weak,
        lead: b'w',
        probe: (2, b'a'),
        lengths: [4, 6, 7, 8],
        words: ["weak", "weaker", "weakest", "weakmost"],
        deltas: [(-0.15, -0.10), (-0.30, -0.25), (-0.45, -0.45), (-0.60, -0.70)],
    },
];

impl Rule {
    /// Match the token's shape against this rule, returning the tier.
    fn tier_of(&self, token: &[u8]) -> Option<u8> {
        let letter_at = |index: usize| token.get(index).map(u8::to_ascii_lowercase);

        if letter_at(0) != Some(self.lead) || letter_at(self.probe.0) != Some(self.probe.1) {
            return None;
        }

        self.lengths
            .iter()
            .position(|length| *length == token.len())
            .map(|index| index as u8 + 1)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An adjective's effect, i.e., its family and tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Adjective {
    family: Family,
    tier: u8,
}

impl Adjective {
    /// Create a new adjective. The tier is clamped to `1..=4`.
    pub fn new(family: Family, tier: u8) -> Self {
        Self {
            family,
            tier: tier.clamp(1, 4),
        }
    }

    /// Get the family.
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Get the tier `1..=4`.
    #[inline]
    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// Get the canonical word for this adjective.
    #[inline]
    pub fn word(&self) -> &'static str {
        self.family.word(self.tier)
    }

    /// Get the cumulative lightness delta.
    #[inline]
    pub fn lightness_delta(&self) -> Float {
        self.family.rule().deltas[tier_index(self.tier)].0
    }

    /// Get the cumulative saturation delta.
    #[inline]
    pub fn saturation_delta(&self) -> Float {
        self.family.rule().deltas[tier_index(self.tier)].1
    }
}

/// Classify the token as adjective.
///
/// This function returns `None` if the token is not an adjective and hence
/// should be treated as color name.
///
/// # Examples
///
/// ```
/// # use colorprose::describe::{classify, Adjective, Family};
/// let adjective = classify("Lighter").unwrap();
/// assert_eq!(adjective.family(), Family::Light);
/// assert_eq!(adjective.tier(), 2);
/// assert_eq!(adjective.lightness_delta(), 0.30);
///
/// // Right letters but no tier's length, so a color name.
/// assert_eq!(classify("lights"), None);
/// assert_eq!(classify("red"), None);
///
/// // Recognition goes by shape only.
/// assert_eq!(classify("lightish"), Some(Adjective::new(Family::Light, 3)));
/// ```
pub fn classify(token: &str) -> Option<Adjective> {
    let bytes = token.as_bytes();
    RULES.iter().find_map(|rule| {
        rule.tier_of(bytes).map(|tier| Adjective {
            family: rule.family,
            tier,
        })
    })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{classify, Adjective, Family, RULES};

    #[test]
    fn test_rules() {
        for (index, rule) in RULES.iter().enumerate() {
            assert_eq!(rule.family, Family::ALL[index]);
            assert!(rule.probe.0 < 4);

            for (tier, word) in rule.words.iter().enumerate() {
                assert_eq!(word.len(), rule.lengths[tier], "{}", word);
                assert_eq!(
                    classify(word),
                    Some(Adjective::new(rule.family, tier as u8 + 1)),
                    "{}",
                    word
                );
            }
        }
    }

    #[test]
    fn test_deltas() {
        let expected = [
            (Family::Light, [(0.15, 0.0), (0.30, 0.0), (0.45, 0.0), (0.60, 0.0)]),
            (Family::Dark, [(-0.15, 0.0), (-0.30, 0.0), (-0.45, 0.0), (-0.60, 0.0)]),
            (Family::Rich, [(0.0, 0.10), (0.0, 0.25), (0.0, 0.45), (0.0, 0.70)]),
            (Family::Dull, [(0.0, -0.10), (0.0, -0.25), (0.0, -0.45), (0.0, -0.70)]),
            (Family::Bright, [(0.15, 0.10), (0.30, 0.20), (0.45, 0.40), (0.60, 0.65)]),
            (Family::Pale, [(0.15, -0.10), (0.30, -0.25), (0.45, -0.45), (0.60, -0.70)]),
            (Family::Deep, [(-0.15, 0.10), (-0.30, 0.25), (-0.45, 0.45), (-0.60, 0.70)]),
            (Family::Weak, [(-0.15, -0.10), (-0.30, -0.25), (-0.45, -0.45), (-0.60, -0.70)]),
        ];

        for (family, deltas) in expected {
            for (index, (lightness, saturation)) in deltas.into_iter().enumerate() {
                let word = family.word(index as u8 + 1);
                let adjective = classify(word).expect("word should be adjective");
                assert_eq!(adjective.lightness_delta(), lightness, "{}", word);
                assert_eq!(adjective.saturation_delta(), saturation, "{}", word);
            }
        }
    }

    #[test]
    fn test_tier_stacking() {
        for family in Family::ALL {
            let first = Adjective::new(family, 1);
            let last = Adjective::new(family, 4);
            crate::assert_close_enough!(last.lightness_delta(), 4.0 * first.lightness_delta());

            if family.changes_saturation() {
                let ramp: Vec<_> = (1..=4)
                    .map(|tier| Adjective::new(family, tier).saturation_delta())
                    .collect();
                assert_ne!(ramp[3], 4.0 * ramp[0], "{:?}", family);
                assert!(ramp.windows(2).all(|w| w[0].abs() < w[1].abs()));
            }
        }

        assert!(Family::Light.changes_lightness() && !Family::Light.changes_saturation());
        assert!(!Family::Rich.changes_lightness() && Family::Rich.changes_saturation());
        assert!(Family::Weak.changes_lightness() && Family::Weak.changes_saturation());
    }

    #[test]
    fn test_shapes() {
        // Case does not matter.
        assert_eq!(classify("DARKEST"), Some(Adjective::new(Family::Dark, 3)));
        assert_eq!(classify("PaleMost"), Some(Adjective::new(Family::Pale, 4)));

        // Only the shape matters.
        assert_eq!(classify("dirt"), Some(Adjective::new(Family::Dark, 1)));
        assert_eq!(classify("lagoon"), None);
        assert_eq!(classify("lightly"), Some(Adjective::new(Family::Light, 2)));
        assert_eq!(classify("palish"), Some(Adjective::new(Family::Pale, 3)));
        assert_eq!(classify("lightish"), Some(Adjective::new(Family::Light, 3)));

        // Right lead and probe, wrong length.
        assert_eq!(classify("lights"), None);
        assert_eq!(classify("palette"), None);
        assert_eq!(classify("brightish"), Some(Adjective::new(Family::Bright, 3)));
        assert_eq!(classify("brighty"), None);
        assert_eq!(classify("beige"), None);

        // Too short for the probe.
        assert_eq!(classify("d"), None);
        assert_eq!(classify("br"), None);
        assert_eq!(classify(""), None);

        // Not ASCII.
        assert_eq!(classify("dérk"), None);
    }
}
