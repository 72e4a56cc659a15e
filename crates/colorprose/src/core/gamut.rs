use crate::core::{
    delta_e_ok, normalize, oklab_to_oklch, oklab_to_srgb, oklch_to_oklab, oklch_to_srgb,
    srgb_to_oklab,
};
use crate::Float;

/// The slack for gamut tests, which absorbs error from round-tripping through
/// Oklab.
const GAMUT_SLACK: Float = 1e-6;

/// Determine whether the sRGB coordinates are in gamut.
pub(crate) fn in_gamut(coordinates: &[Float; 3]) -> bool {
    coordinates
        .iter()
        .all(|c| -GAMUT_SLACK <= *c && *c <= 1.0 + GAMUT_SLACK)
}

/// Clip the sRGB coordinates to the gamut.
pub(crate) fn clip(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = coordinates;
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

const JND: Float = 0.02;
const EPSILON: Float = 0.0001;

/// Map the given Oklab coordinates into the sRGB gamut.
///
/// This function implements the CSS Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping). It
/// basically performs a binary search in Oklch for a color with less chroma
/// than the original, whose clipped version is within the *just noticeable
/// difference*. Since, by definition, the clipped version also is in gamut, it
/// becomes the result of the search. Both argument and result are Oklab
/// coordinates.
pub(crate) fn to_gamut(coordinates: &[Float; 3]) -> [Float; 3] {
    let coordinates = normalize(coordinates);

    // Preliminary 1/2: Clamp Lightness
    let origin_as_oklch = oklab_to_oklch(&coordinates);
    let l = origin_as_oklch[0];
    if 1.0 <= l {
        return [1.0, 0.0, 0.0];
    }
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    // Preliminary 2/2: Check gamut
    let origin_as_srgb = oklab_to_srgb(&coordinates);
    if in_gamut(&origin_as_srgb) {
        return coordinates;
    }

    // Goal: Minimize just noticeable difference between current and clipped
    // colors
    let mut current_as_oklch = origin_as_oklch;
    let mut clipped_as_srgb = clip(&origin_as_srgb);

    let difference = delta_e_ok(
        &srgb_to_oklab(&clipped_as_srgb),
        &oklch_to_oklab(&current_as_oklch),
    );

    if difference < JND {
        return srgb_to_oklab(&clipped_as_srgb);
    }

    // Strategy: Binary search by adjusting chroma in Oklch
    let mut min = 0.0;
    let mut max = origin_as_oklch[1];
    let mut min_in_gamut = true;

    while EPSILON < max - min {
        let chroma = (min + max) / 2.0;
        current_as_oklch = [current_as_oklch[0], chroma, current_as_oklch[2]];

        let current_as_srgb = oklch_to_srgb(&current_as_oklch);

        if min_in_gamut && in_gamut(&current_as_srgb) {
            min = chroma;
            continue;
        }

        clipped_as_srgb = clip(&current_as_srgb);

        let difference = delta_e_ok(
            &srgb_to_oklab(&clipped_as_srgb),
            &oklch_to_oklab(&current_as_oklch),
        );

        if difference < JND {
            if JND - difference < EPSILON {
                return srgb_to_oklab(&clipped_as_srgb);
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    srgb_to_oklab(&clipped_as_srgb)
}

#[cfg(test)]
mod test {
    use super::{clip, in_gamut, to_gamut};
    use crate::core::{
        assert_same_coordinates, oklab_to_oklch, oklab_to_srgb, oklch_to_oklab, srgb_to_oklab,
    };
    use crate::Float;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(&[0.0, 0.5, 1.0]));
        assert!(!in_gamut(&[0.0, 0.5, 1.01]));
        assert!(!in_gamut(&[-0.01, 0.5, 1.0]));
        assert_eq!(clip(&[-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_in_gamut_unchanged() {
        let orange = srgb_to_oklab(&[1.0, 0.6, 0.2]);
        assert_same_coordinates!(&to_gamut(&orange), &orange);
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(to_gamut(&[1.2, 0.1, 0.1]), [1.0, 0.0, 0.0]);
        assert_eq!(to_gamut(&[0.0, 0.1, 0.1]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gamut() {
        // A green far more saturated than sRGB allows.
        let green = oklch_to_oklab(&[0.75, 0.35, 145.0]);
        assert!(!in_gamut(&oklab_to_srgb(&green)));

        let mapped = to_gamut(&green);
        assert!(in_gamut(&oklab_to_srgb(&mapped)));

        // Lightness and hue survive, chroma shrinks.
        let [l1, c1, h1] = oklab_to_oklch(&green);
        let [l2, c2, h2] = oklab_to_oklch(&mapped);
        assert!((l1 - l2).abs() < 0.05, "{} vs {}", l1, l2);
        assert!((h1 - h2).abs() < 5.0, "{} vs {}", h1, h2);
        assert!(c2 < c1, "{} vs {}", c2, c1);

        let twice: [Float; 3] = to_gamut(&mapped);
        assert!((twice[1] - mapped[1]).abs() < 1e-6);
    }
}
