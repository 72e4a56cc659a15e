//! Parsing color descriptions.

use super::lexicon::classify;
use crate::core::Accumulator;
use crate::{Color, Palette};

/// Split the text into tokens.
///
/// A token is a maximal run of ASCII letters. All other characters separate
/// tokens.
///
/// ```
/// # use colorprose::describe::tokenize;
/// let tokens: Vec<_> = tokenize("light-blue, 2 greens!").collect();
/// assert_eq!(tokens, ["light", "blue", "greens"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
}

/// Parse the color description.
///
/// Each token is either an adjective or a color name. Adjectives add to the
/// lightness and saturation deltas, whereas color names contribute to the mix
/// of colors. Names are looked up case-sensitively, and unknown names
/// contribute the neutral color. The mix then is lightened or darkened, and
/// finally enriched or dullened. Enriched colors are not mapped into gamut,
/// but all others are.
///
/// Since mixing is commutative and deltas are additive, the order of words
/// does not matter.
pub fn parse_description(palette: &Palette, text: &str) -> Color {
    let mut lightness = Accumulator::default();
    let mut saturation = Accumulator::default();
    let mut mixing = Vec::new();

    for token in tokenize(text) {
        if let Some(adjective) = classify(token) {
            lightness += adjective.lightness_delta();
            saturation += adjective.saturation_delta();
        } else if let Some(color) = palette.get(token) {
            mixing.push(*color);
        } else {
            log::trace!("unknown color name {:?} counts as neutral color", token);
            mixing.push(Color::default());
        }
    }

    let base = Color::mix(&mixing);

    let lightness = lightness.total();
    let base = if 0.0 < lightness {
        base.lighten(lightness)
    } else if lightness < 0.0 {
        base.darken(-lightness)
    } else {
        base
    };

    let saturation = saturation.total();
    if 0.0 < saturation {
        base.enrich(saturation)
    } else if saturation < 0.0 {
        base.dullen(-saturation).to_gamut()
    } else {
        base.to_gamut()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_description, tokenize};
    use crate::{assert_same_color, Color, Palette, PaletteBuilder};
    use rand::rngs::StdRng;
    use rand::seq::{IndexedRandom, SliceRandom};
    use rand::SeedableRng;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" -!! 42 ").count(), 0);
        assert_eq!(
            tokenize("dark_red+blue3green").collect::<Vec<_>>(),
            ["dark", "red", "blue", "green"]
        );
        assert_eq!(tokenize("crème").collect::<Vec<_>>(), ["cr", "me"]);
    }

    #[test]
    fn test_neutral() {
        let palette = Palette::standard();
        assert_same_color!(parse_description(palette, ""), Color::default());
        assert_same_color!(
            parse_description(palette, "bogus-punct-only-!!!"),
            Color::default()
        );
        assert_same_color!(parse_description(palette, "light"), Color::default().lighten(0.15));
    }

    #[test]
    fn test_names() {
        let palette = Palette::standard();
        let red = palette.lookup("red");

        assert_same_color!(parse_description(palette, "red"), red.to_gamut());
        assert_same_color!(parse_description(palette, "red"), red);
        assert_same_color!(parse_description(palette, "grey"), palette.lookup("gray"));

        // Lookup is case-sensitive, adjectives are not.
        assert_same_color!(parse_description(palette, "RED"), Color::default());
        assert_same_color!(
            parse_description(palette, "LIGHT red"),
            parse_description(palette, "light red")
        );

        // Unknown names still count towards the mix.
        let half = parse_description(palette, "red bogus");
        assert_same_color!(half, Color::mix(&[red, Color::default()]).to_gamut());
        assert_eq!(half.alpha(), 0.5);
    }

    #[test]
    fn test_order_insensitive() {
        let palette = Palette::standard();
        let expected = parse_description(palette, "dark red blue");
        assert_same_color!(parse_description(palette, "red dark blue"), expected);
        assert_same_color!(parse_description(palette, "blue red dark"), expected);
        assert_same_color!(parse_description(palette, "blue-red-dark"), expected);
    }

    #[test]
    fn test_scenarios() {
        let palette = Palette::standard();
        let red = palette.lookup("red");
        let cyan_blue = Color::mix(&[palette.lookup("cyan"), palette.lookup("blue")]);

        assert_same_color!(
            parse_description(palette, "lighter red"),
            red.to_gamut().lighten(0.30).to_gamut()
        );
        assert_same_color!(
            parse_description(palette, "light light red"),
            parse_description(palette, "lighter red")
        );
        assert_same_color!(
            parse_description(palette, "paler cyan blue"),
            cyan_blue.lighten(0.30).dullen(0.25).to_gamut()
        );
        assert_same_color!(
            parse_description(palette, "palest cyan blue"),
            cyan_blue.lighten(0.45).dullen(0.45).to_gamut()
        );
        assert_same_color!(
            parse_description(palette, "darkest richer navy"),
            palette.lookup("navy").darken(0.45).enrich(0.25)
        );
    }

    #[test]
    fn test_clamping() {
        let loud = Color::oklab(0.7, 0.3, 0.15);
        assert!(!loud.in_gamut());
        let palette = PaletteBuilder::new()
            .color("loud", loud)
            .build()
            .expect("palette is valid");

        // Enriching skips gamut mapping, the other paths do not.
        let rich = parse_description(&palette, "rich loud");
        assert_same_color!(rich, loud.enrich(0.10));
        assert!(!rich.in_gamut());

        let dull = parse_description(&palette, "dull loud");
        assert_same_color!(dull, loud.dullen(0.10).to_gamut());
        assert!(dull.in_gamut());

        let plain = parse_description(&palette, "loud");
        assert_same_color!(plain, loud.to_gamut());
        assert!(plain.in_gamut());

        // Adjectives that cancel each other take the neutral path.
        let both = parse_description(&palette, "rich dull loud");
        assert_same_color!(both, plain);
    }

    #[test]
    fn test_shuffled() {
        let palette = Palette::standard();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let vocabulary = [
            "light", "darker", "rich", "dullest", "pale", "deep", "weaker", "brightest",
        ];
        let names = palette.names_by_hue();

        for _ in 0..50 {
            let mut words: Vec<&str> = vocabulary
                .choose_multiple(&mut rng, 3)
                .copied()
                .collect();
            words.extend(names.choose_multiple(&mut rng, 2).map(String::as_str));

            let expected = parse_description(palette, &words.join(" "));
            words.shuffle(&mut rng);
            assert_same_color!(parse_description(palette, &words.join(" ")), expected);
        }
    }
}
