//! Colors as words and words as colors.
//!
//! A color description is a sequence of words separated by anything but ASCII
//! letters. Each word is either an adjective or a color name. There are eight
//! [`Family`]s of adjectives, each with four tiers spelled as base word and
//! `-er`, `-est`, and `-most` forms:
//!
//! | Family | Lightness | Saturation |
//! |---|---|---|
//! | light | +0.15, +0.30, +0.45, +0.60 | |
//! | dark | −0.15, −0.30, −0.45, −0.60 | |
//! | rich | | +0.10, +0.25, +0.45, +0.70 |
//! | dull | | −0.10, −0.25, −0.45, −0.70 |
//! | bright | +0.15, +0.30, +0.45, +0.60 | +0.10, +0.20, +0.40, +0.65 |
//! | pale | +0.15, +0.30, +0.45, +0.60 | −0.10, −0.25, −0.45, −0.70 |
//! | deep | −0.15, −0.30, −0.45, −0.60 | +0.10, +0.25, +0.45, +0.70 |
//! | weak | −0.15, −0.30, −0.45, −0.60 | −0.10, −0.25, −0.45, −0.70 |
//!
//! [`parse_description`] mixes the named colors and then adjusts lightness and
//! saturation by the sum of all adjectives' deltas. [`best_match`] goes the
//! other way and searches for the [`Intensity`] and names best approximating a
//! color.
//!
//! Neither function has any shared mutable state. Both are safe to call from
//! several threads at once.

mod lexicon;
mod matcher;
mod parser;
mod phrase;

pub use lexicon::{classify, Adjective, Family};
pub use matcher::{best_match, search, Intensity, Match};
pub use parser::{parse_description, tokenize};
pub use phrase::{lightness_delta, phrase, saturation_delta, NEUTRAL_TIER, TIERS};

#[cfg(test)]
mod test {
    use super::{best_match, parse_description};
    use crate::{Color, Palette};

    #[test]
    fn test_threads() {
        let palette = Palette::standard();
        let descriptions = [
            "light red",
            "darkest richer navy",
            "pale cyan blue",
            "weakmost gold",
            "brighter rose",
            "duller deep teal",
        ];

        let expected: Vec<(Color, String)> = descriptions
            .iter()
            .map(|text| {
                let color = parse_description(palette, text);
                (color, best_match(palette, &color, 1))
            })
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = descriptions
                .iter()
                .map(|text| {
                    scope.spawn(move || {
                        let color = parse_description(palette, text);
                        (color, best_match(palette, &color, 1))
                    })
                })
                .collect();

            for (handle, expected) in handles.into_iter().zip(expected.iter()) {
                let actual = handle.join().expect("thread should not panic");
                assert_eq!(&actual, expected);
            }
        });
    }
}
