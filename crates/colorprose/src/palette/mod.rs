//! Named colors.
//!
//! A [`Palette`] maps color names to [`Color`]s. It also maps aliases to the
//! colors of their targets and maintains three orderings of its names, i.e.,
//! alphabetically, by hue, and by lightness. Aliases do not appear in any of
//! the orderings. A palette never changes after construction.
//!
//! [`Palette::standard`] provides the built-in palette. Custom palettes are
//! assembled with a [`PaletteBuilder`] or parsed from a plain-text listing
//! with one name and color per line.

mod standard;
mod text;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::{delta_e_ok, find_closest};
use crate::describe::{best_match, classify, parse_description};
use crate::error::{PaletteError, PaletteErrorKind};
use crate::Color;

/// A palette of named colors.
///
/// # Examples
///
/// ```
/// # use colorprose::{Color, Palette};
/// let palette = Palette::standard();
/// assert_eq!(palette.lookup("red"), Color::from_24bit(0xff, 0, 0));
/// assert_eq!(palette.lookup("grey"), palette.lookup("gray"));
/// assert_eq!(palette.lookup("Red"), Color::default());
/// ```
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<(String, Color)>,
    aliases: Vec<(String, String)>,
    colors: HashMap<String, Color>,
    alphabetical: Vec<String>,
    by_hue: Vec<String>,
    by_lightness: Vec<String>,
}

impl Palette {
    /// Get the standard palette.
    ///
    /// The standard palette comprises some fifty common colors plus
    /// `transparent` and a handful of aliases such as `grey` and `aqua`. It is
    /// created on first use.
    pub fn standard() -> &'static Palette {
        static STANDARD: OnceLock<Palette> = OnceLock::new();

        STANDARD.get_or_init(|| {
            let mut entries: Vec<(String, Color)> = standard::COLORS
                .iter()
                .map(|(name, [r, g, b])| (name.to_string(), Color::from_24bit(*r, *g, *b)))
                .collect();
            entries.push((standard::TRANSPARENT.to_string(), Color::default()));

            let aliases = standard::ALIASES
                .iter()
                .map(|(alias, target)| (alias.to_string(), target.to_string()))
                .collect();

            Palette::assemble(entries, aliases)
        })
    }

    /// Assemble a palette from already validated entries and aliases.
    fn assemble(entries: Vec<(String, Color)>, aliases: Vec<(String, String)>) -> Self {
        let mut colors: HashMap<String, Color> = entries.iter().cloned().collect();
        for (alias, target) in &aliases {
            if let Some(color) = colors.get(target).copied() {
                colors.insert(alias.clone(), color);
            }
        }

        let mut alphabetical: Vec<&(String, Color)> = entries.iter().collect();
        alphabetical.sort_by(|(n1, _), (n2, _)| n1.cmp(n2));

        let mut by_lightness = alphabetical.clone();
        by_lightness.sort_by(|(n1, c1), (n2, c2)| {
            c1.lightness()
                .total_cmp(&c2.lightness())
                .then_with(|| n1.cmp(n2))
        });

        let mut by_hue: Vec<&(String, Color)> = alphabetical
            .iter()
            .copied()
            .filter(|(_, color)| color.alpha() > 0.0)
            .collect();
        by_hue.sort_by(|(n1, c1), (n2, c2)| compare_hue(c1, c2).then_with(|| n1.cmp(n2)));

        fn names(entries: Vec<&(String, Color)>) -> Vec<String> {
            entries.into_iter().map(|(name, _)| name.clone()).collect()
        }

        let palette = Self {
            alphabetical: names(alphabetical),
            by_hue: names(by_hue),
            by_lightness: names(by_lightness),
            entries,
            aliases,
            colors,
        };

        log::debug!(
            "assembled palette with {} colors and {} aliases",
            palette.entries.len(),
            palette.aliases.len()
        );
        palette
    }

    /// Get the number of named colors, not counting aliases.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette has no named colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Determine whether the name is a color or alias in this palette.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Get the color with the given name or alias.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }

    /// Look up the color with the given name or alias.
    ///
    /// Lookup is case-sensitive. Unknown names resolve to the neutral default
    /// color.
    #[inline]
    pub fn lookup(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or_default()
    }

    /// Iterate over the named colors in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), color))
    }

    /// Iterate over the aliases and their colors in definition order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.aliases.iter().filter_map(|(alias, _)| {
            self.colors
                .get(alias)
                .map(|color| (alias.as_str(), color))
        })
    }

    /// Get the name an alias stands for.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, target)| target.as_str())
    }

    /// Get the names in alphabetical order.
    #[inline]
    pub fn names_alphabetical(&self) -> &[String] {
        &self.alphabetical
    }

    /// Get the names ordered by hue.
    ///
    /// Achromatic colors come first, ordered by lightness, followed by
    /// chromatic colors ordered by hue. Fully transparent colors are excluded.
    /// The reverse matcher draws its candidates from this list.
    #[inline]
    pub fn names_by_hue(&self) -> &[String] {
        &self.by_hue
    }

    /// Get the names ordered by lightness.
    #[inline]
    pub fn names_by_lightness(&self) -> &[String] {
        &self.by_lightness
    }

    /// Find the name of the color closest to the given color.
    ///
    /// This method compares colors with Delta-E OK and ignores aliases. It
    /// returns `None` for an empty palette.
    ///
    /// ```
    /// # use colorprose::{Color, Palette};
    /// let almost_red = Color::from_24bit(0xf8, 0x08, 0x04);
    /// assert_eq!(Palette::standard().closest_name(&almost_red), Some("red"));
    /// ```
    pub fn closest_name(&self, color: &Color) -> Option<&str> {
        find_closest(
            color.as_ref(),
            self.entries.iter().map(|(_, color)| color.as_ref()),
            delta_e_ok,
        )
        .and_then(|index| self.entries.get(index))
        .map(|(name, _)| name.as_str())
    }

    /// Parse a color description with this palette's names.
    ///
    /// See [`crate::parse_description`].
    #[inline]
    pub fn parse_description(&self, text: &str) -> Color {
        parse_description(self, text)
    }

    /// Describe the color with this palette's names.
    ///
    /// See [`crate::best_match`].
    #[inline]
    pub fn best_match(&self, color: &Color, mix_count: usize) -> String {
        best_match(self, color, mix_count)
    }
}

/// Order achromatic colors before chromatic ones, the former by lightness and
/// the latter by hue.
fn compare_hue(c1: &Color, c2: &Color) -> Ordering {
    match (c1.is_achromatic(), c2.is_achromatic()) {
        (true, true) => c1.lightness().total_cmp(&c2.lightness()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => c1.hue().total_cmp(&c2.hue()),
    }
}

// ====================================================================================================================

/// A builder of palettes.
///
/// The builder collects named colors and aliases, then validates them while
/// building the palette. Names must be non-empty and contain ASCII letters
/// only, since descriptions treat all other characters as separators. Names
/// must be unique across colors and aliases. Aliases must refer to named
/// colors, not other aliases.
///
/// # Examples
///
/// ```
/// # use colorprose::{Color, PaletteBuilder};
/// # use colorprose::error::PaletteError;
/// let palette = PaletteBuilder::new()
///     .color("ink", Color::oklab(0.2, 0.0, -0.05))
///     .color("paper", Color::oklab(0.95, 0.0, 0.01))
///     .alias("page", "paper")
///     .build()?;
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.lookup("page"), palette.lookup("paper"));
/// # Ok::<(), PaletteError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PaletteBuilder {
    entries: Vec<(String, Color)>,
    aliases: Vec<(String, String)>,
}

impl PaletteBuilder {
    /// Create a new, empty palette builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named color.
    #[must_use = "method consumes and returns the builder"]
    pub fn color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.entries.push((name.into(), color));
        self
    }

    /// Add an alias for a named color.
    #[must_use = "method consumes and returns the builder"]
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Validate the named colors and aliases and build the palette.
    pub fn build(self) -> Result<Palette, PaletteError> {
        let mut seen = std::collections::HashSet::new();

        for name in self
            .entries
            .iter()
            .map(|(name, _)| name)
            .chain(self.aliases.iter().map(|(alias, _)| alias))
        {
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(PaletteError::new(PaletteErrorKind::InvalidName(
                    name.clone(),
                )));
            } else if !seen.insert(name.as_str()) {
                return Err(PaletteError::new(PaletteErrorKind::DuplicateName(
                    name.clone(),
                )));
            } else if let Some(adjective) = classify(name) {
                log::warn!(
                    "color name {:?} reads as adjective {:?} and cannot be described",
                    name,
                    adjective
                );
            }
        }

        for (_, target) in &self.aliases {
            if !self.entries.iter().any(|(name, _)| name == target) {
                return Err(PaletteError::new(PaletteErrorKind::UnknownAliasTarget(
                    target.clone(),
                )));
            }
        }

        Ok(Palette::assemble(self.entries, self.aliases))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{standard, Palette, PaletteBuilder};
    use crate::describe::classify;
    use crate::error::PaletteErrorKind;
    use crate::{assert_same_color, Color};

    #[test]
    fn test_standard_is_valid() {
        let mut builder = PaletteBuilder::new();
        for (name, [r, g, b]) in standard::COLORS {
            builder = builder.color(name, Color::from_24bit(r, g, b));
        }
        builder = builder.color(standard::TRANSPARENT, Color::default());
        for (alias, target) in standard::ALIASES {
            builder = builder.alias(alias, target);
        }

        let palette = builder.build().expect("standard palette should be valid");
        let standard = Palette::standard();
        assert_eq!(palette.len(), standard.len());
        assert_eq!(palette.names_by_hue(), standard.names_by_hue());
    }

    #[test]
    fn test_no_adjectives() {
        let palette = Palette::standard();
        for name in palette.names_alphabetical() {
            assert_eq!(classify(name), None, "{} looks like an adjective", name);
        }
        for (alias, _) in palette.aliases() {
            assert_eq!(classify(alias), None, "{} looks like an adjective", alias);
        }

        // Fourth letter g, but only five letters.
        assert!(palette.contains("beige"));
    }

    #[test]
    fn test_lookup() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 53);
        assert!(!palette.is_empty());

        assert_same_color!(palette.lookup("red"), Color::from_24bit(0xff, 0, 0));
        assert_same_color!(palette.lookup("aqua"), palette.lookup("cyan"));
        assert_eq!(palette.alias_target("aqua"), Some("cyan"));
        assert_eq!(palette.alias_target("cyan"), None);

        assert!(palette.get("Red").is_none());
        assert_same_color!(palette.lookup("Red"), Color::default());
        assert_same_color!(palette.lookup("transparent"), Color::default());
        assert_eq!(palette.aliases().count(), 5);
    }

    #[test]
    fn test_orderings() {
        let palette = Palette::standard();

        let alphabetical = palette.names_alphabetical();
        assert_eq!(alphabetical.len(), 53);
        assert!(alphabetical.windows(2).all(|w| w[0] < w[1]));
        assert!(!alphabetical.iter().any(|n| n == "grey"));

        let by_hue = palette.names_by_hue();
        assert_eq!(by_hue.len(), 52);
        assert!(!by_hue.iter().any(|n| n == "transparent"));
        assert_eq!(
            &by_hue[..5],
            &["black", "charcoal", "gray", "silver", "white"]
        );
        let hues: Vec<_> = by_hue
            .iter()
            .map(|n| palette.lookup(n))
            .skip_while(|c| c.is_achromatic())
            .map(|c| c.hue())
            .collect();
        assert!(hues.windows(2).all(|w| w[0] <= w[1]));

        let by_lightness = palette.names_by_lightness();
        assert_eq!(by_lightness.len(), 53);
        assert_eq!(by_lightness.last().map(String::as_str), Some("white"));
        let lightness: Vec<_> = by_lightness
            .iter()
            .map(|n| palette.lookup(n).lightness())
            .collect();
        assert!(lightness.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_closest_name() {
        let palette = Palette::standard();
        assert_eq!(
            palette.closest_name(&Color::from_24bit(0x00, 0x02, 0xfd)),
            Some("blue")
        );
        assert_eq!(
            palette.closest_name(&Color::from_24bit(0xfe, 0xfe, 0xfe)),
            Some("white")
        );

        let empty = PaletteBuilder::new().build().expect("empty palette is valid");
        assert!(empty.is_empty());
        assert_eq!(empty.closest_name(&Color::default()), None);
    }

    #[test]
    fn test_builder_errors() {
        let red = Color::from_24bit(0xff, 0, 0);

        let error = PaletteBuilder::new()
            .color("light-red", red)
            .build()
            .unwrap_err();
        assert_eq!(
            error.kind(),
            &PaletteErrorKind::InvalidName("light-red".into())
        );

        let error = PaletteBuilder::new().color("", red).build().unwrap_err();
        assert_eq!(error.kind(), &PaletteErrorKind::InvalidName("".into()));

        let error = PaletteBuilder::new()
            .color("red", red)
            .alias("red", "red")
            .build()
            .unwrap_err();
        assert_eq!(error.kind(), &PaletteErrorKind::DuplicateName("red".into()));

        let error = PaletteBuilder::new()
            .color("red", red)
            .alias("ruby", "rubin")
            .build()
            .unwrap_err();
        assert_eq!(
            error.kind(),
            &PaletteErrorKind::UnknownAliasTarget("rubin".into())
        );

        let error = PaletteBuilder::new()
            .color("red", red)
            .alias("ruby", "red")
            .alias("rubin", "ruby")
            .build()
            .unwrap_err();
        assert_eq!(
            error.kind(),
            &PaletteErrorKind::UnknownAliasTarget("ruby".into())
        );
    }
}
