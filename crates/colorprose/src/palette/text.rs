//! The plain-text palette listing.
//!
//! A listing has one entry per line. Each entry is either a name followed by
//! white space and a color in any format accepted by [`Color`]'s `FromStr`
//! implementation, or an alias followed by an equal sign and the alias
//! target. Blank lines and lines starting with a semicolon are ignored.
//!
//! ```text
//! ; Two colors and an alias
//! ink   #1c1f26
//! paper oklab(0.97 0 0.01)
//! page = paper
//! ```

use std::str::FromStr;

use super::{Palette, PaletteBuilder};
use crate::error::{PaletteError, PaletteErrorKind};
use crate::Color;

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse a palette listing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::{Color, Palette};
    /// # use colorprose::error::PaletteError;
    /// let palette: Palette = "
    ///     ; Two colors and an alias
    ///     ink   #1c1f26
    ///     paper oklab(0.97 0 0.01)
    ///     page = paper
    /// ".parse()?;
    /// assert_eq!(palette.names_alphabetical(), &["ink", "paper"]);
    /// assert_eq!(palette.lookup("page"), Color::oklab(0.97, 0, 0.01));
    /// # Ok::<(), PaletteError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = PaletteBuilder::new();

        for (index, line) in s.lines().enumerate() {
            let line_number = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some((alias, target)) = line.split_once('=') {
                builder = builder.alias(alias.trim(), target.trim());
                continue;
            }

            let (name, color) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| PaletteError::new(PaletteErrorKind::MalformedLine(line_number)))?;
            let color = Color::from_str(color).map_err(|error| {
                PaletteError::with_source(PaletteErrorKind::ParseColor(line_number), Box::new(error))
            })?;
            builder = builder.color(name, color);
        }

        builder.build()
    }
}

impl std::fmt::Display for Palette {
    /// Format this palette as a listing.
    ///
    /// The listing has the named colors in definition order followed by the
    /// aliases. Colors are formatted with the formatter's precision.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, color) in &self.entries {
            f.write_str(name)?;
            f.write_str(" ")?;
            std::fmt::Display::fmt(color, f)?;
            f.write_str("\n")?;
        }

        for (alias, target) in &self.aliases {
            f.write_fmt(format_args!("{} = {}\n", alias, target))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::error::{ColorFormatError, PaletteError, PaletteErrorKind};
    use crate::{assert_same_color, Color, Palette};
    use std::error::Error;
    use std::str::FromStr;

    #[test]
    fn test_parse() -> Result<(), PaletteError> {
        let palette = Palette::from_str(
            "
            ; Shades of a clear sky
            dawn    #f4c7a1

            noon    oklab(0.8 -0.05 -0.1)
            dusk    oklch(0.4 0.1 290 / 0.5)
            evening = dusk
            ",
        )?;

        assert_eq!(palette.len(), 3);
        assert_same_color!(palette.lookup("dawn"), Color::from_24bit(0xf4, 0xc7, 0xa1));
        assert_same_color!(palette.lookup("noon"), Color::oklab(0.8, -0.05, -0.1));
        assert_eq!(palette.lookup("dusk").alpha(), 0.5);
        assert_same_color!(palette.lookup("evening"), palette.lookup("dusk"));
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        let error = Palette::from_str("red #f00\nblue\n").unwrap_err();
        assert_eq!(error.kind(), &PaletteErrorKind::MalformedLine(2));

        let error = Palette::from_str("red #f00\n\n; blue\nblue #00z\n").unwrap_err();
        assert_eq!(error.kind(), &PaletteErrorKind::ParseColor(4));
        assert_eq!(
            error.source().map(|e| e.to_string()),
            Some(ColorFormatError::MalformedHex.to_string())
        );

        let error = Palette::from_str("red #f00\nred #e00\n").unwrap_err();
        assert_eq!(error.kind(), &PaletteErrorKind::DuplicateName("red".into()));

        let error = Palette::from_str("ruby = red\n").unwrap_err();
        assert_eq!(
            error.kind(),
            &PaletteErrorKind::UnknownAliasTarget("red".into())
        );
    }

    #[test]
    fn test_display() -> Result<(), PaletteError> {
        let palette = Palette::from_str("ink oklab(0.2 0 -0.05)\npaper #fff\npage = paper\n")?;
        let listing = format!("{:.3}", palette);
        assert_eq!(listing, "ink oklab(0.2 0 -0.05)\npaper oklab(1 0 0)\npage = paper\n");

        let again = Palette::from_str(&listing)?;
        assert_eq!(again.names_alphabetical(), palette.names_alphabetical());
        assert_same_color!(again.lookup("page"), Color::oklab(1, 0, 0));
        Ok(())
    }
}
