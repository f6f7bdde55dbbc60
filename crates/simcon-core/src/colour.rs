#![forbid(unsafe_code)]

//! Palette colours, shade rows, and inline format tokens.
//!
//! Colours are palette indices with presentation flags packed into the
//! high bits, matching the game's drawing layer. The console never
//! inspects palette contents; it only strips flags and asks the
//! [`Theme`](crate::host::Theme) for shade rows.

use bitflags::bitflags;

bitflags! {
    /// Presentation flags carried in the high bits of a [`Colour`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColourFlags: u8 {
        /// Draw text with a dark outline.
        const OUTLINE = 1 << 5;
        /// Blend the colour with the pixels behind it.
        const TRANSLUCENT = 1 << 6;
    }
}

/// A palette colour index with optional presentation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour(pub u8);

impl Colour {
    /// The palette's black entry.
    pub const BLACK: Colour = Colour(0);

    /// The palette's white entry, used for the input line.
    pub const WHITE: Colour = Colour(255);

    /// The bare palette index with all flags stripped.
    #[inline]
    #[must_use]
    pub const fn base(self) -> Colour {
        Colour(self.0 & !(ColourFlags::OUTLINE.bits() | ColourFlags::TRANSLUCENT.bits()))
    }

    /// This colour with the translucency flag stripped.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Colour {
        Colour(self.0 & !ColourFlags::TRANSLUCENT.bits())
    }

    /// This colour with the outline flag set.
    #[inline]
    #[must_use]
    pub const fn with_outline(self) -> Colour {
        Colour(self.0 | ColourFlags::OUTLINE.bits())
    }

    /// Check whether a presentation flag is set.
    #[inline]
    #[must_use]
    pub const fn has_flag(self, flag: ColourFlags) -> bool {
        self.0 & flag.bits() != 0
    }
}

/// Shades of one base colour, as looked up from the fixed shade table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourShades {
    /// Lightest shade, used for the caret bar.
    pub lightest: Colour,
    /// Light shade, used for the upper separator lines.
    pub light: Colour,
    /// Mid-dark shade, used for the lower separator lines.
    pub mid_dark: Colour,
}

/// An inline colour-override marker prefixed to log lines.
///
/// Writers pick the token that matches their intent, but storage only
/// distinguishes the default colour from everything else: any override
/// is stored as the same escape text, which the game's text renderer
/// owns and the console passes through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatToken {
    /// The console's default window text colour. Elided when writing
    /// lines, since the renderer's default path already uses it.
    #[default]
    WindowColour2,
    /// Forced black text.
    Black,
    /// Error output.
    Red,
    /// Warning output.
    Yellow,
    /// Confirmation output.
    Green,
}

impl FormatToken {
    /// The escape text prefixed to stored lines carrying this token.
    ///
    /// Empty for the default colour; the fixed override marker for
    /// every other token.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            FormatToken::WindowColour2 => "",
            _ => "{WINDOW_COLOUR_2}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_strips_all_flags() {
        let c = Colour(7).with_outline();
        assert!(c.has_flag(ColourFlags::OUTLINE));
        assert_eq!(c.base(), Colour(7));
    }

    #[test]
    fn opaque_keeps_outline() {
        let c = Colour(7 | ColourFlags::TRANSLUCENT.bits()).with_outline();
        let o = c.opaque();
        assert!(!o.has_flag(ColourFlags::TRANSLUCENT));
        assert!(o.has_flag(ColourFlags::OUTLINE));
    }

    #[test]
    fn override_tokens_share_one_marker() {
        assert_eq!(FormatToken::WindowColour2.marker(), "");
        assert_eq!(FormatToken::Red.marker(), "{WINDOW_COLOUR_2}");
        assert_eq!(FormatToken::Green.marker(), FormatToken::Red.marker());
    }

    proptest! {
        #[test]
        fn prop_base_is_flag_free_and_idempotent(bits in any::<u8>()) {
            let base = Colour(bits).base();
            prop_assert!(!base.has_flag(ColourFlags::OUTLINE));
            prop_assert!(!base.has_flag(ColourFlags::TRANSLUCENT));
            prop_assert_eq!(base.base(), base);
        }

        #[test]
        fn prop_opaque_keeps_outline_and_base(bits in any::<u8>()) {
            let colour = Colour(bits);
            let opaque = colour.opaque();
            prop_assert!(!opaque.has_flag(ColourFlags::TRANSLUCENT));
            prop_assert_eq!(
                opaque.has_flag(ColourFlags::OUTLINE),
                colour.has_flag(ColourFlags::OUTLINE)
            );
            prop_assert_eq!(opaque.base(), colour.base());
        }
    }
}
