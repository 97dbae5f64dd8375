// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Visual weight class of a font, on the OpenType scale from 100 to 900.
///
/// In CSS, this corresponds to the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Creates a new weight value.
    pub const fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses a numeric `fontWeight` attribute value.
    ///
    /// A token is valid only if it is exactly three characters, ends in `"00"`, and its first
    /// character is an ASCII digit `'1'`–`'9'`; the parsed weight is 100 times that digit. This
    /// accepts exactly the multiples of 100 in `100..=900` and nothing else.
    ///
    /// The check is exact: no trimming, no case folding, no general integer parse.
    ///
    /// ```
    /// use typeface_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("400"), Some(FontWeight::NORMAL));
    /// assert_eq!(FontWeight::parse("900"), Some(FontWeight::BLACK));
    /// assert_eq!(FontWeight::parse("950"), None);
    /// assert_eq!(FontWeight::parse("bold"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() == 3
            && bytes[1] == b'0'
            && bytes[2] == b'0'
            && (b'1'..=b'9').contains(&bytes[0])
        {
            Some(Self(100 * u16::from(bytes[0] - b'0')))
        } else {
            None
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual slant of a font.
///
/// In CSS, this corresponds to the `font-style` property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// `normal`.
    #[default]
    Normal,
    /// `italic`.
    Italic,
}

impl FontStyle {
    /// Parses a `fontStyle` attribute value.
    ///
    /// This parser is exact and case-sensitive.
    ///
    /// ```
    /// use typeface_primitives::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("normal"), Some(FontStyle::Normal));
    /// assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse("oblique"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "italic" => Some(Self::Italic),
            _ => None,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        })
    }
}

/// The four coarse style buckets understood by platform font derivation.
///
/// Fine-grained numeric weights live outside these buckets; a platform face requested with an
/// exact weight carries its own italic flag instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TypefaceStyle {
    /// Upright, regular weight.
    #[default]
    Normal,
    /// Bold, upright.
    Bold,
    /// Italic, regular weight.
    Italic,
    /// Bold and italic.
    BoldItalic,
}

impl TypefaceStyle {
    /// Builds a style bucket from bold and italic flags.
    pub const fn from_parts(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Self::Normal,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        }
    }

    /// Returns `true` for the bold buckets.
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns `true` for the italic buckets.
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

impl fmt::Display for TypefaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FontStyle, FontWeight, TypefaceStyle};

    #[test]
    fn fontweight_parse_accepts_exact_hundreds() {
        for digit in 1..=9_u16 {
            let mut buf = [b'0'; 3];
            buf[0] = b'0' + digit as u8;
            let s = core::str::from_utf8(&buf).unwrap();
            assert_eq!(FontWeight::parse(s), Some(FontWeight::new(100 * digit)));
        }
    }

    #[test]
    fn fontweight_parse_rejects_everything_else() {
        assert_eq!(FontWeight::parse("950"), None);
        assert_eq!(FontWeight::parse("000"), None);
        assert_eq!(FontWeight::parse("40"), None);
        assert_eq!(FontWeight::parse("4000"), None);
        assert_eq!(FontWeight::parse("a00"), None);
        assert_eq!(FontWeight::parse("4O0"), None);
        assert_eq!(FontWeight::parse(" 400"), None);
        assert_eq!(FontWeight::parse("400 "), None);
        assert_eq!(FontWeight::parse(""), None);
        assert_eq!(FontWeight::parse("normal"), None);
    }

    #[test]
    fn fontweight_parse_is_ascii_only() {
        // Multi-byte input must not satisfy the three-character check.
        assert_eq!(FontWeight::parse("４00"), None);
    }

    #[test]
    fn fontstyle_parse_keywords() {
        assert_eq!(FontStyle::parse("normal"), Some(FontStyle::Normal));
        assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
        assert_eq!(FontStyle::parse("Italic"), None);
        assert_eq!(FontStyle::parse("xyz"), None);
    }

    #[test]
    fn typeface_style_parts() {
        assert_eq!(TypefaceStyle::from_parts(false, false), TypefaceStyle::Normal);
        assert_eq!(TypefaceStyle::from_parts(true, true), TypefaceStyle::BoldItalic);
        assert!(TypefaceStyle::BoldItalic.is_bold());
        assert!(TypefaceStyle::BoldItalic.is_italic());
        assert!(!TypefaceStyle::Italic.is_bold());
        assert!(!TypefaceStyle::Bold.is_italic());
    }
}
