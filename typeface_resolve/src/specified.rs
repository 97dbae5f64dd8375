// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use typeface_primitives::{FontStyle, FontWeight};

/// A specified `fontWeight` attribute value.
///
/// The `bold` and `normal` keywords remain distinct tokens from their numeric equivalents:
/// `"700"` parses to [`SpecifiedWeight::Exact`], not [`SpecifiedWeight::Bold`]. Downstream
/// resolution treats keyword and exact tokens differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpecifiedWeight {
    /// No weight was specified.
    #[default]
    Unset,
    /// The `normal` keyword.
    Normal,
    /// The `bold` keyword.
    Bold,
    /// An exact numeric weight (a multiple of 100 in `100..=900`).
    Exact(FontWeight),
}

impl SpecifiedWeight {
    /// Parses a `fontWeight` attribute value.
    ///
    /// This parser is total. The keywords map to their tokens; a valid numeric token maps to
    /// [`SpecifiedWeight::Exact`]; anything else — an absent value, an out-of-range number, or
    /// arbitrary text — degrades to [`SpecifiedWeight::Normal`]. The fallback for a failed
    /// numeric parse is deliberately `Normal` rather than `Unset`: an invalid weight attribute
    /// behaves exactly like `"normal"`, it does not behave like a missing attribute.
    ///
    /// ```
    /// use typeface_primitives::FontWeight;
    /// use typeface_resolve::SpecifiedWeight;
    ///
    /// assert_eq!(SpecifiedWeight::parse(None), SpecifiedWeight::Normal);
    /// assert_eq!(SpecifiedWeight::parse(Some("bold")), SpecifiedWeight::Bold);
    /// assert_eq!(
    ///     SpecifiedWeight::parse(Some("500")),
    ///     SpecifiedWeight::Exact(FontWeight::MEDIUM)
    /// );
    /// assert_eq!(SpecifiedWeight::parse(Some("950")), SpecifiedWeight::Normal);
    /// ```
    pub fn parse(source: Option<&str>) -> Self {
        match source {
            Some("bold") => Self::Bold,
            Some("normal") | None => Self::Normal,
            Some(s) => match FontWeight::parse(s) {
                Some(weight) => Self::Exact(weight),
                None => Self::Normal,
            },
        }
    }
}

impl fmt::Display for SpecifiedWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Normal => f.write_str("normal"),
            Self::Bold => f.write_str("bold"),
            Self::Exact(weight) => write!(f, "{weight}"),
        }
    }
}

/// A specified `fontStyle` attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpecifiedStyle {
    /// No style was specified.
    #[default]
    Unset,
    /// The `normal` keyword.
    Normal,
    /// The `italic` keyword.
    Italic,
}

impl SpecifiedStyle {
    /// Parses a `fontStyle` attribute value.
    ///
    /// This parser is total: anything unrecognized — including an absent value — yields
    /// [`SpecifiedStyle::Unset`]. There is no fallback substitution here, in contrast with
    /// [`SpecifiedWeight::parse`].
    ///
    /// ```
    /// use typeface_resolve::SpecifiedStyle;
    ///
    /// assert_eq!(SpecifiedStyle::parse(Some("italic")), SpecifiedStyle::Italic);
    /// assert_eq!(SpecifiedStyle::parse(Some("normal")), SpecifiedStyle::Normal);
    /// assert_eq!(SpecifiedStyle::parse(Some("xyz")), SpecifiedStyle::Unset);
    /// assert_eq!(SpecifiedStyle::parse(None), SpecifiedStyle::Unset);
    /// ```
    pub fn parse(source: Option<&str>) -> Self {
        match source.and_then(FontStyle::parse) {
            Some(FontStyle::Normal) => Self::Normal,
            Some(FontStyle::Italic) => Self::Italic,
            None => Self::Unset,
        }
    }

    /// Returns `true` if this style requests an italic slant.
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic)
    }
}

impl fmt::Display for SpecifiedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unset => "unset",
            Self::Normal => "normal",
            Self::Italic => "italic",
        })
    }
}

#[cfg(test)]
mod tests {
    use typeface_primitives::FontWeight;

    use super::{SpecifiedStyle, SpecifiedWeight};

    #[test]
    fn weight_keywords() {
        assert_eq!(SpecifiedWeight::parse(Some("bold")), SpecifiedWeight::Bold);
        assert_eq!(
            SpecifiedWeight::parse(Some("normal")),
            SpecifiedWeight::Normal
        );
    }

    #[test]
    fn weight_numeric_tokens() {
        assert_eq!(
            SpecifiedWeight::parse(Some("100")),
            SpecifiedWeight::Exact(FontWeight::THIN)
        );
        assert_eq!(
            SpecifiedWeight::parse(Some("400")),
            SpecifiedWeight::Exact(FontWeight::NORMAL)
        );
        assert_eq!(
            SpecifiedWeight::parse(Some("700")),
            SpecifiedWeight::Exact(FontWeight::BOLD)
        );
        assert_eq!(
            SpecifiedWeight::parse(Some("900")),
            SpecifiedWeight::Exact(FontWeight::BLACK)
        );
    }

    #[test]
    fn weight_invalid_input_falls_back_to_normal() {
        // An invalid numeric parse degrades to the normal keyword, not to unset.
        assert_eq!(SpecifiedWeight::parse(None), SpecifiedWeight::Normal);
        assert_eq!(SpecifiedWeight::parse(Some("950")), SpecifiedWeight::Normal);
        assert_eq!(SpecifiedWeight::parse(Some("abc")), SpecifiedWeight::Normal);
        assert_eq!(SpecifiedWeight::parse(Some("40")), SpecifiedWeight::Normal);
        assert_eq!(
            SpecifiedWeight::parse(Some("4000")),
            SpecifiedWeight::Normal
        );
        assert_eq!(SpecifiedWeight::parse(Some("")), SpecifiedWeight::Normal);
        assert_eq!(
            SpecifiedWeight::parse(Some("Bold")),
            SpecifiedWeight::Normal
        );
    }

    #[test]
    fn numeric_keyword_equivalents_stay_distinct_tokens() {
        assert_ne!(
            SpecifiedWeight::parse(Some("700")),
            SpecifiedWeight::parse(Some("bold"))
        );
        assert_ne!(
            SpecifiedWeight::parse(Some("400")),
            SpecifiedWeight::Unset
        );
    }

    #[test]
    fn style_tokens() {
        assert_eq!(SpecifiedStyle::parse(Some("italic")), SpecifiedStyle::Italic);
        assert_eq!(SpecifiedStyle::parse(Some("normal")), SpecifiedStyle::Normal);
        assert_eq!(SpecifiedStyle::parse(Some("xyz")), SpecifiedStyle::Unset);
        assert_eq!(SpecifiedStyle::parse(Some("oblique")), SpecifiedStyle::Unset);
        assert_eq!(SpecifiedStyle::parse(None), SpecifiedStyle::Unset);
    }
}
