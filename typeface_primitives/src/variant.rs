// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A 4-byte OpenType tag (for example `smcp`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// Creates a tag from 4 bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Returns this tag as 4 bytes.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        let s = core::str::from_utf8(&bytes).unwrap_or("????");
        f.write_str(s)
    }
}

/// A recognized `fontVariant` feature name.
///
/// Each variant enables one OpenType feature; see
/// <https://docs.microsoft.com/en-us/typography/opentype/spec/featurelist>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FontVariant {
    /// `small-caps` (OpenType `smcp`).
    SmallCaps = 0,
    /// `oldstyle-nums` (OpenType `onum`).
    OldstyleNums = 1,
    /// `lining-nums` (OpenType `lnum`).
    LiningNums = 2,
    /// `tabular-nums` (OpenType `tnum`).
    TabularNums = 3,
    /// `proportional-nums` (OpenType `pnum`).
    ProportionalNums = 4,
}

/// The variant name table: row order matches the enum discriminants.
///
/// Recognizing a new variant is a data change here plus an enum variant.
const ROWS: &[(&str, FontVariant, Tag)] = &[
    ("small-caps", FontVariant::SmallCaps, Tag::from_bytes(*b"smcp")),
    ("oldstyle-nums", FontVariant::OldstyleNums, Tag::from_bytes(*b"onum")),
    ("lining-nums", FontVariant::LiningNums, Tag::from_bytes(*b"lnum")),
    ("tabular-nums", FontVariant::TabularNums, Tag::from_bytes(*b"tnum")),
    (
        "proportional-nums",
        FontVariant::ProportionalNums,
        Tag::from_bytes(*b"pnum"),
    ),
];

impl FontVariant {
    /// Parses a `fontVariant` entry.
    ///
    /// This parser is exact and case-sensitive; unrecognized names yield `None`.
    ///
    /// ```
    /// use typeface_primitives::FontVariant;
    ///
    /// assert_eq!(
    ///     FontVariant::parse("small-caps"),
    ///     Some(FontVariant::SmallCaps)
    /// );
    /// assert_eq!(FontVariant::parse("petite-caps"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        ROWS.iter()
            .find(|(name, _, _)| *name == s)
            .map(|&(_, variant, _)| variant)
    }

    /// Returns the attribute name for this variant.
    pub fn name(self) -> &'static str {
        ROWS[self as usize].0
    }

    /// Returns the OpenType feature tag controlled by this variant.
    pub fn tag(self) -> Tag {
        ROWS[self as usize].2
    }

    /// Returns a slice containing all recognized variants.
    pub const fn all() -> &'static [Self] {
        &[
            Self::SmallCaps,
            Self::OldstyleNums,
            Self::LiningNums,
            Self::TabularNums,
            Self::ProportionalNums,
        ]
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{FontVariant, Tag, ROWS};

    #[test]
    fn rows_align_with_discriminants() {
        for (index, (_, variant, _)) in ROWS.iter().enumerate() {
            assert_eq!(*variant as usize, index);
        }
        assert_eq!(ROWS.len(), FontVariant::all().len());
    }

    #[test]
    fn parse_round_trips_names() {
        for &variant in FontVariant::all() {
            assert_eq!(FontVariant::parse(variant.name()), Some(variant));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(FontVariant::parse("Small-Caps"), None);
        assert_eq!(FontVariant::parse(" small-caps"), None);
        assert_eq!(FontVariant::parse("smcp"), None);
        assert_eq!(FontVariant::parse(""), None);
    }

    #[test]
    fn tags_match_opentype_features() {
        assert_eq!(FontVariant::SmallCaps.tag(), Tag::from_bytes(*b"smcp"));
        assert_eq!(FontVariant::OldstyleNums.tag(), Tag::from_bytes(*b"onum"));
        assert_eq!(FontVariant::LiningNums.tag(), Tag::from_bytes(*b"lnum"));
        assert_eq!(FontVariant::TabularNums.tag(), Tag::from_bytes(*b"tnum"));
        assert_eq!(
            FontVariant::ProportionalNums.tag(),
            Tag::from_bytes(*b"pnum")
        );
    }
}
