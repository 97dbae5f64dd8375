// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use typeface_primitives::FontVariant;

/// Converts a `fontVariant` attribute list into a CSS `font-feature-settings` string.
///
/// Recognized entries are mapped through the [`FontVariant`] table; unrecognized entries are
/// silently dropped while input order is preserved. The resulting tags are single-quoted and
/// joined with `", "`.
///
/// A missing or empty list yields `None` (an absent setting, not an empty string). A non-empty
/// list whose entries are all unrecognized yields `Some("")`.
///
/// ```
/// use typeface_resolve::font_feature_settings;
///
/// let variants: &[&str] = &["small-caps", "tabular-nums"];
/// assert_eq!(
///     font_feature_settings(Some(variants)),
///     Some("'smcp', 'tnum'".into())
/// );
///
/// let empty: &[&str] = &[];
/// assert_eq!(font_feature_settings(Some(empty)), None);
/// assert_eq!(font_feature_settings::<&str>(None), None);
/// ```
pub fn font_feature_settings<S: AsRef<str>>(variants: Option<&[S]>) -> Option<String> {
    let variants = variants?;
    if variants.is_empty() {
        return None;
    }
    let features: Vec<String> = variants
        .iter()
        .filter_map(|name| FontVariant::parse(name.as_ref()))
        .map(|variant| format!("'{}'", variant.tag()))
        .collect();
    Some(features.join(", "))
}

#[cfg(test)]
mod tests {
    use super::font_feature_settings;

    fn settings(variants: &[&str]) -> Option<alloc::string::String> {
        font_feature_settings(Some(variants))
    }

    #[test]
    fn absent_and_empty_input_yield_none() {
        assert_eq!(font_feature_settings::<&str>(None), None);
        assert_eq!(settings(&[]), None);
    }

    #[test]
    fn maps_names_in_input_order() {
        assert_eq!(
            settings(&["small-caps", "tabular-nums"]),
            Some("'smcp', 'tnum'".into())
        );
        assert_eq!(
            settings(&["tabular-nums", "small-caps"]),
            Some("'tnum', 'smcp'".into())
        );
        assert_eq!(
            settings(&["oldstyle-nums", "lining-nums", "proportional-nums"]),
            Some("'onum', 'lnum', 'pnum'".into())
        );
    }

    #[test]
    fn unrecognized_entries_are_dropped() {
        assert_eq!(
            settings(&["small-caps", "petite-caps", "tabular-nums"]),
            Some("'smcp', 'tnum'".into())
        );
        // All entries dropped: the join of an empty list, not an absent result.
        assert_eq!(settings(&["unknown"]), Some("".into()));
    }

    #[test]
    fn duplicate_entries_are_kept() {
        assert_eq!(
            settings(&["small-caps", "small-caps"]),
            Some("'smcp', 'smcp'".into())
        );
    }
}
