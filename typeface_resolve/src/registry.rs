// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use typeface_primitives::{FontWeight, TypefaceStyle};

use crate::SpecifiedWeight;

/// A platform font registry, the collaborator consumed by
/// [`resolve_typeface`](crate::resolve_typeface).
///
/// Implementations own family lookup, caching, and missing-family fallback policy. Every
/// operation is assumed total: a registry never fails the caller, it returns *some* font.
pub trait FontRegistry {
    /// The concrete font object produced by this registry.
    type Font: Clone;

    /// The source from which font assets are loaded during family resolution.
    type Assets: ?Sized;

    /// Returns the coarse style of an existing font.
    fn style_of(&self, font: &Self::Font) -> TypefaceStyle;

    /// Derives a font with the given coarse style, from `base` when present or from the
    /// platform default face otherwise.
    fn derive(&self, base: Option<&Self::Font>, style: TypefaceStyle) -> Self::Font;

    /// Derives a font with an exact numeric weight and italic flag, from `base` when present or
    /// from the platform default face otherwise.
    fn derive_exact(
        &self,
        base: Option<&Self::Font>,
        weight: FontWeight,
        italic: bool,
    ) -> Self::Font;

    /// Resolves a family name to a concrete font, loading from `assets` as needed.
    ///
    /// The weight token is passed through as specified (keyword or exact) so the registry can
    /// distinguish a coarse request from a fine-grained one.
    fn resolve_family(
        &self,
        family: &str,
        style: TypefaceStyle,
        weight: SpecifiedWeight,
        assets: &Self::Assets,
    ) -> Self::Font;
}
