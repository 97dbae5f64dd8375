// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use typeface_primitives::{FontWeight, TypefaceStyle};

use crate::{FontRegistry, SpecifiedStyle, SpecifiedWeight};

/// Running state threaded through the resolution steps.
#[derive(Clone, Debug)]
struct Running<F> {
    style: TypefaceStyle,
    font: Option<F>,
}

/// Resolves a final font from the specified style and weight attributes.
///
/// Resolution is an ordered fold over a running `{style, font}` record seeded from `current`
/// (style [`TypefaceStyle::Normal`] when absent). Each step derives from the previous step's
/// output:
///
/// 1. The `bold` keyword folds boldness into the running style and derives a face for it.
/// 2. The `normal` keyword resets the running style outright and derives a plain face.
/// 3. A requested italic slant combines with whatever the weight steps left behind.
/// 4. An exact numeric weight derives a face with that weight and an italic flag taken from the
///    *requested* style, leaving the running style untouched.
/// 5. A family name, when present, discards every derived face: the result is the registry's
///    answer for `(family, running style, weight)`.
///
/// An unset weight is normalized to an exact 400 before the fold, so step 4 applies to it.
///
/// The function is total; the only collaborator-dependent behavior is the registry's.
pub fn resolve_typeface<R: FontRegistry>(
    registry: &R,
    current: Option<&R::Font>,
    style: SpecifiedStyle,
    weight: SpecifiedWeight,
    family: Option<&str>,
    assets: &R::Assets,
) -> R::Font {
    // The italic flag for exact weights follows the requested style, not the running style.
    let italic = style.is_italic();
    let weight = match weight {
        SpecifiedWeight::Unset => SpecifiedWeight::Exact(FontWeight::NORMAL),
        specified => specified,
    };

    let state = Running {
        style: current
            .map(|font| registry.style_of(font))
            .unwrap_or_default(),
        font: current.cloned(),
    };
    let state = apply_bold_weight(registry, state, weight);
    let state = apply_normal_weight(registry, state, weight);
    let state = apply_italic_style(registry, state, style);
    let state = apply_exact_weight(registry, state, weight, italic);

    match family {
        Some(family) => registry.resolve_family(family, state.style, weight, assets),
        None => match state.font {
            Some(font) => font,
            // Unreachable once the weight is normalized, but keeps the fold total.
            None => registry.derive(None, state.style),
        },
    }
}

/// Step 1: the `bold` keyword folds into the running style.
fn apply_bold_weight<R: FontRegistry>(
    registry: &R,
    mut state: Running<R::Font>,
    weight: SpecifiedWeight,
) -> Running<R::Font> {
    if weight == SpecifiedWeight::Bold {
        // Equality on `Italic`, not a bit-or: a bold-italic base resolves to plain bold here.
        state.style = match state.style {
            TypefaceStyle::Italic => TypefaceStyle::BoldItalic,
            _ => TypefaceStyle::Bold,
        };
        state.font = Some(registry.derive(state.font.as_ref(), state.style));
    }
    state
}

/// Step 2: the `normal` keyword resets the running style outright, regardless of step 1.
fn apply_normal_weight<R: FontRegistry>(
    registry: &R,
    mut state: Running<R::Font>,
    weight: SpecifiedWeight,
) -> Running<R::Font> {
    if weight == SpecifiedWeight::Normal {
        state.font = Some(registry.derive(state.font.as_ref(), TypefaceStyle::Normal));
        state.style = TypefaceStyle::Normal;
    }
    state
}

/// Step 3: a requested italic slant combines with the running style left by the weight steps.
fn apply_italic_style<R: FontRegistry>(
    registry: &R,
    mut state: Running<R::Font>,
    style: SpecifiedStyle,
) -> Running<R::Font> {
    if style.is_italic() {
        // Equality on `Bold`: a bold-italic running style resolves to plain italic here.
        state.style = match state.style {
            TypefaceStyle::Bold => TypefaceStyle::BoldItalic,
            _ => TypefaceStyle::Italic,
        };
        state.font = Some(registry.derive(state.font.as_ref(), state.style));
    }
    state
}

/// Step 4: a fine-grained numeric weight forces an exact-weight face.
///
/// The running style is deliberately not updated; a later family lookup sees the style as the
/// keyword steps left it.
fn apply_exact_weight<R: FontRegistry>(
    registry: &R,
    mut state: Running<R::Font>,
    weight: SpecifiedWeight,
    italic: bool,
) -> Running<R::Font> {
    if let SpecifiedWeight::Exact(value) = weight {
        state.font = Some(registry.derive_exact(state.font.as_ref(), value, italic));
    }
    state
}
