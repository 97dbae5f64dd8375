// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative typeface attribute parsing and font resolution.
//!
//! This crate is the adapter between a declarative styling vocabulary (`fontWeight: "bold"`,
//! `fontStyle: "italic"`, `fontVariant: ["small-caps"]`) and a platform font API:
//!
//! - [`SpecifiedWeight`] and [`SpecifiedStyle`] parse attribute strings into tokens. The parsers
//!   are total: invalid input degrades to a documented default instead of failing.
//! - [`font_feature_settings`] converts a `fontVariant` list into a CSS `font-feature-settings`
//!   string.
//! - [`resolve_typeface`] folds the tokens over an optional current font and consults a
//!   [`FontRegistry`] — the external collaborator owning family lookup and caching — whenever a
//!   family name is specified.
//!
//! Everything here is stateless and reentrant; the crate holds no font data of its own.
//!
//! ## Example
//!
//! ```
//! use typeface_primitives::{FontWeight, TypefaceStyle};
//! use typeface_resolve::{
//!     resolve_typeface, FontRegistry, SpecifiedStyle, SpecifiedWeight,
//! };
//!
//! /// A registry that records how each font was requested.
//! struct Registry;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Font {
//!     Styled(TypefaceStyle),
//!     Exact(FontWeight, bool),
//!     Family(String, TypefaceStyle),
//! }
//!
//! impl FontRegistry for Registry {
//!     type Font = Font;
//!     type Assets = ();
//!
//!     fn style_of(&self, font: &Font) -> TypefaceStyle {
//!         match font {
//!             Font::Styled(style) => *style,
//!             _ => TypefaceStyle::Normal,
//!         }
//!     }
//!
//!     fn derive(&self, _base: Option<&Font>, style: TypefaceStyle) -> Font {
//!         Font::Styled(style)
//!     }
//!
//!     fn derive_exact(&self, _base: Option<&Font>, weight: FontWeight, italic: bool) -> Font {
//!         Font::Exact(weight, italic)
//!     }
//!
//!     fn resolve_family(
//!         &self,
//!         family: &str,
//!         style: TypefaceStyle,
//!         _weight: SpecifiedWeight,
//!         _assets: &(),
//!     ) -> Font {
//!         Font::Family(family.into(), style)
//!     }
//! }
//!
//! let style = SpecifiedStyle::parse(Some("italic"));
//! let weight = SpecifiedWeight::parse(Some("bold"));
//! let font = resolve_typeface(&Registry, None, style, weight, Some("Inter"), &());
//! assert_eq!(font, Font::Family("Inter".into(), TypefaceStyle::BoldItalic));
//! ```
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![no_std]

extern crate alloc;

mod features;
mod registry;
mod resolve;
mod specified;


pub use features::font_feature_settings;
pub use registry::FontRegistry;
pub use resolve::resolve_typeface;
pub use specified::{SpecifiedStyle, SpecifiedWeight};
