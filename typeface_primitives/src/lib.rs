// Copyright 2026 the Typeface Resolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental typeface attribute types.
//!
//! This crate is a lightweight, `no_std`-friendly vocabulary layer shared between declarative
//! style systems and platform font APIs. It contains small, typed representations of the "leaf"
//! concepts those layers exchange: numeric font weights, slants, the coarse style buckets that
//! platform font derivation understands, and `font-variant` feature names with their OpenType
//! tags.
//!
//! Each type carries a strict `parse` function that returns `Option`; lenient, attribute-level
//! parsing with documented fallbacks lives in the `typeface_resolve` crate.
//!
//! ## Example
//!
//! ```
//! use typeface_primitives::{FontVariant, FontWeight};
//!
//! assert_eq!(FontWeight::parse("600"), Some(FontWeight::SEMI_BOLD));
//! assert_eq!(FontWeight::parse("650"), None);
//!
//! let variant = FontVariant::parse("tabular-nums").unwrap();
//! assert_eq!(variant.tag().to_bytes(), *b"tnum");
//! ```
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![no_std]

mod font;
mod variant;

pub use font::{FontStyle, FontWeight, TypefaceStyle};
pub use variant::{FontVariant, Tag};
