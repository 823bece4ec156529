//! Geometry and color primitives for the tabstrip tab renderer.
//!
//! This crate holds the small value types every other tabstrip crate speaks:
//! pixel coordinates and rectangles ([`px`]) and RGBA colors ([`color`]).
//! It has no rendering backend of its own; the style engine in
//! `tabstrip-components` builds paths and brushes out of these types and
//! hands them to a host-provided drawing surface.
//!
//! ```
//! use tabstrip_ui::{Color, Px, PxRect};
//!
//! let tab = PxRect::new(Px(0), Px(0), Px(64), Px(22));
//! let fill = Color::from_rgb_u8(0xF2, 0xF2, 0xF2);
//! assert!(!tab.is_empty());
//! assert_eq!(fill.to_hex(), "#F2F2F2");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod px;

pub use crate::{
    color::Color,
    px::{Px, PxPosition, PxRect},
};
