//! Tab geometry, border shapes and paint brushes for custom-drawn tab
//! controls.
//!
//! # Usage
//!
//! The widget implements [`host::TabHost`] and owns one
//! [`style_engine::StyleEngine`] created for the named style the user picked.
//! On every paint it asks the engine to draw each visible tab onto a
//! [`surface::DrawingSurface`].
//!
//! ```
//! use tabstrip_components::{
//!     alignment::TabAlignment,
//!     border_shape::TabStyle,
//!     host::StaticTabHost,
//!     style_engine::create_style_engine,
//!     surface::MeshSurface,
//! };
//! use tabstrip_ui::{Px, PxRect};
//!
//! let widget = PxRect::new(Px(0), Px(0), Px(240), Px(120));
//! let host = StaticTabHost::row(2, Px(72), Px(20), TabAlignment::Bottom, widget);
//! let mut engine = create_style_engine(TabStyle::from_name("visual-studio"), host);
//! engine.set_overlap(4).expect("overlap is not negative");
//!
//! let mut mesh = MeshSurface::new();
//! for index in 0..2 {
//!     engine.paint_tab(index, &mut mesh).expect("tab outlines tessellate");
//! }
//! assert!(mesh.triangle_count() > 0);
//! ```
//!
//! # Styles
//!
//! | name | look |
//! |---|---|
//! | `none` | plain rectangle |
//! | `default` | square three-sided tab |
//! | `dark` | chamfered outer corners |
//! | `rounded` | rounded outer corners, focus strip on by default |
//! | `visual-studio` | slanted leading edge, overlapping tabs |
#![deny(missing_docs, clippy::unwrap_used)]

pub mod alignment;
pub mod border_shape;
pub mod brush;
pub mod config;
pub mod host;
pub mod style_engine;
pub mod surface;
pub mod tab_path;
pub mod theme;


pub use crate::{
    border_shape::TabStyle,
    config::{ConfigError, StyleConfig},
    host::TabHost,
    style_engine::{StyleEngine, create_style_engine},
    surface::{DrawingSurface, PaintError},
    tab_path::TabPath,
};
