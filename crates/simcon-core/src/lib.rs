#![forbid(unsafe_code)]

//! Shared vocabulary for the simcon overlay console.
//!
//! # Role in simcon
//! `simcon-core` defines the types the console and its embedding game
//! agree on: input events, pixel geometry, palette colours, and the
//! host interfaces (drawing surface, text input, command interpreter,
//! screen queries, theme lookup). The console itself lives in
//! `simcon-console` and never talks to the platform directly; every
//! outward call goes through a trait defined here.
//!
//! # This crate provides
//! - [`ConsoleInput`]: the discrete events the console reacts to.
//! - [`ScreenCoords`] / [`ScreenRect`]: pixel geometry.
//! - [`Colour`], [`ColourShades`], [`FormatToken`]: palette colour
//!   primitives and the opaque inline colour-override marker.
//! - [`DrawSurface`] and paint types: the rendering seam.
//! - [`TextInputHost`] / [`TextInputSession`]: the scoped lease over
//!   the edit buffer while the console is open.
//! - [`CommandInterpreter`] / [`ConsoleOutput`]: command hand-off and
//!   the append path results flow back through.
//! - [`Screen`] and [`Theme`]: viewport queries and themed colours.

/// Palette colours, shade rows, and inline format tokens.
pub mod colour;
/// Discrete console input events.
pub mod event;
/// Pixel geometry primitives.
pub mod geometry;
/// Host interfaces: text input, command interpreter, screen, theme.
pub mod host;
/// Drawing-surface interface and paint types.
pub mod surface;

pub use colour::{Colour, ColourFlags, ColourShades, FormatToken};
pub use event::ConsoleInput;
pub use geometry::{ScreenCoords, ScreenRect};
pub use host::{
    CommandInterpreter, ConsoleOutput, Screen, TextInputHost, TextInputSession, Theme, ThemeSlot,
};
pub use surface::{DrawSurface, FilterPalette, FontStyle, RectInsetFlags, TextPaint};
