//! Buffer module: the in-memory cell grid widgets render into.
//!
//! This module contains:
//! - [`Cell`]: one glyph plus a [`Style`] (foreground/background pair)
//! - [`Buffer`]: a grid of cells representing the terminal screen
//! - [`Canvas`]: a translated, clipped drawing view onto a buffer
//! - [`Rgb`]: true-color representation

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
mod canvas;

pub use cell::{Cell, Rgb, Style};
pub use buffer::Buffer;
pub use canvas::Canvas;
