//! Layout primitives shared by every control.

mod rect;

pub use rect::Rect;
