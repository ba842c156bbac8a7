//! Terminal backend: crossterm session, event conversion and diff flushing.
//!
//! The widget layer never touches this module; it is the glue that puts a
//! [`Buffer`](crate::Buffer) on a real screen and turns keyboard input into
//! [`Event`](crate::Event)s.

mod diff;
mod input;
mod output;
mod session;

pub use diff::{render_diff, render_full, DiffState, DiffStats};
pub use input::convert_event;
pub use output::OutputBuffer;
pub use session::{Session, SessionConfig};
