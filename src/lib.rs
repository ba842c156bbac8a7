//! # Trellis
//!
//! Composable widgets for character-grid terminal UIs.
//!
//! Controls (input fields, menus, modal dialogs, static text and art,
//! scrollable containers) draw onto an in-memory cell [`Buffer`] and react to
//! [`KeyEvent`]s. The [`terminal`] module puts that buffer on a real screen
//! through crossterm; everything else runs without a terminal, which is how
//! the tests drive it.
//!
//! ## Core Concepts
//!
//! - **Inverted cursor**: text fields keep the cursor as an offset back from
//!   the end of the text, so typing at the cursor never has to move it
//! - **Canvas**: containers hand children a translated, clipped view of the
//!   buffer instead of rewriting their positions
//! - **Focus list**: one active control per container receives keys; Tab
//!   moves focus when the control does not want it
//!
//! ## Example
//!
//! ```rust
//! use trellis::widget::{Control, InputField};
//! use trellis::{Buffer, Canvas, KeyCode, KeyEvent, Rect, Style};
//!
//! let mut field = InputField::new(Rect::new(0, 0, 10, 1), Style::DEFAULT);
//! for c in "hel".chars() {
//!     field.handle_key(&KeyEvent::char(c));
//! }
//! field.handle_key(&KeyEvent::new(KeyCode::Left));
//! field.handle_key(&KeyEvent::char('X'));
//! assert_eq!(field.value(), "heXl");
//!
//! let mut buffer = Buffer::new(10, 1);
//! field.draw(&mut Canvas::new(&mut buffer));
//! assert_eq!(buffer.row_text(0), "heXl      ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod draw;
pub mod error;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Canvas, Cell, Rgb, Style};
pub use draw::Alignment;
pub use error::{Error, Result};
pub use event::{Event, KeyCode, KeyEvent, KeyModifiers};
pub use layout::Rect;
pub use widget::Control;
