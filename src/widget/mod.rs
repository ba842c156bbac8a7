//! Widgets: controls that draw onto a [`Canvas`](crate::buffer::Canvas) and
//! react to key presses.
//!
//! Every widget implements [`Control`]. Editable text goes through
//! [`TextBuffer`] (the cursor model) and [`Viewport`] (what part of the text
//! is visible); containers route keys and draw children through
//! [`FocusList`].
//!
//! # Example
//!
//! ```rust
//! use trellis::widget::{Control, InputField, ScrollFrame};
//! use trellis::{Buffer, Canvas, KeyEvent, Rect, Style};
//!
//! let mut frame = ScrollFrame::new(Rect::new(0, 0, 20, 5), Style::DEFAULT);
//! frame.add_control(Box::new(InputField::new(Rect::new(1, 1, 10, 1), Style::DEFAULT)));
//! frame.handle_key(&KeyEvent::char('h'));
//!
//! let mut buffer = Buffer::new(20, 5);
//! frame.draw(&mut Canvas::new(&mut buffer));
//! assert_eq!(buffer.char_at(1, 1), Some('h'));
//! ```

mod ascii_art;
mod frame;
mod input_field;
mod label;
mod menu;
pub mod modal;
mod text_buffer;
mod traits;
mod viewport;

pub use ascii_art::AsciiArt;
pub use frame::{FocusList, Frame, ScrollFrame};
pub use input_field::InputField;
pub use label::Label;
pub use menu::{Menu, MenuOption};
pub use modal::{AlertModal, ConfirmModal, InputModal, ModalChrome};
pub use text_buffer::TextBuffer;
pub use traits::Control;
pub use viewport::{CursorSplit, Glyph, Viewport};
