//! Demo state: a history list plus one reusable prompt.

use trellis::widget::{Control, InputModal};
use trellis::{draw, Alignment, Canvas, KeyCode, KeyEvent, Rect, Rgb, Style};

const TITLE: &str = "Trellis Demo";
const USAGE: &str = "Ctrl+B = Add Bucket; Ctrl+P = Add Pair";
const PROMPT_HEIGHT: u16 = 8;
const PROMPT_MIN_WIDTH: u16 = 40;

/// What the prompt is currently collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No prompt open.
    Idle,
    /// Waiting for a bucket name.
    Bucket,
    /// Waiting for the key of a pair.
    PairKey,
    /// Waiting for the value of a pair whose key is known.
    PairValue(String),
}

/// What the main loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Redraw and read the next event.
    Continue,
    /// Stop the process until it is resumed (Ctrl+Z).
    Suspend,
    /// Leave the loop.
    Quit,
}

/// All demo state, driven one key at a time.
#[derive(Debug)]
pub struct App {
    mode: Mode,
    history: Vec<String>,
    prompt: InputModal,
    width: u16,
}

impl App {
    pub fn new(width: u16, height: u16) -> Self {
        let mut prompt = InputModal::new("", Rect::ZERO, Style::new(Rgb::WHITE, Rgb::BLACK));
        prompt.set_bounds(prompt_bounds(width, height));
        Self {
            mode: Mode::Idle,
            history: vec![USAGE.to_string()],
            prompt,
            width,
        }
    }

    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.prompt.set_bounds(prompt_bounds(width, height));
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Action {
        if key.is_ctrl('c') {
            return Action::Quit;
        }
        if key.is_ctrl('z') {
            return Action::Suspend;
        }
        if key.code == KeyCode::Esc {
            if self.mode == Mode::Idle {
                return Action::Quit;
            }
            log::debug!("prompt cancelled in {:?}", self.mode);
            self.open(Mode::Idle, "");
            return Action::Continue;
        }
        if key.is_ctrl('b') {
            self.open(Mode::Bucket, "Bucket Name");
        } else if key.is_ctrl('p') {
            self.open(Mode::PairKey, "Pair Key");
        } else if self.mode != Mode::Idle {
            self.prompt.handle_key(key);
            if self.prompt.is_done() {
                self.submit();
            }
        }
        Action::Continue
    }

    /// Reset the prompt and switch to `mode`.
    fn open(&mut self, mode: Mode, title: &str) {
        self.prompt.clear();
        self.prompt.set_title(title);
        self.mode = mode;
    }

    fn submit(&mut self) {
        let value = self.prompt.value().to_string();
        match std::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Bucket => self.record(format!("New Bucket {value}")),
            Mode::PairKey => {
                self.open(Mode::PairValue(value), "Pair Value");
                return;
            }
            Mode::PairValue(key) => self.record(format!("New Pair {key} => {value}")),
            Mode::Idle => {}
        }
        self.prompt.clear();
    }

    fn record(&mut self, entry: String) {
        log::info!("{entry}");
        self.history.push(entry);
    }

    pub fn draw(&self, canvas: &mut Canvas<'_>) {
        let header = draw::align_text(TITLE, usize::from(self.width), Alignment::Center);
        draw::draw_text(canvas, &header, 0, 0, Style::new(Rgb::WHITE, Rgb::RED));

        if self.mode == Mode::Idle {
            let style = Style::new(Rgb::WHITE, Rgb::BLACK);
            for (row, entry) in (3..).zip(&self.history) {
                draw::draw_text(canvas, entry, 1, row, style);
            }
        } else {
            self.prompt.draw(canvas);
        }
    }
}

/// Centered prompt box, at least wide enough for its help line.
fn prompt_bounds(width: u16, height: u16) -> Rect {
    let w = (width / 2).max(PROMPT_MIN_WIDTH).min(width);
    let h = PROMPT_HEIGHT.min(height);
    Rect::new((width - w) / 2, (height - h) / 2, w, h)
}
