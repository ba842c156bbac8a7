//! Menu: a vertical list of selectable options.
//!
//! The menu owns a single selected index; options never carry their own
//! selection flag, so at most one option is selected at a time. Selection
//! only ever moves onto enabled options.

use super::traits::Control;
use crate::buffer::{Canvas, Rgb, Style};
use crate::draw::{self, Alignment};
use crate::event::{KeyCode, KeyEvent};
use crate::layout::Rect;

/// One entry in a [`Menu`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOption {
    /// Text shown in the list.
    pub text: String,
    /// Disabled options are drawn dimmed and cannot be selected.
    pub disabled: bool,
    /// Shown on the help line while this option is selected.
    pub help_text: String,
}

impl MenuOption {
    /// An enabled option with no help text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder: set the help text.
    #[must_use]
    pub fn with_help(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Builder: mark disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A selectable list with an optional title, border and help line.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    options: Vec<MenuOption>,
    selected: Option<usize>,
    x: u16,
    y: u16,
    width: u16,
    /// Fixed height, or `None` to size to the content.
    height: Option<u16>,
    bordered: bool,
    show_help: bool,
    vim_mode: bool,
    done: bool,
    style: Style,
    selected_style: Style,
    disabled_style: Style,
}

impl Menu {
    /// Create a menu from option texts. The first option starts selected.
    ///
    /// A `height` of `None` sizes the menu to fit its content.
    pub fn new<I, S>(
        title: impl Into<String>,
        options: I,
        x: u16,
        y: u16,
        width: u16,
        height: Option<u16>,
        style: Style,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<MenuOption> = options.into_iter().map(MenuOption::new).collect();
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            title: title.into(),
            options,
            selected,
            x,
            y,
            width,
            height,
            bordered: false,
            show_help: false,
            vim_mode: false,
            done: false,
            style,
            selected_style: style.reversed(),
            disabled_style: Style::new(Rgb::GRAY, style.bg),
        }
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// All options in display order.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Replace the options, selecting the first enabled one.
    pub fn set_options(&mut self, options: Vec<MenuOption>) {
        self.options = options;
        self.selected = self.options.iter().position(|opt| !opt.disabled);
    }

    /// Replace the options with plain text entries.
    pub fn set_options_from_strings<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_options(options.into_iter().map(MenuOption::new).collect());
    }

    /// Option at `idx`, if any.
    pub fn option(&self, idx: usize) -> Option<&MenuOption> {
        self.options.get(idx)
    }

    /// Mutable option at `idx`, if any.
    pub fn option_mut(&mut self, idx: usize) -> Option<&mut MenuOption> {
        self.options.get_mut(idx)
    }

    /// First option whose text is `text`.
    pub fn option_by_text(&self, text: &str) -> Option<&MenuOption> {
        self.options.iter().find(|opt| opt.text == text)
    }

    /// Index of the selected option.
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected option.
    pub fn selected_option(&self) -> Option<&MenuOption> {
        self.selected.and_then(|idx| self.options.get(idx))
    }

    /// Select the option at `idx`.
    ///
    /// Returns `false` (selection unchanged) if `idx` is out of range or the
    /// option is disabled.
    pub fn set_selected_index(&mut self, idx: usize) -> bool {
        match self.options.get(idx) {
            Some(opt) if !opt.disabled => {
                self.selected = Some(idx);
                true
            }
            _ => false,
        }
    }

    /// Move the selection down to the next enabled option.
    ///
    /// No-op when there is none below the current selection.
    pub fn select_next_option(&mut self) -> bool {
        let start = self.selected.map_or(0, |idx| idx + 1);
        let next = (start..self.options.len()).find(|&idx| !self.options[idx].disabled);
        self.select_found(next)
    }

    /// Move the selection up to the previous enabled option.
    ///
    /// No-op when there is none above the current selection. With nothing
    /// selected, the search starts from the bottom.
    pub fn select_prev_option(&mut self) -> bool {
        let end = self.selected.unwrap_or(self.options.len());
        let prev = (0..end).rev().find(|&idx| !self.options[idx].disabled);
        self.select_found(prev)
    }

    fn select_found(&mut self, found: Option<usize>) -> bool {
        match found {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Disable the option at `idx`. Out-of-range indices are ignored.
    pub fn set_option_disabled(&mut self, idx: usize) {
        if let Some(opt) = self.options.get_mut(idx) {
            opt.disabled = true;
        }
    }

    /// Enable the option at `idx`. Out-of-range indices are ignored.
    pub fn set_option_enabled(&mut self, idx: usize) {
        if let Some(opt) = self.options.get_mut(idx) {
            opt.disabled = false;
        }
    }

    /// Whether Enter has been pressed.
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Set or reset the done flag.
    pub const fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Whether a border is drawn.
    pub const fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Draw a border around the menu.
    pub const fn set_bordered(&mut self, bordered: bool) {
        self.bordered = bordered;
    }

    /// Whether the help line is shown.
    pub const fn is_help_shown(&self) -> bool {
        self.show_help
    }

    /// Show the selected option's help text on the last row.
    pub const fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Whether `j`/`k` navigate.
    pub const fn is_vim_mode(&self) -> bool {
        self.vim_mode
    }

    /// Let `j`/`k` move the selection down/up.
    pub const fn set_vim_mode(&mut self, enabled: bool) {
        self.vim_mode = enabled;
    }

    /// Fixed height, `None` when adaptive.
    pub const fn fixed_height(&self) -> Option<u16> {
        self.height
    }

    /// Fix the height, or pass `None` to size to the content.
    pub const fn set_height(&mut self, height: Option<u16>) {
        self.height = height;
    }

    /// Normal option colors.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the normal option colors.
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Colors of the selected option.
    pub const fn set_selected_style(&mut self, style: Style) {
        self.selected_style = style;
    }

    /// Colors of disabled options.
    pub const fn set_disabled_style(&mut self, style: Style) {
        self.disabled_style = style;
    }

    /// Rows above the option list: the title plus its separator.
    fn header_rows(&self) -> u16 {
        match (self.title.is_empty(), self.bordered) {
            (true, _) => 0,
            (false, false) => 1,
            (false, true) => 2,
        }
    }

    fn content_height(&self) -> u16 {
        let options = u16::try_from(self.options.len()).unwrap_or(u16::MAX);
        self.header_rows()
            .saturating_add(options)
            .saturating_add(u16::from(self.show_help))
    }
}

impl Control for Menu {
    fn bounds(&self) -> Rect {
        let height = self.height.unwrap_or_else(|| {
            let border = if self.bordered { 2 } else { 0 };
            self.content_height().saturating_add(border)
        });
        Rect::new(self.x, self.y, self.width, height)
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = Some(bounds.height);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            self.done = true;
            return true;
        }
        let before = self.selected;
        match key.code {
            KeyCode::Up => {
                self.select_prev_option();
            }
            KeyCode::Down => {
                self.select_next_option();
            }
            KeyCode::Char('j') if self.vim_mode && key.modifiers.is_empty() => {
                self.select_next_option();
            }
            KeyCode::Char('k') if self.vim_mode && key.modifiers.is_empty() => {
                self.select_prev_option();
            }
            _ => {}
        }
        self.selected != before
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let bounds = self.bounds();
        draw::fill(canvas, bounds, ' ', self.style);
        let area = if self.bordered {
            draw::draw_border(canvas, bounds, self.style);
            bounds.inner()
        } else {
            bounds
        };
        if area.is_empty() {
            return;
        }

        let mut canvas = canvas.clipped(i32::from(area.x), i32::from(area.y), area.width, area.height);
        let x = i32::from(area.x);
        let width = area.width as usize;
        let mut row = i32::from(area.y);

        if !self.title.is_empty() {
            let title = draw::align_text(&self.title, width, Alignment::Center);
            draw::draw_text(&mut canvas, &title, x, row, self.style);
            row += 1;
            if self.bordered {
                draw::draw_hline(&mut canvas, x, row, area.width, '-', self.style);
                row += 1;
            }
        }

        for (idx, opt) in self.options.iter().enumerate() {
            if opt.disabled {
                draw::draw_text(&mut canvas, &opt.text, x, row, self.disabled_style);
            } else if self.selected == Some(idx) {
                let line = draw::align_text(&opt.text, width, Alignment::Left);
                draw::draw_text(&mut canvas, &line, x, row, self.selected_style);
            } else {
                draw::draw_text(&mut canvas, &opt.text, x, row, self.style);
            }
            row += 1;
        }

        if self.show_help {
            if let Some(opt) = self.selected_option() {
                let help_row = area.bottom() - 1;
                draw::draw_text(&mut canvas, &opt.help_text, x, help_row, self.style);
            }
        }
    }
}
