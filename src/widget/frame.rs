//! Containers: [`Frame`] and [`ScrollFrame`].
//!
//! Both hold their children in a [`FocusList`]: insertion order is draw order
//! and tab order, and at most one child is active. Keys go to the active
//! child; Tab/BackTab move focus when the child declines them.
//!
//! Children store positions relative to the container's content origin. The
//! container draws them through a canvas translated to that origin (minus the
//! scroll offset) and clipped to the content area, so a child's stored
//! position is never touched while drawing.

use super::traits::Control;
use crate::buffer::{Canvas, Style};
use crate::draw;
use crate::event::{KeyCode, KeyEvent};
use crate::layout::Rect;

/// Ordered controls with a single active entry.
#[derive(Default)]
pub struct FocusList {
    controls: Vec<Box<dyn Control>>,
    active: Option<usize>,
}

impl FocusList {
    /// An empty list.
    pub const fn new() -> Self {
        Self {
            controls: Vec::new(),
            active: None,
        }
    }

    /// Append a control. The first focusable control added becomes active.
    ///
    /// Returns the control's index.
    pub fn push(&mut self, mut control: Box<dyn Control>) -> usize {
        let idx = self.controls.len();
        let focus = self.active.is_none() && control.is_focusable();
        control.set_focused(focus);
        self.controls.push(control);
        if focus {
            self.active = Some(idx);
        }
        idx
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the list holds no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Control at `idx`.
    pub fn get(&self, idx: usize) -> Option<&dyn Control> {
        self.controls.get(idx).map(AsRef::as_ref)
    }

    /// Mutable control at `idx`.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut (dyn Control + 'static)> {
        self.controls.get_mut(idx).map(AsMut::as_mut)
    }

    /// All controls in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Control> {
        self.controls.iter().map(AsRef::as_ref)
    }

    /// Index of the active control.
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Make `idx` the active control.
    ///
    /// Returns `false` if `idx` is out of range or not focusable.
    pub fn set_active(&mut self, idx: usize) -> bool {
        match self.controls.get(idx) {
            Some(control) if control.is_focusable() => {
                self.focus(Some(idx));
                true
            }
            _ => false,
        }
    }

    /// Move focus to the next focusable control, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        let len = self.controls.len();
        let start = self.active.map_or(0, |idx| idx + 1);
        let next = (0..len)
            .map(|step| (start + step) % len)
            .find(|&idx| self.controls[idx].is_focusable());
        self.focus_found(next)
    }

    /// Move focus to the previous focusable control, wrapping around.
    pub fn focus_prev(&mut self) -> bool {
        let len = self.controls.len();
        let start = self.active.unwrap_or(0) + len;
        let prev = (1..=len)
            .map(|step| (start - step) % len)
            .find(|&idx| self.controls[idx].is_focusable());
        self.focus_found(prev)
    }

    fn focus_found(&mut self, found: Option<usize>) -> bool {
        match found {
            Some(idx) if Some(idx) != self.active => {
                self.focus(Some(idx));
                true
            }
            _ => false,
        }
    }

    fn focus(&mut self, idx: Option<usize>) {
        if let Some(old) = self.active.and_then(|i| self.controls.get_mut(i)) {
            old.set_focused(false);
        }
        if let Some(new) = idx.and_then(|i| self.controls.get_mut(i)) {
            new.set_focused(true);
        }
        log::debug!("focus {:?} -> {:?}", self.active, idx);
        self.active = idx;
    }

    /// Forward a key to the active control.
    ///
    /// A declined Tab/BackTab moves focus instead.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let consumed = self
            .active
            .and_then(|idx| self.controls.get_mut(idx))
            .is_some_and(|control| control.handle_key(key));
        if consumed {
            return true;
        }
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            _ => false,
        }
    }

    /// Whether any control can take focus.
    pub fn has_focusable(&self) -> bool {
        self.controls.iter().any(|control| control.is_focusable())
    }

    /// Tell the active control whether its container is focused.
    pub fn set_focused(&mut self, focused: bool) {
        if let Some(control) = self.active.and_then(|idx| self.controls.get_mut(idx)) {
            control.set_focused(focused);
        }
    }
}

impl std::fmt::Debug for FocusList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusList")
            .field("len", &self.controls.len())
            .field("active", &self.active)
            .finish()
    }
}

/// Content area of a container: inside the border when bordered.
const fn content_area(bounds: Rect, bordered: bool) -> Rect {
    if bordered {
        bounds.inner()
    } else {
        bounds
    }
}

/// A fixed container that draws all of its children.
#[derive(Debug)]
pub struct Frame {
    controls: FocusList,
    bounds: Rect,
    style: Style,
    bordered: bool,
}

impl Frame {
    /// An empty, borderless frame.
    pub const fn new(bounds: Rect, style: Style) -> Self {
        Self {
            controls: FocusList::new(),
            bounds,
            style,
            bordered: false,
        }
    }

    /// Append a child positioned relative to the content origin.
    pub fn add_control(&mut self, control: Box<dyn Control>) -> usize {
        self.controls.push(control)
    }

    /// Child at `idx`.
    pub fn control(&self, idx: usize) -> Option<&dyn Control> {
        self.controls.get(idx)
    }

    /// Mutable child at `idx`.
    pub fn control_mut(&mut self, idx: usize) -> Option<&mut (dyn Control + 'static)> {
        self.controls.get_mut(idx)
    }

    /// The children and focus state.
    pub const fn controls(&self) -> &FocusList {
        &self.controls
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the frame has no children.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Index of the active child.
    pub const fn active_index(&self) -> Option<usize> {
        self.controls.active_index()
    }

    /// Make child `idx` active.
    pub fn set_active(&mut self, idx: usize) -> bool {
        self.controls.set_active(idx)
    }

    /// Focus the next focusable child.
    pub fn focus_next(&mut self) -> bool {
        self.controls.focus_next()
    }

    /// Focus the previous focusable child.
    pub fn focus_prev(&mut self) -> bool {
        self.controls.focus_prev()
    }

    /// Whether a border is drawn.
    pub const fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Draw a border; children move inside it.
    pub const fn set_bordered(&mut self, bordered: bool) {
        self.bordered = bordered;
    }

    /// Where children are drawn, in the owner's coordinates.
    pub const fn content_area(&self) -> Rect {
        content_area(self.bounds, self.bordered)
    }
}

impl Control for Frame {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        self.controls.handle_key(key)
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        if self.bordered {
            draw::draw_border(canvas, self.bounds, self.style);
        }
        let area = self.content_area();
        let (x, y) = (i32::from(area.x), i32::from(area.y));
        let mut clip = canvas.clipped(x, y, area.width, area.height);
        let mut inner = clip.translated(x, y);
        for control in self.controls.iter() {
            control.draw(&mut inner);
        }
    }

    fn is_focusable(&self) -> bool {
        self.controls.has_focusable()
    }

    fn set_focused(&mut self, focused: bool) {
        self.controls.set_focused(focused);
    }
}

/// A container that views its children through a movable window.
///
/// Scrolling moves the window over the children: after `scroll_right`, every
/// child is drawn one column further left. Only children overlapping the
/// window are drawn.
#[derive(Debug)]
pub struct ScrollFrame {
    controls: FocusList,
    bounds: Rect,
    style: Style,
    bordered: bool,
    scroll_x: u16,
    scroll_y: u16,
}

impl ScrollFrame {
    /// An empty, borderless frame scrolled to (0, 0).
    pub const fn new(bounds: Rect, style: Style) -> Self {
        Self {
            controls: FocusList::new(),
            bounds,
            style,
            bordered: false,
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    /// Append a child positioned relative to the unscrolled content origin.
    pub fn add_control(&mut self, control: Box<dyn Control>) -> usize {
        self.controls.push(control)
    }

    /// Child at `idx`.
    pub fn control(&self, idx: usize) -> Option<&dyn Control> {
        self.controls.get(idx)
    }

    /// Mutable child at `idx`.
    pub fn control_mut(&mut self, idx: usize) -> Option<&mut (dyn Control + 'static)> {
        self.controls.get_mut(idx)
    }

    /// The children and focus state.
    pub const fn controls(&self) -> &FocusList {
        &self.controls
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the frame has no children.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Index of the active child.
    pub const fn active_index(&self) -> Option<usize> {
        self.controls.active_index()
    }

    /// Make child `idx` active.
    pub fn set_active(&mut self, idx: usize) -> bool {
        self.controls.set_active(idx)
    }

    /// Focus the next focusable child.
    pub fn focus_next(&mut self) -> bool {
        self.controls.focus_next()
    }

    /// Focus the previous focusable child.
    pub fn focus_prev(&mut self) -> bool {
        self.controls.focus_prev()
    }

    /// Whether a border is drawn.
    pub const fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Draw a border; children move inside it.
    pub const fn set_bordered(&mut self, bordered: bool) {
        self.bordered = bordered;
    }

    /// Where children are drawn, in the owner's coordinates.
    pub const fn content_area(&self) -> Rect {
        content_area(self.bounds, self.bordered)
    }

    /// Horizontal scroll offset.
    pub const fn scroll_x(&self) -> u16 {
        self.scroll_x
    }

    /// Vertical scroll offset.
    pub const fn scroll_y(&self) -> u16 {
        self.scroll_y
    }

    /// Scroll one row down. Unbounded.
    pub const fn scroll_down(&mut self) {
        self.scroll_y = self.scroll_y.saturating_add(1);
    }

    /// Scroll one row up, stopping at 0.
    pub const fn scroll_up(&mut self) {
        self.scroll_y = self.scroll_y.saturating_sub(1);
    }

    /// Scroll one column right. Unbounded.
    pub const fn scroll_right(&mut self) {
        self.scroll_x = self.scroll_x.saturating_add(1);
    }

    /// Scroll one column left, stopping at 0.
    pub const fn scroll_left(&mut self) {
        self.scroll_x = self.scroll_x.saturating_sub(1);
    }

    /// Whether `control` overlaps the scrolled window.
    pub fn is_visible(&self, control: &dyn Control) -> bool {
        let area = self.content_area();
        control.bounds().overlaps(
            i32::from(self.scroll_x),
            i32::from(self.scroll_y),
            area.width,
            area.height,
        )
    }

    /// Origin children are drawn from, in the owner's coordinates.
    fn scrolled_origin(&self) -> (i32, i32) {
        let area = self.content_area();
        (
            i32::from(area.x) - i32::from(self.scroll_x),
            i32::from(area.y) - i32::from(self.scroll_y),
        )
    }

    /// Where child `idx`'s top-left corner lands when drawn.
    pub fn drawn_position(&self, idx: usize) -> Option<(i32, i32)> {
        let bounds = self.controls.get(idx)?.bounds();
        let (x, y) = self.scrolled_origin();
        Some((x + i32::from(bounds.x), y + i32::from(bounds.y)))
    }
}

impl Control for ScrollFrame {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        self.controls.handle_key(key)
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        if self.bordered {
            draw::draw_border(canvas, self.bounds, self.style);
        }
        let area = self.content_area();
        let mut clip = canvas.clipped(i32::from(area.x), i32::from(area.y), area.width, area.height);
        let (x, y) = self.scrolled_origin();
        let mut inner = clip.translated(x, y);
        for control in self.controls.iter().filter(|c| self.is_visible(*c)) {
            control.draw(&mut inner);
        }
    }

    fn is_focusable(&self) -> bool {
        self.controls.has_focusable()
    }

    fn set_focused(&mut self, focused: bool) {
        self.controls.set_focused(focused);
    }
}
