//! Session: exclusive ownership of the terminal for the lifetime of an app.
//!
//! Creating a session enters raw mode (and, by default, the alternate
//! screen); dropping it restores the terminal. Each [`draw`](Session::draw)
//! renders into a back buffer, diffs it against what is on screen, and
//! flushes the difference with a single write.

use super::diff::{self, DiffState, DiffStats};
use super::input::convert_event;
use super::output::OutputBuffer;
use crate::buffer::{Buffer, Canvas};
use crate::error::{Error, Result};
use crate::event::Event;
use crossterm::{
    cursor, event, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// How the session sets up the terminal.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Draw on the alternate screen so the shell's scrollback is untouched.
    pub alternate_screen: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { alternate_screen: true }
    }
}

/// The terminal, in raw mode, owned by one application loop.
pub struct Session {
    config: SessionConfig,
    stdout: io::Stdout,
    /// What is on screen.
    front: Buffer,
    /// What the next draw renders into.
    back: Buffer,
    output: OutputBuffer,
    state: DiffState,
    /// Repaint every cell on the next draw.
    full_redraw: bool,
    /// Whether raw mode is currently on.
    active: bool,
}

impl Session {
    /// Take over the terminal with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    /// Take over the terminal.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let (width, height) = (width.max(1), height.max(1));
        let mut session = Self {
            config,
            stdout: io::stdout(),
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            output: OutputBuffer::with_capacity(usize::from(width) * usize::from(height) * 4),
            state: DiffState::new(),
            full_redraw: true,
            active: false,
        };
        session.enter()?;
        log::info!("terminal session started at {width}x{height}");
        Ok(session)
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        if self.config.alternate_screen {
            execute!(self.stdout, EnterAlternateScreen)?;
        }
        execute!(self.stdout, cursor::Hide)?;
        self.full_redraw = true;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.stdout, cursor::Show)?;
        if self.config.alternate_screen {
            execute!(self.stdout, LeaveAlternateScreen)?;
        }
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current size in cells.
    pub const fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    /// Render a frame and flush what changed.
    ///
    /// The back buffer is cleared before `render` runs, so every pass draws
    /// the whole UI.
    pub fn draw<F>(&mut self, render: F) -> Result<DiffStats>
    where
        F: FnOnce(&mut Canvas<'_>),
    {
        self.back.clear();
        render(&mut Canvas::new(&mut self.back));

        self.output.clear();
        let stats = if self.full_redraw {
            self.full_redraw = false;
            diff::render_full(&self.back, &mut self.output, &mut self.state)
        } else {
            diff::render_diff(&self.front, &self.back, &mut self.output, &mut self.state)
        };
        if !self.output.is_empty() {
            self.output.flush_to(&mut self.stdout)?;
        }
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(stats)
    }

    /// Resize the buffers and repaint everything on the next draw.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("resize to {width}x{height}");
        self.front.resize(width, height);
        self.back.resize(width, height);
        self.full_redraw = true;
    }

    /// Block until the next key press or resize.
    pub fn read_event(&self) -> Result<Event> {
        loop {
            if let Some(event) = convert_event(event::read()?) {
                return Ok(event);
            }
        }
    }

    /// Hand the terminal back to the shell and stop the process (Ctrl+Z).
    ///
    /// Returns once the process is continued, with the display restored and
    /// a full repaint pending.
    pub fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        self.leave()?;
        self.stdout.flush()?;
        stop_process()?;
        self.enter()?;
        self.state.reset();
        if let Ok((width, height)) = terminal::size() {
            self.resize(width.max(1), height.max(1));
        }
        log::info!("resumed");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            log::warn!("failed to restore terminal: {err}");
        }
        log::info!("terminal session ended");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("size", &self.size())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// Stop the process with SIGTSTP; returns after SIGCONT.
#[cfg(unix)]
#[allow(unsafe_code)]
fn stop_process() -> Result<()> {
    // SAFETY: raise has no memory-safety preconditions.
    let rc = unsafe { libc::raise(libc::SIGTSTP) };
    if rc == 0 {
        Ok(())
    } else {
        Err(Error::Suspend(io::Error::last_os_error().to_string()))
    }
}

#[cfg(not(unix))]
fn stop_process() -> Result<()> {
    Err(Error::Suspend("job control is not supported on this platform".to_string()))
}
