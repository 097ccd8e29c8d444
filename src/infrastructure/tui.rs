pub mod real;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture},
    terminal::{self, LeaveAlternateScreen},
};
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn suspend(&mut self) -> Result<()> {
        self.exit()
    }
    fn resume(&mut self) -> Result<()> {
        self.enter()
    }
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}

/// Leave raw mode and the alternate screen without owning a terminal.
/// Used by the panic hook, so it must not fail halfway.
pub fn restore_terminal() -> Result<()> {
    if terminal::is_raw_mode_enabled()? {
        crossterm::execute!(
            io(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;
    }
    Ok(())
}
