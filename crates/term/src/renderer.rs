//! TerminalRenderer: raw-mode lifecycle and frame output.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal::{self, ClearType},
    QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one prepared frame from the top-left corner.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        for line in frame.lines() {
            self.stdout.queue(crossterm::style::Print(line))?;
            self.stdout.queue(terminal::Clear(ClearType::UntilNewLine))?;
            self.stdout.queue(crossterm::style::Print("\r\n"))?;
        }
        self.stdout.queue(terminal::Clear(ClearType::FromCursorDown))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
