//! TerminalRenderer: flushes a [`Screen`] to a real terminal.
//!
//! The drawing API stays small: one full clear-and-redraw when the renderer
//! has nothing to diff against, otherwise only runs of changed cells are
//! rewritten, with one cursor move per run.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::screen::Screen;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Screen>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a screen to the terminal.
    ///
    /// The first frame, and any frame after a size change or
    /// [`invalidate`](Self::invalidate), is drawn in full; later frames only
    /// rewrite cells that differ from the previously drawn screen.
    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        match self.last.take() {
            Some(prev) if prev.width() == screen.width() && prev.height() == screen.height() => {
                self.diff_redraw(screen, &prev)?;
            }
            _ => self.full_redraw(screen)?,
        }

        self.last = Some(screen.clone());
        Ok(())
    }

    fn full_redraw(&mut self, screen: &Screen) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        for y in 0..screen.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            self.stdout.queue(Print(screen.row(y)))?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &Screen, prev: &Screen) -> Result<()> {
        for_each_changed_run(prev, next, |x, y, len| {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            let run: String = (0..len)
                .map(|dx| next.get(x + dx, y).unwrap_or(' '))
                .collect();
            self.stdout.queue(Print(run))?;
            Ok(())
        })?;

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Invoke `f(x, y, len)` for each horizontal run of cells that differ
/// between `prev` and `next`. Both screens must have equal dimensions.
fn for_each_changed_run(
    prev: &Screen,
    next: &Screen,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
