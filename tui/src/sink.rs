//! Terminal display sink
//!
//! Frames are drawn into a back [`Buffer`] and copied onto the terminal frame
//! in one `Terminal::draw` call, so ratatui only sends the cells that changed.

use std::io;

use chroma_life_core::{Colour, DisplaySink, MAX_STATUS_WIDTH, NEUTRAL};
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::theme::{colour_style, BACKGROUND};

/// [`DisplaySink`] backed by a ratatui terminal
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    back: Buffer,
    pending: Colour,
}

impl<B: Backend> TerminalSink<B> {
    /// Wrap `terminal` for a `width` x `height` grid
    ///
    /// One extra row is reserved for the status line, and the buffer is at
    /// least [`MAX_STATUS_WIDTH`] wide so the status line is never cut short
    /// by a narrow grid. Anything drawn past `u16::MAX` in either direction
    /// is dropped.
    pub fn new(terminal: Terminal<B>, width: usize, height: usize) -> Self {
        let area = Rect::new(
            0,
            0,
            u16::try_from(width.max(MAX_STATUS_WIDTH)).unwrap_or(u16::MAX),
            u16::try_from(height.saturating_add(1)).unwrap_or(u16::MAX),
        );
        Self {
            terminal,
            back: Buffer::empty(area),
            pending: NEUTRAL,
        }
    }

    /// Area of the back buffer
    pub fn area(&self) -> Rect {
        self.back.area
    }

    /// The wrapped terminal
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut ratatui::buffer::Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.back.cell_mut((x, y))
    }
}

impl<B: Backend> DisplaySink for TerminalSink<B> {
    fn write_char(&mut self, x: usize, y: usize, ch: char) {
        let fg = colour_style(self.pending);
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_char(ch).set_fg(fg).set_bg(BACKGROUND);
        }
    }

    fn write_attribute(&mut self, x: usize, y: usize, colour: Colour) {
        self.pending = colour;
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_fg(colour_style(colour));
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let back = &self.back;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(back.area.height) {
                for x in 0..area.width.min(back.area.width) {
                    buf[(x, y)] = back[(x, y)].clone();
                }
            }
        })?;

        // A shorter status line must not leave the previous tail behind.
        self.back.reset();
        Ok(())
    }
}
