/// A `Surface` that rasterises the 800×600 world onto a terminal cell grid.
///
/// Drawing goes into an in-memory cell buffer; `present` writes the whole
/// buffer out with crossterm commands in one flush. Font size has no effect
/// in a terminal, text is always one cell high.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use super::{Surface, TextAnchor};
use crate::assets::Sprite;
use crate::config::{Rgb, HEIGHT, WIDTH};
use crate::entities::Rect;

/// Minimum alpha for a sprite pixel to paint its cell.
const ALPHA_THRESHOLD: u8 = 128;

const BLANK: Cell = Cell {
    ch: ' ',
    fg: (255, 255, 255),
    bg: (0, 0, 0),
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        TerminalSurface {
            out,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; cols as usize * rows as usize];
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Text of one row of the buffer, for inspection.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(col, row))
            .map(|c| c.ch)
            .collect()
    }

    /// World coordinates of the centre of a terminal cell.
    pub fn to_world(&self, col: u16, row: u16) -> (f32, f32) {
        let cols = self.cols.max(1) as f32;
        let rows = self.rows.max(1) as f32;
        (
            (col as f32 + 0.5) * WIDTH / cols,
            (row as f32 + 0.5) * HEIGHT / rows,
        )
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn scale(&self) -> (f32, f32) {
        (self.cols as f32 / WIDTH, self.rows as f32 / HEIGHT)
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> Option<&mut Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get_mut(row as usize * self.cols as usize + col as usize)
    }

    /// Cells spanned by `[lo, hi)` world units on one axis. A non-empty
    /// interval always covers at least one cell so thin ledges stay visible.
    fn span(lo: f32, hi: f32, scale: f32, max: u16) -> Range<u16> {
        let start = (lo * scale).round();
        let mut end = (hi * scale).round();
        if hi > lo && end <= start {
            end = start + 1.0;
        }
        let clamp = |v: f32| v.clamp(0.0, max as f32) as u16;
        clamp(start)..clamp(end)
    }

    fn rect_cells(&self, rect: &Rect) -> (Range<u16>, Range<u16>) {
        let (sx, sy) = self.scale();
        (
            Self::span(rect.left(), rect.right(), sx, self.cols),
            Self::span(rect.top(), rect.bottom(), sy, self.rows),
        )
    }

    fn put_char(&mut self, col: u16, row: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }
}

fn to_color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(BLANK);
        Ok(())
    }

    fn fill(&mut self, color: Rgb) -> io::Result<()> {
        self.cells.fill(Cell { bg: color, ..BLANK });
        Ok(())
    }

    fn filled_rect(&mut self, rect: &Rect, color: Rgb) -> io::Result<()> {
        let (cols, rows) = self.rect_cells(rect);
        for row in rows {
            for col in cols.clone() {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell { bg: color, ..BLANK };
                }
            }
        }
        Ok(())
    }

    fn rect(&mut self, rect: &Rect, color: Rgb) -> io::Result<()> {
        let (cols, rows) = self.rect_cells(rect);
        if cols.is_empty() || rows.is_empty() {
            return Ok(());
        }
        let (left, right) = (cols.start, cols.end - 1);
        let (top, bottom) = (rows.start, rows.end - 1);

        for col in cols {
            self.put_char(col, top, '─', color);
            self.put_char(col, bottom, '─', color);
        }
        for row in rows {
            self.put_char(left, row, '│', color);
            self.put_char(right, row, '│', color);
        }
        self.put_char(left, top, '┌', color);
        self.put_char(right, top, '┐', color);
        self.put_char(left, bottom, '└', color);
        self.put_char(right, bottom, '┘', color);
        Ok(())
    }

    fn text(&mut self, text: &str, at: TextAnchor, _size: f32, color: Rgb) -> io::Result<()> {
        let (sx, sy) = self.scale();
        let len = text.chars().count() as f32;
        let (col, row) = match at {
            TextAnchor::TopLeft(x, y) => ((x * sx).floor(), (y * sy).floor()),
            TextAnchor::Center(x, y) => ((x * sx - len / 2.0).round(), (y * sy).floor()),
        };
        if row < 0.0 {
            return Ok(());
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as f32;
            if c >= 0.0 {
                self.put_char(c as u16, row as u16, ch, color);
            }
        }
        Ok(())
    }

    fn blit(&mut self, sprite: &Sprite, x: f32, y: f32) -> io::Result<()> {
        let area = Rect::new(x, y, sprite.width() as f32, sprite.height() as f32);
        let (cols, rows) = self.rect_cells(&area);
        for row in rows {
            for col in cols.clone() {
                let (wx, wy) = self.to_world(col, row);
                let (px, py) = (wx - x, wy - y);
                if px < 0.0 || py < 0.0 {
                    continue;
                }
                let Some([r, g, b, a]) = sprite.pixel(px as u32, py as u32) else {
                    continue;
                };
                if a >= ALPHA_THRESHOLD {
                    if let Some(cell) = self.cell_mut(col, row) {
                        *cell = Cell { bg: (r, g, b), ..BLANK };
                    }
                }
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            let mut run = String::new();
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if current != Some((cell.fg, cell.bg)) {
                    if !run.is_empty() {
                        self.out.queue(Print(std::mem::take(&mut run)))?;
                    }
                    self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                    self.out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                self.out.queue(Print(run))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}
