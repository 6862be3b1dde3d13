//! Canvas: a persistent pixel raster implementing [`Surface`].
//!
//! Pixels survive between frames, so the core renderer's paint-over updates
//! behave the same as on a browser canvas. For display, two vertically stacked
//! pixels are packed into one terminal cell using an upper-half block glyph
//! (foreground = top pixel, background = bottom pixel), which keeps pixels
//! roughly square on typical terminal fonts.

use crate::core::Surface;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Color;

const UPPER_HALF: char = '▀';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    fill: Color,
    stroke: Color,
}

impl Canvas {
    /// A black canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width as usize) * (height as usize)],
            fill: Color::BLACK,
            stroke: Color::BLACK,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + x as usize])
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + x as usize] = color;
        }
    }

    /// Size of the canvas in terminal cells.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width as u16, self.height.div_ceil(2) as u16)
    }

    /// Copy the canvas into `fb` with its top-left corner at (`x0`, `y0`).
    pub fn blit_into(&self, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let (cols, rows) = self.cell_size();
        for row in 0..rows {
            let top = row as u32 * 2;
            for col in 0..cols {
                let fg = self.pixel(col as u32, top).unwrap_or_default();
                let bg = self.pixel(col as u32, top + 1).unwrap_or(Color::BLACK);
                fb.put_char(
                    x0.saturating_add(col),
                    y0.saturating_add(row),
                    UPPER_HALF,
                    CellStyle::new(fg, bg),
                );
            }
        }
    }
}

impl Surface for Canvas {
    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.put(px, py, self.fill);
            }
        }
    }

    /// One-pixel outline along the rectangle's inner edge.
    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        for px in x..=right {
            self.put(px, y, self.stroke);
            self.put(px, bottom, self.stroke);
        }
        for py in y..=bottom {
            self.put(x, py, self.stroke);
            self.put(right, py, self.stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn fill_then_stroke_leaves_interior() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_fill(RED);
        canvas.fill_rect(0, 0, 3, 3);
        canvas.set_stroke(Color::GRID);
        canvas.stroke_rect(0, 0, 3, 3);

        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color::GRID));
        assert_eq!(canvas.pixel(2, 1), Some(Color::GRID));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn drawing_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_fill(RED);
        canvas.fill_rect(1, 1, 5, 5);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn blit_packs_two_pixel_rows_per_cell() {
        let mut canvas = Canvas::new(1, 3);
        canvas.set_fill(RED);
        canvas.fill_rect(0, 1, 1, 1);

        let mut fb = FrameBuffer::new(2, 2);
        canvas.blit_into(&mut fb, 1, 0);

        let top = fb.get(1, 0).unwrap();
        assert_eq!(top.ch, UPPER_HALF);
        assert_eq!(top.style.fg, Color::BLACK);
        assert_eq!(top.style.bg, RED);
        // Odd height: the last cell's lower half is padding.
        assert_eq!(fb.get(1, 1).unwrap().style.bg, Color::BLACK);
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }
}
