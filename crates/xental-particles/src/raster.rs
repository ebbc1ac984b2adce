//! Terminal raster: a pixel buffer drawn with upper half-block glyphs.
//!
//! Each terminal cell holds two vertically stacked pixels, the top one in the
//! foreground color and the bottom one in the background color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};
use xental_core::{Rgba, Size, Vec2};

use crate::surface::Surface;

const HALF_BLOCK: &str = "▀";

/// RGB pixel buffer sized to a terminal area.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Width in pixels (one per column).
    width: usize,
    /// Height in pixels (two per row).
    height: usize,
    /// Surface units covered by one pixel.
    units_per_pixel: f32,
    pixels: Vec<[f32; 3]>,
}

impl Raster {
    pub fn new(cols: u16, rows: u16, units_per_pixel: f32) -> Self {
        let mut raster = Self {
            width: 0,
            height: 0,
            units_per_pixel: units_per_pixel.max(f32::EPSILON),
            pixels: Vec::new(),
        };
        raster.resize(cols, rows);
        raster
    }

    /// Match a new terminal size. Clears to black.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols as usize;
        self.height = rows as usize * 2;
        self.pixels = vec![[0.0; 3]; self.width * self.height];
    }

    /// Surface position at the center of a terminal cell.
    pub fn cell_to_surface(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.units_per_pixel,
            (row as f32 * 2.0 + 1.0) * self.units_per_pixel,
        )
    }

    /// Pixel value at (x, y), if inside.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let index = y as usize * self.width + x as usize;
        self.pixels[index] = color.blend_over(self.pixels[index]);
    }

    fn to_pixel(&self, p: Vec2) -> (f32, f32) {
        (p.x / self.units_per_pixel, p.y / self.units_per_pixel)
    }
}

impl Surface for Raster {
    fn size(&self) -> Size {
        Size::new(
            self.width as f32 * self.units_per_pixel,
            self.height as f32 * self.units_per_pixel,
        )
    }

    fn fade(&mut self, color: Rgba) {
        for pixel in &mut self.pixels {
            *pixel = color.blend_over(*pixel);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (cx, cy) = self.to_pixel(center);
        let r = radius / self.units_per_pixel;
        let mut covered = false;
        for y in (cy - r).floor() as i64..=(cy + r).ceil() as i64 {
            for x in (cx - r).floor() as i64..=(cx + r).ceil() as i64 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, color);
                    covered = true;
                }
            }
        }
        // Sub-pixel dots still light the pixel they sit in.
        if !covered {
            self.blend(cx.floor() as i64, cy.floor() as i64, color);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let (x0, y0) = self.to_pixel(from);
        let (x1, y1) = self.to_pixel(to);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as i64;
        let mut last = None;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = (x0 + (x1 - x0) * t).floor() as i64;
            let y = (y0 + (y1 - y0) * t).floor() as i64;
            if last != Some((x, y)) {
                self.blend(x, y, color);
                last = Some((x, y));
            }
        }
    }
}

/// Convert a float pixel to a terminal color.
fn pixel_color(pixel: [f32; 3]) -> Color {
    let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
    Color::Rgb(channel(pixel[0]), channel(pixel[1]), channel(pixel[2]))
}

impl Widget for &Raster {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as usize;
                let top = self.pixel(x, row as usize * 2).unwrap_or_default();
                let bottom = self.pixel(x, row as usize * 2 + 1).unwrap_or_default();
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(pixel_color(top))
                        .set_bg(pixel_color(bottom));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xental_core::palette;

    #[test]
    fn test_size_in_surface_units() {
        let raster = Raster::new(80, 24, 4.0);
        assert_eq!(raster.size(), Size::new(320.0, 192.0));
        assert_eq!(raster.cell_to_surface(0, 0), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_fade_decays_toward_black() {
        let mut raster = Raster::new(2, 1, 1.0);
        raster.fill_circle(Vec2::new(0.5, 0.5), 0.1, palette::WHITE);
        let lit = raster.pixel(0, 0).unwrap();
        assert_eq!(lit, [255.0, 255.0, 255.0]);

        raster.fade(palette::BLACK.with_alpha(0.05));
        let faded = raster.pixel(0, 0).unwrap();
        assert!((faded[0] - 255.0 * 0.95).abs() < 1e-3);
    }

    #[test]
    fn test_line_touches_both_ends() {
        let mut raster = Raster::new(10, 5, 1.0);
        raster.stroke_line(Vec2::new(0.5, 0.5), Vec2::new(9.5, 9.5), palette::TEAL);
        assert_ne!(raster.pixel(0, 0).unwrap(), [0.0; 3]);
        assert_ne!(raster.pixel(9, 9).unwrap(), [0.0; 3]);
        assert_eq!(raster.pixel(9, 0).unwrap(), [0.0; 3]);
    }

    #[test]
    fn test_out_of_bounds_draws_are_clipped() {
        let mut raster = Raster::new(4, 2, 1.0);
        raster.fill_circle(Vec2::new(-10.0, -10.0), 3.0, palette::WHITE);
        raster.stroke_line(Vec2::new(-5.0, 1.0), Vec2::new(-1.0, 1.0), palette::WHITE);
        assert!((0..4).all(|x| (0..4).all(|y| raster.pixel(x, y) == Some([0.0; 3]))));
    }

    #[test]
    fn test_render_half_blocks() {
        let mut raster = Raster::new(1, 1, 1.0);
        raster.fill_circle(Vec2::new(0.5, 0.5), 0.2, palette::WHITE);
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        (&raster).render(area, &mut buf);
        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }
}
