//=========================================================================
// Raster
//=========================================================================
//
// Software `Canvas` over a 0x00RRGGBB pixel buffer.
//
// Architecture:
//   GameState::draw → Raster (logical px × scale) → pixels → softbuffer
//
// States draw in the 1280×720 logical space; every coordinate is
// multiplied by `scale` on the way in, so the same frame fills a
// high-DPI buffer. Text is rasterized from glyph outlines with
// coverage-weighted blending.
//
//=========================================================================

//=== External Dependencies ===============================================

use ab_glyph::{point, Font, FontRef, InvalidFont, PxScale, ScaleFont};

//=== Internal Dependencies ===============================================

use crate::core::canvas::{Canvas, Color, Rect};

//=== Font ================================================================

/// Loads the embedded UI font.
pub(crate) fn ui_font() -> Result<FontRef<'static>, InvalidFont> {
    FontRef::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)
}

//=== Raster ==============================================================

/// [`Canvas`] that writes straight into a pixel slice.
pub(crate) struct Raster<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
    scale: f32,
    font: &'a FontRef<'static>,
}

impl<'a> Raster<'a> {
    /// `pixels` must hold at least `width * height` entries.
    pub fn new(
        pixels: &'a mut [u32],
        width: u32,
        height: u32,
        scale: f32,
        font: &'a FontRef<'static>,
    ) -> Self {
        debug_assert!(pixels.len() >= width as usize * height as usize);
        Self {
            pixels,
            width: width as usize,
            height: height as usize,
            scale,
            font,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Blends `color` into one pixel with extra `coverage` in `0..=1`.
    fn blend(&mut self, x: usize, y: usize, color: Color, coverage: f32) {
        let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let dst = &mut self.pixels[y * self.width + x];
        *dst = if alpha >= 1.0 {
            pack(color.r, color.g, color.b)
        } else {
            let (r, g, b) = unpack(*dst);
            pack(
                mix(color.r, r, alpha),
                mix(color.g, g, alpha),
                mix(color.b, b, alpha),
            )
        };
    }

    /// Logical rect → clamped physical pixel span `(x0, y0, x1, y1)`.
    fn span(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let clamp_x = |v: f32| (v * self.scale).round().clamp(0.0, self.width as f32) as usize;
        let clamp_y = |v: f32| (v * self.scale).round().clamp(0.0, self.height as f32) as usize;
        (
            clamp_x(rect.x),
            clamp_y(rect.y),
            clamp_x(rect.x + rect.width),
            clamp_y(rect.y + rect.height),
        )
    }
}

impl Canvas for Raster<'_> {
    fn clear_background(&mut self, color: Color) {
        let fill = pack(color.r, color.g, color.b);
        let len = self.width * self.height;
        self.pixels[..len].fill(fill);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        let Rect { x, y, width, height } = rect;

        self.fill_rect(Rect::new(x, y, width, t), color);
        self.fill_rect(Rect::new(x, y + height - t, width, t), color);
        self.fill_rect(Rect::new(x, y + t, t, height - 2.0 * t), color);
        self.fill_rect(Rect::new(x + width - t, y + t, t, height - 2.0 * t), color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        let font = self.font;
        let px = PxScale::from(size as f32 * self.scale);
        let scaled = font.as_scaled(px);
        let baseline = y as f32 * self.scale + scaled.ascent();
        let mut caret = x as f32 * self.scale;

        for c in text.chars() {
            let id = font.glyph_id(c);
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            caret += scaled.h_advance(id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);

            outlined.draw(|gx, gy, coverage| {
                let tx = left + gx as i64;
                let ty = top + gy as i64;
                if tx >= 0 && ty >= 0 && (tx as usize) < self.width && (ty as usize) < self.height {
                    self.blend(tx as usize, ty as usize, color, coverage);
                }
            });
        }
    }

    fn measure_text(&self, text: &str, size: i32) -> i32 {
        let scaled = self.font.as_scaled(PxScale::from(size as f32));
        let width: f32 = text
            .chars()
            .map(|c| scaled.h_advance(self.font.glyph_id(c)))
            .sum();
        width.round() as i32
    }
}

//=== Pixel Packing =======================================================

fn pack(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

fn unpack(pixel: u32) -> (u8, u8, u8) {
    ((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}

fn mix(src: u8, dst: u8, alpha: f32) -> u8 {
    (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 64;
    const H: u32 = 32;

    fn buffer() -> Vec<u32> {
        vec![0; (W * H) as usize]
    }

    fn at(pixels: &[u32], x: u32, y: u32) -> u32 {
        pixels[(y * W + x) as usize]
    }

    #[test]
    fn embedded_font_loads() {
        assert!(ui_font().is_ok());
    }

    #[test]
    fn clear_fills_every_pixel() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        Raster::new(&mut pixels, W, H, 1.0, &font).clear_background(Color::rgb(1, 2, 3));

        assert!(pixels.iter().all(|&p| p == 0x0001_0203));
    }

    #[test]
    fn fill_rect_is_clipped_and_half_open() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let mut raster = Raster::new(&mut pixels, W, H, 1.0, &font);

        raster.fill_rect(Rect::new(60.0, 10.0, 20.0, 2.0), Color::WHITE);

        assert_eq!(at(&pixels, 60, 10), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 63, 11), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 63, 12), 0);
        assert_eq!(at(&pixels, 59, 10), 0);
    }

    #[test]
    fn translucent_fill_blends_with_background() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let mut raster = Raster::new(&mut pixels, W, H, 1.0, &font);

        raster.clear_background(Color::WHITE);
        raster.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgba(0, 0, 0, 102));

        let (r, g, b) = unpack(at(&pixels, 1, 1));
        assert_eq!((r, g, b), (153, 153, 153));
        assert_eq!(at(&pixels, 5, 5), 0x00FF_FFFF);
    }

    #[test]
    fn scale_maps_logical_to_physical_pixels() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let mut raster = Raster::new(&mut pixels, W, H, 2.0, &font);

        raster.fill_rect(Rect::new(1.0, 1.0, 1.0, 1.0), Color::WHITE);

        assert_eq!(at(&pixels, 2, 2), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 3, 3), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 1, 1), 0);
        assert_eq!(at(&pixels, 4, 4), 0);
    }

    #[test]
    fn stroke_leaves_the_interior_untouched() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let mut raster = Raster::new(&mut pixels, W, H, 1.0, &font);

        raster.stroke_rect(Rect::new(10.0, 10.0, 20.0, 10.0), 2.0, Color::WHITE);

        assert_eq!(at(&pixels, 10, 10), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 29, 19), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 11, 15), 0x00FF_FFFF);
        assert_eq!(at(&pixels, 20, 15), 0);
    }

    #[test]
    fn text_touches_pixels_near_its_origin() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let mut raster = Raster::new(&mut pixels, W, H, 1.0, &font);

        raster.draw_text("HI", 2, 2, 20, Color::WHITE);

        let lit: Vec<usize> = pixels
            .iter()
            .enumerate()
            .filter(|(_, &p)| p != 0)
            .map(|(i, _)| i)
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&i| (i % W as usize) < 40 && (i / W as usize) < 26));
    }

    #[test]
    fn text_outside_the_buffer_is_clipped() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let mut raster = Raster::new(&mut pixels, W, H, 1.0, &font);

        raster.draw_text("OFFSCREEN", 500, 500, 20, Color::WHITE);
        raster.draw_text("LEFT", -200, -5, 20, Color::WHITE);

        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn measure_grows_with_length_and_size() {
        let font = ui_font().unwrap();
        let mut pixels = buffer();
        let raster = Raster::new(&mut pixels, W, H, 1.0, &font);

        assert_eq!(raster.measure_text("", 20), 0);
        assert!(raster.measure_text("PLAY", 20) > raster.measure_text("PL", 20));
        assert!(raster.measure_text("PLAY", 40) > raster.measure_text("PLAY", 20));
    }
}
