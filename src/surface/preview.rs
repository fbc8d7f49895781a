use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use kurbo::Rect;

use crate::{
    foundation::core::{Affine, Canvas, Point},
    foundation::error::{ScoreReelError, ScoreReelResult},
    surface::{CardDraw, RenderSurface},
    timeline::intro::{IntroState, IntroText, LineState},
    timeline::scheduler::FrameState,
};

const PITCH_GREEN: Rgba<u8> = Rgba([34, 139, 34, 255]);
const INTRO_BACKDROP: Rgba<u8> = Rgba([0, 0, 0, 255]);
const INTRO_INK: Rgba<u8> = Rgba([255, 255, 255, 255]);
const STAT_INK: Rgba<u8> = Rgba([16, 185, 129, 255]);
const DETAIL_INK: Rgba<u8> = Rgba([209, 213, 219, 255]);

const TITLE_LINE_HEIGHT: f64 = 120.0;
const SUBTITLE_LINE_HEIGHT: f64 = 56.0;
const GLYPH_WIDTH: f64 = 0.55;
const STAT_BAND_HEIGHT: f64 = 96.0;
const DETAIL_ROW_HEIGHT: f64 = 44.0;
const PADDING: f64 = 24.0;

/// CPU layout preview: every card and intro line drawn as alpha-blended blocks.
///
/// Text is not shaped. Lines are drawn as bars sized to their character count, which is enough
/// to check placement, fades and counter progress frame by frame.
#[derive(Clone, Debug)]
pub struct PreviewSurface {
    canvas: Canvas,
    image: RgbaImage,
}

impl PreviewSurface {
    /// Blank surface the size of `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            image: RgbaImage::from_pixel(canvas.width, canvas.height, PITCH_GREEN),
        }
    }

    /// Pixels drawn so far.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the current pixels as a PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> ScoreReelResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))
            .map_err(ScoreReelError::from)
    }

    fn canvas_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        )
    }

    fn fill(&mut self, rect: Rect, color: Rgba<u8>, opacity: f64) {
        let clipped = rect.intersect(self.canvas_rect());
        if clipped.area() <= 0.0 || opacity <= 0.0 {
            return;
        }
        let x0 = clipped.x0.round() as u32;
        let y0 = clipped.y0.round() as u32;
        let x1 = (clipped.x1.round() as u32).min(self.canvas.width);
        let y1 = (clipped.y1.round() as u32).min(self.canvas.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let dst = self.image.get_pixel_mut(x, y);
                dst.0 = over(dst.0, color.0, opacity as f32);
            }
        }
    }

    fn draw_line(&mut self, text: &str, line: LineState, center_y: f64, height: f64) {
        let width = (text.chars().count() as f64 * height * GLYPH_WIDTH)
            .min(f64::from(self.canvas.width));
        let left = (f64::from(self.canvas.width) - width) / 2.0;
        let top = center_y - height / 2.0 + height * line.slide_pct / 100.0;
        // The line is masked to its own box while it slides up.
        let mask = Rect::new(left, center_y - height / 2.0, left + width, center_y + height / 2.0);
        let bar = Rect::new(left, top, left + width, top + height).intersect(mask);
        self.fill(bar, INTRO_INK, line.opacity);
    }
}

impl RenderSurface for PreviewSurface {
    fn begin_frame(&mut self, state: &FrameState) -> ScoreReelResult<()> {
        let bg = if state.intro.is_some() {
            INTRO_BACKDROP
        } else {
            PITCH_GREEN
        };
        for px in self.image.pixels_mut() {
            *px = bg;
        }
        Ok(())
    }

    fn draw_intro(&mut self, intro: &IntroState, text: &IntroText) -> ScoreReelResult<()> {
        let mid = f64::from(self.canvas.height) / 2.0;
        self.draw_line(&text.title, intro.title, mid - TITLE_LINE_HEIGHT / 2.0, TITLE_LINE_HEIGHT);
        self.draw_line(
            &text.subtitle,
            intro.subtitle,
            mid + SUBTITLE_LINE_HEIGHT,
            SUBTITLE_LINE_HEIGHT,
        );
        Ok(())
    }

    fn draw_card(&mut self, card: CardDraw<'_>) -> ScoreReelResult<()> {
        let (w, h) = card.template.size();
        let palette = card.template.palette();
        let opacity = card.state.opacity;

        let center_line = Affine::translate((0.0, f64::from(self.canvas.height) / 2.0));
        let origin = center_line * card.state.transform() * Point::new(0.0, -h / 2.0);
        let (left, top) = (origin.x, origin.y);
        let body = Rect::new(left, top, left + w, top + h);
        self.fill(body, palette.body, opacity);

        let header = Rect::new(left, top, left + w, top + card.template.header_height());
        self.fill(header, palette.header, opacity);

        let band_top = header.y1;
        let band = Rect::new(left, band_top, left + w, band_top + STAT_BAND_HEIGHT);
        self.fill(band, palette.stat_band, opacity);

        let target = card.content.stat_target.max(1);
        let progress = f64::from(card.stat_value.min(target)) / f64::from(target);
        let inner = band.inset(-PADDING);
        let bar = Rect::new(
            inner.x0,
            inner.y0,
            inner.x0 + inner.width() * progress,
            inner.y1,
        );
        self.fill(bar, STAT_INK, opacity);

        if card.template.shows_details() {
            let mut y = band.y1 + PADDING;
            for row in &card.content.details {
                if y + DETAIL_ROW_HEIGHT > body.y1 - PADDING {
                    break;
                }
                let len = (row.label.len() + row.value.chars().count()) as f64;
                let width = (len * DETAIL_ROW_HEIGHT * GLYPH_WIDTH * 0.5).min(w - 2.0 * PADDING);
                let line = Rect::new(
                    left + PADDING,
                    y + DETAIL_ROW_HEIGHT * 0.25,
                    left + PADDING + width,
                    y + DETAIL_ROW_HEIGHT * 0.75,
                );
                self.fill(line, DETAIL_INK, opacity);
                y += DETAIL_ROW_HEIGHT;
            }
        }
        Ok(())
    }
}

fn over(dst: [u8; 4], src: [u8; 4], opacity: f32) -> [u8; 4] {
    let opacity = opacity.clamp(0.0, 1.0);
    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), u16::from(sa));
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/surface/preview.rs"]
mod tests;
