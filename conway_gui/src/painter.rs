// painter.rs - conway::Surface on top of an egui Painter

use conway::{CellRect, Rgb, Surface};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

const LINE_WIDTH: f32 = 1.0;

/// Draws in grid coordinates, offset by the top-left corner of the allocated area.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn at(&self, (x, y): (f32, f32)) -> Pos2 {
        self.origin + Vec2::new(x, y)
    }
}

fn color32(Rgb(r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl Surface for EguiSurface<'_> {
    fn fill(&mut self, color: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, color32(color));
    }

    fn fill_rect(&mut self, rect: CellRect, color: Rgb) {
        let rect = Rect::from_min_size(self.at((rect.x, rect.y)), Vec2::splat(rect.size));
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb) {
        self.painter.line_segment(
            [self.at(from), self.at(to)],
            Stroke::new(LINE_WIDTH, color32(color)),
        );
    }

    fn draw_text(&mut self, pos: (f32, f32), text: &str, size: f32, color: Rgb) {
        self.painter.text(
            self.at(pos),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size),
            color32(color),
        );
    }
}
