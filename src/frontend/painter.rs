//! egui implementation of [`DrawSurface`]

use super::plot::{DrawSurface, PlotRect};
use crate::types::Color;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

const LEGEND_ROW_HEIGHT: f32 = 18.0;
const LEGEND_SWATCH: f32 = 12.0;
const LEGEND_MARGIN: f32 = 8.0;
const LEGEND_WIDTH: f32 = 120.0;

/// Convert a plot color to egui
pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Paints plot primitives into a screen rectangle
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    screen: Rect,
    font: FontId,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, screen: Rect) -> Self {
        Self {
            painter,
            screen,
            font: FontId::proportional(12.0),
        }
    }

    fn to_screen(&self, [x, y]: [f32; 2]) -> Pos2 {
        self.screen.min + Vec2::new(x, y)
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn draw_tiled_background(&mut self, rect: PlotRect, tile_size: f32, dark: Color, light: Color) {
        let area = Rect::from_min_size(self.screen.min, Vec2::new(rect.width, rect.height));
        self.painter.rect_filled(area, 0.0, to_color32(dark));

        if tile_size <= 0.0 {
            return;
        }
        let light = to_color32(light);
        let cols = (rect.width / tile_size).ceil() as usize;
        let rows = (rect.height / tile_size).ceil() as usize;
        for row in 0..rows {
            for col in (row % 2..cols).step_by(2) {
                let min = self.to_screen([col as f32 * tile_size, row as f32 * tile_size]);
                let tile = Rect::from_min_size(min, Vec2::splat(tile_size)).intersect(area);
                self.painter.rect_filled(tile, 0.0, light);
            }
        }
    }

    fn draw_axes(&mut self, rect: PlotRect, origin: [f32; 2], color: Color) {
        let stroke = Stroke::new(1.0, to_color32(color));
        let [ox, oy] = origin;
        self.painter.line_segment(
            [self.to_screen([0.0, oy]), self.to_screen([rect.width, oy])],
            stroke,
        );
        self.painter.line_segment(
            [self.to_screen([ox, 0.0]), self.to_screen([ox, rect.height])],
            stroke,
        );
    }

    fn draw_polyline(&mut self, points: &[[f32; 2]], color: Color, width: f32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(points, Stroke::new(width, to_color32(color))));
    }

    fn draw_legend_entry(&mut self, slot: usize, label: &str, color: Color) {
        let top = LEGEND_MARGIN + slot as f32 * LEGEND_ROW_HEIGHT;
        let left = (self.screen.width() - LEGEND_WIDTH).max(LEGEND_MARGIN);
        let swatch = Rect::from_min_size(self.to_screen([left, top]), Vec2::splat(LEGEND_SWATCH));
        self.painter.rect_filled(swatch, 2.0, to_color32(color));
        self.painter.text(
            swatch.right_center() + Vec2::new(6.0, 0.0),
            Align2::LEFT_CENTER,
            label,
            self.font.clone(),
            Color32::WHITE,
        );
    }
}
