//! Plot rendering module
//!
//! This module turns a [`PlotFrame`] into drawing primitives. The renderer
//! never talks to a graphics API directly; it drives a [`DrawSurface`], which
//! is implemented by the egui painter for the desktop app and by
//! [`CommandRecorder`] for tests.
//!
//! # Frame Layout
//!
//! Every frame is drawn in the same order:
//!
//! 1. Tiled checkerboard background filling the plot rectangle
//! 2. X axis through the vertical middle (the zero line), Y axis on the left edge
//! 3. One polyline per channel, oldest sample on the left
//! 4. Legend with one swatch and label per channel
//!
//! Steps 3 and 4 are skipped when the frame is inactive (no member selected
//! or the target object is gone). An empty plot is a normal state.
//!
//! # Main Types
//!
//! - [`PlotRenderer`] - Stateless renderer configured by [`PlotConfig`]
//! - [`DrawSurface`] - Drawing capability consumed by the renderer
//! - [`DrawCommand`] / [`CommandRecorder`] - Recorded primitives for inspection

use crate::config::PlotConfig;
use crate::inspector::{PlotFrame, SampleRow};
use crate::types::Color;

/// Fraction of the half-height used by the largest sample
const VERTICAL_FILL: f32 = 0.9;

/// Plot-local rectangle; the origin is the top-left corner, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub width: f32,
    pub height: f32,
}

impl PlotRect {
    pub fn new(width: f32, height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: clean(width),
            height: clean(height),
        }
    }

    /// Y coordinate of the zero line
    pub fn zero_y(&self) -> f32 {
        self.height * 0.5
    }
}

/// Immediate-mode drawing capability
///
/// Coordinates are plot-local (see [`PlotRect`]).
pub trait DrawSurface {
    /// Fill `rect` with alternating tiles of edge `tile_size`
    fn draw_tiled_background(&mut self, rect: PlotRect, tile_size: f32, dark: Color, light: Color);

    /// Draw the X and Y axes crossing at `origin`
    fn draw_axes(&mut self, rect: PlotRect, origin: [f32; 2], color: Color);

    /// Draw a connected line through `points`
    fn draw_polyline(&mut self, points: &[[f32; 2]], color: Color, width: f32);

    /// Draw legend entry number `slot`
    fn draw_legend_entry(&mut self, slot: usize, label: &str, color: Color);
}

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    TiledBackground {
        rect: PlotRect,
        tile_size: f32,
        dark: Color,
        light: Color,
    },
    Axes {
        rect: PlotRect,
        origin: [f32; 2],
        color: Color,
    },
    Polyline {
        points: Vec<[f32; 2]>,
        color: Color,
        width: f32,
    },
    LegendEntry {
        slot: usize,
        label: String,
        color: Color,
    },
}

/// Surface that records primitives instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded polylines in draw order
    pub fn polylines(&self) -> impl Iterator<Item = (&[[f32; 2]], Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, color, .. } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    /// Recorded legend labels in draw order
    pub fn legend_labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::LegendEntry { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for CommandRecorder {
    fn draw_tiled_background(&mut self, rect: PlotRect, tile_size: f32, dark: Color, light: Color) {
        self.commands.push(DrawCommand::TiledBackground {
            rect,
            tile_size,
            dark,
            light,
        });
    }

    fn draw_axes(&mut self, rect: PlotRect, origin: [f32; 2], color: Color) {
        self.commands.push(DrawCommand::Axes { rect, origin, color });
    }

    fn draw_polyline(&mut self, points: &[[f32; 2]], color: Color, width: f32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn draw_legend_entry(&mut self, slot: usize, label: &str, color: Color) {
        self.commands.push(DrawCommand::LegendEntry {
            slot,
            label: label.to_string(),
            color,
        });
    }
}

/// Renders sample history as a scrolling multi-series line plot
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    config: PlotConfig,
}

impl PlotRenderer {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Render one frame
    pub fn render(&self, frame: &PlotFrame<'_>, rect: PlotRect, surface: &mut dyn DrawSurface) {
        let rect = PlotRect::new(rect.width, rect.height);

        surface.draw_tiled_background(
            rect,
            self.config.tile_size,
            self.config.checker_dark,
            self.config.checker_light,
        );
        let origin = [0.0, rect.zero_y()];
        surface.draw_axes(rect, origin, self.config.axis_color);

        if !frame.active || frame.channels.is_empty() {
            return;
        }

        let rows: Vec<SampleRow> = if self.config.pad_with_zeros {
            frame.window.zero_padded().collect()
        } else {
            frame.window.rows().copied().collect()
        };

        let x_step = rect.width / (frame.window.capacity().saturating_sub(1).max(1)) as f32;
        let y_scale = vertical_scale(&rows, rect);

        for (channel, meta) in frame.channels.iter().enumerate() {
            let points: Vec<[f32; 2]> = rows
                .iter()
                .enumerate()
                .filter_map(|(i, row)| {
                    let value = row.channel(channel).filter(|v| v.is_finite())?;
                    Some([i as f32 * x_step, origin[1] - value * y_scale])
                })
                .collect();
            if !points.is_empty() {
                surface.draw_polyline(&points, meta.color, self.config.line_width);
            }
        }

        if self.config.show_legend {
            for (slot, meta) in frame.channels.iter().enumerate() {
                surface.draw_legend_entry(slot, &meta.name, meta.color);
            }
        }
    }
}

/// Pixels per unit so the largest magnitude fills most of the half-height
fn vertical_scale(rows: &[SampleRow], rect: PlotRect) -> f32 {
    let peak = rows
        .iter()
        .flat_map(|row| row.values().iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0f32, |acc, v| acc.max(v.abs()));
    let peak = if peak > f32::EPSILON { peak } else { 1.0 };
    rect.zero_y() * VERTICAL_FILL / peak
}
