//! Frontend module for egui UI
//!
//! Hosts the desktop inspector: a side panel with the selection pickers, a
//! status bar, and a central plot painted through [`EguiSurface`]. Sampling
//! runs on the UI thread at a fixed rate, decoupled from the frame rate by
//! [`TickClock`].
//!
//! # Main Types
//!
//! - [`InspectorApp`] - Application state implementing [`eframe::App`]
//! - [`PlotRenderer`] - Backend-agnostic plot renderer
//! - [`TickClock`] - Fixed-rate tick accumulator

mod painter;
mod panels;
mod plot;
mod status_bar;

pub use painter::{to_color32, EguiSurface};
pub use panels::{render_selection_panel, SelectionAction, SelectionPanelContext};
pub use plot::{CommandRecorder, DrawCommand, DrawSurface, PlotRect, PlotRenderer};
pub use status_bar::{render_status_bar, StatusBarContext};

use std::time::{Duration, Instant};

use crate::backend::MockHost;
use crate::config::InspectorConfig;
use crate::inspector::{Inspector, TickOutcome};
use crate::types::ObjectId;

const SIDE_PANEL_WIDTH: f32 = 240.0;

/// Converts elapsed wall time into a bounded number of fixed-rate ticks
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    max_per_frame: u32,
    pending: Duration,
}

impl TickClock {
    pub fn new(interval: Duration, max_per_frame: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_micros(1)),
            max_per_frame: max_per_frame.max(1),
            pending: Duration::ZERO,
        }
    }

    /// Add elapsed time and return how many ticks are due
    ///
    /// Backlog beyond `max_per_frame` ticks is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let mut due = 0;
        while self.pending >= self.interval && due < self.max_per_frame {
            self.pending -= self.interval;
            due += 1;
        }
        if due == self.max_per_frame && self.pending >= self.interval {
            tracing::trace!("Dropping {:?} of tick backlog", self.pending);
            self.pending = Duration::ZERO;
        }
        due
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Desktop inspector over the demo host
pub struct InspectorApp {
    config: InspectorConfig,
    host: MockHost,
    /// Created on the first frame, once the plot width is known
    inspector: Option<Inspector>,
    renderer: PlotRenderer,
    clock: TickClock,
    last_frame: Instant,
    last_outcome: TickOutcome,
    total_ticks: u64,
    destroyed: Vec<ObjectId>,
}

impl InspectorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: InspectorConfig, host: MockHost) -> Self {
        let clock = TickClock::new(
            config.sampling.tick_interval(),
            config.sampling.max_ticks_per_frame,
        );
        Self {
            renderer: PlotRenderer::new(config.plot.clone()),
            config,
            host,
            inspector: None,
            clock,
            last_frame: Instant::now(),
            last_outcome: TickOutcome::Idle,
            total_ticks: 0,
            destroyed: Vec::new(),
        }
    }

    fn run_ticks(&mut self, inspector: &mut Inspector) {
        let now = Instant::now();
        let due = self.clock.advance(now - self.last_frame);
        self.last_frame = now;
        for _ in 0..due {
            self.last_outcome = inspector.tick(&self.host);
            self.host.advance();
            self.total_ticks += 1;
        }
    }

    fn apply_action(&mut self, inspector: &mut Inspector, action: SelectionAction) {
        match action {
            SelectionAction::Target(target) => inspector.on_target_changed(&self.host, target),
            SelectionAction::Component(name) => {
                inspector.on_component_chosen(&self.host, &name);
            }
            SelectionAction::Member(name) => {
                inspector.on_member_chosen(&name);
            }
        }
    }

    fn render_scene_menu(&mut self, ui: &mut egui::Ui, inspector: &Inspector) {
        ui.menu_button("Scene", |ui| {
            let target = inspector.selection().target();
            if ui
                .add_enabled(target.is_some(), egui::Button::new("Destroy Target"))
                .clicked()
            {
                if let Some(target) = target {
                    self.host.destroy_object(target);
                    self.destroyed.push(target);
                }
                ui.close();
            }
            if ui
                .add_enabled(!self.destroyed.is_empty(), egui::Button::new("Restore Objects"))
                .clicked()
            {
                for id in self.destroyed.drain(..) {
                    self.host.revive_object(id);
                }
                ui.close();
            }
        });
    }

    fn render_plot(&self, ui: &mut egui::Ui, inspector: &Inspector) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        let mut surface = EguiSurface::new(&painter, rect);
        self.renderer.render(
            &inspector.plot_frame(&self.host),
            PlotRect::new(rect.width(), rect.height()),
            &mut surface,
        );
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut inspector = match self.inspector.take() {
            Some(inspector) => inspector,
            None => {
                let plot_width = ctx.available_rect().width() - SIDE_PANEL_WIDTH;
                Inspector::new(&self.config, plot_width)
            }
        };

        self.run_ticks(&mut inspector);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.render_scene_menu(ui, &inspector);
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(
                ui,
                &StatusBarContext {
                    last_outcome: self.last_outcome,
                    tick_rate_hz: self.config.sampling.tick_rate_hz,
                    total_ticks: self.total_ticks,
                },
            );
        });

        let objects = self.host.objects();
        let action = egui::SidePanel::left("selection_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                render_selection_panel(
                    ui,
                    &SelectionPanelContext {
                        objects: &objects,
                        inspector: &inspector,
                    },
                )
            })
            .inner;
        if let Some(action) = action {
            self.apply_action(&mut inspector, action);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.render_plot(ui, &inspector));

        self.inspector = Some(inspector);
        ctx.request_repaint_after(self.clock.interval());
    }
}
