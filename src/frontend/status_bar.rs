//! Bottom status bar showing sampling state

use egui::{Color32, RichText, Ui};

use crate::inspector::TickOutcome;

/// Context needed to render the status bar.
pub struct StatusBarContext {
    pub last_outcome: TickOutcome,
    pub tick_rate_hz: u32,
    pub total_ticks: u64,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let (status_color, status_text) = match ctx.last_outcome {
            TickOutcome::Sampled => (Color32::GREEN, "Sampling"),
            TickOutcome::Idle => (Color32::GRAY, "Idle"),
            TickOutcome::Stale => (Color32::YELLOW, "Target lost"),
            TickOutcome::Unreadable => (Color32::LIGHT_RED, "Not numeric"),
        };
        ui.colored_label(status_color, "●");
        ui.label(RichText::new(status_text).small());

        ui.separator();

        ui.label(RichText::new(format!("Rate: {} Hz", ctx.tick_rate_hz)).small());

        ui.separator();

        ui.label(RichText::new(format!("Ticks: {}", ctx.total_ticks)).small());
    });
}
