//! Side panel with the object, component and member pickers.
//!
//! The panel only presents names and reports what the operator picked; the
//! app forwards the choice to the [`Inspector`] as a UI event.

use egui::{RichText, Ui};

use crate::inspector::{Inspector, SelectionState};
use crate::types::ObjectId;

/// A choice made in the selection panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    Target(Option<ObjectId>),
    Component(String),
    Member(String),
}

/// Context needed to render the selection panel.
pub struct SelectionPanelContext<'a> {
    /// Live objects offered by the object picker
    pub objects: &'a [(ObjectId, String)],
    pub inspector: &'a Inspector,
}

/// Render the selection panel, returning at most one action per frame.
pub fn render_selection_panel(ui: &mut Ui, ctx: &SelectionPanelContext<'_>) -> Option<SelectionAction> {
    let mut action = None;
    let selection = ctx.inspector.selection();

    ui.heading("Object to analyze");
    let target_text = selection
        .target()
        .and_then(|t| ctx.objects.iter().find(|(id, _)| *id == t))
        .map(|(_, name)| name.as_str())
        .unwrap_or("None");
    egui::ComboBox::from_id_salt("selection_object")
        .selected_text(target_text)
        .width(180.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(selection.target().is_none(), "None").clicked() {
                action = Some(SelectionAction::Target(None));
            }
            for (id, name) in ctx.objects {
                if ui.selectable_label(selection.target() == Some(*id), name).clicked() {
                    action = Some(SelectionAction::Target(Some(*id)));
                }
            }
        });

    ui.add_space(8.0);
    ui.label("Component");
    ui.add_enabled_ui(selection.state() >= SelectionState::ObjectPicked, |ui| {
        let current = selection.component().map(|c| c.type_name.as_str());
        egui::ComboBox::from_id_salt("selection_component")
            .selected_text(current.unwrap_or("Select..."))
            .width(180.0)
            .show_ui(ui, |ui| {
                let choices = ctx.inspector.component_choices();
                if choices.is_empty() {
                    ui.label("No plottable components");
                }
                for name in choices {
                    if ui.selectable_label(current == Some(name), name).clicked() {
                        action = Some(SelectionAction::Component(name.to_string()));
                    }
                }
            });
    });

    ui.add_space(8.0);
    ui.label("Variable");
    ui.add_enabled_ui(selection.state() >= SelectionState::ComponentPicked, |ui| {
        let current = selection.member().map(|m| m.name.as_str());
        egui::ComboBox::from_id_salt("selection_member")
            .selected_text(current.unwrap_or("Select..."))
            .width(180.0)
            .show_ui(ui, |ui| {
                for member in selection.members() {
                    let label = format!("{} ({})", member.name, member.value_type);
                    if ui
                        .selectable_label(current == Some(member.name.as_str()), label)
                        .clicked()
                    {
                        action = Some(SelectionAction::Member(member.name.clone()));
                    }
                }
            });
    });

    ui.add_space(12.0);
    ui.separator();
    ui.label(RichText::new(format!("State: {}", selection.state())).small());
    let window = ctx.inspector.window();
    ui.label(
        RichText::new(format!(
            "Samples: {} / {} ({} channels)",
            window.len(),
            window.capacity(),
            ctx.inspector.channel_count()
        ))
        .small(),
    );

    action
}
