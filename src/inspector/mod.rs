//! Selection and sampling core
//!
//! [`Inspector`] ties together the [`Selection`] state machine, the
//! [`Sampler`] and its [`SampleWindow`]. Every selection transition resets
//! the sampler inside the same `&mut self` call, so a tick or a render can
//! never observe a half-applied reset.
//!
//! # Main Types
//!
//! - [`Inspector`] - Entry point for UI events, ticks and plot frames
//! - [`Selection`] / [`SelectionState`] / [`ResetLevel`] - Object → component → member
//! - [`Sampler`] / [`TickOutcome`] - Per-tick value capture and channel metadata
//! - [`SampleWindow`] / [`SampleRow`] - Fixed-capacity FIFO of sample rows
//! - [`PlotFrame`] - Read-only snapshot handed to the renderer
//!
//! # Example
//!
//! ```ignore
//! let host = MockHost::demo();
//! let mut inspector = Inspector::new(&InspectorConfig::default(), 640.0);
//!
//! inspector.on_target_changed(&host, Some(player));
//! inspector.on_component_chosen(&host, "Rigidbody");
//! inspector.on_member_chosen("velocity");
//!
//! inspector.tick(&host);
//! renderer.render(&inspector.plot_frame(&host), size, &mut surface);
//! ```

pub mod sampler;
pub mod selection;
pub mod window;

pub use sampler::{SampleSource, Sampler, TickOutcome};
pub use selection::{ResetLevel, Selection, SelectionState};
pub use window::{SampleRow, SampleWindow};

use crate::backend::{ComponentInfo, Introspect, MemberCatalog, MemberDescriptor};
use crate::config::InspectorConfig;
use crate::types::{ChannelMeta, ObjectId};

/// Everything the plot renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct PlotFrame<'a> {
    /// Sampled history
    pub window: &'a SampleWindow,
    /// Per-channel legend labels and colors
    pub channels: &'a [ChannelMeta],
    /// False when no member is selected or the target object is gone
    pub active: bool,
}

/// Selection state machine plus rolling sample storage
#[derive(Debug, Clone)]
pub struct Inspector {
    catalog: MemberCatalog,
    selection: Selection,
    sampler: Sampler,
}

impl Inspector {
    /// Create an inspector whose window capacity is derived from the initial surface width
    pub fn new(config: &InspectorConfig, surface_width: f32) -> Self {
        Self::with_capacity(config, config.plot.window_capacity_for(surface_width))
    }

    /// Create an inspector with an explicit window capacity
    pub fn with_capacity(config: &InspectorConfig, capacity: usize) -> Self {
        tracing::debug!("Inspector window capacity: {} samples", capacity);
        Self {
            catalog: MemberCatalog::new(&config.catalog),
            selection: Selection::new(),
            sampler: Sampler::new(capacity, config.plot.palette),
        }
    }

    /// Clear `level` and everything below it, including all sampled history
    pub fn reset(&mut self, level: ResetLevel) {
        self.selection.reset(level);
        self.sampler.clear();
    }

    /// Replace the target object
    ///
    /// `None` or a dead object leaves the inspector empty.
    pub fn set_target(&mut self, host: &dyn Introspect, target: Option<ObjectId>) {
        self.selection.set_target(host, &self.catalog, target);
        self.sampler.clear();
        match self.selection.target() {
            Some(target) => tracing::debug!(
                "Target {} selected ({} plottable components)",
                target,
                self.selection.components().len()
            ),
            None => tracing::debug!("Target cleared"),
        }
    }

    /// Select one of the target's discovered sub-components
    ///
    /// Stale or foreign components are ignored.
    pub fn set_component(&mut self, host: &dyn Introspect, component: &ComponentInfo) -> bool {
        if !self.selection.set_component(host, &self.catalog, component) {
            tracing::debug!("Ignoring component {} not offered by current target", component.id);
            return false;
        }
        self.sampler.clear();
        true
    }

    /// Select one of the component's discovered members and start a fresh window
    ///
    /// Stale or foreign members are ignored.
    pub fn set_member(&mut self, member: &MemberDescriptor) -> bool {
        if !self.selection.set_member(member) {
            tracing::debug!("Ignoring member {} not offered by current component", member.name);
            return false;
        }
        self.sampler.arm(member);
        tracing::info!(
            "Plotting {} ({}, {} channels)",
            member.name,
            member.value_type,
            member.channel_count()
        );
        true
    }

    /// UI event: the object picker changed
    pub fn on_target_changed(&mut self, host: &dyn Introspect, target: Option<ObjectId>) {
        self.set_target(host, target);
    }

    /// UI event: a component was chosen by type name
    pub fn on_component_chosen(&mut self, host: &dyn Introspect, type_name: &str) -> bool {
        match self.selection.find_component(type_name).cloned() {
            Some(component) => self.set_component(host, &component),
            None => {
                tracing::debug!("Ignoring unknown component choice {:?}", type_name);
                false
            }
        }
    }

    /// UI event: a member was chosen by name
    pub fn on_member_chosen(&mut self, name: &str) -> bool {
        match self.selection.find_member(name).cloned() {
            Some(member) => self.set_member(&member),
            None => {
                tracing::debug!("Ignoring unknown member choice {:?}", name);
                false
            }
        }
    }

    /// Sample the selected member once
    pub fn tick(&mut self, host: &dyn Introspect) -> TickOutcome {
        let source = match (
            self.selection.target(),
            self.selection.component(),
            self.selection.member(),
        ) {
            (Some(target), Some(component), Some(member)) => Some(SampleSource {
                target,
                component,
                member,
            }),
            _ => None,
        };
        self.sampler.tick(host, source)
    }

    /// Snapshot for rendering
    pub fn plot_frame(&self, host: &dyn Introspect) -> PlotFrame<'_> {
        let target_alive = self
            .selection
            .target()
            .is_some_and(|t| host.is_alive(t.into()));
        PlotFrame {
            window: self.sampler.window(),
            channels: self.sampler.channels(),
            active: self.selection.state() == SelectionState::MemberPicked && target_alive,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn window(&self) -> &SampleWindow {
        self.sampler.window()
    }

    pub fn channels(&self) -> &[ChannelMeta] {
        self.sampler.channels()
    }

    /// Channels of the selected member, zero when no member is selected
    pub fn channel_count(&self) -> usize {
        self.sampler.channels().len()
    }

    /// Component type names to offer in the UI
    pub fn component_choices(&self) -> Vec<&str> {
        self.selection
            .components()
            .iter()
            .map(|c| c.type_name.as_str())
            .collect()
    }

    /// Member names to offer in the UI
    pub fn member_choices(&self) -> Vec<&str> {
        self.selection
            .members()
            .iter()
            .map(|m| m.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockHost, MockPattern, MockSource};
    use crate::types::ValueType;

    fn scene() -> (MockHost, ObjectId) {
        let mut host = MockHost::new();
        let obj = host.add_object("Player");
        let body = host.add_component(obj, "Rigidbody");
        host.add_property(body, "speed", ValueType::F32, MockPattern::Counter { start: 0.0, step: 1.0 });
        host.add_property(body, "velocity", ValueType::Vector(3), MockSource::vector(&[1.0, 2.0, 3.0]));
        (host, obj)
    }

    #[test]
    fn test_member_selection_arms_window() {
        let (host, obj) = scene();
        let mut inspector = Inspector::with_capacity(&InspectorConfig::default(), 16);
        inspector.on_target_changed(&host, Some(obj));
        assert!(inspector.on_component_chosen(&host, "Rigidbody"));
        assert_eq!(inspector.member_choices(), ["speed", "velocity"]);

        assert!(inspector.on_member_chosen("velocity"));
        assert_eq!(inspector.channel_count(), 3);
        assert_eq!(inspector.window().channel_count(), 3);
        assert_eq!(inspector.window().zero_padded().count(), 16);
    }

    #[test]
    fn test_unknown_choices_are_noops() {
        let (host, obj) = scene();
        let mut inspector = Inspector::with_capacity(&InspectorConfig::default(), 16);
        assert!(!inspector.on_component_chosen(&host, "Rigidbody"));
        inspector.on_target_changed(&host, Some(obj));
        assert!(!inspector.on_component_chosen(&host, "Collider"));
        assert!(!inspector.on_member_chosen("speed"));
        assert_eq!(inspector.state(), SelectionState::ObjectPicked);
    }

    #[test]
    fn test_plot_frame_activity() {
        let (mut host, obj) = scene();
        let mut inspector = Inspector::with_capacity(&InspectorConfig::default(), 16);
        assert!(!inspector.plot_frame(&host).active);

        inspector.on_target_changed(&host, Some(obj));
        inspector.on_component_chosen(&host, "Rigidbody");
        inspector.on_member_chosen("speed");
        assert!(inspector.plot_frame(&host).active);

        host.destroy_object(obj);
        assert!(!inspector.plot_frame(&host).active);
    }

    #[test]
    fn test_reset_discards_history() {
        let (host, obj) = scene();
        let mut inspector = Inspector::with_capacity(&InspectorConfig::default(), 16);
        inspector.on_target_changed(&host, Some(obj));
        inspector.on_component_chosen(&host, "Rigidbody");
        inspector.on_member_chosen("speed");
        inspector.tick(&host);
        assert_eq!(inspector.window().len(), 1);

        inspector.reset(ResetLevel::Member);
        assert_eq!(inspector.state(), SelectionState::ComponentPicked);
        assert!(inspector.window().is_empty());
        assert_eq!(inspector.channel_count(), 0);
        assert_eq!(inspector.tick(&host), TickOutcome::Idle);
    }
}
