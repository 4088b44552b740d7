//! Integration tests for the selection and sampling workflow
//!
//! These tests drive the inspector the way the UI does:
//! - Picking target, component and member by name
//! - Ticking against a mock host that advances between ticks
//! - Cascading resets and liveness loss

mod common;

use common::builders::{speed_velocity_scene, SceneBuilder};
use common::{assert_float_eq, inspector_with_capacity};
use proptest::prelude::*;
use telemetry_inspector::backend::{MockHost, MockPattern, MockSource};
use telemetry_inspector::config::{CatalogConfig, InspectorConfig};
use telemetry_inspector::inspector::{Inspector, ResetLevel, SelectionState, TickOutcome};
use telemetry_inspector::types::{HostValue, ValueType};

fn run_ticks(inspector: &mut Inspector, host: &mut MockHost, n: usize) -> Vec<TickOutcome> {
    (0..n)
        .map(|_| {
            let outcome = inspector.tick(host);
            host.advance();
            outcome
        })
        .collect()
}

fn channel_names(inspector: &Inspector) -> Vec<&str> {
    inspector.channels().iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_speed_then_velocity_scenario() {
    let mut scene = speed_velocity_scene();
    let mut inspector = inspector_with_capacity(64);

    inspector.on_target_changed(&scene.host, Some(scene.object));
    assert_eq!(inspector.component_choices(), ["C"]);
    assert!(inspector.on_component_chosen(&scene.host, "C"));
    assert!(inspector.on_member_chosen("speed"));
    assert_eq!(inspector.channel_count(), 1);

    let outcomes = run_ticks(&mut inspector, &mut scene.host, 50);
    assert!(outcomes.iter().all(|o| *o == TickOutcome::Sampled));
    assert_eq!(inspector.window().len(), 50);
    assert_float_eq(inspector.window().latest().unwrap().values()[0], 49.0, 1e-6);

    assert!(inspector.on_member_chosen("velocity"));
    assert!(inspector.window().is_empty());
    assert_eq!(inspector.window().zero_padded().count(), 64);
    assert!(inspector
        .window()
        .zero_padded()
        .all(|row| row.values() == [0.0, 0.0, 0.0]));
    assert_eq!(inspector.channel_count(), 3);
    assert_eq!(channel_names(&inspector), ["X", "Y", "Z"]);

    run_ticks(&mut inspector, &mut scene.host, 1);
    assert_eq!(inspector.window().latest().unwrap().values(), [50.0, -2.0, 0.5]);
}

#[test]
fn test_window_smaller_than_tick_count_keeps_latest() {
    let mut scene = speed_velocity_scene();
    let mut inspector = inspector_with_capacity(20);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "C");
    inspector.on_member_chosen("speed");

    run_ticks(&mut inspector, &mut scene.host, 50);

    let values: Vec<f32> = inspector.window().channel(0).collect();
    let expected: Vec<f32> = (30..50).map(|v| v as f32).collect();
    assert_eq!(values, expected);
    assert!(inspector.window().is_full());
}

#[test]
fn test_component_change_cascades() {
    let mut scene = speed_velocity_scene();
    let mut inspector = inspector_with_capacity(16);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "C");
    inspector.on_member_chosen("velocity");
    run_ticks(&mut inspector, &mut scene.host, 5);

    // Re-choosing the same component still resets below it
    assert!(inspector.on_component_chosen(&scene.host, "C"));
    assert_eq!(inspector.state(), SelectionState::ComponentPicked);
    assert!(inspector.selection().member().is_none());
    assert!(inspector.window().is_empty());
    assert_eq!(inspector.channel_count(), 0);
    assert_eq!(inspector.tick(&scene.host), TickOutcome::Idle);
}

#[test]
fn test_target_change_clears_everything() {
    let mut scene = speed_velocity_scene();
    let other = scene.host.add_object("Other");
    let mut inspector = inspector_with_capacity(16);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "C");
    inspector.on_member_chosen("speed");
    run_ticks(&mut inspector, &mut scene.host, 3);

    inspector.on_target_changed(&scene.host, Some(other));
    assert_eq!(inspector.state(), SelectionState::ObjectPicked);
    assert!(inspector.component_choices().is_empty());
    assert!(inspector.window().is_empty());

    inspector.on_target_changed(&scene.host, None);
    assert_eq!(inspector.state(), SelectionState::Empty);
}

#[test]
fn test_explicit_reset_levels() {
    let scene = speed_velocity_scene();
    let mut inspector = inspector_with_capacity(16);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "C");
    inspector.on_member_chosen("speed");

    inspector.reset(ResetLevel::Member);
    assert_eq!(inspector.state(), SelectionState::ComponentPicked);
    assert_eq!(inspector.member_choices(), ["speed", "velocity"]);

    inspector.reset(ResetLevel::Component);
    assert_eq!(inspector.state(), SelectionState::ObjectPicked);
    assert!(inspector.member_choices().is_empty());

    inspector.reset(ResetLevel::Target);
    assert_eq!(inspector.state(), SelectionState::Empty);
}

#[test]
fn test_target_destroyed_freezes_window() {
    let mut scene = speed_velocity_scene();
    let mut inspector = inspector_with_capacity(32);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "C");
    inspector.on_member_chosen("speed");
    run_ticks(&mut inspector, &mut scene.host, 7);
    let frozen: Vec<f32> = inspector.window().channel(0).collect();

    scene.host.destroy_object(scene.object);
    let outcomes = run_ticks(&mut inspector, &mut scene.host, 10);

    assert!(outcomes.iter().all(|o| *o == TickOutcome::Stale));
    assert_eq!(inspector.window().len(), 7);
    assert_eq!(inspector.window().channel(0).collect::<Vec<_>>(), frozen);
    assert!(!inspector.plot_frame(&scene.host).active);

    // Sampling resumes when the object comes back
    scene.host.revive_object(scene.object);
    assert_eq!(inspector.tick(&scene.host), TickOutcome::Sampled);
    assert_eq!(inspector.window().len(), 8);
}

#[test]
fn test_component_destroyed_keeps_plot_active() {
    let mut scene = speed_velocity_scene();
    let mut inspector = inspector_with_capacity(32);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "C");
    inspector.on_member_chosen("speed");
    run_ticks(&mut inspector, &mut scene.host, 4);

    scene.host.destroy_component(scene.component);
    assert_eq!(inspector.tick(&scene.host), TickOutcome::Stale);
    assert_eq!(inspector.window().len(), 4);
    assert!(inspector.plot_frame(&scene.host).active);
}

#[test]
fn test_dead_target_cannot_be_selected() {
    let mut scene = speed_velocity_scene();
    scene.host.destroy_object(scene.object);
    let mut inspector = inspector_with_capacity(8);

    inspector.on_target_changed(&scene.host, Some(scene.object));
    assert_eq!(inspector.state(), SelectionState::Empty);
}

#[test]
fn test_non_numeric_field_is_selectable_but_unreadable() {
    let mut scene = SceneBuilder::new("Player", "Transform")
        .field("name", ValueType::Text, MockSource::Fixed(HostValue::Text("p".into())))
        .field("mass", ValueType::F32, MockPattern::Constant(2.0))
        .property("tag", ValueType::Text, MockSource::Fixed(HostValue::Text("t".into())))
        .build();
    let mut inspector = inspector_with_capacity(8);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "Transform");
    assert_eq!(inspector.member_choices(), ["name", "mass"]);

    assert!(inspector.on_member_chosen("name"));
    let outcomes = run_ticks(&mut inspector, &mut scene.host, 3);
    assert!(outcomes.iter().all(|o| *o == TickOutcome::Unreadable));
    assert!(inspector.window().is_empty());

    assert!(inspector.on_member_chosen("mass"));
    assert_eq!(inspector.tick(&scene.host), TickOutcome::Sampled);
}

#[test]
fn test_field_filter_applies_property_rules() {
    let scene = SceneBuilder::new("Player", "Transform")
        .field("name", ValueType::Text, MockSource::Fixed(HostValue::Text("p".into())))
        .field("mass", ValueType::F32, MockPattern::Constant(2.0))
        .build();
    let config = InspectorConfig {
        catalog: CatalogConfig { filter_fields: true },
        ..Default::default()
    };
    let mut inspector = Inspector::with_capacity(&config, 8);
    inspector.on_target_changed(&scene.host, Some(scene.object));
    inspector.on_component_chosen(&scene.host, "Transform");
    assert_eq!(inspector.member_choices(), ["mass"]);
}

#[test]
fn test_component_without_numeric_members_is_hidden() {
    let mut host = MockHost::new();
    let obj = host.add_object("Lamp");
    host.add_component(obj, "Marker");
    let light = host.add_component(obj, "Light");
    host.add_property(light, "intensity", ValueType::F32, MockPattern::Constant(1.0));

    let mut inspector = inspector_with_capacity(8);
    inspector.on_target_changed(&host, Some(obj));
    assert_eq!(inspector.component_choices(), ["Light"]);
    assert!(!inspector.on_component_chosen(&host, "Marker"));
}

#[test]
fn test_demo_scene_is_fully_plottable() {
    let mut host = MockHost::demo();
    let mut inspector = inspector_with_capacity(32);
    let (player, _) = host
        .objects()
        .into_iter()
        .find(|(_, name)| name == "Player")
        .unwrap();

    inspector.on_target_changed(&host, Some(player));
    assert!(inspector.on_component_chosen(&host, "Transform"));
    assert!(inspector.on_member_chosen("rotation"));
    assert_eq!(channel_names(&inspector), ["X", "Y", "Z", "W"]);

    run_ticks(&mut inspector, &mut host, 10);
    assert_eq!(inspector.window().len(), 10);
    assert!(inspector.window().rows().all(|row| row.len() == 4));
}

proptest! {
    #[test]
    fn prop_capacity_and_channel_consistency(capacity in 1usize..40, ticks in 0usize..120, vector in any::<bool>()) {
        let mut scene = speed_velocity_scene();
        let mut inspector = inspector_with_capacity(capacity);
        inspector.on_target_changed(&scene.host, Some(scene.object));
        inspector.on_component_chosen(&scene.host, "C");
        inspector.on_member_chosen(if vector { "velocity" } else { "speed" });

        run_ticks(&mut inspector, &mut scene.host, ticks);

        let window = inspector.window();
        prop_assert_eq!(window.len(), ticks.min(capacity));
        prop_assert_eq!(inspector.channels().len(), inspector.channel_count());
        prop_assert!(window.rows().all(|row| row.len() == inspector.channel_count()));

        let first = ticks.saturating_sub(capacity);
        let expected: Vec<f32> = (first..ticks).map(|v| v as f32).collect();
        prop_assert_eq!(window.channel(0).collect::<Vec<_>>(), expected);
    }
}
