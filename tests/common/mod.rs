//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use telemetry_inspector::config::InspectorConfig;
use telemetry_inspector::inspector::Inspector;

/// Inspector with a fixed window capacity and default settings
pub fn inspector_with_capacity(capacity: usize) -> Inspector {
    Inspector::with_capacity(&InspectorConfig::default(), capacity)
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
