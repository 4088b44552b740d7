//! Mock Host Implementation for Testing
//!
//! This module provides an in-memory object graph implementing [`Introspect`].
//! It is used by the test suite and by the desktop binary, which has no real
//! host to attach to.
//!
//! # Features
//!
//! - **Objects and components**: Build an arbitrary graph of named objects and typed components
//! - **Fields and properties**: Declare attributes in order, with any [`ValueType`]
//! - **Pattern-based values**: Values are generated from the host's tick counter, so runs are
//!   reproducible
//! - **Destruction**: Objects and components can be destroyed (and revived) to exercise
//!   liveness handling
//!
//! # Data Patterns
//!
//! - [`MockPattern::Constant`] - Fixed value
//! - [`MockPattern::Counter`] - `start + step * tick`
//! - [`MockPattern::Sine`] - Sinusoid with a period measured in ticks
//! - [`MockPattern::Sawtooth`] - Linear ramp that resets every period
//!
//! # Example
//!
//! ```ignore
//! use telemetry_inspector::backend::mock_host::{MockHost, MockPattern};
//! use telemetry_inspector::types::ValueType;
//!
//! let mut host = MockHost::new();
//! let player = host.add_object("Player");
//! let body = host.add_component(player, "Rigidbody");
//! host.add_property(body, "speed", ValueType::F32, MockPattern::Counter { start: 0.0, step: 1.0 });
//!
//! host.advance();
//! ```

use super::introspect::{AttributeInfo, ComponentInfo, Introspect, MemberAccess};
use crate::types::{ComponentId, Handle, HostValue, ObjectId, ValueType};
use std::collections::BTreeMap;

/// Pattern for generating mock values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockPattern {
    /// Constant value
    Constant(f64),
    /// Counter that increments by `step` every tick
    Counter { start: f64, step: f64 },
    /// Sine wave with a period in ticks
    Sine {
        period: f64,
        amplitude: f64,
        offset: f64,
    },
    /// Sawtooth from 0 to `amplitude` over `period` ticks
    Sawtooth { period: f64, amplitude: f64 },
}

impl MockPattern {
    /// Generate the value at the given tick
    pub fn value_at(&self, tick: u64) -> f64 {
        let t = tick as f64;
        match *self {
            MockPattern::Constant(v) => v,
            MockPattern::Counter { start, step } => start + step * t,
            MockPattern::Sine {
                period,
                amplitude,
                offset,
            } => {
                if period <= 0.0 {
                    return offset;
                }
                offset + amplitude * (std::f64::consts::TAU * t / period).sin()
            }
            MockPattern::Sawtooth { period, amplitude } => {
                if period <= 0.0 {
                    return 0.0;
                }
                amplitude * ((t % period) / period)
            }
        }
    }
}

/// Where a mock attribute gets its value from
#[derive(Debug, Clone, PartialEq)]
pub enum MockSource {
    /// Single patterned number
    Scalar(MockPattern),
    /// One pattern per vector element
    Vector(Vec<MockPattern>),
    /// Fixed host value, e.g. text or an opaque reference
    Fixed(HostValue),
}

impl MockSource {
    /// A constant vector
    pub fn vector(values: &[f64]) -> Self {
        MockSource::Vector(values.iter().map(|&v| MockPattern::Constant(v)).collect())
    }

    fn value_at(&self, tick: u64) -> HostValue {
        match self {
            MockSource::Scalar(pattern) => HostValue::Float(pattern.value_at(tick)),
            MockSource::Vector(patterns) => {
                HostValue::Vector(patterns.iter().map(|p| p.value_at(tick)).collect())
            }
            MockSource::Fixed(value) => value.clone(),
        }
    }
}

impl From<MockPattern> for MockSource {
    fn from(pattern: MockPattern) -> Self {
        MockSource::Scalar(pattern)
    }
}

#[derive(Debug, Clone)]
struct MockAttribute {
    info: AttributeInfo,
    source: MockSource,
}

#[derive(Debug, Clone)]
struct MockComponent {
    owner: ObjectId,
    type_name: String,
    fields: Vec<MockAttribute>,
    properties: Vec<MockAttribute>,
    alive: bool,
}

#[derive(Debug, Clone)]
struct MockObject {
    name: String,
    components: Vec<ComponentId>,
    alive: bool,
}

/// In-memory host object graph
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    objects: BTreeMap<ObjectId, MockObject>,
    components: BTreeMap<ComponentId, MockComponent>,
    next_id: u64,
    tick: u64,
}

impl MockHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// A small scene with a few typical objects, used by the desktop binary
    pub fn demo() -> Self {
        let mut host = Self::new();

        let player = host.add_object("Player");
        let transform = host.add_component(player, "Transform");
        host.add_field(transform, "name", ValueType::Text, MockSource::Fixed(HostValue::Text("player".into())));
        host.add_property(
            transform,
            "position",
            ValueType::Vector(3),
            MockSource::Vector(vec![
                MockPattern::Sine { period: 240.0, amplitude: 4.0, offset: 0.0 },
                MockPattern::Constant(1.0),
                MockPattern::Sine { period: 180.0, amplitude: 2.5, offset: 0.0 },
            ]),
        );
        host.add_property(
            transform,
            "rotation",
            ValueType::Vector(4),
            MockSource::Vector(vec![
                MockPattern::Constant(0.0),
                MockPattern::Sine { period: 300.0, amplitude: 1.0, offset: 0.0 },
                MockPattern::Constant(0.0),
                MockPattern::Sine { period: 300.0, amplitude: 1.0, offset: 0.0 },
            ]),
        );
        let body = host.add_component(player, "Rigidbody");
        host.add_field(body, "mass", ValueType::F32, MockPattern::Constant(1.0));
        host.add_property(
            body,
            "speed",
            ValueType::F32,
            MockPattern::Sawtooth { period: 120.0, amplitude: 8.0 },
        );
        host.add_property(
            body,
            "velocity",
            ValueType::Vector(3),
            MockSource::Vector(vec![
                MockPattern::Sine { period: 90.0, amplitude: 3.0, offset: 0.0 },
                MockPattern::Sawtooth { period: 60.0, amplitude: -2.0 },
                MockPattern::Sine { period: 150.0, amplitude: 1.5, offset: 0.5 },
            ]),
        );
        host.add_property(body, "sleeping", ValueType::Bool, MockSource::Fixed(HostValue::Bool(false)));

        let lamp = host.add_object("Lamp");
        let light = host.add_component(lamp, "Light");
        host.add_property(
            light,
            "intensity",
            ValueType::F32,
            MockPattern::Sine { period: 200.0, amplitude: 0.5, offset: 1.0 },
        );
        host.add_property(
            light,
            "uv",
            ValueType::Vector(2),
            MockSource::Vector(vec![
                MockPattern::Sawtooth { period: 100.0, amplitude: 1.0 },
                MockPattern::Sawtooth { period: 50.0, amplitude: 1.0 },
            ]),
        );
        host.add_component(lamp, "Marker");

        let counter = host.add_object("Counter");
        let ticker = host.add_component(counter, "Ticker");
        host.add_field(ticker, "count", ValueType::U32, MockPattern::Counter { start: 0.0, step: 1.0 });

        host
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Add an object
    pub fn add_object(&mut self, name: impl Into<String>) -> ObjectId {
        let id = ObjectId(self.next_id());
        self.objects.insert(
            id,
            MockObject {
                name: name.into(),
                components: Vec::new(),
                alive: true,
            },
        );
        id
    }

    /// Add a component to an object
    ///
    /// Adding to an unknown object still returns a handle, but the component
    /// is unreachable from any object.
    pub fn add_component(&mut self, owner: ObjectId, type_name: impl Into<String>) -> ComponentId {
        let id = ComponentId(self.next_id());
        self.components.insert(
            id,
            MockComponent {
                owner,
                type_name: type_name.into(),
                fields: Vec::new(),
                properties: Vec::new(),
                alive: true,
            },
        );
        if let Some(object) = self.objects.get_mut(&owner) {
            object.components.push(id);
        }
        id
    }

    /// Declare a public field
    pub fn add_field(
        &mut self,
        component: ComponentId,
        name: impl Into<String>,
        value_type: ValueType,
        source: impl Into<MockSource>,
    ) {
        if let Some(c) = self.components.get_mut(&component) {
            c.fields.push(MockAttribute {
                info: AttributeInfo::new(name, value_type),
                source: source.into(),
            });
        }
    }

    /// Declare a readable property
    pub fn add_property(
        &mut self,
        component: ComponentId,
        name: impl Into<String>,
        value_type: ValueType,
        source: impl Into<MockSource>,
    ) {
        if let Some(c) = self.components.get_mut(&component) {
            c.properties.push(MockAttribute {
                info: AttributeInfo::new(name, value_type),
                source: source.into(),
            });
        }
    }

    /// Replace the value source of an existing attribute
    ///
    /// Returns false if the attribute does not exist.
    pub fn set_source(
        &mut self,
        component: ComponentId,
        access: &MemberAccess,
        source: impl Into<MockSource>,
    ) -> bool {
        let Some(c) = self.components.get_mut(&component) else {
            return false;
        };
        let group = match access {
            MemberAccess::Field(_) => &mut c.fields,
            MemberAccess::Property(_) => &mut c.properties,
        };
        match group.iter_mut().find(|a| a.info.name == access.name()) {
            Some(attr) => {
                attr.source = source.into();
                true
            }
            None => false,
        }
    }

    /// Destroy an object; its components become unreachable
    pub fn destroy_object(&mut self, id: ObjectId) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.alive = false;
            tracing::debug!("Mock object {} destroyed", id);
        }
    }

    /// Bring a destroyed object back
    pub fn revive_object(&mut self, id: ObjectId) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.alive = true;
        }
    }

    /// Destroy a single component
    pub fn destroy_component(&mut self, id: ComponentId) {
        if let Some(component) = self.components.get_mut(&id) {
            component.alive = false;
            tracing::debug!("Mock component {} destroyed", id);
        }
    }

    /// Advance the value clock by one tick
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Current value clock
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Live objects with their names, for an object picker
    pub fn objects(&self) -> Vec<(ObjectId, String)> {
        self.objects
            .iter()
            .filter(|(_, o)| o.alive)
            .map(|(id, o)| (*id, o.name.clone()))
            .collect()
    }

    /// Name of an object, dead or alive
    pub fn object_name(&self, id: ObjectId) -> Option<&str> {
        self.objects.get(&id).map(|o| o.name.as_str())
    }

    fn live_component(&self, id: ComponentId) -> Option<&MockComponent> {
        let component = self.components.get(&id).filter(|c| c.alive)?;
        self.objects
            .get(&component.owner)
            .filter(|o| o.alive)
            .map(|_| component)
    }
}

impl Introspect for MockHost {
    fn sub_components(&self, target: ObjectId) -> Vec<ComponentInfo> {
        let Some(object) = self.objects.get(&target).filter(|o| o.alive) else {
            return Vec::new();
        };
        object
            .components
            .iter()
            .filter_map(|id| {
                self.live_component(*id).map(|c| ComponentInfo {
                    id: *id,
                    type_name: c.type_name.clone(),
                })
            })
            .collect()
    }

    fn fields(&self, component: ComponentId) -> Vec<AttributeInfo> {
        self.live_component(component)
            .map(|c| c.fields.iter().map(|a| a.info.clone()).collect())
            .unwrap_or_default()
    }

    fn properties(&self, component: ComponentId) -> Vec<AttributeInfo> {
        self.live_component(component)
            .map(|c| c.properties.iter().map(|a| a.info.clone()).collect())
            .unwrap_or_default()
    }

    fn read(&self, component: ComponentId, access: &MemberAccess) -> Option<HostValue> {
        let c = self.live_component(component)?;
        let group = match access {
            MemberAccess::Field(_) => &c.fields,
            MemberAccess::Property(_) => &c.properties,
        };
        group
            .iter()
            .find(|a| a.info.name == access.name())
            .map(|a| a.source.value_at(self.tick))
    }

    fn is_alive(&self, handle: Handle) -> bool {
        match handle {
            Handle::Object(id) => self.objects.get(&id).is_some_and(|o| o.alive),
            Handle::Component(id) => self.live_component(id).is_some(),
        }
    }
}
