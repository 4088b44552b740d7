//! Test data builders for creating host scenes

use telemetry_inspector::backend::{MockHost, MockPattern, MockSource};
use telemetry_inspector::types::{ComponentId, ObjectId, ValueType};

/// A built scene with handles to everything that was added
pub struct Scene {
    pub host: MockHost,
    pub object: ObjectId,
    pub component: ComponentId,
}

/// Builder for a single object with one component
pub struct SceneBuilder {
    object_name: String,
    component_type: String,
    fields: Vec<(String, ValueType, MockSource)>,
    properties: Vec<(String, ValueType, MockSource)>,
}

impl SceneBuilder {
    pub fn new(object_name: &str, component_type: &str) -> Self {
        Self {
            object_name: object_name.to_string(),
            component_type: component_type.to_string(),
            fields: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, value_type: ValueType, source: impl Into<MockSource>) -> Self {
        self.fields.push((name.to_string(), value_type, source.into()));
        self
    }

    pub fn property(
        mut self,
        name: &str,
        value_type: ValueType,
        source: impl Into<MockSource>,
    ) -> Self {
        self.properties.push((name.to_string(), value_type, source.into()));
        self
    }

    pub fn build(self) -> Scene {
        let mut host = MockHost::new();
        let object = host.add_object(self.object_name);
        let component = host.add_component(object, self.component_type);
        for (name, value_type, source) in self.fields {
            host.add_field(component, name, value_type, source);
        }
        for (name, value_type, source) in self.properties {
            host.add_property(component, name, value_type, source);
        }
        Scene {
            host,
            object,
            component,
        }
    }
}

/// Object `T` with component `C` exposing `speed` (counter 0, 1, 2, ...) and `velocity` (Vector3)
pub fn speed_velocity_scene() -> Scene {
    SceneBuilder::new("T", "C")
        .property(
            "speed",
            ValueType::F32,
            MockPattern::Counter {
                start: 0.0,
                step: 1.0,
            },
        )
        .property(
            "velocity",
            ValueType::Vector(3),
            MockSource::Vector(vec![
                MockPattern::Counter {
                    start: 0.0,
                    step: 1.0,
                },
                MockPattern::Constant(-2.0),
                MockPattern::Constant(0.5),
            ]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry_inspector::backend::Introspect;

    #[test]
    fn test_scene_builder() {
        let scene = SceneBuilder::new("Player", "Rigidbody")
            .field("mass", ValueType::F32, MockPattern::Constant(1.0))
            .build();

        let components = scene.host.sub_components(scene.object);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].type_name, "Rigidbody");
        assert_eq!(scene.host.fields(scene.component)[0].name, "mass");
    }
}
