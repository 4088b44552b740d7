//! Introspect trait for the host object graph
//!
//! This module provides the capability the inspector consumes to discover and
//! read attributes of host objects, so that both a live host and the in-memory
//! mock host can drive the same selection and sampling code.

use crate::types::{ComponentId, Handle, HostValue, ObjectId, ValueType};

/// A sub-component as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
    /// Opaque component handle
    pub id: ComponentId,
    /// Type name shown to the operator
    pub type_name: String,
}

/// A public field or readable property as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
    /// Attribute name, unique within its group
    pub name: String,
    /// Declared type
    pub value_type: ValueType,
}

impl AttributeInfo {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// How a member's value is fetched from its component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberAccess {
    /// Public field, read directly
    Field(String),
    /// Readable property, read through its getter
    Property(String),
}

impl MemberAccess {
    /// Attribute name
    pub fn name(&self) -> &str {
        match self {
            MemberAccess::Field(name) | MemberAccess::Property(name) => name,
        }
    }
}

/// Unified interface over the host's reflection facilities
///
/// All methods must tolerate handles that have been destroyed: enumeration
/// returns empty lists and reads return `None`.
///
/// # Example
///
/// ```ignore
/// fn list_components(host: &dyn Introspect, target: ObjectId) -> Vec<String> {
///     host.sub_components(target).into_iter().map(|c| c.type_name).collect()
/// }
/// ```
pub trait Introspect {
    /// Sub-components of an object, in host order
    fn sub_components(&self, target: ObjectId) -> Vec<ComponentInfo>;

    /// Public instance fields of a component, in declaration order
    fn fields(&self, component: ComponentId) -> Vec<AttributeInfo>;

    /// Readable instance properties of a component, in declaration order
    fn properties(&self, component: ComponentId) -> Vec<AttributeInfo>;

    /// Read the current value of a member
    fn read(&self, component: ComponentId, access: &MemberAccess) -> Option<HostValue>;

    /// Check whether a handle still refers to a live host entity
    fn is_alive(&self, handle: Handle) -> bool;
}
