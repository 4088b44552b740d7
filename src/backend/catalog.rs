//! Member discovery
//!
//! [`MemberCatalog`] turns the host's raw field/property listings into the
//! sub-components and members the operator can choose from. It holds no state
//! beyond its policy; every call goes back to the host.
//!
//! Fields and properties are treated differently: every public field is
//! listed, while properties are listed only when their declared type is a
//! numeric scalar or a 2..4 element numeric vector. A field whose type is not
//! numeric is surfaced as a scalar and simply yields no samples.
//! [`CatalogConfig::filter_fields`] applies the property rule to fields too.

use super::introspect::{AttributeInfo, ComponentInfo, Introspect, MemberAccess};
use crate::config::CatalogConfig;
use crate::types::{ComponentId, MemberKind, ObjectId, ValueType};

/// One plottable attribute of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    /// Display name
    pub name: String,
    /// Channel shape
    pub kind: MemberKind,
    /// Declared host type
    pub value_type: ValueType,
    /// How to fetch the value
    pub access: MemberAccess,
}

impl MemberDescriptor {
    /// Number of channels this member produces
    pub fn channel_count(&self) -> usize {
        self.kind.channel_count()
    }

    /// Whether this member is read from a field (as opposed to a property)
    pub fn is_field(&self) -> bool {
        matches!(self.access, MemberAccess::Field(_))
    }
}

/// A discovered sub-component and whether it has anything to plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub info: ComponentInfo,
    pub is_plottable: bool,
}

/// Discovery policy over an [`Introspect`] host
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberCatalog {
    filter_fields: bool,
}

impl MemberCatalog {
    /// Create a catalog from configuration
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            filter_fields: config.filter_fields,
        }
    }

    /// Whether non-numeric fields are excluded
    pub fn filters_fields(&self) -> bool {
        self.filter_fields
    }

    /// Enumerate an object's sub-components with their plottability
    pub fn discover_components(
        &self,
        host: &dyn Introspect,
        target: ObjectId,
    ) -> Vec<ComponentEntry> {
        host.sub_components(target)
            .into_iter()
            .map(|info| {
                let has_field = host
                    .fields(info.id)
                    .iter()
                    .any(|f| self.accepts_field(f));
                let is_plottable =
                    has_field || host.properties(info.id).iter().any(|p| p.value_type.is_numeric());
                ComponentEntry { info, is_plottable }
            })
            .collect()
    }

    /// Sub-components that can be selected
    pub fn plottable_components(
        &self,
        host: &dyn Introspect,
        target: ObjectId,
    ) -> Vec<ComponentInfo> {
        self.discover_components(host, target)
            .into_iter()
            .filter(|entry| entry.is_plottable)
            .map(|entry| entry.info)
            .collect()
    }

    /// Enumerate a component's members: fields first, then qualifying properties
    pub fn discover_members(
        &self,
        host: &dyn Introspect,
        component: ComponentId,
    ) -> Vec<MemberDescriptor> {
        let fields = host
            .fields(component)
            .into_iter()
            .filter(|f| self.accepts_field(f))
            .map(|f| MemberDescriptor {
                kind: f.value_type.classify().unwrap_or(MemberKind::Scalar),
                value_type: f.value_type,
                access: MemberAccess::Field(f.name.clone()),
                name: f.name,
            });

        let properties = host.properties(component).into_iter().filter_map(|p| {
            let kind = p.value_type.classify()?;
            Some(MemberDescriptor {
                kind,
                value_type: p.value_type,
                access: MemberAccess::Property(p.name.clone()),
                name: p.name,
            })
        });

        fields.chain(properties).collect()
    }

    fn accepts_field(&self, field: &AttributeInfo) -> bool {
        !self.filter_fields || field.value_type.is_numeric()
    }
}
