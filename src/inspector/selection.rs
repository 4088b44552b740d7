//! Selection state machine
//!
//! Tracks the chosen target object, sub-component and member, along with the
//! choices discovered for each level. Changing a level always clears every
//! level below it, through the single [`Selection::reset`] operation.
//!
//! ```text
//!  Empty ──set_target──▶ ObjectPicked ──set_component──▶ ComponentPicked ──set_member──▶ MemberPicked
//!    ▲                                                                                        │
//!    └──────────────────────────── set_target(None) from any state ──────────────────────────┘
//! ```

use crate::backend::{ComponentInfo, Introspect, MemberCatalog, MemberDescriptor};
use crate::types::ObjectId;

/// Depth of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    ObjectPicked,
    ComponentPicked,
    MemberPicked,
}

impl std::fmt::Display for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionState::Empty => write!(f, "Empty"),
            SelectionState::ObjectPicked => write!(f, "Object picked"),
            SelectionState::ComponentPicked => write!(f, "Component picked"),
            SelectionState::MemberPicked => write!(f, "Member picked"),
        }
    }
}

/// Which selection level is being replaced; that level and all below it are cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResetLevel {
    Target,
    Component,
    Member,
}

/// Current target, component and member, plus the choices for each level
#[derive(Debug, Clone, Default)]
pub struct Selection {
    target: Option<ObjectId>,
    components: Vec<ComponentInfo>,
    component: Option<ComponentInfo>,
    members: Vec<MemberDescriptor>,
    member: Option<MemberDescriptor>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear `level` and every level below it
    pub fn reset(&mut self, level: ResetLevel) {
        if level <= ResetLevel::Target {
            self.target = None;
            self.components.clear();
        }
        if level <= ResetLevel::Component {
            self.component = None;
            self.members.clear();
        }
        self.member = None;
    }

    /// Pick a new target object
    ///
    /// Always clears the previous selection. A missing or dead object leaves
    /// the selection empty.
    pub fn set_target(
        &mut self,
        host: &dyn Introspect,
        catalog: &MemberCatalog,
        target: Option<ObjectId>,
    ) {
        self.reset(ResetLevel::Target);
        let Some(target) = target.filter(|t| host.is_alive((*t).into())) else {
            return;
        };
        self.target = Some(target);
        self.components = catalog.plottable_components(host, target);
    }

    /// Pick one of the target's discovered sub-components
    ///
    /// Returns false and changes nothing if there is no target or the
    /// component is not among the discovered choices.
    pub fn set_component(
        &mut self,
        host: &dyn Introspect,
        catalog: &MemberCatalog,
        component: &ComponentInfo,
    ) -> bool {
        if self.target.is_none() || !self.components.contains(component) {
            return false;
        }
        self.reset(ResetLevel::Component);
        self.members = catalog.discover_members(host, component.id);
        self.component = Some(component.clone());
        true
    }

    /// Pick one of the component's discovered members
    ///
    /// Returns false and changes nothing if there is no component or the
    /// member is not among the discovered choices.
    pub fn set_member(&mut self, member: &MemberDescriptor) -> bool {
        if self.component.is_none() || !self.members.contains(member) {
            return false;
        }
        self.reset(ResetLevel::Member);
        self.member = Some(member.clone());
        true
    }

    /// Current depth
    pub fn state(&self) -> SelectionState {
        if self.member.is_some() {
            SelectionState::MemberPicked
        } else if self.component.is_some() {
            SelectionState::ComponentPicked
        } else if self.target.is_some() {
            SelectionState::ObjectPicked
        } else {
            SelectionState::Empty
        }
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    pub fn component(&self) -> Option<&ComponentInfo> {
        self.component.as_ref()
    }

    pub fn member(&self) -> Option<&MemberDescriptor> {
        self.member.as_ref()
    }

    /// Selectable sub-components of the current target
    pub fn components(&self) -> &[ComponentInfo] {
        &self.components
    }

    /// Selectable members of the current component
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// First selectable component with the given type name
    pub fn find_component(&self, type_name: &str) -> Option<&ComponentInfo> {
        self.components.iter().find(|c| c.type_name == type_name)
    }

    /// Selectable member with the given name
    pub fn find_member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }
}
