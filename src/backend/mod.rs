//! Backend module for host introspection
//!
//! This module is the boundary between the inspector and the host object
//! graph. The host is reached only through the [`Introspect`] trait, so the
//! selection and sampling code never touches host types directly.
//!
//! # Components
//!
//! - [`Introspect`] - Capability trait: enumerate sub-components, fields and properties,
//!   read values, check liveness
//! - [`MemberCatalog`] - Discovery policy that turns host listings into selectable
//!   components and [`MemberDescriptor`]s
//! - [`MockHost`] - In-memory object graph with patterned values, for tests and the
//!   desktop binary
//!
//! # Example
//!
//! ```ignore
//! use telemetry_inspector::backend::{MemberCatalog, MockHost};
//!
//! let host = MockHost::demo();
//! let catalog = MemberCatalog::default();
//! for (object, name) in host.objects() {
//!     for component in catalog.plottable_components(&host, object) {
//!         let members = catalog.discover_members(&host, component.id);
//!         println!("{name}.{}: {} members", component.type_name, members.len());
//!     }
//! }
//! ```

pub mod catalog;
pub mod introspect;
pub mod mock_host;

pub use catalog::{ComponentEntry, MemberCatalog, MemberDescriptor};
pub use introspect::{AttributeInfo, ComponentInfo, Introspect, MemberAccess};
pub use mock_host::{MockHost, MockPattern, MockSource};
