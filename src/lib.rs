//! # Telemetry Inspector: live numeric member plotting
//!
//! Pick an object in a running host, one of its components, and one numeric
//! member of that component; the inspector samples the member once per tick
//! and draws its most recent history as a scrolling line plot, one line per
//! channel.
//!
//! ## Architecture
//!
//! - **Backend**: The [`backend::Introspect`] capability over the host object
//!   graph, member discovery in [`backend::MemberCatalog`], and an in-memory
//!   [`backend::MockHost`]
//! - **Inspector**: Selection state machine, per-tick sampler and the
//!   fixed-capacity sample window
//! - **Frontend**: Backend-agnostic plot renderer plus the eframe/egui desktop app
//!
//! ## Configuration
//!
//! Settings are stored as JSON in the platform-appropriate data directory
//! under `dev.telemetry-inspector`:
//!
//! - **Linux**: `~/.local/share/dev.telemetry-inspector/`
//! - **macOS**: `~/Library/Application Support/dev.telemetry-inspector/`
//! - **Windows**: `%APPDATA%\dev.telemetry-inspector\`
//!
//! ## Example
//!
//! ```ignore
//! use telemetry_inspector::{
//!     backend::MockHost,
//!     config::InspectorConfig,
//!     frontend::{CommandRecorder, PlotRect, PlotRenderer},
//!     inspector::Inspector,
//! };
//!
//! let config = InspectorConfig::default();
//! let host = MockHost::demo();
//! let player = host.objects()[0].0;
//!
//! let mut inspector = Inspector::new(&config, 640.0);
//! inspector.on_target_changed(&host, Some(player));
//! inspector.on_component_chosen(&host, "Rigidbody");
//! inspector.on_member_chosen("speed");
//! inspector.tick(&host);
//!
//! let mut recorder = CommandRecorder::new();
//! PlotRenderer::new(config.plot.clone()).render(
//!     &inspector.plot_frame(&host),
//!     PlotRect::new(640.0, 480.0),
//!     &mut recorder,
//! );
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod inspector;
pub mod types;

// Re-export commonly used types
pub use backend::{Introspect, MemberCatalog, MockHost};
pub use config::InspectorConfig;
pub use error::{InspectorError, Result};
pub use frontend::{InspectorApp, PlotRenderer};
pub use inspector::{Inspector, ResetLevel, SelectionState, TickOutcome};
