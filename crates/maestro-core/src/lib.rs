//! Maestro Core - named-command dispatcher with an audit trail and macros
//!
//! This crate provides the dispatching kernel for a single stateful entity:
//! - A registry binding command names to opaque handler capabilities
//! - A dispatcher that snapshots entity state around every invocation and
//!   records each attempt (success, handler failure, or lookup miss) in an
//!   append-only history
//! - Macros: named ordered (command, args) sequences validated structurally
//!   before any step runs, with contained partial-failure semantics
//! - Typed errors, structured tracing, and textual rendering helpers
//!
//! Everything is single-threaded and synchronous: one `CommandCenter` owns
//! the entity, registry, macro store, and history, and serializes all
//! mutation through `&mut self`.

pub mod dispatcher;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod logging;
pub mod macros;
pub mod model;
pub mod registry;
pub mod render;

// Re-export commonly used types
pub use dispatcher::{CommandCenter, MacroOutcome};
pub use errors::{DispatchError, ErrorKind, Result};
pub use handlers::{
    CommandHandler, DamageCommand, DrainCommand, HealCommand, ResetCommand, StatusCommand,
};
pub use history::{History, HistoryEntry};
pub use macros::{Macro, MacroStep, MacroStore};
pub use model::{Entity, ATTR_MAX};
pub use registry::CommandRegistry;
