use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::handlers::CommandHandler;

/// Registry mapping command names to their handlers
///
/// Names are exact-match string keys with no ordering guarantees.
/// Registering an existing name overwrites the prior binding; removing an
/// absent name is a silent no-op. The registry is a leaf dependency of the
/// dispatcher and holds no entity or history state of its own.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Bind a handler to a name, overwriting any prior binding
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        let name = name.into();
        if self.commands.insert(name.clone(), handler).is_some() {
            debug!(command = %name, "command re-registered, prior binding dropped");
        }
    }

    /// Unbind a name; returns whether a binding existed
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.commands.remove(name).is_some();
        if !removed {
            debug!(command = %name, "remove requested for unregistered command");
        }
        removed
    }

    /// Check whether a name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Look up a handler for mutable dispatch
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn CommandHandler>> {
        self.commands.get_mut(name)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Handlers are opaque trait objects; show the bound names only
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CommandRegistry")
            .field("commands", &names)
            .finish()
    }
}
