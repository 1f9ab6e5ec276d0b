//! Macro data types and the macro store
//!
//! Macros are pure data: a named, ordered list of (command, args) steps.
//! There is no nesting and no branching; the run semantics (structural
//! pre-validation, first-failure interruption) live in the dispatcher.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One step of a macro: a command name plus its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroStep {
    /// Command name, resolved against the registry at run time
    pub command: String,

    /// Ordered string arguments passed to the handler
    #[serde(default)]
    pub args: Vec<String>,
}

impl MacroStep {
    /// Create a step from a command name and arguments
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Create a step with string-literal arguments
    pub fn with_args(command: impl Into<String>, args: &[&str]) -> Self {
        Self::new(command, args.iter().map(ToString::to_string).collect())
    }
}

/// Named ordered sequence of command invocations, run as a unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub steps: Vec<MacroStep>,
}

impl Macro {
    /// Create a macro from its steps
    pub fn new(steps: Vec<MacroStep>) -> Self {
        Self { steps }
    }

    /// Number of declared steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the macro declares no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Store mapping macro names to their definitions
///
/// Registering an existing name overwrites the prior macro, mirroring the
/// command registry's binding semantics.
#[derive(Debug, Clone, Default)]
pub struct MacroStore {
    macros: HashMap<String, Macro>,
}

impl MacroStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            macros: HashMap::new(),
        }
    }

    /// Bind a macro to a name, overwriting any prior definition
    pub fn register(&mut self, name: impl Into<String>, definition: Macro) {
        let name = name.into();
        if self.macros.insert(name.clone(), definition).is_some() {
            debug!(macro_name = %name, "macro re-registered, prior definition dropped");
        }
    }

    /// Unbind a name; returns whether a definition existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.macros.remove(name).is_some()
    }

    /// Look up a macro definition by exact name
    pub fn lookup(&self, name: &str) -> Option<&Macro> {
        self.macros.get(name)
    }

    /// Check whether a name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Number of registered macros
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// True if no macros are registered
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Load macro definitions from a JSON object of name -> step list
    ///
    /// The expected shape is `{"recovery": [{"command": "heal", "args":
    /// ["50"]}, {"command": "status"}]}`. Loaded names overwrite existing
    /// definitions, same as `register`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the document does not
    /// match the expected shape. The store is unchanged on error.
    pub fn load_json(&mut self, json: &str) -> serde_json::Result<()> {
        let definitions: HashMap<String, Vec<MacroStep>> = serde_json::from_str(json)?;
        for (name, steps) in definitions {
            self.register(name, Macro::new(steps));
        }
        Ok(())
    }
}
