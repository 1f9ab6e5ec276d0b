//! Command dispatch and macro execution
//!
//! `CommandCenter` is the single dispatching context: it owns the target
//! entity, the command registry, the macro store, and the history log, and
//! serializes every mutating call through `&mut self`.
//!
//! ## Dispatch contract
//!
//! `execute` appends exactly one history entry per call, whatever the
//! outcome, and never swallows a failure: handler errors are recorded first
//! and then returned unchanged. Entity mutation happens only inside the
//! handler invocation; history mutation happens only here.
//!
//! ## Macro contract
//!
//! A macro either runs to completion/first-runtime-failure, or is rejected
//! atomically up front when any step names an unregistered command. Runtime
//! step failures are contained: `execute_macro` reports them as a
//! [`MacroOutcome`] value instead of returning an `Err`, because partial
//! application mid-sequence is an expected terminal outcome, not an
//! exceptional control path.

use tracing::{info, warn};

use crate::errors::{DispatchError, Result};
use crate::handlers::{
    CommandHandler, DamageCommand, DrainCommand, HealCommand, ResetCommand, StatusCommand,
};
use crate::history::{History, HistoryEntry};
use crate::macros::{Macro, MacroStore};
use crate::model::Entity;
use crate::registry::CommandRegistry;

/// Terminal outcome of one macro run
///
/// A run moves through Pending -> Validating -> {Aborted | Running} ->
/// {Completed | Interrupted}; the four variants here are the terminal
/// states, all reported by value so callers pattern-match instead of
/// catching errors. Step indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroOutcome {
    /// Every step ran and succeeded
    Completed { steps: usize },

    /// No macro is registered under the requested name; nothing ran
    NotFound { name: String },

    /// Structural rejection before any step ran: a step names an
    /// unregistered command. Zero side effects, zero history entries.
    Aborted { step: usize, command: String },

    /// A step failed at runtime; earlier steps stay committed, later steps
    /// never ran
    Interrupted { step: usize, error: DispatchError },
}

impl MacroOutcome {
    /// True only for `Completed`
    pub fn is_success(&self) -> bool {
        matches!(self, MacroOutcome::Completed { .. })
    }
}

impl std::fmt::Display for MacroOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MacroOutcome::Completed { steps } => write!(f, "completed ({steps} steps)"),
            MacroOutcome::NotFound { name } => write!(f, "macro not found: {name}"),
            MacroOutcome::Aborted { step, command } => {
                write!(f, "aborted: step {step} names unknown command {command:?}")
            }
            MacroOutcome::Interrupted { step, error } => {
                write!(f, "interrupted at step {step}: {error}")
            }
        }
    }
}

/// Dispatching context owning the entity, registry, macros, and history
pub struct CommandCenter {
    entity: Entity,
    registry: CommandRegistry,
    macros: MacroStore,
    history: History,
}

impl CommandCenter {
    /// Create a dispatching context around the given entity
    ///
    /// Starts with no commands and no macros registered.
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            registry: CommandRegistry::new(),
            macros: MacroStore::new(),
            history: History::new(),
        }
    }

    /// Current entity state, read-only
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// The audit log, read-only and in occurrence order
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The command registry, read-only
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Bind a command handler, overwriting any prior binding
    pub fn register_command(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        self.registry.register(name, handler);
    }

    /// Unbind a command; returns whether a binding existed
    pub fn remove_command(&mut self, name: &str) -> bool {
        self.registry.remove(name)
    }

    /// Install the built-in handler set (heal, damage, drain, reset, status)
    pub fn register_builtins(&mut self) {
        self.registry.register("heal", Box::new(HealCommand));
        self.registry
            .register("damage", Box::new(DamageCommand::default()));
        self.registry.register("drain", Box::new(DrainCommand));
        self.registry.register("reset", Box::new(ResetCommand));
        self.registry.register("status", Box::new(StatusCommand));
    }

    /// Bind a macro definition, overwriting any prior one
    pub fn register_macro(&mut self, name: impl Into<String>, definition: Macro) {
        self.macros.register(name, definition);
    }

    /// Unbind a macro; returns whether a definition existed
    pub fn remove_macro(&mut self, name: &str) -> bool {
        self.macros.remove(name)
    }

    /// Execute one named command against the entity
    ///
    /// Resolves the name, snapshots the entity's rendered state around the
    /// handler call, and appends exactly one history entry: `Executed` with
    /// before/after on success, `Failed` on a handler rejection (recorded
    /// before the error propagates), or `UnknownCommand` on a lookup miss.
    ///
    /// # Errors
    ///
    /// * `CommandNotFound` - no handler is bound under `name`
    /// * any handler failure, propagated unchanged after being recorded
    pub fn execute(&mut self, name: &str, args: &[String]) -> Result<()> {
        let Some(handler) = self.registry.get_mut(name) else {
            warn!(command = name, "command not found");
            self.history.append(HistoryEntry::unknown(name));
            return Err(DispatchError::CommandNotFound {
                name: name.to_string(),
            });
        };

        let before = self.entity.status();
        match handler.run(&mut self.entity, args) {
            Ok(()) => {
                let after = self.entity.status();
                info!(command = name, %before, %after, "command executed");
                self.history
                    .append(HistoryEntry::executed(name, before, after));
                Ok(())
            }
            Err(error) => {
                warn!(command = name, error = %error, "command failed");
                self.history.append(HistoryEntry::failed(name, &error));
                Err(error)
            }
        }
    }

    /// Run a named macro: validate every step, then execute in order
    ///
    /// Resolution misses and structural rejections touch neither the entity
    /// nor the history. Once execution starts, each attempted step goes
    /// through [`execute`](Self::execute) and leaves its normal history
    /// entry; a runtime failure stops the run at that step with everything
    /// before it committed.
    pub fn execute_macro(&mut self, name: &str) -> MacroOutcome {
        let Some(definition) = self.macros.lookup(name) else {
            warn!(macro_name = name, "macro not found");
            return MacroOutcome::NotFound {
                name: name.to_string(),
            };
        };

        // Structural pre-validation: every step's command must resolve
        // before any step runs, so an unknown name can never leave a macro
        // half-applied.
        for (step, decl) in definition.steps.iter().enumerate() {
            if !self.registry.contains(&decl.command) {
                warn!(
                    macro_name = name,
                    step,
                    command = %decl.command,
                    "macro aborted: unknown command"
                );
                return MacroOutcome::Aborted {
                    step,
                    command: decl.command.clone(),
                };
            }
        }

        // The store keeps ownership of the definition; clone the steps so
        // execute() can borrow self mutably.
        let steps = definition.steps.clone();
        for (step, decl) in steps.iter().enumerate() {
            if let Err(error) = self.execute(&decl.command, &decl.args) {
                warn!(
                    macro_name = name,
                    step,
                    command = %decl.command,
                    error = %error,
                    "macro interrupted"
                );
                return MacroOutcome::Interrupted { step, error };
            }
        }

        info!(macro_name = name, steps = steps.len(), "macro completed");
        MacroOutcome::Completed { steps: steps.len() }
    }
}

impl std::fmt::Debug for CommandCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandCenter")
            .field("entity", &self.entity)
            .field("registry", &self.registry)
            .field("macros", &self.macros)
            .field("history_len", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::MacroStep;

    fn center_with_builtins() -> CommandCenter {
        let mut center = CommandCenter::new(Entity::new("Aria", 100));
        center.register_builtins();
        center
    }

    #[test]
    fn test_execute_success_appends_before_after() {
        let mut center = center_with_builtins();
        center.execute("damage", &["30".to_string()]).unwrap();

        assert_eq!(center.entity().health(), 70);
        assert_eq!(center.history().len(), 1);
        match &center.history().entries()[0] {
            HistoryEntry::Executed { before, after, .. } => {
                assert!(before.contains("H:100"));
                assert!(after.contains("H:70"));
            }
            other => panic!("expected Executed entry, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_unknown_command_recorded_and_surfaced() {
        let mut center = center_with_builtins();
        let result = center.execute("warp", &[]);

        assert!(matches!(
            result,
            Err(DispatchError::CommandNotFound { .. })
        ));
        assert_eq!(center.entity().health(), 100);
        assert_eq!(center.history().len(), 1);
        assert!(matches!(
            center.history().entries()[0],
            HistoryEntry::UnknownCommand { .. }
        ));
    }

    #[test]
    fn test_execute_handler_failure_recorded_then_propagated() {
        let mut center = center_with_builtins();
        let result = center.execute("heal", &["-10".to_string()]);

        assert!(matches!(
            result,
            Err(DispatchError::NegativeAmount { value: -10, .. })
        ));
        assert_eq!(center.entity().health(), 100);
        assert_eq!(center.history().len(), 1);
        assert!(matches!(
            center.history().entries()[0],
            HistoryEntry::Failed { .. }
        ));
    }

    #[test]
    fn test_macro_not_found_is_contained_noop() {
        let mut center = center_with_builtins();
        let outcome = center.execute_macro("ghost");

        assert_eq!(
            outcome,
            MacroOutcome::NotFound {
                name: "ghost".to_string()
            }
        );
        assert!(center.history().is_empty());
    }

    #[test]
    fn test_macro_aborts_atomically_on_unknown_step() {
        let mut center = center_with_builtins();
        center.register_macro(
            "bad",
            Macro::new(vec![
                MacroStep::with_args("heal", &["5"]),
                MacroStep::with_args("invalid", &[]),
            ]),
        );

        let outcome = center.execute_macro("bad");

        assert_eq!(
            outcome,
            MacroOutcome::Aborted {
                step: 1,
                command: "invalid".to_string()
            }
        );
        // Zero side effects, zero history: the heal step never ran
        assert_eq!(center.entity().health(), 100);
        assert!(center.history().is_empty());
    }

    #[test]
    fn test_macro_interrupted_keeps_committed_steps() {
        let mut center = center_with_builtins();
        center.register_macro(
            "risky",
            Macro::new(vec![
                MacroStep::with_args("damage", &["10"]),
                MacroStep::with_args("heal", &["-1"]),
                MacroStep::with_args("damage", &["10"]),
            ]),
        );

        let outcome = center.execute_macro("risky");

        match outcome {
            MacroOutcome::Interrupted { step, error } => {
                assert_eq!(step, 1);
                assert!(error.is_handler_failure());
            }
            other => panic!("expected Interrupted, got {other}"),
        }
        // Step 0 committed, step 2 never ran
        assert_eq!(center.entity().health(), 90);
        // One Executed entry plus one Failed entry
        assert_eq!(center.history().len(), 2);
        assert!(center.history().entries()[0].is_success());
        assert!(!center.history().entries()[1].is_success());
    }

    #[test]
    fn test_macro_completes() {
        let mut center = center_with_builtins();
        center.register_macro(
            "recovery",
            Macro::new(vec![
                MacroStep::with_args("heal", &["50"]),
                MacroStep::with_args("status", &[]),
            ]),
        );
        center.execute("damage", &["30".to_string()]).unwrap();

        let outcome = center.execute_macro("recovery");

        assert_eq!(outcome, MacroOutcome::Completed { steps: 2 });
        assert_eq!(center.entity().health(), 100);
        assert_eq!(center.history().len(), 3);
    }

    #[test]
    fn test_removed_command_fails_lookup() {
        let mut center = center_with_builtins();
        assert!(center.remove_command("heal"));

        let result = center.execute("heal", &["10".to_string()]);
        assert!(matches!(
            result,
            Err(DispatchError::CommandNotFound { .. })
        ));
    }
}
