//! Command handler capability trait and the built-in handler set
//!
//! A handler is an opaque capability: it receives the target entity for the
//! duration of one `execute` call plus the raw string arguments, and either
//! mutates the entity or rejects the input with a typed error. Argument
//! parsing lives here, not in the dispatcher — malformed input is a handler
//! failure, never a dispatch concern.

use tracing::{debug, info};

use crate::errors::{DispatchError, Result};
use crate::model::Entity;

/// Capability interface for a registered command
///
/// Handlers are object-safe and may keep private per-handler state (see
/// [`DamageCommand`]'s use counter). The mutable entity borrow is scoped to
/// the single `run` call; handlers never retain it.
pub trait CommandHandler {
    /// Execute this command against the entity with the given arguments
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument`-kind error when arguments are missing,
    /// non-numeric, or out of domain (e.g. a negative amount).
    fn run(&mut self, entity: &mut Entity, args: &[String]) -> Result<()>;
}

/// Closures over `(&mut Entity, &[String])` are handlers too
///
/// This keeps ad hoc registration cheap for embedders and tests, alongside
/// the struct handlers below for commands that carry their own state.
impl<F> CommandHandler for F
where
    F: FnMut(&mut Entity, &[String]) -> Result<()>,
{
    fn run(&mut self, entity: &mut Entity, args: &[String]) -> Result<()> {
        self(entity, args)
    }
}

/// Parse the leading amount argument of a command
///
/// Amounts parse through `i64` first so that a negative input is rejected as
/// `NegativeAmount` rather than collapsing into a generic parse failure.
/// Values outside `u32` range count as non-numeric for this domain.
///
/// # Errors
///
/// * `MissingArgument` - no argument was supplied
/// * `NonNumericArgument` - the argument is not an integer that fits `u32`
/// * `NegativeAmount` - the argument is a negative integer
pub fn parse_amount(command: &str, args: &[String]) -> Result<u32> {
    let raw = args.first().ok_or_else(|| DispatchError::MissingArgument {
        command: command.to_string(),
    })?;

    let value: i64 =
        raw.trim()
            .parse()
            .map_err(|_| DispatchError::NonNumericArgument {
                command: command.to_string(),
                value: raw.clone(),
            })?;

    if value < 0 {
        return Err(DispatchError::NegativeAmount {
            command: command.to_string(),
            value,
        });
    }

    u32::try_from(value).map_err(|_| DispatchError::NonNumericArgument {
        command: command.to_string(),
        value: raw.clone(),
    })
}

/// Built-in: raise the entity's health by the given amount
#[derive(Debug, Default)]
pub struct HealCommand;

impl CommandHandler for HealCommand {
    fn run(&mut self, entity: &mut Entity, args: &[String]) -> Result<()> {
        let amount = parse_amount("heal", args)?;
        entity.heal(amount);
        Ok(())
    }
}

/// Built-in: lower the entity's health by the given amount
///
/// Keeps a running count of how many times it has been applied, as
/// per-handler private state.
#[derive(Debug, Default)]
pub struct DamageCommand {
    uses: u32,
}

impl DamageCommand {
    /// How many times this handler has successfully applied damage
    pub fn uses(&self) -> u32 {
        self.uses
    }
}

impl CommandHandler for DamageCommand {
    fn run(&mut self, entity: &mut Entity, args: &[String]) -> Result<()> {
        let amount = parse_amount("damage", args)?;
        entity.damage(amount);
        self.uses += 1;
        debug!(uses = self.uses, amount, "damage applied");
        Ok(())
    }
}

/// Built-in: lower the entity's energy by the given amount
#[derive(Debug, Default)]
pub struct DrainCommand;

impl CommandHandler for DrainCommand {
    fn run(&mut self, entity: &mut Entity, args: &[String]) -> Result<()> {
        let amount = parse_amount("drain", args)?;
        entity.drain_energy(amount);
        Ok(())
    }
}

/// Built-in: restore both attributes to full
#[derive(Debug, Default)]
pub struct ResetCommand;

impl CommandHandler for ResetCommand {
    fn run(&mut self, entity: &mut Entity, _args: &[String]) -> Result<()> {
        entity.reset();
        Ok(())
    }
}

/// Built-in: report the entity's current snapshot without mutating it
///
/// The core has no console layer, so the report goes out as a structured
/// tracing event; the history entry (before == after) is the durable record.
#[derive(Debug, Default)]
pub struct StatusCommand;

impl CommandHandler for StatusCommand {
    fn run(&mut self, entity: &mut Entity, _args: &[String]) -> Result<()> {
        info!(status = %entity.status(), "entity status");
        Ok(())
    }
}
