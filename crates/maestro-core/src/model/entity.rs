use serde::{Deserialize, Serialize};

/// Upper bound for both entity attributes
pub const ATTR_MAX: u32 = 100;

/// Entity - the single stateful target that commands act upon
///
/// An Entity carries two bounded attributes, health and energy, each held in
/// `[0, ATTR_MAX]` at all times. Mutators saturate at the bounds rather than
/// wrapping or drifting out of range. One Entity is created at system start
/// and mutated in place by command handlers for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifying name, chosen by the embedding caller
    name: String,

    /// Health attribute, always in [0, ATTR_MAX]
    health: u32,

    /// Energy attribute, always in [0, ATTR_MAX]
    energy: u32,
}

impl Entity {
    /// Create a new Entity with the given name and starting health
    ///
    /// Starting health is clamped into `[0, ATTR_MAX]`; energy starts full.
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health: health.min(ATTR_MAX),
            energy: ATTR_MAX,
        }
    }

    /// Identifying name of this entity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health, in [0, ATTR_MAX]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Current energy, in [0, ATTR_MAX]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Raise health by `n`, saturating at `ATTR_MAX`
    pub fn heal(&mut self, n: u32) {
        self.health = self.health.saturating_add(n).min(ATTR_MAX);
    }

    /// Lower health by `n`, saturating at 0
    pub fn damage(&mut self, n: u32) {
        self.health = self.health.saturating_sub(n);
    }

    /// Lower energy by `n`, saturating at 0
    pub fn drain_energy(&mut self, n: u32) {
        self.energy = self.energy.saturating_sub(n);
    }

    /// Raise energy by `n`, saturating at `ATTR_MAX`
    pub fn restore_energy(&mut self, n: u32) {
        self.energy = self.energy.saturating_add(n).min(ATTR_MAX);
    }

    /// Restore both attributes to `ATTR_MAX`
    ///
    /// Idempotent: resetting twice yields the same state as once.
    pub fn reset(&mut self) {
        self.health = ATTR_MAX;
        self.energy = ATTR_MAX;
    }

    /// Rendered one-line snapshot of the current state
    ///
    /// This is the string the dispatcher captures into history entries as
    /// the before/after snapshots. Format is presentation-level; only its
    /// stability within a run matters to the audit trail.
    pub fn status(&self) -> String {
        format!("{} (H:{} E:{})", self.name, self.health, self.energy)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status())
    }
}
