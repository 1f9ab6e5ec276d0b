//! Command Center Demonstration
//!
//! This example walks through the dispatcher end to end:
//! 1. Built-in command registration
//! 2. Direct command execution with audit snapshots
//! 3. Macro registration and atomic validate-then-run semantics
//! 4. Partial-failure containment (abort vs interruption)
//! 5. Rendering the history trail
#![allow(clippy::unwrap_used, clippy::expect_used)]

use maestro_core::{
    logging::{init, Profile},
    render::render_history,
    CommandCenter, Entity, Macro, MacroOutcome, MacroStep,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== Maestro Command Center Demo ===\n");

    // ===== Part 1: Setup =====
    let mut center = CommandCenter::new(Entity::new("Sebastian", 100));
    center.register_builtins();
    println!("Created entity: {}", center.entity());

    center.register_macro(
        "recovery",
        Macro::new(vec![
            MacroStep::with_args("heal", &["50"]),
            MacroStep::with_args("status", &[]),
        ]),
    );
    center.register_macro(
        "triple_damage",
        Macro::new(vec![
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("damage", &["10"]),
        ]),
    );
    center.register_macro(
        "hard_reset",
        Macro::new(vec![
            MacroStep::with_args("reset", &[]),
            MacroStep::with_args("status", &[]),
        ]),
    );
    println!("Registered macros: recovery, triple_damage, hard_reset\n");

    // ===== Part 2: Direct dispatch =====
    println!("## Direct dispatch\n");
    center.execute("damage", &["30".to_string()])?;
    println!("✓ damage 30 -> {}", center.entity());

    // ===== Part 3: Macro runs =====
    println!("\n## Macro runs\n");
    let outcome = center.execute_macro("recovery");
    println!("recovery: {outcome}");

    let outcome = center.execute_macro("triple_damage");
    println!("triple_damage: {outcome}");

    // A macro naming an unknown command is rejected atomically
    center.register_macro(
        "broken",
        Macro::new(vec![
            MacroStep::with_args("heal", &["5"]),
            MacroStep::with_args("invalid", &[]),
        ]),
    );
    let outcome = center.execute_macro("broken");
    assert!(matches!(outcome, MacroOutcome::Aborted { .. }));
    println!("broken: {outcome}");

    // A runtime failure interrupts, keeping committed steps
    center.register_macro(
        "risky",
        Macro::new(vec![
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("heal", &["-1"]),
            MacroStep::with_args("damage", &["10"]),
        ]),
    );
    let outcome = center.execute_macro("risky");
    println!("risky: {outcome}");

    // ===== Part 4: Audit trail =====
    println!("\n{}", render_history(center.history()));
    println!("Final state: {}", center.entity());

    Ok(())
}
