//! Macro Execution Tests
//!
//! This test suite verifies the macro runner's validate-then-run contract.
//!
//! ## Scenarios Covered
//!
//! 1. Structural pre-validation aborts atomically on any unknown command
//! 2. Runtime step failures interrupt the run, keeping committed steps
//! 3. Macro lookup misses are contained no-ops
//! 4. History grows by steps attempted, not by declared length

use maestro_core::{CommandCenter, Entity, Macro, MacroOutcome, MacroStep};

fn center() -> CommandCenter {
    let mut center = CommandCenter::new(Entity::new("Aria", 100));
    center.register_builtins();
    center
}

#[test]
fn test_abort_on_unknown_command_regardless_of_position() {
    // The bad step's position must not matter: validation covers every
    // step before anything runs.
    for position in 0..3 {
        // GIVEN a three-step macro with one unregistered command
        let mut center = center();
        let mut steps = vec![
            MacroStep::with_args("heal", &["5"]),
            MacroStep::with_args("damage", &["5"]),
            MacroStep::with_args("status", &[]),
        ];
        steps[position] = MacroStep::with_args("invalid", &[]);
        center.register_macro("bad", Macro::new(steps));

        // WHEN we run it
        let outcome = center.execute_macro("bad");

        // THEN it aborts at the bad step with zero side effects
        assert_eq!(
            outcome,
            MacroOutcome::Aborted {
                step: position,
                command: "invalid".to_string()
            }
        );
        assert_eq!(center.entity().health(), 100);
        assert!(center.history().is_empty());
    }
}

#[test]
fn test_interruption_commits_prefix_and_skips_suffix() {
    // GIVEN a macro whose third step fails at runtime
    let mut center = center();
    center.register_macro(
        "risky",
        Macro::new(vec![
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("heal", &["not-a-number"]),
            MacroStep::with_args("damage", &["50"]),
        ]),
    );

    // WHEN we run it
    let outcome = center.execute_macro("risky");

    // THEN it is interrupted at the failing step
    match outcome {
        MacroOutcome::Interrupted { step, error } => {
            assert_eq!(step, 2);
            assert!(error.is_handler_failure());
        }
        other => panic!("expected Interrupted, got {other}"),
    }

    // AND steps before it remain committed, the last never ran
    assert_eq!(center.entity().health(), 80);

    // AND history holds exactly the attempted steps: 2 successes + 1 failure
    assert_eq!(center.history().len(), 3);
    assert!(center.history().entries()[0].is_success());
    assert!(center.history().entries()[1].is_success());
    assert!(!center.history().entries()[2].is_success());
}

#[test]
fn test_macro_not_found_touches_nothing() {
    // GIVEN a center with no macros
    let mut center = center();

    // WHEN we run an unregistered macro name
    let outcome = center.execute_macro("ghost");

    // THEN the miss is a contained no-op value, not an error
    assert_eq!(
        outcome,
        MacroOutcome::NotFound {
            name: "ghost".to_string()
        }
    );
    assert!(!outcome.is_success());
    assert!(center.history().is_empty());
    assert_eq!(center.entity().health(), 100);
}

#[test]
fn test_completed_macro_grows_history_by_declared_length() {
    let mut center = center();
    center.register_macro(
        "triple_damage",
        Macro::new(vec![
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("damage", &["10"]),
            MacroStep::with_args("damage", &["10"]),
        ]),
    );

    let outcome = center.execute_macro("triple_damage");

    assert_eq!(outcome, MacroOutcome::Completed { steps: 3 });
    assert!(outcome.is_success());
    assert_eq!(center.entity().health(), 70);
    assert_eq!(center.history().len(), 3);
}

#[test]
fn test_empty_macro_completes_without_history() {
    let mut center = center();
    center.register_macro("noop", Macro::new(vec![]));

    let outcome = center.execute_macro("noop");

    assert_eq!(outcome, MacroOutcome::Completed { steps: 0 });
    assert!(center.history().is_empty());
}

#[test]
fn test_macro_overwrite_uses_latest_definition() {
    // GIVEN a macro name registered twice
    let mut center = center();
    center.register_macro(
        "combo",
        Macro::new(vec![MacroStep::with_args("damage", &["50"])]),
    );
    center.register_macro(
        "combo",
        Macro::new(vec![MacroStep::with_args("damage", &["5"])]),
    );

    // WHEN we run it
    let outcome = center.execute_macro("combo");

    // THEN only the latest definition applies
    assert_eq!(outcome, MacroOutcome::Completed { steps: 1 });
    assert_eq!(center.entity().health(), 95);
}

#[test]
fn test_command_removed_after_macro_registration_aborts_run() {
    // Validation happens at run time against the current registry, so a
    // macro that was valid when registered aborts once a command is gone.
    let mut center = center();
    center.register_macro(
        "hard_reset",
        Macro::new(vec![
            MacroStep::with_args("reset", &[]),
            MacroStep::with_args("status", &[]),
        ]),
    );
    center.remove_command("status");

    let outcome = center.execute_macro("hard_reset");

    assert_eq!(
        outcome,
        MacroOutcome::Aborted {
            step: 1,
            command: "status".to_string()
        }
    );
    assert!(center.history().is_empty());
}
