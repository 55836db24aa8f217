//! Engine integration tests
//!
//! Exercises the public engine API end to end: definition ordering,
//! duplicate rejection, and the transitive interpreter/translator chains.

use polyrun::{Engine, LOCAL_LANGUAGE, PolyrunError};

/// A program written directly in the local language runs immediately
#[test]
fn test_local_program_runs_immediately() {
    let mut engine = Engine::new();
    engine.define_program("fibo", LOCAL_LANGUAGE).unwrap();
    assert_eq!(engine.execute("fibo"), Ok(true));
}

/// The factorial scenario: each definition step changes nothing until the
/// full interpreter chain down to local exists
#[test]
fn test_interpreter_chain_built_incrementally() {
    let mut engine = Engine::new();

    engine.define_program("factorial", "Java").unwrap();
    assert_eq!(engine.execute("factorial"), Ok(false));

    engine.define_interpreter("c", "Java").unwrap();
    assert_eq!(engine.execute("factorial"), Ok(false));

    engine.define_interpreter(LOCAL_LANGUAGE, "c").unwrap();
    assert_eq!(engine.execute("factorial"), Ok(true));
}

/// The holamundo scenario: every hop's base language must itself be
/// executable before a translator contributes anything
#[test]
fn test_translator_chain_requires_every_hop() {
    let mut engine = Engine::new();

    engine.define_program("holamundo", "Python3").unwrap();
    engine
        .define_translator("wtf42", "Python3", LOCAL_LANGUAGE)
        .unwrap();
    // wtf42 itself is not runnable, so the translation never happens.
    assert_eq!(engine.execute("holamundo"), Ok(false));

    engine.define_translator("c", "wtf42", "Java").unwrap();
    // Still nothing makes wtf42 or c reach local.
    assert_eq!(engine.execute("holamundo"), Ok(false));
    assert_eq!(engine.pending_tools(), 2);
}

/// Once a late definition completes the chain, everything queued before it
/// activates in one sweep
#[test]
fn test_late_definition_activates_queued_tools() {
    let mut engine = Engine::new();

    engine.define_program("holamundo", "Python3").unwrap();
    engine
        .define_translator("wtf42", "Python3", LOCAL_LANGUAGE)
        .unwrap();
    engine.define_translator("c", "wtf42", "Java").unwrap();
    engine.define_interpreter(LOCAL_LANGUAGE, "Java").unwrap();
    // Java runnable -> c-translator still pending until c resolves.
    assert_eq!(engine.execute("holamundo"), Ok(false));

    engine.define_interpreter(LOCAL_LANGUAGE, "c").unwrap();
    // c runnable -> wtf42 translates to Java -> wtf42 runnable ->
    // Python3 translates to LOCAL -> holamundo runs.
    assert_eq!(engine.execute("holamundo"), Ok(true));
    assert_eq!(engine.pending_tools(), 0);
}

/// Defining the chain ends in either order yields the same reachability
#[test]
fn test_definition_order_independence() {
    let mut forward = Engine::new();
    forward.define_program("app", "A").unwrap();
    forward.define_interpreter("B", "A").unwrap();
    forward.define_interpreter(LOCAL_LANGUAGE, "B").unwrap();

    let mut backward = Engine::new();
    backward.define_program("app", "A").unwrap();
    backward.define_interpreter(LOCAL_LANGUAGE, "B").unwrap();
    backward.define_interpreter("B", "A").unwrap();

    assert_eq!(forward.execute("app"), Ok(true));
    assert_eq!(backward.execute("app"), Ok(true));
}

/// Once a language is runnable it stays runnable, whatever comes after
#[test]
fn test_reachability_is_monotonic() {
    let mut engine = Engine::new();
    engine.define_program("app", "c").unwrap();
    engine.define_interpreter(LOCAL_LANGUAGE, "c").unwrap();
    assert_eq!(engine.execute("app"), Ok(true));

    // Unrelated and unusable definitions must not regress anything.
    engine.define_program("other", "ghost").unwrap();
    engine.define_interpreter("ghost", "ruby").unwrap();
    engine.define_translator("ghost", "c", "ruby").unwrap();
    assert_eq!(engine.execute("app"), Ok(true));
}

/// Duplicate definitions are rejected without touching existing state
#[test]
fn test_duplicate_definitions_rejected() {
    let mut engine = Engine::new();

    engine.define_program("fibo", LOCAL_LANGUAGE).unwrap();
    assert_eq!(
        engine.define_program("fibo", "Java"),
        Err(PolyrunError::DuplicateProgram("fibo".to_string()))
    );

    engine.define_interpreter("c", "Java").unwrap();
    assert!(matches!(
        engine.define_interpreter("c", "Java"),
        Err(PolyrunError::DuplicateInterpreter { .. })
    ));

    engine.define_translator("c", "wtf42", "Java").unwrap();
    assert!(matches!(
        engine.define_translator("c", "wtf42", "Java"),
        Err(PolyrunError::DuplicateTranslator { .. })
    ));

    // First definitions are all still in place.
    assert_eq!(engine.execute("fibo"), Ok(true));
    assert_eq!(engine.interpreters().count(), 1);
    assert_eq!(engine.translators().count(), 1);
}

/// executing an undefined name is an error, not a false
#[test]
fn test_unknown_program_errors() {
    let engine = Engine::new();
    assert_eq!(
        engine.execute("never-defined"),
        Err(PolyrunError::UnknownProgram("never-defined".to_string()))
    );
}

/// A tool whose base language can never resolve stays pending forever
#[test]
fn test_unreachable_tools_never_activate() {
    let mut engine = Engine::new();
    engine.define_program("app", "ruby").unwrap();
    engine.define_interpreter("ghost", "ruby").unwrap();
    engine.define_translator("phantom", "ruby", LOCAL_LANGUAGE).unwrap();

    assert_eq!(engine.pending_tools(), 2);
    assert_eq!(engine.execute("app"), Ok(false));
}

/// Mutually-interpreting languages form a cycle the engine tolerates
#[test]
fn test_cyclic_chains_are_tolerated() {
    let mut engine = Engine::new();
    engine.define_program("app", "A").unwrap();
    engine.define_interpreter("A", "B").unwrap();
    engine.define_interpreter("B", "A").unwrap();
    assert_eq!(engine.execute("app"), Ok(false));

    engine.define_interpreter(LOCAL_LANGUAGE, "B").unwrap();
    assert_eq!(engine.execute("app"), Ok(true));
}

/// A custom local language behaves exactly like the default one
#[test]
fn test_custom_local_language() {
    let mut engine = Engine::with_local("x86");
    engine.define_program("boot", "c").unwrap();
    engine.define_interpreter("x86", "c").unwrap();
    assert_eq!(engine.execute("boot"), Ok(true));
}
