use cmdline::{FlagError, FlagKind, FlagRegistry, FlagValue};

#[test]
fn registered_flags_start_unloaded_with_zero_values() {
    let mut registry = FlagRegistry::new();
    registry.add_flag(FlagKind::Int, "n", false);
    registry.add_flag(FlagKind::Int64, "seed", false);
    registry.add_flag(FlagKind::Float, "rate", false);
    registry.add_flag(FlagKind::String, "name", true);
    registry.add_flag(FlagKind::Bool, "verbose", false);

    assert_eq!(registry.len(), 5);
    for name in ["n", "seed", "rate", "name", "verbose"] {
        assert!(registry.is_flag(name));
        assert!(!registry.is_loaded(name), "{name} should start unloaded");
    }

    assert_eq!(registry.get_var("n"), FlagValue::Int(0));
    assert_eq!(registry.get_var("seed"), FlagValue::Int64(0));
    assert_eq!(registry.get_var("rate"), FlagValue::Float(0.0));
    assert_eq!(registry.get_var("name"), FlagValue::String(String::new()));
    assert_eq!(registry.get_var("verbose"), FlagValue::Bool(false));

    assert!(registry.is_required("name"));
    assert!(!registry.is_required("n"));
}

#[test]
fn unregistered_names_answer_false() {
    let registry = FlagRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.is_flag("x"));
    assert!(!registry.is_loaded("x"));
    assert!(!registry.is_required("x"));
    assert_eq!(registry.kind_of("x"), None);
}

#[test]
fn set_var_decodes_per_kind() {
    let mut registry = FlagRegistry::new();
    registry.add_flag(FlagKind::Int64, "seed", false);
    registry.add_flag(FlagKind::Float, "rate", false);

    registry.set_var("seed", "-9000000000").unwrap();
    registry.set_var("rate", "0.5").unwrap();

    assert_eq!(registry.get::<i64>("seed"), Ok(-9_000_000_000));
    assert_eq!(registry.get::<f64>("rate"), Ok(0.5));
    assert!(registry.is_loaded("seed"));
}

#[test]
fn bad_token_is_reported_and_leaves_flag_unloaded() {
    let mut registry = FlagRegistry::new();
    registry.add_flag(FlagKind::Int, "n", false);

    let err = registry.set_var("n", "five").unwrap_err();
    assert_eq!(err, FlagError::Decode {
        name: "n".into(),
        kind: FlagKind::Int,
        raw: "five".into()
    });
    assert!(!registry.is_loaded("n"));
    assert_eq!(registry.get_var("n"), FlagValue::Int(0));
}

#[test]
fn typed_get_rejects_other_kinds() {
    let mut registry = FlagRegistry::new();
    registry.add_flag(FlagKind::Int, "n", false);

    let err = registry.get::<i64>("n").unwrap_err();
    assert_eq!(err, FlagError::KindMismatch {
        name: "n".into(),
        expected: FlagKind::Int64,
        found: FlagKind::Int
    });
}

#[test]
fn re_registering_replaces_the_flag() {
    let mut registry = FlagRegistry::new();
    registry.add_flag(FlagKind::Int, "n", false);
    registry.set_var("n", "3").unwrap();

    registry.add_flag(FlagKind::String, "n", true);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.kind_of("n"), Some(FlagKind::String));
    assert!(!registry.is_loaded("n"));
    assert!(registry.is_required("n"));
}

#[test]
fn get_var_is_idempotent() {
    let mut registry = FlagRegistry::new();
    registry.add_flag(FlagKind::String, "name", false);
    registry.set_var("name", "bob").unwrap();

    let first = registry.get_var("name");
    let second = registry.get_var("name");
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "bob");
}

#[test]
fn names_lists_every_flag() {
    let mut registry = FlagRegistry::new();
    assert!(registry.declare("int", "a", false));
    assert!(registry.declare("BoolFlag", "b", false));
    assert!(!registry.declare("complex", "c", false));

    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b"]);
}

#[test]
#[should_panic(expected = "unrecognized flag name ghost")]
fn get_var_on_unknown_name_panics() {
    let registry = FlagRegistry::new();
    let _ = registry.get_var("ghost");
}

#[test]
#[should_panic(expected = "unrecognized flag name ghost")]
fn set_var_on_unknown_name_panics() {
    let mut registry = FlagRegistry::new();
    let _ = registry.set_var("ghost", "1");
}
