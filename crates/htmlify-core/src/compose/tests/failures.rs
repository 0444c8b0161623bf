//! Failure propagation tests

use super::helpers::{CountingValues, MemoryLoader, no_values};
use super::*;

#[test]
fn test_missing_fragment_names_computed_path() {
    let loader = MemoryLoader::default();
    let values = no_values();
    let composer = Composer::new(&loader, &values, "comp");

    let result = composer.compose("@include \"missing/x\"", &PathContext::root());
    assert_eq!(
        result,
        Err(ComposeError::FragmentNotFound {
            path: "missing/_x.comp".to_string()
        })
    );
}

#[test]
fn test_missing_fragment_path_includes_inherited_context() {
    let loader = MemoryLoader::default();
    let values = no_values();
    let composer = Composer::new(&loader, &values, "comp");

    let err = composer
        .compose("@include \"missing/x\"", &PathContext::from_dir("site"))
        .unwrap_err();
    assert_eq!(err.fragment(), "site/missing/_x.comp");
}

#[test]
fn test_missing_fragment_stops_later_siblings() {
    let loader = MemoryLoader::with(&[("_a.comp", "A"), ("_c.comp", "C")]);
    let values = no_values();
    let composer = Composer::new(&loader, &values, "comp");

    let result = composer.compose(
        "@include \"a\" @include \"b\" @include \"c\"",
        &PathContext::root(),
    );
    assert!(matches!(result, Err(ComposeError::FragmentNotFound { ref path }) if path == "_b.comp"));
    assert_eq!(loader.loads(), ["_a.comp", "_b.comp"]);
}

#[test]
fn test_missing_fragment_deep_in_tree_fails_top() {
    let loader = MemoryLoader::with(&[
        ("_a.comp", "@include \"lib/b\""),
        ("lib/_b.comp", "@include \"gone\""),
        ("_after.comp", "after"),
    ]);
    let values = no_values();
    let composer = Composer::new(&loader, &values, "comp");

    let result = composer.compose("@include \"a\" @include \"after\"", &PathContext::root());
    assert_eq!(
        result,
        Err(ComposeError::FragmentNotFound {
            path: "lib/_gone.comp".to_string()
        })
    );
    assert!(!loader.loads().contains(&"_after.comp".to_string()));
}

#[test]
fn test_missing_fragment_skips_value_lookup() {
    let loader = MemoryLoader::default();
    let values = CountingValues::default();
    let composer = Composer::new(&loader, &values, "comp");

    let result = composer.compose("@env \"A\" @include \"nope\"", &PathContext::root());
    assert!(result.is_err());
    assert_eq!(values.calls(), 0);
}

#[test]
fn test_self_include_is_a_cycle() {
    let loader = MemoryLoader::with(&[("_loop.comp", "again @include \"loop\"")]);
    let values = no_values();
    let composer = Composer::new(&loader, &values, "comp");

    match composer.compose("@include \"loop\"", &PathContext::root()) {
        Err(ComposeError::IncludeCycle { fragment, chain }) => {
            assert_eq!(fragment, "_loop.comp");
            assert_eq!(chain, ["_loop.comp", "_loop.comp"]);
        }
        other => panic!("Expected IncludeCycle error, got {:?}", other),
    }
}

#[test]
fn test_indirect_cycle_is_detected() {
    let loader = MemoryLoader::with(&[
        ("_a.comp", "@include \"b\""),
        ("_b.comp", "@include \"a\""),
    ]);
    let values = no_values();
    let composer = Composer::new(&loader, &values, "comp");

    match composer.compose("@include \"a\"", &PathContext::root()) {
        Err(ComposeError::IncludeCycle { fragment, chain }) => {
            assert_eq!(fragment, "_a.comp");
            assert_eq!(chain, ["_a.comp", "_b.comp", "_a.comp"]);
        }
        other => panic!("Expected IncludeCycle error, got {:?}", other),
    }
}

#[test]
fn test_depth_limit() {
    let loader = MemoryLoader::with(&[
        ("_one.comp", "@include \"two\""),
        ("_two.comp", "@include \"three\""),
        ("_three.comp", "bottom"),
    ]);
    let values = no_values();

    let shallow = Composer::new(&loader, &values, "comp").with_max_depth(2);
    match shallow.compose("@include \"one\"", &PathContext::root()) {
        Err(ComposeError::DepthExceeded {
            fragment,
            max_depth,
        }) => {
            assert_eq!(fragment, "_three.comp");
            assert_eq!(max_depth, 2);
        }
        other => panic!("Expected DepthExceeded error, got {:?}", other),
    }

    let deep_enough = Composer::new(&loader, &values, "comp").with_max_depth(3);
    assert_eq!(
        deep_enough
            .compose("@include \"one\"", &PathContext::root())
            .unwrap(),
        "bottom"
    );
}

#[test]
fn test_error_display_names_path() {
    let err = ComposeError::FragmentNotFound {
        path: "missing/_x.comp".to_string(),
    };
    assert_eq!(err.to_string(), "File \"missing/_x.comp\" not found");
}
