//! Substitution ordering tests

use super::helpers::{MapValues, MemoryLoader};
use super::*;

#[test]
fn test_interleaved_directives_preserve_surrounding_text() {
    let loader = MemoryLoader::with(&[("_i1.comp", "<I1>"), ("_i2.comp", "<I2>")]);
    let values = MapValues::with(&[("E1", "e1"), ("E2", "e2")]);
    let composer = Composer::new(&loader, &values, "comp");

    let text = "a@env \"E1\"b@include \"i1\"c@env \"E2\"d@include \"i2\"e";
    let result = composer.compose(text, &PathContext::root()).unwrap();
    assert_eq!(result, "ae1b<I1>ce2d<I2>e");
}

#[test]
fn test_adjacent_directives() {
    let loader = MemoryLoader::with(&[("_x.comp", "X")]);
    let values = MapValues::with(&[("Y", "Y")]);
    let composer = Composer::new(&loader, &values, "comp");

    let result = composer
        .compose("@include \"x\"@env \"Y\"@include \"x\"", &PathContext::root())
        .unwrap();
    assert_eq!(result, "XYX");
}

#[test]
fn test_non_matching_statements_left_untouched() {
    let loader = MemoryLoader::with(&[("_ok.comp", "ok")]);
    let values = MapValues::with(&[]);
    let composer = Composer::new(&loader, &values, "comp");

    let text = "@include \"../bad\" @include \"ok\" @include 'quoted' @env \"a.b\"";
    let result = composer.compose(text, &PathContext::root()).unwrap();
    assert_eq!(
        result,
        "@include \"../bad\" ok @include 'quoted' @env \"a.b\""
    );
}

#[test]
fn test_substitute_merges_by_position() {
    let text = "x@env \"A\"y@include \"b\"z";
    let includes = scan(text, DirectiveKind::Include);
    let values = scan(text, DirectiveKind::Env);

    let replacements = includes
        .iter()
        .zip(vec!["B".to_string()])
        .chain(values.iter().zip(vec!["A".to_string()]))
        .collect();

    assert_eq!(substitute(text, replacements), "xAyBz");
}
