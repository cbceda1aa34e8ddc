//! Fixture-driven tests over the data files in `tests/fixtures`.
//!
//! Every fixture must write back to its exact bytes. Files under `valid/` must parse without errors and files
//! under `invalid/` must report at least one.

use std::fs;
use std::path::Path;

use robotparse::{File, FileKind, Source, get_model, get_resource_model, writer};

fn load(path: &Path) -> File {
    let is_resource = path.extension().is_some_and(|ext| ext == "resource");
    let source = Source::Path(path);
    let model = if is_resource {
        get_resource_model(source, false, None)
    } else {
        get_model(source, false, None)
    };
    model.unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

#[test]
fn fixtures_round_trip() {
    insta::glob!("fixtures/**/*.{robot,resource}", |path| {
        let text = fs::read_to_string(path).unwrap();
        let model = load(path);
        assert_eq!(writer::to_text(&model), text, "{} did not round trip", path.display());
        assert_eq!(model.source.as_deref(), Some(path));
    });
}

#[test]
fn valid_fixtures_have_no_errors() {
    insta::glob!("fixtures/valid/*", |path| {
        let errors = load(path).collect_errors();
        assert!(errors.is_empty(), "{}: {errors:?}", path.display());
    });
}

#[test]
fn invalid_fixtures_report_errors() {
    insta::glob!("fixtures/invalid/*", |path| {
        let errors = load(path).collect_errors();
        assert!(!errors.is_empty(), "{} parsed cleanly", path.display());
    });
}

#[test]
fn resource_grammar_is_picked_by_extension() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/common.resource");
    assert_eq!(load(&path).kind, FileKind::Resource);
}

#[test]
fn control_structure_errors() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid/control.robot");
    let errors = load(&path).collect_errors();
    for expected in [
        "FOR loop has no loop values.",
        "FOR loop has empty body.",
        "WHILE must have a condition.",
        "BREAK can only be used inside a loop.",
        "IF must have a condition.",
        "Multiple ELSE branches.",
        "TRY structure must have EXCEPT or FINALLY branch.",
        "TRY has no closing END.",
    ] {
        assert!(errors.iter().any(|error| error == expected), "missing {expected:?} in {errors:?}");
    }
}
