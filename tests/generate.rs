// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::fs;

use mutation_scaffold::{
    Error, FileStatus, GenerationRequest, Generator, Layout,
    attribute::{Requirement, parse}
};

fn create_user() -> GenerationRequest {
    GenerationRequest::new(
        "create_user",
        ["title:string", "count:integer:optional", "owner:model"]
    )
}

#[test]
fn default_requirement_is_required() {
    assert_eq!(parse("name:string").unwrap().requirement, Requirement::Required);
    assert_eq!(
        parse("name:string:optional").unwrap().requirement,
        Requirement::Optional
    );
}

#[test]
fn generates_mutation_and_stub() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("spec")).unwrap();

    let report = Generator::new(Layout::new(dir.path()))
        .generate(&create_user())
        .unwrap();
    assert_eq!(report.files.len(), 2);

    let source = fs::read_to_string(dir.path().join("app/mutations/create_user.rs")).unwrap();
    assert!(source.contains("pub struct CreateUser {"));
    assert!(source.contains("pub title: String,"));
    assert!(source.contains("pub owner: Owner,"));
    assert!(source.contains("pub count: Option<i64>,"));
    assert!(source.contains("pub fn new(title: String, owner: Owner) -> Self {"));
    assert!(source.contains("pub fn with_count(mut self, count: i64) -> Self {"));

    let title = source.find("pub title").unwrap();
    let owner = source.find("pub owner").unwrap();
    let count = source.find("pub count").unwrap();
    assert!(title < owner && owner < count);

    let stub =
        fs::read_to_string(dir.path().join("spec/mutations/create_user_spec.rs")).unwrap();
    assert!(stub.contains("fn requires_title()"));
    assert!(stub.contains("fn requires_owner()"));
    assert!(stub.contains("fn accepts_missing_count()"));
}

#[test]
fn no_spec_dir_means_no_stub() {
    let dir = tempfile::tempdir().unwrap();

    let report = Generator::new(Layout::new(dir.path()))
        .generate(&create_user())
        .unwrap();

    assert!(dir.path().join("app/mutations/create_user.rs").is_file());
    assert!(!dir.path().join("spec").exists());
    assert_eq!(report.files[1].status, FileStatus::Skipped);
}

#[test]
fn identical_inputs_produce_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("spec")).unwrap();
    let generator = Generator::new(Layout::new(dir.path()));
    let paths = [
        dir.path().join("app/mutations/create_user.rs"),
        dir.path().join("spec/mutations/create_user_spec.rs")
    ];

    generator.generate(&create_user()).unwrap();
    let first: Vec<Vec<u8>> = paths.iter().map(|p| fs::read(p).unwrap()).collect();

    let report = generator.generate(&create_user()).unwrap();
    let second: Vec<Vec<u8>> = paths.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert!(
        report
            .files
            .iter()
            .all(|f| f.status == FileStatus::Identical)
    );
}

#[test]
fn any_invalid_token_aborts_everything() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("spec")).unwrap();

    for bad in ["name", ":string", "name:bogus", "name:string:sometimes"] {
        let request = GenerationRequest::new("create_user", ["title:string", bad]);
        let err = Generator::new(Layout::new(dir.path()))
            .generate(&request)
            .unwrap_err();
        assert!(err.is_definition_error(), "{bad}: {err}");
        assert!(err.to_string().contains(bad), "{err} should name {bad}");
    }

    assert!(!dir.path().join("app").exists());
    assert!(!dir.path().join("spec/mutations").exists());
}

#[test]
fn invalid_filter_message_lists_choices() {
    let err = parse("name:bogus").unwrap_err();
    assert!(matches!(err, Error::InvalidFilter { .. }));
    assert!(err.to_string().ends_with(
        "string, integer, model, hash, array, boolean, date, duck, input, symbol, time"
    ));
}
