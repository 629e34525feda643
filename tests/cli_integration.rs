use assert_cmd::Command;
use predicates::prelude::*;
use snipz::id;
use snipz::model::Snippet;

fn snipz_in(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snipz").unwrap();
    cmd.env("SNIPZ_HOME", home.path());
    cmd
}

/// The id the store will assign for a given classification.
fn id_for(category: &str, tags: &str) -> String {
    id::generate(&Snippet::new(category, tags, "", "")).unwrap()
}

#[test]
fn add_then_single_match_search_prints_bare_content() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http,retry", "-m", "retry helper"])
        .args(["for { try() }"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Snippet added"));

    snipz_in(&home)
        .args(["search", "-c", "go"])
        .assert()
        .success()
        .stdout(predicates::str::contains("for { try() }"));
}

#[test]
fn duplicate_classification_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "first body"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "second body"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Duplicate"));
}

#[test]
fn duplicate_content_is_rejected_across_classifications() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "same body"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["add", "-c", "python", "-t", "flask", "same body"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Duplicate"));
}

#[test]
fn search_expands_hierarchical_categories() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go-concurrency", "chan select body"])
        .assert()
        .success();
    snipz_in(&home)
        .args(["add", "-c", "python", "-t", "concurrency", "asyncio body"])
        .assert()
        .success();

    // single hit: the python record does not match category "go"
    snipz_in(&home)
        .args(["search", "-c", "go", "concurrency"])
        .assert()
        .success()
        .stdout(predicates::str::contains("chan select body"))
        .stdout(predicates::str::contains("asyncio body").not());
}

#[test]
fn remove_with_yes_flag_drops_the_record() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "body"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["remove", "--yes", &id_for("go", "http")])
        .assert()
        .success()
        .stdout(predicates::str::contains("Snippet removed"));

    snipz_in(&home)
        .args(["search"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Found 0 matching snippets"));
}

#[test]
fn remove_prompt_aborts_on_no() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "body"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["remove", &id_for("go", "http")])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Aborted."));

    snipz_in(&home)
        .args(["search", "-c", "go"])
        .assert()
        .success()
        .stdout(predicates::str::contains("body"));
}

#[test]
fn merge_combines_records_and_replaces_sources() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "body a"])
        .assert()
        .success();
    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "grpc", "body b"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["merge", &id_for("go", "http"), &id_for("go", "grpc")])
        .assert()
        .success()
        .stdout(predicates::str::contains("Merged 2 snippets"));

    // one record left, whose content is both bodies in argument order
    snipz_in(&home)
        .args(["search", "-c", "go"])
        .assert()
        .success()
        .stdout(predicates::str::contains("body a\nbody b"));
}

#[test]
fn merge_across_categories_fails() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "body a"])
        .assert()
        .success();
    snipz_in(&home)
        .args(["add", "-c", "python", "-t", "http", "body b"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["merge", &id_for("go", "http"), &id_for("python", "http")])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Category mismatch"));
}

#[test]
fn update_merges_fields_in_place() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "-m", "old desc", "body"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["update", "-i", &id_for("go", "http"), "-m", "new desc"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Snippet updated"));

    snipz_in(&home)
        .args(["search", "-c", "go", "-t", "http"])
        .assert()
        .success()
        .stdout(predicates::str::contains("body"));
}

#[test]
fn append_adds_a_line() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "foo"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["append", "-i", &id_for("go", "http"), "extra"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["search", "-c", "go"])
        .assert()
        .success()
        .stdout(predicates::str::contains("foo\nextra"));
}

#[test]
fn list_categories_renders_a_table() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http,retry", "body a"])
        .assert()
        .success();
    snipz_in(&home)
        .args(["add", "-c", "python", "-t", "http", "body b"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["list-categories"])
        .assert()
        .success()
        .stdout(predicates::str::contains("CATEGORY"))
        .stdout(predicates::str::contains("go"))
        .stdout(predicates::str::contains("python"));
}

#[test]
fn list_tags_renders_a_table() {
    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http,retry", "body a"])
        .assert()
        .success();

    snipz_in(&home)
        .args(["list-tags"])
        .assert()
        .success()
        .stdout(predicates::str::contains("TAG"))
        .stdout(predicates::str::contains("retry"));
}

#[test]
fn missing_command_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    snipz_in(&home).assert().failure();
}

#[cfg(unix)]
#[test]
fn edit_reclassifies_under_a_fresh_id() {
    use std::os::unix::fs::PermissionsExt;

    let home = tempfile::tempdir().unwrap();

    snipz_in(&home)
        .args(["add", "-c", "go", "-t", "http", "body"])
        .assert()
        .success();

    // fake editor that retags the snippet
    let editor = home.path().join("retag.sh");
    std::fs::write(
        &editor,
        "#!/bin/sh\nsed -i 's/^Tags:     http$/Tags:     grpc/' \"$1\"\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&editor).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&editor, perms).unwrap();

    let old_id = id_for("go", "http");
    snipz_in(&home)
        .env("EDITOR", &editor)
        .args(["edit", &old_id])
        .assert()
        .success()
        .stdout(predicates::str::contains("Snippet added"));

    // the record now lives under the id derived from the new tags
    snipz_in(&home)
        .args(["search", "-t", "grpc"])
        .assert()
        .success()
        .stdout(predicates::str::contains("body"));

    // and no longer under the old tags
    snipz_in(&home)
        .args(["search", "-t", "http"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Found 0 matching snippets"));
}
