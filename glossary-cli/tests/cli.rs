use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("glossary-parser")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn build_writes_index_and_term_pages() {
    let out = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build").arg(fixture_path("full.txt")).arg(out.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 8 files"));

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.contains("<a href=\"book.html\">book</a>"));
    assert!(index.find("book.html").unwrap() < index.find("word.html").unwrap());

    let term = fs::read_to_string(out.path().join("term.html")).unwrap();
    assert!(term.contains(
        "a <a href=\"word.html\">word</a> whose <a href=\"definition.html\">definition</a> is in a <a href=\"glossary.html\">glossary</a>"
    ));
}

#[test]
fn build_prompts_for_missing_arguments() {
    let out = tempdir().unwrap();
    let answers = format!(
        "{}\n{}\n",
        fixture_path("single.txt").display(),
        out.path().display()
    );
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build").write_stdin(answers);

    cmd.assert().success().stdout(
        predicate::str::contains("Please input the name of the glossary file: ").and(
            predicate::str::contains("Please enter the folder you want to store the html files: "),
        ),
    );
    assert!(out.path().join("meaning.html").is_file());
}

#[test]
fn build_of_empty_glossary_writes_only_index() {
    let out = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build").arg(fixture_path("empty.txt")).arg(out.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 files"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
}

#[test]
fn build_fails_when_folder_is_missing() {
    let out = tempdir().unwrap();
    let target = out.path().join("site");
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build").arg(fixture_path("pair.txt")).arg(&target);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    assert!(!target.exists());
}

#[test]
fn build_creates_folder_when_asked() {
    let out = tempdir().unwrap();
    let target = out.path().join("site");
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build")
        .arg(fixture_path("pair.txt"))
        .arg(&target)
        .arg("--create-dir");

    cmd.assert().success();
    assert!(target.join("index.html").is_file());
    assert!(target.join("term.html").is_file());
}

#[test]
fn build_rejects_malformed_glossary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.txt");
    fs::write(&input, "meaning\nsomething\n\ndangling\n").unwrap();

    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build").arg(&input).arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("term 'dangling' has no definition"));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn separators_flag_changes_links() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dotted.txt");
    fs::write(&input, "cat\na pet.dog\n\ndog\nanother pet\n").unwrap();

    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("inspect")
        .arg(&input)
        .arg("--transform")
        .arg("xref-json")
        .arg("--separators")
        .arg(" .");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"link\": \"dog\""));
}

#[test]
fn inspect_lists_sorted_terms() {
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("inspect").arg(fixture_path("two-line-definition.txt"));

    cmd.assert()
        .success()
        .stdout("definition\nglossary\nmeaning\nterm\nword\n");
}

#[test]
fn terms_prints_one_term_per_line() {
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("terms").arg(fixture_path("pair.txt"));

    cmd.assert().success().stdout("meaning\nterm\n");
}

#[test]
fn terms_of_empty_glossary_prints_nothing() {
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("terms").arg(fixture_path("empty.txt"));

    cmd.assert().success().stdout("");
}

#[test]
fn inspect_unknown_transform_lists_available() {
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("inspect")
        .arg(fixture_path("single.txt"))
        .arg("-t")
        .arg("yaml");

    cmd.assert().failure().stderr(
        predicate::str::contains("Unknown transform: yaml")
            .and(predicate::str::contains("xref-json")),
    );
}

#[test]
fn config_file_sets_title() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("site.toml");
    fs::write(&config, "[site]\ntitle = \"Terms of Art\"\n").unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("build")
        .arg(fixture_path("single.txt"))
        .arg(&out)
        .arg("--config")
        .arg(&config);

    cmd.assert().success();
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<title>Terms of Art</title>"));
}

#[test]
fn list_transforms() {
    let mut cmd = cargo_bin_cmd!("glossary");
    cmd.arg("list-transforms");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tokens-json"));
}
