use assert_cmd::cargo; // handy crate for testing CLIs

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_an_api_key_without_no_model() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.env_remove("OPENAI_API_KEY")
        .arg("main")
        .assert()
        .failure()
        .stderr(predicates::str::contains("OPENAI_API_KEY"));
}

#[test]
fn refuses_to_run_outside_a_repository() {
    let scratch = tempfile::tempdir().expect("tempdir");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(scratch.path())
        .args(["main", "--no-model"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not inside a git repository"));
}
