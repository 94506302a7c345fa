use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("kira-pgx").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn run_requires_a_drug() {
    let mut cmd = Command::cargo_bin("kira-pgx").unwrap();
    cmd.arg("run").arg("--input").arg("sample.vcf");
    cmd.assert().failure();
}
