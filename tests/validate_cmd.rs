use std::fs;
use std::io::Write;

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

const VCF: &str = "##fileformat=VCFv4.2\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE\n\
chr10\t94781859\trs4244285\tG\tA\t50\tPASS\tGENE=CYP2C19\tGT\t0/1\n\
chr1\t97450058\trs3918290\tC\tT\t50\tPASS\tGENE=DPYD\tGT\t0/0\n";

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sample.vcf");
    fs::write(&path, VCF).unwrap();

    let mut cmd = Command::cargo_bin("kira-pgx").unwrap();
    cmd.arg("validate").arg("--input").arg(&path);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("kira-pgx validate ok"));
    assert!(stdout.contains("records: 2"));
    assert!(stdout.contains("CYP2C19\trs4244285\tG/A"));
    assert!(stdout.contains("DPYD\trs3918290\tC/C"));
}

#[test]
fn validate_reads_gzipped_input() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sample.vcf.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(VCF.as_bytes()).unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    let mut cmd = Command::cargo_bin("kira-pgx").unwrap();
    cmd.arg("validate").arg("--input").arg(&path);
    cmd.assert().success();
}

#[test]
fn validate_rejects_wrong_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sample.txt");
    fs::write(&path, VCF).unwrap();

    let mut cmd = Command::cargo_bin("kira-pgx").unwrap();
    cmd.arg("validate").arg("--input").arg(&path);
    cmd.assert().failure();
}

#[test]
fn validate_rejects_oversized_input() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sample.vcf");
    fs::write(&path, VCF).unwrap();

    let mut cmd = Command::cargo_bin("kira-pgx").unwrap();
    cmd.arg("validate")
        .arg("--input")
        .arg(&path)
        .arg("--max-input-bytes")
        .arg("16");
    cmd.assert().failure();
}
