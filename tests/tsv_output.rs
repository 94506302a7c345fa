use std::fs;

use kira_pgx::ctx::Ctx;
use kira_pgx::extract::VariantRecord;
use kira_pgx::io::tsv_writer::write_tsv;
use kira_pgx::scores::jitter::FixedJitter;
use kira_pgx::scores::panel::evaluate_drug;
use kira_pgx::tables::load_builtin;
use tempfile::TempDir;

#[test]
fn tsv_per_drug_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pgx_report.tsv");

    let mut ctx = Ctx::new(
        std::path::PathBuf::from("sample.vcf"),
        tmp.path().to_path_buf(),
        vec!["fluorouracil".to_string(), "warfarin".to_string()],
        None,
        false,
        true,
        "0.0.0-test",
    );
    ctx.records = vec![VariantRecord {
        gene: "DPYD".to_string(),
        variant_id: Some("rs3918290".to_string()),
        genotype: "C/T".to_string(),
    }];
    let tables = load_builtin().unwrap();
    let mut jitter = FixedJitter::zero();
    for drug in ["fluorouracil", "warfarin"] {
        ctx.outcomes
            .push(evaluate_drug(&ctx.records, drug, &tables, &mut jitter));
    }

    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("drug\tprimary_gene\tphenotype"));

    let dpyd: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(dpyd[0], "fluorouracil");
    assert_eq!(dpyd[1], "DPYD");
    assert_eq!(dpyd[2], "PM");
    assert_eq!(dpyd[4], "Toxic");
    assert_eq!(dpyd[5], "High");
    assert_eq!(dpyd[6], "0.850000");
    assert_eq!(dpyd[7], "rs3918290:C/T");

    let warfarin: Vec<&str> = lines[2].split('\t').collect();
    assert_eq!(warfarin[2], "NM");
    assert_eq!(warfarin[7], "-");
}
