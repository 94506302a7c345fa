use kira_pgx::extract::VariantRecord;
use kira_pgx::scores::phenotype::infer;
use kira_pgx::tables::{ReferenceTables, load_builtin, parse_tables_tsv};

fn record(gene: &str, id: Option<&str>, genotype: &str) -> VariantRecord {
    VariantRecord {
        gene: gene.to_string(),
        variant_id: id.map(str::to_string),
        genotype: genotype.to_string(),
    }
}

fn tables_with(extra: &str) -> ReferenceTables {
    let mut content = String::from(
        "drug\tcodeine\tCYP2D6\nphenotype\tPoor Metabolizer\tPM\t4\nphenotype\tReduced metabolism\tIM\t2\n",
    );
    content.push_str(extra);
    let rows = parse_tables_tsv(&content, "test").unwrap();
    ReferenceTables::from_rows("test", rows).unwrap()
}

#[test]
fn unknown_drug_is_unknown() {
    let tables = load_builtin().unwrap();
    let records = vec![record("CYP2D6", Some("rs3892097"), "A/A")];
    let call = infer(&records, "aspirin", &tables);
    assert_eq!(call.primary_gene, "Unknown");
    assert_eq!(call.phenotype, "Unknown");
    assert_eq!(call.diplotype, "N/A");
    assert!(call.detected_variants.is_empty());
}

#[test]
fn known_drug_without_findings_is_normal() {
    let tables = load_builtin().unwrap();
    let records = vec![
        record("CYP2C19", Some("rs4244285"), "G/A"),
        record("CYP2D6", Some("rs1065852"), "C/T"),
    ];
    let call = infer(&records, "codeine", &tables);
    assert_eq!(call.primary_gene, "CYP2D6");
    assert_eq!(call.phenotype, "NM");
    assert_eq!(call.diplotype, "*1/*1");
    assert!(call.detected_variants.is_empty());

    let call = infer(&[], "warfarin", &tables);
    assert_eq!(call.primary_gene, "CYP2C9");
    assert_eq!(call.phenotype, "NM");
}

#[test]
fn matching_variant_sets_phenotype() {
    let tables = load_builtin().unwrap();
    let records = vec![record("CYP2D6", Some("rs3892097"), "A/A")];
    let call = infer(&records, "Codeine", &tables);
    assert_eq!(call.primary_gene, "CYP2D6");
    assert_eq!(call.phenotype, "PM");
    assert_eq!(call.diplotype, "*1/*2");
    assert_eq!(call.detected_variants.len(), 1);
    let finding = &call.detected_variants[0];
    assert_eq!(finding.variant_id, "rs3892097");
    assert_eq!(finding.phenotype, "Poor Metabolizer");
    assert_eq!(finding.severity, 4);
    assert_eq!(finding.genotype, "A/A");
}

#[test]
fn rule_for_another_gene_is_ignored() {
    let tables = load_builtin().unwrap();
    // rs4244285 belongs to CYP2C19; a record tagged CYP2D6 must not match it.
    let records = vec![record("CYP2D6", Some("rs4244285"), "A/A")];
    let call = infer(&records, "codeine", &tables);
    assert_eq!(call.phenotype, "NM");
    assert!(call.detected_variants.is_empty());
}

#[test]
fn records_without_identifier_never_match() {
    let tables = load_builtin().unwrap();
    let records = vec![record("CYP2D6", None, "A/A")];
    let call = infer(&records, "codeine", &tables);
    assert_eq!(call.phenotype, "NM");
}

#[test]
fn most_severe_finding_wins_and_ties_keep_input_order() {
    let tables = tables_with(
        "variant\trs10\tCYP2D6\tReduced metabolism\t-\n\
         variant\trs20\tCYP2D6\tPoor Metabolizer\t-\n\
         variant\trs30\tCYP2D6\tPoor Metabolizer\t-\n",
    );
    let records = vec![
        record("CYP2D6", Some("rs10"), "C/T"),
        record("CYP2D6", Some("rs30"), "G/G"),
        record("CYP2D6", Some("rs20"), "A/A"),
    ];
    let call = infer(&records, "codeine", &tables);
    assert_eq!(call.phenotype, "PM");
    let ids: Vec<&str> = call
        .detected_variants
        .iter()
        .map(|f| f.variant_id.as_str())
        .collect();
    assert_eq!(ids, vec!["rs30", "rs20", "rs10"]);
}

#[test]
fn phenotype_without_abbreviation_uses_full_name() {
    let tables = tables_with("variant\trs40\tCYP2D6\tLoss of function\t3\n");
    let records = vec![record("CYP2D6", Some("rs40"), "T/T")];
    let call = infer(&records, "codeine", &tables);
    assert_eq!(call.phenotype, "Loss of function");
}
