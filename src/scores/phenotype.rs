use tracing::debug;

use crate::extract::VariantRecord;
use crate::scores::{
    DIPLOTYPE_NONE, DIPLOTYPE_REFERENCE, DIPLOTYPE_VARIANT, Finding, PHENOTYPE_NORMAL,
    PhenotypeCall,
};
use crate::tables::{ReferenceTables, UNKNOWN};

pub fn infer(records: &[VariantRecord], drug: &str, tables: &ReferenceTables) -> PhenotypeCall {
    let Some(target_gene) = tables.gene_for_drug(drug) else {
        debug!(drug, "drug_not_in_tables");
        return PhenotypeCall {
            primary_gene: UNKNOWN.to_string(),
            phenotype: UNKNOWN.to_string(),
            diplotype: DIPLOTYPE_NONE.to_string(),
            detected_variants: Vec::new(),
        };
    };

    let mut findings = collect_findings(records, target_gene, tables);
    if findings.is_empty() {
        return PhenotypeCall {
            primary_gene: target_gene.to_string(),
            phenotype: PHENOTYPE_NORMAL.to_string(),
            diplotype: DIPLOTYPE_REFERENCE.to_string(),
            detected_variants: Vec::new(),
        };
    }

    // Stable: equal severities keep input order.
    findings.sort_by(|a, b| b.severity.cmp(&a.severity));
    let primary = &findings[0];
    let primary_gene = primary.gene.clone();
    let phenotype = tables
        .abbreviation(&primary.phenotype)
        .unwrap_or(&primary.phenotype)
        .to_string();
    debug!(
        drug,
        gene = %primary_gene,
        phenotype = %phenotype,
        findings = findings.len(),
        "phenotype_called"
    );

    PhenotypeCall {
        primary_gene,
        phenotype,
        diplotype: DIPLOTYPE_VARIANT.to_string(),
        detected_variants: findings,
    }
}

fn collect_findings(
    records: &[VariantRecord],
    target_gene: &str,
    tables: &ReferenceTables,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    for record in records.iter().filter(|r| r.gene == target_gene) {
        let Some(variant_id) = record.variant_id.as_deref() else {
            continue;
        };
        let Some(rule) = tables.variant_rule(variant_id) else {
            continue;
        };
        if rule.gene != target_gene {
            continue;
        }
        findings.push(Finding {
            gene: rule.gene.clone(),
            phenotype: rule.phenotype.clone(),
            severity: rule.severity,
            variant_id: variant_id.to_string(),
            genotype: record.genotype.clone(),
        });
    }
    findings
}
