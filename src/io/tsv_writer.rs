use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "drug\tprimary_gene\tphenotype\tdiplotype\trisk_label\tseverity\tconfidence\tvariants"
    )?;
    for outcome in &ctx.outcomes {
        let variants = outcome
            .call
            .detected_variants
            .iter()
            .map(|f| format!("{}:{}", f.variant_id, f.genotype))
            .collect::<Vec<_>>();
        let variants = if variants.is_empty() {
            "-".to_string()
        } else {
            variants.join(",")
        };
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.6}\t{}",
            outcome.drug,
            outcome.call.primary_gene,
            outcome.call.phenotype,
            outcome.call.diplotype,
            outcome.risk.risk_label,
            outcome.risk.severity.as_str(),
            outcome.risk.confidence_score,
            variants
        )?;
    }
    w.flush()?;
    Ok(())
}
