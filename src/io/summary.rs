use crate::ctx::Ctx;
use crate::io::json_writer::gene_coverage;

pub fn format_summary(ctx: &Ctx) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let mut out = String::new();
    out.push_str(&format!("kira-pgx v{}\n", version));
    out.push_str(&format!(
        "Input: {} variant records, gene coverage {}, report {}\n",
        ctx.records.len(),
        gene_coverage(&ctx.records),
        ctx.report_id
    ));

    if ctx.outcomes.is_empty() {
        out.push_str("Drugs: none\n");
        return out;
    }
    for outcome in &ctx.outcomes {
        out.push_str(&format!(
            "{}: {} {} -> {} ({}, confidence {:.2})\n",
            outcome.drug,
            outcome.call.primary_gene,
            outcome.call.phenotype,
            outcome.risk.risk_label,
            outcome.risk.severity.as_str(),
            outcome.risk.confidence_score
        ));
    }
    out
}
