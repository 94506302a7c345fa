use anyhow::{Result, bail};

use crate::ctx::Ctx;
use crate::extract::VariantRecord;
use crate::schema::v1::{
    ClinicalRecommendation, DrugResult, PgxReportV1, PharmacogenomicProfile, QualityMetrics,
    RiskAssessment,
};
use crate::tables::TRACKED_GENES;

pub const DEFAULT_RECOMMENDATION: &str = "Consult a physician.";
pub const DEFAULT_GUIDELINE_BASIS: &str = "N/A";

pub fn build_report(ctx: &Ctx) -> Result<PgxReportV1> {
    if ctx.narratives.len() != ctx.outcomes.len() {
        bail!(
            "narrative count ({}) does not match drug outcomes ({})",
            ctx.narratives.len(),
            ctx.outcomes.len()
        );
    }

    let gene_coverage = gene_coverage(&ctx.records);
    let results = ctx
        .outcomes
        .iter()
        .zip(&ctx.narratives)
        .map(|(outcome, narrative)| DrugResult {
            patient_id: ctx.report_id.clone(),
            drug: outcome.drug.clone(),
            timestamp: ctx.timestamp.clone(),
            risk_assessment: RiskAssessment {
                risk_label: outcome.risk.risk_label.clone(),
                confidence_score: outcome.risk.confidence_score,
                severity: outcome.risk.severity.as_str().to_lowercase(),
            },
            pharmacogenomic_profile: PharmacogenomicProfile::from(&outcome.call),
            clinical_recommendation: ClinicalRecommendation {
                recommendation: or_default(
                    Some(narrative.clinical_recommendation.as_str()),
                    DEFAULT_RECOMMENDATION,
                ),
                guideline_basis: or_default(
                    narrative.guideline_basis.as_deref(),
                    DEFAULT_GUIDELINE_BASIS,
                ),
            },
            llm_generated_explanation: narrative.clone(),
            quality_metrics: QualityMetrics {
                vcf_parsing_success: true,
                variant_count: ctx.records.len() as u64,
                gene_coverage: gene_coverage.clone(),
                evidence_level: evidence_level(outcome.risk.confidence_score).to_string(),
            },
        })
        .collect();

    Ok(PgxReportV1 {
        tool: "kira-pgx".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        report_id: ctx.report_id.clone(),
        timestamp: ctx.timestamp.clone(),
        results,
    })
}

pub fn gene_coverage(records: &[VariantRecord]) -> String {
    let covered = TRACKED_GENES
        .iter()
        .filter(|g| records.iter().any(|r| r.gene == **g))
        .count();
    let pct = covered as f64 / TRACKED_GENES.len() as f64 * 100.0;
    format!("{:.0}%", pct)
}

pub fn evidence_level(confidence: f64) -> &'static str {
    if confidence >= 0.85 {
        "High"
    } else if confidence >= 0.70 {
        "Moderate"
    } else {
        "Low"
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
