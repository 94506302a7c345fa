use tracing::debug;

use crate::scores::jitter::Jitter;
use crate::scores::{PhenotypeCall, RiskAssessment, Severity};
use crate::tables::{ReferenceTables, UNKNOWN};

pub const DEFAULT_RISK_LABEL: &str = "Standard Risk / Unknown";
pub const TOXIC_MARKER: &str = "Toxic";

pub const BASE_CONFIDENCE: f64 = 0.50;
pub const GENE_EVIDENCE: f64 = 0.20;
pub const PER_VARIANT_EVIDENCE: f64 = 0.05;
pub const MAX_VARIANT_EVIDENCE: f64 = 0.15;
pub const MATCHED_CAP: f64 = 0.98;
pub const DEFAULT_CAP: f64 = 0.90;

pub fn evidence_confidence(call: &PhenotypeCall) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if call.primary_gene != UNKNOWN && call.primary_gene != "None" {
        confidence += GENE_EVIDENCE;
    }

    let variants = call.detected_variants.len() as f64;
    confidence += (PER_VARIANT_EVIDENCE * variants).min(MAX_VARIANT_EVIDENCE);

    confidence += phenotype_evidence(&call.phenotype);
    confidence
}

fn phenotype_evidence(phenotype: &str) -> f64 {
    match phenotype {
        "PM" | "URM" => 0.10,
        "IM" | "NM" => 0.05,
        _ => 0.0,
    }
}

pub fn assess(
    drug: &str,
    call: &PhenotypeCall,
    tables: &ReferenceTables,
    jitter: &mut dyn Jitter,
) -> RiskAssessment {
    let confidence = evidence_confidence(call) + jitter.draw();

    let assessment = match tables.risk_label(drug, &call.phenotype) {
        Some(label) => RiskAssessment {
            risk_label: label.to_string(),
            severity: if label.contains(TOXIC_MARKER) {
                Severity::High
            } else {
                Severity::Medium
            },
            confidence_score: confidence.min(MATCHED_CAP),
        },
        None => RiskAssessment {
            risk_label: DEFAULT_RISK_LABEL.to_string(),
            severity: Severity::Low,
            confidence_score: confidence.min(DEFAULT_CAP),
        },
    };
    debug!(
        drug,
        phenotype = %call.phenotype,
        risk_label = %assessment.risk_label,
        confidence = assessment.confidence_score,
        "risk_assessed"
    );
    assessment
}
