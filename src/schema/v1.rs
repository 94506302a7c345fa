use serde::{Deserialize, Serialize};

use crate::explain::Narrative;
use crate::scores::{Finding, PhenotypeCall};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_label: String,
    pub confidence_score: f64,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedVariant {
    pub gene: String,
    pub phenotype: String,
    pub severity: u8,
    pub rsid: String,
    pub genotype: String,
}

impl From<&Finding> for DetectedVariant {
    fn from(f: &Finding) -> Self {
        Self {
            gene: f.gene.clone(),
            phenotype: f.phenotype.clone(),
            severity: f.severity,
            rsid: f.variant_id.clone(),
            genotype: f.genotype.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PharmacogenomicProfile {
    pub primary_gene: String,
    pub phenotype: String,
    pub diplotype: String,
    pub detected_variants: Vec<DetectedVariant>,
}

impl From<&PhenotypeCall> for PharmacogenomicProfile {
    fn from(call: &PhenotypeCall) -> Self {
        Self {
            primary_gene: call.primary_gene.clone(),
            phenotype: call.phenotype.clone(),
            diplotype: call.diplotype.clone(),
            detected_variants: call.detected_variants.iter().map(DetectedVariant::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalRecommendation {
    pub recommendation: String,
    pub guideline_basis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub vcf_parsing_success: bool,
    pub variant_count: u64,
    pub gene_coverage: String,
    pub evidence_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugResult {
    pub patient_id: String,
    pub drug: String,
    pub timestamp: String,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    pub clinical_recommendation: ClinicalRecommendation,
    pub llm_generated_explanation: Narrative,
    pub quality_metrics: QualityMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PgxReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub report_id: String,
    pub timestamp: String,
    pub results: Vec<DrugResult>,
}

impl PgxReportV1 {
    pub fn empty(tool_version: &str, report_id: &str, timestamp: &str) -> Self {
        Self {
            tool: "kira-pgx".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            report_id: report_id.to_string(),
            timestamp: timestamp.to_string(),
            results: Vec::new(),
        }
    }
}
