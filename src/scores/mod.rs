pub mod jitter;
pub mod panel;
pub mod phenotype;
pub mod risk;

pub const DIPLOTYPE_NONE: &str = "N/A";
pub const DIPLOTYPE_REFERENCE: &str = "*1/*1";
pub const DIPLOTYPE_VARIANT: &str = "*1/*2";

pub const PHENOTYPE_NORMAL: &str = "NM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub gene: String,
    pub phenotype: String,
    pub severity: u8,
    pub variant_id: String,
    pub genotype: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotypeCall {
    pub primary_gene: String,
    pub phenotype: String,
    pub diplotype: String,
    /// Ordered by descending severity, ties in input order.
    pub detected_variants: Vec<Finding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub risk_label: String,
    pub severity: Severity,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrugOutcome {
    pub drug: String,
    pub call: PhenotypeCall,
    pub risk: RiskAssessment,
}
