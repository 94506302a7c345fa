use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::v1::DetectedVariant;
use crate::scores::{PhenotypeCall, RiskAssessment};

pub const NARRATIVE_CAP: f64 = 0.99;
const DETAILED_REASONING_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub biological_mechanism: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clinical_recommendation: String,
    #[serde(default)]
    pub guideline_basis: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasoning: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub simulated: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Narrative {
    /// Accepts a reply wrapped in a ```` ```json ```` fence. Unparseable
    /// replies become an error narrative carrying the parse error.
    pub fn from_provider_text(text: &str) -> Self {
        let mut body = text.trim();
        if let Some(rest) = body.strip_prefix("```json") {
            body = rest;
        }
        if let Some(rest) = body.strip_suffix("```") {
            body = rest;
        }
        match serde_json::from_str::<Narrative>(body) {
            Ok(narrative) => narrative,
            Err(err) => Narrative {
                summary: "Error parsing explanation.".to_string(),
                biological_mechanism: "N/A".to_string(),
                clinical_recommendation: "Refer to standard guidelines.".to_string(),
                guideline_basis: None,
                reasoning: err.to_string(),
                simulated: false,
            },
        }
    }
}

pub trait Explainer {
    fn explain(&self, call: &PhenotypeCall, drug: &str, risk: &RiskAssessment) -> Narrative;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl Explainer for TemplateExplainer {
    fn explain(&self, call: &PhenotypeCall, drug: &str, _risk: &RiskAssessment) -> Narrative {
        Narrative {
            summary: "Demo Mode: API Keys missing or providers failed.".to_string(),
            biological_mechanism:
                "Simulation: The patient's genotype suggests altered metabolism.".to_string(),
            clinical_recommendation: format!(
                "Consult guidelines for {} given {}.",
                drug, call.phenotype
            ),
            guideline_basis: Some("CPIC/FDA Guidelines (Simulation)".to_string()),
            reasoning: "This is a fallback response because no LLM provider is available."
                .to_string(),
            simulated: true,
        }
    }
}

pub fn apply_narrative_boost(risk: &mut RiskAssessment, narrative: &Narrative) {
    if narrative.simulated {
        return;
    }
    let boost = if narrative.reasoning.chars().count() > DETAILED_REASONING_CHARS {
        0.05
    } else {
        0.02
    };
    risk.confidence_score = (risk.confidence_score + boost).min(NARRATIVE_CAP);
}

pub fn build_prompt(call: &PhenotypeCall, drug: &str, risk: &RiskAssessment) -> String {
    let variants: Vec<DetectedVariant> = call
        .detected_variants
        .iter()
        .map(DetectedVariant::from)
        .collect();
    let variants_json = serde_json::to_string(&variants).unwrap_or_else(|_| "[]".to_string());

    let mut out = String::new();
    out.push_str("You are a pharmacogenomics expert. Provide a clinical explanation for the following patient scenario.\n\n");
    out.push_str("Patient Data:\n");
    out.push_str(&format!("- Gene: {}\n", call.primary_gene));
    out.push_str(&format!("- Phenotype: {}\n", call.phenotype));
    out.push_str(&format!("- Detected Variants: {}\n\n", variants_json));
    out.push_str(&format!("Drug: {}\n", drug));
    out.push_str(&format!(
        "Risk Assessment: {} ({})\n\n",
        risk.risk_label,
        risk.severity.as_str()
    ));
    out.push_str("Return a valid JSON object with exactly these keys:\n");
    out.push_str("- summary: A one-sentence summary for a doctor.\n");
    out.push_str("- biological_mechanism: 2-3 sentences explaining the mechanism.\n");
    out.push_str("- clinical_recommendation: Actionable advice (dosage adjustment, alternative drug).\n");
    out.push_str("- guideline_basis: Reference to CPIC or FDA guidelines supporting this.\n");
    out.push_str("- reasoning: Brief explanation of the clinical impact.\n\n");
    out.push_str("Do not include markdown formatting. Return only the raw JSON string.\n");
    out
}
