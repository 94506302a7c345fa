use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::explain::{Explainer, TemplateExplainer, apply_narrative_boost};
use crate::pipeline::Stage;

pub struct Stage5Explain {
    explainer: Box<dyn Explainer>,
}

impl Stage5Explain {
    pub fn new() -> Self {
        Self::with_explainer(Box::new(TemplateExplainer))
    }

    pub fn with_explainer(explainer: Box<dyn Explainer>) -> Self {
        Self { explainer }
    }
}

impl Stage for Stage5Explain {
    fn name(&self) -> &'static str {
        "stage5_explain"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut narratives = Vec::with_capacity(ctx.outcomes.len());
        for outcome in ctx.outcomes.iter_mut() {
            let narrative = self
                .explainer
                .explain(&outcome.call, &outcome.drug, &outcome.risk);
            apply_narrative_boost(&mut outcome.risk, &narrative);
            narratives.push(narrative);
        }
        let simulated = narratives.iter().filter(|n| n.simulated).count();
        info!(narratives = narratives.len(), simulated, "narratives_ready");
        ctx.narratives = narratives;
        Ok(())
    }
}
