use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::panel::evaluate_panel;

pub struct Stage4Score;

impl Stage4Score {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Score {
    fn name(&self) -> &'static str {
        "stage4_score"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.drugs.is_empty() {
            bail!("at least one target drug is required");
        }
        let tables = ctx.tables()?;
        let outcomes = evaluate_panel(&ctx.records, &ctx.drugs, tables, ctx.seed);
        for outcome in &outcomes {
            info!(
                drug = %outcome.drug,
                gene = %outcome.call.primary_gene,
                phenotype = %outcome.call.phenotype,
                risk_label = %outcome.risk.risk_label,
                confidence = outcome.risk.confidence_score,
                "drug_scored"
            );
        }
        ctx.outcomes = outcomes;
        Ok(())
    }
}
