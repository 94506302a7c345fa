use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::tables::load_with_overlay;

pub struct Stage2Tables;

impl Stage2Tables {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Tables {
    fn name(&self) -> &'static str {
        "stage2_tables"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let tables = load_with_overlay(ctx.tables_path.as_deref())?;

        for drug in &ctx.drugs {
            if tables.gene_for_drug(drug).is_none() {
                ctx.warnings
                    .push(format!("drug '{}' has no gene mapping; reported as Unknown", drug));
            }
        }

        info!(
            version = %tables.version,
            drugs = tables.drugs().count(),
            variants = tables.variants().count(),
            risk_rules = tables.risk_rules().count(),
            "tables_loaded"
        );
        ctx.tables = Some(tables);
        Ok(())
    }
}
