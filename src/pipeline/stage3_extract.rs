use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::extract::{ExtractOptions, extract_with};
use crate::pipeline::Stage;

pub struct Stage3Extract;

impl Stage3Extract {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Extract {
    fn name(&self) -> &'static str {
        "stage3_extract"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let options = ExtractOptions {
            gene_fallback: ctx.gene_fallback,
        };
        let records = extract_with(&ctx.raw_text, &options);
        if records.is_empty() {
            bail!(
                "the VCF file {} appears to be empty or invalid",
                ctx.input.display()
            );
        }
        info!(records = records.len(), "variants_extracted");
        ctx.records = records;
        Ok(())
    }
}
