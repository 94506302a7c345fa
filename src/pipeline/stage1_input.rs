use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::read_text_limited;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(format) = ctx.input_format else {
            bail!(
                "invalid file type for {}: expected .vcf or .vcf.gz",
                ctx.input.display()
            );
        };

        let text = read_text_limited(&ctx.input, ctx.max_input_bytes)?;
        ctx.input_bytes = text.len() as u64;
        ctx.raw_text = text;

        info!(
            input = %ctx.input.display(),
            format = ?format,
            bytes = ctx.input_bytes,
            "input_loaded"
        );
        Ok(())
    }
}
