use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::ctx::DEFAULT_MAX_INPUT_BYTES;

#[derive(Debug, Parser)]
#[command(
    name = "kira-pgx",
    version,
    about = "Pharmacogenomic phenotype and drug-risk calls from VCF input"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Tables(TablesArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Input .vcf or .vcf.gz file")]
    pub input: PathBuf,

    #[arg(
        long,
        required = true,
        num_args = 1..,
        help = "Target drug(s); comma-separated or repeated"
    )]
    pub drug: Vec<String>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, help = "Reference table TSV to overlay on the built-in tables")]
    pub tables: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Disable substring gene detection in INFO"
    )]
    pub strict_gene: bool,

    #[arg(long, help = "Seed for confidence jitter (reproducible scores)")]
    pub seed: Option<u64>,

    #[arg(long, help = "Report identifier (default: random)")]
    pub report_id: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES, help = "Maximum input size in bytes")]
    pub max_input_bytes: u64,
}

#[derive(Debug, Args)]
pub struct TablesArgs {
    #[command(subcommand)]
    pub command: TablesCommand,
}

#[derive(Debug, Subcommand)]
pub enum TablesCommand {
    Show(TablesShowArgs),
}

#[derive(Debug, Args)]
pub struct TablesShowArgs {
    #[arg(long, help = "Optional tables TSV to overlay on built-in tables")]
    pub tables: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Input .vcf or .vcf.gz file")]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub strict_gene: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_input_bytes: u64,
}
