use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_pgx::cli::{Cli, Commands, RunArgs, TablesCommand, TablesShowArgs, ValidateArgs};
use kira_pgx::ctx::Ctx;
use kira_pgx::extract::GeneFallback;
use kira_pgx::io;
use kira_pgx::pipeline::Pipeline;
use kira_pgx::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_pgx::pipeline::stage1_input::Stage1Input;
use kira_pgx::pipeline::stage2_tables::Stage2Tables;
use kira_pgx::pipeline::stage3_extract::Stage3Extract;
use kira_pgx::pipeline::stage4_score::Stage4Score;
use kira_pgx::pipeline::stage5_explain::Stage5Explain;
use kira_pgx::pipeline::stage6_output::Stage6Output;
use kira_pgx::scores::panel::parse_drug_list;
use kira_pgx::tables;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Tables(args) => match args.command {
            TablesCommand::Show(show) => handle_tables_show(show)?,
        },
        Commands::Validate(args) => handle_validate(args)?,
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let drugs: Vec<String> = args
        .drug
        .iter()
        .flat_map(|d| parse_drug_list(d))
        .collect();

    let mut ctx = Ctx::new(
        args.input,
        args.out,
        drugs,
        args.tables,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.gene_fallback = gene_fallback(args.strict_gene);
    ctx.seed = args.seed;
    ctx.max_input_bytes = args.max_input_bytes;
    if let Some(report_id) = &args.report_id {
        ctx.set_report_id(report_id);
    }

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Input::new()),
        Box::new(Stage2Tables::new()),
        Box::new(Stage3Extract::new()),
        Box::new(Stage4Score::new()),
        Box::new(Stage5Explain::new()),
        Box::new(Stage6Output::new()),
    ]);
    pipeline.run(&mut ctx)?;

    print_summary(&ctx);
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.input,
        PathBuf::from("."),
        Vec::new(),
        None,
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.gene_fallback = gene_fallback(args.strict_gene);
    ctx.max_input_bytes = args.max_input_bytes;

    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage3Extract::new()),
    ]);
    pipeline.run(&mut ctx)?;

    print_validate_summary(&ctx);
    Ok(())
}

fn handle_tables_show(args: TablesShowArgs) -> Result<()> {
    let tables = tables::load_with_overlay(args.tables.as_deref())?;
    println!("reference tables (version {}):", tables.version);
    println!("tracked genes: {}", tables::TRACKED_GENES.join(", "));
    println!("drugs:");
    for (drug, gene) in tables.drugs() {
        println!("{}\t{}", drug, gene);
    }
    println!("variants:");
    for (rsid, rule) in tables.variants() {
        println!(
            "{}\t{}\t{}\t{}",
            rsid, rule.gene, rule.phenotype, rule.severity
        );
    }
    println!("phenotypes:");
    for (name, def) in tables.phenotypes() {
        let rank = def
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}\t{}\t{}", name, def.abbreviation, rank);
    }
    println!("risk rules:");
    for (drug, phenotype, label) in tables.risk_rules() {
        println!("{}\t{}\t{}", drug, phenotype, label);
    }
    Ok(())
}

fn gene_fallback(strict: bool) -> GeneFallback {
    if strict {
        GeneFallback::Disabled
    } else {
        GeneFallback::Substring
    }
}

fn print_summary(ctx: &Ctx) {
    print!("{}", io::summary::format_summary(ctx));
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-pgx validate ok");
    println!("bytes: {}", ctx.input_bytes);
    println!("records: {}", ctx.records.len());
    for record in &ctx.records {
        println!(
            "{}\t{}\t{}",
            record.gene,
            record.variant_id.as_deref().unwrap_or("."),
            record.genotype
        );
    }
}
