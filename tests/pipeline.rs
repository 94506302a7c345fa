use std::fs;

use kira_pgx::ctx::Ctx;
use kira_pgx::explain::{Explainer, Narrative};
use kira_pgx::pipeline::Pipeline;
use kira_pgx::pipeline::stage1_input::Stage1Input;
use kira_pgx::pipeline::stage2_tables::Stage2Tables;
use kira_pgx::pipeline::stage3_extract::Stage3Extract;
use kira_pgx::pipeline::stage4_score::Stage4Score;
use kira_pgx::pipeline::stage5_explain::Stage5Explain;
use kira_pgx::pipeline::stage6_output::Stage6Output;
use kira_pgx::scores::{PhenotypeCall, RiskAssessment};
use tempfile::TempDir;

struct CannedExplainer;

impl Explainer for CannedExplainer {
    fn explain(&self, call: &PhenotypeCall, drug: &str, _risk: &RiskAssessment) -> Narrative {
        Narrative::from_provider_text(&format!(
            "```json\n{{\"summary\":\"{} {}\",\"reasoning\":\"{}\"}}\n```",
            drug,
            call.phenotype,
            "r".repeat(120)
        ))
    }
}

fn ctx_for(dir: &TempDir, vcf: &str, drugs: &[&str]) -> Ctx {
    let input = dir.path().join("sample.vcf");
    fs::write(&input, vcf).unwrap();
    let mut ctx = Ctx::new(
        input,
        dir.path().to_path_buf(),
        drugs.iter().map(|d| d.to_string()).collect(),
        None,
        false,
        false,
        "0.0.0-test",
    );
    ctx.seed = Some(0);
    ctx
}

const VCF: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE\n\
chr10\t94781859\trs4244285\tG\tA\t50\tPASS\tGENE=CYP2C19\tGT\t1/1\n";

#[test]
fn provider_narratives_boost_scores() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = ctx_for(&tmp, VCF, &["clopidogrel", "metformin"]);

    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Tables::new()),
        Box::new(Stage3Extract::new()),
        Box::new(Stage4Score::new()),
        Box::new(Stage5Explain::with_explainer(Box::new(CannedExplainer))),
        Box::new(Stage6Output::new()),
    ]);
    pipeline.run(&mut ctx).unwrap();

    assert_eq!(ctx.records.len(), 1);
    assert_eq!(ctx.warnings.len(), 1);
    assert!(ctx.warnings[0].contains("metformin"));

    let clopidogrel = &ctx.outcomes[0];
    assert_eq!(clopidogrel.call.phenotype, "PM");
    // 0.85 evidence, jitter, then the long-reasoning boost.
    assert!(clopidogrel.risk.confidence_score >= 0.91 - 1e-9);
    assert!(clopidogrel.risk.confidence_score <= 0.94 + 1e-9);

    assert_eq!(ctx.report.results.len(), 2);
    assert_eq!(ctx.report.results[0].llm_generated_explanation.summary, "clopidogrel PM");
    assert_eq!(
        ctx.report.results[0].clinical_recommendation.guideline_basis,
        "N/A"
    );
    assert!(!ctx.output.json_path.exists());
}

#[test]
fn unreadable_type_fails_before_extraction() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("sample.csv");
    fs::write(&input, VCF).unwrap();
    let mut ctx = Ctx::new(
        input,
        tmp.path().to_path_buf(),
        vec!["codeine".to_string()],
        None,
        false,
        false,
        "0.0.0-test",
    );
    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage3Extract::new()),
    ]);
    let err = pipeline.run(&mut ctx).unwrap_err();
    assert!(err.to_string().contains("invalid file type"));
    assert!(ctx.records.is_empty());
}
