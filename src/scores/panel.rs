#[cfg(feature = "mt")]
use rayon::prelude::*;

use crate::extract::VariantRecord;
use crate::scores::DrugOutcome;
use crate::scores::jitter::{Jitter, UniformJitter};
use crate::scores::phenotype::infer;
use crate::scores::risk::assess;
use crate::tables::ReferenceTables;

pub fn parse_drug_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn evaluate_drug(
    records: &[VariantRecord],
    drug: &str,
    tables: &ReferenceTables,
    jitter: &mut dyn Jitter,
) -> DrugOutcome {
    let call = infer(records, drug, tables);
    let risk = assess(drug, &call, tables, jitter);
    DrugOutcome {
        drug: drug.to_string(),
        call,
        risk,
    }
}

pub fn evaluate_panel(
    records: &[VariantRecord],
    drugs: &[String],
    tables: &ReferenceTables,
    seed: Option<u64>,
) -> Vec<DrugOutcome> {
    #[cfg(feature = "mt")]
    let iter = drugs.par_iter().enumerate();
    #[cfg(not(feature = "mt"))]
    let iter = drugs.iter().enumerate();

    iter.map(|(idx, drug)| {
        let mut jitter = UniformJitter::for_panel(seed, idx);
        evaluate_drug(records, drug, tables, &mut jitter)
    })
    .collect()
}
