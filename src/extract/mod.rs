//! Tolerant extraction of tracked-gene variant records from VCF-like text.
//!
//! Only the first sample column is read. Lines that cannot yield a record are
//! skipped and logged at debug level; extraction itself never fails.

mod gene;
mod genotype;

use tracing::debug;

use crate::tables::is_tracked;

pub use gene::{GeneFallback, detect_gene};
pub use genotype::{INVALID_ALLELE, MISSING_ALLELE, allele_tokens, resolve_genotype};

pub const MIN_COLUMNS: usize = 10;

const COL_ID: usize = 2;
const COL_REF: usize = 3;
const COL_ALT: usize = 4;
const COL_INFO: usize = 7;
const COL_FORMAT: usize = 8;
const COL_SAMPLE: usize = 9;

const MISSING_ID: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub gene: String,
    pub variant_id: Option<String>,
    pub genotype: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub gene_fallback: GeneFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewColumns,
    NoGene,
    UntrackedGene,
    NoGtField,
    NoGtValue,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::TooFewColumns => "too_few_columns",
            SkipReason::NoGene => "no_gene",
            SkipReason::UntrackedGene => "untracked_gene",
            SkipReason::NoGtField => "no_gt_in_format",
            SkipReason::NoGtValue => "no_gt_in_sample",
        }
    }
}

pub fn extract(text: &str) -> Vec<VariantRecord> {
    extract_with(text, &ExtractOptions::default())
}

pub fn extract_with(text: &str, options: &ExtractOptions) -> Vec<VariantRecord> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }
        match parse_line(line, options) {
            Ok(record) => {
                debug!(
                    line = idx + 1,
                    gene = %record.gene,
                    variant_id = record.variant_id.as_deref().unwrap_or(MISSING_ID),
                    genotype = %record.genotype,
                    "variant_extracted"
                );
                records.push(record);
            }
            Err(reason) => {
                debug!(line = idx + 1, reason = reason.as_str(), "variant_line_skipped");
            }
        }
    }
    records
}

pub fn parse_line(line: &str, options: &ExtractOptions) -> Result<VariantRecord, SkipReason> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_COLUMNS {
        return Err(SkipReason::TooFewColumns);
    }

    let gene = detect_gene(parts[COL_INFO], options.gene_fallback).ok_or(SkipReason::NoGene)?;
    if !is_tracked(gene) {
        return Err(SkipReason::UntrackedGene);
    }

    let gt_idx = parts[COL_FORMAT]
        .split(':')
        .position(|f| f == "GT")
        .ok_or(SkipReason::NoGtField)?;
    let gt = parts[COL_SAMPLE]
        .split(':')
        .nth(gt_idx)
        .ok_or(SkipReason::NoGtValue)?;

    let id = parts[COL_ID];
    Ok(VariantRecord {
        gene: gene.to_string(),
        variant_id: (id != MISSING_ID).then(|| id.to_string()),
        genotype: resolve_genotype(gt, parts[COL_REF], parts[COL_ALT]),
    })
}
