mod loader;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Result, bail};

pub use loader::{load_builtin_v1, load_tables_tsv, merge_rows, parse_tables_tsv};

/// Pharmacogenes the extractor keeps records for. Declaration order is the
/// scan order of the substring gene fallback.
pub const TRACKED_GENES: [&str; 6] = ["CYP2D6", "CYP2C19", "CYP2C9", "SLCO1B1", "TPMT", "DPYD"];

pub const UNKNOWN: &str = "Unknown";

pub fn is_tracked(gene: &str) -> bool {
    TRACKED_GENES.contains(&gene)
}

pub fn normalize_drug(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Drug {
        drug: String,
        gene: String,
    },
    Phenotype {
        name: String,
        abbreviation: String,
        rank: Option<u8>,
    },
    Variant {
        rsid: String,
        gene: String,
        phenotype: String,
        severity: Option<u8>,
    },
    Risk {
        drug: String,
        phenotype: String,
        label: String,
    },
}

impl TableRow {
    pub fn key(&self) -> (&'static str, String) {
        match self {
            TableRow::Drug { drug, .. } => ("drug", drug.clone()),
            TableRow::Phenotype { name, .. } => ("phenotype", name.clone()),
            TableRow::Variant { rsid, .. } => ("variant", rsid.clone()),
            TableRow::Risk {
                drug, phenotype, ..
            } => ("risk", format!("{}/{}", drug, phenotype)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRule {
    pub gene: String,
    pub phenotype: String,
    pub severity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotypeDef {
    pub abbreviation: String,
    pub rank: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub version: String,
    drug_genes: BTreeMap<String, String>,
    phenotypes: BTreeMap<String, PhenotypeDef>,
    variants: BTreeMap<String, VariantRule>,
    risk_rules: BTreeMap<(String, String), String>,
}

impl ReferenceTables {
    pub fn from_rows(version: &str, rows: Vec<TableRow>) -> Result<Self> {
        let mut drug_genes = BTreeMap::new();
        let mut phenotypes = BTreeMap::new();
        let mut pending_variants = Vec::new();
        let mut risk_rules = BTreeMap::new();

        for row in rows {
            match row {
                TableRow::Drug { drug, gene } => {
                    drug_genes.insert(drug, gene);
                }
                TableRow::Phenotype {
                    name,
                    abbreviation,
                    rank,
                } => {
                    phenotypes.insert(name, PhenotypeDef { abbreviation, rank });
                }
                TableRow::Variant {
                    rsid,
                    gene,
                    phenotype,
                    severity,
                } => pending_variants.push((rsid, gene, phenotype, severity)),
                TableRow::Risk {
                    drug,
                    phenotype,
                    label,
                } => {
                    risk_rules.insert((drug, phenotype), label);
                }
            }
        }

        // Variant severities may defer to the phenotype rank, so resolve after all
        // phenotype rows are known.
        let mut variants = BTreeMap::new();
        for (rsid, gene, phenotype, severity) in pending_variants {
            let severity = match severity.or_else(|| phenotypes.get(&phenotype).and_then(|p| p.rank)) {
                Some(s) => s,
                None => bail!(
                    "variant '{}' has no severity and phenotype '{}' has no rank",
                    rsid,
                    phenotype
                ),
            };
            variants.insert(
                rsid,
                VariantRule {
                    gene,
                    phenotype,
                    severity,
                },
            );
        }

        Ok(Self {
            version: version.to_string(),
            drug_genes,
            phenotypes,
            variants,
            risk_rules,
        })
    }

    pub fn gene_for_drug(&self, drug: &str) -> Option<&str> {
        self.drug_genes
            .get(&normalize_drug(drug))
            .map(String::as_str)
    }

    pub fn variant_rule(&self, rsid: &str) -> Option<&VariantRule> {
        self.variants.get(rsid)
    }

    pub fn abbreviation(&self, phenotype: &str) -> Option<&str> {
        self.phenotypes
            .get(phenotype)
            .map(|p| p.abbreviation.as_str())
    }

    pub fn phenotype_rank(&self, phenotype: &str) -> Option<u8> {
        self.phenotypes.get(phenotype).and_then(|p| p.rank)
    }

    pub fn risk_label(&self, drug: &str, abbreviation: &str) -> Option<&str> {
        self.risk_rules
            .get(&(normalize_drug(drug), abbreviation.to_string()))
            .map(String::as_str)
    }

    pub fn drugs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.drug_genes
            .iter()
            .map(|(d, g)| (d.as_str(), g.as_str()))
    }

    pub fn variants(&self) -> impl Iterator<Item = (&str, &VariantRule)> {
        self.variants.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn phenotypes(&self) -> impl Iterator<Item = (&str, &PhenotypeDef)> {
        self.phenotypes.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn risk_rules(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.risk_rules
            .iter()
            .map(|((d, p), label)| (d.as_str(), p.as_str(), label.as_str()))
    }
}

pub fn load_builtin() -> Result<ReferenceTables> {
    let rows = load_builtin_v1()?;
    ReferenceTables::from_rows("v1", rows)
}

pub fn load_with_overlay(path: Option<&Path>) -> Result<ReferenceTables> {
    let mut rows = load_builtin_v1()?;
    let mut version = "v1".to_string();
    if let Some(path) = path {
        let user_rows = load_tables_tsv(path)?;
        rows = merge_rows(rows, user_rows);
        version = "v1+user".to_string();
    }
    ReferenceTables::from_rows(&version, rows)
}
