use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::tables::{TableRow, is_tracked, normalize_drug};

pub fn load_builtin_v1() -> Result<Vec<TableRow>> {
    let content = include_str!("../../assets/pgx/knowledge_v1.tsv");
    parse_tables_tsv(content, "built-in v1")
}

pub fn load_tables_tsv(path: &Path) -> Result<Vec<TableRow>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tables TSV {}", path.display()))?;
    parse_tables_tsv(&content, &path.display().to_string())
}

pub fn merge_rows(mut builtin: Vec<TableRow>, user: Vec<TableRow>) -> Vec<TableRow> {
    if user.is_empty() {
        return builtin;
    }
    let mut user_order: Vec<(&'static str, String)> = Vec::with_capacity(user.len());
    let mut user_map: HashMap<(&'static str, String), TableRow> = HashMap::new();
    for row in user {
        let key = row.key();
        user_order.push(key.clone());
        user_map.insert(key, row);
    }

    let mut merged = Vec::with_capacity(builtin.len() + user_map.len());
    for row in builtin.drain(..) {
        if let Some(user_row) = user_map.remove(&row.key()) {
            merged.push(user_row);
        } else {
            merged.push(row);
        }
    }
    for key in user_order {
        if let Some(row) = user_map.remove(&key) {
            merged.push(row);
        }
    }
    merged
}

pub fn parse_tables_tsv(content: &str, source: &str) -> Result<Vec<TableRow>> {
    let mut rows = Vec::new();
    let mut seen: HashSet<(&'static str, String)> = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            bail!("{}:{} empty field in TSV", source, line_no);
        }

        let row = match parts[0] {
            "drug" => {
                expect_columns(&parts, 3, source, line_no)?;
                let gene = tracked_gene(parts[2], source, line_no)?;
                TableRow::Drug {
                    drug: normalize_drug(parts[1]),
                    gene,
                }
            }
            "phenotype" => {
                expect_columns(&parts, 4, source, line_no)?;
                TableRow::Phenotype {
                    name: parts[1].to_string(),
                    abbreviation: parts[2].to_string(),
                    rank: parse_rank(parts[3], source, line_no)?,
                }
            }
            "variant" => {
                expect_columns(&parts, 5, source, line_no)?;
                let gene = tracked_gene(parts[2], source, line_no)?;
                TableRow::Variant {
                    rsid: parts[1].to_string(),
                    gene,
                    phenotype: parts[3].to_string(),
                    severity: parse_rank(parts[4], source, line_no)?,
                }
            }
            "risk" => {
                expect_columns(&parts, 4, source, line_no)?;
                TableRow::Risk {
                    drug: normalize_drug(parts[1]),
                    phenotype: parts[2].to_string(),
                    label: parts[3].to_string(),
                }
            }
            other => bail!("{}:{} unknown table kind '{}'", source, line_no, other),
        };

        let key = row.key();
        if !seen.insert(key.clone()) {
            bail!(
                "{}:{} duplicate {} entry '{}'",
                source,
                line_no,
                key.0,
                key.1
            );
        }
        rows.push(row);
    }

    Ok(rows)
}

fn expect_columns(parts: &[&str], expected: usize, source: &str, line_no: usize) -> Result<()> {
    if parts.len() != expected {
        bail!(
            "{}:{} malformed '{}' row (expected {} columns, got {})",
            source,
            line_no,
            parts[0],
            expected,
            parts.len()
        );
    }
    Ok(())
}

fn tracked_gene(gene: &str, source: &str, line_no: usize) -> Result<String> {
    if !is_tracked(gene) {
        bail!("{}:{} gene '{}' is not tracked", source, line_no, gene);
    }
    Ok(gene.to_string())
}

fn parse_rank(value: &str, source: &str, line_no: usize) -> Result<Option<u8>> {
    if value == "-" {
        return Ok(None);
    }
    let rank = value
        .parse::<u8>()
        .with_context(|| format!("{}:{} invalid severity rank '{}'", source, line_no, value))?;
    Ok(Some(rank))
}
