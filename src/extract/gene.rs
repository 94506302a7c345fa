use crate::tables::TRACKED_GENES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneFallback {
    #[default]
    Substring,
    Disabled,
}

/// Resolves the gene named by an INFO column. The result is not checked
/// against the tracked set when it comes from a `GENE=` tag.
pub fn detect_gene(info: &str, fallback: GeneFallback) -> Option<&str> {
    if let Some(gene) = gene_tag(info) {
        return Some(gene);
    }
    if let Some(gene) = TRACKED_GENES.iter().copied().find(|g| *g == info) {
        return Some(gene);
    }
    match fallback {
        GeneFallback::Substring => substring_scan(info),
        GeneFallback::Disabled => None,
    }
}

fn gene_tag(info: &str) -> Option<&str> {
    info.split(';')
        .find_map(|field| field.strip_prefix("GENE=").filter(|v| !v.is_empty()))
}

fn substring_scan(info: &str) -> Option<&'static str> {
    TRACKED_GENES.iter().copied().find(|g| info.contains(g))
}
