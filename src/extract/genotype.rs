pub const MISSING_ALLELE: &str = ".";
pub const INVALID_ALLELE: &str = "?";

/// Allele index tokens of a GT value: maximal runs of digits and `.`.
/// Any other character (`/`, `|`, ...) acts as a separator.
pub fn allele_tokens(gt: &str) -> impl Iterator<Item = &str> {
    gt.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|t| !t.is_empty())
}

pub fn resolve_genotype(gt: &str, reference: &str, alternates: &str) -> String {
    let mut alleles = Vec::with_capacity(4);
    alleles.push(reference);
    alleles.extend(alternates.split(','));

    let mapped: Vec<&str> = allele_tokens(gt)
        .map(|token| allele_for(token, &alleles))
        .collect();
    mapped.join("/")
}

fn allele_for<'a>(token: &str, alleles: &[&'a str]) -> &'a str {
    if token == MISSING_ALLELE {
        return MISSING_ALLELE;
    }
    match token.parse::<usize>() {
        Ok(idx) if idx < alleles.len() => alleles[idx],
        _ => INVALID_ALLELE,
    }
}
