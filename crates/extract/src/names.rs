use std::collections::{HashMap, HashSet};

/// Normalize one header token into column-name form.
///
/// Trims and lowercases, turns percent signs and slashes into the words
/// `pct` and `per`, strips all other punctuation, and collapses whitespace
/// runs into a single `_` separator. The result contains only lowercase
/// alphanumeric tokens joined by `_`, or is empty if nothing usable remains.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut expanded = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match ch {
            '%' => expanded.push_str(" pct "),
            '/' => expanded.push_str(" per "),
            c if c.is_alphanumeric() => expanded.push(c),
            c if c.is_whitespace() => expanded.push(' '),
            _ => {}
        }
    }
    expanded.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Make raw column names globally unique while preserving order.
///
/// The first occurrence of a name is kept as-is; the k-th repeat is suffixed
/// with `_<k-1>`. If a suffixed candidate happens to collide with a name
/// already emitted, the counter keeps advancing until a free name is found,
/// so the output is always unique.
#[must_use]
pub fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut k = counts.get(&name).copied().unwrap_or(0);
        let mut candidate = if k == 0 {
            name.clone()
        } else {
            format!("{name}_{k}")
        };
        while used.contains(&candidate) {
            k += 1;
            candidate = format!("{name}_{k}");
        }
        counts.insert(name, k + 1);
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
