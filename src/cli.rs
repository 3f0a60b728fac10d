use anyhow::{Result, anyhow, bail};

use crate::dataset::{CategoricalField, Dataset, NumericField};
use crate::filter::FilterCriteria;

const RANGE_FLAGS: [(&str, NumericField); 3] = [
    ("--age", NumericField::Age),
    ("--overall", NumericField::Overall),
    ("--potential", NumericField::Potential),
];

const LIST_FLAGS: [(&str, CategoricalField); 2] = [
    ("--positions", CategoricalField::ClubPosition),
    ("--leagues", CategoricalField::League),
];

/// Value of `--key=value` or `--key value`; the first non-empty one wins.
pub fn arg_value(args: &[String], key: &str) -> Option<String> {
    let prefix = format!("{key}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == key
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

pub fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|arg| arg == key)
}

/// `MIN-MAX`, both sides numeric.
pub fn parse_range(raw: &str) -> Option<(f64, f64)> {
    let (min, max) = raw.split_once('-')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

/// Comma separated items, trimmed, empty items dropped.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scout defaults for the dataset, narrowed by any range or list flags.
pub fn build_criteria(args: &[String], dataset: &Dataset) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::scout_defaults(dataset);
    for (key, field) in RANGE_FLAGS {
        if let Some(raw) = arg_value(args, key) {
            let (min, max) = parse_range(&raw)
                .ok_or_else(|| anyhow!("invalid {key} value {raw:?}, expected MIN-MAX"))?;
            criteria.set_range(field, min, max);
        }
    }
    for (key, field) in LIST_FLAGS {
        if let Some(raw) = arg_value(args, key) {
            criteria.set_values(field, parse_list(&raw));
        }
    }
    Ok(criteria)
}

/// `--seed N` asks for seeded demo data, so it cannot be paired with `--csv`.
pub fn demo_seed(args: &[String]) -> Result<Option<u64>> {
    let Some(raw) = arg_value(args, "--seed") else {
        return Ok(None);
    };
    if arg_value(args, "--csv").is_some() {
        bail!("--seed generates demo data and cannot be combined with --csv");
    }
    let seed = raw
        .parse::<u64>()
        .map_err(|_| anyhow!("invalid --seed value {raw:?}"))?;
    Ok(Some(seed))
}
