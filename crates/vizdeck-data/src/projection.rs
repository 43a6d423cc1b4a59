//! Derived views over tables: rankings and positional ratios.

use std::cmp::Ordering;

use serde_json::Value;

use crate::value::Datum;

/// One row of a descending ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub key: Datum,
    pub total: f64,
}

/// Sort groups by total, descending, keeping input order for ties, and keep
/// at most `limit` of them.
pub fn rank_desc(groups: Vec<(Datum, f64)>, limit: usize) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = groups
        .into_iter()
        .map(|(key, total)| Ranked { key, total })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

/// Element-wise `numerator / denominator`, aligned by position. Positions
/// missing on either side, non-numeric values and zero denominators yield
/// `null`.
pub fn positional_ratio(numerator: &[Value], denominator: &[Value]) -> Vec<Value> {
    let len = numerator.len().max(denominator.len());
    (0..len)
        .map(|i| {
            let n = numerator.get(i).and_then(Value::as_f64);
            let d = denominator.get(i).and_then(Value::as_f64);
            match (n, d) {
                (Some(n), Some(d)) if d != 0.0 => {
                    serde_json::Number::from_f64(n / d).map_or(Value::Null, Value::Number)
                }
                _ => Value::Null,
            }
        })
        .collect()
}
