//! Stable sorting with a total cross-type order.

use std::cmp::Ordering;

use serde_json::Value;

use super::{Sort, SortOrder};
use crate::record::Record;

/// Rank of a JSON value kind in the cross-type order.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values.
///
/// Values of different kinds order by kind: Null < Bool < Number < String
/// < Array < Object. Within a kind: numbers compare numerically, strings
/// lexicographically (ISO 8601 timestamps therefore order chronologically),
/// bools false < true, arrays and objects by their compact JSON encoding.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            a.to_string().cmp(&b.to_string())
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Sort records in place by the given sort key.
///
/// The sort is stable: records with equal keys keep their relative input
/// order, in both directions. A missing field sorts as Null. An empty
/// field name is a no-op.
pub fn sort_records(records: &mut [Record], sort: &Sort) {
    if sort.field.is_empty() {
        return;
    }

    records.sort_by(|a, b| {
        let av = a.get(&sort.field).unwrap_or(&Value::Null);
        let bv = b.get(&sort.field).unwrap_or(&Value::Null);
        let ordering = compare_values(av, bv);
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
