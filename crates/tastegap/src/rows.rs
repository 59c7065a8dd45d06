//! Reading the grouped rows stages get back from a connection.

use std::collections::HashMap;
use tastegap_core::{query::GROUP_KEY, Document, Error, Result, Value};

/// The string group key of a row, or `None` for the null group (records
/// missing the grouped field).
pub(crate) fn group_key(row: &Document) -> Result<Option<String>> {
    match row.get(GROUP_KEY) {
        None => Err(Error::invalid_result(format!("row has no `{GROUP_KEY}`"))),
        Some(Value::Null) => Ok(None),
        Some(value) => value.clone().to_string_value().map(Some),
    }
}

pub(crate) fn count(row: &Document, field: &str) -> Result<u64> {
    row.get(field)
        .ok_or_else(|| Error::invalid_result(format!("row has no `{field}`")))?
        .to_u64()
}

/// The numeric value of `field`, or `None` when it is null.
pub(crate) fn number(row: &Document, field: &str) -> Result<Option<f64>> {
    match row.get(field) {
        None => Err(Error::invalid_result(format!("row has no `{field}`"))),
        Some(Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            Error::invalid_result(format!(
                "expected `{field}` to be numeric, got {}",
                value.type_name()
            ))
        }),
    }
}

/// `(key, count)` pairs in row order, skipping the null group.
pub(crate) fn key_counts(rows: &[Document], field: &str) -> Result<Vec<(String, u64)>> {
    let mut ret = Vec::with_capacity(rows.len());

    for row in rows {
        if let Some(key) = group_key(row)? {
            ret.push((key, count(row, field)?));
        }
    }

    Ok(ret)
}

/// Same as [`key_counts`], indexed by key.
pub(crate) fn count_by_key(rows: &[Document], field: &str) -> Result<HashMap<String, u64>> {
    Ok(key_counts(rows, field)?.into_iter().collect())
}
