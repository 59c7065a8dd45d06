use std::cmp::Ordering;
use tastegap_core::{query::SortKey, Document, Value};

pub(super) fn execute(mut rows: Vec<Document>, keys: &[SortKey]) -> Vec<Document> {
    rows.sort_by(|a, b| {
        keys.iter()
            .map(|key| {
                let a = a.get_path(&key.path).unwrap_or(&Value::Null);
                let b = b.get_path(&key.path).unwrap_or(&Value::Null);
                key.direction.apply(a.cmp_stored(b))
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    rows
}
