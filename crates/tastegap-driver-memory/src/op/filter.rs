use tastegap_core::{
    query::{Condition, Filter},
    Document, Path, Value,
};

pub(crate) fn matches(doc: &Document, filter: &Filter) -> bool {
    filter
        .conditions()
        .iter()
        .all(|condition| match condition {
            Condition::Eq(path, expected) => field_eq(doc, path, expected),
            Condition::In(path, candidates) => candidates
                .iter()
                .any(|expected| field_eq(doc, path, expected)),
        })
}

/// A missing field equals null; a list field equals any of its elements.
fn field_eq(doc: &Document, path: &Path, expected: &Value) -> bool {
    match doc.get_path(path) {
        None => expected.is_null(),
        Some(Value::List(items)) if !matches!(expected, Value::List(_)) => {
            items.iter().any(|item| item.eq_stored(expected))
        }
        Some(actual) => actual.eq_stored(expected),
    }
}
