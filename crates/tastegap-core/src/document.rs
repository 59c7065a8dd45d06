use crate::{Path, Value};

use indexmap::IndexMap;

/// An ordered set of named fields, as stored in the collection or returned by
/// an aggregation.
///
/// Field order is preserved; equality ignores it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    fields: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Builder-style [`Document::insert`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Resolves a dotted path through nested documents.
    ///
    /// Returns `None` when any segment is missing or traverses a non-document.
    pub fn get_path(&self, path: &Path) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut value = self.fields.get(first)?;

        for segment in rest {
            value = value.as_document()?.fields.get(segment)?;
        }

        Some(value)
    }

    /// Sets the value at a dotted path, creating intermediate documents as
    /// needed and replacing non-document intermediates.
    pub fn set_path(&mut self, path: &Path, value: Value) {
        let Some((last, parents)) = path.segments().split_last() else {
            return;
        };

        let mut doc = self;
        for segment in parents {
            let entry = doc
                .fields
                .entry(segment.clone())
                .or_insert_with(|| Value::Document(Document::new()));

            if !matches!(entry, Value::Document(_)) {
                *entry = Value::Document(Document::new());
            }

            let Value::Document(inner) = entry else {
                unreachable!()
            };
            doc = inner;
        }

        doc.fields.insert(last.clone(), value);
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Document {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
