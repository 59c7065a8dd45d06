use super::Condition;
use crate::{Path, Value};

/// A conjunction of field conditions. The empty filter matches everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Matches every record.
    pub fn all() -> Filter {
        Filter::default()
    }

    pub fn eq(path: impl Into<Path>, value: impl Into<Value>) -> Filter {
        Filter::all().and_eq(path, value)
    }

    pub fn is_in<I, V>(path: impl Into<Path>, values: I) -> Filter
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Filter {
            conditions: vec![Condition::In(
                path.into(),
                values.into_iter().map(Into::into).collect(),
            )],
        }
    }

    pub fn and_eq(mut self, path: impl Into<Path>, value: impl Into<Value>) -> Filter {
        self.conditions
            .push(Condition::Eq(path.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
