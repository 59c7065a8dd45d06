use crate::{Path, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The field at the path equals the value
    Eq(Path, Value),

    /// The field at the path equals one of the values
    In(Path, Vec<Value>),
}

impl Condition {
    pub fn path(&self) -> &Path {
        match self {
            Condition::Eq(path, _) | Condition::In(path, _) => path,
        }
    }
}
