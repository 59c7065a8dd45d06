use crate::Path;

/// Aggregation computed for each group.
#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
    /// Number of rows in the group
    Count,

    /// Arithmetic mean of the numeric values at the path. Non-numeric and
    /// missing values are ignored; a group with no numeric values averages to
    /// null.
    Avg(Path),
}
