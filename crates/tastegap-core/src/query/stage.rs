use super::{Filter, Group, SortKey};
use crate::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Keep rows matching the filter
    Match(Filter),

    /// Emit one row per element of the list at the path, with the path
    /// replaced by that element. Rows where the path is missing, null, or an
    /// empty list are dropped.
    Unwind(Path),

    Group(Group),

    /// Stable sort by the keys, most significant first
    Sort(Vec<SortKey>),

    Limit(usize),
}
