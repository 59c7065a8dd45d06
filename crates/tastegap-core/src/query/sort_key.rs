use super::Direction;
use crate::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub path: Path,
    pub direction: Direction,
}

impl SortKey {
    pub fn asc(path: impl Into<Path>) -> SortKey {
        SortKey {
            path: path.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(path: impl Into<Path>) -> SortKey {
        SortKey {
            path: path.into(),
            direction: Direction::Desc,
        }
    }
}
