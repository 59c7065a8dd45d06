use super::Error;

/// Error when the cuisine grouping and the all-restaurants grouping disagree
/// about a partition.
#[derive(Debug)]
pub(super) struct DataAlignmentError {
    partition: &'static str,
    key: Box<str>,
    mismatch: Mismatch,
}

#[derive(Debug)]
enum Mismatch {
    /// The key has no all-restaurants count
    Missing,

    /// The key's cuisine count is larger than its all-restaurants count
    CountExceedsTotal { count: u64, total: u64 },
}

impl std::error::Error for DataAlignmentError {}

impl core::fmt::Display for DataAlignmentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "data alignment: {} `{}` ", self.partition, self.key)?;

        match self.mismatch {
            Mismatch::Missing => f.write_str("is missing from the all-restaurants grouping"),
            Mismatch::CountExceedsTotal { count, total } => write!(
                f,
                "has {count} restaurants of the cuisine but only {total} in total"
            ),
        }
    }
}

impl Error {
    /// Creates a data alignment error for a key of the given partition kind
    /// (`"borough"`, `"zipcode"`) that has no all-restaurants count.
    pub fn data_alignment(partition: &'static str, key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DataAlignment(DataAlignmentError {
            partition,
            key: key.into().into(),
            mismatch: Mismatch::Missing,
        }))
    }

    /// Creates a data alignment error for a key whose cuisine count is larger
    /// than its all-restaurants count.
    pub fn count_exceeds_total(
        partition: &'static str,
        key: impl Into<String>,
        count: u64,
        total: u64,
    ) -> Error {
        Error::from(super::ErrorKind::DataAlignment(DataAlignmentError {
            partition,
            key: key.into().into(),
            mismatch: Mismatch::CountExceedsTotal { count, total },
        }))
    }

    /// Returns `true` if this error is a data alignment error.
    pub fn is_data_alignment(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DataAlignment(_))
    }
}
