use super::Error;

#[derive(Debug)]
pub(super) struct EmptyDatasetError;

impl std::error::Error for EmptyDatasetError {}

impl core::fmt::Display for EmptyDatasetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("dataset is empty")
    }
}

impl Error {
    /// Returned when the collection holds no restaurants, so no share can be computed.
    pub fn empty_dataset() -> Error {
        Error::from(super::ErrorKind::EmptyDataset(EmptyDatasetError))
    }

    pub fn is_empty_dataset(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyDataset(_))
    }
}
