use super::Error;

/// Error when the selected borough has no zip codes to rank.
#[derive(Debug)]
pub(super) struct InsufficientZipcodesError {
    borough: Box<str>,
}

impl std::error::Error for InsufficientZipcodesError {}

impl core::fmt::Display for InsufficientZipcodesError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no zip codes found in borough `{}`", self.borough)
    }
}

impl Error {
    pub fn insufficient_zipcodes(borough: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InsufficientZipcodes(
            InsufficientZipcodesError {
                borough: borough.into().into(),
            },
        ))
    }

    pub fn is_insufficient_zipcodes(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InsufficientZipcodes(_))
    }
}
