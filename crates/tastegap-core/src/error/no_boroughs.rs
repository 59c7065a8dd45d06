use super::Error;

#[derive(Debug)]
pub(super) struct NoBoroughsError;

impl std::error::Error for NoBoroughsError {}

impl core::fmt::Display for NoBoroughsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no boroughs found in collection")
    }
}

impl Error {
    pub fn no_boroughs() -> Error {
        Error::from(super::ErrorKind::NoBoroughs(NoBoroughsError))
    }

    pub fn is_no_boroughs(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoBoroughs(_))
    }
}
