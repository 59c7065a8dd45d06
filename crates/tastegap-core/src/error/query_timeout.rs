use std::time::Duration;

use crate::{error::ErrorKind, Error};

#[derive(Debug)]
pub(super) struct QueryTimeout {
    duration: Duration,
}

impl Error {
    /// Returned when a stage's query does not finish within the configured timeout.
    pub fn query_timeout(duration: Duration) -> Error {
        ErrorKind::QueryTimeout(QueryTimeout { duration }).into()
    }

    /// Returns `true` if this error is a query timeout.
    pub fn is_query_timeout(&self) -> bool {
        matches!(self.kind(), ErrorKind::QueryTimeout(_))
    }
}

impl std::error::Error for QueryTimeout {}

impl core::fmt::Display for QueryTimeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "query timed out after {:?}", self.duration)
    }
}
