use mongodb::error::ErrorKind;
use tastegap_core::Error;

/// Converts a client error, keeping only transport failures retryable.
pub(crate) fn from_mongodb(err: mongodb::error::Error) -> Error {
    if is_transport(&err.kind) {
        Error::connection(err)
    } else {
        Error::driver_operation_failed(err)
    }
}

fn is_transport(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } | ErrorKind::ConnectionPoolCleared { .. }
    )
}
