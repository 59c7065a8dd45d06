mod connection;
pub use connection::Connection;

mod document;
pub use document::Document;

mod error;
pub use error::{Error, IntoError};

mod path;
pub use path::Path;

pub mod query;

pub mod record;
pub use record::Restaurant;

mod value;
pub use value::Value;

/// A Result type alias that uses tastegap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
