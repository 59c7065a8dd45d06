mod analysis;
pub use analysis::{analyze, run, run_and_close, Report};

mod config;
pub use config::{Config, RetryConfig};

mod connect;
pub use connect::connect;

mod ratio;
pub use ratio::{PartitionRatio, Ratio};

mod retry;

mod rows;

pub mod stage;

pub use tastegap_core::{err, query, record, Connection, Error, Restaurant, Result};

pub mod driver {
    pub use tastegap_driver_memory::Memory;

    #[cfg(feature = "mongodb")]
    pub use tastegap_driver_mongodb::MongoDb;
}
