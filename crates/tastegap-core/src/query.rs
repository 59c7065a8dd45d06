//! Aggregation pipelines sent to a [`Connection`](crate::Connection).
//!
//! A pipeline is an ordered list of [`Stage`]s. Together the stages cover the
//! primitives the analysis needs from a data store: equality and membership
//! filters, unwinding a nested list into one row per element, grouping with
//! count and average accumulators, sorting, and limiting. `distinct` and
//! `count` live directly on the connection.

mod accumulator;
pub use accumulator::Accumulator;

mod condition;
pub use condition::Condition;

mod direction;
pub use direction::Direction;

mod filter;
pub use filter::Filter;

mod group;
pub use group::Group;

mod pipeline;
pub use pipeline::Pipeline;

mod sort_key;
pub use sort_key::SortKey;

mod stage;
pub use stage::Stage;

/// Field under which grouped rows carry their group key.
pub const GROUP_KEY: &str = "_id";
