use super::Accumulator;
use crate::Path;

/// Groups rows by the value at `key`. Each output row holds the key under
/// [`GROUP_KEY`](super::GROUP_KEY) and one field per accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: Path,
    pub accumulators: Vec<(String, Accumulator)>,
}

impl Group {
    pub fn by(key: impl Into<Path>) -> Group {
        Group {
            key: key.into(),
            accumulators: vec![],
        }
    }

    pub fn count(mut self, field: impl Into<String>) -> Group {
        self.accumulators.push((field.into(), Accumulator::Count));
        self
    }

    pub fn avg(mut self, field: impl Into<String>, of: impl Into<Path>) -> Group {
        self.accumulators
            .push((field.into(), Accumulator::Avg(of.into())));
        self
    }
}
