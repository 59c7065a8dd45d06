use super::{Filter, Group, SortKey, Stage};
use crate::Path;

/// An ordered list of aggregation stages.
///
/// ```
/// use tastegap_core::query::{Filter, Group, Pipeline, SortKey};
///
/// let pipeline = Pipeline::new()
///     .filter(Filter::eq("borough", "Queens"))
///     .group(Group::by("address.zipcode").count("count"))
///     .sort([SortKey::desc("count"), SortKey::desc("_id")])
///     .limit(5);
///
/// assert_eq!(pipeline.stages().len(), 4);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Pipeline {
        Pipeline::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn filter(self, filter: Filter) -> Pipeline {
        self.push(Stage::Match(filter))
    }

    pub fn unwind(self, path: impl Into<Path>) -> Pipeline {
        self.push(Stage::Unwind(path.into()))
    }

    pub fn group(self, group: Group) -> Pipeline {
        self.push(Stage::Group(group))
    }

    pub fn sort(self, keys: impl IntoIterator<Item = SortKey>) -> Pipeline {
        self.push(Stage::Sort(keys.into_iter().collect()))
    }

    pub fn limit(self, n: usize) -> Pipeline {
        self.push(Stage::Limit(n))
    }

    fn push(mut self, stage: Stage) -> Pipeline {
        self.stages.push(stage);
        self
    }
}
