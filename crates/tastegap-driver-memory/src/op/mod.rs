mod filter;
mod group;
mod sort;
mod unwind;

pub(crate) use filter::matches;

use tastegap_core::{
    query::{Pipeline, Stage},
    Document,
};

pub(crate) fn execute_pipeline(mut rows: Vec<Document>, pipeline: &Pipeline) -> Vec<Document> {
    for stage in pipeline.stages() {
        rows = match stage {
            Stage::Match(filter) => rows.into_iter().filter(|doc| matches(doc, filter)).collect(),
            Stage::Unwind(path) => unwind::execute(rows, path),
            Stage::Group(group) => group::execute(rows, group),
            Stage::Sort(keys) => sort::execute(rows, keys),
            Stage::Limit(n) => {
                rows.truncate(*n);
                rows
            }
        };
    }

    rows
}
