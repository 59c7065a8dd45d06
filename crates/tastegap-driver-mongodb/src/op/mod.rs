pub(crate) mod aggregate;
pub(crate) mod count;
pub(crate) mod distinct;

use crate::value;
use bson::{doc, Bson};
use tastegap_core::{
    query::{Accumulator, Condition, Direction, Filter, Group, Pipeline, Stage, GROUP_KEY},
    Path,
};

/// Translates a filter into a `$match`/`find` document.
///
/// Conditions on distinct fields merge into one document; repeated fields
/// fall back to an explicit `$and`.
pub fn filter_document(filter: &Filter) -> bson::Document {
    let clauses = filter
        .conditions()
        .iter()
        .map(|condition| {
            let field = condition.path().to_string();
            let value = match condition {
                Condition::Eq(_, value) => value::to_bson(value),
                Condition::In(_, values) => {
                    let values = values.iter().map(value::to_bson).collect::<Vec<_>>();
                    Bson::Document(doc! { "$in": values })
                }
            };
            (field, value)
        })
        .collect::<Vec<_>>();

    let repeated = clauses
        .iter()
        .enumerate()
        .any(|(i, (field, _))| clauses[..i].iter().any(|(seen, _)| seen == field));

    if repeated {
        let and = clauses
            .into_iter()
            .map(|(field, value)| {
                let mut clause = bson::Document::new();
                clause.insert(field, value);
                Bson::Document(clause)
            })
            .collect::<Vec<_>>();
        return doc! { "$and": and };
    }

    clauses.into_iter().collect()
}

/// Translates a pipeline into aggregation stage documents.
pub fn pipeline_documents(pipeline: &Pipeline) -> Vec<bson::Document> {
    pipeline
        .stages()
        .iter()
        .map(|stage| match stage {
            Stage::Match(filter) => doc! { "$match": filter_document(filter) },
            Stage::Unwind(path) => doc! { "$unwind": field_ref(path) },
            Stage::Group(group) => doc! { "$group": group_document(group) },
            Stage::Sort(keys) => {
                let keys = keys
                    .iter()
                    .map(|key| {
                        let order = match key.direction {
                            Direction::Asc => 1,
                            Direction::Desc => -1,
                        };
                        (key.path.to_string(), Bson::Int32(order))
                    })
                    .collect::<bson::Document>();
                doc! { "$sort": keys }
            }
            Stage::Limit(n) => doc! { "$limit": i64::try_from(*n).unwrap_or(i64::MAX) },
        })
        .collect()
}

fn group_document(group: &Group) -> bson::Document {
    let mut ret = bson::Document::new();
    ret.insert(GROUP_KEY, field_ref(&group.key));

    for (field, accumulator) in &group.accumulators {
        let expr = match accumulator {
            Accumulator::Count => doc! { "$sum": 1 },
            Accumulator::Avg(path) => doc! { "$avg": field_ref(path) },
        };
        ret.insert(field.clone(), expr);
    }

    ret
}

fn field_ref(path: &Path) -> String {
    format!("${path}")
}
