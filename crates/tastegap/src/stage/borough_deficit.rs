use super::COUNT;
use crate::{rows, PartitionRatio};

use tastegap_core::{
    query::{Filter, Group, Pipeline},
    record::fields,
    Connection, Error, Path, Result, Value,
};

/// The borough where the target cuisine is least represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoroughDeficit {
    pub selected: PartitionRatio,

    /// Every borough's ratio, in ascending borough order
    pub candidates: Vec<PartitionRatio>,
}

impl BoroughDeficit {
    pub fn borough(&self) -> &str {
        &self.selected.key
    }

    pub fn percentage(&self) -> f64 {
        self.selected.percentage()
    }
}

/// Computes `cuisine / all restaurants` for every borough and selects the
/// smallest, breaking ties by ascending borough name.
///
/// A borough without any restaurant of the cuisine contributes a zero
/// ratio. Cuisine counts are looked up by borough name, never paired by
/// position with the totals.
pub async fn borough_deficit(conn: &dyn Connection, cuisine: &str) -> Result<BoroughDeficit> {
    let mut boroughs = conn
        .distinct(&Path::new(fields::BOROUGH), &Filter::all())
        .await?
        .into_iter()
        .filter(|value| !value.is_null())
        .map(Value::to_string_value)
        .collect::<Result<Vec<_>>>()?;

    boroughs.sort();
    boroughs.dedup();

    if boroughs.is_empty() {
        return Err(Error::no_boroughs());
    }

    let totals = rows::count_by_key(
        &conn
            .aggregate(&Pipeline::new().group(Group::by(fields::BOROUGH).count(COUNT)))
            .await?,
        COUNT,
    )?;

    let cuisine_counts = rows::count_by_key(
        &conn
            .aggregate(
                &Pipeline::new()
                    .filter(Filter::eq(fields::CUISINE, cuisine))
                    .group(Group::by(fields::BOROUGH).count(COUNT)),
            )
            .await?,
        COUNT,
    )?;

    if let Some(stray) = cuisine_counts.keys().find(|b| !totals.contains_key(*b)) {
        return Err(Error::data_alignment("borough", stray.as_str()));
    }

    let candidates = boroughs
        .into_iter()
        .map(|borough| {
            let total = *totals
                .get(&borough)
                .ok_or_else(|| Error::data_alignment("borough", borough.as_str()))?;
            let count = cuisine_counts.get(&borough).copied().unwrap_or(0);

            if count > total {
                return Err(Error::count_exceeds_total("borough", borough, count, total));
            }

            Ok(PartitionRatio::new(borough, count, total))
        })
        .collect::<Result<Vec<_>>>()?;

    let selected = PartitionRatio::select_min(&candidates)
        .cloned()
        .ok_or_else(Error::no_boroughs)?;

    tracing::debug!(
        borough = %selected.key,
        ratio = %selected.ratio,
        candidates = candidates.len(),
        "borough with lowest cuisine ratio"
    );

    Ok(BoroughDeficit {
        selected,
        candidates,
    })
}
