use super::COUNT;
use crate::{rows, PartitionRatio};

use tastegap_core::{
    query::{Filter, Group, Pipeline, SortKey, GROUP_KEY},
    record::fields,
    Connection, Error, Result,
};

/// Number of busiest zip codes considered within the borough.
pub const TOP_ZIPCODES: usize = 5;

/// The zip code, among the borough's busiest, where the target cuisine is
/// least represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipcodeDeficit {
    pub selected: PartitionRatio,

    /// Ratios for the busiest zip codes, by descending restaurant count
    pub candidates: Vec<PartitionRatio>,
}

impl ZipcodeDeficit {
    pub fn zipcode(&self) -> &str {
        &self.selected.key
    }

    pub fn percentage(&self) -> f64 {
        self.selected.percentage()
    }
}

pub async fn zipcode_deficit(
    conn: &dyn Connection,
    cuisine: &str,
    borough: &str,
) -> Result<ZipcodeDeficit> {
    // Busiest zip codes first; equal counts keep the larger zip code.
    let busiest = rows::key_counts(
        &conn
            .aggregate(
                &Pipeline::new()
                    .filter(Filter::eq(fields::BOROUGH, borough))
                    .group(Group::by(fields::ZIPCODE).count(COUNT))
                    .sort([SortKey::desc(COUNT), SortKey::desc(GROUP_KEY)]),
            )
            .await?,
        COUNT,
    )?
    .into_iter()
    .take(TOP_ZIPCODES)
    .collect::<Vec<_>>();

    if busiest.is_empty() {
        return Err(Error::insufficient_zipcodes(borough));
    }

    let cuisine_counts = rows::count_by_key(
        &conn
            .aggregate(
                &Pipeline::new()
                    .filter(Filter::eq(fields::CUISINE, cuisine).and_eq(fields::BOROUGH, borough))
                    .group(Group::by(fields::ZIPCODE).count(COUNT)),
            )
            .await?,
        COUNT,
    )?;

    let candidates = busiest
        .into_iter()
        .map(|(zipcode, total)| {
            let count = cuisine_counts.get(&zipcode).copied().unwrap_or(0);

            if count > total {
                return Err(Error::count_exceeds_total("zipcode", zipcode, count, total));
            }

            Ok(PartitionRatio::new(zipcode, count, total))
        })
        .collect::<Result<Vec<_>>>()?;

    let selected = PartitionRatio::select_min(&candidates)
        .cloned()
        .ok_or_else(|| Error::insufficient_zipcodes(borough))?;

    tracing::debug!(
        zipcode = %selected.key,
        ratio = %selected.ratio,
        candidates = candidates.len(),
        "zip code with lowest cuisine ratio"
    );

    Ok(ZipcodeDeficit {
        selected,
        candidates,
    })
}
