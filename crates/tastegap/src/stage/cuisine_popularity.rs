use super::COUNT;
use crate::rows;

use tastegap_core::{
    query::{Filter, Group, Pipeline, SortKey, GROUP_KEY},
    record::fields,
    Connection, Error, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: u64,
}

/// The most common cuisine and the number of restaurants it was counted
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisinePopularity {
    pub top: CuisineCount,
    pub total: u64,
}

impl CuisinePopularity {
    pub fn cuisine(&self) -> &str {
        &self.top.cuisine
    }

    /// `100 * count / total`, in `(0, 100]`.
    pub fn percentage(&self) -> f64 {
        100.0 * self.top.count as f64 / self.total as f64
    }
}

/// Finds the cuisine with the most restaurants.
///
/// Cuisines tied on count resolve to the lexicographically smallest name.
pub async fn cuisine_popularity(conn: &dyn Connection) -> Result<CuisinePopularity> {
    let total = conn.count(&Filter::all()).await?;
    if total == 0 {
        return Err(Error::empty_dataset());
    }

    let rows = conn
        .aggregate(
            &Pipeline::new()
                .group(Group::by(fields::CUISINE).count(COUNT))
                .sort([SortKey::desc(COUNT), SortKey::asc(GROUP_KEY)]),
        )
        .await?;

    // The null group sorts like any other, so skip it here rather than
    // limiting the query to one row.
    let (cuisine, count) = rows::key_counts(&rows, COUNT)?
        .into_iter()
        .next()
        .ok_or_else(Error::empty_dataset)?;

    tracing::debug!(%cuisine, count, total, "most popular cuisine");

    Ok(CuisinePopularity {
        top: CuisineCount { cuisine, count },
        total,
    })
}
