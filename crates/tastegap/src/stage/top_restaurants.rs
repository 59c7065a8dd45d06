use super::COUNT;
use crate::rows;

use tastegap_core::{
    query::{Filter, Group, Pipeline, SortKey, GROUP_KEY},
    record::fields,
    Connection, Result,
};

/// Restaurants need at least this many reviews to be ranked.
pub const MIN_REVIEWS: u64 = 4;

/// Number of restaurants returned.
pub const TOP_RESTAURANTS: usize = 3;

const AVERAGE: &str = "average";

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantScore {
    pub name: String,
    pub average_score: f64,
    pub review_count: u64,
}

/// Best-rated restaurants, highest average first. Holds fewer than
/// [`TOP_RESTAURANTS`] entries (possibly none) when not enough restaurants
/// have [`MIN_REVIEWS`] reviews.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopRestaurants {
    pub restaurants: Vec<RestaurantScore>,
}

impl TopRestaurants {
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.restaurants.iter().map(|r| r.average_score).collect()
    }
}

/// Ranks the cuisine's restaurants in the zip code by average review score.
///
/// Qualification counts reviews of the restaurants matching all three keys.
/// Averages are then computed over every record sharing a qualifying name,
/// so branches of the same name elsewhere contribute their reviews too.
/// Equal averages rank by ascending name.
pub async fn top_restaurants(
    conn: &dyn Connection,
    cuisine: &str,
    borough: &str,
    zipcode: &str,
) -> Result<TopRestaurants> {
    let review_counts = rows::key_counts(
        &conn
            .aggregate(
                &Pipeline::new()
                    .filter(
                        Filter::eq(fields::ZIPCODE, zipcode)
                            .and_eq(fields::BOROUGH, borough)
                            .and_eq(fields::CUISINE, cuisine),
                    )
                    .unwind(fields::GRADES)
                    .group(Group::by(fields::NAME).count(COUNT)),
            )
            .await?,
        COUNT,
    )?;

    let mut qualifying = review_counts
        .into_iter()
        .filter(|(_, reviews)| *reviews >= MIN_REVIEWS)
        .map(|(name, _)| name)
        .collect::<Vec<_>>();
    qualifying.sort();

    tracing::debug!(qualifying = qualifying.len(), "restaurants with enough reviews");

    if qualifying.is_empty() {
        return Ok(TopRestaurants::default());
    }

    let rows = conn
        .aggregate(
            &Pipeline::new()
                .filter(Filter::is_in(fields::NAME, qualifying))
                .unwind(fields::GRADES)
                .group(
                    Group::by(fields::NAME)
                        .count(COUNT)
                        .avg(AVERAGE, fields::SCORE),
                )
                .sort([SortKey::desc(AVERAGE), SortKey::asc(GROUP_KEY)])
                .limit(TOP_RESTAURANTS),
        )
        .await?;

    let mut restaurants = Vec::with_capacity(rows.len());
    for row in &rows {
        let Some(name) = rows::group_key(row)? else {
            continue;
        };

        // Every review lacked a numeric score
        let Some(average_score) = rows::number(row, AVERAGE)? else {
            tracing::warn!(%name, "skipping restaurant without numeric scores");
            continue;
        };

        restaurants.push(RestaurantScore {
            name,
            average_score,
            review_count: rows::count(row, COUNT)?,
        });
    }

    Ok(TopRestaurants { restaurants })
}
