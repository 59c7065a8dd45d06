use crate::{
    retry::with_retry,
    stage::{self, BoroughDeficit, CuisinePopularity, TopRestaurants, ZipcodeDeficit},
    Config, Result,
};

use std::fmt;
use tastegap_core::Connection;

/// The answers to the four questions, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub cuisine: CuisinePopularity,
    pub borough: BoroughDeficit,
    pub zipcode: ZipcodeDeficit,
    pub restaurants: TopRestaurants,
}

/// Connects with `config`, runs the analysis, and closes the connection.
pub async fn analyze(config: &Config) -> Result<Report> {
    let conn = crate::connect(config).await?;
    run_and_close(conn, config).await
}

/// Runs the analysis over `conn`, then closes it whether or not the run
/// succeeded.
pub async fn run_and_close(conn: Box<dyn Connection>, config: &Config) -> Result<Report> {
    let res = run(conn.as_ref(), config).await;
    conn.close().await;
    res
}

/// Runs the four stages in order, each under the configured timeout and
/// retry policy. The first failing stage ends the run.
pub async fn run(conn: &dyn Connection, config: &Config) -> Result<Report> {
    let timeout = config.query_timeout;
    let retry = &config.retry;

    let cuisine = with_retry("cuisine popularity", timeout, retry, || {
        stage::cuisine_popularity(conn)
    })
    .await?;
    tracing::info!(
        cuisine = cuisine.cuisine(),
        percentage = cuisine.percentage(),
        "stage 1 complete"
    );

    let target = cuisine.cuisine();
    let borough = with_retry("borough deficit", timeout, retry, || {
        stage::borough_deficit(conn, target)
    })
    .await?;
    tracing::info!(
        borough = borough.borough(),
        percentage = borough.percentage(),
        "stage 2 complete"
    );

    let area = borough.borough();
    let zipcode = with_retry("zipcode deficit", timeout, retry, || {
        stage::zipcode_deficit(conn, target, area)
    })
    .await?;
    tracing::info!(
        zipcode = zipcode.zipcode(),
        percentage = zipcode.percentage(),
        "stage 3 complete"
    );

    let zip = zipcode.zipcode();
    let restaurants = with_retry("top restaurants", timeout, retry, || {
        stage::top_restaurants(conn, target, area, zip)
    })
    .await?;
    tracing::info!(found = restaurants.len(), "stage 4 complete");

    Ok(Report {
        cuisine,
        borough,
        zipcode,
        restaurants,
    })
}

impl Report {
    /// One human-readable line per stage.
    pub fn lines(&self) -> [String; 4] {
        [
            format!(
                "1. The kind of cuisine with more restaurants in the city is {} (with a {:.2} percentage of restaurants of the city)",
                self.cuisine.cuisine(),
                self.cuisine.percentage()
            ),
            format!(
                "2. The borough with smaller ratio of restaurants of this kind of cuisine is {} (with a {:.2} percentage of restaurants of this kind)",
                self.borough.borough(),
                self.borough.percentage()
            ),
            format!(
                "3. The zipcode of the borough with smaller ratio of restaurants of this kind of cuisine is zipcode = {} (with a {:.2} percentage of restaurants of this kind)",
                self.zipcode.zipcode(),
                self.zipcode.percentage()
            ),
            format!(
                "4. The best three restaurants (of this kind of cuisine) at these zipcode are: {}",
                self.restaurants
            ),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TopRestaurants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        for (i, restaurant) in self.restaurants.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{} (with average reviews score of {:.2})",
                restaurant.name, restaurant.average_score
            )?;
        }
        Ok(())
    }
}
