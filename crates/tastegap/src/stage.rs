//! The four analysis stages.
//!
//! Each stage is a function of the connection and the previous stages'
//! selections. Stages share no state; [`run`](crate::run) chains them.

mod borough_deficit;
pub use borough_deficit::{borough_deficit, BoroughDeficit};

mod cuisine_popularity;
pub use cuisine_popularity::{cuisine_popularity, CuisineCount, CuisinePopularity};

mod top_restaurants;
pub use top_restaurants::{
    top_restaurants, RestaurantScore, TopRestaurants, MIN_REVIEWS, TOP_RESTAURANTS,
};

mod zipcode_deficit;
pub use zipcode_deficit::{zipcode_deficit, ZipcodeDeficit, TOP_ZIPCODES};

/// Field grouped rows carry their count under.
const COUNT: &str = "count";
