//! The restaurant record as stored in the collection.

use crate::{Document, Value};

use serde::{Deserialize, Serialize};

/// Field paths the analysis queries on.
pub mod fields {
    pub const NAME: &str = "name";
    pub const CUISINE: &str = "cuisine";
    pub const BOROUGH: &str = "borough";
    pub const ZIPCODE: &str = "address.zipcode";
    pub const GRADES: &str = "grades";
    pub const SCORE: &str = "grades.score";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,

    pub name: String,

    pub cuisine: String,

    pub borough: String,

    pub address: Address,

    #[serde(default)]
    pub grades: Vec<Grade>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    pub zipcode: String,
}

/// A single inspection review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    /// Missing in some real records; such reviews still count towards the
    /// review total but not the average.
    pub score: Option<f64>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        borough: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Restaurant {
        Restaurant {
            name: name.into(),
            cuisine: cuisine.into(),
            borough: borough.into(),
            address: Address {
                zipcode: zipcode.into(),
                ..Address::default()
            },
            ..Restaurant::default()
        }
    }

    /// Appends reviews with the given scores.
    pub fn with_scores(mut self, scores: impl IntoIterator<Item = f64>) -> Restaurant {
        self.grades.extend(scores.into_iter().map(|score| Grade {
            grade: None,
            score: Some(score),
        }));
        self
    }
}

impl From<&Restaurant> for Document {
    fn from(restaurant: &Restaurant) -> Document {
        let grades = restaurant
            .grades
            .iter()
            .map(|grade| {
                Value::Document(
                    Document::new()
                        .with("grade", grade.grade.clone())
                        .with("score", grade.score),
                )
            })
            .collect::<Vec<_>>();

        let mut address = Document::new();
        if let Some(building) = &restaurant.address.building {
            address.insert("building", building);
        }
        if let Some(street) = &restaurant.address.street {
            address.insert("street", street);
        }
        address.insert("zipcode", &restaurant.address.zipcode);

        let mut doc = Document::new();
        if let Some(id) = &restaurant.restaurant_id {
            doc.insert("restaurant_id", id);
        }
        doc.with(fields::NAME, &restaurant.name)
            .with(fields::CUISINE, &restaurant.cuisine)
            .with(fields::BOROUGH, &restaurant.borough)
            .with("address", address)
            .with(fields::GRADES, grades)
    }
}

impl From<Restaurant> for Document {
    fn from(restaurant: Restaurant) -> Document {
        Document::from(&restaurant)
    }
}
