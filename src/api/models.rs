//! Wire models for the beer API.
//!
//! Field names follow the server's camelCase JSON; document ids arrive as
//! `_id` on users and authors and as `id` on beers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A numeric-ish beer attribute (ABV, IBU).
///
/// The API stores these as whatever the seeding script wrote, so both JSON
/// numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measure::Number(value) => write!(f, "{value}"),
            Measure::Text(value) => f.write_str(value),
        }
    }
}

/// Review author as returned with a beer (populated user fields).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// A beer record. Everything except the id may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Beer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub abv: Option<Measure>,
    #[serde(default)]
    pub ibu: Option<Measure>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brewery: Option<String>,
    /// Absent and `null` both mean "no reviews yet".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<Review>,
}

/// Body of `GET /beers`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeerList {
    #[serde(default)]
    pub beers: Vec<Beer>,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// User document returned by signup and login.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Author reference sent when attaching a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub author: AuthorRef,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Body of `PUT /beers/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub id: String,
    pub reviews: Vec<NewReview>,
}

impl ReviewPayload {
    pub fn new(beer_id: &str, user_id: &str, comment: &str, date: DateTime<Utc>) -> Self {
        Self {
            id: beer_id.to_string(),
            reviews: vec![NewReview {
                author: AuthorRef {
                    id: user_id.to_string(),
                },
                comment: comment.to_string(),
                date,
            }],
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Review>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let reviews: Option<Vec<Review>> = Option::deserialize(deserializer)?;
    Ok(reviews.unwrap_or_default())
}
