//! Payload shapes of the randomized-user API.
//!
//! These mirror the upstream JSON nesting. Mapping into the flat
//! [`UserRecord`] happens field by field in the `From` impl below.

use serde::{de, Deserialize, Deserializer};

use crate::models::domain::UserRecord;

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserPayload {
    pub results: Vec<RandomUserResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserResult {
    pub gender: String,
    pub name: RandomUserName,
    pub location: RandomUserLocation,
    pub registered: RandomUserRegistered,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserLocation {
    #[serde(deserialize_with = "deserialize_postcode")]
    pub postcode: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserRegistered {
    pub date: String,
}

impl From<RandomUserResult> for UserRecord {
    fn from(result: RandomUserResult) -> Self {
        Self {
            gender: result.gender,
            first_name: result.name.first,
            last_name: result.name.last,
            postcode: result.location.postcode,
            created_at: result.registered.date,
        }
    }
}

impl From<RandomUserPayload> for Vec<UserRecord> {
    fn from(payload: RandomUserPayload) -> Self {
        payload.results.into_iter().map(UserRecord::from).collect()
    }
}

/// Upstream postcodes arrive as numbers for most nationalities and as
/// strings for some; numeric strings are accepted, anything else is rejected.
fn deserialize_postcode<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Postcode {
        Number(i64),
        Text(String),
    }

    match Postcode::deserialize(deserializer)? {
        Postcode::Number(n) => Ok(n),
        Postcode::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("postcode is not numeric: {:?}", s))),
    }
}
