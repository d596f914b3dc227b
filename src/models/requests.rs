use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /data`; contents are echoed back, never validated
///
/// The body must be a JSON object. Missing or `null` fields are taken
/// as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct RelayRequest {
    pub from: String,
    pub to: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RelayFields {
    #[serde(deserialize_with = "null_as_empty")]
    from: String,
    #[serde(deserialize_with = "null_as_empty")]
    to: String,
}

impl TryFrom<Map<String, Value>> for RelayRequest {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let RelayFields { from, to } = serde_json::from_value(Value::Object(object))?;
        Ok(Self { from, to })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
