use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Request body to send to the GleSYS API.
#[derive(Debug, Default)]
pub(crate) struct Payload {
    payload: JsonMap<String, JsonValue>,
}

impl Payload {
    /// Creates an empty payload.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a payload from the fields of a serializable parameter struct.
    ///
    /// Anything that doesn't serialize to a JSON object yields an empty payload.
    pub(crate) fn from_params<T: Serialize>(params: &T) -> Result<Self, serde_json::Error> {
        let payload = match serde_json::to_value(params)? {
            JsonValue::Object(map) => map,
            _ => JsonMap::new(),
        };
        Ok(Self { payload })
    }

    /// Adds the given key-value pair, replacing any existing value for the key.
    pub(crate) fn add<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }
}

impl From<Payload> for JsonValue {
    fn from(value: Payload) -> Self {
        JsonValue::Object(value.payload)
    }
}
