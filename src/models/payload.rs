// src/models/payload.rs

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

// Lo que devuelven los endpoints de listado: una secuencia de registros o,
// si algo salió mal del lado del backend, un objeto tipo {"error": "..."}.
// Cualquier otra forma también cae en `Other`.
#[derive(Debug, Clone)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Other(Value),
}

impl<T> ListPayload<T> {
    pub fn items(&self) -> Option<&[T]> {
        match self {
            ListPayload::Items(items) => Some(items),
            ListPayload::Other(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ListPayload::Items(_) => None,
            ListPayload::Other(value) => value.get("error").and_then(Value::as_str),
        }
    }
}

impl<T: DeserializeOwned> ListPayload<T> {
    /// Una secuencia siempre es `Items`, aunque algún registro venga roto:
    /// ese registro se descarta con un warn y el resto se pinta igual.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(records) => {
                let items = records
                    .into_iter()
                    .enumerate()
                    .filter_map(|(posicion, record)| match serde_json::from_value(record) {
                        Ok(item) => Some(item),
                        Err(e) => {
                            tracing::warn!("⚠️ Registro {} descartado del listado: {}", posicion, e);
                            None
                        }
                    })
                    .collect();
                ListPayload::Items(items)
            }
            other => ListPayload::Other(other),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListPayload<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
