use serde::{Deserialize, Serialize};

use super::StorageError;

pub trait Serializer<T> {
    fn serialize(&self, value: &T) -> Result<String, StorageError>;
    fn deserialize(&self, content: &str) -> Result<T, StorageError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSerializer;

impl YamlSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<T> Serializer<T> for YamlSerializer
where
    T: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, value: &T) -> Result<String, StorageError> {
        serde_yaml_ng::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<T, StorageError> {
        serde_yaml_ng::from_str(content).map_err(|e| StorageError::Parse(e.to_string()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<T> Serializer<T> for JsonSerializer
where
    T: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, value: &T) -> Result<String, StorageError> {
        serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<T, StorageError> {
        serde_json::from_str(content).map_err(|e| StorageError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_rejects_malformed_content() {
        let serializer = JsonSerializer::new();
        let result: Result<BTreeMap<String, i64>, _> = serializer.deserialize("{\"alice\": ");
        assert!(matches!(result, Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_yaml_and_json_read_the_same_mapping() {
        let from_json: BTreeMap<String, i64> =
            JsonSerializer::new().deserialize(r#"{"alice": 3, "bob": -1}"#).unwrap();
        let from_yaml: BTreeMap<String, i64> =
            YamlSerializer::new().deserialize("alice: 3\nbob: -1\n").unwrap();
        assert_eq!(from_json, from_yaml);
    }
}
