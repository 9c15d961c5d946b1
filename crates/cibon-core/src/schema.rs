//! JSON schema of the record type
//!
//! The collection's `profile` link points at a JSON schema document
//! (fetched with `Accept: application/schema+json`). Its `properties` object
//! defines the attributes forms are generated from.

use serde_json::Value;

use crate::error::{Error, Result};

/// One attribute declared by the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub title: Option<String>,
    /// JSON schema `type` (`string`, `integer`, ...)
    pub kind: Option<String>,
    /// Server-managed attribute; left out of record forms
    pub read_only: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            kind: None,
            read_only: false,
        }
    }

    fn from_property(name: &str, property: &Value) -> Self {
        let text = |key: &str| property.get(key).and_then(Value::as_str).map(String::from);
        Self {
            name: name.to_string(),
            title: text("title"),
            kind: text("type"),
            read_only: property
                .get("readOnly")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

/// Attribute mapping of the record type, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub title: Option<String>,
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            title: None,
            attributes,
        }
    }

    /// Parse a JSON schema document.
    ///
    /// Fails when `properties` is missing or not an object.
    pub fn from_value(source_url: &str, document: &Value) -> Result<Self> {
        let properties = document
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::malformed(source_url, "schema has no 'properties' object"))?;

        let attributes = properties
            .iter()
            .map(|(name, property)| Attribute::from_property(name, property))
            .collect();

        Ok(Self {
            title: document
                .get("title")
                .and_then(Value::as_str)
                .map(String::from),
            attributes,
        })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute names, in declaration order
    pub fn names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn farmer_schema() -> Value {
        json!({
            "title": "Farmer",
            "properties": {
                "firstName": { "title": "First name", "readOnly": false, "type": "string" },
                "lastName": { "title": "Last name", "readOnly": false, "type": "string" },
                "description": { "title": "Description", "readOnly": false, "type": "string" }
            },
            "definitions": {},
            "type": "object",
            "$schema": "http://json-schema.org/draft-04/schema#"
        })
    }

    #[test]
    fn test_names_follow_property_order() {
        let schema = Schema::from_value("http://h/api/profile/farmers", &farmer_schema()).unwrap();
        assert_eq!(schema.names(), vec!["firstName", "lastName", "description"]);
        assert_eq!(schema.title.as_deref(), Some("Farmer"));
    }

    #[test]
    fn test_attribute_metadata() {
        let schema = Schema::from_value("u", &farmer_schema()).unwrap();
        let first = schema.get("firstName").unwrap();
        assert_eq!(first.title.as_deref(), Some("First name"));
        assert_eq!(first.kind.as_deref(), Some("string"));
        assert!(!first.read_only);
    }

    #[test]
    fn test_read_only_flag() {
        let document = json!({
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                "firstName": { "type": "string" }
            }
        });
        let schema = Schema::from_value("u", &document).unwrap();
        assert!(schema.get("id").unwrap().read_only);
        assert!(!schema.get("firstName").unwrap().read_only);
    }

    #[test]
    fn test_missing_properties_is_error() {
        let err = Schema::from_value("http://h/p", &json!({ "type": "object" })).unwrap_err();
        assert!(matches!(err, Error::MalformedResource { .. }));
    }

    #[test]
    fn test_empty_properties() {
        let schema = Schema::from_value("u", &json!({ "properties": {} })).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }
}
