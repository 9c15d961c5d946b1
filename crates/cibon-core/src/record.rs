//! Farmer record representation

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::hal::Links;

/// Attribute values sent when creating or updating a record
pub type FieldValues = Map<String, Value>;

/// One record of the collection, as returned by its own self link.
///
/// Attributes are not fixed ahead of time; whatever the server sends (other
/// than the HAL control sections) is kept in `fields`, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Canonical URL of this record, template expressions removed
    pub self_href: String,
    /// Concurrency token from the `ETag` header of the last fetch
    pub etag: Option<String>,
    pub fields: Map<String, Value>,
    pub links: Links,
}

impl Record {
    /// Build a record from a fetched HAL entity.
    ///
    /// `source_url` is only used for error context. Fails when the entity is
    /// not an object or has no `self` link.
    pub fn from_entity(source_url: &str, entity: &Value, etag: Option<String>) -> Result<Self> {
        let object = entity
            .as_object()
            .ok_or_else(|| Error::malformed(source_url, "record is not a JSON object"))?;

        let links = Links::from_entity(entity);
        let self_href = links
            .href("self")
            .ok_or_else(|| Error::missing_link("self", source_url))?;

        let fields = object
            .iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            self_href,
            etag,
            fields,
            links,
        })
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.fields.get(attribute)
    }

    /// Text shown for an attribute in tables and pre-filled forms
    pub fn display_value(&self, attribute: &str) -> String {
        self.get(attribute).map(display_json).unwrap_or_default()
    }

    pub fn first_name(&self) -> String {
        self.display_value("firstName")
    }

    pub fn last_name(&self) -> String {
        self.display_value("lastName")
    }

    pub fn description(&self) -> String {
        self.display_value("description")
    }
}

/// Render a JSON value as editable text: strings verbatim, null as empty,
/// anything else as compact JSON.
pub fn display_json(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn anna() -> Value {
        json!({
            "firstName": "Anna",
            "lastName": "Bauer",
            "description": null,
            "acres": 12,
            "_links": {
                "self": { "href": "http://h/api/farmers/1" },
                "farmer": { "href": "http://h/api/farmers/1{?projection}", "templated": true }
            }
        })
    }

    #[test]
    fn test_from_entity_strips_hal_sections() {
        let record = Record::from_entity("http://h/api/farmers/1", &anna(), Some("\"0\"".into()))
            .unwrap();

        assert_eq!(record.self_href, "http://h/api/farmers/1");
        assert_eq!(record.etag.as_deref(), Some("\"0\""));
        assert_eq!(record.fields.len(), 4);
        assert!(record.get("_links").is_none());
        assert_eq!(record.links.len(), 2);
    }

    #[test]
    fn test_fields_keep_server_order() {
        let record = Record::from_entity("u", &anna(), None).unwrap();
        let keys: Vec<&str> = record.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["firstName", "lastName", "description", "acres"]);
    }

    #[test]
    fn test_display_values() {
        let record = Record::from_entity("u", &anna(), None).unwrap();
        assert_eq!(record.first_name(), "Anna");
        assert_eq!(record.last_name(), "Bauer");
        assert_eq!(record.description(), "");
        assert_eq!(record.display_value("acres"), "12");
        assert_eq!(record.display_value("missing"), "");
    }

    #[test]
    fn test_from_entity_requires_self_link() {
        let err = Record::from_entity("http://h/x", &json!({ "firstName": "A" }), None)
            .unwrap_err();
        assert!(matches!(err, Error::MissingLink { ref rel, .. } if rel == "self"));
    }

    #[test]
    fn test_from_entity_rejects_non_object() {
        let err = Record::from_entity("http://h/x", &json!([1, 2]), None).unwrap_err();
        assert!(matches!(err, Error::MalformedResource { .. }));
    }
}
