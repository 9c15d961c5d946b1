//! Collection pages

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hal::{Links, NavRel};
use crate::record::Record;

/// Spring Data REST `page` block: position of this page in the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page index
    pub number: u64,
}

impl PageMetadata {
    /// Read the optional `page` block of a collection entity
    pub fn from_entity(entity: &Value) -> Option<Self> {
        entity
            .get("page")
            .and_then(|page| serde_json::from_value(page.clone()).ok())
    }
}

/// An ordered page of records plus its navigation links
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    pub links: Links,
    pub metadata: Option<PageMetadata>,
}

impl Page {
    pub fn new(records: Vec<Record>, links: Links) -> Self {
        Self {
            records,
            links,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Option<PageMetadata>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn nav_rels(&self) -> Vec<NavRel> {
        self.links.nav_rels()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
