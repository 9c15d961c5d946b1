//! Mock HAL server for tests
//!
//! [`MockHal`] serves a Spring-style farmer API from an in-memory list:
//! an API root, a JSON schema profile, one resource per record (with an
//! `ETag` derived from its version) and paged collection views with
//! `first`/`prev`/`next`/`last` links.
//!
//! The mocks are static. After changing the stored records call
//! [`MockHal::mount`] again to replace them.

use std::time::Duration;

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Map, Value};

use crate::api::CollectionApi;
use crate::http::SCHEMA_JSON;

/// Attributes declared by the mock schema, in order
pub const FARMER_ATTRIBUTES: [&str; 3] = ["firstName", "lastName", "description"];

/// Build farmer field values
pub fn farmer(first_name: &str, last_name: &str, description: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "description": description,
    })
}

#[derive(Debug, Clone)]
struct StoredFarmer {
    id: u32,
    fields: Value,
    version: u32,
}

/// A mockito server speaking HAL for one collection relation
pub struct MockHal {
    server: ServerGuard,
    rel: String,
    farmers: Vec<StoredFarmer>,
    next_id: u32,
    mocks: Vec<Mock>,
}

impl MockHal {
    pub async fn start(rel: &str) -> Self {
        Self {
            server: mockito::Server::new_async().await,
            rel: rel.to_string(),
            farmers: Vec::new(),
            next_id: 1,
            mocks: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    pub fn api_root(&self) -> String {
        format!("{}/api", self.url())
    }

    /// Absolute URL for a server path
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.url(), path)
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.rel)
    }

    pub fn farmer_href(&self, id: u32) -> String {
        self.href(&format!("{}/{}", self.collection_path(), id))
    }

    pub fn api(&self) -> CollectionApi {
        CollectionApi::new(&self.api_root(), &self.rel, Duration::from_secs(5))
            .expect("mock root is a valid URL")
    }

    /// Replace the stored records; ids restart at 1 and versions at 0
    pub fn set_farmers(&mut self, farmers: Vec<Value>) {
        self.farmers.clear();
        self.next_id = 1;
        for fields in farmers {
            self.push_farmer(fields);
        }
    }

    pub fn push_farmer(&mut self, fields: Value) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.farmers.push(StoredFarmer {
            id,
            fields,
            version: 0,
        });
        id
    }

    pub fn remove_farmer(&mut self, id: u32) {
        self.farmers.retain(|f| f.id != id);
    }

    /// Overwrite a record's fields and bump its version
    pub fn update_farmer(&mut self, id: u32, fields: Value) {
        if let Some(stored) = self.farmers.iter_mut().find(|f| f.id == id) {
            stored.fields = fields;
            stored.version += 1;
        }
    }

    /// Current `ETag` of a stored record
    pub fn etag(&self, id: u32) -> Option<String> {
        self.farmers
            .iter()
            .find(|f| f.id == id)
            .map(|f| format!("\"{}\"", f.version))
    }

    /// Serve the current records in pages of `page_size`, replacing any
    /// previously mounted resources
    pub async fn mount(&mut self, page_size: u32) {
        self.mount_inner(page_size, true).await;
    }

    /// Like [`MockHal::mount`] but without the per-record resources, so
    /// record fetches fail
    pub async fn mount_without_records(&mut self, page_size: u32) {
        self.mount_inner(page_size, false).await;
    }

    async fn mount_inner(&mut self, page_size: u32, with_records: bool) {
        for mock in self.mocks.drain(..) {
            mock.remove_async().await;
        }

        let root = json!({
            "_links": {
                self.rel.clone(): {
                    "href": format!("{}{{?page,size,sort}}", self.href(&self.collection_path())),
                    "templated": true
                },
                "profile": { "href": self.href("/api/profile") }
            }
        })
        .to_string();
        let mock = self
            .server
            .mock("GET", "/api")
            .with_status(200)
            .with_header("content-type", "application/hal+json")
            .with_body(root)
            .create_async()
            .await;
        self.mocks.push(mock);

        let schema = self.schema_entity().to_string();
        let profile_path = format!("/api/profile/{}", self.rel);
        let mock = self
            .server
            .mock("GET", profile_path.as_str())
            .match_header("accept", SCHEMA_JSON)
            .with_status(200)
            .with_header("content-type", SCHEMA_JSON)
            .with_body(schema)
            .create_async()
            .await;
        self.mocks.push(mock);

        if with_records {
            for stored in self.farmers.clone() {
                let path = format!("{}/{}", self.collection_path(), stored.id);
                let body = self.farmer_entity(&stored).to_string();
                let mock = self
                    .server
                    .mock("GET", path.as_str())
                    .with_status(200)
                    .with_header("content-type", "application/hal+json")
                    .with_header("ETag", &format!("\"{}\"", stored.version))
                    .with_body(body)
                    .create_async()
                    .await;
                self.mocks.push(mock);
            }
        }

        let size = page_size.max(1);
        let total_pages = self.total_pages(size);

        // Bare collection, used as the POST target lookup
        let bare = self.page_entity(0, 20).to_string();
        self.mount_page_query(String::new(), bare).await;

        for number in 0..total_pages.max(1) {
            let body = self.page_entity(number, size).to_string();
            if number == 0 {
                self.mount_page_query(format!("size={}", page_size), body.clone())
                    .await;
            }
            self.mount_page_query(format!("page={}&size={}", number, size), body)
                .await;
        }
    }

    async fn mount_page_query(&mut self, query: String, body: String) {
        let path = self.collection_path();
        let mock = self
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Exact(query))
            .with_status(200)
            .with_header("content-type", "application/hal+json")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    /// Expect a POST of exactly `fields` to the collection
    pub async fn expect_create(&mut self, fields: Value) -> Mock {
        let path = self.collection_path();
        self.server
            .mock("POST", path.as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(fields))
            .with_status(201)
            .create_async()
            .await
    }

    /// Expect a conditional PUT to a record. `status` is what the server
    /// answers, 200 for a current token and 412 for a stale one.
    pub async fn expect_update(&mut self, id: u32, if_match: &str, fields: Value, status: usize) -> Mock {
        let path = format!("{}/{}", self.collection_path(), id);
        self.server
            .mock("PUT", path.as_str())
            .match_header("if-match", if_match)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(fields))
            .with_status(status)
            .create_async()
            .await
    }

    pub async fn expect_delete(&mut self, id: u32) -> Mock {
        let path = format!("{}/{}", self.collection_path(), id);
        self.server
            .mock("DELETE", path.as_str())
            .with_status(204)
            .create_async()
            .await
    }

    fn total_pages(&self, size: u32) -> u32 {
        let count = self.farmers.len() as u32;
        count.div_ceil(size)
    }

    fn page_href(&self, number: u32, size: u32) -> String {
        format!(
            "{}?page={}&size={}",
            self.href(&self.collection_path()),
            number,
            size
        )
    }

    fn schema_entity(&self) -> Value {
        let mut properties = Map::new();
        for name in FARMER_ATTRIBUTES {
            properties.insert(
                name.to_string(),
                json!({ "title": name, "readOnly": false, "type": "string" }),
            );
        }
        json!({
            "title": "Farmer",
            "properties": properties,
            "definitions": {},
            "type": "object",
            "$schema": "http://json-schema.org/draft-04/schema#"
        })
    }

    fn farmer_entity(&self, stored: &StoredFarmer) -> Value {
        let href = self.farmer_href(stored.id);
        let mut entity = stored.fields.clone();
        if let Some(object) = entity.as_object_mut() {
            object.insert(
                "_links".to_string(),
                json!({
                    "self": { "href": href },
                    "farmer": { "href": href }
                }),
            );
        }
        entity
    }

    fn page_entity(&self, number: u32, size: u32) -> Value {
        let total_pages = self.total_pages(size);
        let start = (number * size) as usize;
        let items: Vec<Value> = self
            .farmers
            .iter()
            .skip(start)
            .take(size as usize)
            .map(|stored| self.farmer_entity(stored))
            .collect();

        let mut links = Map::new();
        if total_pages > 1 {
            links.insert("first".into(), json!({ "href": self.page_href(0, size) }));
        }
        if number > 0 {
            links.insert(
                "prev".into(),
                json!({ "href": self.page_href(number - 1, size) }),
            );
        }
        links.insert(
            "self".into(),
            json!({ "href": self.href(&self.collection_path()) }),
        );
        if number + 1 < total_pages {
            links.insert(
                "next".into(),
                json!({ "href": self.page_href(number + 1, size) }),
            );
        }
        if total_pages > 1 {
            links.insert(
                "last".into(),
                json!({ "href": self.page_href(total_pages - 1, size) }),
            );
        }
        links.insert(
            "profile".into(),
            json!({ "href": self.href(&format!("/api/profile/{}", self.rel)) }),
        );

        let mut entity = Map::new();
        if !items.is_empty() {
            entity.insert("_embedded".into(), json!({ self.rel.clone(): items }));
        }
        entity.insert("_links".into(), Value::Object(links));
        entity.insert(
            "page".into(),
            json!({
                "size": size,
                "totalElements": self.farmers.len(),
                "totalPages": total_pages,
                "number": number
            }),
        );
        Value::Object(entity)
    }
}
