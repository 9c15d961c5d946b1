//! Collection operations
//!
//! [`CollectionApi`] is the I/O half of the farmer desk: every user-facing
//! operation (load, navigate, create, update, delete) is a method here that
//! speaks HAL to the server and returns plain domain values. State changes
//! happen elsewhere.

use futures_util::future::try_join_all;
use serde_json::Value;
use std::time::Duration;

use cibon_core::prelude::*;
use cibon_core::{embedded_items, FieldValues, Links, Page, PageMetadata, Record, Schema};

use crate::follow::{follow, Hop};
use crate::http::{HttpClient, Request, Response, SCHEMA_JSON};

/// Result of a full load: the first page at the requested size together with
/// the schema the attribute columns come from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCollection {
    pub page: Page,
    pub schema: Schema,
    pub page_size: u32,
}

/// Client for one collection relation of a HAL API
#[derive(Debug, Clone)]
pub struct CollectionApi {
    http: HttpClient,
    root: String,
    rel: String,
}

impl CollectionApi {
    /// Create an API client for `rel` under the API rooted at `root`
    pub fn new(root: &str, rel: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::new(root, timeout)?;
        Ok(Self::with_client(http, rel))
    }

    pub fn with_client(http: HttpClient, rel: impl Into<String>) -> Self {
        let root = http.root().to_string();
        Self {
            http,
            root,
            rel: rel.into(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Name of the collection relation (and of its `_embedded` key)
    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Load the first page at `page_size`, its schema and every record on it.
    ///
    /// Phases run in order: collection, schema, records. Record fetches run
    /// concurrently and are joined; any failure fails the whole load.
    #[instrument(skip(self), fields(rel = %self.rel))]
    pub async fn load(&self, page_size: u32) -> Result<LoadedCollection> {
        let collection = follow(
            &self.http,
            &self.root,
            &[Hop::rel(&self.rel).param("size", page_size)],
        )
        .await?;

        let schema = self.fetch_schema(&collection).await?;
        let page = self.resolve_page(&collection).await?;

        info!(
            "loaded {} {} ({} attributes, page size {})",
            page.len(),
            self.rel,
            schema.len(),
            page_size
        );

        Ok(LoadedCollection {
            page,
            schema,
            page_size,
        })
    }

    /// Fetch the JSON schema behind a collection's `profile` link
    pub async fn fetch_schema(&self, collection: &Response) -> Result<Schema> {
        let profile = collection
            .links()
            .href("profile")
            .ok_or_else(|| Error::missing_link("profile", &collection.url))?;

        let response = self
            .http
            .send(Request::get(profile).accept(SCHEMA_JSON))
            .await?;
        Schema::from_value(&response.url, &response.entity)
    }

    /// Fetch the page behind a navigation href and all of its records.
    ///
    /// Schema and page size are not touched; callers keep what they have.
    pub async fn navigate(&self, href: &str) -> Result<Page> {
        let collection = self.http.send(Request::get(href)).await?;
        self.resolve_page(&collection).await
    }

    /// Fetch one record by its self link, capturing its `ETag`
    pub async fn fetch_record(&self, href: &str) -> Result<Record> {
        let response = self.http.send(Request::get(href)).await?;
        let etag = response.etag();
        if etag.is_none() {
            debug!("{} sent no ETag", response.url);
        }
        Record::from_entity(&response.url, &response.entity, etag)
    }

    /// POST a new record, then re-fetch the collection at `page_size`.
    ///
    /// Returns the links of the re-fetched page so the caller can move to
    /// its `last` page, where the new record ends up.
    pub async fn create(&self, fields: &FieldValues, page_size: u32) -> Result<Links> {
        let collection = follow(&self.http, &self.root, &[Hop::rel(&self.rel)]).await?;
        let target = collection
            .links()
            .href("self")
            .unwrap_or_else(|| collection.url.clone());

        self.http
            .send(Request::post(target, Value::Object(fields.clone())))
            .await?;
        info!("created {} record", self.rel);

        let refreshed = follow(
            &self.http,
            &self.root,
            &[Hop::rel(&self.rel).param("size", page_size)],
        )
        .await?;
        Ok(refreshed.links())
    }

    /// PUT new values to a record, conditional on its concurrency token.
    ///
    /// A record without a token is refused before anything is sent. A stale
    /// token comes back as [`Error::PreconditionFailed`].
    pub async fn update(&self, record: &Record, fields: &FieldValues) -> Result<()> {
        let etag = record
            .etag
            .as_deref()
            .ok_or_else(|| Error::MissingConcurrencyToken {
                url: record.self_href.clone(),
            })?;

        self.http
            .send(
                Request::put(&record.self_href, Value::Object(fields.clone()))
                    .header("If-Match", etag),
            )
            .await?;
        info!("updated {}", record.self_href);
        Ok(())
    }

    pub async fn delete(&self, href: &str) -> Result<()> {
        self.http.send(Request::delete(href)).await?;
        info!("deleted {}", href);
        Ok(())
    }

    /// Turn a fetched collection response into a page: resolve every
    /// embedded item through its own self link, concurrently.
    async fn resolve_page(&self, collection: &Response) -> Result<Page> {
        let hrefs = embedded_items(&collection.entity, &self.rel)
            .iter()
            .map(|item| {
                Links::from_entity(item)
                    .href("self")
                    .ok_or_else(|| Error::missing_link("self", &collection.url))
            })
            .collect::<Result<Vec<_>>>()?;

        let records = try_join_all(hrefs.iter().map(|href| self.fetch_record(href))).await?;

        Ok(Page::new(records, collection.links())
            .with_metadata(PageMetadata::from_entity(&collection.entity)))
    }
}
