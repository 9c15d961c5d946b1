//! Link-following resolver
//!
//! Hops across a HAL API by relation name: GET the root, look up the first
//! relation in its `_links`, GET that, and so on. The response of the final
//! hop is returned. Any missing relation or failed request aborts the chain.

use std::fmt;

use cibon_core::prelude::*;
use cibon_core::Params;

use crate::http::{HttpClient, Request, Response};

/// One relation hop, optionally parameterized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub rel: String,
    pub params: Params,
}

impl Hop {
    pub fn rel(rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter, substituted into the link template when the
    /// href is templated and appended otherwise
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }
}

impl From<&str> for Hop {
    fn from(rel: &str) -> Self {
        Hop::rel(rel)
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rel)?;
        if !self.params.is_empty() {
            let pairs: Vec<String> = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            write!(f, "({})", pairs.join(","))?;
        }
        Ok(())
    }
}

/// Follow `hops` starting at `root`, returning the last response.
///
/// Issues one GET for the root and one per hop, strictly in sequence.
pub async fn follow(client: &HttpClient, root: &str, hops: &[Hop]) -> Result<Response> {
    let mut response = client.send(Request::get(root)).await?;

    for hop in hops {
        let link = response
            .links()
            .get(&hop.rel)
            .cloned()
            .ok_or_else(|| Error::missing_link(&hop.rel, &response.url))?;
        let href = link.resolve(&hop.params);
        debug!("follow {} -> {}", hop, href);
        response = client.send(Request::get(href)).await?;
    }

    Ok(response)
}
