//! HAL link model and URI template expansion
//!
//! A HAL representation carries a `_links` object mapping relation names to
//! link objects (`{"href": "...", "templated": true}`) and an optional
//! `_embedded` object holding nested representations. Spring Data REST emits
//! templated hrefs such as `http://host/api/farmers{?page,size,sort}`; those
//! are expanded here with RFC 6570 form-style semantics.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Characters left intact in expanded template values (RFC 3986 unreserved)
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Query parameters attached to a relation hop, in insertion order
pub type Params = Vec<(String, String)>;

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,

    #[serde(default)]
    pub templated: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let templated = href.contains('{');
        Self {
            href,
            templated,
            title: None,
        }
    }

    /// Resolve this link to a concrete URL, substituting `params` into the
    /// template when the href is templated.
    ///
    /// Parameters the template does not name are appended as query pairs, so
    /// a plain href with params behaves like a query-string builder.
    pub fn resolve(&self, params: &[(String, String)]) -> String {
        expand_template(&self.href, params)
    }

    /// The href with any template expressions removed
    pub fn plain_href(&self) -> String {
        self.resolve(&[])
    }
}

/// Pagination relations a collection page may advertise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavRel {
    First,
    Prev,
    Next,
    Last,
}

impl NavRel {
    /// All navigation relations in display order
    pub const ALL: [NavRel; 4] = [NavRel::First, NavRel::Prev, NavRel::Next, NavRel::Last];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavRel::First => "first",
            NavRel::Prev => "prev",
            NavRel::Next => "next",
            NavRel::Last => "last",
        }
    }

    /// Button label rendered for this control
    pub fn label(&self) -> &'static str {
        match self {
            NavRel::First => "<<",
            NavRel::Prev => "<",
            NavRel::Next => ">",
            NavRel::Last => ">>",
        }
    }

    pub fn from_rel(rel: &str) -> Option<Self> {
        match rel {
            "first" => Some(NavRel::First),
            "prev" => Some(NavRel::Prev),
            "next" => Some(NavRel::Next),
            "last" => Some(NavRel::Last),
            _ => None,
        }
    }
}

impl fmt::Display for NavRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `_links` section of a HAL representation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    links: BTreeMap<String, Link>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `_links` object of a HAL entity.
    ///
    /// A relation whose value is an array of links resolves to its first
    /// entry. Entries without an `href` are skipped. A missing or non-object
    /// `_links` yields an empty set.
    pub fn from_entity(entity: &Value) -> Self {
        let mut links = BTreeMap::new();
        if let Some(map) = entity.get("_links").and_then(Value::as_object) {
            for (rel, value) in map {
                let candidate = match value {
                    Value::Array(items) => items.first(),
                    other => Some(other),
                };
                if let Some(link) =
                    candidate.and_then(|v| serde_json::from_value::<Link>(v.clone()).ok())
                {
                    links.insert(rel.clone(), link);
                }
            }
        }
        Self { links }
    }

    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.insert(rel, Link::new(href));
        self
    }

    pub fn insert(&mut self, rel: impl Into<String>, link: Link) {
        self.links.insert(rel.into(), link);
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.links.contains_key(rel)
    }

    /// Resolved href of a relation, with template expressions removed
    pub fn href(&self, rel: &str) -> Option<String> {
        self.get(rel).map(Link::plain_href)
    }

    pub fn nav(&self, rel: NavRel) -> Option<&Link> {
        self.get(rel.as_str())
    }

    /// Navigation relations present, in display order
    pub fn nav_rels(&self) -> Vec<NavRel> {
        NavRel::ALL
            .into_iter()
            .filter(|rel| self.contains(rel.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Representations embedded under `_embedded.<rel>`.
///
/// Returns an empty list when the section is absent, which is how an empty
/// collection page is commonly serialized.
pub fn embedded_items<'a>(entity: &'a Value, rel: &str) -> &'a [Value] {
    entity
        .get("_embedded")
        .and_then(|e| e.get(rel))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Expand an RFC 6570 URI template with the given parameters.
///
/// Supports simple (`{var}`), reserved (`{+var}`), form-style query
/// (`{?a,b}`) and query continuation (`{&a}`) expressions, which covers what
/// HAL servers emit. Unknown operators expand to nothing. Variables without
/// a value are dropped. Parameters not consumed by the template are appended
/// as query pairs.
pub fn expand_template(template: &str, params: &[(String, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; params.len()];
    let mut query_started = false;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unterminated expression: keep it literally
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let expr = &after[..close];
        rest = &after[close + 1..];

        let (op, vars) = match expr.chars().next() {
            Some(c @ ('?' | '&' | '+')) => (Some(c), &expr[1..]),
            Some(c) if "/#.;=,!@|".contains(c) => (Some(c), &expr[1..]),
            _ => (None, expr),
        };

        let mut values = Vec::new();
        for var in vars.split(',').map(|v| v.trim().trim_end_matches('*')) {
            if var.is_empty() {
                continue;
            }
            if let Some(idx) = params.iter().position(|(name, _)| name == var) {
                used[idx] = true;
                values.push((var, params[idx].1.as_str()));
            }
        }

        match op {
            Some('?') | Some('&') => {
                for (name, value) in values {
                    let already = query_started || out.contains('?');
                    out.push(if already { '&' } else { '?' });
                    query_started = true;
                    out.push_str(name);
                    out.push('=');
                    out.extend(utf8_percent_encode(value, UNRESERVED));
                }
            }
            Some('+') => {
                let joined: Vec<&str> = values.iter().map(|(_, v)| *v).collect();
                out.push_str(&joined.join(","));
            }
            None => {
                let joined: Vec<String> = values
                    .iter()
                    .map(|(_, v)| utf8_percent_encode(v, UNRESERVED).to_string())
                    .collect();
                out.push_str(&joined.join(","));
            }
            _ => {}
        }
    }
    out.push_str(rest);

    for (idx, (name, value)) in params.iter().enumerate() {
        if used[idx] {
            continue;
        }
        let already = query_started || out.contains('?');
        out.push(if already { '&' } else { '?' });
        query_started = true;
        out.extend(utf8_percent_encode(name, UNRESERVED));
        out.push('=');
        out.extend(utf8_percent_encode(value, UNRESERVED));
    }

    out
}
