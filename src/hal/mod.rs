// HAL hypermedia: `_links` and `_embedded` building blocks for representations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Link relations used across the API
pub struct LinkRelation;

impl LinkRelation {
    pub const SELF: &'static str = "self";
    pub const START_TRACKING: &'static str = "start-tracking";
    pub const RENEW: &'static str = "renew";
    pub const CONCLUDE: &'static str = "conclude";
    pub const COMMENTS: &'static str = "comments";
}

/// Relation name to link, serialized as a plain object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links holding only a `self` relation
    pub fn to_self(href: impl Into<String>) -> Self {
        Self::new().and(LinkRelation::SELF, href)
    }

    pub fn and(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.0.insert(rel.to_string(), Link { href: href.into() });
        self
    }

    /// Adds the relation only when `condition` holds
    pub fn and_if(self, condition: bool, rel: &str, href: impl FnOnce() -> String) -> Self {
        if condition {
            self.and(rel, href())
        } else {
            self
        }
    }
}

/// `{ "_embedded": { <rel>: [...] }, "_links": { "self": ... } }`
#[derive(Debug, Clone, Serialize)]
pub struct HalCollection<T> {
    #[serde(rename = "_embedded")]
    embedded: BTreeMap<&'static str, Vec<T>>,
    #[serde(rename = "_links")]
    links: Links,
}

impl<T: Serialize> HalCollection<T> {
    pub fn new(rel: &'static str, items: Vec<T>, self_href: impl Into<String>) -> Self {
        let mut embedded = BTreeMap::new();
        embedded.insert(rel, items);

        Self {
            embedded,
            links: Links::to_self(self_href),
        }
    }
}
