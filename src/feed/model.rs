// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A hyperlink as described by the generic feed model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(alias = "type")]
    pub mime_type: String,
    pub length: String,
}

impl Link {
    /// Create a link that only carries a target
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }
}

/// The person responsible for a feed or an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Artwork associated with a feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    pub width: u32,
    pub height: u32,
}

/// A media file attached to an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enclosure {
    pub url: String,
    /// Size in bytes, kept as text the way feeds carry it
    pub length: String,
    #[serde(alias = "type")]
    pub mime_type: String,
}

/// A single entry of a feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub title: String,
    pub link: Link,
    pub source: Option<Link>,
    pub author: Option<Author>,
    pub description: String,
    /// Globally unique identifier of the entry
    pub id: String,
    /// Whether `id` is a permanent URL. Left unset, the identifier is
    /// written without a permalink flag.
    pub is_permalink: Option<bool>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub created: Option<DateTime<FixedOffset>>,
    pub enclosure: Option<Enclosure>,
    /// Raw markup body of the entry
    pub content: String,
}

/// A format-agnostic publication and its entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub title: String,
    pub link: Link,
    pub description: String,
    pub author: Option<Author>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub created: Option<DateTime<FixedOffset>>,
    pub id: String,
    pub subtitle: String,
    pub items: Vec<Item>,
    pub copyright: String,
    pub image: Option<Image>,
}

impl Feed {
    /// Append an item to the end of the feed
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sort the items with the given comparator.
    ///
    /// The sort is stable: items comparing equal keep their relative order.
    pub fn sort_items<F>(&mut self, compare: F)
    where
        F: FnMut(&Item, &Item) -> Ordering,
    {
        self.items.sort_by(compare);
    }
}
