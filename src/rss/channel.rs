// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RSS-shaped intermediate tree.
//!
//! Scalar fields use an empty string (or zero) for "absent"; such fields are
//! left out of the markup. Sub-elements that carry attributes are `Option`s
//! and are only written when set.

/// An RSS `<channel>` ready to be rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub copyright: String,
    /// Editor address, `email (name)` by convention
    pub managing_editor: String,
    pub web_master: String,
    pub pub_date: String,
    pub last_build_date: String,
    pub category: String,
    pub generator: String,
    pub docs: String,
    pub cloud: String,
    /// Minutes the channel may be cached, zero when unset
    pub ttl: u32,
    pub rating: String,
    pub skip_hours: String,
    pub skip_days: String,
    /// `<atom:link>` pointing back at the feed itself
    pub self_link: Option<AtomLink>,
    pub image: Option<Image>,
    /// Deprecated by most readers, still part of RSS 2.0
    pub text_input: Option<TextInput>,
    pub items: Vec<ChannelItem>,
}

/// A single `<item>` of a channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelItem {
    pub title: String,
    pub media_title: String,
    pub link: String,
    pub description: String,
    pub media_description: String,
    pub content: Option<Content>,
    pub author: String,
    pub category: Vec<String>,
    pub comments: String,
    pub media_content: Option<MediaContent>,
    pub enclosure: Option<Enclosure>,
    pub guid: Guid,
    pub pub_date: String,
    pub source: String,
    /// Written as `<dc:creator>`
    pub creator: String,
    pub media_thumbnail: Option<MediaThumbnail>,
    pub media_copyright: String,
}

/// Full item body, written as `<content:encoded>` inside a CDATA section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub text: String,
}

impl Content {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Identifier of an item.
///
/// Feeds either carry a bare identifier or one flagged with whether it is
/// a permanent URL; both shapes are written as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Guid {
    #[default]
    None,
    /// `<guid>value</guid>`
    Flat(String),
    /// `<guid isPermalink="...">value</guid>`
    Structured { value: String, is_permalink: bool },
}

impl Guid {
    /// Whether the guid produces no markup at all
    pub fn is_omitted(&self) -> bool {
        matches!(self, Guid::None) || matches!(self, Guid::Flat(value) if value.is_empty())
    }
}

/// An attached media file, `<enclosure url length type>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enclosure {
    pub url: String,
    pub length: String,
    pub mime_type: String,
}

/// Channel artwork
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    pub width: u32,
    pub height: u32,
}

/// Search box description, `<textInput>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

/// Namespaced `<atom:link>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomLink {
    pub href: String,
    pub rel: String,
    pub mime_type: String,
    pub length: String,
}

/// Media RSS `<media:content>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaContent {
    pub url: String,
    pub file_size: String,
    pub mime_type: String,
    pub medium: String,
    pub is_default: String,
    pub expression: String,
    pub bitrate: String,
    pub framerate: String,
    pub sampling_rate: String,
    pub channels: String,
    pub duration: String,
    pub height: String,
    pub width: String,
    pub lang: String,
}

/// Media RSS `<media:thumbnail>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaThumbnail {
    pub url: String,
    pub height: String,
    pub width: String,
    pub time: String,
}
