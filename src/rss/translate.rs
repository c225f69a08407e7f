// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, trace};

use crate::feed::{self, Author, Feed, Item};

use super::channel::{Channel, ChannelItem, Content, Enclosure, Guid, Image};

/// RFC 1123 with a numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`
const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Format a timestamp in RSS date notation, keeping its own offset
pub fn format_rfc1123z(time: &DateTime<FixedOffset>) -> String {
    time.format(RFC1123Z).to_string()
}

/// Format the first set timestamp among the candidates.
///
/// Returns an empty string when none of them is set.
pub fn any_time_format(candidates: &[Option<DateTime<FixedOffset>>]) -> String {
    candidates
        .iter()
        .flatten()
        .next()
        .map(format_rfc1123z)
        .unwrap_or_default()
}

/// Channel editor string: `email`, or `email (name)` when a name is known
pub fn managing_editor(author: Option<&Author>) -> String {
    match author {
        Some(author) if !author.name.is_empty() => {
            format!("{} ({})", author.email, author.name)
        }
        Some(author) => author.email.clone(),
        None => String::new(),
    }
}

/// Item author string. Only the name is used here, never the email.
pub fn item_author(author: Option<&Author>) -> String {
    author.map(|a| a.name.clone()).unwrap_or_default()
}

fn guid_for(item: &Item) -> Guid {
    if item.id.is_empty() {
        return Guid::None;
    }
    match item.is_permalink {
        Some(is_permalink) => Guid::Structured {
            value: item.id.clone(),
            is_permalink,
        },
        None => Guid::Flat(item.id.clone()),
    }
}

fn enclosure_for(item: &Item) -> Option<Enclosure> {
    let enclosure = item.enclosure.as_ref()?;
    if enclosure.mime_type.is_empty() || enclosure.length.is_empty() {
        debug!(
            item = %item.title,
            url = %enclosure.url,
            "dropping enclosure without type or length"
        );
        return None;
    }
    Some(Enclosure {
        url: enclosure.url.clone(),
        length: enclosure.length.clone(),
        mime_type: enclosure.mime_type.clone(),
    })
}

impl From<&feed::Image> for Image {
    fn from(image: &feed::Image) -> Self {
        Self {
            url: image.url.clone(),
            title: image.title.clone(),
            link: image.link.clone(),
            width: image.width,
            height: image.height,
        }
    }
}

impl ChannelItem {
    /// Create a channel item from a generic feed item
    pub fn from_item(item: &Item) -> Self {
        trace!(title = %item.title, "translating item");

        Self {
            title: item.title.clone(),
            link: item.link.href.clone(),
            description: item.description.clone(),
            content: (!item.content.is_empty()).then(|| Content::new(item.content.as_str())),
            author: item_author(item.author.as_ref()),
            enclosure: enclosure_for(item),
            guid: guid_for(item),
            pub_date: any_time_format(&[item.created, item.updated]),
            source: item
                .source
                .as_ref()
                .map(|s| s.href.clone())
                .unwrap_or_default(),
            ..Self::default()
        }
    }
}

impl Channel {
    /// Create a channel from a generic feed, keeping the item order
    pub fn from_feed(feed: &Feed) -> Self {
        Self {
            title: feed.title.clone(),
            link: feed.link.href.clone(),
            description: feed.description.clone(),
            copyright: feed.copyright.clone(),
            managing_editor: managing_editor(feed.author.as_ref()),
            pub_date: any_time_format(&[feed.created, feed.updated]),
            last_build_date: any_time_format(&[feed.updated]),
            image: feed.image.as_ref().map(Image::from),
            items: feed.items.iter().map(ChannelItem::from_item).collect(),
            ..Self::default()
        }
    }
}

impl From<&Feed> for Channel {
    fn from(feed: &Feed) -> Self {
        Channel::from_feed(feed)
    }
}
