// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::EmitError;
use crate::feed::Feed;

use super::channel::{
    AtomLink, Channel, ChannelItem, Enclosure, Guid, Image, MediaContent, MediaThumbnail, TextInput,
};
use super::markup::{Attr, Markup};

/// The only RSS version this crate writes
pub const RSS_VERSION: &str = "2.0";

pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
pub const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const MEDIA_NS: &str = "http://search.yahoo.com/mrss/";
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Written in front of the root element, without a line break
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The `<rss>` root wrapping exactly one channel
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    pub channel: &'a Channel,
}

impl<'a> Envelope<'a> {
    pub fn new(channel: &'a Channel) -> Self {
        Self { channel }
    }

    /// Namespace declarations carried by the root element, in output order
    pub fn namespaces() -> [(&'static str, &'static str); 4] {
        [
            ("xmlns:content", CONTENT_NS),
            ("xmlns:dc", DUBLIN_CORE_NS),
            ("xmlns:media", MEDIA_NS),
            ("xmlns:atom", ATOM_NS),
        ]
    }

    /// Render the complete document, declaration included
    pub fn render(&self) -> Result<String, EmitError> {
        let mut buffer = Vec::with_capacity(1024 + self.channel.items.len() * 512);
        buffer.extend_from_slice(XML_DECLARATION.as_bytes());

        let mut markup = Markup::new(buffer);
        self.write_markup(&mut markup)?;
        let xml = String::from_utf8(markup.into_inner())?;

        debug!(
            items = self.channel.items.len(),
            bytes = xml.len(),
            "rendered RSS channel"
        );
        Ok(xml)
    }

    fn write_markup<W: Write>(&self, m: &mut Markup<W>) -> io::Result<()> {
        let mut attrs = vec![Attr::Always("version", RSS_VERSION)];
        attrs.extend(
            Self::namespaces()
                .into_iter()
                .map(|(name, uri)| Attr::Always(name, uri)),
        );

        m.start("rss", &attrs)?;
        write_channel(m, self.channel)?;
        m.end("rss")
    }
}

fn write_channel<W: Write>(m: &mut Markup<W>, channel: &Channel) -> io::Result<()> {
    m.start("channel", &[])?;
    m.required("title", &channel.title)?;
    m.required("link", &channel.link)?;
    m.required("description", &channel.description)?;
    m.optional("language", &channel.language)?;
    m.optional("copyright", &channel.copyright)?;
    m.optional("managingEditor", &channel.managing_editor)?;
    m.optional("webMaster", &channel.web_master)?;
    m.optional("pubDate", &channel.pub_date)?;
    m.optional("lastBuildDate", &channel.last_build_date)?;
    m.optional("category", &channel.category)?;
    m.optional("generator", &channel.generator)?;
    m.optional("docs", &channel.docs)?;
    m.optional("cloud", &channel.cloud)?;
    m.optional_number("ttl", channel.ttl)?;
    m.optional("rating", &channel.rating)?;
    m.optional("skipHours", &channel.skip_hours)?;
    m.optional("skipDays", &channel.skip_days)?;
    if let Some(link) = &channel.self_link {
        write_atom_link(m, link)?;
    }
    if let Some(image) = &channel.image {
        write_image(m, image)?;
    }
    if let Some(input) = &channel.text_input {
        write_text_input(m, input)?;
    }
    for item in &channel.items {
        write_item(m, item)?;
    }
    m.end("channel")
}

fn write_atom_link<W: Write>(m: &mut Markup<W>, link: &AtomLink) -> io::Result<()> {
    m.element(
        "atom:link",
        &[
            Attr::Always("href", &link.href),
            Attr::NonEmpty("rel", &link.rel),
            Attr::NonEmpty("type", &link.mime_type),
            Attr::NonEmpty("length", &link.length),
        ],
        "",
    )
}

fn write_image<W: Write>(m: &mut Markup<W>, image: &Image) -> io::Result<()> {
    m.start("image", &[])?;
    m.required("url", &image.url)?;
    m.required("title", &image.title)?;
    m.required("link", &image.link)?;
    m.optional_number("width", image.width)?;
    m.optional_number("height", image.height)?;
    m.end("image")
}

fn write_text_input<W: Write>(m: &mut Markup<W>, input: &TextInput) -> io::Result<()> {
    m.start("textInput", &[])?;
    m.required("title", &input.title)?;
    m.required("description", &input.description)?;
    m.required("name", &input.name)?;
    m.required("link", &input.link)?;
    m.end("textInput")
}

fn write_item<W: Write>(m: &mut Markup<W>, item: &ChannelItem) -> io::Result<()> {
    m.start("item", &[])?;
    m.required("title", &item.title)?;
    m.optional("media:title", &item.media_title)?;
    m.required("link", &item.link)?;
    m.required("description", &item.description)?;
    m.optional("media:description", &item.media_description)?;
    if let Some(content) = &item.content {
        m.cdata("content:encoded", &content.text)?;
    }
    m.optional("author", &item.author)?;
    for category in &item.category {
        m.required("category", category)?;
    }
    m.optional("comments", &item.comments)?;
    if let Some(media) = &item.media_content {
        write_media_content(m, media)?;
    }
    if let Some(enclosure) = &item.enclosure {
        write_enclosure(m, enclosure)?;
    }
    write_guid(m, &item.guid)?;
    m.optional("pubDate", &item.pub_date)?;
    m.optional("source", &item.source)?;
    m.optional("dc:creator", &item.creator)?;
    if let Some(thumbnail) = &item.media_thumbnail {
        write_media_thumbnail(m, thumbnail)?;
    }
    m.optional("media:copyright", &item.media_copyright)?;
    m.end("item")
}

fn write_guid<W: Write>(m: &mut Markup<W>, guid: &Guid) -> io::Result<()> {
    if guid.is_omitted() {
        return Ok(());
    }

    match guid {
        Guid::Structured {
            value,
            is_permalink,
        } => {
            let flag = if *is_permalink { "true" } else { "false" };
            m.element("guid", &[Attr::Always("isPermalink", flag)], value)
        }
        Guid::Flat(value) => m.required("guid", value),
        Guid::None => Ok(()),
    }
}

fn write_enclosure<W: Write>(m: &mut Markup<W>, enclosure: &Enclosure) -> io::Result<()> {
    m.element(
        "enclosure",
        &[
            Attr::Always("url", &enclosure.url),
            Attr::Always("length", &enclosure.length),
            Attr::Always("type", &enclosure.mime_type),
        ],
        "",
    )
}

fn write_media_content<W: Write>(m: &mut Markup<W>, media: &MediaContent) -> io::Result<()> {
    m.element(
        "media:content",
        &[
            Attr::Always("url", &media.url),
            Attr::NonEmpty("file_size", &media.file_size),
            Attr::NonEmpty("type", &media.mime_type),
            Attr::NonEmpty("medium", &media.medium),
            Attr::NonEmpty("isDefault", &media.is_default),
            Attr::NonEmpty("expression", &media.expression),
            Attr::NonEmpty("bitrate", &media.bitrate),
            Attr::NonEmpty("framerate", &media.framerate),
            Attr::NonEmpty("samplingrate", &media.sampling_rate),
            Attr::NonEmpty("channels", &media.channels),
            Attr::NonEmpty("duration", &media.duration),
            Attr::NonEmpty("height", &media.height),
            Attr::NonEmpty("width", &media.width),
            Attr::NonEmpty("lang", &media.lang),
        ],
        "",
    )
}

fn write_media_thumbnail<W: Write>(m: &mut Markup<W>, thumb: &MediaThumbnail) -> io::Result<()> {
    m.element(
        "media:thumbnail",
        &[
            Attr::Always("url", &thumb.url),
            Attr::NonEmpty("height", &thumb.height),
            // Attribute name is `with`, not `width`
            Attr::NonEmpty("with", &thumb.width),
            Attr::NonEmpty("time", &thumb.time),
        ],
        "",
    )
}

/// Render a channel as a complete RSS 2.0 document
pub fn render(channel: &Channel) -> Result<String, EmitError> {
    channel.envelope().render()
}

/// Render a channel and write it to a sink.
///
/// Nothing is written unless rendering succeeds.
pub fn write_rss<W: Write>(channel: &Channel, mut sink: W) -> Result<(), EmitError> {
    let xml = render(channel)?;
    sink.write_all(xml.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Render a channel into a file, replacing any previous contents
pub fn write_rss_file(channel: &Channel, path: &Path) -> Result<(), EmitError> {
    let xml = render(channel)?;
    std::fs::write(path, xml).map_err(|e| EmitError::OutputFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

impl Channel {
    /// Wrap the channel in its `<rss>` root
    pub fn envelope(&self) -> Envelope<'_> {
        Envelope::new(self)
    }
}

impl Feed {
    /// Translate the feed and render it as RSS 2.0
    pub fn to_rss(&self) -> Result<String, EmitError> {
        render(&Channel::from_feed(self))
    }

    /// Translate the feed and write it as RSS 2.0 to a sink
    pub fn write_rss<W: Write>(&self, sink: W) -> Result<(), EmitError> {
        write_rss(&Channel::from_feed(self), sink)
    }
}
