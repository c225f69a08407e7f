// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element writer for the RSS document: numeric character references for
//! quotes, explicit end tags for empty elements, split CDATA sections
//! around `]]>`.

use std::borrow::Cow;
use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

/// Spaces per nesting level
const INDENT_SIZE: usize = 2;

const CDATA_END: &str = "]]>";

/// An attribute to put on a start tag
#[derive(Debug, Clone, Copy)]
pub enum Attr<'a> {
    /// Written even when the value is empty
    Always(&'a str, &'a str),
    /// Left out when the value is empty
    NonEmpty(&'a str, &'a str),
}

/// Indenting element writer on top of quick-xml
pub struct Markup<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> Markup<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', INDENT_SIZE),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Open an element
    pub fn start(&mut self, name: &str, attrs: &[Attr<'_>]) -> io::Result<()> {
        let mut start = BytesStart::new(name);
        for attr in attrs {
            let (key, value) = match *attr {
                Attr::Always(key, value) => (key, value),
                Attr::NonEmpty(_, "") => continue,
                Attr::NonEmpty(key, value) => (key, value),
            };
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(escape(value).into_owned().into_bytes()),
            });
        }
        self.writer.write_event(Event::Start(start))
    }

    /// Close an element
    pub fn end(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    /// An element holding escaped text; an empty text still yields a
    /// start/end pair on a single line
    pub fn element(&mut self, name: &str, attrs: &[Attr<'_>], text: &str) -> io::Result<()> {
        self.start(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escape(text))))?;
        self.end(name)
    }

    /// A text element that is always written
    pub fn required(&mut self, name: &str, text: &str) -> io::Result<()> {
        self.element(name, &[], text)
    }

    /// A text element that is skipped when empty
    pub fn optional(&mut self, name: &str, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.required(name, text)
    }

    /// A numeric element that is skipped when zero
    pub fn optional_number(&mut self, name: &str, value: u32) -> io::Result<()> {
        if value == 0 {
            return Ok(());
        }
        self.required(name, &value.to_string())
    }

    /// An element whose text is written verbatim inside CDATA; empty text
    /// gets no CDATA section at all
    pub fn cdata(&mut self, name: &str, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return self.element(name, &[], "");
        }

        self.start(name, &[])?;
        for section in cdata_sections(text) {
            self.writer
                .write_event(Event::CData(BytesCData::new(section)))?;
        }
        self.end(name)
    }
}

/// Escape text and attribute values.
///
/// Quotes become numeric references and characters outside the XML
/// character range become U+FFFD.
pub fn escape(s: &str) -> Cow<'_, str> {
    // Fast path: nothing to replace
    if !s.chars().any(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            c if !is_xml_char(c) => escaped.push('\u{FFFD}'),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\'' | '&' | '<' | '>' | '\t' | '\n' | '\r') || !is_xml_char(c)
}

/// Characters allowed by the XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{09}' | '\u{0A}' | '\u{0D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Split text into CDATA payloads so that no section contains `]]>`
fn cdata_sections(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split(CDATA_END).collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let mut section = String::with_capacity(part.len() + 3);
            if i > 0 {
                section.push('>');
            }
            section.push_str(part);
            if i < last {
                section.push_str("]]");
            }
            section
        })
        .collect()
}
