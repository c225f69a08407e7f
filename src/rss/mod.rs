//! RSS 2.0 output: the RSS-shaped tree, the translation from the generic
//! feed model, and the markup emitter.

mod channel;
mod emit;
mod markup;
mod translate;

pub use channel::{
    AtomLink, Channel, ChannelItem, Content, Enclosure, Guid, Image, MediaContent, MediaThumbnail,
    TextInput,
};
pub use emit::{
    ATOM_NS, CONTENT_NS, DUBLIN_CORE_NS, Envelope, MEDIA_NS, RSS_VERSION, render, write_rss,
    write_rss_file,
};
pub use markup::escape;
pub use translate::{any_time_format, format_rfc1123z, item_author, managing_editor};
