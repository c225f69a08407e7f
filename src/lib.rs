pub mod error;
pub mod feed;
pub mod rss;

// Re-export main types for convenience
pub use error::{EmitError, FeedError};
pub use feed::{Author, Enclosure, Feed, Image, Item, Link, load_feed, parse_feed, parse_feed_file};
pub use rss::{Channel, ChannelItem, Envelope, Guid, render, write_rss, write_rss_file};
