mod load;
mod model;

pub use load::{is_stdin, load_feed, parse_feed, parse_feed_file, read_feed_file};
pub use model::{Author, Enclosure, Feed, Image, Item, Link};
