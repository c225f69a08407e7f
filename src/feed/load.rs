// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Read;
use std::path::Path;

use crate::error::FeedError;

use super::model::Feed;

/// Source name that selects standard input
const STDIN_SOURCE: &str = "-";

/// Parse a JSON feed description into a Feed
pub fn parse_feed(json_bytes: &[u8]) -> Result<Feed, FeedError> {
    let feed = serde_json::from_slice(json_bytes)?;
    Ok(feed)
}

/// Read raw feed bytes from a local file (without parsing)
pub fn read_feed_file(path: &Path) -> Result<Vec<u8>, FeedError> {
    std::fs::read(path).map_err(|e| FeedError::FileReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a JSON feed description from a local file
pub fn parse_feed_file(path: &Path) -> Result<Feed, FeedError> {
    let bytes = read_feed_file(path)?;
    parse_feed(&bytes)
}

/// Determine if a source argument refers to standard input
pub fn is_stdin(source: &str) -> bool {
    source == STDIN_SOURCE
}

/// Load a feed from a file path, or from stdin when the source is "-"
pub fn load_feed(source: &str) -> Result<Feed, FeedError> {
    if is_stdin(source) {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(FeedError::StdinReadFailed)?;
        parse_feed(&bytes)
    } else {
        parse_feed_file(Path::new(source))
    }
}
