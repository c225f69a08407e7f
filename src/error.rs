// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a generic feed description
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to read feed file {path}: {source}")]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read feed from stdin: {0}")]
    StdinReadFailed(#[source] std::io::Error),

    #[error("Failed to parse feed JSON: {0}")]
    JsonParseFailed(#[from] serde_json::Error),
}

/// Errors that can occur while rendering a channel as RSS markup
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write RSS markup: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Rendered RSS markup is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to write RSS file {path}: {source}")]
    OutputFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
