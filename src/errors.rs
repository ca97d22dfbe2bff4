/*!
 * Error types for the danmerge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing companion subtitle files
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a timestamp does not match the `HH:MM:SS,mmm` notation
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// Error when a file decodes neither as UTF-8 nor as GBK
    #[error("Cannot decode file as UTF-8 or GBK: {0}")]
    UndecodableInput(PathBuf),
}

/// Errors that can occur while merging subtitles into an overlay document
#[derive(Error, Debug)]
pub enum MergeError {
    /// Error when the overlay document has no recognized dialogue section
    #[error("No [Events] section found in overlay document")]
    NoEventsSection,

    /// Error when the merged document cannot be written out
    #[error("Failed to write merged document to {path}: {source}")]
    WriteFailure {
        /// Destination path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error with subtitle parsing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle parsing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from the merge pipeline
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
