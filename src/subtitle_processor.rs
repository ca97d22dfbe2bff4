use std::path::{Path, PathBuf};
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::Result;
use log::debug;

use crate::file_utils::FileManager;
use crate::time_utils;

// @module: SRT subtitle parsing

// @const: SRT time-range regex, anchored to the start of the line
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone)]
pub struct SubtitleEntry {
    // @field: Opaque index label (first line of the source block)
    pub index: String,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text, may contain internal line breaks
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(index: String, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            index,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Start time in ASS notation
    pub fn format_ass_start(&self) -> String {
        time_utils::format_ass_timestamp(self.start_time_ms)
    }

    /// End time in ASS notation
    pub fn format_ass_end(&self) -> String {
        time_utils::format_ass_timestamp(self.end_time_ms)
    }
}

/// Collection of subtitle entries parsed from one companion file
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries, in file order
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Parse a companion subtitle file from disk.
    ///
    /// The file is decoded as UTF-8 first, falling back to GBK; only a file
    /// that fails both decodings is an error. An empty entry list is not an
    /// error here, the caller decides whether that is fatal.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_text_file(path)?;

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries: Self::parse_srt_string(&content),
        })
    }

    /// Parse SRT format content into subtitle entries.
    ///
    /// Content is split on blank-line boundaries into blocks. A block is kept
    /// only if it has at least three non-empty lines: an index label, a
    /// time-range line matching `HH:MM:SS,mmm --> HH:MM:SS,mmm`, and one or
    /// more text lines. Blocks failing the time-range pattern are dropped
    /// silently rather than failing the whole file.
    pub fn parse_srt_string(content: &str) -> Vec<SubtitleEntry> {
        let mut entries = Vec::new();
        let normalized = content.replace("\r\n", "\n");

        for block in normalized.split("\n\n") {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();

            if lines.len() < 3 {
                continue;
            }

            let index = lines[0];
            let time_line = lines[1];

            let Some(caps) = TIME_RANGE_REGEX.captures(time_line) else {
                debug!("Dropping block '{}': no valid time range in '{}'", index, time_line);
                continue;
            };

            let start = time_utils::parse_srt_timestamp(&caps[1]);
            let end = time_utils::parse_srt_timestamp(&caps[2]);
            let (Ok(start_time_ms), Ok(end_time_ms)) = (start, end) else {
                debug!("Dropping block '{}': out-of-range time components", index);
                continue;
            };

            // Text lines keep their internal line breaks
            let text = lines[2..].join("\n");
            entries.push(SubtitleEntry::new(
                index.to_string(),
                start_time_ms,
                end_time_ms,
                text,
            ));
        }

        entries
    }
}
