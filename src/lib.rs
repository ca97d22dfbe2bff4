/*!
 * # danmerge - Danmaku overlay / subtitle merger
 *
 * A Rust library for batch-merging SRT subtitle files into ASS danmaku
 * overlay documents.
 *
 * ## Features
 *
 * - Recursively discover `.danmaku.ass` overlay files and their companion
 *   `.srt` subtitle files by naming convention
 * - Parse SRT blocks with UTF-8/GBK encoding fallback
 * - Convert SRT timestamps (`HH:MM:SS,mmm`) to ASS notation (`H:MM:SS.cc`)
 * - Inject a synthesized subtitle style plus one dialogue line per entry
 *   into the `[Events]` section, leaving all other content untouched
 * - Per-pairing failure isolation with a merged/skipped tally
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `time_utils`: Timestamp notation conversion
 * - `subtitle_processor`: SRT subtitle parsing
 * - `ass_processor`: ASS document editing and dialogue injection
 * - `file_pairing`: Companion discovery and output naming
 * - `file_utils`: File system operations
 * - `app_controller`: Merge orchestration over directory trees
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod ass_processor;
pub mod errors;
pub mod file_pairing;
pub mod file_utils;
pub mod subtitle_processor;
pub mod time_utils;

// Re-export main types for easier usage
pub use app_config::{Config, StyleConfig};
pub use app_controller::{Controller, MergeSummary};
pub use errors::{AppError, MergeError, SubtitleError};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
