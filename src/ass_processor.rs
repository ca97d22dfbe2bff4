use log::debug;

use crate::app_config::StyleConfig;
use crate::errors::MergeError;
use crate::subtitle_processor::SubtitleEntry;

// @module: ASS overlay document editing

/// Section header opening the style definitions block
const STYLES_HEADER: &str = "[V4+ Styles]";

/// Section header opening the dialogue events block
const EVENTS_HEADER: &str = "[Events]";

/// Parse state for the single forward scan over the overlay document.
///
/// The scan inserts content at exactly two points: the synthesized style line
/// immediately before `[Events]` (only if a style section was seen), and the
/// synthesized dialogue lines at the boundary that ends the events section,
/// which is either the next section header or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeStyles,
    InStyles,
    AfterStylesAwaitingEvents,
    InEvents,
    AfterEvents,
}

/// Merge parsed subtitle entries into an ASS overlay document.
///
/// Returns a complete new document; the input is never modified in place.
/// All unrelated lines pass through unchanged and in original order. Fails
/// with [`MergeError::NoEventsSection`] if the document has no `[Events]`
/// header, in which case nothing is written anywhere.
pub fn merge_subtitles(
    primary: &str,
    entries: &[SubtitleEntry],
    style: &StyleConfig,
) -> Result<String, MergeError> {
    let style_line = format_style_line(style);
    let style_prefix = format!("Style: {},", style.name);

    let mut state = ScanState::BeforeStyles;
    let mut style_already_defined = false;
    let mut output: Vec<String> = Vec::new();

    for line in primary.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            state = match state {
                ScanState::BeforeStyles => {
                    if trimmed == STYLES_HEADER {
                        ScanState::InStyles
                    } else if trimmed == EVENTS_HEADER {
                        // No style section seen, so no style line to inject
                        ScanState::InEvents
                    } else {
                        ScanState::BeforeStyles
                    }
                }
                ScanState::InStyles | ScanState::AfterStylesAwaitingEvents => {
                    if trimmed == EVENTS_HEADER {
                        if style_already_defined {
                            debug!("Style '{}' already defined, not injecting again", style.name);
                        } else {
                            output.push(style_line.clone());
                        }
                        ScanState::InEvents
                    } else if trimmed == STYLES_HEADER {
                        ScanState::InStyles
                    } else {
                        ScanState::AfterStylesAwaitingEvents
                    }
                }
                ScanState::InEvents => {
                    // The events section ends here, whatever the header is
                    push_dialogue_lines(&mut output, entries, &style.name);
                    ScanState::AfterEvents
                }
                ScanState::AfterEvents => ScanState::AfterEvents,
            };
        } else if state == ScanState::InStyles && trimmed.starts_with(&style_prefix) {
            style_already_defined = true;
        }

        output.push(line.to_string());
    }

    match state {
        // Events section runs to end of input
        ScanState::InEvents => push_dialogue_lines(&mut output, entries, &style.name),
        ScanState::AfterEvents => {}
        _ => return Err(MergeError::NoEventsSection),
    }

    let mut merged = output.join("\n");
    if primary.ends_with('\n') {
        merged.push('\n');
    }
    Ok(merged)
}

fn push_dialogue_lines(output: &mut Vec<String>, entries: &[SubtitleEntry], style_name: &str) {
    for entry in entries {
        output.push(format_dialogue_line(entry, style_name));
    }
}

/// One dialogue event referencing the synthesized style
fn format_dialogue_line(entry: &SubtitleEntry, style_name: &str) -> String {
    format!(
        "Dialogue: 0,{},{},{},,0,0,0,,{}",
        entry.format_ass_start(),
        entry.format_ass_end(),
        style_name,
        escape_dialogue_text(&entry.text)
    )
}

// Braces carry override-tag meaning in ASS dialogue text and line breaks
// are not allowed inside an event, so both are escaped.
fn escape_dialogue_text(text: &str) -> String {
    text.replace('{', "\\{")
        .replace('}', "\\}")
        .replace('\n', "\\N")
}

/// Style definition line for the synthesized subtitle style, bottom-centered
fn format_style_line(style: &StyleConfig) -> String {
    format!(
        "Style: {},{},{},&H00FFFFFF,&H00FFFFFF,&H00000000,&H80000000,1,0,0,0,100,100,0.00,0.00,1,2.0,0,2,20,20,{},1",
        style.name, style.font, style.font_size, style.margin_vertical
    )
}
