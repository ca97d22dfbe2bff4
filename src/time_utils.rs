use crate::errors::SubtitleError;

// @module: Timestamp conversion between SRT and ASS notations

// SRT notation: HH:MM:SS,mmm (comma decimal, zero-padded hours)
// ASS notation: H:MM:SS.cc (dot decimal, unpadded hours, centiseconds)
//
// Millisecond-to-centisecond narrowing truncates toward zero, so a value
// like 00:00:59,995 can never carry into an invalid 60.00 seconds field.

/// Parse an SRT timestamp (`HH:MM:SS,mmm`) to milliseconds
pub fn parse_srt_timestamp(timestamp: &str) -> Result<u64, SubtitleError> {
    let malformed = || SubtitleError::MalformedTimestamp(timestamp.to_string());

    let parts: Vec<&str> = timestamp.split([':', ',']).collect();
    if parts.len() != 4 {
        return Err(malformed());
    }

    let hours: u64 = parts[0].parse().map_err(|_| malformed())?;
    let minutes: u64 = parts[1].parse().map_err(|_| malformed())?;
    let seconds: u64 = parts[2].parse().map_err(|_| malformed())?;
    let millis: u64 = parts[3].parse().map_err(|_| malformed())?;

    // Validate time components
    if minutes >= 60 || seconds >= 60 || millis >= 1000 {
        return Err(malformed());
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

/// Format a timestamp in milliseconds to ASS notation (`H:MM:SS.cc`)
pub fn format_ass_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;

    format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

/// Convert an SRT timestamp string directly to ASS notation - used by tests
/// and external consumers
#[allow(dead_code)]
pub fn srt_to_ass_timestamp(timestamp: &str) -> Result<String, SubtitleError> {
    Ok(format_ass_timestamp(parse_srt_timestamp(timestamp)?))
}
