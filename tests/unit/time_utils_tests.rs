/*!
 * Tests for timestamp conversion between SRT and ASS notations
 */

use danmerge::errors::SubtitleError;
use danmerge::time_utils::{format_ass_timestamp, parse_srt_timestamp, srt_to_ass_timestamp};

/// Test SRT timestamp parsing to milliseconds
#[test]
fn test_parse_srt_timestamp_withValidTimestamp_shouldReturnMilliseconds() {
    let ms = parse_srt_timestamp("01:23:45,678").unwrap();
    assert_eq!(ms, 5_025_678);

    let ms = parse_srt_timestamp("00:00:00,000").unwrap();
    assert_eq!(ms, 0);
}

/// Test that malformed timestamps are rejected
#[test]
fn test_parse_srt_timestamp_withMalformedInput_shouldReturnError() {
    let malformed = [
        "00:00:07.560", // dot decimal belongs to the other notation
        "00:00:07",
        "0:00",
        "aa:bb:cc,ddd",
        "00:61:00,000", // minutes out of range
        "00:00:60,000", // seconds out of range
        "00:00:00,1000",
    ];

    for input in malformed {
        let result = parse_srt_timestamp(input);
        assert!(
            matches!(result, Err(SubtitleError::MalformedTimestamp(_))),
            "expected MalformedTimestamp for '{}'",
            input
        );
    }
}

/// Test ASS notation formatting: unpadded hours, centisecond precision
#[test]
fn test_format_ass_timestamp_withMilliseconds_shouldFormatAssNotation() {
    assert_eq!(format_ass_timestamp(0), "0:00:00.00");
    assert_eq!(format_ass_timestamp(7_560), "0:00:07.56");
    assert_eq!(format_ass_timestamp(5_025_678), "1:23:45.67");
    assert_eq!(format_ass_timestamp(36_000_000), "10:00:00.00");
}

/// Test that millisecond narrowing truncates instead of rounding, so the
/// seconds field can never overflow to 60
#[test]
fn test_format_ass_timestamp_withSubCentisecondRest_shouldTruncate() {
    assert_eq!(format_ass_timestamp(1_999), "0:00:01.99");
    assert_eq!(format_ass_timestamp(59_995), "0:00:59.99");
}

/// Test the combined conversion on reference values
#[test]
fn test_srt_to_ass_timestamp_withValidTimestamps_shouldConvert() {
    assert_eq!(srt_to_ass_timestamp("00:00:07,560").unwrap(), "0:00:07.56");
    assert_eq!(srt_to_ass_timestamp("00:00:08,300").unwrap(), "0:00:08.30");
    assert_eq!(srt_to_ass_timestamp("02:03:04,560").unwrap(), "2:03:04.56");
}

/// Test that the two notations are lossless inverses at centisecond precision
#[test]
fn test_srt_to_ass_timestamp_withCentisecondValues_shouldRoundTrip() {
    // All inputs have a zero sub-centisecond rest, so nothing is lost
    let cases = [
        ("00:00:07,560", 7_560),
        ("01:02:03,040", 3_723_040),
        ("11:59:59,990", 43_199_990),
    ];

    for (srt, ms) in cases {
        assert_eq!(parse_srt_timestamp(srt).unwrap(), ms);
        let ass = srt_to_ass_timestamp(srt).unwrap();
        assert_eq!(format_ass_timestamp(ms), ass);
    }
}
