/*!
 * End-to-end merge workflow tests
 */

use std::fs;
use anyhow::Result;
use danmerge::app_config::Config;
use danmerge::app_controller::{Controller, MergeSummary};
use crate::common;

fn controller() -> Controller {
    Controller::with_config(Config::default()).expect("controller construction")
}

/// Test a full folder run: two companions merged, output files written
#[test]
fn test_run_folder_withPrimaryAndCompanions_shouldMergeEachPairing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_overlay(&dir, "show.danmaku.ass")?;
    common::create_test_srt(&dir, "show.ai-zh.srt")?;
    common::create_test_srt(&dir, "show.srt")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 2, skipped: 0 });

    let tagged = dir.join("show.ai-zh.merged.ass");
    let fallback = dir.join("show.merged.ass");
    assert!(tagged.exists());
    assert!(fallback.exists());

    let content = fs::read_to_string(&tagged)?;
    assert_eq!(content.matches("Style: Subtitle,").count(), 1);
    assert_eq!(content.matches("Dialogue: 0,").count(), 4); // 1 original + 3 merged
    assert!(content.contains("first danmaku line"));
    assert!(content.contains(",Subtitle,,0,0,0,,This is a test subtitle."));

    Ok(())
}

/// Test that primaries in nested directories are discovered
#[test]
fn test_run_folder_withNestedPrimary_shouldMergeInPlace() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subdir = temp_dir.path().join("season1");
    fs::create_dir(&subdir)?;

    common::create_test_overlay(&subdir.to_path_buf(), "ep01.danmaku.ass")?;
    common::create_test_srt(&subdir.to_path_buf(), "ep01.zh-CN.srt")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 1, skipped: 0 });
    assert!(subdir.join("ep01.zh-CN.merged.ass").exists());

    Ok(())
}

/// Test that a directory without primaries yields a zero tally, not an error
#[test]
fn test_run_folder_withNoPrimaries_shouldReturnZeroTally() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_srt(&temp_dir.path().to_path_buf(), "orphan.srt")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 0, skipped: 0 });

    Ok(())
}

/// Test that a primary without companions is counted as skipped
#[test]
fn test_run_folder_withNoCompanions_shouldCountSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_overlay(&temp_dir.path().to_path_buf(), "lonely.danmaku.ass")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 0, skipped: 1 });

    Ok(())
}

/// Test failure isolation: one bad pairing never aborts the others
#[test]
fn test_run_folder_withOneBadCompanion_shouldContinueWithOthers() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_overlay(&dir, "show.danmaku.ass")?;
    common::create_test_srt(&dir, "show.good.srt")?;
    // Valid in neither UTF-8 nor GBK
    fs::write(dir.join("show.bad.srt"), [0xFF, 0xFF, 0xFF])?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 1, skipped: 1 });
    assert!(dir.join("show.good.merged.ass").exists());
    assert!(!dir.join("show.bad.merged.ass").exists());

    Ok(())
}

/// Test that a companion without valid entries is skipped
#[test]
fn test_run_folder_withEmptyCompanion_shouldCountSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_overlay(&dir, "show.danmaku.ass")?;
    common::create_test_file(&dir, "show.empty.srt", "no blocks here\n")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 0, skipped: 1 });

    Ok(())
}

/// Test that an overlay without an events section skips its pairings
#[test]
fn test_run_folder_withOverlayMissingEvents_shouldCountSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "show.danmaku.ass", "[Script Info]\nTitle: t\n")?;
    common::create_test_srt(&dir, "show.zh.srt")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 0, skipped: 1 });

    Ok(())
}

/// Test that existing output files are silently overwritten
#[test]
fn test_run_folder_withExistingOutput_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_overlay(&dir, "show.danmaku.ass")?;
    common::create_test_srt(&dir, "show.zh.srt")?;
    let stale = common::create_test_file(&dir, "show.zh.merged.ass", "stale output")?;

    let summary = controller().run_folder(temp_dir.path())?;

    assert_eq!(summary, MergeSummary { merged: 1, skipped: 0 });
    let content = fs::read_to_string(&stale)?;
    assert!(!content.contains("stale output"));
    assert!(content.contains("Style: Subtitle,"));

    Ok(())
}

/// Test the single-file entry point
#[test]
fn test_run_file_withSinglePrimary_shouldMergeItsCompanions() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let primary = common::create_test_overlay(&dir, "show.danmaku.ass")?;
    common::create_test_srt(&dir, "show.zh.srt")?;

    let summary = controller().run_file(&primary)?;

    assert_eq!(summary, MergeSummary { merged: 1, skipped: 0 });
    assert!(dir.join("show.zh.merged.ass").exists());

    Ok(())
}

/// Test that run_file rejects paths without the primary suffix
#[test]
fn test_run_file_withNonPrimaryFile_shouldReturnError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let srt = common::create_test_srt(&temp_dir.path().to_path_buf(), "show.srt")?;

    assert!(controller().run_file(&srt).is_err());

    Ok(())
}

/// Test that a missing root directory is an error (not an empty tally)
#[test]
fn test_run_folder_withMissingRoot_shouldReturnError() {
    let result = controller().run_folder(std::path::Path::new("./no_such_directory_12345"));
    assert!(result.is_err());
}
