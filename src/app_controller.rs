use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::fs;
use std::path::Path;

use crate::app_config::Config;
use crate::ass_processor;
use crate::errors::MergeError;
use crate::file_pairing;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;

// @module: Merge orchestration over primary overlay documents

/// Aggregate counters for one orchestrator run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Pairings merged and written successfully
    pub merged: usize,

    /// Pairings skipped, including primaries with no companions
    pub skipped: usize,
}

/// Main application controller for the merge workflow
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Process every primary overlay document under a directory tree.
    ///
    /// A directory containing no primaries is not an error; the run simply
    /// returns a zero tally. Failures on one pairing never abort the rest.
    pub fn run_folder(&self, root_dir: &Path) -> Result<MergeSummary> {
        if !FileManager::dir_exists(root_dir) {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {}",
                root_dir.display()
            ));
        }

        info!("Scanning directory: {}", root_dir.display());
        let primaries =
            FileManager::find_files_with_suffix(root_dir, file_pairing::PRIMARY_SUFFIX)?;
        info!(
            "Found {} {} file(s)",
            primaries.len(),
            file_pairing::PRIMARY_SUFFIX
        );

        // Folder-level progress over primaries
        let progress = ProgressBar::new(primaries.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = MergeSummary::default();
        for primary in &primaries {
            let file_name = primary
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress.set_message(format!("Processing: {}", file_name));

            let file_summary = self.process_primary(primary);
            summary.merged += file_summary.merged;
            summary.skipped += file_summary.skipped;

            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Merge completed: {} merged, {} skipped",
            summary.merged, summary.skipped
        );
        Ok(summary)
    }

    /// Process a single primary overlay document
    pub fn run_file(&self, primary: &Path) -> Result<MergeSummary> {
        if !FileManager::file_exists(primary) {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {}",
                primary.display()
            ));
        }
        if file_pairing::base_identifier(primary).is_none() {
            return Err(anyhow::anyhow!(
                "Input file is not a {} file: {}",
                file_pairing::PRIMARY_SUFFIX,
                primary.display()
            ));
        }

        let summary = self.process_primary(primary);
        info!(
            "Merge completed: {} merged, {} skipped",
            summary.merged, summary.skipped
        );
        Ok(summary)
    }

    /// Resolve companions for one primary and merge each of them.
    ///
    /// Failure isolation happens here, at pairing granularity: a companion
    /// that cannot be parsed, merged or written is logged and counted as
    /// skipped while the remaining companions still run.
    fn process_primary(&self, primary: &Path) -> MergeSummary {
        let mut summary = MergeSummary::default();
        let primary_name = primary
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        info!("Processing file: {}", primary_name);

        let companions = match file_pairing::find_companions(primary) {
            Ok(companions) => companions,
            Err(e) => {
                error!("Failed to list companions for {}: {}", primary.display(), e);
                summary.skipped += 1;
                return summary;
            }
        };

        if companions.is_empty() {
            warn!("No matching .{} files for {}, skipping", file_pairing::COMPANION_EXTENSION, primary_name);
            summary.skipped += 1;
            return summary;
        }

        debug!("Found {} companion file(s) for {}", companions.len(), primary_name);

        for companion in &companions {
            let output = file_pairing::derive_output_path(primary, companion);
            if output.exists() {
                info!(
                    "Overwriting existing file: {}",
                    output
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| output.display().to_string())
                );
            }

            match self.merge_pair(primary, companion, &output) {
                Ok(entry_count) => {
                    info!(
                        "Merged {} entries into {}",
                        entry_count,
                        output
                            .file_name()
                            .map(|name| name.to_string_lossy().to_string())
                            .unwrap_or_else(|| output.display().to_string())
                    );
                    summary.merged += 1;
                }
                Err(e) => {
                    warn!("Skipping {}: {}", companion.display(), e);
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// Merge a single primary/companion pairing and write the result
    fn merge_pair(&self, primary: &Path, companion: &Path, output: &Path) -> Result<usize> {
        let primary_content = FileManager::read_text_file(primary)?;

        let subtitles = SubtitleCollection::from_file(companion)?;
        if subtitles.entries.is_empty() {
            return Err(anyhow::anyhow!(
                "No subtitle entries found in {}",
                companion.display()
            ));
        }
        debug!("Parsed {} subtitle entries from {}", subtitles.entries.len(), companion.display());

        let merged =
            ass_processor::merge_subtitles(&primary_content, &subtitles.entries, &self.config.style)?;

        if let Some(parent) = output.parent() {
            FileManager::ensure_dir(parent)?;
        }
        fs::write(output, &merged).map_err(|source| MergeError::WriteFailure {
            path: output.to_path_buf(),
            source,
        })?;

        Ok(subtitles.entries.len())
    }
}
