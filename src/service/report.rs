use std::path::Path;
use crate::config::ports::{AppConfig, RunMode};
use crate::models::scan::FileCandidate;
use crate::models::summary::RunSummary;
use crate::utils::format::{format_seconds, format_size};
use crate::utils::utils::ProgressManager;

/// 報告器：詳細模式逐檔輸出，否則原地更新進度行，結束時輸出總結
pub struct Reporter {
    verbose: bool,
    very_verbose: bool,
    human_readable: bool,
    progress: ProgressManager,
}

impl Reporter {
    pub fn new(config: &AppConfig) -> Self {
        let verbose = config.verbose || config.very_verbose;
        Reporter {
            verbose,
            very_verbose: config.very_verbose,
            human_readable: config.human_readable,
            progress: ProgressManager::new(verbose),
        }
    }

    pub fn file_line(&self, action: &str, candidate: &FileCandidate) -> String {
        format!(
            "{}: {} (Size: {}, Age: {})",
            action,
            candidate.path.display(),
            format_size(candidate.size, self.human_readable),
            format_seconds(candidate.age_seconds, self.human_readable)
        )
    }

    pub fn entry(&self, action: &str, candidate: &FileCandidate) {
        if self.verbose {
            self.progress.println(&self.file_line(action, candidate));
        }
    }

    pub fn too_recent(&self, candidate: &FileCandidate) {
        if self.very_verbose {
            self.progress.println(&self.file_line("Too recent", candidate));
        }
    }

    pub fn restored(&self, key: &str, path: &Path) {
        if self.verbose {
            self.progress.println(&format!("Restored: {} -> {}", key, path.display()));
        }
    }

    pub fn progress(&self, summary: &RunSummary) {
        self.progress.update(
            summary.files_matched,
            summary.files_deleted,
            summary.directories_scanned,
        );
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.progress.elapsed()
    }

    pub fn finish(&self, summary: &RunSummary, config: &AppConfig, namespace: &str) {
        self.progress.finish();
        for line in render_summary(summary, config, namespace) {
            println!("{}", line);
        }
    }
}

pub fn render_header(config: &AppConfig, display_root: &Path) -> String {
    match config.mode {
        RunMode::Restore => format!(
            "Restoring {} from s3://{}...",
            display_root.display(),
            config.bucket().unwrap_or_default()
        ),
        _ => format!(
            "Scanning {} for files matching the pattern '{}' older than {}...",
            display_root.display(),
            config.criteria.glob_pattern,
            format_seconds(config.cutoff_seconds as f64, config.human_readable)
        ),
    }
}

pub fn render_summary(summary: &RunSummary, config: &AppConfig, namespace: &str) -> Vec<String> {
    let human = config.human_readable;
    let verbose = config.verbose || config.very_verbose;
    let bucket = config.bucket().unwrap_or_default();
    let mut lines = Vec::new();

    if config.mode == RunMode::Restore {
        lines.push(format!(
            "Restored {} files from s3://{}/{} into {} ({} failed).",
            summary.files_restored,
            bucket,
            namespace,
            config.criteria.root.display(),
            summary.restore_failures
        ));
    } else {
        let size = format_size(summary.total_size_deleted, human);
        lines.push(format!(
            "Found {} files matching '{}' in {} directories for a total size of {}",
            summary.files_matched, config.criteria.glob_pattern, summary.directories_scanned, size
        ));
        if config.mode.uploads() {
            lines.push(format!(
                "Uploaded {} files to s3://{}/{} ({} failed).",
                summary.files_uploaded, bucket, namespace, summary.upload_failures
            ));
        }
        if config.mode.deletes() {
            lines.push(format!(
                "Deleted {} files, total size: {}.",
                summary.files_deleted, size
            ));
            if summary.deletions_skipped > 0 {
                lines.push(format!(
                    "Kept {} files because their backup failed.",
                    summary.deletions_skipped
                ));
            }
            if summary.delete_failures > 0 {
                lines.push(format!("Failed to delete {} files.", summary.delete_failures));
            }
        } else if verbose && summary.files_matched > summary.files_deleted {
            lines.push(format!(
                "Use --destroy to delete {} matched files, total size: {}.",
                summary.files_matched - summary.files_deleted,
                size
            ));
        }
    }

    lines.push(format!(
        "Completed in {}.",
        format_seconds(summary.elapsed.as_secs_f64(), human)
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};
    use crate::config::ports::RemoteConfig;
    use crate::models::scan::ScanCriteria;
    use crate::utils::duration::DurationSpec;

    fn config(mode: RunMode, verbose: bool, human: bool) -> AppConfig {
        AppConfig {
            criteria: ScanCriteria::new("/data", "*.log", None, true).unwrap(),
            cutoff: DurationSpec::parse("1Y"),
            cutoff_seconds: 31_536_000,
            mode,
            destroy_requested: mode.deletes(),
            strict_backup: false,
            verbose,
            very_verbose: false,
            human_readable: human,
            remote: RemoteConfig {
                bucket: Some("archive".to_string()),
                ..RemoteConfig::default()
            },
        }
    }

    fn summary() -> RunSummary {
        RunSummary {
            files_matched: 3,
            files_deleted: 0,
            directories_scanned: 4,
            total_size_deleted: 2048,
            elapsed: Duration::from_millis(250),
            ..RunSummary::default()
        }
    }

    #[test]
    fn dry_run_summary_suggests_destroy_when_verbose() {
        let lines = render_summary(&summary(), &config(RunMode::ScanOnly, true, true), "data");
        assert_eq!(
            lines,
            vec![
                "Found 3 files matching '*.log' in 4 directories for a total size of 2.0 KB".to_string(),
                "Use --destroy to delete 3 matched files, total size: 2.0 KB.".to_string(),
                "Completed in 250.00 ms.".to_string(),
            ]
        );
    }

    #[test]
    fn destroy_summary_reports_deletions_in_raw_units() {
        let mut s = summary();
        s.files_deleted = 2;
        s.delete_failures = 1;
        let lines = render_summary(&s, &config(RunMode::Destroy, false, false), "data");
        assert!(lines.contains(&"Deleted 2 files, total size: 2048 B.".to_string()));
        assert!(lines.contains(&"Failed to delete 1 files.".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Use --destroy")));
    }

    #[test]
    fn backup_summary_names_bucket_and_namespace() {
        let mut s = summary();
        s.files_uploaded = 2;
        s.upload_failures = 1;
        let lines = render_summary(&s, &config(RunMode::Backup, false, true), "data");
        assert!(lines.contains(&"Uploaded 2 files to s3://archive/data (1 failed).".to_string()));
    }

    #[test]
    fn restore_summary() {
        let mut s = RunSummary::default();
        s.files_restored = 5;
        let lines = render_summary(&s, &config(RunMode::Restore, false, true), "data");
        assert_eq!(lines[0], "Restored 5 files from s3://archive/data into /data (0 failed).");
    }

    #[test]
    fn file_lines_use_selected_units() {
        let cfg = config(RunMode::ScanOnly, true, true);
        let reporter = Reporter::new(&cfg);
        let candidate = FileCandidate {
            path: PathBuf::from("/data/a.log"),
            size: 1536,
            modified: SystemTime::now(),
            age_seconds: 172_800.0,
        };
        assert_eq!(
            reporter.file_line("Matched", &candidate),
            "Matched: /data/a.log (Size: 1.5 KB, Age: 2.00 days)"
        );
    }

    #[test]
    fn header_mentions_cutoff() {
        let cfg = config(RunMode::ScanOnly, false, true);
        assert_eq!(
            render_header(&cfg, Path::new("/data")),
            "Scanning /data for files matching the pattern '*.log' older than 1 year..."
        );
    }
}
