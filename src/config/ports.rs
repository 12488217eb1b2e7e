use std::io;
use crate::models::scan::ScanCriteria;
use crate::utils::duration::DurationSpec;

// 執行模式於設定階段決定，不會逐檔變化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    ScanOnly,
    Destroy,
    Backup,
    BackupThenDestroy,
    Restore,
}

impl RunMode {
    pub fn from_flags(destroy: bool, backup: bool, restore: bool) -> Self {
        match (restore, backup, destroy) {
            (true, _, _) => RunMode::Restore,
            (false, true, true) => RunMode::BackupThenDestroy,
            (false, true, false) => RunMode::Backup,
            (false, false, true) => RunMode::Destroy,
            (false, false, false) => RunMode::ScanOnly,
        }
    }

    pub fn uploads(self) -> bool {
        matches!(self, RunMode::Backup | RunMode::BackupThenDestroy)
    }

    pub fn deletes(self) -> bool {
        matches!(self, RunMode::Destroy | RunMode::BackupThenDestroy)
    }

    pub fn needs_remote(self) -> bool {
        self.uploads() || self == RunMode::Restore
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemoteConfig {
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

// 應用配置結構體，明確傳入各元件
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub criteria: ScanCriteria,
    pub cutoff: DurationSpec,
    pub cutoff_seconds: u64,
    pub mode: RunMode,
    /// 同時指定 --destroy 與 --restore-from-s3，需互動確認
    pub destroy_requested: bool,
    pub strict_backup: bool,
    pub verbose: bool,
    pub very_verbose: bool,
    pub human_readable: bool,
    pub remote: RemoteConfig,
}

impl AppConfig {
    pub fn needs_confirmation(&self) -> bool {
        self.mode == RunMode::Restore && self.destroy_requested
    }

    pub fn bucket(&self) -> Option<&str> {
        self.remote.bucket.as_deref()
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
