use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::SystemTime;
use log::{debug, error, info, warn};
use crate::config::ports::AppConfig;
use crate::models::remote::{ObjectMetadata, LAST_MODIFIED_KEY};
use crate::models::scan::FileCandidate;
use crate::models::summary::RunSummary;
use crate::service::remote::{listing_prefix, namespace_prefix, object_key, restore_path};
use crate::service::report::Reporter;
use crate::service::traits::i_service::RemoteStorage;

pub fn set_file_mtime(path: &Path, modified: SystemTime) -> io::Result<()> {
    let file = File::options().write(true).open(path)?;
    file.set_modified(modified)
}

/// 過期檔案處理後的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Kept,
    Deleted,
}

impl Disposition {
    pub fn label(self) -> &'static str {
        match self {
            Disposition::Kept => "Matched",
            Disposition::Deleted => "Deleted",
        }
    }
}

/// 對過期檔案執行備份、刪除，或在還原模式下自遠端下載
pub struct ActionDispatcher<'a> {
    config: &'a AppConfig,
    remote: &'a dyn RemoteStorage,
    namespace: String,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(config: &'a AppConfig, remote: &'a dyn RemoteStorage) -> Self {
        ActionDispatcher {
            config,
            remote,
            namespace: namespace_prefix(&config.criteria.root),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn bucket(&self) -> io::Result<&'a str> {
        self.config.bucket().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "未指定 S3 bucket 名稱")
        })
    }

    /// 處理單一過期檔案：先備份再刪除，最後以一行回報結果
    pub fn handle_aged(&self, candidate: &FileCandidate, summary: &mut RunSummary, reporter: &Reporter) -> Disposition {
        summary.record_match(candidate.size);
        let disposition = self.dispose(candidate, summary, reporter);
        reporter.entry(disposition.label(), candidate);
        disposition
    }

    fn dispose(&self, candidate: &FileCandidate, summary: &mut RunSummary, reporter: &Reporter) -> Disposition {
        let mode = self.config.mode;
        let backed_up = if mode.uploads() {
            self.backup(candidate, summary, reporter)
        } else {
            true
        };

        if !mode.deletes() {
            return Disposition::Kept;
        }
        if !backed_up {
            if self.config.strict_backup {
                warn!("備份失敗，保留檔案：{}", candidate.path.display());
                summary.deletions_skipped += 1;
                return Disposition::Kept;
            }
            warn!("備份失敗，仍刪除檔案：{}", candidate.path.display());
        }

        match fs::remove_file(&candidate.path) {
            Ok(()) => {
                summary.record_deletion();
                Disposition::Deleted
            }
            Err(e) => {
                error!("刪除檔案失敗：{}：{}", candidate.path.display(), e);
                summary.delete_failures += 1;
                Disposition::Kept
            }
        }
    }

    fn backup(&self, candidate: &FileCandidate, summary: &mut RunSummary, reporter: &Reporter) -> bool {
        let bucket = match self.bucket() {
            Ok(bucket) => bucket,
            Err(e) => {
                error!("{}", e);
                summary.upload_failures += 1;
                return false;
            }
        };
        let key = object_key(&self.namespace, &self.config.criteria.root, &candidate.path);
        let metadata = ObjectMetadata::from_modified(candidate.modified);

        match self.remote.upload(&candidate.path, bucket, &key, &metadata) {
            Ok(()) => {
                summary.files_uploaded += 1;
                reporter.entry("Uploaded", candidate);
                debug!("已備份 {} 至 {}://{}/{}", candidate.path.display(), self.remote.backend_name(), bucket, key);
                true
            }
            Err(e) => {
                error!("上傳 '{}' 失敗：{}", candidate.path.display(), e);
                summary.upload_failures += 1;
                false
            }
        }
    }

    /// 還原命名空間下所有物件，不做年齡篩選
    pub fn restore_all(&self, summary: &mut RunSummary, reporter: &Reporter) -> io::Result<()> {
        let bucket = self.bucket()?;
        let prefix = listing_prefix(&self.namespace);
        let keys = match self.remote.list_objects(bucket, &prefix) {
            Ok(keys) => keys,
            Err(e) => {
                error!("無法列出 bucket '{}' 前綴 '{}' 的物件：{}", bucket, prefix, e);
                summary.restore_failures += 1;
                return Ok(());
            }
        };
        info!("準備還原 {} 個物件", keys.len());

        let root = &self.config.criteria.root;
        for key in keys {
            let Some(local_path) = restore_path(&self.namespace, root, &key) else {
                warn!("略過無法對應本地路徑的物件：{}", key);
                continue;
            };

            if let Some(parent) = local_path.parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    error!("無法建立目錄 '{}'：{}", parent.display(), e);
                    summary.restore_failures += 1;
                    continue;
                }
            }

            let metadata = match self.remote.download(bucket, &key, &local_path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    error!("下載 '{}' 失敗：{}", key, e);
                    summary.restore_failures += 1;
                    continue;
                }
            };

            match metadata.modified_time() {
                Some(modified) => {
                    if let Err(e) = set_file_mtime(&local_path, modified) {
                        warn!("無法還原修改時間：{}：{}", local_path.display(), e);
                    }
                }
                None => warn!("物件 '{}' 缺少 {} metadata，保留下載時間", key, LAST_MODIFIED_KEY),
            }

            summary.files_restored += 1;
            reporter.restored(&key, &local_path);
            reporter.progress(summary);
        }
        Ok(())
    }
}
