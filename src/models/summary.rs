use std::time::Duration;

/// 整次執行的累計統計，只增不減
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub files_matched: u64,
    pub files_deleted: u64,
    pub directories_scanned: u64,
    /// 符合條件檔案的總大小；試跑時代表「將會刪除」的大小
    pub total_size_deleted: u64,
    pub files_too_recent: u64,
    pub files_uploaded: u64,
    pub upload_failures: u64,
    pub delete_failures: u64,
    pub deletions_skipped: u64,
    pub files_restored: u64,
    pub restore_failures: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn record_match(&mut self, size: u64) {
        self.files_matched += 1;
        self.total_size_deleted += size;
    }

    pub fn record_deletion(&mut self) {
        debug_assert!(self.files_deleted < self.files_matched);
        self.files_deleted += 1;
    }

    pub fn has_failures(&self) -> bool {
        self.upload_failures + self.delete_failures + self.restore_failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_accumulates_size() {
        let mut summary = RunSummary::default();
        summary.record_match(10);
        summary.record_match(32);
        summary.record_deletion();
        assert_eq!(summary.files_matched, 2);
        assert_eq!(summary.files_deleted, 1);
        assert_eq!(summary.total_size_deleted, 42);
        assert!(!summary.has_failures());
    }
}
