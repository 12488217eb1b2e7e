use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use crate::models::scan::FileCandidate;

/// 以單一基準時間計算年齡；整次執行只建立一次
#[derive(Debug, Clone, Copy)]
pub struct AgeClassifier {
    now: SystemTime,
    cutoff: SystemTime,
}

impl AgeClassifier {
    pub fn new(cutoff_seconds: u64, now: SystemTime) -> Self {
        let cutoff = now
            .checked_sub(Duration::from_secs(cutoff_seconds))
            .unwrap_or(UNIX_EPOCH);
        AgeClassifier { now, cutoff }
    }

    pub fn starting_now(cutoff_seconds: u64) -> Self {
        Self::new(cutoff_seconds, SystemTime::now())
    }

    pub fn cutoff(&self) -> SystemTime {
        self.cutoff
    }

    pub fn is_aged_out(&self, modified: SystemTime) -> bool {
        modified < self.cutoff
    }

    /// 未來時間的檔案回傳負值
    pub fn age_seconds(&self, modified: SystemTime) -> f64 {
        match self.now.duration_since(modified) {
            Ok(age) => age.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        }
    }

    pub fn candidate(&self, path: PathBuf, size: u64, modified: SystemTime) -> FileCandidate {
        FileCandidate {
            age_seconds: self.age_seconds(modified),
            path,
            size,
            modified,
        }
    }
}
