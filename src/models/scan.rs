use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use regex::Regex;
use crate::utils::glob::compile_glob;

/// 單次執行的掃描條件，建立後不再變動
#[derive(Debug, Clone)]
pub struct ScanCriteria {
    pub root: PathBuf,
    pub glob_pattern: String,
    pub regex_pattern: Option<String>,
    pub recursive: bool,
    glob: Regex,
    regex: Option<Regex>,
}

impl ScanCriteria {
    /// 編譯 glob 與正規表示式；無效的正規表示式在掃描開始前即回報錯誤
    pub fn new(
        root: impl Into<PathBuf>,
        glob_pattern: &str,
        regex_pattern: Option<&str>,
        recursive: bool,
    ) -> io::Result<Self> {
        let glob = compile_glob(glob_pattern)?;
        let regex = match regex_pattern {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("無效的正規表示式 '{}': {}", pattern, e),
                )
            })?),
            None => None,
        };
        Ok(ScanCriteria {
            root: root.into(),
            glob_pattern: glob_pattern.to_string(),
            regex_pattern: regex_pattern.map(String::from),
            recursive,
            glob,
            regex,
        })
    }

    pub fn matches_name(&self, file_name: &str) -> bool {
        self.glob.is_match(file_name)
    }

    /// 正規表示式比對完整路徑而非檔名
    pub fn matches_path(&self, path: &Path) -> bool {
        match &self.regex {
            Some(re) => re.is_match(&path.to_string_lossy()),
            None => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
    pub age_seconds: f64,
}

/// 走訪過程中產生的事件
#[derive(Debug)]
pub enum WalkEvent {
    Directory(PathBuf),
    File {
        path: PathBuf,
        size: u64,
        modified: SystemTime,
    },
}
