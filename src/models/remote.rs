use std::time::SystemTime;
use chrono::{DateTime, NaiveDateTime, Utc};

/// 物件中存放原始修改時間的 metadata 欄位
pub const LAST_MODIFIED_KEY: &str = "last-modified";

const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectMetadata {
    pub fn from_modified(modified: SystemTime) -> Self {
        ObjectMetadata {
            last_modified: Some(DateTime::<Utc>::from(modified)),
        }
    }

    pub fn last_modified_value(&self) -> Option<String> {
        self.last_modified
            .map(|ts| ts.format(LAST_MODIFIED_FORMAT).to_string())
    }

    /// 解析 `YYYY-MM-DDTHH:MM:SSZ`，也接受一般 RFC 3339 格式
    pub fn from_last_modified_value(value: &str) -> Self {
        let last_modified = NaiveDateTime::parse_from_str(value, LAST_MODIFIED_FORMAT)
            .map(|naive| naive.and_utc())
            .or_else(|_| DateTime::parse_from_rfc3339(value).map(|ts| ts.with_timezone(&Utc)))
            .ok();
        ObjectMetadata { last_modified }
    }

    pub fn modified_time(&self) -> Option<SystemTime> {
        self.last_modified.map(SystemTime::from)
    }
}
