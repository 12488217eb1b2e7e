#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use age_sweep::action::cli::CliConfigAdapter;
use age_sweep::config::config::Cli;
use age_sweep::config::ports::{AppConfig, ConfigPort};
use age_sweep::models::remote::ObjectMetadata;
use age_sweep::service::dispatch::set_file_mtime;
use age_sweep::service::traits::i_service::RemoteStorage;
use clap::Parser;

pub const DAY: u64 = 86_400;

#[derive(Clone, Debug)]
pub struct StoredObject {
    pub content: Vec<u8>,
    pub metadata: ObjectMetadata,
}

/// 記憶體中的物件儲存，可複製共用以便測試後檢查內容
#[derive(Clone, Default)]
pub struct MemoryRemote {
    objects: Arc<Mutex<BTreeMap<(String, String), StoredObject>>>,
    fail_uploads: bool,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_uploads() -> Self {
        MemoryRemote {
            fail_uploads: true,
            ..Self::default()
        }
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn insert(&self, bucket: &str, key: &str, content: &[u8], metadata: ObjectMetadata) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                content: content.to_vec(),
                metadata,
            },
        );
    }
}

impl RemoteStorage for MemoryRemote {
    fn upload(&self, local_path: &Path, bucket: &str, key: &str, metadata: &ObjectMetadata) -> io::Result<()> {
        if self.fail_uploads {
            return Err(io::Error::new(io::ErrorKind::Other, "simulated upload failure"));
        }
        let content = fs::read(local_path)?;
        self.insert(bucket, key, &content, metadata.clone());
        Ok(())
    }

    fn download(&self, bucket: &str, key: &str, local_path: &Path) -> io::Result<ObjectMetadata> {
        let object = self
            .get(bucket, key)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, key.to_string()))?;
        fs::write(local_path, &object.content)?;
        Ok(object.metadata)
    }

    fn list_objects(&self, bucket: &str, prefix: &str) -> io::Result<Vec<String>> {
        Ok(self
            .keys(bucket)
            .into_iter()
            .filter(|k| k.starts_with(prefix))
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

pub fn config_from_args(args: &[&str]) -> io::Result<AppConfig> {
    let mut full = vec!["age_sweep"];
    full.extend_from_slice(args);
    let cli = Cli::try_parse_from(full).expect("valid arguments");
    CliConfigAdapter::new(cli).get_config()
}

/// 寫入檔案並將修改時間設為指定天數之前
pub fn write_aged(path: &Path, content: &str, days_old: u64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    let modified = SystemTime::now() - Duration::from_secs(days_old * DAY);
    set_file_mtime(path, modified).unwrap();
}

pub fn mtime_secs(path: &Path) -> u64 {
    fs::metadata(path)
        .unwrap()
        .modified()
        .unwrap()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
