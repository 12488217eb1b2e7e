use log::{debug, warn};
use walkdir::WalkDir;
use crate::models::scan::{ScanCriteria, WalkEvent};

/// 目錄走訪器：依條件產生目錄與候選檔案事件
pub struct TreeWalker<'a> {
    criteria: &'a ScanCriteria,
}

impl<'a> TreeWalker<'a> {
    pub fn new(criteria: &'a ScanCriteria) -> Self {
        TreeWalker { criteria }
    }

    /// 逐一產生事件；符號連結一律排除，也不會進入連結的目錄
    pub fn events(&self) -> impl Iterator<Item = WalkEvent> + 'a {
        let criteria = self.criteria;
        let mut walker = WalkDir::new(&criteria.root).follow_links(false);
        if !criteria.recursive {
            walker = walker.max_depth(1);
        }

        walker.into_iter().filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("無法讀取項目，跳過：{}", e);
                    return None;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // 非遞迴模式下只列出、不進入子目錄
                if !criteria.recursive && entry.depth() > 0 {
                    return None;
                }
                return Some(WalkEvent::Directory(entry.into_path()));
            }
            if file_type.is_symlink() {
                debug!("略過符號連結：{}", entry.path().display());
                return None;
            }
            if !file_type.is_file() {
                return None;
            }

            let name = entry.file_name().to_string_lossy();
            if !criteria.matches_name(&name) || !criteria.matches_path(entry.path()) {
                return None;
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    warn!("無法取得檔案資訊，跳過：{}：{}", entry.path().display(), e);
                    return None;
                }
            };
            let modified = match metadata.modified() {
                Ok(t) => t,
                Err(e) => {
                    warn!("無法取得修改時間，跳過：{}：{}", entry.path().display(), e);
                    return None;
                }
            };

            Some(WalkEvent::File {
                path: entry.into_path(),
                size: metadata.len(),
                modified,
            })
        })
    }
}
